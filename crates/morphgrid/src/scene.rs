//! Terminal projection of the stage.
//!
//! Objects are rotated by the group transform, viewed from a fixed corner
//! camera, and painted back to front as blocks of colored cells.

use std::f32::consts::FRAC_PI_4;

use glam::{Mat3, Vec3};
use morphgrid_engine::{GroupTransform, Stage};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Distance from the camera to the origin.
const CAMERA_DISTANCE: f32 = 14.0;
/// Camera elevation, looking down from the (1, 1, 1) diagonal.
const VIEW_PITCH: f32 = 0.615_479_7;
const VIEW_YAW: f32 = FRAC_PI_4;
/// Focal length for a ~60° vertical field of view.
const FOCAL: f32 = 1.732;
/// Points closer than this to the camera are culled.
const NEAR_PLANE: f32 = 0.1;
/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;
/// Edge length of one cube in world units.
const CUBE_SIZE: f32 = 0.9;

const BLOCK: &str = "█";

/// An object mapped onto the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub column: f32,
    pub row: f32,
    pub depth: f32,
    /// Half of the footprint height, in rows.
    pub half_extent: f32,
    /// Horizontal stretch of the footprint from the cube's local spin.
    pub width_factor: f32,
}

/// Apparent width of a unit cube turned by `spin` about its vertical axis.
pub fn footprint_width(spin: f32) -> f32 {
    spin.cos().abs() + spin.sin().abs()
}

/// Project a world point into `area`, or `None` behind the camera.
pub fn project(
    point: Vec3,
    scale: f32,
    spin: f32,
    group: GroupTransform,
    area: Rect,
) -> Option<Projected> {
    let world = Mat3::from_rotation_y(group.yaw) * Mat3::from_rotation_x(group.pitch) * point;
    let view = Mat3::from_rotation_x(VIEW_PITCH) * Mat3::from_rotation_y(-VIEW_YAW) * world;

    let depth = CAMERA_DISTANCE - view.z;
    if depth <= NEAR_PLANE {
        return None;
    }

    let half_height = area.height as f32 / 2.0;
    let center_column = area.x as f32 + area.width as f32 / 2.0;
    let center_row = area.y as f32 + half_height;
    let perspective = FOCAL / depth * half_height;

    Some(Projected {
        column: center_column + view.x * perspective * CELL_ASPECT,
        row: center_row - view.y * perspective,
        depth,
        half_extent: CUBE_SIZE * scale * perspective / 2.0,
        width_factor: footprint_width(spin),
    })
}

/// Draw the stage into `area`.
pub fn render(frame: &mut Frame, area: Rect, stage: &Stage) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let group = stage.group();
    let mut projected: Vec<(Projected, Color)> = stage
        .objects()
        .iter()
        .filter_map(|object| {
            let p = project(object.position, object.scale, object.spin, group, area)?;
            Some((p, shade(object.color.to_rgb8(), p.depth)))
        })
        .collect();

    // Back to front
    projected.sort_by(|a, b| b.0.depth.total_cmp(&a.0.depth));

    let mut canvas = Canvas::new(area);
    for (p, color) in &projected {
        canvas.fill_block(p, *color);
    }
    frame.render_widget(Paragraph::new(canvas.into_lines()), area);
}

/// Darken colors with distance from the camera.
fn shade((r, g, b): (u8, u8, u8), depth: f32) -> Color {
    let factor = (CAMERA_DISTANCE / depth).clamp(0.55, 1.0);
    Color::Rgb(
        (r as f32 * factor) as u8,
        (g as f32 * factor) as u8,
        (b as f32 * factor) as u8,
    )
}

/// Cell buffer the size of the drawing area.
#[derive(Debug)]
struct Canvas {
    area: Rect,
    cells: Vec<Option<Color>>,
}

impl Canvas {
    fn new(area: Rect) -> Self {
        Self {
            area,
            cells: vec![None; area.width as usize * area.height as usize],
        }
    }

    /// Paint the footprint of a projected cube, clipped to the canvas.
    fn fill_block(&mut self, p: &Projected, color: Color) {
        let half_rows = p.half_extent.max(0.5);
        let half_columns = half_rows * CELL_ASPECT * p.width_factor;

        let top = (p.row - half_rows).round() as i32 - self.area.y as i32;
        let bottom = (p.row + half_rows).round() as i32 - self.area.y as i32;
        let left = (p.column - half_columns).round() as i32 - self.area.x as i32;
        let right = (p.column + half_columns).round() as i32 - self.area.x as i32;

        let width = self.area.width as i32;
        let height = self.area.height as i32;
        for y in top.max(0)..bottom.max(top + 1).min(height) {
            for x in left.max(0)..right.max(left + 1).min(width) {
                self.cells[(y * width + x) as usize] = Some(color);
            }
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.area.width as usize;
        self.cells
            .chunks(width.max(1))
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Some(color) => Span::styled(BLOCK, Style::new().fg(*color)),
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
