//! Formation target layouts.
//!
//! Every layout is a pure function of the object index, the object count and
//! (for [`Mode::Rest`]) the object's home position.

use std::f32::consts::PI;

use glam::Vec3;
use morphgrid_core::{Mode, Rgb};

use crate::registry::ObjectRegistry;

const SPHERE_RADIUS: f32 = 3.0;

const SPIRAL_ANGLE_STEP: f32 = 0.4;
const SPIRAL_RADIUS_STEP: f32 = 0.6;
const SPIRAL_RADIUS_SCALE: f32 = 0.2;
const SPIRAL_RISE: f32 = 0.15;

const WAVE_STEP: f32 = 0.4;
const WAVE_FREQUENCY: f32 = 0.6;
const WAVE_AMPLITUDE: f32 = 1.2;

const HELIX_ANGLE_STEP: f32 = 0.35;
const HELIX_RISE: f32 = 0.18;
const HELIX_RADIUS: f32 = 1.6;
const HELIX_STRAND_A: Rgb = Rgb::from_hex(0x00b4ff);
const HELIX_STRAND_B: Rgb = Rgb::from_hex(0xff3a5c);
const HELIX_AXIS: Rgb = Rgb::from_hex(0xffff99);

const RIBBON_PHASE_STEP: f32 = 0.5;
const RIBBON_Z_STEP: f32 = 0.25;
const RIBBON_Z_OFFSET: f32 = 3.0;
const RIBBON_BOB: f32 = 0.3;
const RIBBON_RED_LIFT: f32 = 0.3;
const RIBBON_BLUE: Rgb = Rgb::from_hex(0x32a8ff);
const RIBBON_RED: Rgb = Rgb::from_hex(0xff4a5c);

/// Where one object should end up in a formation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub position: Vec3,
    /// Accent color for formations that paint objects.
    pub accent: Option<Rgb>,
}

impl Target {
    fn plain(position: Vec3) -> Self {
        Self {
            position,
            accent: None,
        }
    }

    fn accented(position: Vec3, accent: Rgb) -> Self {
        Self {
            position,
            accent: Some(accent),
        }
    }
}

/// Targets for every object in the registry, in index order.
pub fn targets(mode: Mode, registry: &ObjectRegistry) -> Vec<Target> {
    let count = registry.len();
    match mode {
        Mode::Rest => registry.iter().map(|o| Target::plain(o.home())).collect(),
        Mode::Sphere => (0..count).map(|i| Target::plain(sphere(i, count))).collect(),
        Mode::Spiral => (0..count).map(|i| Target::plain(spiral(i, count))).collect(),
        Mode::Wave => (0..count).map(|i| Target::plain(wave(i, count))).collect(),
        Mode::HelixDouble => (0..count).map(|i| helix_double(i, count)).collect(),
        Mode::HelixCartoon => helix_cartoon(count),
    }
}

/// Index offset that centers a layout on the middle object.
fn centered(index: usize, count: usize) -> f32 {
    index as f32 - (count / 2) as f32
}

/// Fibonacci-style distribution over a sphere.
pub fn sphere(index: usize, count: usize) -> Vec3 {
    let n = count.max(1) as f32;
    let phi = (2.0 * (index as f32 / n) - 1.0).clamp(-1.0, 1.0).acos();
    let theta = (n * PI).sqrt() * phi;
    Vec3::new(
        SPHERE_RADIUS * phi.sin() * theta.cos(),
        SPHERE_RADIUS * phi.cos(),
        SPHERE_RADIUS * phi.sin() * theta.sin(),
    )
}

/// Widening spiral climbing the y axis from `-count / 2`.
pub fn spiral(index: usize, count: usize) -> Vec3 {
    let i = index as f32;
    let angle = i * SPIRAL_ANGLE_STEP;
    let radius = i * SPIRAL_RADIUS_STEP * SPIRAL_RADIUS_SCALE;
    Vec3::new(
        angle.cos() * radius,
        i * SPIRAL_RISE - count as f32 / 2.0,
        angle.sin() * radius,
    )
}

/// Sinusoidal line along the x axis.
pub fn wave(index: usize, count: usize) -> Vec3 {
    let i = index as f32;
    Vec3::new(
        centered(index, count) * WAVE_STEP,
        (i * WAVE_FREQUENCY).sin() * WAVE_AMPLITUDE,
        (i * WAVE_FREQUENCY * 0.7).cos() * WAVE_AMPLITUDE * 0.5,
    )
}

/// Two strands half a turn apart, with every third object on the axis.
pub fn helix_double(index: usize, count: usize) -> Target {
    let angle = index as f32 * HELIX_ANGLE_STEP;
    let height = centered(index, count) * HELIX_RISE;

    match index % 3 {
        0 => Target::accented(
            Vec3::new(angle.cos() * HELIX_RADIUS, height, angle.sin() * HELIX_RADIUS),
            HELIX_STRAND_A,
        ),
        1 => Target::accented(
            Vec3::new(
                (angle + PI).cos() * HELIX_RADIUS,
                height,
                (angle + PI).sin() * HELIX_RADIUS,
            ),
            HELIX_STRAND_B,
        ),
        _ => Target::accented(Vec3::new(0.0, height, 0.0), HELIX_AXIS),
    }
}

/// Two mirrored ribbons; even objects form the blue ribbon, odd the red.
///
/// Each ribbon keeps its own running counter, so neighbours within a ribbon
/// are one phase step apart regardless of interleaving.
pub fn helix_cartoon(count: usize) -> Vec<Target> {
    let mut blue_index = 0usize;
    let mut red_index = 0usize;

    (0..count)
        .map(|i| {
            let blue = i % 2 == 0;
            let step = if blue {
                blue_index += 1;
                blue_index - 1
            } else {
                red_index += 1;
                red_index - 1
            };
            let t = step as f32 * RIBBON_PHASE_STEP;
            let (x, lift, accent) = if blue {
                (t.sin(), 0.0, RIBBON_BLUE)
            } else {
                (-t.sin(), RIBBON_RED_LIFT, RIBBON_RED)
            };
            let position = Vec3::new(
                x,
                (t * 2.0).sin() * RIBBON_BOB + lift,
                i as f32 * RIBBON_Z_STEP - RIBBON_Z_OFFSET,
            );
            Target::accented(position, accent)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Arrangement;

    const N: usize = 27;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_rest_targets_are_homes() {
        let registry = ObjectRegistry::create_objects(N, Arrangement::Cube);
        let targets = targets(Mode::Rest, &registry);
        for (object, target) in registry.iter().zip(&targets) {
            assert_eq!(target.position, object.home());
            assert!(target.accent.is_none());
        }
    }

    #[test]
    fn test_targets_are_deterministic() {
        let registry = ObjectRegistry::create_objects(N, Arrangement::Cube);
        for mode in Mode::TOGGLES {
            assert_eq!(targets(mode, &registry), targets(mode, &registry));
            assert_eq!(targets(mode, &registry).len(), N);
        }
    }

    #[test]
    fn test_sphere_center_object() {
        let phi = (2.0 * 13.0 / 27.0 - 1.0f32).acos();
        let theta = (27.0 * PI).sqrt() * phi;
        let expected = Vec3::new(
            3.0 * phi.sin() * theta.cos(),
            3.0 * phi.cos(),
            3.0 * phi.sin() * theta.sin(),
        );
        assert_close(sphere(13, N), expected);
    }

    #[test]
    fn test_sphere_points_on_radius() {
        for i in 0..N {
            assert!((sphere(i, N).length() - SPHERE_RADIUS).abs() < 1e-4);
        }
        // First object sits at the bottom pole
        assert_close(sphere(0, N), Vec3::new(0.0, -3.0, 0.0));
    }

    #[test]
    fn test_spiral() {
        assert_close(spiral(0, N), Vec3::new(0.0, -13.5, 0.0));
        assert_close(spiral(13, N), {
            let a = 13.0f32 * 0.4;
            let r = 0.6 * 13.0 * 0.2;
            Vec3::new(a.cos() * r, 13.0 * 0.15 - 13.5, a.sin() * r)
        });
        // Half of an odd count is not truncated
        assert!((spiral(26, N).y - (26.0 * 0.15 - 13.5)).abs() < 1e-5);
        assert!((spiral(0, 4).y + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_wave() {
        assert_close(wave(13, N), {
            Vec3::new(0.0, (13.0f32 * 0.6).sin() * 1.2, (13.0f32 * 0.42).cos() * 0.6)
        });
        assert_close(wave(0, N), Vec3::new(-13.0 * 0.4, 0.0, 0.6));
    }

    #[test]
    fn test_helix_double_classes() {
        let a = helix_double(0, N);
        assert_eq!(a.accent, Some(HELIX_STRAND_A));
        assert_close(a.position, Vec3::new(1.6, -13.0 * 0.18, 0.0));

        let b = helix_double(1, N);
        assert_eq!(b.accent, Some(HELIX_STRAND_B));
        let angle = 0.35f32 + PI;
        assert_close(
            b.position,
            Vec3::new(angle.cos() * 1.6, -12.0 * 0.18, angle.sin() * 1.6),
        );

        let axis = helix_double(2, N);
        assert_eq!(axis.accent, Some(HELIX_AXIS));
        assert_eq!(axis.position.x, 0.0);
        assert_eq!(axis.position.z, 0.0);
    }

    #[test]
    fn test_helix_double_strand_radius() {
        for i in (0..N).filter(|i| i % 3 != 2) {
            let p = helix_double(i, N).position;
            assert!((Vec3::new(p.x, 0.0, p.z).length() - HELIX_RADIUS).abs() < 1e-5);
        }
    }

    #[test]
    fn test_helix_cartoon_ribbons() {
        let targets = helix_cartoon(N);
        assert_eq!(targets.len(), N);

        // Objects 2 and 3 are each the second member of their ribbon
        let t = 0.5f32;
        assert_close(targets[2].position, Vec3::new(t.sin(), (2.0 * t).sin() * 0.3, -2.5));
        assert_close(
            targets[3].position,
            Vec3::new(-t.sin(), (2.0 * t).sin() * 0.3 + 0.3, -2.25),
        );
        assert_eq!(targets[2].accent, Some(RIBBON_BLUE));
        assert_eq!(targets[3].accent, Some(RIBBON_RED));
    }

    #[test]
    fn test_helix_cartoon_z_increases() {
        let targets = helix_cartoon(N);
        for pair in targets.windows(2) {
            assert!(pair[1].position.z > pair[0].position.z);
        }
    }
}
