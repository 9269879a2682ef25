//! Object registry: the fixed pool of renderable objects.

use glam::Vec3;
use morphgrid_core::{Rgb, hsl_to_rgb};

use crate::tween::Property;

/// Saturation and lightness of the initial per-object hues.
const INITIAL_SATURATION: f32 = 0.8;
const INITIAL_LIGHTNESS: f32 = 0.6;

/// Layout used to assign home positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arrangement {
    /// Unit-spaced cubic lattice centered on the origin, filled x-major,
    /// then y, then z. The side is the smallest that holds every object.
    #[default]
    Cube,
    /// Unit-spaced points along the x axis, centered on the origin.
    Line,
}

impl Arrangement {
    /// Home position of object `index` out of `count`.
    fn position(self, index: usize, count: usize) -> Vec3 {
        match self {
            Arrangement::Cube => {
                let side = cube_side(count);
                let center = (side - 1) as f32 / 2.0;
                let x = index / (side * side);
                let y = (index / side) % side;
                let z = index % side;
                Vec3::new(x as f32 - center, y as f32 - center, z as f32 - center)
            }
            Arrangement::Line => {
                let center = count.saturating_sub(1) as f32 / 2.0;
                Vec3::new(index as f32 - center, 0.0, 0.0)
            }
        }
    }
}

/// Smallest lattice side whose cube holds `count` points.
fn cube_side(count: usize) -> usize {
    let mut side = 1;
    while side * side * side < count {
        side += 1;
    }
    side
}

/// A single animated object.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableObject {
    index: usize,
    home: Vec3,
    /// Current position, written by tweens and procedural motion.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
    /// Displayed color.
    pub color: Rgb,
    /// Formation accent that overrides the hue cycle while set.
    pub accent: Option<Rgb>,
    /// Local yaw in radians; the terminal scene widens the footprint with it.
    pub spin: f32,
}

impl RenderableObject {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rest position assigned at creation.
    pub fn home(&self) -> Vec3 {
        self.home
    }

    /// Current value of a tweenable property.
    ///
    /// Color reads the accent when one is set, otherwise the displayed color.
    pub fn property(&self, property: Property) -> Vec3 {
        match property {
            Property::Position => self.position,
            Property::Color => Vec3::from_array(self.accent.unwrap_or(self.color).to_array()),
        }
    }

    /// Write a tweenable property. Color writes go to the accent.
    pub fn set_property(&mut self, property: Property, value: Vec3) {
        match property {
            Property::Position => self.position = value,
            Property::Color => self.accent = Some(Rgb::from_array(value.to_array())),
        }
    }
}

/// Owns every renderable object for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    objects: Vec<RenderableObject>,
}

impl ObjectRegistry {
    /// Place `count` objects according to `arrangement`.
    ///
    /// Each object gets a distinct hue spaced evenly around the color wheel,
    /// and its starting position is recorded as its home.
    pub fn create_objects(count: usize, arrangement: Arrangement) -> Self {
        let objects = (0..count)
            .map(|index| {
                let home = arrangement.position(index, count);
                let hue = 360.0 * index as f32 / count as f32;
                RenderableObject {
                    index,
                    home,
                    position: home,
                    scale: 1.0,
                    color: hsl_to_rgb(hue, INITIAL_SATURATION, INITIAL_LIGHTNESS),
                    accent: None,
                    spin: 0.0,
                }
            })
            .collect();
        Self { objects }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RenderableObject> {
        self.objects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut RenderableObject> {
        self.objects.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderableObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RenderableObject> {
        self.objects.iter_mut()
    }
}
