//! Core types shared across the morphgrid crates.

mod color;
mod mode;

pub use color::{Rgb, hsl_to_rgb};
pub use mode::Mode;
