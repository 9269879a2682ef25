//! Animation engine for the morphgrid cube grid.
//!
//! Each frame runs two ordered write passes against the object registry: the
//! tween pass moves objects toward their formation targets, then procedural
//! motion layers continuous oscillation on top. Formation changes go through
//! a single [`ModeMachine::transition`] entry point.

mod clock;
mod easing;
pub mod formation;
mod mode;
pub mod motion;
mod registry;
mod stage;
mod tween;

pub use clock::{Clock, ManualTimeSource, SystemTimeSource, Tick, TimeSource};
pub use easing::Easing;
pub use formation::Target;
pub use mode::ModeMachine;
pub use motion::GroupTransform;
pub use registry::{Arrangement, ObjectRegistry, RenderableObject};
pub use stage::{DEFAULT_OBJECT_COUNT, Stage};
pub use tween::{Property, Tween, TweenEngine, TweenKey};

pub use glam::Vec3;
pub use morphgrid_core::{Mode, Rgb};
