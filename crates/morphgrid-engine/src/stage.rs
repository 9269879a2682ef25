//! Frame driver tying the registry, tweens, mode machine and procedural
//! motion together.

use morphgrid_core::Mode;

use crate::clock::Tick;
use crate::mode::ModeMachine;
use crate::motion::{self, GroupTransform};
use crate::registry::{Arrangement, ObjectRegistry};
use crate::tween::TweenEngine;

/// Number of objects in the reference 3×3×3 grid.
pub const DEFAULT_OBJECT_COUNT: usize = 27;

/// The animated scene.
#[derive(Debug)]
pub struct Stage {
    registry: ObjectRegistry,
    tweens: TweenEngine,
    modes: ModeMachine,
    group: GroupTransform,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(DEFAULT_OBJECT_COUNT, Arrangement::Cube)
    }
}

impl Stage {
    pub fn new(count: usize, arrangement: Arrangement) -> Self {
        Self {
            registry: ObjectRegistry::create_objects(count, arrangement),
            tweens: TweenEngine::new(),
            modes: ModeMachine::new(),
            group: GroupTransform::default(),
        }
    }

    /// Toggle a formation. Returns the mode now active.
    pub fn toggle(&mut self, requested: Mode) -> Mode {
        self.modes.transition(requested, &mut self.registry, &mut self.tweens)
    }

    /// Advance one frame: tween pass first, then procedural motion.
    pub fn frame(&mut self, tick: Tick) {
        self.tweens.advance(tick.delta_ms, &mut self.registry);
        motion::apply(
            self.modes.current(),
            tick.seconds(),
            &mut self.registry,
            &mut self.group,
        );
    }

    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    pub fn objects(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn tweens(&self) -> &TweenEngine {
        &self.tweens
    }

    pub fn group(&self) -> GroupTransform {
        self.group
    }
}
