//! Formation mode state machine.

use morphgrid_core::Mode;

use crate::easing::Easing;
use crate::formation;
use crate::registry::ObjectRegistry;
use crate::tween::{Property, TweenEngine};

/// Tracks the active formation and schedules the tweens that move objects
/// between formations.
#[derive(Debug, Default)]
pub struct ModeMachine {
    current: Mode,
    easing: Easing,
}

impl ModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    /// Apply a toggle request.
    ///
    /// Requesting the active mode returns to rest; anything else switches
    /// straight to the requested mode. Every object then tweens from wherever
    /// it currently is toward its target in the resulting mode, replacing any
    /// tween still in flight. Returns the new mode.
    pub fn transition(
        &mut self,
        requested: Mode,
        registry: &mut ObjectRegistry,
        tweens: &mut TweenEngine,
    ) -> Mode {
        let next = self.current.transition(requested);
        let duration_ms = next.duration_ms();
        let targets = formation::targets(next, registry);

        if !next.uses_accents() {
            for object in registry.iter_mut() {
                tweens.cancel(object.index(), Property::Color);
                object.accent = None;
            }
        }

        for (index, target) in targets.iter().enumerate() {
            tweens.start_tween(
                registry,
                index,
                Property::Position,
                target.position,
                duration_ms,
                self.easing,
            );
            if let Some(accent) = target.accent {
                tweens.start_tween(
                    registry,
                    index,
                    Property::Color,
                    accent.to_array().into(),
                    duration_ms,
                    self.easing,
                );
            }
        }

        log::debug!(
            "mode {:?} -> {:?} (requested {:?}, {}ms)",
            self.current,
            next,
            requested,
            duration_ms
        );
        self.current = next;
        next
    }
}
