//! Tween engine: time-driven interpolation of object properties.

use std::collections::HashMap;

use glam::Vec3;

use crate::easing::Easing;
use crate::registry::ObjectRegistry;

/// Tweenable object property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Position,
    /// RGB written into the object's accent.
    Color,
}

/// Identifies the single tween slot of one property of one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenKey {
    pub object: usize,
    pub property: Property,
}

impl TweenKey {
    pub fn new(object: usize, property: Property) -> Self {
        Self { object, property }
    }
}

/// A time-bounded interpolation from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    start: Vec3,
    end: Vec3,
    duration_ms: u64,
    elapsed_ms: u64,
    easing: Easing,
}

impl Tween {
    pub fn new(start: Vec3, end: Vec3, duration_ms: u64, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration_ms,
            elapsed_ms: 0,
            easing,
        }
    }

    /// Linear progress in `[0.0, 1.0]`. A zero duration is already complete.
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms as f32 / self.duration_ms as f32).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Interpolated value; exactly `end` once complete.
    pub fn value(&self) -> Vec3 {
        if self.is_complete() {
            return self.end;
        }
        self.start.lerp(self.end, self.easing.evaluate(self.progress()))
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    fn advance(&mut self, delta_ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
    }
}

/// Set of active tweens, at most one per (object, property).
#[derive(Debug, Default)]
pub struct TweenEngine {
    active: HashMap<TweenKey, Tween>,
}

impl TweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tweening a property from its current value toward `target`.
    ///
    /// Any unfinished tween on the same key is discarded. Unknown objects are
    /// ignored.
    pub fn start_tween(
        &mut self,
        registry: &ObjectRegistry,
        object: usize,
        property: Property,
        target: Vec3,
        duration_ms: u64,
        easing: Easing,
    ) {
        let Some(current) = registry.get(object) else {
            log::warn!("tween requested for unknown object {object}");
            return;
        };
        let key = TweenKey::new(object, property);
        let tween = Tween::new(current.property(property), target, duration_ms, easing);
        if self.active.insert(key, tween).is_some() {
            log::trace!("replaced in-flight tween {key:?}");
        }
    }

    /// Drop the tween on a key without applying its end value.
    pub fn cancel(&mut self, object: usize, property: Property) -> Option<Tween> {
        self.active.remove(&TweenKey::new(object, property))
    }

    /// Advance every tween, write the interpolated values, and retire the
    /// tweens that reached their end.
    pub fn advance(&mut self, delta_ms: u64, registry: &mut ObjectRegistry) {
        for (key, tween) in self.active.iter_mut() {
            tween.advance(delta_ms);
            if let Some(object) = registry.get_mut(key.object) {
                object.set_property(key.property, tween.value());
            }
        }
        self.active.retain(|_, tween| !tween.is_complete());
    }

    pub fn get(&self, object: usize, property: Property) -> Option<&Tween> {
        self.active.get(&TweenKey::new(object, property))
    }

    pub fn is_active(&self, object: usize, property: Property) -> bool {
        self.active.contains_key(&TweenKey::new(object, property))
    }

    /// End value of the active tween on a key.
    pub fn target(&self, object: usize, property: Property) -> Option<Vec3> {
        self.get(object, property).map(Tween::end)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}
