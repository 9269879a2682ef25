//! Procedural motion layered on top of tweened positions every frame.
//!
//! Deltas here are per frame, not per second, and accumulate onto whatever
//! the tween pass wrote in the same frame.

use std::f32::consts::TAU;
use std::f64::consts::PI;

use morphgrid_core::{Mode, hsl_to_rgb};

use crate::registry::ObjectRegistry;

/// Every oscillator below has a period dividing this one (sin t, sin 2t, cos 1.2t).
const PHASE_PERIOD: f64 = 10.0 * PI;

const HUE_DEGREES_PER_SECOND: f64 = 20.0;
const HUE_DEGREES_PER_INDEX: f64 = 5.0;
const CYCLE_SATURATION: f32 = 0.7;
const CYCLE_LIGHTNESS: f32 = 0.5;

const PULSE_AMPLITUDE: f32 = 0.07;

/// Idle yaw applied in every mode.
const IDLE_YAW_STEP: f32 = 0.002;
const HELIX_DOUBLE_YAW_STEP: f32 = 0.01;
const HELIX_DOUBLE_PITCH: f32 = 0.1;
const HELIX_DOUBLE_SPIN_STEP: f32 = 0.03;
const HELIX_CARTOON_YAW_STEP: f32 = 0.012;

/// Whole-collection orientation, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupTransform {
    pub yaw: f32,
    pub pitch: f32,
}

/// Hue in degrees for object `index` at `seconds`, cycling through `0..360`.
pub fn cycle_hue(seconds: f64, index: usize) -> f32 {
    let hue = (HUE_DEGREES_PER_SECOND * seconds + HUE_DEGREES_PER_INDEX * index as f64)
        .rem_euclid(360.0) as f32;
    // Values just below 360 round up in the narrowing cast
    hue.rem_euclid(360.0)
}

/// Time folded into one common oscillator period.
pub fn phase_time(seconds: f64) -> f32 {
    seconds.rem_euclid(PHASE_PERIOD) as f32
}

/// Breathing scale for object `index` at phase time `t`.
pub fn pulse_scale(t: f32, index: usize) -> f32 {
    1.0 + PULSE_AMPLITUDE * (2.0 * t + index as f32).sin()
}

/// Apply one frame of procedural motion.
///
/// Scale and color are always rewritten. Position deltas, group rotation and
/// local spin depend on `mode` alone.
pub fn apply(mode: Mode, seconds: f64, registry: &mut ObjectRegistry, group: &mut GroupTransform) {
    let t = phase_time(seconds);

    group.yaw += IDLE_YAW_STEP;
    match mode {
        Mode::HelixDouble => {
            group.yaw += HELIX_DOUBLE_YAW_STEP;
            group.pitch = HELIX_DOUBLE_PITCH * t.sin();
        }
        Mode::HelixCartoon => {
            group.yaw += HELIX_CARTOON_YAW_STEP;
            group.pitch = 0.0;
        }
        _ => group.pitch = 0.0,
    }
    group.yaw = group.yaw.rem_euclid(TAU);

    for object in registry.iter_mut() {
        let index = object.index();
        let i = index as f32;

        object.scale = pulse_scale(t, index);
        object.color = object.accent.unwrap_or_else(|| {
            hsl_to_rgb(cycle_hue(seconds, index), CYCLE_SATURATION, CYCLE_LIGHTNESS)
        });

        let p = &mut object.position;
        match mode {
            Mode::Rest | Mode::Spiral => {}
            Mode::Sphere => {
                p.y += 0.005 * (2.0 * t + i).sin();
            }
            Mode::Wave => {
                p.y += 0.02 * (t + 0.3 * i).sin();
                p.z += 0.02 * (t + 0.15 * i).cos();
            }
            Mode::HelixDouble => {
                p.x += 0.008 * (t + 0.3 * i).sin();
                p.z += 0.008 * (t + 0.3 * i).cos();
                p.y += 0.004 * (2.0 * t + i).sin();
                object.spin = (object.spin + HELIX_DOUBLE_SPIN_STEP).rem_euclid(TAU);
            }
            Mode::HelixCartoon => {
                p.x += 0.008 * (t + 0.15 * i).sin();
                p.y += 0.008 * (1.2 * t + i).cos();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use morphgrid_core::Rgb;

    use super::*;
    use crate::registry::Arrangement;

    fn registry() -> ObjectRegistry {
        ObjectRegistry::create_objects(27, Arrangement::Cube)
    }

    #[test]
    fn test_cycle_hue() {
        assert_eq!(cycle_hue(18.0, 0), 0.0);
        assert_eq!(cycle_hue(0.0, 3), 15.0);
        assert_eq!(cycle_hue(1.0, 2), 30.0);
        assert!(cycle_hue(1_000_000.25, 26) < 360.0);
        assert_eq!(cycle_hue(17.999_999_999_999, 0), 0.0);
    }

    #[test]
    fn test_pulse_scale_bounds() {
        for i in 0..27 {
            let s = pulse_scale(1.3, i);
            assert!((0.93..=1.07).contains(&s));
        }
        assert_eq!(pulse_scale(0.0, 0), 1.0);
    }

    #[test]
    fn test_phase_time_preserves_oscillators() {
        let seconds = 12_345.678;
        let t = phase_time(seconds);
        assert!(t >= 0.0 && (t as f64) < PHASE_PERIOD);
        for k in [1.0f64, 2.0, 1.2] {
            let folded = (k * t as f64).sin();
            let raw = (k * seconds).sin();
            assert!((folded - raw).abs() < 1e-3, "k={k}: {folded} vs {raw}");
        }
    }

    #[test]
    fn test_rest_leaves_positions() {
        let mut registry = registry();
        let mut group = GroupTransform::default();
        apply(Mode::Rest, 3.0, &mut registry, &mut group);
        for object in registry.iter() {
            assert_eq!(object.position, object.home());
            assert_eq!(object.scale, pulse_scale(3.0, object.index()));
        }
        assert!((group.yaw - IDLE_YAW_STEP).abs() < 1e-7);
        assert_eq!(group.pitch, 0.0);
    }

    #[test]
    fn test_hue_cycle_color() {
        let mut registry = registry();
        let mut group = GroupTransform::default();
        apply(Mode::Rest, 18.0, &mut registry, &mut group);
        assert_eq!(registry.get(0).unwrap().color, hsl_to_rgb(0.0, 0.7, 0.5));
    }

    #[test]
    fn test_accent_overrides_hue() {
        let mut registry = registry();
        let accent = Rgb::from_hex(0x00b4ff);
        registry.get_mut(4).unwrap().accent = Some(accent);
        let mut group = GroupTransform::default();
        apply(Mode::HelixDouble, 2.0, &mut registry, &mut group);
        assert_eq!(registry.get(4).unwrap().color, accent);
    }

    #[test]
    fn test_sphere_bob() {
        let mut registry = registry();
        let mut group = GroupTransform::default();
        let t = 0.7;
        apply(Mode::Sphere, t as f64, &mut registry, &mut group);
        let object = registry.get(5).unwrap();
        let expected = object.home() + Vec3::new(0.0, 0.005 * (2.0 * t + 5.0f32).sin(), 0.0);
        assert!(object.position.distance(expected) < 1e-6);
    }

    #[test]
    fn test_wave_drift() {
        let mut registry = registry();
        let mut group = GroupTransform::default();
        apply(Mode::Wave, 1.0, &mut registry, &mut group);
        let object = registry.get(10).unwrap();
        let delta = object.position - object.home();
        assert_eq!(delta.x, 0.0);
        assert!((delta.y - 0.02 * (1.0f32 + 3.0).sin()).abs() < 1e-6);
        assert!((delta.z - 0.02 * (1.0f32 + 1.5).cos()).abs() < 1e-6);
    }

    #[test]
    fn test_helix_double_drift() {
        let mut registry = registry();
        let mut group = GroupTransform::default();
        apply(Mode::HelixDouble, 1.0, &mut registry, &mut group);
        let object = registry.get(10).unwrap();
        let delta = object.position - object.home();
        assert!((delta.x - 0.008 * (1.0f32 + 3.0).sin()).abs() < 1e-6);
        assert!((delta.y - 0.004 * (2.0f32 + 10.0).sin()).abs() < 1e-6);
        assert!((delta.z - 0.008 * (1.0f32 + 3.0).cos()).abs() < 1e-6);
    }

    #[test]
    fn test_helix_double_group_and_spin() {
        let mut registry = registry();
        let mut group = GroupTransform::default();
        apply(Mode::HelixDouble, 1.0, &mut registry, &mut group);
        assert!((group.yaw - (IDLE_YAW_STEP + HELIX_DOUBLE_YAW_STEP)).abs() < 1e-6);
        assert!((group.pitch - 0.1 * 1.0f32.sin()).abs() < 1e-6);
        assert!(registry.iter().all(|o| (o.spin - HELIX_DOUBLE_SPIN_STEP).abs() < 1e-7));

        apply(Mode::Rest, 1.1, &mut registry, &mut group);
        assert_eq!(group.pitch, 0.0);
    }

    #[test]
    fn test_helix_cartoon_drift() {
        let mut registry = registry();
        let mut group = GroupTransform::default();
        apply(Mode::HelixCartoon, 0.5, &mut registry, &mut group);
        let object = registry.get(2).unwrap();
        let delta = object.position - object.home();
        assert!((delta.x - 0.008 * (0.5f32 + 0.3).sin()).abs() < 1e-6);
        assert!((delta.y - 0.008 * (0.6f32 + 2.0).cos()).abs() < 1e-6);
        assert_eq!(delta.z, 0.0);
        assert!((group.yaw - (IDLE_YAW_STEP + HELIX_CARTOON_YAW_STEP)).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_wraps() {
        let mut registry = registry();
        let mut group = GroupTransform {
            yaw: TAU - 0.001,
            pitch: 0.0,
        };
        apply(Mode::HelixCartoon, 0.0, &mut registry, &mut group);
        assert!(group.yaw >= 0.0 && group.yaw < TAU);
    }
}
