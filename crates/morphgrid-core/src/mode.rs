//! Formation modes.

use serde::{Deserialize, Serialize};

/// Formation the whole object collection is arranged in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Every object sits at its home lattice position.
    #[default]
    Rest,
    Sphere,
    Spiral,
    Wave,
    /// Two phase-shifted strands around a central axis.
    HelixDouble,
    /// Two interleaved ribbons, one per parity class.
    HelixCartoon,
}

impl Mode {
    /// Modes reachable through a toggle key, in key order.
    pub const TOGGLES: [Mode; 5] = [
        Mode::Sphere,
        Mode::Spiral,
        Mode::Wave,
        Mode::HelixDouble,
        Mode::HelixCartoon,
    ];

    /// Resolve a toggle request against the current mode.
    ///
    /// Requesting the mode that is already active returns to [`Mode::Rest`];
    /// any other request switches directly to the requested mode.
    pub fn transition(self, requested: Mode) -> Mode {
        if requested == self {
            Mode::Rest
        } else {
            requested
        }
    }

    /// Duration of the tween that moves objects into this mode.
    pub fn duration_ms(self) -> u64 {
        match self {
            Mode::Rest => 900,
            Mode::Sphere => 1200,
            Mode::Spiral => 1400,
            Mode::Wave => 1500,
            Mode::HelixDouble => 1500,
            Mode::HelixCartoon => 1200,
        }
    }

    /// Whether this mode paints objects with fixed accent colors.
    pub fn uses_accents(self) -> bool {
        matches!(self, Mode::HelixDouble | Mode::HelixCartoon)
    }

    /// Get the display name for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Rest => "Rest",
            Mode::Sphere => "Sphere",
            Mode::Spiral => "Spiral",
            Mode::Wave => "Wave",
            Mode::HelixDouble => "Double Helix",
            Mode::HelixCartoon => "Cartoon Helix",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_same_mode_returns_to_rest() {
        for mode in Mode::TOGGLES {
            assert_eq!(mode.transition(mode), Mode::Rest);
        }
    }

    #[test]
    fn test_transition_switches_directly() {
        assert_eq!(Mode::Spiral.transition(Mode::HelixDouble), Mode::HelixDouble);
        assert_eq!(Mode::Rest.transition(Mode::Wave), Mode::Wave);
        assert_eq!(Mode::Rest.transition(Mode::Rest), Mode::Rest);
    }

    #[test]
    fn test_durations_in_range() {
        for mode in Mode::TOGGLES {
            let ms = mode.duration_ms();
            assert!((800..=1500).contains(&ms), "{mode:?} has {ms}ms");
        }
        assert_eq!(Mode::Rest.duration_ms(), 900);
    }

    #[test]
    fn test_accent_modes() {
        assert!(Mode::HelixDouble.uses_accents());
        assert!(Mode::HelixCartoon.uses_accents());
        assert!(!Mode::Sphere.uses_accents());
        assert!(!Mode::Rest.uses_accents());
    }
}
