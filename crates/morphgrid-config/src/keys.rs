//! Formation toggle key bindings.

use morphgrid_core::Mode;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Keys the application itself handles; they cannot toggle a formation.
const RESERVED_KEYS: &[char] = &['q'];

/// One key per toggleable formation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub sphere: char,
    pub spiral: char,
    pub wave: char,
    pub helix_double: char,
    pub helix_cartoon: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            sphere: 'a',
            spiral: 's',
            wave: 'd',
            helix_double: 'f',
            helix_cartoon: 'g',
        }
    }
}

impl KeyBindings {
    /// Bindings in [`Mode::TOGGLES`] order.
    pub fn pairs(&self) -> [(char, Mode); 5] {
        [
            (self.sphere, Mode::Sphere),
            (self.spiral, Mode::Spiral),
            (self.wave, Mode::Wave),
            (self.helix_double, Mode::HelixDouble),
            (self.helix_cartoon, Mode::HelixCartoon),
        ]
    }

    /// Mode toggled by a key press; letters match regardless of case.
    pub fn mode_for(&self, key: char) -> Option<Mode> {
        let key = key.to_ascii_lowercase();
        self.pairs()
            .into_iter()
            .find(|(bound, _)| bound.to_ascii_lowercase() == key)
            .map(|(_, mode)| mode)
    }

    /// Key bound to a mode, if any.
    pub fn key_for(&self, mode: Mode) -> Option<char> {
        self.pairs()
            .into_iter()
            .find(|(_, bound)| *bound == mode)
            .map(|(key, _)| key)
    }

    /// Reject reserved keys and keys bound to more than one mode.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pairs = self.pairs();
        for (i, (key, mode)) in pairs.iter().enumerate() {
            let lower = key.to_ascii_lowercase();
            if RESERVED_KEYS.contains(&lower) {
                return Err(ConfigError::InvalidKey {
                    key: *key,
                    mode: mode.label(),
                    reason: "reserved for quit",
                });
            }
            if pairs[..i]
                .iter()
                .any(|(other, _)| other.to_ascii_lowercase() == lower)
            {
                return Err(ConfigError::InvalidKey {
                    key: *key,
                    mode: mode.label(),
                    reason: "already bound to another formation",
                });
            }
        }
        Ok(())
    }
}
