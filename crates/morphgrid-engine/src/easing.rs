//! Easing curves for tween interpolation.

/// Easing curve applied to linear tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Exponential ease-in-out: fast through the middle, slow at both ends.
    #[default]
    ExponentialInOut,
}

impl Easing {
    /// Evaluate the curve at progress `t`.
    ///
    /// Input is clamped to `[0.0, 1.0]`; the endpoints map exactly to 0 and 1.
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::ExponentialInOut => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    0.5 * 2f32.powf(20.0 * t - 10.0)
                } else {
                    1.0 - 0.5 * 2f32.powf(-20.0 * t + 10.0)
                }
            }
        }
    }
}
