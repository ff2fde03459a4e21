//! Perceptual luminance weights
//!
//! Luminance is approximated as a weighted sum of linear channels. The weights
//! are integers in the original tables; their sum `W` normalizes the sum back
//! onto the channel scale.

use std::fmt;

use super::linear_rgb::{Channel, LinearRgb};

/// Error returned when constructing [`LuminanceWeights`] from invalid values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightsError {
    /// A weight was zero, negative, or not finite
    NotPositive {
        /// The offending channel
        channel: Channel,
        /// The rejected value
        value: f64,
    },
}

impl fmt::Display for WeightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightsError::NotPositive { channel, value } => {
                write!(
                    f,
                    "luminance weight for {:?} must be positive and finite, got {}",
                    channel, value
                )
            }
        }
    }
}

impl std::error::Error for WeightsError {}

/// Per-channel luminance weights.
///
/// Every weight is positive and finite. The same weights drive both the
/// luminance gate and the capacity weighting of the redistribution loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceWeights {
    r: f64,
    g: f64,
    b: f64,
}

impl LuminanceWeights {
    /// ITU-R BT.709 luma coefficients scaled to integers (sum 10000).
    pub const REC709: Self = Self {
        r: 2126.0,
        g: 7152.0,
        b: 722.0,
    };

    /// Create custom weights, rejecting non-positive or non-finite values.
    ///
    /// # Example
    /// ```
    /// use luma_clamp::LuminanceWeights;
    ///
    /// let w = LuminanceWeights::new(1111.0, 3333.0, 5334.0).unwrap();
    /// assert_eq!(w.total(), 9778.0);
    /// assert!(LuminanceWeights::new(0.0, 1.0, 1.0).is_err());
    /// ```
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self, WeightsError> {
        for (channel, value) in [(Channel::Red, r), (Channel::Green, g), (Channel::Blue, b)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(WeightsError::NotPositive { channel, value });
            }
        }
        Ok(Self { r, g, b })
    }

    /// Weight of a single channel.
    #[inline]
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Sum of the three weights (`W`).
    #[inline]
    pub fn total(&self) -> f64 {
        self.r + self.g + self.b
    }

    /// Raw weighted sum `wR*R + wG*G + wB*B`, not normalized.
    #[inline]
    pub fn weighted_sum(&self, color: LinearRgb) -> f64 {
        color.r * self.r + color.g * self.g + color.b * self.b
    }

    /// Normalized luminance, on the same scale as the channels.
    #[inline]
    pub fn luminance(&self, color: LinearRgb) -> f64 {
        self.weighted_sum(color) / self.total()
    }
}

impl Default for LuminanceWeights {
    fn default() -> Self {
        Self::REC709
    }
}
