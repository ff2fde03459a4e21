//! ColorClamper builder -- the primary entry point for the crate.
//!
//! [`ColorClamper`] holds the immutable per-process configuration (luminance
//! weights, gamma, dither matrix) and exposes both clamp paths.

use crate::clamp::{redistribute, saturate, Redistribution};
use crate::color::{LinearRgb, LuminanceWeights, Rgb888};
use crate::quantize::{quantize, DitherMatrix};

/// Default encode gamma.
pub const DEFAULT_GAMMA: f64 = 0.5;

/// Perceptual color clamper.
///
/// Configuration methods consume and return `self`. Once built the clamper
/// is `Copy` and every method takes `&self`, so one instance can serve any
/// number of pixels (and threads).
///
/// # Example
///
/// ```
/// use luma_clamp::{ColorClamper, LinearRgb, Rgb888};
///
/// let clamper = ColorClamper::new();
///
/// // Too bright to display at all: saturates to white
/// assert_eq!(clamper.clamp(LinearRgb::splat(400.0), 0, 0), Rgb888::WHITE);
///
/// // Bright red: excess energy spills into green and blue
/// let px = clamper.clamp(LinearRgb::new(400.0, 0.0, 0.0), 0, 0);
/// assert_eq!(px.r, 255);
/// assert!(px.g > 0 && px.b > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorClamper {
    weights: LuminanceWeights,
    gamma: f64,
    dither: DitherMatrix,
}

impl ColorClamper {
    /// Create a clamper with BT.709 weights, gamma 0.5 and the ordered 8x8
    /// dither pattern.
    pub fn new() -> Self {
        Self {
            weights: LuminanceWeights::REC709,
            gamma: DEFAULT_GAMMA,
            dither: DitherMatrix::ORDERED_8X8,
        }
    }

    /// Set the luminance weights.
    #[inline]
    pub fn weights(mut self, weights: LuminanceWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the encode gamma exponent.
    #[inline]
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the dither matrix. Use [`DitherMatrix::FLAT`] to disable dithering.
    #[inline]
    pub fn dither(mut self, dither: DitherMatrix) -> Self {
        self.dither = dither;
        self
    }

    /// The configured luminance weights.
    #[inline]
    pub fn luminance_weights(&self) -> &LuminanceWeights {
        &self.weights
    }

    /// The configured encode gamma.
    #[inline]
    pub fn encode_gamma(&self) -> f64 {
        self.gamma
    }

    /// The configured dither matrix.
    #[inline]
    pub fn dither_matrix(&self) -> &DitherMatrix {
        &self.dither
    }

    /// Gamma, dither and pack without any luminance balancing.
    ///
    /// Out-of-range channels are simply cut at 0 and 255.
    #[inline]
    pub fn quantize(&self, color: LinearRgb, x: u32, y: u32) -> Rgb888 {
        quantize(color, self.gamma, &self.dither, x, y)
    }

    /// Run the redistribution loop alone, without gating or quantizing.
    #[inline]
    pub fn redistribute(&self, color: LinearRgb) -> Redistribution {
        redistribute(color, &self.weights)
    }

    /// Luminance-preserving clamp.
    ///
    /// Colors whose weighted luminance is above the display maximum become
    /// white; zero or negative luminance becomes black. Everything else is
    /// balanced across channels and then quantized like
    /// [`quantize`](Self::quantize).
    ///
    /// `color` must be finite. `x` and `y` only select the dither bias.
    pub fn clamp(&self, color: LinearRgb, x: u32, y: u32) -> Rgb888 {
        if let Some(saturated) = saturate(color, &self.weights) {
            return saturated;
        }
        let balanced = self.redistribute(color);
        self.quantize(balanced.color, x, y)
    }
}

impl Default for ColorClamper {
    fn default() -> Self {
        Self::new()
    }
}
