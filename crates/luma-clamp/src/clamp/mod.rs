//! Luminance-preserving clamp
//!
//! Two stages run before quantization:
//!
//! 1. [`saturate`] rejects colors whose total luminance is outside the
//!    displayable range, mapping them straight to white or black.
//! 2. [`redistribute`] moves color energy between channels until every
//!    channel fits `0..=255`, holding the weighted luminance sum constant.
//!
//! ```text
//! LinearRgb ──> saturate ──> Some(white | black) ──────────────> Rgb888
//!                  │
//!                 None
//!                  v
//!             redistribute (<= 3 rounds) ──> quantize ──> Rgb888
//! ```

mod redistribute;

pub use redistribute::{redistribute, Redistribution, MAX_ROUNDS};

use crate::color::{LinearRgb, LuminanceWeights, Rgb888};

/// Channel ceiling on the linear scale.
pub(crate) const CHANNEL_MAX: f64 = 255.0;

/// Saturate colors whose luminance cannot be displayed.
///
/// Returns white when the weighted sum exceeds `255 * W`, black when it is
/// zero or negative, and `None` when the color needs balancing.
///
/// # Example
/// ```
/// use luma_clamp::{clamp::saturate, LinearRgb, LuminanceWeights, Rgb888};
///
/// let w = LuminanceWeights::REC709;
/// assert_eq!(saturate(LinearRgb::splat(300.0), &w), Some(Rgb888::WHITE));
/// assert_eq!(saturate(LinearRgb::new(-1.0, 0.0, 0.0), &w), Some(Rgb888::BLACK));
/// assert_eq!(saturate(LinearRgb::new(400.0, 0.0, 0.0), &w), None);
/// ```
#[inline]
pub fn saturate(color: LinearRgb, weights: &LuminanceWeights) -> Option<Rgb888> {
    let sum = weights.weighted_sum(color);
    if sum > CHANNEL_MAX * weights.total() {
        Some(Rgb888::WHITE)
    } else if sum <= 0.0 {
        Some(Rgb888::BLACK)
    } else {
        None
    }
}
