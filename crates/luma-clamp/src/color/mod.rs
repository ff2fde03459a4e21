//! Color types used by the clamper
//!
//! - [`LinearRgb`]: unbounded linear-light channel energy, the clamper input
//! - [`Rgb888`]: 8-bit output pixel, packable as `0xRRGGBB`
//! - [`LuminanceWeights`]: per-channel weights of the perceptual luminance sum
//!
//! # Example
//!
//! ```
//! use luma_clamp::{LinearRgb, LuminanceWeights};
//!
//! let grey = LinearRgb::splat(128.0);
//! let lum = LuminanceWeights::REC709.luminance(grey);
//! assert!((lum - 128.0).abs() < 1e-9);
//! ```

mod hsv;
mod linear_rgb;
mod luminance;
mod rgb888;

pub use hsv::hsv_to_linear;
pub use linear_rgb::{Channel, LinearRgb};
pub use luminance::{LuminanceWeights, WeightsError};
pub use rgb888::Rgb888;
