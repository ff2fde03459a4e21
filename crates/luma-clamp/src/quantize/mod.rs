//! Gamma + ordered-dither quantization
//!
//! The last stage of every clamp: floor negative channels, apply the gamma
//! curve, add a position-dependent dither bias and truncate to 8 bits.
//!
//! The same bias is added to all three channels of a pixel. The pattern is
//! correlated across channels, so it breaks up banding without shifting hue.

mod dither_matrix;
mod quantizer;

pub use dither_matrix::DitherMatrix;
pub use quantizer::quantize;
