//! luma-clamp: luminance-preserving color clamping
//!
//! Turns unbounded linear RGB "color energy" into 8-bit pixels while keeping
//! perceived brightness. A channel that asks for more than the display can
//! show hands its surplus to the other channels instead of being cut off, so
//! a too-bright red becomes a lighter, slightly desaturated red rather than a
//! darker one.
//!
//! # Quick Start
//!
//! ```
//! use luma_clamp::{ColorClamper, LinearRgb};
//!
//! let clamper = ColorClamper::new();
//! let pixel = clamper.clamp(LinearRgb::new(400.0, 20.0, 0.0), 3, 5);
//! assert_eq!(pixel.r, 255);
//! let packed: u32 = pixel.to_packed();
//! assert_eq!(packed >> 16, 255);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! LinearRgb (unbounded, 0..=255 scale)
//!     |
//!     v
//! [Luminance gate]        wR*R + wG*G + wB*B  >  255*W  -> white
//!     |                                       <= 0      -> black
//!     v
//! [Energy redistribution] excess pass + debt pass, at most 3 rounds
//!     |
//!     v
//! [Quantizer]             floor 0, (c/255)^gamma*255, + dither(x,y),
//!     |                   cap 255, truncate
//!     v
//! Rgb888 / 0xRRGGBB
//! ```
//!
//! The quantizer is also available on its own through
//! [`ColorClamper::quantize`] for colors that need no balancing.
//!
//! # Constants
//!
//! - Luminance weights: R 2126, G 7152, B 722 (BT.709, sum 10000)
//! - Dither: fixed 8x8 permutation of ranks `1..=64`, bias `rank/64`
//! - Gamma: 0.5
//!
//! All of them are immutable; a [`ColorClamper`] is `Copy` and can be shared
//! freely across threads.

pub mod api;
pub mod clamp;
pub mod color;
pub mod quantize;


pub use api::ColorClamper;
pub use clamp::{Redistribution, MAX_ROUNDS};
pub use color::{hsv_to_linear, Channel, LinearRgb, LuminanceWeights, Rgb888, WeightsError};
pub use quantize::DitherMatrix;
