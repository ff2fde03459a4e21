use super::dither_matrix::DitherMatrix;
use crate::color::{LinearRgb, Rgb888};

/// Quantize a linear color to 8 bits.
///
/// Per channel: floor at 0, apply `(c / 255)^gamma * 255`, add the dither
/// bias for `(x, y)`, cap at 255 and truncate.
///
/// Channels above 255 are accepted and end up at 255.
#[inline]
pub fn quantize(color: LinearRgb, gamma: f64, dither: &DitherMatrix, x: u32, y: u32) -> Rgb888 {
    let bias = dither.bias(x, y);
    let encode = |c: f64| -> u8 {
        let c = (c.max(0.0) / 255.0).powf(gamma) * 255.0 + bias;
        // Truncation, not rounding
        c.min(255.0) as u8
    };
    Rgb888::new(encode(color.r), encode(color.g), encode(color.b))
}
