//! Hue/saturation/value to linear RGB
//!
//! Produces the input distribution of the rainbow card. Channel assignment per
//! hue sector comes from a fixed table instead of index arithmetic.

use super::linear_rgb::{Channel, LinearRgb};

/// Channel roles within one 60-degree hue sector.
struct Sector {
    max: Channel,
    min: Channel,
    mid: Channel,
}

/// Sector `i` covers hues `60*i .. 60*(i+1)`. The middle channel rises on even
/// sectors and falls on odd ones.
#[rustfmt::skip]
const SECTORS: [Sector; 6] = [
    Sector { max: Channel::Red, min: Channel::Blue, mid: Channel::Green },
    Sector { max: Channel::Green, min: Channel::Blue, mid: Channel::Red },
    Sector { max: Channel::Green, min: Channel::Red, mid: Channel::Blue },
    Sector { max: Channel::Blue, min: Channel::Red, mid: Channel::Green },
    Sector { max: Channel::Blue, min: Channel::Green, mid: Channel::Red },
    Sector { max: Channel::Red, min: Channel::Green, mid: Channel::Blue },
];

/// Convert HSV to linear RGB on the 0..=255 scale.
///
/// * `hue` - degrees, any finite value (wrapped into `[0, 360)`)
/// * `saturation` - 0.0..=1.0
/// * `value` - 0.0..=1.0, scaled by 255
///
/// Every output channel lies in `[0, value * 255]`.
///
/// # Example
/// ```
/// use luma_clamp::{hsv_to_linear, LinearRgb};
///
/// let red = hsv_to_linear(0.0, 1.0, 1.0);
/// assert_eq!(red, LinearRgb::new(255.0, 0.0, 0.0));
/// ```
pub fn hsv_to_linear(hue: f64, saturation: f64, value: f64) -> LinearRgb {
    let v = value * 255.0;

    if saturation == 0.0 {
        return LinearRgb::splat(v);
    }

    let mut h = hue % 360.0;
    if h < 0.0 {
        h += 360.0;
    }
    // A tiny negative hue wraps to exactly 360.0
    let h = (h % 360.0) / 60.0;

    let index = (h as usize).min(SECTORS.len() - 1);
    let frac = h - index as f64;
    let p = v - v * saturation;
    let qt = v * saturation * frac;

    let sector = &SECTORS[index];
    let mut color = LinearRgb::BLACK;
    *color.channel_mut(sector.max) = v;
    *color.channel_mut(sector.min) = p;
    *color.channel_mut(sector.mid) = if index % 2 == 1 { v - qt } else { p + qt };
    color
}
