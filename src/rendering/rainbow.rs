//! Rainbow card: a hue/saturation sweep rendered twice.
//!
//! Hue runs left to right over 1.5 turns while saturation ramps up from grey;
//! brightness rises quadratically from black at the top. Every color is
//! rescaled so its luminance matches the row brightness, which pushes many
//! saturated colors past the channel maximum.
//!
//! The left panel quantizes those colors directly (channels are cut at 255,
//! losing brightness and shifting hue); the right panel runs the
//! luminance-preserving clamp.

use crate::error::RenderError;
use crate::models::RainbowParams;
use crate::rendering::Canvas;
use luma_clamp::{hsv_to_linear, ColorClamper, LinearRgb};

/// Render the rainbow card.
pub fn render_rainbow(
    params: &RainbowParams,
    clamper: &ColorClamper,
) -> Result<Canvas, RenderError> {
    let (width, height) = params.canvas_size();
    let mut canvas = Canvas::new(width, height)?;
    tracing::debug!(width, height, "Rendering rainbow card");

    let right_shift = params.panel_width as i64 + params.panel_gap as i64;

    for y in 0..params.height {
        let bright = row_brightness(params, y);
        for x in 0..params.panel_width {
            let color = sweep_color(params, clamper, x, bright);

            canvas.set_pixel(x as i64, y as i64, clamper.quantize(color, x, y));
            canvas.set_pixel(x as i64 + right_shift, y as i64, clamper.clamp(color, x, y));
        }
    }

    Ok(canvas)
}

/// Target luminance of row `y`, 0.0 at the top.
fn row_brightness(params: &RainbowParams, y: u32) -> f64 {
    (y as f64 / params.height as f64).powf(params.brightness_exponent)
}

/// Linear color of column `x`, scaled to luminance `bright` on the 0..=255
/// channel scale.
pub(crate) fn sweep_color(
    params: &RainbowParams,
    clamper: &ColorClamper,
    x: u32,
    bright: f64,
) -> LinearRgb {
    let panel = params.panel_width as f64;
    let hue = x as f64 * params.hue_span / panel + params.hue_offset;
    let saturation = (x as f64 * params.saturation_ramp / panel).min(1.0);

    // Decode with the inverse of the output gamma
    let decode = 1.0 / clamper.encode_gamma();
    let linear = hsv_to_linear(hue, saturation, params.value).map(|c| (c / 255.0).powf(decode));

    let lum = clamper.luminance_weights().luminance(linear);
    if lum <= 0.0 {
        return LinearRgb::BLACK;
    }
    linear.scale(bright / lum * 255.0)
}
