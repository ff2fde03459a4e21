//! Copper-bar card: stacked Gaussian bands for eyeballing gradient falloff.
//!
//! Each column repeats one band profile `bands` times from top to bottom;
//! columns differ only in the falloff width. Tick marks on the left edge of
//! every column mark band boundaries (long) and quarter positions (short).

use crate::error::RenderError;
use crate::models::CopperParams;
use crate::rendering::Canvas;
use luma_clamp::Rgb888;

/// Gaussian falloff centred on 0.5.
pub fn falloff(n: f64, sigma: f64) -> f64 {
    (-0.5 * (n - 0.5) * (n - 0.5) / (sigma * sigma)).exp()
}

/// Render the copper-bar card.
pub fn render_coppers(params: &CopperParams) -> Result<Canvas, RenderError> {
    let (width, height) = params.canvas_size();
    let mut canvas = Canvas::new(width, height)?;
    tracing::debug!(width, height, columns = params.sigmas.len(), "Rendering copper-bar card");

    for (index, &sigma) in params.sigmas.iter().enumerate() {
        let left = params.column_left(index) as i64;
        draw_bands(&mut canvas, params, left, sigma);
        draw_ticks(&mut canvas, params, left);
    }

    Ok(canvas)
}

fn band_color(params: &CopperParams, y: u32, sigma: f64) -> Rgb888 {
    let band = y as f64 * params.bands as f64 / params.height as f64;
    let e = falloff(band - band.floor(), sigma);
    let (r, g, b) = params.base;
    Rgb888::new((e * r) as u8, (e * g) as u8, (e * b) as u8)
}

fn draw_bands(canvas: &mut Canvas, params: &CopperParams, left: i64, sigma: f64) {
    let right = left + params.column_width as i64;
    for y in 0..params.height {
        canvas.hline(left, right, y as i64, band_color(params, y, sigma));
    }
}

/// Length of the tick at quarter `quarter` (0..4) of a band, as a fraction of
/// the column width.
fn tick_fraction(quarter: u32) -> f64 {
    let mut fraction = 1.0 / 16.0;
    if quarter != 0 {
        fraction /= 4.0;
    }
    if quarter == 2 {
        fraction *= 2.0;
    }
    fraction
}

fn draw_ticks(canvas: &mut Canvas, params: &CopperParams, left: i64) {
    let center = Rgb888::from_packed(params.marker);
    let rim = Rgb888::from_packed(params.marker_rim);

    for band in 0..params.bands {
        for quarter in 0..4 {
            let pos = band as f64 + quarter as f64 / 4.0;
            let y = (pos * params.height as f64 / params.bands as f64) as i64;
            let right = left + (params.column_width as f64 * tick_fraction(quarter)) as i64;

            canvas.hline(left, right, y - 1, rim);
            canvas.hline(left, right, y, center);
            canvas.hline(left, right, y + 1, rim);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falloff_peaks_at_center() {
        assert_eq!(falloff(0.5, 0.1), 1.0);
        assert!(falloff(0.0, 0.1) < 1e-5);
        assert!(falloff(0.0, 0.5) > 0.6);
        assert!((falloff(0.2, 0.3) - falloff(0.8, 0.3)).abs() < 1e-12);
    }

    #[test]
    fn test_tick_fractions() {
        assert_eq!(tick_fraction(0), 1.0 / 16.0);
        assert_eq!(tick_fraction(1), 1.0 / 64.0);
        assert_eq!(tick_fraction(2), 1.0 / 32.0);
        assert_eq!(tick_fraction(3), 1.0 / 64.0);
    }

    #[test]
    fn test_band_center_has_full_base_color() {
        let params = CopperParams::default();
        // 49 * 4 / 392 = 0.5
        assert_eq!(band_color(&params, 49, 0.1), Rgb888::new(200, 50, 255));
        assert_eq!(band_color(&params, 49 + 98, 0.5), Rgb888::new(200, 50, 255));
    }

    #[test]
    fn test_band_edge_is_dark_for_narrow_sigma() {
        let params = CopperParams::default();
        assert_eq!(band_color(&params, 0, 0.1), Rgb888::BLACK);
        assert_eq!(band_color(&params, 98, 0.1), Rgb888::BLACK);
    }

    #[test]
    fn test_ticks_on_band_boundary() {
        let params = CopperParams::default();
        let canvas = render_coppers(&params).unwrap();
        let white = Rgb888::WHITE;
        let rim = Rgb888::new(0xAA, 0x55, 0xAA);

        // Band 1 starts at y = 98, long tick covers x = 0..=5
        for x in 0..=5 {
            assert_eq!(canvas.pixel(x, 98), Some(white));
            assert_eq!(canvas.pixel(x, 97), Some(rim));
            assert_eq!(canvas.pixel(x, 99), Some(rim));
        }
        assert_ne!(canvas.pixel(6, 98), Some(white));

        // Quarter tick at y = 122 (98 + 24.5) covers x = 0..=1
        assert_eq!(canvas.pixel(1, 122), Some(white));
        assert_ne!(canvas.pixel(2, 122), Some(white));
    }

    #[test]
    fn test_columns_are_separated_by_gap() {
        let params = CopperParams::default();
        let canvas = render_coppers(&params).unwrap();
        // Column 0 spans 0..=80, column 1 starts at 82; row 60 has no ticks
        assert_eq!(canvas.pixel(80, 60), Some(band_color(&params, 60, 0.1)));
        assert_eq!(canvas.pixel(81, 60), Some(Rgb888::BLACK));
        assert_eq!(canvas.pixel(82, 60), Some(band_color(&params, 60, 0.3)));
        assert_ne!(band_color(&params, 60, 0.1), band_color(&params, 60, 0.3));
    }

    #[test]
    fn test_oversized_columns_are_an_error() {
        let params = CopperParams {
            column_width: 2_000_000_000,
            ..Default::default()
        };
        assert!(matches!(
            render_coppers(&params),
            Err(RenderError::UnsupportedDimensions { width: u32::MAX, height: 392 })
        ));
    }

    #[test]
    fn test_no_columns_is_an_error() {
        let params = CopperParams {
            sigmas: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            render_coppers(&params),
            Err(RenderError::UnsupportedDimensions { .. })
        ));
    }
}
