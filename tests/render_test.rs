//! End-to-end rendering tests: render, encode, write, decode.

mod common;

use common::{decode_rgb, fixtures};
use luma_clamp::{ColorClamper, DitherMatrix, Rgb888};
use pretty_assertions::assert_eq;
use testcard::error::RenderError;
use testcard::models::{Card, CopperParams, RainbowParams};
use testcard::rendering::{render_card, render_coppers, render_rainbow, Canvas};

#[test]
fn test_default_card_dimensions() {
    let clamper = ColorClamper::new();

    let rainbow = render_card(Card::Rainbow, &clamper).unwrap();
    assert_eq!((rainbow.width(), rainbow.height()), (1696, 480));

    let coppers = render_card(Card::Coppers, &clamper).unwrap();
    assert_eq!((coppers.width(), coppers.height()), (244, 392));
}

#[test]
fn test_png_round_trip_preserves_pixels() {
    let canvas = render_rainbow(&fixtures::small_rainbow(), &ColorClamper::new()).unwrap();
    let bytes = canvas.encode_png().unwrap();
    let decoded = decode_rgb(&bytes);

    assert_eq!((decoded.width, decoded.height), (canvas.width(), canvas.height()));
    assert!(decoded.rgb == canvas.as_bytes(), "decoded pixels differ from canvas");
}

#[test]
fn test_write_png_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(Card::Coppers.file_name());

    let canvas = render_coppers(&fixtures::small_coppers()).unwrap();
    let written = canvas.write_png(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(written, bytes.len());

    let decoded = decode_rgb(&bytes);
    assert_eq!((decoded.width, decoded.height), (42, 64));
    // Band center of the first column at full base color
    assert_eq!(decoded.pixel(10, 8), [200, 50, 255]);
}

#[test]
fn test_write_png_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("card.png");

    let canvas = Canvas::new(4, 4).unwrap();
    match canvas.write_png(&path) {
        Err(RenderError::Io(_)) => {}
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_clamped_panel_is_never_darker_at_the_bottom_row() {
    // On the brightest row the plain quantizer cuts over-range channels,
    // the clamped panel keeps the requested luminance.
    let params = fixtures::small_rainbow();
    let clamper = ColorClamper::new().gamma(1.0).dither(DitherMatrix::FLAT);
    let canvas = render_rainbow(&params, &clamper).unwrap();

    let luminance = |c: Rgb888| 2126.0 * c.r as f64 + 7152.0 * c.g as f64 + 722.0 * c.b as f64;
    let y = params.height as i64 - 1;
    let shift = (params.panel_width + params.panel_gap) as i64;

    let mut brighter = 0;
    for x in 0..(params.panel_width - params.panel_gap) as i64 {
        let plain = canvas.pixel(x, y).unwrap();
        let clamped = canvas.pixel(x + shift, y).unwrap();
        assert!(
            luminance(clamped) + 10001.0 >= luminance(plain),
            "x={x}: clamped {clamped:?} darker than plain {plain:?}"
        );
        if luminance(clamped) > luminance(plain) + 10000.0 {
            brighter += 1;
        }
    }
    assert!(brighter > 0, "expected the clamp to recover lost luminance somewhere");
}

#[test]
fn test_right_panel_is_clipped_at_canvas_edge() {
    let params = RainbowParams {
        panel_width: 32,
        height: 16,
        panel_gap: 8,
        ..Default::default()
    };
    let canvas = render_rainbow(&params, &ColorClamper::new()).unwrap();
    assert_eq!(canvas.width(), 64);
    assert_eq!(canvas.pixel(64, 15), None);
    // Last visible right-panel column corresponds to x = 23
    let y = 15;
    assert_ne!(canvas.pixel(63, y), Some(Rgb888::BLACK));
}

#[test]
fn test_invalid_params_are_rejected() {
    let clamper = ColorClamper::new();

    let rainbow = RainbowParams {
        height: 0,
        ..Default::default()
    };
    assert!(matches!(
        render_rainbow(&rainbow, &clamper),
        Err(RenderError::UnsupportedDimensions { height: 0, .. })
    ));

    let coppers = CopperParams {
        sigmas: Vec::new(),
        ..Default::default()
    };
    assert!(matches!(
        render_coppers(&coppers),
        Err(RenderError::UnsupportedDimensions { width: 0, .. })
    ));
}
