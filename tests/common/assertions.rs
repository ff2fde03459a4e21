//! Assertion and decoding helpers for tests.

use pretty_assertions::assert_eq;
use std::io::Cursor;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// A decoded PNG, normalized to 8-bit RGB.
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl DecodedPng {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * self.width + x) * 3) as usize;
        [self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]]
    }
}

/// Assert the bytes are a PNG
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.len() > PNG_SIGNATURE.len() && bytes[..8] == PNG_SIGNATURE,
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Decode a PNG to RGB8, whatever color type the optimizer picked.
pub fn decode_rgb(bytes: &[u8]) -> DecodedPng {
    assert_png(bytes);

    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().expect("PNG header should decode");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("PNG frame should decode");
    buf.truncate(info.buffer_size());

    let rgb: Vec<u8> = match info.color_type {
        png::ColorType::Rgb => buf,
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0]])
            .collect(),
        other => panic!("Unexpected color type after expansion: {other:?}"),
    };

    assert_eq!(
        rgb.len(),
        (info.width * info.height * 3) as usize,
        "Decoded buffer does not match dimensions"
    );

    DecodedPng {
        width: info.width,
        height: info.height,
        rgb,
    }
}
