use crate::error::RenderError;
use luma_clamp::Rgb888;
use std::io::Cursor;
use std::path::Path;

/// Largest accepted canvas edge, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Write-only RGB framebuffer with PNG output.
///
/// Starts out black. Writes outside the canvas are dropped silently; the card
/// drivers rely on this to clip panels and marker lines at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// RGB8, row-major
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a black canvas.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(RenderError::UnsupportedDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB8 pixel data, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 3)
    }

    /// Set one pixel; out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgb888) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i..i + 3].copy_from_slice(&color.to_bytes());
        }
    }

    /// Read one pixel, `None` outside the canvas.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb888> {
        self.offset(x, y)
            .map(|i| Rgb888::new(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    /// Draw a horizontal line covering `x1..=x2` (in either order) on row `y`.
    pub fn hline(&mut self, x1: i64, x2: i64, y: i64, color: Rgb888) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        let (from, to) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let from = from.max(0);
        let to = to.min(self.width as i64 - 1);
        for x in from..=to {
            self.set_pixel(x, y, color);
        }
    }

    /// Encode as an 8-bit RGB PNG.
    ///
    /// The image is written with fast settings and then recompressed with
    /// oxipng. If recompression fails the unoptimized bytes are returned.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
            let mut writer = encoder
                .write_header()
                .map_err(|e| RenderError::PngEncode(e.to_string()))?;
            writer
                .write_image_data(&self.pixels)
                .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        }
        let png_bytes = buf.into_inner();

        // Re-compress with oxipng (zopfli + adaptive filter selection)
        let optimized = match oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        ) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "PNG recompression failed, keeping fast encoding");
                png_bytes
            }
        };
        Ok(optimized)
    }

    /// Encode and write to `path`. Returns the number of bytes written.
    pub fn write_png(&self, path: &Path) -> Result<usize, RenderError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, &bytes)?;
        Ok(bytes.len())
    }
}
