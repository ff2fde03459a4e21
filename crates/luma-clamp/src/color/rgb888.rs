//! 8-bit output pixel

/// A quantized pixel with three 8-bit channels.
///
/// This is the final framebuffer format. [`to_packed`](Rgb888::to_packed)
/// produces the conventional `0xRRGGBB` integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb888 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb888 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as `R * 65536 + G * 256 + B`.
    ///
    /// # Example
    /// ```
    /// use luma_clamp::Rgb888;
    /// assert_eq!(Rgb888::new(0x12, 0x34, 0x56).to_packed(), 0x123456);
    /// ```
    #[inline]
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack from `0xRRGGBB`; bits above 24 are ignored.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Channels as `[R, G, B]` bytes.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
