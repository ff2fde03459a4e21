//! 8x8 ordered dither table.

/// Ranks of the 8x8 ordered dither pattern.
///
/// Row index is `x & 7`, column index is `y & 7`. Each rank in `1..=64`
/// appears exactly once.
#[rustfmt::skip]
const RANKS_8X8: [u8; 64] = [
     1, 49, 13, 61,  4, 52, 16, 64,
    33, 17, 45, 29, 36, 20, 48, 32,
     9, 57,  5, 53, 12, 60,  8, 56,
    41, 25, 37, 21, 44, 28, 40, 24,
     3, 51, 15, 63,  2, 50, 14, 62,
    35, 19, 47, 31, 34, 18, 46, 30,
    11, 59,  7, 55, 10, 58,  6, 54,
    43, 27, 39, 23, 42, 26, 38, 22,
];

/// A periodic 8x8 table of per-pixel dither biases.
///
/// The bias at a position is `rank / 64`. The table repeats every 8 pixels
/// in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DitherMatrix {
    ranks: [u8; 64],
}

impl DitherMatrix {
    /// The standard 8x8 pattern.
    pub const ORDERED_8X8: Self = Self { ranks: RANKS_8X8 };

    /// No dithering: every bias is zero.
    pub const FLAT: Self = Self { ranks: [0; 64] };

    /// Build a matrix from 64 ranks laid out as `ranks[(x & 7) * 8 + (y & 7)]`.
    pub const fn from_ranks(ranks: [u8; 64]) -> Self {
        Self { ranks }
    }

    /// Rank stored for a pixel position.
    #[inline]
    pub fn rank(&self, x: u32, y: u32) -> u8 {
        self.ranks[((x & 7) * 8 + (y & 7)) as usize]
    }

    /// Dither bias for a pixel position, `rank / 64`.
    #[inline]
    pub fn bias(&self, x: u32, y: u32) -> f64 {
        self.rank(x, y) as f64 / 64.0
    }
}

impl Default for DitherMatrix {
    fn default() -> Self {
        Self::ORDERED_8X8
    }
}
