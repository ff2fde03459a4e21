use std::fmt;

/// The test cards produced by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    /// Hue/saturation sweep, plain quantizer vs luminance-preserving clamp
    Rainbow,
    /// Gaussian falloff bands at three widths
    Coppers,
}

impl Card {
    pub const ALL: [Card; 2] = [Card::Rainbow, Card::Coppers];

    /// Output file name, relative to the working directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Card::Rainbow => "rainbow.png",
            Card::Coppers => "coppers.png",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Rainbow => write!(f, "rainbow card"),
            Card::Coppers => write!(f, "copper-bar card"),
        }
    }
}

/// Fixed parameters of the rainbow card.
///
/// The canvas holds two panels of `panel_width` columns. The right panel is
/// shifted by `panel_width + panel_gap`, so its last `panel_gap` columns fall
/// off the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RainbowParams {
    pub panel_width: u32,
    pub height: u32,
    pub panel_gap: u32,
    /// HSV value of the sweep (0.0..=1.0)
    pub value: f64,
    /// Degrees of hue covered across one panel
    pub hue_span: f64,
    /// Hue at the left edge of a panel
    pub hue_offset: f64,
    /// Saturation reaches 1.0 at `panel_width / saturation_ramp`
    pub saturation_ramp: f64,
    /// Row brightness is `(y / height) ^ brightness_exponent`
    pub brightness_exponent: f64,
}

impl Default for RainbowParams {
    fn default() -> Self {
        Self {
            panel_width: 848,
            height: 480,
            panel_gap: 16,
            value: 0.1,
            hue_span: 1.5 * 360.0,
            hue_offset: -180.0,
            saturation_ramp: 1.9,
            brightness_exponent: 2.0,
        }
    }
}

impl RainbowParams {
    /// Canvas size as `(width, height)`.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.panel_width.saturating_mul(2), self.height)
    }
}

/// Fixed parameters of the copper-bar card.
#[derive(Debug, Clone, PartialEq)]
pub struct CopperParams {
    pub column_width: u32,
    pub height: u32,
    pub column_gap: u32,
    /// Number of bands stacked vertically in each column
    pub bands: u32,
    /// Falloff width of each column, one column per entry
    pub sigmas: Vec<f64>,
    /// Band color at full intensity, as `(r, g, b)` multipliers
    pub base: (f64, f64, f64),
    pub marker: u32,
    pub marker_rim: u32,
}

impl Default for CopperParams {
    fn default() -> Self {
        Self {
            column_width: 80,
            height: 392,
            column_gap: 2,
            bands: 4,
            sigmas: vec![0.1, 0.3, 0.5],
            base: (200.0, 50.0, 255.0),
            marker: 0xFFFFFF,
            marker_rim: 0xAA55AA,
        }
    }
}

impl CopperParams {
    /// Canvas size as `(width, height)`.
    ///
    /// Saturates on overflow so oversized layouts are rejected by the canvas.
    pub fn canvas_size(&self) -> (u32, u32) {
        let columns = u32::try_from(self.sigmas.len()).unwrap_or(u32::MAX);
        let width = columns
            .saturating_mul(self.column_width)
            .saturating_add(columns.saturating_sub(1).saturating_mul(self.column_gap));
        (width, self.height)
    }

    /// Left edge of column `index`.
    pub fn column_left(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.column_width.saturating_add(self.column_gap))
    }
}
