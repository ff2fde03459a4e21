//! Test fixtures: scaled-down card parameters.

use testcard::models::{CopperParams, RainbowParams};

/// A rainbow card small enough to render quickly in debug builds
pub fn small_rainbow() -> RainbowParams {
    RainbowParams {
        panel_width: 96,
        height: 40,
        panel_gap: 8,
        ..Default::default()
    }
}

/// A two-column copper card
pub fn small_coppers() -> CopperParams {
    CopperParams {
        column_width: 20,
        height: 64,
        sigmas: vec![0.2, 0.4],
        ..Default::default()
    }
}
