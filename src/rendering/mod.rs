//! Card rendering: drivers that feed the clamper and the canvas they draw on.

pub mod canvas;
pub mod coppers;
pub mod rainbow;

pub use canvas::Canvas;
pub use coppers::render_coppers;
pub use rainbow::render_rainbow;

use crate::error::RenderError;
use crate::models::{Card, CopperParams, RainbowParams};
use luma_clamp::ColorClamper;

/// Render a card with its default parameters.
pub fn render_card(card: Card, clamper: &ColorClamper) -> Result<Canvas, RenderError> {
    match card {
        Card::Rainbow => render_rainbow(&RainbowParams::default(), clamper),
        Card::Coppers => render_coppers(&CopperParams::default()),
    }
}
