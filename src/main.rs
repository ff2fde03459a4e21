use anyhow::Context;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use luma_clamp::ColorClamper;
use testcard::models::Card;
use testcard::rendering::render_card;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "testcard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let clamper = ColorClamper::new();

    for card in Card::ALL {
        let canvas = render_card(card, &clamper).with_context(|| format!("rendering {card}"))?;
        let path = Path::new(card.file_name());
        let bytes = canvas
            .write_png(path)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(
            file = %path.display(),
            width = canvas.width(),
            height = canvas.height(),
            bytes,
            "Rendered {card}"
        );
    }

    Ok(())
}
