//! Text layout demo: measures and draws strings with a BMFont description
//!
//! Usage: `text_demo [font.ron] [font.toml] [text...]`

use bmfont_text::foundation::logging;
use bmfont_text::prelude::*;

const DEFAULT_DESCRIPTION: &str = "text_demo/resources/fonts/demo_mono.ron";
const DEFAULT_CONFIG: &str = "text_demo/resources/font.toml";
const DEFAULT_TEXT: &str = "AVATAR Tools\r\nLine two: kerning & fallback \u{2603}";

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("font: {0}")]
    Font(#[from] FontError),

    #[error("render: {0}")]
    Render(#[from] RenderError),
}

/// Backend that logs each sprite instead of drawing it
#[derive(Default)]
struct LogRenderer {
    draws: usize,
}

impl GlyphRenderer for LogRenderer {
    fn draw_glyph(
        &mut self,
        command: &GlyphDrawCommand,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        log::debug!(
            "draw {:?} from {:?} to {:?}",
            command.character,
            command.source,
            command.destination
        );
        self.draws += 1;
        Ok(())
    }
}

fn run() -> Result<(), DemoError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let description_path = args.first().map_or(DEFAULT_DESCRIPTION, String::as_str);
    let config_path = args.get(1).map_or(DEFAULT_CONFIG, String::as_str);
    let text = if args.len() > 2 {
        args[2..].join(" ")
    } else {
        DEFAULT_TEXT.to_string()
    };

    let description = FontDescription::load_from_file(description_path)?;
    let config = FontConfig::load_from_file(config_path)?;
    config.validate()?;

    let font = BitmapFont::new(TextureHandle(1), description, &config)?;
    log::info!(
        "Loaded '{}': {} glyphs, {} kerning pairs, line spacing {}",
        font.info().face,
        font.metrics().glyph_count(),
        font.metrics().kerning_pair_count(),
        font.metrics().line_spacing()
    );

    let size = font.measure_string(&text)?;
    log::info!("Measured {:?}: {} x {} px", text, size.width, size.height);

    let mut renderer = LogRenderer::default();
    let params = DrawParams::new(Vec2::new(20.0, 20.0)).with_uniform_scale(2.0);
    draw_string(&mut renderer, &font, &text, &params)?;
    log::info!("Issued {} glyph draws", renderer.draws);

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level("info");

    log::info!("Starting text layout demo");

    match run() {
        Ok(()) => {
            log::info!("Text layout demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Text layout demo failed: {}", e);
            Err(e.into())
        }
    }
}
