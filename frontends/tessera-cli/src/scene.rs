use crate::config::Config;
use clap::ValueEnum;
use std::path::PathBuf;
use tessera::font::{BlockGlyphs, FontCache, FontError, DEFAULT_FONT_FILE};
use tessera::{patterns, RgbaImage};
use tracing::info;

/// Font path value that selects block glyphs instead of a font file.
pub const NO_FONT: &str = "none";

/// Reference textures the CLI knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    Solid,
    BlueGradientOverGreen,
    BlueAlphaGradient,
    BlueAlphaGradientPremultiplied,
    NumberGrid,
    LabelCard,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Solid,
        Pattern::BlueGradientOverGreen,
        Pattern::BlueAlphaGradient,
        Pattern::BlueAlphaGradientPremultiplied,
        Pattern::NumberGrid,
        Pattern::LabelCard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Solid => "solid",
            Pattern::BlueGradientOverGreen => "blue-gradient-over-green",
            Pattern::BlueAlphaGradient => "blue-alpha-gradient",
            Pattern::BlueAlphaGradientPremultiplied => "blue-alpha-gradient-premultiplied",
            Pattern::NumberGrid => "number-grid",
            Pattern::LabelCard => "label-card",
        }
    }

    pub fn render(self, fonts: &FontCache, config: &Config) -> tessera::Result<RgbaImage> {
        match self {
            Pattern::Solid => patterns::solid(
                config.gradient_size,
                config.gradient_size,
                config.solid_color,
            ),
            Pattern::BlueGradientOverGreen => {
                patterns::blue_gradient_over_green(config.gradient_size)
            }
            Pattern::BlueAlphaGradient => {
                patterns::blue_alpha_gradient(config.gradient_size, false)
            }
            Pattern::BlueAlphaGradientPremultiplied => {
                patterns::blue_alpha_gradient(config.gradient_size, true)
            }
            Pattern::NumberGrid => {
                let grid = &config.grid;
                let (image, _) = patterns::number_grid(
                    fonts,
                    grid.width,
                    grid.columns,
                    grid.first_number,
                    grid.red_zone,
                )?;
                Ok(image)
            }
            Pattern::LabelCard => {
                let card = &config.card;
                patterns::label_card(
                    fonts,
                    card.width,
                    card.height,
                    &card.text,
                    card.pixel_height,
                )
            }
        }
    }
}

/// Font cache for the configured font, falling back to the bundled file name
/// in the working directory.
pub fn open_fonts(font_path: Option<&str>) -> Result<FontCache, FontError> {
    match font_path {
        Some(NO_FONT) => {
            info!("drawing text with block glyphs");
            Ok(FontCache::new(BlockGlyphs::new()))
        }
        Some(path) => FontCache::open(path),
        None => FontCache::open(DEFAULT_FONT_FILE),
    }
}

/// Renders every pattern into `config.output_dir`, returning the written
/// paths in order.
pub fn render_all(
    patterns: &[Pattern],
    fonts: &FontCache,
    config: &Config,
) -> tessera::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(patterns.len());

    for pattern in patterns {
        let mut image = pattern.render(fonts, config)?;
        if config.srgb && !image.is_srgb() {
            image.convert_to_srgb();
        }

        let path = config.output_dir.join(pattern.name()).with_extension("png");
        image.save(&path)?;
        info!(
            "wrote {} ({}x{}) to {}",
            pattern.name(),
            image.width(),
            image.height(),
            path.display()
        );
        written.push(path);
    }

    Ok(written)
}
