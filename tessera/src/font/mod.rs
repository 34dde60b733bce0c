//! Baked bitmap fonts for the printable ASCII range.
//!
//! A [`GlyphSource`] turns characters into coverage bitmaps, [`BakedFont`]
//! packs those into a single-channel atlas at one pixel height, and
//! [`FontCache`] makes sure each height is baked only once.

mod atlas;
mod baked;
mod block;
mod cache;

pub use baked::{
    BakedChar, BakedFont, ATLAS_WIDTH, CHAR_COUNT, FIRST_CHAR, INITIAL_ATLAS_HEIGHT,
    LAST_CHAR, MAX_ATLAS_HEIGHT,
};
pub use block::BlockGlyphs;
pub use cache::FontCache;

use std::path::{Path, PathBuf};
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::{CacheKey, FontRef};
use thiserror::Error;

/// Font asset the conformance scenes are drawn with.
pub const DEFAULT_FONT_FILE: &str = "SourceCodePro-Regular.otf";

const SOURCES: &[Source] = &[Source::Outline];

#[cfg(test)]
pub(crate) const TEST_FONT: &[u8] =
    include_bytes!("../../../resources/test-fonts/DejaVuSansMono-Bold.ttf");

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FontError {
    #[error("unable to open font {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse font {name}")]
    Parse { name: String },
    #[error("pixel height must be greater than zero")]
    InvalidPixelHeight,
    #[error("glyph set at {pixel_height}px does not fit in a {width}x{max_height} atlas")]
    GlyphSetTooLarge {
        pixel_height: u32,
        width: u32,
        max_height: u32,
    },
}

/// Coverage bitmap for one character, positioned relative to the pen on the
/// baseline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RasterizedGlyph {
    /// Horizontal offset from the pen to the left edge of the bitmap.
    pub left: i32,
    /// Distance from the baseline up to the top edge of the bitmap.
    pub top: i32,
    pub width: u32,
    pub height: u32,
    pub advance: f32,
    /// `width * height` intensities, row-major, 0 to 255.
    pub coverage: Vec<u8>,
}

impl RasterizedGlyph {
    pub fn empty(advance: f32) -> Self {
        Self {
            advance,
            ..Self::default()
        }
    }
}

/// Something that can rasterize characters at a pixel height.
pub trait GlyphSource: Send + Sync {
    /// Name used in log lines and errors.
    fn name(&self) -> &str;

    /// Rasterizes `chars` in order, one glyph per character.
    fn rasterize(
        &self,
        pixel_height: u32,
        chars: &[char],
    ) -> Result<Vec<RasterizedGlyph>, FontError>;
}

/// TrueType/OpenType font held in memory and rasterized with swash.
pub struct FontFile {
    name: String,
    data: Vec<u8>,
    offset: u32,
    key: CacheKey,
}

impl FontFile {
    /// Reads the whole font file and checks that it parses.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| FontError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path.display().to_string(), data)
    }

    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self, FontError> {
        let name = name.into();
        let font = FontRef::from_index(&data, 0)
            .ok_or_else(|| FontError::Parse { name: name.clone() })?;
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            name,
            data,
            offset,
            key,
        })
    }

    #[inline]
    fn as_ref(&self) -> FontRef<'_> {
        // Rebuild the reference with the stored key so swash's caches stay warm.
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }
}

impl std::fmt::Debug for FontFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFile")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish()
    }
}

impl GlyphSource for FontFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn rasterize(
        &self,
        pixel_height: u32,
        chars: &[char],
    ) -> Result<Vec<RasterizedGlyph>, FontError> {
        let font = self.as_ref();
        let metrics = font.metrics(&[]);
        let extent = metrics.ascent + metrics.descent.abs();
        if extent <= 0.0 || metrics.units_per_em == 0 {
            return Err(FontError::Parse {
                name: self.name.clone(),
            });
        }

        // Same scale as stb_truetype's ScaleForPixelHeight: ascent to descent
        // spans exactly `pixel_height` pixels.
        let size = pixel_height as f32 * metrics.units_per_em as f32 / extent;
        let glyph_metrics = font.glyph_metrics(&[]).scale(size);
        let charmap = font.charmap();

        let mut context = ScaleContext::new();
        let mut scaler = context.builder(font).size(size).hint(false).build();
        let mut render = Render::new(SOURCES);
        render.format(Format::Alpha);

        let glyphs = chars
            .iter()
            .map(|&ch| {
                let id = charmap.map(ch);
                let advance = glyph_metrics.advance_width(id);
                match render.render(&mut scaler, id) {
                    Some(image) => RasterizedGlyph {
                        left: image.placement.left,
                        top: image.placement.top,
                        width: image.placement.width,
                        height: image.placement.height,
                        advance,
                        coverage: image.data,
                    },
                    None => RasterizedGlyph::empty(advance),
                }
            })
            .collect();

        Ok(glyphs)
    }
}
