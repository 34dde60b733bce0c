use super::atlas::RowPacker;
use super::{FontError, GlyphSource, RasterizedGlyph};
use tracing::debug;

pub const FIRST_CHAR: char = ' ';
pub const LAST_CHAR: char = '~';
pub const CHAR_COUNT: usize = LAST_CHAR as usize - FIRST_CHAR as usize + 1;

pub const ATLAS_WIDTH: u32 = 1024;
/// Starting atlas height; doubled until the glyph set fits.
pub const INITIAL_ATLAS_HEIGHT: u32 = 64;
/// Largest atlas height tried before giving up on a pixel height.
pub const MAX_ATLAS_HEIGHT: u32 = 16384;

/// Placement and metrics of one baked character.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BakedChar {
    /// Glyph box inside the atlas, `x1`/`y1` exclusive.
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
    /// Offset from the pen position on the baseline to the glyph box.
    pub xoff: f32,
    pub yoff: f32,
    pub xadvance: f32,
}

impl BakedChar {
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// Printable ASCII rasterized at one pixel height into a single-channel
/// atlas. Immutable once baked.
pub struct BakedFont {
    pixel_height: u32,
    bitmap: Vec<u8>,
    bitmap_height: u32,
    chars: [BakedChar; CHAR_COUNT],
}

impl BakedFont {
    pub fn bake(source: &dyn GlyphSource, pixel_height: u32) -> Result<Self, FontError> {
        if pixel_height == 0 {
            return Err(FontError::InvalidPixelHeight);
        }
        let too_large = FontError::GlyphSetTooLarge {
            pixel_height,
            width: ATLAS_WIDTH,
            max_height: MAX_ATLAS_HEIGHT,
        };
        if pixel_height > MAX_ATLAS_HEIGHT {
            return Err(too_large);
        }

        let chars: Vec<char> = (FIRST_CHAR..=LAST_CHAR).collect();
        let glyphs = source.rasterize(pixel_height, &chars)?;
        if glyphs.len() != CHAR_COUNT {
            return Err(FontError::Parse {
                name: source.name().to_owned(),
            });
        }

        let empty = RowPacker::new(ATLAS_WIDTH, INITIAL_ATLAS_HEIGHT);
        if let Some(glyph) = glyphs.iter().find(|glyph| !empty.fits_row(glyph.width)) {
            debug!(
                "a {}px wide glyph of {} at {}px cannot fit a {}px atlas row",
                glyph.width,
                source.name(),
                pixel_height,
                ATLAS_WIDTH
            );
            return Err(too_large);
        }

        let mut bitmap_height = INITIAL_ATLAS_HEIGHT;
        loop {
            if let Some((placements, used_height)) = place(&glyphs, bitmap_height) {
                debug!(
                    "baked {} at {}px, {} of {} atlas rows used",
                    source.name(),
                    pixel_height,
                    used_height,
                    bitmap_height
                );
                return Ok(Self::from_placements(
                    pixel_height,
                    bitmap_height,
                    &glyphs,
                    &placements,
                ));
            }

            bitmap_height *= 2;
            if bitmap_height > MAX_ATLAS_HEIGHT {
                return Err(too_large);
            }
            debug!(
                "glyphs of {} at {}px do not fit, growing atlas to {}x{}",
                source.name(),
                pixel_height,
                ATLAS_WIDTH,
                bitmap_height
            );
        }
    }

    fn from_placements(
        pixel_height: u32,
        bitmap_height: u32,
        glyphs: &[RasterizedGlyph],
        placements: &[(u32, u32)],
    ) -> Self {
        let mut bitmap = vec![0u8; ATLAS_WIDTH as usize * bitmap_height as usize];
        let mut chars = [BakedChar::default(); CHAR_COUNT];

        for ((baked, glyph), &(x, y)) in chars.iter_mut().zip(glyphs).zip(placements) {
            if glyph.width > 0 {
                let rows = glyph
                    .coverage
                    .chunks_exact(glyph.width as usize)
                    .take(glyph.height as usize);
                for (row, src) in rows.enumerate() {
                    let start = (y as usize + row) * ATLAS_WIDTH as usize + x as usize;
                    bitmap[start..start + src.len()].copy_from_slice(src);
                }
            }

            *baked = BakedChar {
                x0: x,
                y0: y,
                x1: x + glyph.width,
                y1: y + glyph.height,
                xoff: glyph.left as f32,
                yoff: -glyph.top as f32,
                xadvance: glyph.advance,
            };
        }

        Self {
            pixel_height,
            bitmap,
            bitmap_height,
            chars,
        }
    }

    /// Metrics for `c`; characters outside `' '..='~'` map to `'_'`.
    #[inline]
    pub fn baked_char(&self, c: char) -> &BakedChar {
        let c = if (FIRST_CHAR..=LAST_CHAR).contains(&c) {
            c
        } else {
            '_'
        };
        &self.chars[c as usize - FIRST_CHAR as usize]
    }

    /// Intensities of row `row` of the glyph, `width()` bytes long.
    #[inline]
    pub fn baked_char_row(&self, baked: &BakedChar, row: u32) -> &[u8] {
        let start = (baked.y0 + row) as usize * ATLAS_WIDTH as usize + baked.x0 as usize;
        &self.bitmap[start..start + baked.width() as usize]
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    pub fn bitmap_width(&self) -> u32 {
        ATLAS_WIDTH
    }

    pub fn bitmap_height(&self) -> u32 {
        self.bitmap_height
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }
}

impl std::fmt::Debug for BakedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BakedFont")
            .field("pixel_height", &self.pixel_height)
            .field("bitmap_width", &ATLAS_WIDTH)
            .field("bitmap_height", &self.bitmap_height)
            .finish_non_exhaustive()
    }
}

/// Atlas positions for every glyph and the rows they use, or `None` if
/// they do not all fit.
fn place(glyphs: &[RasterizedGlyph], bitmap_height: u32) -> Option<(Vec<(u32, u32)>, u32)> {
    let mut packer = RowPacker::new(ATLAS_WIDTH, bitmap_height);
    let placements = glyphs
        .iter()
        .map(|glyph| packer.allocate(glyph.width, glyph.height))
        .collect::<Option<Vec<_>>>()?;
    Some((placements, packer.used_height()))
}
