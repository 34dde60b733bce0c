use super::{FontError, GlyphSource, RasterizedGlyph};

/// Glyph source that draws every visible character as a solid block sitting
/// on the baseline, with monospaced advances. Space stays blank.
///
/// It needs no font asset and its output is exact, which makes it useful for
/// layout tests, benches and previews on machines without the font file.
#[derive(Debug, Clone, Copy)]
pub struct BlockGlyphs {
    coverage: u8,
}

impl BlockGlyphs {
    pub fn new() -> Self {
        Self::with_coverage(u8::MAX)
    }

    /// Blocks filled with `coverage` instead of full intensity.
    pub fn with_coverage(coverage: u8) -> Self {
        Self { coverage }
    }

    /// Pen advance for one character: 0.6 of the pixel height, rounded up.
    pub fn advance(pixel_height: u32) -> u32 {
        (pixel_height as u64 * 3).div_ceil(5) as u32
    }

    /// Block height: 0.7 of the pixel height, rounded up.
    pub fn block_height(pixel_height: u32) -> u32 {
        (pixel_height as u64 * 7).div_ceil(10).max(1) as u32
    }
}

impl Default for BlockGlyphs {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphSource for BlockGlyphs {
    fn name(&self) -> &str {
        "blocks"
    }

    fn rasterize(
        &self,
        pixel_height: u32,
        chars: &[char],
    ) -> Result<Vec<RasterizedGlyph>, FontError> {
        let advance = Self::advance(pixel_height);
        let width = advance.saturating_sub(1).max(1);
        let height = Self::block_height(pixel_height);

        let glyphs = chars
            .iter()
            .map(|&ch| {
                if ch.is_whitespace() {
                    return RasterizedGlyph::empty(advance as f32);
                }
                RasterizedGlyph {
                    left: 0,
                    top: height as i32,
                    width,
                    height,
                    advance: advance as f32,
                    coverage: vec![self.coverage; (width * height) as usize],
                }
            })
            .collect();

        Ok(glyphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_metrics() {
        let glyphs = BlockGlyphs::new().rasterize(10, &[' ', 'x']).unwrap();

        assert_eq!(glyphs[0], RasterizedGlyph::empty(6.0));
        assert_eq!(glyphs[1].width, 5);
        assert_eq!(glyphs[1].height, 7);
        assert_eq!(glyphs[1].top, 7);
        assert_eq!(glyphs[1].advance, 6.0);
        assert_eq!(glyphs[1].coverage.len(), 35);
        assert!(glyphs[1].coverage.iter().all(|&c| c == 255));
    }

    #[test]
    fn test_metrics_at_extreme_heights() {
        assert_eq!(BlockGlyphs::advance(u32::MAX), 2_576_980_377);
        assert_eq!(BlockGlyphs::block_height(u32::MAX), 3_006_477_107);
        assert_eq!(BlockGlyphs::block_height(1), 1);
    }
}
