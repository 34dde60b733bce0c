use super::RgbaImage;
use crate::error::Result;
use crate::font::{BakedChar, BakedFont, FontCache};
use crate::geometry::Rect2Di;
use colors::Color;
use tracing::warn;

/// Whether [`RgbaImage::put_text`] moves words that do not fit onto a new
/// line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WordWrap {
    #[default]
    Enabled,
    /// Text runs past the right edge and is clipped. A warning is logged
    /// every time a wrap is suppressed.
    Disabled,
}

struct Pen {
    left: f32,
    x: f32,
    baseline: i64,
    line_height: i64,
}

impl Pen {
    #[inline]
    fn new_line(&mut self) {
        self.x = self.left;
        self.baseline = self.baseline.saturating_add(self.line_height);
    }
}

#[inline]
fn blend(intensity: u8, color: f32, dest: u8) -> u8 {
    let src = (intensity as f32 * color) as u8;
    let kept = dest as u32 * (255 - intensity as u32) / 255;
    src.saturating_add(kept as u8)
}

impl RgbaImage {
    /// Draws `text` into `rect` with the font baked at `pixel_height`.
    ///
    /// Glyph intensities are blended over the existing pixels assuming a
    /// premultiplied `color`. Nothing outside `rect` is touched, and
    /// characters outside printable ASCII are drawn as `_`.
    pub fn put_text(
        &mut self,
        fonts: &FontCache,
        rect: Rect2Di,
        text: &str,
        pixel_height: u32,
        color: Color,
        word_wrap: WordWrap,
    ) -> Result<()> {
        let font = fonts.get_or_create(pixel_height)?;

        let right = rect.right() as f32;
        let mut pen = Pen {
            left: rect.offset.x as f32,
            x: rect.offset.x as f32,
            // Glyphs hang off the baseline, so start roughly one ascent down.
            baseline: rect.offset.y as i64 + (pixel_height as f32 * 0.8) as i64,
            line_height: pixel_height as i64,
        };

        let chars: Vec<char> = text.chars().collect();
        for (i, &c) in chars.iter().enumerate() {
            if c == '\n' {
                pen.new_line();
                continue;
            }

            let word: f32 = chars[i..]
                .iter()
                .take_while(|&&w| w > ' ')
                .map(|&w| font.baked_char(w).xadvance)
                .sum();
            if pen.x + word > right && word <= rect.extent.width as f32 {
                wrap_or_warn(&mut pen, word_wrap, text);
            }

            let baked = *font.baked_char(c);
            if pen.x + baked.width() as f32 > right {
                wrap_or_warn(&mut pen, word_wrap, text);
            }

            self.blend_glyph(&font, &baked, &pen, rect, color);
            pen.x += baked.xadvance;
        }

        Ok(())
    }

    fn blend_glyph(
        &mut self,
        font: &BakedFont,
        baked: &BakedChar,
        pen: &Pen,
        clip: Rect2Di,
        color: Color,
    ) {
        let left = (baked.xoff + pen.x).round() as i64;
        let top = pen.baseline.saturating_add(baked.yoff as i64);
        // Image bounds intersected with the clip rect, both half-open.
        let (x0, x1) = (clip.offset.x.max(0) as i64, clip.right().min(self.width as i64));
        let (y0, y1) = (clip.offset.y.max(0) as i64, clip.bottom().min(self.height as i64));

        for cy in 0..baked.height() {
            let dest_y = top.saturating_add(cy as i64);
            if dest_y < y0 || dest_y >= y1 {
                continue;
            }

            let row = font.baked_char_row(baked, cy);
            for (cx, &intensity) in row.iter().enumerate() {
                let dest_x = left.saturating_add(cx as i64);
                if dest_x < x0 || dest_x >= x1 {
                    continue;
                }

                let index = self.index(dest_x as u32, dest_y as u32);
                let pixel = &mut self.pixels[index];
                pixel.r = blend(intensity, color.r, pixel.r);
                pixel.g = blend(intensity, color.g, pixel.g);
                pixel.b = blend(intensity, color.b, pixel.b);
                pixel.a = blend(intensity, color.a, pixel.a);
            }
        }
    }
}

fn wrap_or_warn(pen: &mut Pen, word_wrap: WordWrap, text: &str) {
    match word_wrap {
        WordWrap::Enabled => pen.new_line(),
        WordWrap::Disabled => {
            warn!("Would have wrapped text but word wrap is disabled: {:?}", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::font::{BlockGlyphs, FontError, FontFile, TEST_FONT};
    use colors::{Rgba8, BLACK, WHITE};
    use parking_lot::Mutex;
    use std::sync::Arc;

    const OPAQUE_BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);
    const OPAQUE_WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);

    // At 10px a block glyph is 5x7 with a 6px advance and the first baseline
    // sits 8px below the rect top, so glyph rows are rect.y + 1 ..= rect.y + 7.
    const PX: u32 = 10;

    fn black(width: u32, height: u32) -> RgbaImage {
        let mut image = RgbaImage::new(width, height);
        image.draw_rect(0, 0, width as i32, height as i32, BLACK).unwrap();
        image
    }

    fn is_white(image: &RgbaImage, x: u32, y: u32) -> bool {
        image.pixel(x, y) == Some(OPAQUE_WHITE)
    }

    #[test]
    fn test_single_glyph_placement() {
        let fonts = FontCache::new(BlockGlyphs::new());
        let mut image = black(20, 10);
        image
            .put_text(&fonts, Rect2Di::new(0, 0, 20, 10), "A", PX, WHITE, WordWrap::Enabled)
            .unwrap();

        for y in 0..10 {
            for x in 0..20 {
                let inside = x < 5 && (1..8).contains(&y);
                let expected = if inside { OPAQUE_WHITE } else { OPAQUE_BLACK };
                assert_eq!(image.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_word_moves_to_next_line() {
        let fonts = FontCache::new(BlockGlyphs::new());
        let rect = Rect2Di::new(0, 0, 20, 30);

        let mut wrapped = black(20, 30);
        wrapped
            .put_text(&fonts, rect, "ab cd", PX, WHITE, WordWrap::Enabled)
            .unwrap();
        assert!(is_white(&wrapped, 0, 1));
        assert!(is_white(&wrapped, 6, 1));
        assert!(!is_white(&wrapped, 18, 1));
        assert!(is_white(&wrapped, 0, 11));
        assert!(is_white(&wrapped, 6, 11));

        let mut overflowing = black(20, 30);
        overflowing
            .put_text(&fonts, rect, "ab cd", PX, WHITE, WordWrap::Disabled)
            .unwrap();
        assert!(is_white(&overflowing, 18, 1));
        assert!(is_white(&overflowing, 19, 1));
        assert!((0..20).all(|x| !is_white(&overflowing, x, 11)));
    }

    #[test]
    fn test_long_word_breaks_per_glyph() {
        let fonts = FontCache::new(BlockGlyphs::new());
        let mut image = black(20, 30);
        image
            .put_text(&fonts, Rect2Di::new(0, 0, 20, 30), "abcd", PX, WHITE, WordWrap::Enabled)
            .unwrap();

        // The word is wider than the rect, so only the fourth glyph wraps.
        assert!(is_white(&image, 12, 1));
        assert!(!is_white(&image, 18, 1));
        assert!(is_white(&image, 0, 11));
        assert!(!is_white(&image, 6, 11));
    }

    #[test]
    fn test_newline_resets_pen() {
        let fonts = FontCache::new(BlockGlyphs::new());
        let mut image = black(20, 30);
        image
            .put_text(&fonts, Rect2Di::new(2, 0, 18, 30), "a\nb", PX, WHITE, WordWrap::Disabled)
            .unwrap();

        assert!(is_white(&image, 2, 1));
        assert!(!is_white(&image, 8, 1));
        assert!(is_white(&image, 2, 11));
        assert!(!is_white(&image, 1, 11));
    }

    #[test]
    fn test_blend_is_premultiplied_and_truncated() {
        let fonts = FontCache::new(BlockGlyphs::with_coverage(128));
        let mut image = RgbaImage::new(10, 10);
        image
            .draw_rect(0, 0, 10, 10, Color::new(100.0 / 255.0, 200.0 / 255.0, 50.0 / 255.0, 1.0))
            .unwrap();
        let before = image.pixel(0, 1).unwrap();

        image
            .put_text(
                &fonts,
                Rect2Di::new(0, 0, 10, 10),
                "x",
                PX,
                Color::new(1.0, 0.5, 0.0, 1.0),
                WordWrap::Enabled,
            )
            .unwrap();

        let expected = Rgba8::new(
            128 + (before.r as u32 * 127 / 255) as u8,
            64 + (before.g as u32 * 127 / 255) as u8,
            (before.b as u32 * 127 / 255) as u8,
            255,
        );
        assert_eq!(image.pixel(0, 1), Some(expected));
    }

    #[test]
    fn test_unknown_characters_render_as_underscore() {
        let fonts = FontCache::new(BlockGlyphs::new());
        let rect = Rect2Di::new(0, 0, 20, 10);
        let render = |text: &str| {
            let mut image = black(20, 10);
            image
                .put_text(&fonts, rect, text, PX, WHITE, WordWrap::Enabled)
                .unwrap();
            image
        };

        let underscore = render("_");
        assert_eq!(render("é"), underscore);
        assert_eq!(render("\t"), underscore);
        assert_ne!(render(" "), underscore);
    }

    #[test]
    fn test_text_stays_inside_clip() {
        let fonts = FontCache::new(BlockGlyphs::new());
        let (width, height) = (40, 30);
        let base = black(width, height);
        let texts = ["Hello, world!", "wrap me\nplease ~_~", "é\tx yy zzz"];

        let mut seed = 0x2545_f491u32;
        let mut next = |range: i32| {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as i32 % range
        };

        for round in 0..300 {
            let rect = Rect2Di::new(next(60) - 10, next(50) - 10, next(50), next(40));
            let text = texts[round % texts.len()];
            let pixel_height = [6, 10, 17][round % 3];
            let word_wrap = if round % 2 == 0 {
                WordWrap::Enabled
            } else {
                WordWrap::Disabled
            };

            let mut image = base.clone();
            image
                .put_text(&fonts, rect, text, pixel_height, WHITE, word_wrap)
                .unwrap();

            for y in 0..height {
                for x in 0..width {
                    if !rect.contains(x as i32, y as i32) {
                        assert_eq!(
                            image.pixel(x, y),
                            base.pixel(x, y),
                            "({x}, {y}) changed outside {rect:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_font_errors_propagate() {
        let fonts = FontCache::new(BlockGlyphs::new());
        let mut image = RgbaImage::new(4, 4);

        let err = image
            .put_text(&fonts, Rect2Di::new(0, 0, 4, 4), "a", 0, WHITE, WordWrap::Enabled)
            .unwrap_err();
        assert!(matches!(err, Error::Font(FontError::InvalidPixelHeight)));
    }

    #[test]
    fn test_rect_at_coordinate_limits() {
        let fonts = FontCache::new(BlockGlyphs::new());
        let base = black(10, 10);

        for rect in [
            Rect2Di::new(i32::MAX - 5, 0, 100, 10),
            Rect2Di::new(0, i32::MAX - 5, 10, i32::MAX),
            Rect2Di::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX),
        ] {
            let mut image = base.clone();
            image
                .put_text(&fonts, rect, "wrap\nme please", PX, WHITE, WordWrap::Enabled)
                .unwrap();
            assert_eq!(image, base, "{rect:?}");
        }
    }

    #[test]
    fn test_font_file_ink_stays_between_rect_top_and_baseline() {
        let font = FontFile::from_bytes("DejaVuSansMono-Bold", TEST_FONT.to_vec()).unwrap();
        let fonts = FontCache::new(font);
        let rect = Rect2Di::new(4, 5, 150, 50);
        // First baseline: rect.y + trunc(0.8 * 24).
        let baseline = 5 + 19;

        let lit_rows = |text: &str| {
            let mut image = black(160, 60);
            image
                .put_text(&fonts, rect, text, 24, WHITE, WordWrap::Enabled)
                .unwrap();
            (0..60u32)
                .filter(|&y| (0..160).any(|x| image.pixel(x, y).is_some_and(|p| p.r > 0)))
                .collect::<Vec<u32>>()
        };

        let capitals = lit_rows("Hello");
        assert!(!capitals.is_empty());
        assert!(capitals.iter().all(|&y| (5..=baseline).contains(&y)), "{capitals:?}");
        // Cap height is around 15px at 24px.
        assert!(capitals[0] < baseline - 10, "{capitals:?}");

        let descenders = lit_rows("gy");
        assert!(descenders.iter().any(|&y| y > baseline + 1), "{descenders:?}");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    fn render_with_logs(text: &str, word_wrap: WordWrap) -> String {
        let fonts = FontCache::new(BlockGlyphs::new());
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut image = black(20, 30);
            image
                .put_text(&fonts, Rect2Di::new(0, 0, 20, 30), text, PX, WHITE, word_wrap)
                .unwrap();
        });
        logs.contents()
    }

    #[test]
    fn test_suppressed_wrap_logs_a_warning() {
        let logs = render_with_logs("ab cd", WordWrap::Disabled);
        assert!(logs.contains("WARN"), "{logs}");
        assert!(
            logs.contains("word wrap is disabled: \"ab cd\""),
            "{logs}"
        );

        assert!(!render_with_logs("ab cd", WordWrap::Enabled).contains("WARN"));
        assert!(!render_with_logs("ab", WordWrap::Disabled).contains("WARN"));
    }
}
