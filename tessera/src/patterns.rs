//! Reference textures used by the layer composition scenes.
//!
//! Every pattern is drawn in linear space; call
//! [`RgbaImage::convert_to_srgb`] before uploading to an sRGB swapchain.

use crate::error::Result;
use crate::font::FontCache;
use crate::geometry::Rect2Di;
use crate::image::{RgbaImage, WordWrap};
use colors::{Color, DARK_GREY, GREEN, RED, TRANSPARENT, UNIQUE_COLORS, WHITE};

/// Border drawn around each number cell.
pub const NUMBER_BORDER: i32 = 4;
/// Border drawn around a label card.
pub const CARD_BORDER: i32 = 2;
/// Distance between a label card's edge and its text.
pub const CARD_INSET: i32 = 8;

pub fn solid(width: u32, height: u32, color: Color) -> Result<RgbaImage> {
    let mut image = RgbaImage::new(width, height);
    image.draw_rect(0, 0, width as i32, height as i32, color)?;
    Ok(image)
}

/// What a blue gradient with source alpha looks like once composited over
/// opaque green, with alpha forced to zero.
///
/// Row `y` holds `{0, 1 - t, t, 0}` where `t` runs from 0 on the first row
/// to 1 on the last.
pub fn blue_gradient_over_green(size: u32) -> Result<RgbaImage> {
    let mut image = RgbaImage::new(size, size);
    let last = size.saturating_sub(1).max(1) as f32;

    for y in 0..size {
        let t = y as f32 / last;
        let src = Color::new(0.0, 0.0, t, t);
        let blended = Color::new(
            GREEN.r * (1.0 - src.a) + src.r,
            GREEN.g * (1.0 - src.a) + src.g,
            GREEN.b * (1.0 - src.a) + src.b,
            0.0,
        );
        image.draw_rect(0, y as i32, size as i32, 1, blended)?;
    }
    Ok(image)
}

/// Blue rows whose alpha grows from 0 towards 1, top to bottom.
pub fn blue_alpha_gradient(size: u32, premultiplied: bool) -> Result<RgbaImage> {
    let mut image = RgbaImage::new(size, size);

    for row in 0..size {
        let color = Color::new(0.0, 0.0, 1.0, row as f32 / size as f32);
        let color = if premultiplied {
            color.premultiplied()
        } else {
            color
        };
        image.draw_rect(0, row as i32, size as i32, 1, color)?;
    }
    Ok(image)
}

/// A row of numbered, bordered cells on a red background.
///
/// Cells are square, `width / columns` pixels on a side, and the red zone
/// separates each cell's drawn rect from the cell edge. The red should never
/// be visible when a runtime samples the returned rects correctly. Number
/// `n` is drawn in `UNIQUE_COLORS[n % 7]`.
pub fn number_grid(
    fonts: &FontCache,
    width: u32,
    columns: u32,
    first_number: u32,
    red_zone: i32,
) -> Result<(RgbaImage, Vec<Rect2Di>)> {
    let columns = columns.max(1);
    let cell = (width / columns) as i32;
    let mut image = solid(width, cell as u32, RED)?;

    let mut rects = Vec::with_capacity(columns as usize);
    for column in 0..columns {
        let number = first_number + column;
        let color = UNIQUE_COLORS[number as usize % UNIQUE_COLORS.len()];
        let rect = Rect2Di::new(
            column as i32 * cell + red_zone,
            red_zone,
            cell - red_zone * 2,
            cell - red_zone * 2,
        );
        let (x, y, w, h) = (rect.offset.x, rect.offset.y, rect.extent.width, rect.extent.height);

        image.draw_rect(x, y, w, h, TRANSPARENT)?;
        image.put_text(
            fonts,
            rect,
            &number.to_string(),
            cell as u32,
            color,
            WordWrap::Enabled,
        )?;
        image.draw_rect_border(x, y, w, h, NUMBER_BORDER, color)?;
        rects.push(rect);
    }

    Ok((image, rects))
}

/// Dark panel with a white frame and word-wrapped white text, used for the
/// instructions shown next to interactive scenes.
pub fn label_card(
    fonts: &FontCache,
    width: u32,
    height: u32,
    text: &str,
    pixel_height: u32,
) -> Result<RgbaImage> {
    let mut image = solid(width, height, DARK_GREY)?;
    image.draw_rect_border(0, 0, width as i32, height as i32, CARD_BORDER, WHITE)?;

    let text_rect = Rect2Di::new(
        CARD_INSET,
        CARD_INSET,
        (width as i32 - CARD_INSET * 2).max(0),
        (height as i32 - CARD_INSET * 2).max(0),
    );
    image.put_text(fonts, text_rect, text, pixel_height, WHITE, WordWrap::Enabled)?;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::font::BlockGlyphs;
    use colors::Rgba8;

    #[test]
    fn test_solid() {
        let image = solid(3, 2, RED).unwrap();
        assert!(image.pixels().iter().all(|p| *p == Rgba8::new(255, 0, 0, 255)));
    }

    #[test]
    fn test_blue_gradient_over_green_ends() {
        let image = blue_gradient_over_green(256).unwrap();

        assert_eq!(image.pixel(10, 0), Some(Rgba8::new(0, 255, 0, 0)));
        assert_eq!(image.pixel(10, 255), Some(Rgba8::new(0, 0, 255, 0)));
        let middle = image.pixel(0, 128).unwrap();
        assert!(middle.g.abs_diff(127) <= 1 && middle.b.abs_diff(128) <= 1);
        assert!(image.pixels().iter().all(|p| p.a == 0 && p.r == 0));
    }

    #[test]
    fn test_blue_alpha_gradient() {
        let straight = blue_alpha_gradient(256, false).unwrap();
        assert_eq!(straight.pixel(0, 0), Some(Rgba8::new(0, 0, 255, 0)));
        assert_eq!(straight.pixel(0, 128), Some(Rgba8::new(0, 0, 255, 127)));

        let premultiplied = blue_alpha_gradient(256, true).unwrap();
        assert_eq!(premultiplied.pixel(0, 0), Some(Rgba8::new(0, 0, 0, 0)));
        assert_eq!(premultiplied.pixel(0, 128), Some(Rgba8::new(0, 0, 127, 127)));
    }

    #[test]
    fn test_number_grid_layout() {
        let fonts = FontCache::new(BlockGlyphs::new());
        let (image, rects) = number_grid(&fonts, 256, 4, 1, 4).unwrap();

        assert_eq!((image.width(), image.height()), (256, 64));
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0], Rect2Di::new(4, 4, 56, 56));
        assert_eq!(rects[3], Rect2Di::new(196, 4, 56, 56));

        let opaque_red = Rgba8::new(255, 0, 0, 255);
        let opaque_blue = Rgba8::new(0, 0, 255, 255);
        assert_eq!(image.pixel(0, 0), Some(opaque_red));
        assert_eq!(image.pixel(62, 30), Some(opaque_red));
        // Number 1 uses the second unique color, blue.
        assert_eq!(image.pixel(4, 4), Some(opaque_blue));
        assert_eq!(image.pixel(59, 59), Some(opaque_blue));
        // The 64px digit is a block from row 10 down to the baseline.
        assert_eq!(image.pixel(30, 9), Some(Rgba8::default()));
        assert_eq!(image.pixel(30, 30), Some(opaque_blue));
        assert_eq!(image.pixel(50, 30), Some(Rgba8::default()));
    }

    #[test]
    fn test_number_grid_red_zone_too_wide() {
        let fonts = FontCache::new(BlockGlyphs::new());
        assert!(matches!(
            number_grid(&fonts, 64, 2, 1, 20),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_label_card() {
        let fonts = FontCache::new(BlockGlyphs::new());
        let image = label_card(&fonts, 120, 60, "Look at the quad", 10).unwrap();

        let white = Rgba8::new(255, 255, 255, 255);
        let grey = DARK_GREY.to_rgba8();
        assert_eq!(image.pixel(0, 0), Some(white));
        assert_eq!(image.pixel(119, 59), Some(white));
        assert_eq!(image.pixel(4, 4), Some(grey));
        // First glyph starts at the inset, one row below the rect top.
        assert_eq!(image.pixel(8, 9), Some(white));
        assert_eq!(image.pixel(8, 8), Some(grey));
    }
}
