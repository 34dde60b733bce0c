//! Owned RGBA8 images and the drawing operations used to build test textures.

pub mod cache;
mod stride;
mod text;

pub use stride::copy_with_stride;
pub use text::WordWrap;

use crate::error::{Error, Result};
use colors::{linear_to_srgb, Color, Rgba8};
use std::path::Path;

/// Fixed-size, row-major buffer of [`Rgba8`] pixels.
///
/// `pixels().len()` is always `width * height`. Images decoded from files are
/// flagged as sRGB-encoded; procedurally drawn images start out linear.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
    is_srgb: bool,
}

impl RgbaImage {
    /// Transparent black image. Either dimension may be zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::default(); width as usize * height as usize],
            is_srgb: false,
        }
    }

    /// Decodes an image file, forcing four channels.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image_rs::open(path).map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_decoded(decoded))
    }

    /// Decodes an encoded image held in memory, forcing four channels.
    pub fn from_memory(bytes: &[u8]) -> Result<Self> {
        let decoded = image_rs::load_from_memory(bytes).map_err(Error::ImageDecode)?;
        Ok(Self::from_decoded(decoded))
    }

    fn from_decoded(decoded: image_rs::DynamicImage) -> Self {
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            pixels: bytemuck::cast_slice(rgba.as_raw()).to_vec(),
            // Images loaded from files are assumed to be sRGB.
            is_srgb: true,
        }
    }

    /// Encodes the image to `path`; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        image_rs::save_buffer(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image_rs::ColorType::Rgba8,
        )
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_srgb(&self) -> bool {
        self.is_srgb
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.pixels
    }

    /// Packed bytes, `width * 4` per row.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn check_bounds(&self, x: i32, y: i32, w: i32, h: i32) -> Result<()> {
        let right = x as i64 + w as i64;
        let bottom = y as i64 + h as i64;
        if x < 0
            || y < 0
            || w < 0
            || h < 0
            || right > self.width as i64
            || bottom > self.height as i64
        {
            return Err(Error::OutOfBounds {
                x,
                y,
                w,
                h,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Overwrites the span of `len` pixels starting at (`x`, `y`).
    #[inline]
    fn fill_span(&mut self, x: i32, y: i32, len: i32, color: Rgba8) {
        let start = self.index(x as u32, y as u32);
        self.pixels[start..start + len as usize].fill(color);
    }

    /// Fills `[x, x + w) x [y, y + h)` with `color`, no blending.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> Result<()> {
        self.check_bounds(x, y, w, h)?;

        let color = color.to_rgba8();
        for row in 0..h {
            self.fill_span(x, y + row, w, color);
        }
        Ok(())
    }

    /// Paints a `thickness` pixel frame just inside the rectangle.
    ///
    /// When the frame is thicker than half the rectangle the two sides meet
    /// and the whole rectangle is painted.
    pub fn draw_rect_border(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        thickness: i32,
        color: Color,
    ) -> Result<()> {
        self.check_bounds(x, y, w, h)?;

        // Negative thickness paints nothing, like zero.
        let thickness = thickness.max(0);
        let color = color.to_rgba8();
        for row in 0..h {
            if row < thickness || row >= h - thickness {
                self.fill_span(x, y + row, w, color);
                continue;
            }

            let left_end = thickness.clamp(0, w);
            self.fill_span(x, y + row, left_end, color);

            let right_begin = (w - thickness).clamp(0, w);
            self.fill_span(x + right_begin, y + row, w - right_begin, color);
        }
        Ok(())
    }

    /// Encodes R, G and B with the sRGB transfer function; alpha is kept.
    ///
    /// The conversion always runs, so calling it twice over-encodes. The
    /// image is flagged as sRGB afterwards.
    pub fn convert_to_srgb(&mut self) {
        let table: [u8; 256] = std::array::from_fn(|c| {
            (linear_to_srgb(c as f64 / 255.0) * 255.0) as u8
        });

        for pixel in &mut self.pixels {
            pixel.r = table[pixel.r as usize];
            pixel.g = table[pixel.g as usize];
            pixel.b = table[pixel.b as usize];
        }
        self.is_srgb = true;
    }

    /// Copies the rows into `dest` starting at `offset`, `row_pitch` bytes
    /// apart. Bytes past each packed row are left untouched.
    pub fn copy_with_stride(&self, dest: &mut [u8], row_pitch: usize, offset: usize) -> Result<()> {
        let len = dest.len();
        let Some(dest) = dest.get_mut(offset..) else {
            return Err(Error::DestinationTooSmall {
                len,
                required: offset,
            });
        };

        copy_with_stride(
            self.as_bytes(),
            dest,
            self.width as usize * std::mem::size_of::<Rgba8>(),
            self.height as usize,
            row_pitch,
        )
        .map_err(|err| match err {
            Error::DestinationTooSmall { len, required } => Error::DestinationTooSmall {
                len: len + offset,
                required: required + offset,
            },
            err => err,
        })
    }
}
