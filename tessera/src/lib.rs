//! CPU-side compositing for conformance test textures.
//!
//! [`RgbaImage`] is an owned RGBA8 buffer with rect, border and text drawing,
//! an sRGB encode pass and a strided copy for GPU uploads. Text comes from a
//! [`FontCache`] of baked printable-ASCII atlases, and decoded image files are
//! shared through an [`ImageCache`].

pub mod error;
pub mod font;
pub mod geometry;
pub mod image;
pub mod patterns;

pub use colors::{Color, Rgba8};
pub use error::{Error, Result};
pub use font::{
    BakedChar, BakedFont, BlockGlyphs, FontCache, FontError, FontFile, GlyphSource,
    DEFAULT_FONT_FILE,
};
pub use geometry::{Extent2Di, Offset2Di, Rect2Di};
pub use image::cache::ImageCache;
pub use image::{copy_with_stride, RgbaImage, WordWrap};
