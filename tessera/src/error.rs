//! Errors returned by image, text and cache operations.
use crate::font::FontError;
use std::path::PathBuf;
use thiserror::Error;

/// Cumulative error type for compositing operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unable to load image {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image_rs::ImageError,
    },
    #[error("unable to decode image from memory")]
    ImageDecode(#[source] image_rs::ImageError),
    #[error("unable to save image {path}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image_rs::ImageError,
    },
    #[error("rectangle ({x}, {y}, {w}x{h}) out of bounds of {width}x{height} image")]
    OutOfBounds {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        width: u32,
        height: u32,
    },
    #[error("row pitch {row_pitch} is smaller than the packed row size {row_size}")]
    StrideTooSmall { row_pitch: usize, row_size: usize },
    #[error("destination holds {len} bytes but the copy needs {required}")]
    DestinationTooSmall { len: usize, required: usize },
    #[error("image cache accessed before initialization")]
    CacheUninitialized,
    #[error("font error")]
    Font(#[from] FontError),
}

/// Result type for compositing operations.
pub type Result<T> = std::result::Result<T, Error>;
