// Float colors as they come from test scenes, packed 8-bit pixels as they are
// stored in images, and the conversions between them.

pub mod defaults;

pub use defaults::*;

use regex::Regex;
use serde::{de, Deserialize, Serialize};
use std::num::ParseIntError;
use std::sync::LazyLock;

static NON_HEX_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^#a-f0-9]").expect("literal pattern"));
static VALID_HEX_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?[a-f0-9]{6}([a-f0-9]{2})?$").expect("literal pattern")
});

/// Straight RGBA color with every channel in `[0, 1]`.
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// One packed 8-bit RGBA pixel. A `[Rgba8]` has the exact byte layout of an
/// `R8G8B8A8` texture row.
#[repr(C)]
#[derive(
    Debug, Default, PartialEq, Eq, Hash, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Quantizes to 8 bits per channel with `floor(255 * c)`.
    ///
    /// Reference images were calibrated against truncation, so this must not
    /// round. Values outside `[0, 1]` saturate.
    #[inline]
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8 {
            r: (255.0 * self.r) as u8,
            g: (255.0 * self.g) as u8,
            b: (255.0 * self.b) as u8,
            a: (255.0 * self.a) as u8,
        }
    }

    /// Scales the color channels by alpha.
    pub fn premultiplied(self) -> Self {
        Self {
            r: self.r * self.a,
            g: self.g * self.a,
            b: self.b * self.a,
            a: self.a,
        }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        if NON_HEX_CHARS.is_match(hex) {
            return Err(String::from("Error: Character is not valid"));
        }

        if !VALID_HEX_SIZE.is_match(hex) {
            return Err(String::from("Error: Hex String size is not valid"));
        }

        let hex = hex.trim_start_matches('#');
        let channels = decode_hex(hex)
            .map_err(|_| String::from("Error: Invalid string, not able to convert"))?;

        let alpha = channels.get(3).copied().unwrap_or(255);
        Ok(Self {
            r: channels[0] as f32 / 255.0,
            g: channels[1] as f32 / 255.0,
            b: channels[2] as f32 / 255.0,
            a: alpha as f32 / 255.0,
        })
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>, ParseIntError> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16))
        .collect()
}

/// Standard linear to sRGB transfer function.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

pub fn deserialize_hex_string<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: de::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Color::from_hex(&s).map_err(de::Error::custom)
}
