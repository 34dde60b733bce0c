use std::path::PathBuf;

#[inline]
pub fn default_log_level() -> String {
    String::from("OFF")
}

#[inline]
pub fn default_output_dir() -> PathBuf {
    PathBuf::from("textures")
}

#[inline]
pub fn default_solid_color() -> colors::Color {
    colors::GREEN_ZERO_ALPHA
}

#[inline]
pub fn default_gradient_size() -> u32 {
    256
}

#[inline]
pub fn default_grid_width() -> u32 {
    1024
}

#[inline]
pub fn default_grid_columns() -> u32 {
    4
}

#[inline]
pub fn default_red_zone() -> i32 {
    16
}

#[inline]
pub fn default_first_number() -> u32 {
    1
}

#[inline]
pub fn default_card_width() -> u32 {
    512
}

#[inline]
pub fn default_card_height() -> u32 {
    256
}

#[inline]
pub fn default_card_pixel_height() -> u32 {
    24
}

#[inline]
pub fn default_card_text() -> String {
    String::from(
        "Each quad should show the number drawn in its cell.\n\
         No red should be visible around any of the numbers.",
    )
}

pub fn default_config_file_content() -> String {
    r##"
# Tessera configuration
#
# font-path: font used for text, "none" draws glyphs as solid blocks
# font-path = "SourceCodePro-Regular.otf"

# Directory where rendered textures are written
output-dir = "textures"

# Encode textures as sRGB before writing them
srgb = false

# Side of the gradient and solid textures, in pixels
gradient-size = 256

# Color of the solid texture, #RRGGBB or #RRGGBBAA
solid-color = "#00FF0000"

[developer]
# OFF, ERROR, WARN, INFO, DEBUG or TRACE
log-level = "OFF"

[grid]
width = 1024
columns = 4
red-zone = 16
first-number = 1

[card]
width = 512
height = 256
pixel-height = 24
"##
    .to_string()
}
