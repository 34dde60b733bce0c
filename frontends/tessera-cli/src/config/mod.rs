pub mod defaults;

use colors::{deserialize_hex_string, Color};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    ErrLoadingConfig(String),
    PathNotFound,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Developer {
    #[serde(default = "default_log_level", rename = "log-level")]
    pub log_level: String,
    #[serde(default = "Option::default", rename = "log-file")]
    pub log_file: Option<String>,
}

impl Default for Developer {
    fn default() -> Developer {
        Developer {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Grid {
    #[serde(default = "default_grid_width")]
    pub width: u32,
    #[serde(default = "default_grid_columns")]
    pub columns: u32,
    #[serde(default = "default_red_zone", rename = "red-zone")]
    pub red_zone: i32,
    #[serde(default = "default_first_number", rename = "first-number")]
    pub first_number: u32,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            width: default_grid_width(),
            columns: default_grid_columns(),
            red_zone: default_red_zone(),
            first_number: default_first_number(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(default = "default_card_width")]
    pub width: u32,
    #[serde(default = "default_card_height")]
    pub height: u32,
    #[serde(default = "default_card_pixel_height", rename = "pixel-height")]
    pub pixel_height: u32,
    #[serde(default = "default_card_text")]
    pub text: String,
}

impl Default for Card {
    fn default() -> Card {
        Card {
            width: default_card_width(),
            height: default_card_height(),
            pixel_height: default_card_pixel_height(),
            text: default_card_text(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Font file, or "none" for block glyphs.
    #[serde(default = "Option::default", rename = "font-path")]
    pub font_path: Option<String>,
    #[serde(default = "default_output_dir", rename = "output-dir")]
    pub output_dir: PathBuf,
    #[serde(default = "bool::default")]
    pub srgb: bool,
    #[serde(default = "default_gradient_size", rename = "gradient-size")]
    pub gradient_size: u32,
    #[serde(
        default = "default_solid_color",
        rename = "solid-color",
        deserialize_with = "deserialize_hex_string"
    )]
    pub solid_color: Color,
    #[serde(default = "Developer::default")]
    pub developer: Developer,
    #[serde(default = "Grid::default")]
    pub grid: Grid,
    #[serde(default = "Card::default")]
    pub card: Card,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_path: None,
            output_dir: default_output_dir(),
            srgb: false,
            gradient_size: default_gradient_size(),
            solid_color: default_solid_color(),
            developer: Developer::default(),
            grid: Grid::default(),
            card: Card::default(),
        }
    }
}

#[inline]
pub fn config_dir_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tessera")
}

#[inline]
pub fn config_file_path() -> PathBuf {
    config_dir_path().join("config.toml")
}

pub fn create_config_file(path: Option<PathBuf>) {
    let default_file_path = path.clone().unwrap_or_else(config_file_path);
    if default_file_path.exists() {
        info!(
            "configuration file already exists at {}",
            default_file_path.display()
        );
        return;
    }

    if path.is_none() {
        let default_dir_path = config_dir_path();
        match std::fs::create_dir_all(&default_dir_path) {
            Ok(_) => {
                info!("configuration path created {}", default_dir_path.display());
            }
            Err(err_message) => {
                error!("could not create config directory: {err_message}");
            }
        }
    }

    match std::fs::write(&default_file_path, default_config_file_content()) {
        Ok(_) => info!("configuration file created {}", default_file_path.display()),
        Err(err_message) => error!(
            "could not create config file {}: {err_message}",
            default_file_path.display()
        ),
    }
}

impl Config {
    pub fn try_load() -> Result<Self, ConfigError> {
        Self::try_load_from(&config_file_path())
    }

    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound);
        }

        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str::<Config>(&content)
                .map_err(|err_message| ConfigError::ErrLoadingConfig(err_message.to_string())),
            Err(err_message) => Err(ConfigError::ErrLoadingConfig(err_message.to_string())),
        }
    }
}
