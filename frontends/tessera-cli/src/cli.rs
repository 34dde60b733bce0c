use crate::config::Config;
use crate::scene::Pattern;
use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
pub struct Cli {
    /// Read the configuration from PATH instead of the default location.
    #[clap(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Writes the config to a given path or the default location.
    #[clap(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub write_config: Option<Option<PathBuf>>,

    /// Font file used for text, or "none" to draw glyphs as solid blocks.
    #[clap(long, value_name = "PATH|none")]
    pub font: Option<String>,

    /// Directory where rendered textures are written.
    #[clap(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Encode textures as sRGB before writing them.
    #[clap(long)]
    pub srgb: bool,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the name of every pattern.
    List,
    /// Render patterns to PNG files, all of them when none are named.
    Render {
        #[clap(value_enum)]
        patterns: Vec<Pattern>,
    },
}

impl Cli {
    /// Command line options take precedence over the configuration file.
    pub fn override_config(&self, config: &mut Config) {
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }

        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }

        config.srgb |= self.srgb;
    }
}
