mod cli;
mod config;
mod scene;

use clap::Parser;
use config::{Config, ConfigError};
use scene::Pattern;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_LEVEL_ENV: &str = "TESSERA_LOG_LEVEL";

/// Logs to stderr, and to `log_file` when set. `TESSERA_LOG_LEVEL` accepts
/// filter directives such as `tessera=debug` and takes precedence over `level`.
fn setup_logging(
    level: LevelFilter,
    log_file: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_LEVEL_ENV)
        .from_env()?;

    let file_layer = match log_file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::fs::File::create(path)?)
                .with_line_number(true)
                .with_ansi(false),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()?;
    Ok(())
}

fn parse_level(log_level: &str) -> LevelFilter {
    LevelFilter::from_str(log_level).unwrap_or_else(|_| {
        eprintln!("unknown log level {log_level:?}, logging is off");
        LevelFilter::OFF
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Cli::parse();

    if let Some(config_path) = args.write_config.clone() {
        setup_logging(LevelFilter::INFO, None)?;
        config::create_config_file(config_path);
        return Ok(());
    }

    let loaded = match &args.config {
        Some(path) => Config::try_load_from(path),
        None => Config::try_load(),
    };
    let (mut config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let developer = &config.developer;
    if let Err(err) = setup_logging(
        parse_level(&developer.log_level),
        developer.log_file.as_deref(),
    ) {
        eprintln!("unable to configure the logger: {err}");
    }

    match config_error {
        // A missing default file is normal, a missing explicit one is not.
        Some(ConfigError::PathNotFound) if args.config.is_none() => {
            tracing::info!("no configuration file found, using defaults");
        }
        Some(err) => {
            tracing::warn!("unable to load configuration, using defaults: {err:?}");
        }
        None => {}
    }

    args.override_config(&mut config);

    let patterns = match args.command {
        Some(cli::Command::List) => {
            for pattern in Pattern::ALL {
                println!("{}", pattern.name());
            }
            return Ok(());
        }
        Some(cli::Command::Render { patterns }) if !patterns.is_empty() => patterns,
        _ => Pattern::ALL.to_vec(),
    };

    let fonts = scene::open_fonts(config.font_path.as_deref())?;
    std::fs::create_dir_all(&config.output_dir)?;

    for path in scene::render_all(&patterns, &fonts, &config)? {
        println!("{}", path.display());
    }

    Ok(())
}
