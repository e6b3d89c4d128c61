use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wedge::{Chart, ChartError, ChartOptions, ColorSpec, Slice};

const ENV_PREFIX: &str = "DONUT";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartOptions,
    #[serde(default)]
    pub slices: Vec<Slice>,
}

impl Config {
    /// The chart shown when no configuration file exists yet.
    pub fn demo() -> Self {
        Self {
            chart: ChartOptions::default().with_name("Favorite films"),
            slices: vec![
                Slice::new(20.0, ColorSpec::rgb(0x92, 0x55, 0xd9), "Fight club"),
                Slice::new(55.0, ColorSpec::rgb(0x49, 0x94, 0x5a), "Revolver"),
                Slice::new(25.0, ColorSpec::rgb(0xe5, 0x9d, 0x59), "Forrest Gump"),
            ],
        }
    }

    pub fn build_chart(&self) -> Result<Chart, ChartError> {
        Chart::new(self.chart.clone(), self.slices.clone())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "donut", "donut").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// `DONUT_CHART__NAME=Budget` overrides `[chart] name`.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_with_environment(path, environment())
}

fn load_with_environment(path: &Path, env: config::Environment) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml))
        .add_source(env)
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads `explicit` if given, failing loudly. Otherwise tries the default location and
/// falls back to the demo chart when it is missing or broken.
pub fn load_or_default(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        let config = load_config(path)?;
        log::info!("Loaded configuration from {}", path.display());
        return Ok(config);
    }

    let path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("{}, showing the demo chart", e);
            return Ok(Config::demo());
        }
    };

    if !path.exists() {
        log::info!(
            "No configuration at {}, showing the demo chart",
            path.display()
        );
        return Ok(Config::demo());
    }

    match load_config(&path) {
        Ok(c) => {
            log::info!("Loaded configuration from {}", path.display());
            Ok(c)
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", path.display(), e);
            Ok(Config::demo())
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
