use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use blog_content::DEFAULT_PREVIEW_LENGTH;
use blog_core::DEFAULT_PER_PAGE;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub posts_path: PathBuf,
    pub state_dir: PathBuf,
    pub preview_length: usize,
    pub per_page: usize,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            posts_path: PathBuf::from("posts.json"),
            state_dir: PathBuf::from("."),
            preview_length: DEFAULT_PREVIEW_LENGTH,
            per_page: DEFAULT_PER_PAGE,
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a RON file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let settings: Settings = ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        settings.level_filter()?;
        Ok(settings)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
