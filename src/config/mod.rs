//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! theme, log level, and hotkey bindings. Spin results are never stored.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, Hotkeys};

use crate::error::AppError;
use crate::ui::Theme;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/lucky-wheel";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub log_level: String,
    pub hotkeys: Hotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub hotkeys: Hotkeys,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            hotkeys: Hotkeys::default(),
            file_path: None,
        }
    }

    /// Load the configuration from disk using the custom directory if
    /// provided. A missing file is created with the current values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            return self.save();
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.theme_name = data.theme_name;
        self.log_level = data.log_level;
        self.hotkeys = data.hotkeys.with_defaults();

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Path of the loaded configuration file, if any.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Resolve the configured theme.
    ///
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::from_name(&self.theme_name)
            .ok_or_else(|| ConfigError::UnknownTheme(self.theme_name.clone()))
    }

    /// Resolve the configured log level.
    ///
    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// Returns the path buffer for the default configuration directory or
    /// an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
