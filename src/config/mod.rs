use crate::core::aggregator::DEFAULT_IN_CUTOFF_HOUR;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Events at or before this hour are clock-in candidates.
    #[serde(default = "default_in_cutoff_hour")]
    pub in_cutoff_hour: u32,
    #[serde(default)]
    pub default_format: ExportFormat,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_in_cutoff_hour() -> u32 {
    DEFAULT_IN_CUTOFF_HOUR
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            in_cutoff_hour: default_in_cutoff_hour(),
            default_format: ExportFormat::default(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.in_cutoff_hour > 23 {
            return Err(AppError::InvalidCutoff(self.in_cutoff_hour));
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        Ok(())
    }

    /// First character of `separator_char`, '-' if it is empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Create the config directory and write a default config file.
    ///
    /// In test mode nothing is written; an existing file is never replaced.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        if path.exists() {
            success(format!("Config file already present: {}", path.display()));
            return Ok(());
        }

        Config::default().save_to(path)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }
}
