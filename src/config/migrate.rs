//! Bring an on-disk config file up to date with the current [`Config`] fields.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key a current config file is expected to carry.
pub const CONFIG_KEYS: [&str; 4] = [
    "in_cutoff_hour",
    "default_format",
    "separator_char",
    "show_weekday",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;

    // An empty file is a valid, empty mapping.
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{}: top level is not a mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!("{}: {e}", path.display()))),
    }
}

/// Keys from [`CONFIG_KEYS`] absent from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;

    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Add missing keys with their default values, keeping everything else.
///
/// Returns:
///   Ok(true)  → file updated
///   Ok(false) → nothing to do (or no file yet)
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => m,
        Ok(_) => return Err(AppError::Other("default config is not a mapping".into())),
        Err(e) => return Err(AppError::Config(e.to_string())),
    };

    let mut changed = false;
    for (key, value) in defaults {
        if !map.contains_key(&key) {
            if let Some(k) = key.as_str() {
                info(format!("Adding missing config field '{k}'"));
            }
            map.insert(key, value);
            changed = true;
        }
    }

    if changed {
        let serialized =
            serde_yaml::to_string(&Value::Mapping(map)).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(changed)
}
