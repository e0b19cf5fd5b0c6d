//! Config file upgrades: detect keys missing from an older file and fill them in.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys present in the default config but absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let current: Value = serde_yaml::from_str(&content)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    let empty = Mapping::new();
    let current_map = current.as_mapping().unwrap_or(&empty);

    let missing = defaults
        .as_mapping()
        .map(|m| {
            m.keys()
                .filter(|k| !current_map.contains_key(*k))
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(missing)
}

/// Rewrite the file with every missing key set to its default.
/// Existing values are left untouched. Returns the keys that were added.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let missing = missing_keys(path)?;

    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(missing);
    }

    // file exists and parses: load_from fills the defaults
    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;

    success(format!("Configuration updated, added: {}", missing.join(", ")));
    Ok(missing)
}
