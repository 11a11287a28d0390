use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::settings::Settings;

/// Load YAML settings from `path`. An absent file means defaults — the task
/// is fully runnable with no settings file at all.
pub fn load_settings(path: &str) -> Result<Settings> {
    if !Path::new(path).exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read settings file '{path}'"))?;
    serde_yaml::from_str(&raw).with_context(|| format!("could not parse settings file '{path}'"))
}
