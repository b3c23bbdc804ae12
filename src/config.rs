use crate::error::{FormscoreError, Result};
use crate::types::config::FormscoreConfig;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOCAL_FILE: &str = ".formscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/formscore/config.toml";

/// Merges global, explicit and local config layers, later layers winning.
pub fn load_config(explicit: Option<&Path>) -> Result<FormscoreConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let local = PathBuf::from(DEFAULT_LOCAL_FILE);
    load_config_with_layers(global.as_deref(), explicit, Some(&local))
}

pub(crate) fn load_config_with_layers(
    global_path: Option<&Path>,
    explicit_path: Option<&Path>,
    local_path: Option<&Path>,
) -> Result<FormscoreConfig> {
    if let Some(path) = explicit_path {
        if !path.exists() {
            return Err(FormscoreError::ConfigNotFound(path.display().to_string()));
        }
    }

    let mut merged = FormscoreConfig::default();
    for path in [global_path, explicit_path, local_path].into_iter().flatten() {
        if let Some(layer) = read_layer(path)? {
            merged.formulation = layer.formulation.over(merged.formulation);
        }
    }
    Ok(merged)
}

/// Parses one layer; a missing optional file yields `None`.
fn read_layer(path: &Path) -> Result<Option<FormscoreConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    tracing::debug!(path = %path.display(), "loading config layer");
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| FormscoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}
