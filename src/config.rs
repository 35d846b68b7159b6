use crate::error::{GutscoreError, Result};
use crate::types::config::GutscoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "gutscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".gutscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/gutscore/config.toml";

pub fn load_config(root: &Path) -> Result<Option<GutscoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges global, project and local files in that order. Returns `None` when none of them exist.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<GutscoreConfig>> {
    let layers = global_path
        .into_iter()
        .map(Path::to_path_buf)
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .collect::<Vec<_>>();

    let mut merged = Map::new();
    let mut found = false;
    for path in &layers {
        if let Some(layer) = read_layer(path)? {
            info!(path = %path.display(), "merged config layer");
            overlay(&mut merged, layer);
            found = true;
        }
    }
    if !found {
        return Ok(None);
    }

    let cfg: GutscoreConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| GutscoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

/// Reads one config layer. Absent files are skipped, not errors.
fn read_layer(path: &Path) -> Result<Option<Map<String, Value>>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| GutscoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Later layers win key by key; nested tables such as `[report]` merge instead of replacing.
fn overlay(base: &mut Map<String, Value>, layer: Map<String, Value>) {
    for (key, value) in layer {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(nested)) => overlay(existing, nested),
            (Some(slot), value) => *slot = value,
            (None, value) => {
                base.insert(key, value);
            }
        }
    }
}
