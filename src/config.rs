use crate::error::{Result, ScoreError};
use crate::types::config::ScoringConfig;
use std::path::Path;
use toml::map::Map;
use toml::Value;

/// Loads and deep-merges the given config files in order; later files win.
/// With no paths the defaults (sample series, default weights) apply.
pub fn load_config(paths: &[impl AsRef<Path>]) -> Result<ScoringConfig> {
    let mut merged = Value::Table(Map::new());
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScoreError::ConfigNotFound(path.display().to_string()));
        }
        merge_toml(&mut merged, read_toml_value(path)?);
        tracing::debug!(path = %path.display(), "config layer merged");
    }

    let cfg: ScoringConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
