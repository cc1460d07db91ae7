use crate::writer::DEFAULT_OUTPUT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Generator configuration. Only the output location is configurable;
/// the heuristic constants are fixed so the artifact stays reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where `generate` writes the profile table.
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

const SYSTEM_CONFIG: &str = "/etc/profilegen/config.toml";

fn load_system() -> Option<toml::Value> {
    let content = std::fs::read_to_string(SYSTEM_CONFIG).ok()?;
    toml::from_str(&content).ok()
}

/// User config at ~/.config/profilegen/config.toml, if present.
fn load_user() -> Option<toml::Value> {
    let dir = dirs::config_dir()?;
    let path = dir.join("profilegen").join("config.toml");
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Recursively merge two TOML values. Tables merge key-by-key; any other
/// type in `overlay` replaces `base`.
fn merge_values(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_values(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

fn load_from_path(path: &Path) -> GenConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            eprintln!(
                "warning: failed to parse config at {}: {}",
                path.display(),
                e
            );
            GenConfig::default()
        }),
        Err(e) => {
            eprintln!(
                "warning: failed to read config at {}: {}",
                path.display(),
                e
            );
            GenConfig::default()
        }
    }
}

/// Load the merged config: system defaults, then user overrides.
/// If `override_path` is given, use only that file instead.
pub fn load(override_path: Option<&PathBuf>) -> GenConfig {
    if let Some(path) = override_path {
        return load_from_path(path);
    }

    let merged = match (load_system(), load_user()) {
        (Some(s), Some(u)) => Some(merge_values(s, u)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    };

    match merged {
        Some(value) => value.try_into().unwrap_or_else(|e| {
            eprintln!("warning: failed to deserialize config: {}", e);
            GenConfig::default()
        }),
        None => GenConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path() {
        let config = GenConfig::default();
        assert_eq!(config.output.path, PathBuf::from("resources/profiles.json"));
    }

    #[test]
    fn deserialize_partial_config() {
        let config: GenConfig = toml::from_str(
            r#"
            [output]
            path = "/tmp/profiles.json"
        "#,
        )
        .unwrap();
        assert_eq!(config.output.path, PathBuf::from("/tmp/profiles.json"));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: GenConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn merge_overlay_wins() {
        let base: toml::Value = toml::from_str("[output]\npath = \"a.json\"").unwrap();
        let overlay: toml::Value = toml::from_str("[output]\npath = \"b.json\"").unwrap();
        let merged = merge_values(base, overlay);
        let table = merged.as_table().unwrap();
        assert_eq!(
            table["output"].as_table().unwrap()["path"].as_str(),
            Some("b.json")
        );
    }

    #[test]
    fn load_from_nonexistent_path_falls_back() {
        let config = load_from_path(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT));
    }
}
