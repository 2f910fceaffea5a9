use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::error::{LauncherError, LauncherResult};

/// User preferences persisted as `config.json` under the launcher dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub theme: String,
    pub language: String,
    pub scale: f64,
    /// Name of the last launched version, used to preselect it next time.
    pub last_version: Option<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            theme: "DARK".to_string(),
            language: "EN".to_string(),
            scale: 1.0,
            last_version: None,
        }
    }
}

impl LauncherConfig {
    /// Load from disk; a missing or corrupt file yields defaults.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Corrupt config at {:?}: {}; using defaults", path, e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> LauncherResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| LauncherError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let config = LauncherConfig::load(Path::new("/nonexistent/config.json"));
        assert_eq!(config.theme, "DARK");
        assert_eq!(config.language, "EN");
        assert_eq!(config.scale, 1.0);
        assert!(config.last_version.is_none());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        let config = LauncherConfig::load(&path);
        assert_eq!(config.language, "EN");
    }

    #[test]
    fn roundtrip_preserves_last_version() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");

        let mut config = LauncherConfig::default();
        config.last_version = Some("1.20.1".into());
        config.scale = 1.5;
        config.save(&path).unwrap();

        let loaded = LauncherConfig::load(&path);
        assert_eq!(loaded.last_version.as_deref(), Some("1.20.1"));
        assert_eq!(loaded.scale, 1.5);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"theme":"LIGHT","legacy_field":42}"#).unwrap();
        let config = LauncherConfig::load(&path);
        assert_eq!(config.theme, "LIGHT");
    }
}
