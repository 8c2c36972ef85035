use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::format::MapFormat;

/// Global configuration loaded from `~/.config/urlmap/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapConfig {
    /// Url map file used when `--map` is not given. If missing, the built-in table is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_path: Option<PathBuf>,
    /// Format of `map_path`; inferred from its extension when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<MapFormat>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlmap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlMapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlMapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<UrlMapConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: UrlMapConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_builtin() {
        let cfg = UrlMapConfig::default();
        assert!(cfg.map_path.is_none());
        assert!(cfg.format.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlMapConfig {
            map_path: Some(PathBuf::from("/usr/share/doc/urlmap.js")),
            format: Some(MapFormat::Script),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlMapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_default_serializes_empty() {
        let toml = toml::to_string_pretty(&UrlMapConfig::default()).unwrap();
        let parsed: UrlMapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, UrlMapConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            map_path = "docs/urlmap.json"
            format = "json"
        "#;
        let cfg: UrlMapConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.map_path.as_deref(), Some(Path::new("docs/urlmap.json")));
        assert_eq!(cfg.format, Some(MapFormat::Json));
    }

    #[test]
    fn config_unknown_format_err() {
        assert!(toml::from_str::<UrlMapConfig>(r#"format = "yaml""#).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "map_path = \"urlmap.toml\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.map_path, Some(PathBuf::from("urlmap.toml")));
        assert!(load_from(&dir.path().join("missing.toml")).is_err());
    }
}
