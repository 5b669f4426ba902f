use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

const ENV_PREFIX: &str = "ENGINE_CATALOG";
const CONFIG_FILE: &str = "engine_catalog";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Folder searched recursively for saved listing pages.
    pub data_dir: PathBuf,
    /// Max listings shown side by side by `compare`.
    pub compare_limit: usize,
    pub progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_dir: PathBuf::from("data"),
            compare_limit: 5,
            progress: true,
        }
    }
}

/// Defaults, then `engine_catalog.{toml,json,…}` if present, then
/// `ENGINE_CATALOG_*` environment variables.
pub fn load() -> Result<Settings> {
    let defaults = Settings::default();
    Config::builder()
        .set_default("data_dir", defaults.data_dir.to_string_lossy().into_owned())?
        .set_default("compare_limit", defaults.compare_limit as u64)?
        .set_default("progress", defaults.progress)?
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()
        .context("failed to read settings")?
        .try_deserialize()
        .context("invalid settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_deserialize() {
        let s: Settings = Config::builder()
            .set_default("data_dir", "snapshots")
            .unwrap()
            .set_default("compare_limit", 3u64)
            .unwrap()
            .set_default("progress", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(s.data_dir, PathBuf::from("snapshots"));
        assert_eq!(s.compare_limit, 3);
        assert!(!s.progress);
    }

    // Only test in the crate that touches the process environment.
    #[test]
    fn env_overrides_defaults() {
        std::env::set_var("ENGINE_CATALOG_COMPARE_LIMIT", "3");
        std::env::set_var("ENGINE_CATALOG_DATA_DIR", "pages");
        let loaded = load();
        std::env::remove_var("ENGINE_CATALOG_COMPARE_LIMIT");
        std::env::remove_var("ENGINE_CATALOG_DATA_DIR");

        let s = loaded.unwrap();
        assert_eq!(s.compare_limit, 3);
        assert_eq!(s.data_dir, PathBuf::from("pages"));
        assert!(s.progress);
    }

    #[test]
    fn default_values() {
        let s = Settings::default();
        assert_eq!(s.data_dir, PathBuf::from("data"));
        assert_eq!(s.compare_limit, 5);
    }
}
