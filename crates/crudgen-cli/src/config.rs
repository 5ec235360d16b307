//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `CRUDGEN_SKELETON_DIR` environment variable (skeleton dir only)
//! 3. Config file (TOML, default location via `directories`)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generation runs.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Routing-configuration format.
    pub format: String,
    /// Skeleton directory; `None` falls back to `./skeleton`.
    pub skeleton_dir: Option<PathBuf>,
    /// Extension of generated controller/test source files.
    pub source_extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            format: "yml".into(),
            skeleton_dir: None,
            source_extension: "php".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// for the default location).  A missing file is not an error — the
    /// built-in defaults apply; a present-but-malformed file is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read config '{}': {e}", path.display()))?;
        let config = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse config '{}': {e}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudgen", "crudgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".crudgen.toml"))
    }

    /// Resolve the skeleton directory.
    ///
    /// Priority: `CRUDGEN_SKELETON_DIR` env var, then the config file entry,
    /// then `./skeleton`.
    pub fn skeleton_dir(&self) -> PathBuf {
        if let Ok(dir) = std::env::var("CRUDGEN_SKELETON_DIR") {
            return PathBuf::from(dir);
        }
        self.defaults
            .skeleton_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("skeleton"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_yml() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.format, "yml");
    }

    #[test]
    fn default_source_extension_is_php() {
        assert_eq!(AppConfig::default().defaults.source_extension, "php");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        let cfg = AppConfig::load(Some(&missing)).unwrap();
        assert_eq!(cfg.defaults.format, "yml");
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[defaults]\nformat = \"xml\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.format, "xml");
        assert_eq!(cfg.defaults.source_extension, "php");
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
