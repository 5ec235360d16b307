//! `crudgen config` — read and write configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let mut updated = config;
            set_config_value(&mut updated, &key, &value)?;
            persist(&updated)?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.format" => Ok(config.defaults.format.clone()),
        "defaults.source_extension" => Ok(config.defaults.source_extension.clone()),
        "defaults.skeleton_dir" => Ok(config
            .defaults
            .skeleton_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "defaults.format" => config.defaults.format = value.into(),
        "defaults.source_extension" => config.defaults.source_extension = value.into(),
        "defaults.skeleton_dir" => config.defaults.skeleton_dir = Some(PathBuf::from(value)),
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not a boolean (expected true/false)"),
                source: None,
            })?;
        }
        "output.format" => config.output.format = value.into(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    }
    Ok(())
}

fn persist(config: &AppConfig) -> CliResult<()> {
    let path = AppConfig::config_path();

    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })?;

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.format").unwrap(), "yml");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn set_known_key_updates_config() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.format", "xml").unwrap();
        assert_eq!(cfg.defaults.format, "xml");
    }

    #[test]
    fn set_bad_boolean_is_error() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "output.no_color", "maybe").is_err());
    }

    #[test]
    fn set_unknown_key_is_error() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "nope", "x").is_err());
    }
}
