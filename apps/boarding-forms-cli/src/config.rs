//! Layered host configuration.
//!
//! Sources, later ones winning: built-in defaults, the YAML file given with
//! `--config`, then `BOARDING__*` environment variables (`__` separates
//! nesting levels, e.g. `BOARDING__LOGGING__FORMAT=json`).

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "BOARDING__";

/// Name of the boarding forms section under `modules`.
pub const MODULE_NAME: &str = "boarding_forms";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Default filter directive when neither `RUST_LOG` nor `-v` is given.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Host configuration. Module sections stay raw JSON until a module asks for
/// its typed config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub modules: BTreeMap<String, serde_json::Value>,
}

impl AppConfig {
    /// Loads defaults, then the optional YAML file, then the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the wrong type.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")
    }

    /// Typed config of a module, read from `modules.<name>.config`.
    ///
    /// A missing module, a non-object module entry, or a missing `config`
    /// key yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the `config` section is present but invalid.
    pub fn module_config_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let Some(section) = self
            .modules
            .get(name)
            .and_then(serde_json::Value::as_object)
            .and_then(|module| module.get("config"))
        else {
            return Ok(T::default());
        };
        serde_json::from_value(section.clone())
            .with_context(|| format!("invalid config for module '{name}'"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use boarding_forms::config::{BoardingFormsConfig, PresetSwitchPolicy};
    use tempfile::NamedTempFile;

    use super::*;

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load_or_default(None).unwrap();
        assert_eq!(config.logging.format, LogFormat::Text);

        let module: BoardingFormsConfig = config.module_config_or_default(MODULE_NAME).unwrap();
        assert_eq!(module, BoardingFormsConfig::default());
    }

    #[test]
    fn test_yaml_file_overrides_defaults() {
        let file = yaml_file(
            r"
logging:
  format: json
modules:
  boarding_forms:
    config:
      simulated_load_latency_ms: 0
      preset_switch: reset_then_apply
",
        );
        let config = AppConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");

        let module: BoardingFormsConfig = config.module_config_or_default(MODULE_NAME).unwrap();
        assert_eq!(module.simulated_load_latency_ms, 0);
        assert_eq!(module.simulated_save_latency_ms, 1000);
        assert_eq!(module.preset_switch, PresetSwitchPolicy::ResetThenApply);
    }

    #[test]
    fn test_module_without_config_section_uses_defaults() {
        let file = yaml_file("modules:\n  boarding_forms: {}\n");
        let config = AppConfig::load_or_default(Some(file.path())).unwrap();
        let module: BoardingFormsConfig = config.module_config_or_default(MODULE_NAME).unwrap();
        assert_eq!(module, BoardingFormsConfig::default());
    }

    #[test]
    fn test_invalid_module_config_is_an_error() {
        let file = yaml_file(
            "modules:\n  boarding_forms:\n    config:\n      unknown_option: true\n",
        );
        let config = AppConfig::load_or_default(Some(file.path())).unwrap();
        let err = config
            .module_config_or_default::<BoardingFormsConfig>(MODULE_NAME)
            .unwrap_err();
        assert!(err.to_string().contains("boarding_forms"));
    }

    #[test]
    fn test_unknown_logging_key_is_rejected() {
        let file = yaml_file("logging:\n  colour: true\n");
        assert!(AppConfig::load_or_default(Some(file.path())).is_err());
    }
}
