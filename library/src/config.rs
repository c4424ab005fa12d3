//! Launcher configuration (launchers.toml)
//!
//! Describes which launcher class each platform identifier maps to and which
//! platform each launcher kind defaults to. Stored in TOML format in the
//! platform-specific config directory, or passed explicitly.
//!
//! ```toml
//! [defaults]
//! platform = "linux"
//! dedicated_server = "linux_dedicated"
//!
//! [platforms]
//! staging_server = "linux_dedicated"
//!
//! [options]
//! include_host = true
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use launchkit_shared::{HostDefaults, HostOs, LauncherClass};

use crate::error::ConfigError;
use crate::registry::LauncherRegistry;

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "launchers.toml";

/// Launcher configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LauncherConfig {
    /// Default platform overrides, per launcher kind
    #[serde(default)]
    pub defaults: DefaultsSection,
    /// Platform identifier to launcher class id
    #[serde(default)]
    pub platforms: BTreeMap<String, String>,
    /// Registry construction options
    #[serde(default)]
    pub options: OptionsSection,
}

/// Overrides for `HostDefaults`. Unset fields keep the host value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DefaultsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_executable: Option<String>,
}

impl DefaultsSection {
    fn apply(&self, defaults: &mut HostDefaults) {
        let overrides = [
            (&self.platform, &mut defaults.platform),
            (&self.dedicated_server, &mut defaults.dedicated_server),
            (&self.editor, &mut defaults.editor),
            (&self.material_editor, &mut defaults.material_editor),
            (&self.generic_executable, &mut defaults.generic_executable),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsSection {
    /// Start from the host registry before applying `[platforms]` (default: true)
    #[serde(default = "default_true")]
    pub include_host: bool,
}

impl Default for OptionsSection {
    fn default() -> Self {
        Self { include_host: true }
    }
}

fn default_true() -> bool {
    true
}

impl LauncherConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded launcher config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else the default config file if it exists,
    /// else the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Default config file location (e.g. `~/.config/launchkit/launchers.toml`).
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "launchkit", "launchkit")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Build the registry for the current host.
    pub fn build(&self) -> Result<LauncherRegistry, ConfigError> {
        self.build_for(HostOs::current())
    }

    /// Build the registry as if running on `os`.
    pub fn build_for(&self, os: HostOs) -> Result<LauncherRegistry, ConfigError> {
        let mut registry = if self.options.include_host {
            LauncherRegistry::for_os(os)
        } else {
            LauncherRegistry::new(HostDefaults::for_os(os))
        };

        for (platform, class) in &self.platforms {
            let class: LauncherClass =
                class.parse().map_err(|_| ConfigError::UnknownClass {
                    platform: platform.clone(),
                    class: class.clone(),
                })?;
            if let Some(previous) = registry.register(platform.as_str(), class)
                && previous != class
            {
                tracing::debug!("Platform '{}' remapped from {} to {}", platform, previous, class);
            }
        }

        self.defaults.apply(registry.defaults_mut());
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_builds_host_registry() {
        let config = LauncherConfig::from_toml_str("").unwrap();
        assert_eq!(config, LauncherConfig::default());
        assert_eq!(
            config.build_for(HostOs::Linux).unwrap(),
            LauncherRegistry::for_os(HostOs::Linux)
        );
    }

    #[test]
    fn test_platforms_and_defaults() {
        let config = LauncherConfig::from_toml_str(
            r#"
            [defaults]
            dedicated_server = "staging"

            [platforms]
            staging = "linux_dedicated"
            "#,
        )
        .unwrap();
        let registry = config.build_for(HostOs::Linux).unwrap();
        assert_eq!(registry.get("staging"), Some(LauncherClass::LinuxDedicated));
        assert_eq!(registry.defaults().dedicated_server, "staging");
        assert_eq!(registry.defaults().platform, "linux");
    }

    #[test]
    fn test_exclude_host() {
        let config = LauncherConfig::from_toml_str(
            r#"
            [platforms]
            windows = "windows"

            [options]
            include_host = false
            "#,
        )
        .unwrap();
        let registry = config.build_for(HostOs::Linux).unwrap();
        assert_eq!(registry.platforms(), vec!["windows"]);
    }

    #[test]
    fn test_unknown_class() {
        let config = LauncherConfig::from_toml_str(
            r#"
            [platforms]
            ps5 = "playstation"
            "#,
        )
        .unwrap();
        let err = config.build_for(HostOs::Linux).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownClass { ref platform, ref class }
                if platform == "ps5" && class == "playstation"
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let err = LauncherConfig::from_toml_str("[platforms\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[defaults]\neditor = \"linux_editor\"\n").unwrap();

        let config = LauncherConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.defaults.editor.as_deref(), Some("linux_editor"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LauncherConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = LauncherConfig::default_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
