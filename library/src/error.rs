//! Error types for launcher resolution and configuration.

use std::path::PathBuf;

use launchkit_shared::LauncherKind;

/// Failure to produce a launcher.
///
/// Unsupported platforms are not errors; the resolver substitutes the
/// default platform. Only a registry that lacks the default itself fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LauncherError {
    /// The kind's default platform has no launcher registered
    #[error(
        "no launcher registered for default {kind} platform '{platform}'. Registered platforms: {available}"
    )]
    MissingDefault {
        kind: LauncherKind,
        platform: String,
        available: String,
    },
}

/// Failure to load or apply a launcher configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `LauncherConfig`
    #[error("failed to parse launcher config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `[platforms]` entry names no known launcher class
    #[error("platform '{platform}' maps to unknown launcher class '{class}'")]
    UnknownClass { platform: String, class: String },
}
