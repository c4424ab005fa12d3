//! launchkit
//!
//! Selects and constructs platform-specific launchers (game client,
//! dedicated server, editor, material editor, or an arbitrary executable)
//! for a workspace. Unsupported platforms fall back to the host default for
//! the launcher kind, with a warning.
//!
//! The launchers only describe the process they would start. Starting,
//! supervising and capturing output of that process is left to the caller.

pub mod config;
pub mod error;
pub mod registry;

pub use config::LauncherConfig;
pub use error::{ConfigError, LauncherError};
pub use launchkit_shared::{HostDefaults, HostOs, LauncherClass, LauncherKind};
pub use registry::{Launcher, LauncherRegistry, LauncherResolver, Workspace};
