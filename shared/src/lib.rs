//! Shared identifiers for launchkit.
//!
//! Platform identifiers, launcher classes, launcher kinds and the host
//! default platforms. The registry and resolver that consume these live in
//! the `launchkit` crate.

pub mod host;
pub mod kind;
pub mod platform;

pub use host::HostDefaults;
pub use kind::{GAME_PLATFORMS, LauncherKind, SERVER_PLATFORMS};
pub use platform::{HostOs, LauncherClass, ParseLauncherClassError};
