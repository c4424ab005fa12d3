//! Launcher registry and resolution.
//!
//! This module turns a platform identifier and a launcher kind into a
//! constructed launcher.
//!
//! # Architecture
//!
//! 1. `LauncherClass` (from launchkit_shared) is the closed set of launcher
//!    construction strategies
//! 2. `LauncherRegistry` maps platform identifiers to classes and carries the
//!    default platform for every kind
//! 3. `LauncherResolver` applies the kind's allow-list, falls back to the
//!    default platform with a warning, and constructs the `Launcher`
//! 4. The `create_*` free functions are thin wrappers over the resolver
//!
//! # Adding a New Platform
//!
//! 1. Add a `LauncherClass` variant in launchkit_shared
//! 2. Give it a canonical id in `as_str()` and list it in `all()`
//! 3. Name its binary in `class_binary_name()`
//! 4. If it is a game or server platform, add it to `GAME_PLATFORMS` or
//!    `SERVER_PLATFORMS`
//! 5. Compiler will error on any missed match arms

mod helpers;
mod launcher;
mod resolver;
mod table;

// Re-export public API
pub use launcher::{LaunchStrategy, LaunchTarget, Launcher, Workspace};
#[allow(deprecated)]
pub use resolver::{
    DEPRECATION_TARGET, LauncherResolver, REGISTRY_TARGET, Resolution, create_dedicated_launcher,
    create_editor, create_game_launcher, create_generic_launcher, create_launcher,
    create_material_editor, create_server_launcher,
};
pub use table::LauncherRegistry;
