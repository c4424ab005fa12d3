//! Platform to launcher resolution with default-platform fallback.

use serde::Serialize;

use launchkit_shared::{LauncherClass, LauncherKind};

use crate::error::LauncherError;

use super::helpers::available_platforms_display;
use super::launcher::{LaunchStrategy, Launcher, Workspace};
use super::table::LauncherRegistry;

/// Log target for fallback records.
pub const REGISTRY_TARGET: &str = "launchkit::registry";
/// Log target for deprecated entry points.
pub const DEPRECATION_TARGET: &str = "launchkit::deprecation";

/// Outcome of resolving a platform for a launcher kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub kind: LauncherKind,
    /// Platform the caller asked for
    pub requested: String,
    /// Platform the launcher class was found under
    pub platform: String,
    pub class: LauncherClass,
    /// True when `platform` is the kind's default substituted for `requested`
    pub fallback: bool,
}

/// Resolves launcher kinds against a registry.
#[derive(Debug, Clone, Copy)]
pub struct LauncherResolver<'a> {
    registry: &'a LauncherRegistry,
}

impl<'a> LauncherResolver<'a> {
    pub fn new(registry: &'a LauncherRegistry) -> Self {
        Self { registry }
    }

    /// Resolve `requested` for `kind`, enforcing the kind's allow-list.
    ///
    /// `None` asks for the kind's default platform directly.
    pub fn resolve(
        &self,
        kind: LauncherKind,
        requested: Option<&str>,
    ) -> Result<Resolution, LauncherError> {
        self.resolve_with(kind, requested, true)
    }

    /// Resolve `requested` for `kind` by registry membership alone.
    pub fn resolve_unrestricted(
        &self,
        kind: LauncherKind,
        requested: Option<&str>,
    ) -> Result<Resolution, LauncherError> {
        self.resolve_with(kind, requested, false)
    }

    fn resolve_with(
        &self,
        kind: LauncherKind,
        requested: Option<&str>,
        enforce_allow_list: bool,
    ) -> Result<Resolution, LauncherError> {
        let default = self.registry.defaults().for_kind(kind);

        // The configured default is trusted; the allow-list only gates
        // platforms the caller names.
        let permitted = match requested {
            Some(platform) => !enforce_allow_list || kind.permits(platform),
            None => true,
        };
        let requested = requested.unwrap_or(default);

        if permitted && let Some(class) = self.registry.get(requested) {
            tracing::debug!(
                target: REGISTRY_TARGET,
                "Resolved {} for '{}' to {}",
                kind.label(),
                requested,
                class
            );
            return Ok(Resolution {
                kind,
                requested: requested.to_string(),
                platform: requested.to_string(),
                class,
                fallback: false,
            });
        }

        tracing::warn!(
            target: REGISTRY_TARGET,
            "Using default {} for '{}' as no option is available for '{}'",
            kind.label(),
            default,
            requested
        );

        let class = self
            .registry
            .get(default)
            .ok_or_else(|| LauncherError::MissingDefault {
                kind,
                platform: default.to_string(),
                available: available_platforms_display(self.registry),
            })?;

        Ok(Resolution {
            kind,
            requested: requested.to_string(),
            platform: default.to_string(),
            class,
            fallback: true,
        })
    }

    /// Resolve and construct a launcher of any kind.
    ///
    /// Restricted kinds enforce their allow-list. `exe_name` is only passed
    /// on for the generic kind.
    pub fn create(
        &self,
        kind: LauncherKind,
        workspace: &Workspace,
        platform: Option<&str>,
        exe_name: Option<&str>,
        args: Option<Vec<String>>,
    ) -> Result<Launcher, LauncherError> {
        self.create_resolved(kind, workspace, platform, exe_name, args)
            .map(|(_, launcher)| launcher)
    }

    /// Like `create`, also returning how the platform was resolved.
    pub fn create_resolved(
        &self,
        kind: LauncherKind,
        workspace: &Workspace,
        platform: Option<&str>,
        exe_name: Option<&str>,
        args: Option<Vec<String>>,
    ) -> Result<(Resolution, Launcher), LauncherError> {
        let resolution = self.resolve(kind, platform)?;
        let exe_name = if kind == LauncherKind::Generic {
            exe_name
        } else {
            None
        };
        let launcher = construct(&resolution, workspace, exe_name, args);
        Ok((resolution, launcher))
    }

    /// Create a game launcher. Only `windows`, `linux` and `android` are
    /// accepted; anything else falls back to the host platform.
    pub fn create_game_launcher(
        &self,
        workspace: &Workspace,
        platform: Option<&str>,
        args: Option<Vec<String>>,
    ) -> Result<Launcher, LauncherError> {
        self.create(LauncherKind::Game, workspace, platform, None, args)
    }

    /// Create a server launcher. Only `windows_dedicated` and
    /// `linux_dedicated` are accepted.
    pub fn create_server_launcher(
        &self,
        workspace: &Workspace,
        platform: Option<&str>,
        args: Option<Vec<String>>,
    ) -> Result<Launcher, LauncherError> {
        self.create(LauncherKind::Server, workspace, platform, None, args)
    }

    pub fn create_editor(
        &self,
        workspace: &Workspace,
        platform: Option<&str>,
        args: Option<Vec<String>>,
    ) -> Result<Launcher, LauncherError> {
        self.create(LauncherKind::Editor, workspace, platform, None, args)
    }

    pub fn create_material_editor(
        &self,
        workspace: &Workspace,
        platform: Option<&str>,
        args: Option<Vec<String>>,
    ) -> Result<Launcher, LauncherError> {
        self.create(LauncherKind::MaterialEditor, workspace, platform, None, args)
    }

    /// Create a launcher for an arbitrary executable in the workspace.
    pub fn create_generic_launcher(
        &self,
        workspace: &Workspace,
        platform: &str,
        exe_name: &str,
        args: Option<Vec<String>>,
    ) -> Result<Launcher, LauncherError> {
        self.create(
            LauncherKind::Generic,
            workspace,
            Some(platform),
            Some(exe_name),
            args,
        )
    }

    /// Create a game launcher without the game allow-list.
    #[deprecated(note = "use `create_game_launcher` instead")]
    pub fn create_launcher(
        &self,
        workspace: &Workspace,
        platform: Option<&str>,
        args: Option<Vec<String>>,
    ) -> Result<Launcher, LauncherError> {
        warn_deprecated("create_launcher", "create_game_launcher");
        let resolution = self.resolve_unrestricted(LauncherKind::Game, platform)?;
        Ok(construct(&resolution, workspace, None, args))
    }

    /// Create a dedicated server launcher without the server allow-list.
    #[deprecated(note = "use `create_server_launcher` instead")]
    pub fn create_dedicated_launcher(
        &self,
        workspace: &Workspace,
        platform: Option<&str>,
        args: Option<Vec<String>>,
    ) -> Result<Launcher, LauncherError> {
        warn_deprecated("create_dedicated_launcher", "create_server_launcher");
        let resolution = self.resolve_unrestricted(LauncherKind::DedicatedServer, platform)?;
        Ok(construct(&resolution, workspace, None, args))
    }
}

fn construct(
    resolution: &Resolution,
    workspace: &Workspace,
    exe_name: Option<&str>,
    args: Option<Vec<String>>,
) -> Launcher {
    resolution
        .class
        .construct(&resolution.platform, workspace, exe_name, args)
}

fn warn_deprecated(name: &str, replacement: &str) {
    tracing::warn!(
        target: DEPRECATION_TARGET,
        "{} is deprecated and will be removed. Please use {} instead.",
        name,
        replacement
    );
}

// === Free-function entry points ===

/// Create a game launcher compatible with `workspace`.
pub fn create_game_launcher(
    registry: &LauncherRegistry,
    workspace: &Workspace,
    platform: Option<&str>,
    args: Option<Vec<String>>,
) -> Result<Launcher, LauncherError> {
    LauncherResolver::new(registry).create_game_launcher(workspace, platform, args)
}

/// Create a server launcher compatible with `workspace`.
pub fn create_server_launcher(
    registry: &LauncherRegistry,
    workspace: &Workspace,
    platform: Option<&str>,
    args: Option<Vec<String>>,
) -> Result<Launcher, LauncherError> {
    LauncherResolver::new(registry).create_server_launcher(workspace, platform, args)
}

/// Create an editor launcher compatible with `workspace`.
pub fn create_editor(
    registry: &LauncherRegistry,
    workspace: &Workspace,
    platform: Option<&str>,
    args: Option<Vec<String>>,
) -> Result<Launcher, LauncherError> {
    LauncherResolver::new(registry).create_editor(workspace, platform, args)
}

/// Create a material editor launcher compatible with `workspace`.
pub fn create_material_editor(
    registry: &LauncherRegistry,
    workspace: &Workspace,
    platform: Option<&str>,
    args: Option<Vec<String>>,
) -> Result<Launcher, LauncherError> {
    LauncherResolver::new(registry).create_material_editor(workspace, platform, args)
}

/// Create a launcher that starts `exe_name` from the workspace build directory.
pub fn create_generic_launcher(
    registry: &LauncherRegistry,
    workspace: &Workspace,
    platform: &str,
    exe_name: &str,
    args: Option<Vec<String>>,
) -> Result<Launcher, LauncherError> {
    LauncherResolver::new(registry).create_generic_launcher(workspace, platform, exe_name, args)
}

/// Create a game launcher, accepting any registered platform.
#[deprecated(note = "use `create_game_launcher` instead")]
#[allow(deprecated)]
pub fn create_launcher(
    registry: &LauncherRegistry,
    workspace: &Workspace,
    platform: Option<&str>,
    args: Option<Vec<String>>,
) -> Result<Launcher, LauncherError> {
    LauncherResolver::new(registry).create_launcher(workspace, platform, args)
}

/// Create a dedicated server launcher, accepting any registered platform.
#[deprecated(note = "use `create_server_launcher` instead")]
#[allow(deprecated)]
pub fn create_dedicated_launcher(
    registry: &LauncherRegistry,
    workspace: &Workspace,
    platform: Option<&str>,
    args: Option<Vec<String>>,
) -> Result<Launcher, LauncherError> {
    LauncherResolver::new(registry).create_dedicated_launcher(workspace, platform, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchkit_shared::{HostDefaults, HostOs};

    fn linux_registry() -> LauncherRegistry {
        LauncherRegistry::for_os(HostOs::Linux)
    }

    #[test]
    fn test_resolve_registered_platform() {
        let registry = linux_registry();
        let resolution = LauncherResolver::new(&registry)
            .resolve(LauncherKind::Game, Some("linux"))
            .unwrap();
        assert_eq!(resolution.class, LauncherClass::LinuxGame);
        assert_eq!(resolution.platform, "linux");
        assert!(!resolution.fallback);
    }

    #[test]
    fn test_resolve_none_uses_default_without_fallback() {
        let registry = linux_registry();
        let resolution = LauncherResolver::new(&registry)
            .resolve(LauncherKind::Editor, None)
            .unwrap();
        assert_eq!(resolution.platform, "linux_editor");
        assert!(!resolution.fallback);
    }

    #[test]
    fn test_restricted_kind_rejects_registered_platform_outside_allow_list() {
        let registry = linux_registry();
        let resolution = LauncherResolver::new(&registry)
            .resolve(LauncherKind::Game, Some("linux_editor"))
            .unwrap();
        assert!(resolution.fallback);
        assert_eq!(resolution.requested, "linux_editor");
        assert_eq!(resolution.class, LauncherClass::LinuxGame);
    }

    #[test]
    fn test_unrestricted_resolution_ignores_allow_list() {
        let registry = linux_registry();
        let resolution = LauncherResolver::new(&registry)
            .resolve_unrestricted(LauncherKind::Game, Some("linux_editor"))
            .unwrap();
        assert!(!resolution.fallback);
        assert_eq!(resolution.class, LauncherClass::LinuxEditor);
    }

    #[test]
    fn test_missing_default_is_an_error() {
        let registry = LauncherRegistry::new(HostDefaults::for_os(HostOs::Linux))
            .with("windows", LauncherClass::WinGame);
        let err = LauncherResolver::new(&registry)
            .resolve(LauncherKind::Editor, Some("ps5"))
            .unwrap_err();
        assert_eq!(
            err,
            LauncherError::MissingDefault {
                kind: LauncherKind::Editor,
                platform: "linux_editor".to_string(),
                available: "'windows'".to_string(),
            }
        );
    }

    #[test]
    fn test_create_ignores_exe_name_for_non_generic_kinds() {
        let registry = linux_registry();
        let workspace = Workspace::new("/bin", "Proj");
        let launcher = LauncherResolver::new(&registry)
            .create(
                LauncherKind::Game,
                &workspace,
                Some("linux"),
                Some("Other"),
                None,
            )
            .unwrap();
        assert_eq!(launcher.command_line(), vec!["/bin/Proj.GameLauncher"]);
    }

    #[test]
    fn test_create_resolved_reports_fallback() {
        let registry = linux_registry();
        let workspace = Workspace::new("/bin", "Proj");
        let (resolution, launcher) = LauncherResolver::new(&registry)
            .create_resolved(LauncherKind::Game, &workspace, Some("ps5"), None, None)
            .unwrap();
        assert!(resolution.fallback);
        assert_eq!(resolution.requested, "ps5");
        assert_eq!(resolution.platform, launcher.platform());
        assert_eq!(resolution.class, launcher.class());
    }
}
