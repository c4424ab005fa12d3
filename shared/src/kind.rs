//! Launcher kinds and their platform allow-lists.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Platforms a game launcher may be created for.
pub const GAME_PLATFORMS: &[&str] = &["windows", "linux", "android"];

/// Platforms a server launcher may be created for.
pub const SERVER_PLATFORMS: &[&str] = &["windows_dedicated", "linux_dedicated"];

/// Category of launcher a caller asks for.
///
/// `Game` and `Server` are restricted to an allow-list of platforms. The
/// other kinds accept any platform present in the registry and fall back to
/// their default otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LauncherKind {
    /// Arbitrary executable named by the caller
    Generic,
    /// Game client
    Game,
    /// Dedicated server, unrestricted lookup
    DedicatedServer,
    /// Dedicated server, restricted to `SERVER_PLATFORMS`
    Server,
    /// Editor
    Editor,
    /// Material editor
    MaterialEditor,
}

impl LauncherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LauncherKind::Generic => "generic",
            LauncherKind::Game => "game",
            LauncherKind::DedicatedServer => "dedicated-server",
            LauncherKind::Server => "server",
            LauncherKind::Editor => "editor",
            LauncherKind::MaterialEditor => "material-editor",
        }
    }

    /// Human-readable label used in log messages.
    pub fn label(&self) -> &'static str {
        match self {
            LauncherKind::Generic => "generic executable launcher",
            LauncherKind::Game => "launcher",
            LauncherKind::DedicatedServer | LauncherKind::Server => "dedicated launcher",
            LauncherKind::Editor => "editor launcher",
            LauncherKind::MaterialEditor => "MaterialEditor launcher",
        }
    }

    /// Allow-list for restricted kinds, `None` for unrestricted ones.
    pub fn allowed_platforms(&self) -> Option<&'static [&'static str]> {
        match self {
            LauncherKind::Game => Some(GAME_PLATFORMS),
            LauncherKind::Server => Some(SERVER_PLATFORMS),
            LauncherKind::Generic
            | LauncherKind::DedicatedServer
            | LauncherKind::Editor
            | LauncherKind::MaterialEditor => None,
        }
    }

    pub fn is_restricted(&self) -> bool {
        self.allowed_platforms().is_some()
    }

    /// Whether `platform` passes this kind's allow-list.
    ///
    /// Always true for unrestricted kinds.
    pub fn permits(&self, platform: &str) -> bool {
        self.allowed_platforms()
            .is_none_or(|allowed| allowed.contains(&platform))
    }

    pub fn all() -> &'static [LauncherKind] {
        &[
            LauncherKind::Generic,
            LauncherKind::Game,
            LauncherKind::DedicatedServer,
            LauncherKind::Server,
            LauncherKind::Editor,
            LauncherKind::MaterialEditor,
        ]
    }
}

impl fmt::Display for LauncherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_allow_list() {
        assert!(LauncherKind::Game.permits("windows"));
        assert!(LauncherKind::Game.permits("linux"));
        assert!(LauncherKind::Game.permits("android"));
        assert!(!LauncherKind::Game.permits("windows_dedicated"));
        assert!(!LauncherKind::Game.permits("ps5"));
    }

    #[test]
    fn test_server_allow_list() {
        assert!(LauncherKind::Server.permits("windows_dedicated"));
        assert!(LauncherKind::Server.permits("linux_dedicated"));
        assert!(!LauncherKind::Server.permits("windows"));
    }

    #[test]
    fn test_unrestricted_kinds_permit_anything() {
        for kind in [
            LauncherKind::Generic,
            LauncherKind::DedicatedServer,
            LauncherKind::Editor,
            LauncherKind::MaterialEditor,
        ] {
            assert!(!kind.is_restricted());
            assert!(kind.permits("ps5"));
            assert!(kind.permits(""));
        }
    }

    #[test]
    fn test_kind_serde_names_match_as_str() {
        for kind in LauncherKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
