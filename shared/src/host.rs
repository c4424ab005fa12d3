//! Default platforms for the machine running the launchers.

use serde::{Deserialize, Serialize};

use crate::kind::LauncherKind;
use crate::platform::{HostOs, LauncherClass};

/// Default platform identifier for each launcher kind.
///
/// The resolver substitutes these when a requested platform is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostDefaults {
    /// Game client platform (e.g. `windows`)
    pub platform: String,
    /// Dedicated server platform (e.g. `windows_dedicated`)
    pub dedicated_server: String,
    /// Editor platform (e.g. `windows_editor`)
    pub editor: String,
    /// Material editor platform (e.g. `windows_atom_tools`)
    pub material_editor: String,
    /// Generic executable platform (e.g. `windows_generic`)
    pub generic_executable: String,
}

impl HostDefaults {
    /// Defaults for the given host OS.
    pub fn for_os(os: HostOs) -> Self {
        let (game, dedicated, editor, atom_tools, generic) = match os {
            HostOs::Windows => (
                LauncherClass::WinGame,
                LauncherClass::WinDedicated,
                LauncherClass::WinEditor,
                LauncherClass::WinAtomTools,
                LauncherClass::WinGeneric,
            ),
            HostOs::Linux => (
                LauncherClass::LinuxGame,
                LauncherClass::LinuxDedicated,
                LauncherClass::LinuxEditor,
                LauncherClass::LinuxAtomTools,
                LauncherClass::LinuxGeneric,
            ),
        };

        Self {
            platform: game.as_str().to_string(),
            dedicated_server: dedicated.as_str().to_string(),
            editor: editor.as_str().to_string(),
            material_editor: atom_tools.as_str().to_string(),
            generic_executable: generic.as_str().to_string(),
        }
    }

    /// Defaults for the OS this binary was built for.
    pub fn host() -> Self {
        Self::for_os(HostOs::current())
    }

    /// Default platform for a launcher kind.
    pub fn for_kind(&self, kind: LauncherKind) -> &str {
        match kind {
            LauncherKind::Game => &self.platform,
            LauncherKind::DedicatedServer | LauncherKind::Server => &self.dedicated_server,
            LauncherKind::Editor => &self.editor,
            LauncherKind::MaterialEditor => &self.material_editor,
            LauncherKind::Generic => &self.generic_executable,
        }
    }
}

impl Default for HostDefaults {
    fn default() -> Self {
        Self::host()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_defaults() {
        let defaults = HostDefaults::for_os(HostOs::Windows);
        assert_eq!(defaults.for_kind(LauncherKind::Game), "windows");
        assert_eq!(defaults.for_kind(LauncherKind::Server), "windows_dedicated");
        assert_eq!(
            defaults.for_kind(LauncherKind::DedicatedServer),
            "windows_dedicated"
        );
        assert_eq!(defaults.for_kind(LauncherKind::Editor), "windows_editor");
        assert_eq!(
            defaults.for_kind(LauncherKind::MaterialEditor),
            "windows_atom_tools"
        );
        assert_eq!(defaults.for_kind(LauncherKind::Generic), "windows_generic");
    }

    #[test]
    fn test_linux_defaults() {
        let defaults = HostDefaults::for_os(HostOs::Linux);
        assert_eq!(defaults.for_kind(LauncherKind::Game), "linux");
        assert_eq!(defaults.for_kind(LauncherKind::Server), "linux_dedicated");
        assert_eq!(defaults.for_kind(LauncherKind::Generic), "linux_generic");
    }

    #[test]
    fn test_default_matches_host() {
        assert_eq!(HostDefaults::default(), HostDefaults::host());
    }
}
