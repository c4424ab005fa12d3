//! Launcher classes for every supported target platform.
//!
//! A `LauncherClass` is the construction strategy a platform identifier maps
//! to in the launcher registry. The set is closed: adding a platform means
//! adding a variant here, and the compiler points at every `match` that needs
//! a new arm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Host operating system a launcher class targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostOs {
    Windows,
    Linux,
}

impl HostOs {
    /// The operating system this binary was compiled for.
    ///
    /// Anything that isn't Windows is treated as Linux.
    pub const fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Linux
        }
    }

    /// Executable suffix for binaries on this OS.
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            HostOs::Windows => ".exe",
            HostOs::Linux => "",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostOs::Windows => "windows",
            HostOs::Linux => "linux",
        }
    }
}

/// Construction strategy for a launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LauncherClass {
    /// Windows game client
    WinGame,
    /// Linux game client
    LinuxGame,
    /// Android game client driven over adb
    Android,
    /// Windows dedicated server
    WinDedicated,
    /// Linux dedicated server
    LinuxDedicated,
    /// Windows editor
    WinEditor,
    /// Linux editor
    LinuxEditor,
    /// Windows material editor (atom tools)
    WinAtomTools,
    /// Linux material editor (atom tools)
    LinuxAtomTools,
    /// Windows launcher for an arbitrary executable
    WinGeneric,
    /// Linux launcher for an arbitrary executable
    LinuxGeneric,
}

impl LauncherClass {
    /// Canonical identifier, also the platform id the class is registered
    /// under in the host registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            LauncherClass::WinGame => "windows",
            LauncherClass::LinuxGame => "linux",
            LauncherClass::Android => "android",
            LauncherClass::WinDedicated => "windows_dedicated",
            LauncherClass::LinuxDedicated => "linux_dedicated",
            LauncherClass::WinEditor => "windows_editor",
            LauncherClass::LinuxEditor => "linux_editor",
            LauncherClass::WinAtomTools => "windows_atom_tools",
            LauncherClass::LinuxAtomTools => "linux_atom_tools",
            LauncherClass::WinGeneric => "windows_generic",
            LauncherClass::LinuxGeneric => "linux_generic",
        }
    }

    /// All launcher classes.
    pub fn all() -> &'static [LauncherClass] {
        &[
            LauncherClass::WinGame,
            LauncherClass::LinuxGame,
            LauncherClass::Android,
            LauncherClass::WinDedicated,
            LauncherClass::LinuxDedicated,
            LauncherClass::WinEditor,
            LauncherClass::LinuxEditor,
            LauncherClass::WinAtomTools,
            LauncherClass::LinuxAtomTools,
            LauncherClass::WinGeneric,
            LauncherClass::LinuxGeneric,
        ]
    }

    /// Classes available on a given host OS.
    ///
    /// Android devices are only driven from Windows hosts.
    pub fn available_on(os: HostOs) -> impl Iterator<Item = LauncherClass> {
        Self::all().iter().copied().filter(move |class| match class {
            LauncherClass::Android => os == HostOs::Windows,
            other => other.host_os() == os,
        })
    }

    /// Operating system the launched binary runs on.
    ///
    /// For `Android` this is the OS of the machine driving the device.
    pub fn host_os(&self) -> HostOs {
        match self {
            LauncherClass::WinGame
            | LauncherClass::Android
            | LauncherClass::WinDedicated
            | LauncherClass::WinEditor
            | LauncherClass::WinAtomTools
            | LauncherClass::WinGeneric => HostOs::Windows,
            LauncherClass::LinuxGame
            | LauncherClass::LinuxDedicated
            | LauncherClass::LinuxEditor
            | LauncherClass::LinuxAtomTools
            | LauncherClass::LinuxGeneric => HostOs::Linux,
        }
    }

    /// Whether this class launches a caller-supplied executable.
    pub fn is_generic(&self) -> bool {
        matches!(self, LauncherClass::WinGeneric | LauncherClass::LinuxGeneric)
    }
}

impl fmt::Display for LauncherClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no launcher class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown launcher class '{0}'")]
pub struct ParseLauncherClassError(pub String);

impl FromStr for LauncherClass {
    type Err = ParseLauncherClassError;

    /// Case-sensitive, matches `as_str()` exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| ParseLauncherClassError(s.to_string()))
    }
}

impl From<LauncherClass> for String {
    fn from(class: LauncherClass) -> Self {
        class.as_str().to_string()
    }
}

impl TryFrom<String> for LauncherClass {
    type Error = ParseLauncherClassError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_class_round_trips_through_str() {
        for class in LauncherClass::all() {
            assert_eq!(class.as_str().parse::<LauncherClass>(), Ok(*class));
        }
    }

    #[test]
    fn test_launcher_class_from_str_invalid() {
        assert!("".parse::<LauncherClass>().is_err());
        assert!("Windows".parse::<LauncherClass>().is_err()); // Case-sensitive
        assert_eq!(
            "ps5".parse::<LauncherClass>(),
            Err(ParseLauncherClassError("ps5".to_string()))
        );
    }

    #[test]
    fn test_available_on_windows_includes_android() {
        let classes: Vec<_> = LauncherClass::available_on(HostOs::Windows).collect();
        assert_eq!(classes.len(), 6);
        assert!(classes.contains(&LauncherClass::Android));
        assert!(classes.iter().all(|c| c.host_os() == HostOs::Windows));
    }

    #[test]
    fn test_available_on_linux_excludes_android() {
        let classes: Vec<_> = LauncherClass::available_on(HostOs::Linux).collect();
        assert_eq!(classes.len(), 5);
        assert!(!classes.contains(&LauncherClass::Android));
    }

    #[test]
    fn test_is_generic() {
        assert!(LauncherClass::WinGeneric.is_generic());
        assert!(LauncherClass::LinuxGeneric.is_generic());
        assert!(!LauncherClass::WinGame.is_generic());
    }

    #[test]
    fn test_exe_suffix() {
        assert_eq!(HostOs::Windows.exe_suffix(), ".exe");
        assert_eq!(HostOs::Linux.exe_suffix(), "");
    }
}
