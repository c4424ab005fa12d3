//! Registry helper functions.

use launchkit_shared::{HostOs, LauncherClass};

use super::table::LauncherRegistry;

/// Get a display string of all registered platforms (for error messages).
pub(crate) fn available_platforms_display(registry: &LauncherRegistry) -> String {
    let platforms = registry.platforms();
    if platforms.is_empty() {
        return "(none)".to_string();
    }
    platforms
        .iter()
        .map(|p| format!("'{}'", p))
        .collect::<Vec<_>>()
        .join(", ")
}

/// File name of the binary a launcher class starts.
///
/// Generic classes have no binary of their own and return `None`, as does
/// Android, which is driven over adb.
pub(crate) fn class_binary_name(class: LauncherClass, project: &str) -> Option<String> {
    let stem = match class {
        LauncherClass::WinGame | LauncherClass::LinuxGame => format!("{}.GameLauncher", project),
        LauncherClass::WinDedicated | LauncherClass::LinuxDedicated => {
            format!("{}.ServerLauncher", project)
        }
        LauncherClass::WinEditor | LauncherClass::LinuxEditor => "Editor".to_string(),
        LauncherClass::WinAtomTools | LauncherClass::LinuxAtomTools => {
            "MaterialEditor".to_string()
        }
        LauncherClass::Android | LauncherClass::WinGeneric | LauncherClass::LinuxGeneric => {
            return None;
        }
    };
    Some(format!("{}{}", stem, class.host_os().exe_suffix()))
}

/// Name of the generic binary when the caller gave none.
pub(crate) fn generic_binary_name(os: HostOs, project: &str) -> String {
    format!("{}{}", project, os.exe_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchkit_shared::HostDefaults;

    #[test]
    fn test_available_platforms_display() {
        let registry = LauncherRegistry::new(HostDefaults::for_os(HostOs::Linux))
            .with("linux", LauncherClass::LinuxGame)
            .with("android", LauncherClass::Android);
        assert_eq!(available_platforms_display(&registry), "'android', 'linux'");
    }

    #[test]
    fn test_available_platforms_display_empty() {
        assert_eq!(
            available_platforms_display(&LauncherRegistry::default()),
            "(none)"
        );
    }

    #[test]
    fn test_class_binary_name() {
        assert_eq!(
            class_binary_name(LauncherClass::WinGame, "AutomatedTesting").as_deref(),
            Some("AutomatedTesting.GameLauncher.exe")
        );
        assert_eq!(
            class_binary_name(LauncherClass::LinuxDedicated, "AutomatedTesting").as_deref(),
            Some("AutomatedTesting.ServerLauncher")
        );
        assert_eq!(
            class_binary_name(LauncherClass::WinEditor, "AutomatedTesting").as_deref(),
            Some("Editor.exe")
        );
        assert_eq!(
            class_binary_name(LauncherClass::LinuxAtomTools, "AutomatedTesting").as_deref(),
            Some("MaterialEditor")
        );
        assert_eq!(class_binary_name(LauncherClass::WinGeneric, "X"), None);
        assert_eq!(class_binary_name(LauncherClass::Android, "X"), None);
    }
}
