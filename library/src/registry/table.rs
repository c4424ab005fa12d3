//! Platform identifier to launcher class table.

use hashbrown::HashMap;

use launchkit_shared::{HostDefaults, HostOs, LauncherClass};

/// Launcher registry.
///
/// Maps platform identifiers to the launcher class that constructs them, and
/// carries the default platform for every launcher kind. Built once at
/// start-up and handed to the resolver by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherRegistry {
    launchers: HashMap<String, LauncherClass>,
    defaults: HostDefaults,
}

impl LauncherRegistry {
    /// Create an empty registry with the given defaults.
    pub fn new(defaults: HostDefaults) -> Self {
        Self {
            launchers: HashMap::new(),
            defaults,
        }
    }

    /// Registry for the OS this binary was built for.
    pub fn host() -> Self {
        Self::for_os(HostOs::current())
    }

    /// Registry holding every launcher class available on `os`, each under
    /// its canonical identifier.
    pub fn for_os(os: HostOs) -> Self {
        let mut registry = Self::new(HostDefaults::for_os(os));
        for class in LauncherClass::available_on(os) {
            registry.register(class.as_str(), class);
        }
        registry
    }

    /// Register a launcher class under a platform identifier.
    ///
    /// Returns the class previously registered under that identifier.
    pub fn register(
        &mut self,
        platform: impl Into<String>,
        class: LauncherClass,
    ) -> Option<LauncherClass> {
        self.launchers.insert(platform.into(), class)
    }

    /// Builder form of `register`.
    pub fn with(mut self, platform: impl Into<String>, class: LauncherClass) -> Self {
        self.register(platform, class);
        self
    }

    pub fn defaults(&self) -> &HostDefaults {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut HostDefaults {
        &mut self.defaults
    }

    /// Look up the launcher class for a platform identifier.
    pub fn get(&self, platform: &str) -> Option<LauncherClass> {
        self.launchers.get(platform).copied()
    }

    pub fn contains(&self, platform: &str) -> bool {
        self.launchers.contains_key(platform)
    }

    /// Registered platform identifiers, sorted.
    pub fn platforms(&self) -> Vec<&str> {
        let mut platforms: Vec<&str> = self.launchers.keys().map(String::as_str).collect();
        platforms.sort_unstable();
        platforms
    }

    /// Registered `(platform, class)` pairs, sorted by platform.
    pub fn entries(&self) -> Vec<(&str, LauncherClass)> {
        let mut entries: Vec<_> = self
            .launchers
            .iter()
            .map(|(platform, class)| (platform.as_str(), *class))
            .collect();
        entries.sort_unstable_by_key(|(platform, _)| *platform);
        entries
    }

    pub fn len(&self) -> usize {
        self.launchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.launchers.is_empty()
    }
}
