//! Launcher handle, workspace and the construction strategy for each class.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

use launchkit_shared::LauncherClass;

use super::helpers::{class_binary_name, generic_binary_name};

/// Build or installation directory the launchers start binaries from.
///
/// The resolver passes this through to the constructed launcher without
/// looking at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workspace {
    build_dir: PathBuf,
    project: String,
    android_package: Option<String>,
}

impl Workspace {
    pub fn new(build_dir: impl AsRef<Path>, project: impl Into<String>) -> Self {
        Self {
            build_dir: build_dir.as_ref().to_path_buf(),
            project: project.into(),
            android_package: None,
        }
    }

    /// Set the Android application id used by Android launchers.
    pub fn android_package(mut self, package: impl Into<String>) -> Self {
        self.android_package = Some(package.into());
        self
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Android application id, defaulting to the lower-cased project name.
    pub fn package_name(&self) -> String {
        self.android_package
            .clone()
            .unwrap_or_else(|| self.project.to_lowercase())
    }
}

/// What a launcher starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchTarget {
    /// Binary inside the workspace build directory
    Binary(PathBuf),
    /// Android application started over adb
    AndroidPackage(String),
}

/// A constructed launcher.
///
/// Describes the process it would start; it does not start it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Launcher {
    class: LauncherClass,
    platform: String,
    workspace: Workspace,
    target: LaunchTarget,
    args: Vec<String>,
}

impl Launcher {
    pub fn class(&self) -> LauncherClass {
        self.class
    }

    /// Platform identifier this launcher was registered under.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn target(&self) -> &LaunchTarget {
        &self.target
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by its arguments.
    pub fn command_line(&self) -> Vec<String> {
        match &self.target {
            LaunchTarget::Binary(path) => std::iter::once(path.display().to_string())
                .chain(self.args.iter().cloned())
                .collect(),
            LaunchTarget::AndroidPackage(package) => [
                "adb",
                "shell",
                "monkey",
                "-p",
                package.as_str(),
                "-c",
                "android.intent.category.LAUNCHER",
                "1",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }

    /// Build the process command for this launcher.
    ///
    /// Binaries run from the workspace build directory.
    pub fn command(&self) -> Command {
        let line = self.command_line();
        let mut cmd = Command::new(&line[0]);
        cmd.args(&line[1..]);
        if let LaunchTarget::Binary(_) = self.target {
            cmd.current_dir(self.workspace.build_dir());
        }
        cmd
    }
}

/// Construction capability shared by every launcher class.
pub trait LaunchStrategy {
    /// Construct a launcher for `workspace`.
    ///
    /// `platform` is the identifier the class was found under. A supplied
    /// `exe_name` replaces the class's own binary.
    fn construct(
        &self,
        platform: &str,
        workspace: &Workspace,
        exe_name: Option<&str>,
        args: Option<Vec<String>>,
    ) -> Launcher;
}

impl LaunchStrategy for LauncherClass {
    fn construct(
        &self,
        platform: &str,
        workspace: &Workspace,
        exe_name: Option<&str>,
        args: Option<Vec<String>>,
    ) -> Launcher {
        let target = match (self, exe_name) {
            (LauncherClass::Android, None) => LaunchTarget::AndroidPackage(workspace.package_name()),
            (_, Some(exe)) => LaunchTarget::Binary(workspace.build_dir().join(exe)),
            (class, None) => {
                let binary = class_binary_name(*class, workspace.project()).unwrap_or_else(|| {
                    generic_binary_name(class.host_os(), workspace.project())
                });
                LaunchTarget::Binary(workspace.build_dir().join(binary))
            }
        };

        Launcher {
            class: *self,
            platform: platform.to_string(),
            workspace: workspace.clone(),
            target,
            args: args.unwrap_or_default(),
        }
    }
}
