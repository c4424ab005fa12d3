//! launchkit CLI
//!
//! # Commands
//!
//! - `launchkit platforms` - List registered platforms and the default per kind
//! - `launchkit resolve <KIND>` - Resolve a launcher and print the command it would run
//!
//! # Usage
//!
//! ```bash
//! # Which game launcher would be used for android on this host?
//! launchkit resolve game --platform android --build-dir build/bin --project AutomatedTesting
//!
//! # Generic executable with extra arguments
//! launchkit resolve generic --platform linux_generic --exe AssetProcessor \
//!     --build-dir build/bin --project AutomatedTesting -- --zeroAnalysisMode
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use launchkit::registry::{LauncherResolver, Resolution};
use launchkit::{Launcher, LauncherConfig, LauncherKind, LauncherRegistry, Workspace};

#[derive(Parser)]
#[command(name = "launchkit")]
#[command(about = "Resolve platform launchers for a build workspace")]
#[command(version)]
struct Cli {
    /// Launcher config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered platforms and default platforms
    Platforms,

    /// Resolve a launcher and print the command it would run
    Resolve(ResolveArgs),
}

#[derive(Args)]
struct ResolveArgs {
    /// Launcher kind: generic, game, dedicated-server, server, editor, material-editor
    #[arg(value_parser = parse_kind)]
    kind: LauncherKind,

    /// Platform identifier (defaults to the host platform for the kind)
    #[arg(short, long)]
    platform: Option<String>,

    /// Workspace build directory
    #[arg(short, long)]
    build_dir: PathBuf,

    /// Project name
    #[arg(long)]
    project: String,

    /// Executable name (generic launchers only)
    #[arg(long)]
    exe: Option<String>,

    /// Android application id
    #[arg(long)]
    android_package: Option<String>,

    /// Arguments passed to the launched program
    #[arg(last = true)]
    args: Vec<String>,
}

fn parse_kind(s: &str) -> Result<LauncherKind, String> {
    LauncherKind::all()
        .iter()
        .copied()
        .find(|kind| kind.as_str() == s)
        .ok_or_else(|| {
            let names: Vec<_> = LauncherKind::all().iter().map(|k| k.as_str()).collect();
            format!("unknown launcher kind '{}' (expected one of: {})", s, names.join(", "))
        })
}

/// JSON body of `launchkit platforms --json`.
fn platforms_report(registry: &LauncherRegistry) -> serde_json::Value {
    let entries: serde_json::Map<String, serde_json::Value> = registry
        .entries()
        .into_iter()
        .map(|(platform, class)| (platform.to_string(), class.as_str().into()))
        .collect();
    serde_json::json!({
        "platforms": entries,
        "defaults": registry.defaults(),
    })
}

/// JSON body of `launchkit resolve --json`.
fn resolve_report(resolution: &Resolution, launcher: &Launcher) -> serde_json::Value {
    serde_json::json!({
        "kind": resolution.kind,
        "requested": resolution.requested,
        "platform": resolution.platform,
        "fallback": resolution.fallback,
        "launcher": launcher,
        "command": launcher.command_line(),
    })
}

fn print_platforms(registry: &LauncherRegistry, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&platforms_report(registry))?);
        return Ok(());
    }

    println!("Platforms:");
    for (platform, class) in registry.entries() {
        println!("  {:<24} {}", platform, class);
    }
    println!("Defaults:");
    for kind in LauncherKind::all() {
        println!("  {:<24} {}", kind.as_str(), registry.defaults().for_kind(*kind));
    }
    Ok(())
}

fn resolve(registry: &LauncherRegistry, args: ResolveArgs, json: bool) -> Result<()> {
    if args.exe.is_some() && args.kind != LauncherKind::Generic {
        tracing::warn!("--exe is only used by generic launchers; ignoring it");
    }

    let mut workspace = Workspace::new(&args.build_dir, args.project);
    if let Some(package) = args.android_package {
        workspace = workspace.android_package(package);
    }

    let (resolution, launcher) = LauncherResolver::new(registry)
        .create_resolved(
            args.kind,
            &workspace,
            args.platform.as_deref(),
            args.exe.as_deref(),
            Some(args.args),
        )
        .with_context(|| format!("Failed to create {} launcher", args.kind))?;

    if json {
        let out = resolve_report(&resolution, &launcher);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let note = if resolution.fallback { " [fallback]" } else { "" };
        println!(
            "{} -> {} ({}){}",
            resolution.requested,
            launcher.platform(),
            launcher.class(),
            note
        );
        println!("{}", launcher.command_line().join(" "));
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = LauncherConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load launcher config")?;
    let registry = config.build().context("Invalid launcher config")?;

    match cli.command {
        Commands::Platforms => print_platforms(&registry, cli.json),
        Commands::Resolve(args) => resolve(&registry, args, cli.json),
    }
}
