// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod package;
pub mod registry;
pub mod shell;
pub mod types;
pub mod watch;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_or_default;
use crate::config::validate::validate_lookup_var;
use crate::config::ConfigFile;
use crate::engine::spawn_registry;
use crate::fs::{FileSystem, RealFileSystem};
use crate::package::PackageRecord;
use crate::registry::{AdjustReport, Watcher};
use crate::shell::{RealShell, Shell};

/// Capacity of the registry runtime's event channel.
const REGISTRY_QUEUE: usize = 256;

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub root: PathBuf,
    pub lookup_var: String,
    /// Config ignores first, then CLI ignores.
    pub ignore: Vec<String>,
}

impl RunSettings {
    /// CLI flags win over the config file; the root falls back to the
    /// current working directory.
    pub fn resolve(args: &CliArgs, cfg: &ConfigFile) -> errors::Result<Self> {
        let root = match args.root.as_ref().or(cfg.root()) {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };

        let lookup_var = match &args.lookup_var {
            Some(var) => {
                validate_lookup_var(var)?;
                var.clone()
            }
            None => cfg.lookup_var().to_string(),
        };

        let ignore = cfg
            .ignore()
            .iter()
            .chain(args.ignore.iter())
            .filter(|name| !name.is_empty())
            .cloned()
            .collect();

        Ok(Self {
            root,
            lookup_var,
            ignore,
        })
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the initial resync of the registry
/// - the registry runtime
/// - the file watcher (disabled in --once mode)
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref())?;
    let settings = RunSettings::resolve(&args, &cfg)?;

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let shell: Arc<dyn Shell> = Arc::new(RealShell);

    // Canonicalize once so notify paths and registry keys agree.
    let root = fs
        .canonicalize(&settings.root)
        .unwrap_or_else(|_| settings.root.clone());

    let mut watcher = Watcher::with_lookup_var(Arc::clone(&fs), shell, &settings.lookup_var);
    let report = watcher.adjust(&root)?;
    log_adjust_report(&report);

    for name in &settings.ignore {
        watcher.ignore(name);
    }

    if args.once {
        print_folders(&watcher.watched_folders(), args.json)?;
        return Ok(());
    }

    let (registry, runtime) = spawn_registry(watcher, REGISTRY_QUEUE);
    let _watcher_handle = watch::spawn_watcher(&root, registry.clone(), fs)?;

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received; shutting down");

    registry.shutdown().await?;
    let watcher = runtime.await?;
    print_folders(&watcher.watched_folders(), args.json)?;

    Ok(())
}

fn log_adjust_report(report: &AdjustReport) {
    info!(
        root = ?report.root,
        folders = report.folders,
        lookup_path = %report.lookup_path,
        "watching root"
    );
    if !report.anomalies.is_empty() {
        warn!(
            count = report.anomalies.len(),
            "some entries could not be read while scanning the root"
        );
    }
    if let Some(err) = &report.env_error {
        warn!("lookup path was not applied: {err}");
    }
}

/// Print the watched folders to stdout, sorted by path.
fn print_folders(folders: &[PackageRecord], json: bool) -> Result<()> {
    let mut folders = folders.to_vec();
    folders.sort_by(|a, b| a.path.cmp(&b.path));

    if json {
        println!("{}", serde_json::to_string_pretty(&folders)?);
        return Ok(());
    }

    println!("watched folders ({}):", folders.len());
    for folder in &folders {
        let state = if folder.active { "active" } else { "ignored" };
        println!("  [{state:>7}] {}", folder.name);
        if folder.name != folder.path.to_string_lossy() {
            println!("            {}", folder.path.display());
        }
    }
    Ok(())
}
