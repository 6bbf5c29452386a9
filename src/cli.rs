// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pkgwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pkgwatch",
    version,
    about = "Track which package directories under a root are watched or ignored.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Pkgwatch.toml` in the current directory is used when it
    /// exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to watch. Overrides `[watch].root`.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Ignore packages whose path ends with NAME (repeatable).
    #[arg(long, value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Environment variable to derive the lookup path into.
    /// Overrides `[watch].lookup_var`.
    #[arg(long, value_name = "NAME")]
    pub lookup_var: Option<String>,

    /// Scan once, print the watched folders and exit, no watching.
    #[arg(long)]
    pub once: bool,

    /// Print the watched folders as JSON.
    #[arg(long)]
    pub json: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PKGWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
