// src/shell/mod.rs

//! Access to process-wide environment variables.

use std::fmt::Debug;

use anyhow::{bail, Result};

pub mod mock;

/// Separator between entries of a path-list variable such as `PATH`.
#[cfg(windows)]
pub const LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const LIST_SEPARATOR: char = ':';

/// Abstract environment interface.
pub trait Shell: Send + Sync + Debug {
    /// Current value of `key`, or `None` if it is unset.
    fn getenv(&self, key: &str) -> Option<String>;

    fn setenv(&self, key: &str, value: &str) -> Result<()>;
}

/// Split a path-list value into its entries.
///
/// An empty value yields a single empty entry, matching how an unset
/// variable reads.
pub fn split_path_list(value: &str) -> Vec<String> {
    value.split(LIST_SEPARATOR).map(str::to_string).collect()
}

/// Join entries into a single path-list value.
pub fn join_path_list(entries: &[String]) -> String {
    let separator = LIST_SEPARATOR.to_string();
    entries.join(separator.as_str())
}

/// Implementation backed by the real process environment.
#[derive(Debug, Clone, Default)]
pub struct RealShell;

impl Shell for RealShell {
    fn getenv(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn setenv(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() || key.contains('=') || key.contains('\0') {
            bail!("invalid environment variable name {:?}", key);
        }
        if value.contains('\0') {
            bail!("value for {} contains a NUL byte", key);
        }
        // SAFETY: `set_var` is only sound while no other thread reads or
        // writes the environment through non-Rust code (libc `getenv`,
        // `setenv`). This process links no such code; Rust-side access goes
        // through the std environment lock.
        unsafe { std::env::set_var(key, value) };
        Ok(())
    }
}
