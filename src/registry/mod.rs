// src/registry/mod.rs

//! The registry of watched directories.
//!
//! [`Watcher`] owns one [`PackageRecord`] per directory under the current
//! root and tracks whether each one is active or ignored. It is a plain,
//! single-owner state container: every mutation takes `&mut self`. Code that
//! needs to share a registry between a change feed, admin commands and a
//! reporter should go through [`crate::engine`], which serializes access.

pub mod lookup_path;

use std::collections::HashMap;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::{PkgwatchError, Result};
use crate::fs::{FileSystem, WalkAnomaly, WalkEntry};
use crate::package::PackageRecord;
use crate::shell::{split_path_list, Shell};
use crate::types::FolderStatus;

pub use lookup_path::derive_lookup_path;

/// Environment variable the build tool consults for package lookup.
pub const DEFAULT_LOOKUP_VAR: &str = "GOPATH";

/// Summary of a successful [`Watcher::adjust`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustReport {
    pub root: PathBuf,
    /// Number of directories now watched.
    pub folders: usize,
    /// Entries the walk could not read. These never fail the resync.
    pub anomalies: Vec<WalkAnomaly>,
    /// Value derived for the lookup-path variable.
    pub lookup_path: String,
    /// Set when writing the lookup-path variable failed.
    pub env_error: Option<String>,
}

/// Registry of watched directories under a single root.
#[derive(Debug)]
pub struct Watcher {
    fs: Arc<dyn FileSystem>,
    shell: Arc<dyn Shell>,
    watched: HashMap<PathBuf, PackageRecord>,
    root: Option<PathBuf>,
    ambient_paths: Vec<String>,
    lookup_var: String,
}

impl Watcher {
    /// Create an empty registry, capturing the ambient `GOPATH` entries.
    pub fn new(fs: Arc<dyn FileSystem>, shell: Arc<dyn Shell>) -> Self {
        Self::with_lookup_var(fs, shell, DEFAULT_LOOKUP_VAR)
    }

    /// Like [`Watcher::new`], deriving `lookup_var` instead of `GOPATH`.
    pub fn with_lookup_var(
        fs: Arc<dyn FileSystem>,
        shell: Arc<dyn Shell>,
        lookup_var: impl Into<String>,
    ) -> Self {
        let lookup_var = lookup_var.into();
        let ambient = shell.getenv(&lookup_var).unwrap_or_default();
        let ambient_paths = split_path_list(&ambient);
        debug!(var = %lookup_var, ?ambient_paths, "captured ambient lookup paths");

        Self {
            fs,
            shell,
            watched: HashMap::new(),
            root: None,
            ambient_paths,
            lookup_var,
        }
    }

    /// The root of the last successful resync.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn ambient_paths(&self) -> &[String] {
        &self.ambient_paths
    }

    pub fn lookup_var(&self) -> &str {
        &self.lookup_var
    }

    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Rebuild the registry for a new root.
    ///
    /// Fails with [`PkgwatchError::NotFound`] if `root` does not exist, in
    /// which case nothing changes. Otherwise every directory under `root`
    /// (including `root`) becomes an active record and the lookup-path
    /// variable is rewritten.
    pub fn adjust(&mut self, root: impl AsRef<Path>) -> Result<AdjustReport> {
        let root = root.as_ref();
        if !self.fs.exists(root) {
            return Err(PkgwatchError::NotFound(root.to_path_buf()));
        }
        info!("adjusting to watch new root: {:?}", root);

        let mut watched = HashMap::new();
        let mut anomalies = Vec::new();
        self.fs.walk(root, &mut |item: std::result::Result<WalkEntry, WalkAnomaly>| {
            match item {
                Ok(entry) if entry.is_dir => {
                    debug!("including: {:?}", entry.path);
                    watched.insert(entry.path.clone(), PackageRecord::new(entry.path));
                }
                Ok(_) => {}
                Err(anomaly) => {
                    warn!("skipping unreadable entry while walking: {}", anomaly);
                    anomalies.push(anomaly);
                }
            }
            ControlFlow::Continue(())
        });

        self.root = Some(root.to_path_buf());
        self.watched = watched;

        let lookup_path = derive_lookup_path(&root.to_string_lossy(), &self.ambient_paths);
        let env_error = match self.shell.setenv(&self.lookup_var, &lookup_path) {
            Ok(()) => {
                info!(var = %self.lookup_var, value = %lookup_path, "set lookup path");
                None
            }
            Err(err) => {
                warn!(var = %self.lookup_var, "failed to set lookup path: {err:#}");
                Some(format!("{err:#}"))
            }
        };

        Ok(AdjustReport {
            root: root.to_path_buf(),
            folders: self.watched.len(),
            anomalies,
            lookup_path,
            env_error,
        })
    }

    /// A directory appeared: track it as active.
    pub fn creation(&mut self, folder: impl AsRef<Path>) {
        let folder = folder.as_ref();
        debug!("detected creation of: {:?}", folder);
        self.watched
            .insert(folder.to_path_buf(), PackageRecord::new(folder));
    }

    /// A directory disappeared: stop tracking it.
    pub fn deletion(&mut self, folder: impl AsRef<Path>) {
        let folder = folder.as_ref();
        debug!("detected deletion of: {:?}", folder);
        self.watched.remove(folder);
    }

    /// Deactivate every watched path ending with `name`.
    ///
    /// This is a plain string suffix match, so `"a"` also hits `/x/data`.
    /// Returns how many records matched.
    pub fn ignore(&mut self, name: &str) -> usize {
        let matched = self.set_active_by_suffix(name, false);
        info!(name, matched, "ignored packages");
        matched
    }

    /// Reactivate every watched path ending with `name`.
    pub fn reinstate(&mut self, name: &str) -> usize {
        let matched = self.set_active_by_suffix(name, true);
        info!(name, matched, "reinstated packages");
        matched
    }

    fn set_active_by_suffix(&mut self, suffix: &str, active: bool) -> usize {
        let mut matched = 0;
        for (path, record) in self.watched.iter_mut() {
            if path.to_string_lossy().ends_with(suffix) {
                record.active = active;
                matched += 1;
            }
        }
        matched
    }

    /// Independent copy of every record, each with a fresh result.
    pub fn watched_folders(&self) -> Vec<PackageRecord> {
        debug!("number of watched folders: {}", self.watched.len());
        self.watched.values().map(PackageRecord::detached).collect()
    }

    pub fn status(&self, folder: impl AsRef<Path>) -> FolderStatus {
        match self.watched.get(folder.as_ref()) {
            Some(record) if record.active => FolderStatus::Active,
            Some(_) => FolderStatus::Ignored,
            None => FolderStatus::Unknown,
        }
    }

    /// Tracked and active. `false` for unknown paths.
    pub fn is_watched(&self, folder: impl AsRef<Path>) -> bool {
        self.status(folder) == FolderStatus::Active
    }

    /// Tracked and ignored. `false` for unknown paths.
    pub fn is_ignored(&self, folder: impl AsRef<Path>) -> bool {
        self.status(folder) == FolderStatus::Ignored
    }
}
