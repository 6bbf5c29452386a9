#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pkgwatch::fs::mock::MockFileSystem;
use pkgwatch::registry::Watcher;
use pkgwatch::shell::mock::MockShell;

/// Builder for an in-memory directory tree under a fixed root.
///
/// Relative paths given to the builder are resolved against the root.
pub struct TreeBuilder {
    root: PathBuf,
    fs: MockFileSystem,
}

impl TreeBuilder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let fs = MockFileSystem::new();
        fs.add_dir(&root);
        Self { root, fs }
    }

    pub fn dir(self, rel: &str) -> Self {
        self.fs.add_dir(self.root.join(rel));
        self
    }

    pub fn file(self, rel: &str) -> Self {
        self.fs.add_file(self.root.join(rel));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build(self) -> MockFileSystem {
        self.fs
    }
}

/// Builder for a `Watcher` over mock capabilities.
pub struct WatcherBuilder {
    fs: MockFileSystem,
    shell: MockShell,
    lookup_var: Option<String>,
}

impl WatcherBuilder {
    pub fn new(fs: MockFileSystem) -> Self {
        Self {
            fs,
            shell: MockShell::new(),
            lookup_var: None,
        }
    }

    pub fn shell(mut self, shell: MockShell) -> Self {
        self.shell = shell;
        self
    }

    /// Seed the ambient value of the lookup variable.
    pub fn ambient(mut self, var: &str, value: &str) -> Self {
        self.shell = self.shell.with_var(var, value);
        self
    }

    pub fn lookup_var(mut self, var: &str) -> Self {
        self.lookup_var = Some(var.to_string());
        self
    }

    /// Build the watcher, returning the shared mock shell for assertions.
    pub fn build(self) -> (Watcher, MockShell) {
        let fs = Arc::new(self.fs);
        let shell = Arc::new(self.shell.clone());
        let watcher = match self.lookup_var {
            Some(var) => Watcher::with_lookup_var(fs, shell, var),
            None => Watcher::new(fs, shell),
        };
        (watcher, self.shell)
    }
}

/// Sorted `(path, active)` pairs of every watched folder.
pub fn folder_states(watcher: &Watcher) -> Vec<(PathBuf, bool)> {
    let mut states: Vec<_> = watcher
        .watched_folders()
        .into_iter()
        .map(|record| (record.path, record.active))
        .collect();
    states.sort();
    states
}
