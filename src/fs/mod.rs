// src/fs/mod.rs

use std::fmt::{self, Debug};
use std::fs;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

pub mod mock;

/// One entry produced while walking a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// A per-entry problem hit while walking a tree.
///
/// Walks keep going past these; they are reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkAnomaly {
    pub path: Option<PathBuf>,
    pub message: String,
}

impl fmt::Display for WalkAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Callback invoked for every walked entry. Returning `Break` stops the walk.
pub type WalkVisitor<'a> = dyn FnMut(std::result::Result<WalkEntry, WalkAnomaly>) -> ControlFlow<()> + 'a;

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Return a list of entries in a directory.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Visit `root` and everything below it, parents before children.
    ///
    /// A directory that cannot be listed is reported to the visitor as an
    /// anomaly and skipped; the rest of the tree is still visited.
    fn walk(&self, root: &Path, visit: &mut WalkVisitor<'_>) {
        let mut stack = vec![root.to_path_buf()];

        while let Some(path) = stack.pop() {
            let is_dir = self.is_dir(&path);
            let entry = WalkEntry {
                path: path.clone(),
                is_dir,
            };
            if visit(Ok(entry)).is_break() {
                return;
            }
            if !is_dir {
                continue;
            }

            match self.read_dir(&path) {
                Ok(mut children) => {
                    // Reverse so children pop off the stack in listing order.
                    children.reverse();
                    stack.extend(children);
                }
                Err(err) => {
                    let anomaly = WalkAnomaly {
                        path: Some(path),
                        message: format!("{err:#}"),
                    };
                    if visit(Err(anomaly)).is_break() {
                        return;
                    }
                }
            }
        }
    }
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).with_context(|| format!("canonicalizing {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            let entry = entry?;
            entries.push(entry.path());
        }
        Ok(entries)
    }

    fn walk(&self, root: &Path, visit: &mut WalkVisitor<'_>) {
        for item in WalkDir::new(root).follow_links(false) {
            let item = match item {
                Ok(entry) => Ok(WalkEntry {
                    is_dir: entry.file_type().is_dir(),
                    path: entry.into_path(),
                }),
                Err(err) => Err(WalkAnomaly {
                    path: err.path().map(Path::to_path_buf),
                    message: err.to_string(),
                }),
            };
            if visit(item).is_break() {
                return;
            }
        }
    }
}
