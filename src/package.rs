// src/package.rs

//! Package records: one per watched directory.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// Marker that separates the workspace root from the import path.
const SOURCE_SEGMENT: &str = "/src/";

/// Placeholder for the last processing result of a package.
///
/// Owned by the reporter. The registry only ever creates fresh, empty
/// instances of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageResult {
    pub package_name: String,
    /// Free-form outcome label set by the reporter, e.g. `"passed"`.
    pub outcome: Option<String>,
    pub output: String,
}

impl PackageResult {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            outcome: None,
            output: String::new(),
        }
    }
}

/// A single monitored directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    pub name: String,
    pub active: bool,
    pub result: PackageResult,
}

impl PackageRecord {
    /// New active record with an empty result.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = resolve_package_name(&path);
        let result = PackageResult::new(name.clone());
        Self {
            path,
            name,
            active: true,
            result,
        }
    }

    /// Copy of this record carrying a fresh result placeholder.
    pub fn detached(&self) -> Self {
        Self {
            path: self.path.clone(),
            name: self.name.clone(),
            active: self.active,
            result: PackageResult::new(self.name.clone()),
        }
    }
}

/// Derive the import-style name of a package directory.
///
/// Everything after the first `/src/` is the name; a path without one is
/// named after itself.
pub fn resolve_package_name(path: &Path) -> String {
    let raw = path.to_string_lossy();
    // Same byte length, so offsets into `normalized` are valid in `raw`.
    let normalized = raw.replace('\\', "/");
    match normalized.find(SOURCE_SEGMENT) {
        Some(index) => raw[index + SOURCE_SEGMENT.len()..].to_string(),
        None => raw.into_owned(),
    }
}

/// Paths are not guaranteed to be UTF-8; write them the same lossy way the
/// name is derived so one odd directory can't break a whole snapshot.
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
