// src/registry/lookup_path.rs

//! Derivation of the build tool's lookup-path variable from the watch root.

use crate::shell::join_path_list;

/// Marker for the source tree inside a workspace.
const SOURCE_MARKER: &str = "/src";

/// Pick the lookup-path value for a newly watched `root`.
///
/// Precedence:
/// 1. `root` lies under one of the (non-empty) ambient entries: keep the
///    ambient value as the process was started with it.
/// 2. `root` contains `/src`: the workspace is everything before its last
///    occurrence.
/// 3. Otherwise `root` itself.
pub fn derive_lookup_path(root: &str, ambient_paths: &[String]) -> String {
    let inside_ambient = ambient_paths
        .iter()
        .any(|entry| !entry.is_empty() && root.starts_with(entry.as_str()));
    if inside_ambient {
        return join_path_list(ambient_paths);
    }

    let normalized = root.replace('\\', "/");
    match normalized.rfind(SOURCE_MARKER) {
        Some(end) => root[..end].to_string(),
        None => root.to_string(),
    }
}
