// src/watch/event_handler.rs

//! Classification of raw notify events into registry changes.

use std::path::PathBuf;

use notify::event::{CreateKind, ModifyKind, RemoveKind, RenameMode};
use notify::{Event, EventKind};

use crate::fs::FileSystem;

/// A change the registry cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderChange {
    Created(PathBuf),
    Removed(PathBuf),
}

/// Map one notify event to the directory changes it implies.
///
/// Only directories are ever reported as created. Removals are reported for
/// any path because the path is gone and its kind can no longer be checked;
/// removing an untracked path from the registry is a no-op.
pub fn classify_event(fs: &dyn FileSystem, event: &Event) -> Vec<FolderChange> {
    let created_if_dir = |path: &PathBuf| {
        fs.is_dir(path).then(|| FolderChange::Created(path.clone()))
    };

    match event.kind {
        EventKind::Create(CreateKind::File) => Vec::new(),
        EventKind::Create(CreateKind::Folder) => event
            .paths
            .iter()
            .map(|p| FolderChange::Created(p.clone()))
            .collect(),
        EventKind::Create(_) => event.paths.iter().filter_map(created_if_dir).collect(),

        EventKind::Remove(RemoveKind::File) => Vec::new(),
        EventKind::Remove(_) => event
            .paths
            .iter()
            .map(|p| FolderChange::Removed(p.clone()))
            .collect(),

        EventKind::Modify(ModifyKind::Name(mode)) => match mode {
            RenameMode::From => event
                .paths
                .iter()
                .map(|p| FolderChange::Removed(p.clone()))
                .collect(),
            RenameMode::To => event.paths.iter().filter_map(created_if_dir).collect(),
            RenameMode::Both => {
                // paths = [from, to]
                let mut changes = Vec::new();
                if let Some(from) = event.paths.first() {
                    changes.push(FolderChange::Removed(from.clone()));
                }
                if let Some(change) = event.paths.get(1).and_then(created_if_dir) {
                    changes.push(change);
                }
                changes
            }
            // Backends that cannot tell which side of a rename this is.
            RenameMode::Any | RenameMode::Other => event
                .paths
                .iter()
                .filter_map(|p| {
                    if fs.is_dir(p) {
                        Some(FolderChange::Created(p.clone()))
                    } else if !fs.exists(p) {
                        Some(FolderChange::Removed(p.clone()))
                    } else {
                        None
                    }
                })
                .collect(),
        },

        _ => Vec::new(),
    }
}
