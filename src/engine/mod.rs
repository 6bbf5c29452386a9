// src/engine/mod.rs

//! Serialized access to a [`Watcher`](crate::registry::Watcher).
//!
//! The registry has no internal locking, yet it is fed from several places:
//! - the filesystem change feed (creations / deletions)
//! - administrative commands (ignore / reinstate / new root)
//! - the reporter (snapshots and status queries)
//!
//! This module runs the registry inside a single task that consumes
//! [`RegistryEvent`]s one at a time. The synchronous state transitions live
//! in [`core`]; the async shell around them is [`runtime`], and callers talk
//! to it through a cloneable [`RegistryHandle`].

use std::path::PathBuf;

use tokio::sync::oneshot;

use crate::errors::Result;
use crate::package::PackageRecord;
use crate::registry::AdjustReport;
use crate::types::FolderStatus;

/// Events flowing into the registry runtime.
#[derive(Debug)]
pub enum RegistryEvent {
    /// A directory appeared under the root.
    FolderCreated(PathBuf),
    /// A path disappeared from under the root.
    FolderRemoved(PathBuf),
    /// Resync the registry against a new root.
    Adjust {
        root: PathBuf,
        reply: oneshot::Sender<Result<AdjustReport>>,
    },
    Ignore {
        name: String,
        reply: oneshot::Sender<usize>,
    },
    Reinstate {
        name: String,
        reply: oneshot::Sender<usize>,
    },
    Snapshot {
        reply: oneshot::Sender<Vec<PackageRecord>>,
    },
    Status {
        path: PathBuf,
        reply: oneshot::Sender<FolderStatus>,
    },
    Root {
        reply: oneshot::Sender<Option<PathBuf>>,
    },
    /// Stop after the current event (e.g. Ctrl-C).
    ShutdownRequested,
}

pub mod core;
pub mod handle;
pub mod runtime;

pub use self::core::RegistryCore;
pub use handle::RegistryHandle;
pub use runtime::{spawn_registry, Runtime};
