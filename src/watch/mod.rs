// src/watch/mod.rs

//! Filesystem change feed.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform recursive filesystem watcher (`notify`).
//! - Turning raw notify events into directory creations / removals.
//! - Forwarding those to the registry runtime.
//!
//! It does **not** decide which packages are active; the registry owns that.

pub mod event_handler;
pub mod watcher;

pub use event_handler::{classify_event, FolderChange};
pub use watcher::{spawn_watcher, WatcherHandle};
