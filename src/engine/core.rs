// src/engine/core.rs

//! Synchronous state transitions of the registry runtime.
//!
//! No channels are read here and nothing blocks on the runtime; a reply is
//! handed to its oneshot sender and forgotten. This keeps the semantics
//! testable without spinning up Tokio.

use tracing::debug;

use crate::engine::RegistryEvent;
use crate::registry::Watcher;

#[derive(Debug)]
pub struct RegistryCore {
    watcher: Watcher,
}

impl RegistryCore {
    pub fn new(watcher: Watcher) -> Self {
        Self { watcher }
    }

    pub fn watcher(&self) -> &Watcher {
        &self.watcher
    }

    pub fn into_watcher(self) -> Watcher {
        self.watcher
    }

    /// Apply a single event. Returns `false` once the runtime should stop.
    pub fn step(&mut self, event: RegistryEvent) -> bool {
        match event {
            RegistryEvent::FolderCreated(path) => self.watcher.creation(path),
            RegistryEvent::FolderRemoved(path) => self.watcher.deletion(path),
            RegistryEvent::Adjust { root, reply } => {
                respond(reply, self.watcher.adjust(root));
            }
            RegistryEvent::Ignore { name, reply } => {
                respond(reply, self.watcher.ignore(&name));
            }
            RegistryEvent::Reinstate { name, reply } => {
                respond(reply, self.watcher.reinstate(&name));
            }
            RegistryEvent::Snapshot { reply } => {
                respond(reply, self.watcher.watched_folders());
            }
            RegistryEvent::Status { path, reply } => {
                respond(reply, self.watcher.status(path));
            }
            RegistryEvent::Root { reply } => {
                respond(reply, self.watcher.root().map(|p| p.to_path_buf()));
            }
            RegistryEvent::ShutdownRequested => return false,
        }
        true
    }
}

fn respond<T>(reply: tokio::sync::oneshot::Sender<T>, value: T) {
    if reply.send(value).is_err() {
        // The caller stopped waiting; the state change still happened.
        debug!("registry reply dropped by caller");
    }
}
