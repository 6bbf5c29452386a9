// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::registry::Watcher;

use super::core::RegistryCore;
use super::{RegistryEvent, RegistryHandle};

/// Owns the registry and applies `RegistryEvent`s strictly one at a time.
///
/// This is a thin IO shell around [`RegistryCore`]: it only reads events
/// from the channel and hands them over.
pub struct Runtime {
    core: RegistryCore,
    event_rx: mpsc::Receiver<RegistryEvent>,
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    pub fn new(core: RegistryCore, event_rx: mpsc::Receiver<RegistryEvent>) -> Self {
        Self { core, event_rx }
    }

    /// Main event loop.
    ///
    /// Runs until `ShutdownRequested` arrives or every handle is dropped,
    /// then gives the registry back to the caller.
    pub async fn run(mut self) -> Watcher {
        info!("registry runtime started");

        while let Some(event) = self.event_rx.recv().await {
            debug!(?event, "registry received event");
            if !self.core.step(event) {
                info!("shutdown requested; stopping registry runtime");
                break;
            }
        }

        info!("registry runtime exiting");
        self.core.into_watcher()
    }
}

/// Move `watcher` into its own task and return a handle to it.
///
/// `capacity` bounds the number of events waiting to be applied; senders
/// wait once it is reached.
pub fn spawn_registry(watcher: Watcher, capacity: usize) -> (RegistryHandle, JoinHandle<Watcher>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let runtime = Runtime::new(RegistryCore::new(watcher), rx);
    let join = tokio::spawn(runtime.run());
    (RegistryHandle::new(tx), join)
}
