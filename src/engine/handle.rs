// src/engine/handle.rs

use std::path::{Path, PathBuf};

use tokio::sync::{mpsc, oneshot};

use crate::errors::{PkgwatchError, Result};
use crate::package::PackageRecord;
use crate::registry::AdjustReport;
use crate::types::FolderStatus;

use super::RegistryEvent;

/// Cloneable client for a running registry.
///
/// Every method fails with [`PkgwatchError::RuntimeClosed`] once the runtime
/// has stopped.
#[derive(Debug, Clone)]
pub struct RegistryHandle {
    tx: mpsc::Sender<RegistryEvent>,
}

impl RegistryHandle {
    pub fn new(tx: mpsc::Sender<RegistryEvent>) -> Self {
        Self { tx }
    }

    pub async fn folder_created(&self, path: impl Into<PathBuf>) -> Result<()> {
        self.send(RegistryEvent::FolderCreated(path.into())).await
    }

    pub async fn folder_removed(&self, path: impl Into<PathBuf>) -> Result<()> {
        self.send(RegistryEvent::FolderRemoved(path.into())).await
    }

    pub async fn adjust(&self, root: impl Into<PathBuf>) -> Result<AdjustReport> {
        let root = root.into();
        self.request(|reply| RegistryEvent::Adjust { root, reply })
            .await?
    }

    pub async fn ignore(&self, name: &str) -> Result<usize> {
        let name = name.to_string();
        self.request(|reply| RegistryEvent::Ignore { name, reply }).await
    }

    pub async fn reinstate(&self, name: &str) -> Result<usize> {
        let name = name.to_string();
        self.request(|reply| RegistryEvent::Reinstate { name, reply })
            .await
    }

    pub async fn watched_folders(&self) -> Result<Vec<PackageRecord>> {
        self.request(|reply| RegistryEvent::Snapshot { reply }).await
    }

    pub async fn status(&self, path: impl AsRef<Path>) -> Result<FolderStatus> {
        let path = path.as_ref().to_path_buf();
        self.request(|reply| RegistryEvent::Status { path, reply })
            .await
    }

    pub async fn is_watched(&self, path: impl AsRef<Path>) -> Result<bool> {
        Ok(self.status(path).await? == FolderStatus::Active)
    }

    pub async fn is_ignored(&self, path: impl AsRef<Path>) -> Result<bool> {
        Ok(self.status(path).await? == FolderStatus::Ignored)
    }

    pub async fn root(&self) -> Result<Option<PathBuf>> {
        self.request(|reply| RegistryEvent::Root { reply }).await
    }

    /// Ask the runtime to stop once earlier events are applied.
    pub async fn shutdown(&self) -> Result<()> {
        self.send(RegistryEvent::ShutdownRequested).await
    }

    async fn send(&self, event: RegistryEvent) -> Result<()> {
        self.tx
            .send(event)
            .await
            .map_err(|_| PkgwatchError::RuntimeClosed)
    }

    async fn request<T>(
        &self,
        make_event: impl FnOnce(oneshot::Sender<T>) -> RegistryEvent,
    ) -> Result<T> {
        let (reply, rx) = oneshot::channel();
        self.send(make_event(reply)).await?;
        rx.await.map_err(|_| PkgwatchError::RuntimeClosed)
    }
}
