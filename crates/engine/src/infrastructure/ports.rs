//! Port traits for infrastructure boundaries.
//!
//! The only external dependency the engine has is the place a downloaded
//! sheet is persisted. Tests swap it for a mock.

use std::path::PathBuf;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write sheet export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Export task failed: {0}")]
    Task(String),
}

/// Persists the most recent sheet export.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetExportPort: Send + Sync {
    /// Replace the stored export with `contents`.
    async fn write_export(&self, contents: &[u8]) -> Result<(), ExportError>;
}
