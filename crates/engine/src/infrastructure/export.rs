//! File-backed sheet export.
//!
//! Writes `player_sheet.json` into the export directory. Each write goes to
//! a temporary file in the same directory which is then renamed over the
//! target, so readers only ever see a complete sheet. Concurrent exports
//! race; the last rename wins.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sheetkeeper_domain::SHEET_FILE_NAME;
use tempfile::NamedTempFile;

use crate::infrastructure::ports::{ExportError, SheetExportPort};

pub struct FileSheetExporter {
    dir: PathBuf,
}

impl FileSheetExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the export file.
    pub fn target(&self) -> PathBuf {
        self.dir.join(SHEET_FILE_NAME)
    }
}

#[async_trait]
impl SheetExportPort for FileSheetExporter {
    async fn write_export(&self, contents: &[u8]) -> Result<(), ExportError> {
        let dir = self.dir.clone();
        let target = self.target();
        let contents = contents.to_vec();

        tokio::task::spawn_blocking(move || replace_file(&dir, &target, &contents))
            .await
            .map_err(|e| ExportError::Task(e.to_string()))??;

        tracing::debug!(path = %self.target().display(), "Sheet export written");
        Ok(())
    }
}

fn replace_file(dir: &Path, target: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: target.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(contents).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    file.persist(target).map_err(|e| io_err(e.error))?;
    Ok(())
}
