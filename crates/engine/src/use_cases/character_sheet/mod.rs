//! Character sheet use cases.
//!
//! Handles the three things a player does with the sheet: open a blank one,
//! download the current one, and upload a saved one.

mod error;

pub use error::CharacterSheetError;

use std::sync::Arc;

use sheetkeeper_domain::{interchange, FormData, ImportError, SheetRecord};

use crate::infrastructure::ports::SheetExportPort;

/// Result of an upload: either the imported sheet, or the sheet submitted
/// alongside the upload when the file could not be read.
#[derive(Debug)]
pub enum UploadOutcome {
    Imported(SheetRecord),
    FellBack {
        record: SheetRecord,
        reason: ImportError,
    },
}

impl UploadOutcome {
    pub fn record(&self) -> &SheetRecord {
        match self {
            UploadOutcome::Imported(record) => record,
            UploadOutcome::FellBack { record, .. } => record,
        }
    }

    pub fn into_record(self) -> SheetRecord {
        match self {
            UploadOutcome::Imported(record) => record,
            UploadOutcome::FellBack { record, .. } => record,
        }
    }
}

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    exporter: Arc<dyn SheetExportPort>,
}

impl CharacterSheetUseCases {
    pub fn new(exporter: Arc<dyn SheetExportPort>) -> Self {
        Self { exporter }
    }

    /// The sheet shown on first visit.
    pub fn blank(&self) -> SheetRecord {
        SheetRecord::empty()
    }

    /// Read the sheet out of submitted form inputs. Never fails.
    pub fn extract(&self, form: &FormData) -> SheetRecord {
        SheetRecord::from_form(form)
    }

    /// Encode a sheet, persist it as the latest export and return the bytes.
    ///
    /// The returned bytes are what this call wrote, so callers can stream
    /// them without re-reading the shared export file.
    pub async fn export(&self, record: &SheetRecord) -> Result<Vec<u8>, CharacterSheetError> {
        let contents = interchange::encode(record)?;
        self.exporter.write_export(&contents).await?;
        Ok(contents)
    }

    /// Parse an uploaded sheet file.
    pub fn import(&self, upload: Option<&[u8]>) -> Result<SheetRecord, ImportError> {
        let bytes = upload.ok_or(ImportError::MissingUpload)?;
        interchange::decode(bytes)
    }

    /// Import the upload, falling back to the submitted form on failure.
    pub fn import_or_extract(&self, upload: Option<&[u8]>, form: &FormData) -> UploadOutcome {
        match self.import(upload) {
            Ok(record) => UploadOutcome::Imported(record),
            Err(reason) => UploadOutcome::FellBack {
                record: self.extract(form),
                reason,
            },
        }
    }
}
