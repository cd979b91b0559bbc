//! Character sheet operation errors.

use crate::infrastructure::ports::ExportError;

/// Errors that can occur while exporting a character sheet.
///
/// Import failures are not here: they are [`sheetkeeper_domain::ImportError`]
/// and callers recover from them.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    #[error("Failed to encode sheet: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
