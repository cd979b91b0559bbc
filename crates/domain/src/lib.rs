//! Sheetkeeper domain.
//!
//! Pure data shaping for gamebook character sheets: the fixed field set,
//! normalization of arbitrary key/value input, the HTML form name mapping,
//! and the JSON interchange codec. Nothing here does I/O.

pub mod character_sheet;
pub mod error;
pub mod form;
pub mod interchange;

pub use character_sheet::{SheetField, SheetRecord};
pub use error::{DomainError, ImportError};
pub use form::{display_name, FormData, FORM_FIELDS};
pub use interchange::SHEET_FILE_NAME;
