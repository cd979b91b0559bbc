//! Use cases - user story orchestration.

pub mod character_sheet;

pub use character_sheet::{CharacterSheetError, CharacterSheetUseCases, UploadOutcome};
