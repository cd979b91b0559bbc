//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{config::EngineConfig, ports::SheetExportPort};
use crate::use_cases;

/// Main application state.
///
/// Built once at startup and passed to HTTP handlers via Axum state.
pub struct App {
    pub config: EngineConfig,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_sheet: use_cases::CharacterSheetUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(config: EngineConfig, exporter: Arc<dyn SheetExportPort>) -> Self {
        Self {
            config,
            use_cases: UseCases {
                character_sheet: use_cases::CharacterSheetUseCases::new(exporter),
            },
        }
    }
}
