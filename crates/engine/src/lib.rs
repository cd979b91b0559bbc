//! Sheetkeeper Engine library.
//!
//! Serves the character sheet page and its download/upload endpoints.
//!
//! ## Structure
//!
//! - `use_cases/` - Sheet operations: blank, extract, export, import
//! - `infrastructure/` - Configuration, export file adapter, ports
//! - `api/` - HTTP routes, form extraction and page rendering
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
