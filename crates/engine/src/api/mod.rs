//! API layer - HTTP entry points.

pub mod http;
pub mod render;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::App;

/// Build the full router with state and middleware applied.
pub fn router(app: Arc<App>) -> Router {
    let body_limit = app.config.max_upload_bytes;

    http::routes()
        .with_state(app)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
