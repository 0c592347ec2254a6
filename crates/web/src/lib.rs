//! HTTP transport for the tank-game score service.
//!
//! All routing and validation lives here; the ranked score collection
//! itself is owned by the `storage` crate and shared with handlers as
//! axum state.

use axum::Router;
use storage::ScoreStore;

pub mod config;
pub mod error;
pub mod features;

/// Build the application router around a score store handle.
///
/// CORS, tracing, and the swagger UI are layered on in `main`; tests
/// drive this router directly.
pub fn build_router(store: ScoreStore) -> Router {
    Router::new()
        .merge(features::health::routes::routes())
        .merge(features::scores::routes::routes())
        .with_state(store)
}
