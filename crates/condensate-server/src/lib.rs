//! Condensate HTTP API server (Axum).
//!
//! Exposes the deterministic condenser as a single synchronous endpoint,
//! plus typed entity extraction and a health probe.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with the default condenser.
pub fn app() -> Router {
    let state = AppState::new();
    app_with_state(state)
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::condense_routes())
        .with_state(state)
}
