//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod decision;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/decision", get(decision::get).post(decision::evaluate))
}
