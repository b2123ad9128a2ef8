//! Route definitions for the NOC Navigator.
//!
//! All routes are mounted under `/noc`. Static segments are registered
//! before the `{code}` capture so `search`, `suggestions` and friends are
//! never swallowed by the lookup route.

use axum::routing::get;
use axum::Router;

use crate::handlers::noc;
use crate::state::AppState;

/// NOC Navigator routes mounted at `/noc`.
///
/// ```text
/// GET /search          -> search
/// GET /suggestions     -> suggestions
/// GET /high-priority   -> list_high_priority
/// GET /teer/{level}    -> list_by_teer
/// GET /program/{name}  -> list_by_program
/// GET /{code}          -> get_details
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(noc::search))
        .route("/suggestions", get(noc::suggestions))
        .route("/high-priority", get(noc::list_high_priority))
        .route("/teer/{level}", get(noc::list_by_teer))
        .route("/program/{name}", get(noc::list_by_program))
        .route("/{code}", get(noc::get_details))
}
