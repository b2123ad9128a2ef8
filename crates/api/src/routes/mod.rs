pub mod health;
pub mod noc;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /noc/search               multi-criteria search
/// /noc/suggestions          autocomplete (?q=, ?limit=)
/// /noc/high-priority        high-priority listing (?limit=)
/// /noc/teer/{level}         per-TEER listing (?limit=)
/// /noc/program/{name}       single-program listing (?limit=)
/// /noc/{code}               profile lookup
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/noc", noc::router())
}
