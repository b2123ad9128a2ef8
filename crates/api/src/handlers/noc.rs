//! Handlers for the NOC Navigator endpoints.
//!
//! The multi-criteria search surfaces query failures as 500s; the
//! convenience lookup and listings keep the facade's degraded results
//! (404 for an absent code, 200 with empty data otherwise), so a flaky
//! backing store never breaks the browsing pages.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use noc_core::error::CoreError;
use noc_core::filter::SearchFilters;
use noc_core::types::NocCode;
use noc_db::navigator;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the listing endpoints.
#[derive(Debug, Deserialize)]
pub struct ListingParams {
    pub limit: Option<i64>,
}

/// Query parameters for the autocomplete endpoint.
#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/v1/noc/search
///
/// Multi-criteria search with ranking and pagination metadata.
pub async fn search(
    State(state): State<AppState>,
    Query(filters): Query<SearchFilters>,
) -> AppResult<impl IntoResponse> {
    let response = navigator::search_noc_codes(&state.pool, &filters).await?;

    Ok(Json(DataResponse { data: response }))
}

/// GET /api/v1/noc/{code}
///
/// Full eligibility profile for one classification code.
pub async fn get_details(
    State(state): State<AppState>,
    Path(code): Path<NocCode>,
) -> AppResult<impl IntoResponse> {
    let profile = navigator::get_noc_details(&state.pool, code)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "NOC",
            code,
        }))?;

    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/noc/teer/{level}
///
/// Ranked profiles within one TEER category.
pub async fn list_by_teer(
    State(state): State<AppState>,
    Path(level): Path<i16>,
    Query(params): Query<ListingParams>,
) -> impl IntoResponse {
    let profiles = navigator::get_noc_by_teer(&state.pool, level, params.limit).await;

    Json(DataResponse { data: profiles })
}

/// GET /api/v1/noc/high-priority
///
/// Ranked profiles at or above the high-priority score threshold.
pub async fn list_high_priority(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> impl IntoResponse {
    let profiles = navigator::get_high_priority_nocs(&state.pool, params.limit).await;

    Json(DataResponse { data: profiles })
}

/// GET /api/v1/noc/program/{name}
///
/// Ranked profiles eligible for one named program stream. Unknown names
/// answer with an empty listing.
pub async fn list_by_program(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<ListingParams>,
) -> impl IntoResponse {
    let profiles = navigator::get_noc_by_program(&state.pool, &name, params.limit).await;

    Json(DataResponse { data: profiles })
}

/// GET /api/v1/noc/suggestions
///
/// Autocomplete suggestions as `"<code> - <title>"` strings.
pub async fn suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> impl IntoResponse {
    let term = params.q.unwrap_or_default();
    let suggestions = navigator::get_search_suggestions(&state.pool, &term, params.limit).await;

    Json(DataResponse { data: suggestions })
}
