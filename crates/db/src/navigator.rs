//! Query facade over the NOC repository.
//!
//! Failure policy is asymmetric on purpose: the multi-criteria search
//! escalates backing-store errors so its caller can tell "no matches" from
//! "query failed", while the convenience lookup and listings degrade to
//! absent/empty results and log the failure.

use sqlx::PgPool;

use noc_core::filter::{self, SearchFilters};
use noc_core::programs::ProgramStream;
use noc_core::search::{
    clamp_limit, clamp_page, total_pages, DEFAULT_HIGH_PRIORITY_LIMIT, DEFAULT_LISTING_LIMIT,
    DEFAULT_SEARCH_LIMIT, DEFAULT_SUGGESTION_LIMIT, HIGH_PRIORITY_SCORE, MAX_SEARCH_LIMIT,
    MAX_SUGGESTION_LIMIT,
};
use noc_core::types::NocCode;

use crate::models::noc::{NocProfile, NocSearchResponse};
use crate::repositories::NocRepo;

/// Error surfaced by [`search_noc_codes`].
#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    /// The backing store rejected or failed the query.
    #[error("NOC query failed")]
    QueryFailed(#[from] sqlx::Error),
}

/// Multi-criteria search with ranking and pagination metadata.
///
/// Count and page are two independent reads under the same predicate set;
/// a catalog refresh landing between them can skew `total` against the
/// page contents. Accepted: the catalog only changes on imports and this
/// engine never writes.
pub async fn search_noc_codes(
    pool: &PgPool,
    filters: &SearchFilters,
) -> Result<NocSearchResponse, NavigatorError> {
    let predicates = filter::compile(filters);

    let total = NocRepo::count(pool, &predicates).await?;

    let page = clamp_page(filters.page);
    let limit = clamp_limit(filters.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);
    let offset = (page - 1) * limit;

    let rows = NocRepo::search_page(pool, &predicates, limit, offset).await?;
    let results = rows.iter().map(NocProfile::from_record).collect();

    Ok(NocSearchResponse {
        results,
        total,
        page,
        total_pages: total_pages(total, limit),
    })
}

/// Exact-code lookup. An absent code and a backing-store failure both
/// yield `None`.
pub async fn get_noc_details(pool: &PgPool, code: NocCode) -> Option<NocProfile> {
    match NocRepo::find_by_code(pool, code).await {
        Ok(row) => row.as_ref().map(NocProfile::from_record),
        Err(error) => {
            tracing::warn!(%error, code, "NOC detail lookup failed");
            None
        }
    }
}

/// Ranked records in one TEER category. Failure degrades to empty.
pub async fn get_noc_by_teer(
    pool: &PgPool,
    teer_category: i16,
    limit: Option<i64>,
) -> Vec<NocProfile> {
    let limit = clamp_limit(limit, DEFAULT_LISTING_LIMIT, MAX_SEARCH_LIMIT);
    match NocRepo::list_by_teer(pool, teer_category, limit).await {
        Ok(rows) => rows.iter().map(NocProfile::from_record).collect(),
        Err(error) => {
            tracing::warn!(%error, teer_category, "TEER listing failed");
            Vec::new()
        }
    }
}

/// Ranked records with a priority score of at least
/// [`HIGH_PRIORITY_SCORE`]. Failure degrades to empty.
pub async fn get_high_priority_nocs(pool: &PgPool, limit: Option<i64>) -> Vec<NocProfile> {
    let limit = clamp_limit(limit, DEFAULT_HIGH_PRIORITY_LIMIT, MAX_SEARCH_LIMIT);
    match NocRepo::list_high_priority(pool, HIGH_PRIORITY_SCORE, limit).await {
        Ok(rows) => rows.iter().map(NocProfile::from_record).collect(),
        Err(error) => {
            tracing::warn!(%error, "High-priority listing failed");
            Vec::new()
        }
    }
}

/// Ranked records eligible for one named program stream. Unknown names
/// and backing-store failures both yield an empty listing.
pub async fn get_noc_by_program(
    pool: &PgPool,
    program: &str,
    limit: Option<i64>,
) -> Vec<NocProfile> {
    let Some(stream) = ProgramStream::parse(program) else {
        return Vec::new();
    };

    let limit = clamp_limit(limit, DEFAULT_LISTING_LIMIT, MAX_SEARCH_LIMIT);
    match NocRepo::list_by_program(pool, stream, limit).await {
        Ok(rows) => rows.iter().map(NocProfile::from_record).collect(),
        Err(error) => {
            tracing::warn!(%error, program, "Program listing failed");
            Vec::new()
        }
    }
}

/// Autocomplete projection: `"<code> - <title>"` strings. Failure
/// degrades to empty.
pub async fn get_search_suggestions(
    pool: &PgPool,
    term: &str,
    limit: Option<i64>,
) -> Vec<String> {
    let limit = clamp_limit(limit, DEFAULT_SUGGESTION_LIMIT, MAX_SUGGESTION_LIMIT);
    match NocRepo::suggestions(pool, term, limit).await {
        Ok(rows) => rows
            .into_iter()
            .map(|row| format!("{} - {}", row.noc_code, row.class_title))
            .collect(),
        Err(error) => {
            tracing::warn!(%error, "Suggestion query failed");
            Vec::new()
        }
    }
}
