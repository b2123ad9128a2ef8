//! Ranking and pagination constants and helpers.
//!
//! The search facade and the convenience listings share these bounds so
//! every entry point pages the same way.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of search results per page.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of results per page or listing.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Default number of results for the TEER and single-program listings.
pub const DEFAULT_LISTING_LIMIT: i64 = 50;

/// Default number of results for the high-priority listing.
pub const DEFAULT_HIGH_PRIORITY_LIMIT: i64 = 20;

/// Default number of autocomplete suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: i64 = 10;

/// Maximum number of autocomplete suggestions.
pub const MAX_SUGGESTION_LIMIT: i64 = 25;

// ---------------------------------------------------------------------------
// Ranking thresholds
// ---------------------------------------------------------------------------

/// Priority score at or above which a record counts as high priority.
pub const HIGH_PRIORITY_SCORE: i64 = 20;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a 1-based page number; anything below 1 is treated as page 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Number of pages needed for `total` rows at `limit` rows per page.
/// Zero rows means zero pages.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
