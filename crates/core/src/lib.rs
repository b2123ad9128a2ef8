//! Domain core for the NOC Navigator.
//!
//! Pure vocabulary and logic with no database or HTTP dependencies: the
//! eligibility pathway and region enumerations, the closed program-selector
//! tables, the filter predicate compiler, and ranking/pagination helpers.
//! Everything here is usable from the repository layer, the API server, and
//! any future CLI tooling.

pub mod eligibility;
pub mod error;
pub mod filter;
pub mod programs;
pub mod search;
pub mod types;
