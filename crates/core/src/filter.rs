//! Multi-criteria search filters and the predicate compiler.
//!
//! [`SearchFilters`] is the plain value object accepted by the search
//! facade; [`compile`] turns it into a conjunction of [`Predicate`]s that
//! the repository renders to SQL. Every filter field contributes
//! independently, so any subset may be present.

use serde::Deserialize;

use crate::programs::{FederalProgram, ProvincialGroup};

/// Filters accepted by the multi-criteria NOC search.
///
/// All fields are optional; absent fields add no restriction. Field names
/// deserialize from camelCase to match the public query-string contract.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Free-text term matched against title, description, and exact code.
    pub search_term: Option<String>,
    /// Exact TEER category match. 0 is a valid category, not "unset".
    pub teer_level: Option<i16>,
    /// Express Entry category token (see [`FederalProgram::parse`]).
    pub ee_program: Option<String>,
    /// Provincial group token: "ontario" or "bc".
    pub provincial_program: Option<String>,
    /// Inclusive lower bound on total eligibility count; <= 0 disables.
    pub min_opportunities: Option<i64>,
    /// Inclusive lower bound on the priority score; <= 0 disables.
    pub min_priority: Option<i64>,
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
}

/// One compiled filter condition. Predicates always compose by AND; OR
/// exists only inside the term match and the provincial flag groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring match on title or description, or exact
    /// code equality when the term parses as a number.
    Term {
        /// ILIKE pattern, already wrapped in `%`.
        pattern: String,
        /// Set when the raw term was numeric.
        code: Option<i64>,
    },
    /// Exact TEER category equality.
    TeerEquals(i16),
    /// A single eligibility flag must be set.
    FlagSet(&'static str),
    /// At least one flag in the group must be set.
    AnyFlagSet(&'static [&'static str]),
    /// `total_eligibility_count >= threshold`.
    MinOpportunities(i64),
    /// `ee_priority_score >= threshold`.
    MinPriority(i64),
}

/// Compile a filter request into its predicate conjunction.
///
/// Unknown selector tokens compile to nothing rather than erroring, and a
/// blank search term is ignored; an empty filter set matches everything.
pub fn compile(filters: &SearchFilters) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    if let Some(term) = filters.search_term.as_deref() {
        let term = term.trim();
        if !term.is_empty() {
            predicates.push(Predicate::Term {
                pattern: format!("%{term}%"),
                code: term.parse().ok(),
            });
        }
    }

    if let Some(teer) = filters.teer_level {
        predicates.push(Predicate::TeerEquals(teer));
    }

    if let Some(program) = filters
        .ee_program
        .as_deref()
        .and_then(FederalProgram::parse)
    {
        predicates.push(Predicate::FlagSet(program.column()));
    }

    if let Some(group) = filters
        .provincial_program
        .as_deref()
        .and_then(ProvincialGroup::parse)
    {
        predicates.push(Predicate::AnyFlagSet(group.columns()));
    }

    if let Some(min) = filters.min_opportunities {
        if min > 0 {
            predicates.push(Predicate::MinOpportunities(min));
        }
    }

    if let Some(min) = filters.min_priority {
        if min > 0 {
            predicates.push(Predicate::MinPriority(min));
        }
    }

    predicates
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_compile_to_nothing() {
        assert!(compile(&SearchFilters::default()).is_empty());
    }

    #[test]
    fn blank_search_term_is_ignored() {
        let filters = SearchFilters {
            search_term: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(compile(&filters).is_empty());
    }

    #[test]
    fn textual_term_matches_without_code() {
        let filters = SearchFilters {
            search_term: Some(" engineer ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            compile(&filters),
            vec![Predicate::Term {
                pattern: "%engineer%".to_string(),
                code: None,
            }]
        );
    }

    #[test]
    fn numeric_term_adds_code_equality() {
        let filters = SearchFilters {
            search_term: Some("21234".to_string()),
            ..Default::default()
        };
        assert_eq!(
            compile(&filters),
            vec![Predicate::Term {
                pattern: "%21234%".to_string(),
                code: Some(21234),
            }]
        );
    }

    #[test]
    fn teer_zero_still_filters() {
        let filters = SearchFilters {
            teer_level: Some(0),
            ..Default::default()
        };
        assert_eq!(compile(&filters), vec![Predicate::TeerEquals(0)]);
    }

    #[test]
    fn known_federal_program_compiles_to_flag() {
        let filters = SearchFilters {
            ee_program: Some("stem".to_string()),
            ..Default::default()
        };
        assert_eq!(
            compile(&filters),
            vec![Predicate::FlagSet("ee_stem_eligible")]
        );
    }

    #[test]
    fn unknown_federal_program_is_silently_ignored() {
        let filters = SearchFilters {
            ee_program: Some("astronautics".to_string()),
            ..Default::default()
        };
        assert!(compile(&filters).is_empty());
    }

    #[test]
    fn provincial_group_compiles_to_flag_disjunction() {
        let filters = SearchFilters {
            provincial_program: Some("bc".to_string()),
            ..Default::default()
        };
        match compile(&filters).as_slice() {
            [Predicate::AnyFlagSet(columns)] => assert_eq!(columns.len(), 7),
            other => panic!("unexpected predicates: {other:?}"),
        }
    }

    #[test]
    fn unknown_provincial_group_is_silently_ignored() {
        let filters = SearchFilters {
            provincial_program: Some("yukon".to_string()),
            ..Default::default()
        };
        assert!(compile(&filters).is_empty());
    }

    #[test]
    fn zero_thresholds_disable_their_filters() {
        let filters = SearchFilters {
            min_opportunities: Some(0),
            min_priority: Some(0),
            ..Default::default()
        };
        assert!(compile(&filters).is_empty());
    }

    #[test]
    fn positive_thresholds_compile_to_lower_bounds() {
        let filters = SearchFilters {
            min_opportunities: Some(3),
            min_priority: Some(10),
            ..Default::default()
        };
        assert_eq!(
            compile(&filters),
            vec![
                Predicate::MinOpportunities(3),
                Predicate::MinPriority(10),
            ]
        );
    }

    #[test]
    fn all_filters_compose_by_and_in_fixed_order() {
        let filters = SearchFilters {
            search_term: Some("nurse".to_string()),
            teer_level: Some(2),
            ee_program: Some("health".to_string()),
            provincial_program: Some("ontario".to_string()),
            min_opportunities: Some(1),
            min_priority: Some(5),
            page: Some(2),
            limit: Some(10),
        };
        let predicates = compile(&filters);
        assert_eq!(predicates.len(), 6);
        assert!(matches!(predicates[0], Predicate::Term { .. }));
        assert!(matches!(predicates[1], Predicate::TeerEquals(2)));
        assert!(matches!(
            predicates[2],
            Predicate::FlagSet("ee_health_eligible")
        ));
        assert!(matches!(predicates[3], Predicate::AnyFlagSet(_)));
        assert!(matches!(predicates[4], Predicate::MinOpportunities(1)));
        assert!(matches!(predicates[5], Predicate::MinPriority(5)));
    }
}
