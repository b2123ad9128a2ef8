//! Repository for the `noc_navigator` table.
//!
//! Strictly read-only: rows are produced by the upstream eligibility
//! import pipeline and never mutated here. Dynamic WHERE clauses are
//! rendered from the compiled [`Predicate`] conjunction; flag column names
//! come from the closed selector enums, so no request string ever reaches
//! the SQL text.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use noc_core::filter::Predicate;
use noc_core::programs::ProgramStream;
use noc_core::types::NocCode;

use crate::models::noc::{NocRecord, NocSuggestion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    noc_code, class_title, element_type_label, element_description, \
    teer_category, total_eligibility_count, ee_priority_score, \
    provincial_opportunities_count, \
    ee_health_eligible, ee_cec_eligible, ee_fsw_eligible, \
    ee_agriculture_eligible, ee_stem_eligible, ee_education_eligible, \
    ee_trade_eligible, ee_trade_program_eligible, \
    oinp_health_eligible, oinp_tech_eligible, oinp_in_demand_skills_eligible, \
    oinp_skilled_trades_eligible, oinp_foreign_worker_eligible, \
    oinp_international_student_eligible, \
    bcpnp_construction_eligible, bcpnp_health_eligible, bcpnp_tech_eligible, \
    bcpnp_vet_eligible, bcpnp_childcare_eligible, bcpnp_skilled_worker_eligible, \
    bcpnp_international_students_eligible, \
    sowp_c41_eligible, cusma_professional_eligible, cec_clb_required, \
    created_at, updated_at";

/// Fixed result ordering: priority first, breadth of eligibility second,
/// natural key last so exact ties stay deterministic across pages. Null
/// scores rank as zero, matching the profile deriver.
const RANKING: &str = "ORDER BY COALESCE(ee_priority_score, 0) DESC, \
    COALESCE(total_eligibility_count, 0) DESC, noc_code ASC";

/// Read-only query surface over `noc_navigator`.
pub struct NocRepo;

impl NocRepo {
    /// Count rows matching the predicate conjunction.
    pub async fn count(pool: &PgPool, predicates: &[Predicate]) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM noc_navigator{}",
            where_clause(predicates)
        );
        let row: (i64,) = bind_predicates(sqlx::query_as(&query), predicates)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Fetch one ranked page of rows matching the predicate conjunction.
    pub async fn search_page(
        pool: &PgPool,
        predicates: &[Predicate],
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NocRecord>, sqlx::Error> {
        let limit_idx = bind_count(predicates) + 1;
        let offset_idx = limit_idx + 1;
        let query = format!(
            "SELECT {COLUMNS} FROM noc_navigator{} {RANKING} \
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            where_clause(predicates)
        );
        bind_predicates(sqlx::query_as::<_, NocRecord>(&query), predicates)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Look up one record by its classification code.
    pub async fn find_by_code(
        pool: &PgPool,
        code: NocCode,
    ) -> Result<Option<NocRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM noc_navigator WHERE noc_code = $1");
        sqlx::query_as::<_, NocRecord>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List records in one TEER category, ranked, up to `limit`.
    pub async fn list_by_teer(
        pool: &PgPool,
        teer_category: i16,
        limit: i64,
    ) -> Result<Vec<NocRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM noc_navigator WHERE teer_category = $1 \
             {RANKING} LIMIT $2"
        );
        sqlx::query_as::<_, NocRecord>(&query)
            .bind(teer_category)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List records whose priority score meets `min_score`, ranked.
    pub async fn list_high_priority(
        pool: &PgPool,
        min_score: i64,
        limit: i64,
    ) -> Result<Vec<NocRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM noc_navigator WHERE ee_priority_score >= $1 \
             {RANKING} LIMIT $2"
        );
        sqlx::query_as::<_, NocRecord>(&query)
            .bind(min_score)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List records eligible for one named program stream, ranked.
    pub async fn list_by_program(
        pool: &PgPool,
        program: ProgramStream,
        limit: i64,
    ) -> Result<Vec<NocRecord>, sqlx::Error> {
        let column = program.column();
        let query = format!(
            "SELECT {COLUMNS} FROM noc_navigator WHERE {column} = TRUE \
             {RANKING} LIMIT $1"
        );
        sqlx::query_as::<_, NocRecord>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Minimal projection for autocomplete: title substring match, or exact
    /// code equality when the term is numeric.
    pub async fn suggestions(
        pool: &PgPool,
        term: &str,
        limit: i64,
    ) -> Result<Vec<NocSuggestion>, sqlx::Error> {
        let pattern = format!("%{term}%");
        let code: Option<NocCode> = term.trim().parse().ok();

        if let Some(code) = code {
            sqlx::query_as::<_, NocSuggestion>(
                "SELECT noc_code, class_title FROM noc_navigator \
                 WHERE class_title ILIKE $1 OR noc_code = $2 \
                 ORDER BY noc_code LIMIT $3",
            )
            .bind(&pattern)
            .bind(code)
            .bind(limit)
            .fetch_all(pool)
            .await
        } else {
            sqlx::query_as::<_, NocSuggestion>(
                "SELECT noc_code, class_title FROM noc_navigator \
                 WHERE class_title ILIKE $1 \
                 ORDER BY noc_code LIMIT $2",
            )
            .bind(&pattern)
            .bind(limit)
            .fetch_all(pool)
            .await
        }
    }
}

// ---------------------------------------------------------------------------
// Predicate rendering
// ---------------------------------------------------------------------------

/// Render the predicate conjunction as a WHERE clause (leading space
/// included), or an empty string when there is nothing to filter.
///
/// Bind placeholders are numbered in predicate order; [`bind_predicates`]
/// binds values in exactly the same order.
fn where_clause(predicates: &[Predicate]) -> String {
    if predicates.is_empty() {
        return String::new();
    }

    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    for predicate in predicates {
        match predicate {
            Predicate::Term { code, .. } => {
                let pattern_idx = bind_idx;
                bind_idx += 1;
                if code.is_some() {
                    conditions.push(format!(
                        "(class_title ILIKE ${pattern_idx} \
                         OR element_description ILIKE ${pattern_idx} \
                         OR noc_code = ${bind_idx})"
                    ));
                    bind_idx += 1;
                } else {
                    conditions.push(format!(
                        "(class_title ILIKE ${pattern_idx} \
                         OR element_description ILIKE ${pattern_idx})"
                    ));
                }
            }
            Predicate::TeerEquals(_) => {
                conditions.push(format!("teer_category = ${bind_idx}"));
                bind_idx += 1;
            }
            Predicate::FlagSet(column) => {
                conditions.push(format!("{column} = TRUE"));
            }
            Predicate::AnyFlagSet(columns) => {
                let group: Vec<String> = columns.iter().map(|c| format!("{c} = TRUE")).collect();
                conditions.push(format!("({})", group.join(" OR ")));
            }
            Predicate::MinOpportunities(_) => {
                conditions.push(format!("total_eligibility_count >= ${bind_idx}"));
                bind_idx += 1;
            }
            Predicate::MinPriority(_) => {
                conditions.push(format!("ee_priority_score >= ${bind_idx}"));
                bind_idx += 1;
            }
        }
    }

    format!(" WHERE {}", conditions.join(" AND "))
}

/// Number of bind placeholders the predicates consume.
fn bind_count(predicates: &[Predicate]) -> u32 {
    predicates
        .iter()
        .map(|predicate| match predicate {
            Predicate::Term { code: Some(_), .. } => 2,
            Predicate::Term { code: None, .. } => 1,
            Predicate::TeerEquals(_)
            | Predicate::MinOpportunities(_)
            | Predicate::MinPriority(_) => 1,
            Predicate::FlagSet(_) | Predicate::AnyFlagSet(_) => 0,
        })
        .sum()
}

/// Bind predicate values in clause order.
fn bind_predicates<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    predicates: &'q [Predicate],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for predicate in predicates {
        match predicate {
            Predicate::Term { pattern, code } => {
                query = query.bind(pattern.as_str());
                if let Some(code) = code {
                    query = query.bind(*code);
                }
            }
            Predicate::TeerEquals(teer) => query = query.bind(*teer),
            Predicate::MinOpportunities(min) => query = query.bind(*min),
            Predicate::MinPriority(min) => query = query.bind(*min),
            Predicate::FlagSet(_) | Predicate::AnyFlagSet(_) => {}
        }
    }
    query
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use noc_core::filter::{compile, SearchFilters};

    #[test]
    fn empty_predicates_render_no_where_clause() {
        assert_eq!(where_clause(&[]), "");
        assert_eq!(bind_count(&[]), 0);
    }

    #[test]
    fn numeric_term_renders_three_way_disjunction() {
        let predicates = vec![Predicate::Term {
            pattern: "%21234%".to_string(),
            code: Some(21234),
        }];
        assert_eq!(
            where_clause(&predicates),
            " WHERE (class_title ILIKE $1 \
             OR element_description ILIKE $1 \
             OR noc_code = $2)"
        );
        assert_eq!(bind_count(&predicates), 2);
    }

    #[test]
    fn textual_term_renders_two_way_disjunction() {
        let predicates = vec![Predicate::Term {
            pattern: "%nurse%".to_string(),
            code: None,
        }];
        assert_eq!(
            where_clause(&predicates),
            " WHERE (class_title ILIKE $1 \
             OR element_description ILIKE $1)"
        );
        assert_eq!(bind_count(&predicates), 1);
    }

    #[test]
    fn flag_predicates_render_without_placeholders() {
        let predicates = vec![
            Predicate::FlagSet("ee_health_eligible"),
            Predicate::MinPriority(10),
        ];
        assert_eq!(
            where_clause(&predicates),
            " WHERE ee_health_eligible = TRUE AND ee_priority_score >= $1"
        );
        assert_eq!(bind_count(&predicates), 1);
    }

    #[test]
    fn provincial_group_renders_or_across_all_columns() {
        let filters = SearchFilters {
            provincial_program: Some("ontario".to_string()),
            ..Default::default()
        };
        let clause = where_clause(&compile(&filters));
        assert_eq!(clause.matches(" OR ").count(), 5);
        assert!(clause.contains("oinp_health_eligible = TRUE"));
        assert!(clause.contains("oinp_international_student_eligible = TRUE"));
    }

    #[test]
    fn placeholders_number_in_predicate_order() {
        let filters = SearchFilters {
            search_term: Some("nurse".to_string()),
            teer_level: Some(2),
            ee_program: Some("health".to_string()),
            min_opportunities: Some(1),
            min_priority: Some(5),
            ..Default::default()
        };
        assert_eq!(
            where_clause(&compile(&filters)),
            " WHERE (class_title ILIKE $1 \
             OR element_description ILIKE $1) \
             AND teer_category = $2 \
             AND ee_health_eligible = TRUE \
             AND total_eligibility_count >= $3 \
             AND ee_priority_score >= $4"
        );
    }
}
