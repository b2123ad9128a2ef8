//! Row model and derived eligibility profile for the `noc_navigator` table.

use serde::Serialize;
use sqlx::FromRow;

use noc_core::eligibility::{skill_level_description, Pathway, Region, PATHWAY_ORDER};
use noc_core::types::{NocCode, Timestamp};

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `noc_navigator` table.
///
/// Score and flag columns are nullable in the backing table; the profile
/// deriver normalizes them (null counts as 0, null flags as false, null
/// language benchmark as "N/A").
#[derive(Debug, Clone, FromRow)]
pub struct NocRecord {
    pub noc_code: NocCode,
    pub class_title: String,
    pub element_type_label: Option<String>,
    pub element_description: Option<String>,
    pub teer_category: i16,
    pub total_eligibility_count: Option<i32>,
    pub ee_priority_score: Option<i32>,
    pub provincial_opportunities_count: Option<i32>,
    // Express Entry streams
    pub ee_health_eligible: Option<bool>,
    pub ee_cec_eligible: Option<bool>,
    pub ee_fsw_eligible: Option<bool>,
    pub ee_agriculture_eligible: Option<bool>,
    pub ee_stem_eligible: Option<bool>,
    pub ee_education_eligible: Option<bool>,
    pub ee_trade_eligible: Option<bool>,
    pub ee_trade_program_eligible: Option<bool>,
    // Ontario (OINP) streams
    pub oinp_health_eligible: Option<bool>,
    pub oinp_tech_eligible: Option<bool>,
    pub oinp_in_demand_skills_eligible: Option<bool>,
    pub oinp_skilled_trades_eligible: Option<bool>,
    pub oinp_foreign_worker_eligible: Option<bool>,
    pub oinp_international_student_eligible: Option<bool>,
    // British Columbia (BCPNP) streams
    pub bcpnp_construction_eligible: Option<bool>,
    pub bcpnp_health_eligible: Option<bool>,
    pub bcpnp_tech_eligible: Option<bool>,
    pub bcpnp_vet_eligible: Option<bool>,
    pub bcpnp_childcare_eligible: Option<bool>,
    pub bcpnp_skilled_worker_eligible: Option<bool>,
    pub bcpnp_international_students_eligible: Option<bool>,
    // Other programs
    pub sowp_c41_eligible: Option<bool>,
    pub cusma_professional_eligible: Option<bool>,
    pub cec_clb_required: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NocRecord {
    /// Whether the flag backing a labeled pathway is set.
    fn pathway_eligible(&self, pathway: Pathway) -> bool {
        let flag = match pathway {
            Pathway::EeHealth => self.ee_health_eligible,
            Pathway::EeStem => self.ee_stem_eligible,
            Pathway::EeEducation => self.ee_education_eligible,
            Pathway::EeAgriculture => self.ee_agriculture_eligible,
            Pathway::EeTrade => self.ee_trade_eligible,
            Pathway::EeTradeProgram => self.ee_trade_program_eligible,
            Pathway::OinpHealth => self.oinp_health_eligible,
            Pathway::OinpTech => self.oinp_tech_eligible,
            Pathway::OinpInDemandSkills => self.oinp_in_demand_skills_eligible,
            Pathway::OinpSkilledTrades => self.oinp_skilled_trades_eligible,
            Pathway::BcpnpHealth => self.bcpnp_health_eligible,
            Pathway::BcpnpTech => self.bcpnp_tech_eligible,
            Pathway::BcpnpConstruction => self.bcpnp_construction_eligible,
            Pathway::BcpnpVet => self.bcpnp_vet_eligible,
            Pathway::BcpnpChildcare => self.bcpnp_childcare_eligible,
        };
        flag.unwrap_or(false)
    }

    /// Federal region membership is keyed off CEC/FSW only, not the whole
    /// Express Entry family. Long-standing observable behavior; keep it.
    fn federal_eligible(&self) -> bool {
        self.ee_cec_eligible.unwrap_or(false) || self.ee_fsw_eligible.unwrap_or(false)
    }

    /// Any Ontario nominee stream applies.
    fn ontario_eligible(&self) -> bool {
        self.oinp_health_eligible.unwrap_or(false)
            || self.oinp_tech_eligible.unwrap_or(false)
            || self.oinp_in_demand_skills_eligible.unwrap_or(false)
            || self.oinp_skilled_trades_eligible.unwrap_or(false)
            || self.oinp_foreign_worker_eligible.unwrap_or(false)
            || self.oinp_international_student_eligible.unwrap_or(false)
    }

    /// Any British Columbia nominee stream applies.
    fn bc_eligible(&self) -> bool {
        self.bcpnp_construction_eligible.unwrap_or(false)
            || self.bcpnp_health_eligible.unwrap_or(false)
            || self.bcpnp_tech_eligible.unwrap_or(false)
            || self.bcpnp_vet_eligible.unwrap_or(false)
            || self.bcpnp_childcare_eligible.unwrap_or(false)
            || self.bcpnp_skilled_worker_eligible.unwrap_or(false)
            || self.bcpnp_international_students_eligible.unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// Derived profile
// ---------------------------------------------------------------------------

/// A NOC record normalized and augmented with its eligibility profile.
///
/// Recomputed on every read, never persisted. All boolean and count fields
/// are concrete; nothing nullable leaks to consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NocProfile {
    pub noc_code: NocCode,
    pub class_title: String,
    pub element_type_label: Option<String>,
    pub element_description: Option<String>,
    pub teer_category: i16,
    pub skill_level_description: String,
    pub total_eligibility_count: i32,
    pub ee_priority_score: i32,
    pub provincial_opportunities_count: i32,
    /// Labeled pathways in the fixed display order.
    pub best_pathways: Vec<String>,
    /// Jurisdictions with at least one applicable stream.
    pub available_regions: Vec<String>,
    // Express Entry streams
    pub ee_health_eligible: bool,
    pub ee_cec_eligible: bool,
    pub ee_fsw_eligible: bool,
    pub ee_agriculture_eligible: bool,
    pub ee_stem_eligible: bool,
    pub ee_education_eligible: bool,
    pub ee_trade_eligible: bool,
    pub ee_trade_program_eligible: bool,
    // Ontario (OINP) streams
    pub oinp_health_eligible: bool,
    pub oinp_tech_eligible: bool,
    pub oinp_in_demand_skills_eligible: bool,
    pub oinp_skilled_trades_eligible: bool,
    pub oinp_foreign_worker_eligible: bool,
    pub oinp_international_student_eligible: bool,
    // British Columbia (BCPNP) streams
    pub bcpnp_construction_eligible: bool,
    pub bcpnp_health_eligible: bool,
    pub bcpnp_tech_eligible: bool,
    pub bcpnp_vet_eligible: bool,
    pub bcpnp_childcare_eligible: bool,
    pub bcpnp_skilled_worker_eligible: bool,
    pub bcpnp_international_students_eligible: bool,
    // Other programs
    pub sowp_c41_eligible: bool,
    pub cusma_professional_eligible: bool,
    pub cec_clb_required: String,
}

impl NocProfile {
    /// Derive the eligibility profile for a record.
    ///
    /// Pure: the record is not mutated and equal inputs yield equal
    /// profiles. Pathway order is keyed by flag identity via
    /// [`PATHWAY_ORDER`], never by the order flags were set.
    pub fn from_record(record: &NocRecord) -> Self {
        let best_pathways = PATHWAY_ORDER
            .iter()
            .filter(|&&pathway| record.pathway_eligible(pathway))
            .map(|pathway| pathway.label().to_string())
            .collect();

        let mut available_regions = Vec::new();
        if record.federal_eligible() {
            available_regions.push(Region::Federal.label().to_string());
        }
        if record.ontario_eligible() {
            available_regions.push(Region::Ontario.label().to_string());
        }
        if record.bc_eligible() {
            available_regions.push(Region::BritishColumbia.label().to_string());
        }

        NocProfile {
            noc_code: record.noc_code,
            class_title: record.class_title.clone(),
            element_type_label: record.element_type_label.clone(),
            element_description: record.element_description.clone(),
            teer_category: record.teer_category,
            skill_level_description: skill_level_description(record.teer_category).to_string(),
            total_eligibility_count: record.total_eligibility_count.unwrap_or(0),
            ee_priority_score: record.ee_priority_score.unwrap_or(0),
            provincial_opportunities_count: record.provincial_opportunities_count.unwrap_or(0),
            best_pathways,
            available_regions,
            ee_health_eligible: record.ee_health_eligible.unwrap_or(false),
            ee_cec_eligible: record.ee_cec_eligible.unwrap_or(false),
            ee_fsw_eligible: record.ee_fsw_eligible.unwrap_or(false),
            ee_agriculture_eligible: record.ee_agriculture_eligible.unwrap_or(false),
            ee_stem_eligible: record.ee_stem_eligible.unwrap_or(false),
            ee_education_eligible: record.ee_education_eligible.unwrap_or(false),
            ee_trade_eligible: record.ee_trade_eligible.unwrap_or(false),
            ee_trade_program_eligible: record.ee_trade_program_eligible.unwrap_or(false),
            oinp_health_eligible: record.oinp_health_eligible.unwrap_or(false),
            oinp_tech_eligible: record.oinp_tech_eligible.unwrap_or(false),
            oinp_in_demand_skills_eligible: record.oinp_in_demand_skills_eligible.unwrap_or(false),
            oinp_skilled_trades_eligible: record.oinp_skilled_trades_eligible.unwrap_or(false),
            oinp_foreign_worker_eligible: record.oinp_foreign_worker_eligible.unwrap_or(false),
            oinp_international_student_eligible: record
                .oinp_international_student_eligible
                .unwrap_or(false),
            bcpnp_construction_eligible: record.bcpnp_construction_eligible.unwrap_or(false),
            bcpnp_health_eligible: record.bcpnp_health_eligible.unwrap_or(false),
            bcpnp_tech_eligible: record.bcpnp_tech_eligible.unwrap_or(false),
            bcpnp_vet_eligible: record.bcpnp_vet_eligible.unwrap_or(false),
            bcpnp_childcare_eligible: record.bcpnp_childcare_eligible.unwrap_or(false),
            bcpnp_skilled_worker_eligible: record.bcpnp_skilled_worker_eligible.unwrap_or(false),
            bcpnp_international_students_eligible: record
                .bcpnp_international_students_eligible
                .unwrap_or(false),
            sowp_c41_eligible: record.sowp_c41_eligible.unwrap_or(false),
            cusma_professional_eligible: record.cusma_professional_eligible.unwrap_or(false),
            cec_clb_required: record
                .cec_clb_required
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// One page of search results with pagination metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NocSearchResponse {
    pub results: Vec<NocProfile>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

/// Minimal projection backing autocomplete suggestions.
#[derive(Debug, Clone, FromRow)]
pub struct NocSuggestion {
    pub noc_code: NocCode,
    pub class_title: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn base_record(code: NocCode, title: &str, teer: i16) -> NocRecord {
        NocRecord {
            noc_code: code,
            class_title: title.to_string(),
            element_type_label: None,
            element_description: None,
            teer_category: teer,
            total_eligibility_count: None,
            ee_priority_score: None,
            provincial_opportunities_count: None,
            ee_health_eligible: None,
            ee_cec_eligible: None,
            ee_fsw_eligible: None,
            ee_agriculture_eligible: None,
            ee_stem_eligible: None,
            ee_education_eligible: None,
            ee_trade_eligible: None,
            ee_trade_program_eligible: None,
            oinp_health_eligible: None,
            oinp_tech_eligible: None,
            oinp_in_demand_skills_eligible: None,
            oinp_skilled_trades_eligible: None,
            oinp_foreign_worker_eligible: None,
            oinp_international_student_eligible: None,
            bcpnp_construction_eligible: None,
            bcpnp_health_eligible: None,
            bcpnp_tech_eligible: None,
            bcpnp_vet_eligible: None,
            bcpnp_childcare_eligible: None,
            bcpnp_skilled_worker_eligible: None,
            bcpnp_international_students_eligible: None,
            sowp_c41_eligible: None,
            cusma_professional_eligible: None,
            cec_clb_required: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn derivation_is_pure_and_idempotent() {
        let mut record = base_record(21234, "Software engineer", 1);
        record.ee_stem_eligible = Some(true);
        record.ee_cec_eligible = Some(true);
        record.ee_priority_score = Some(35);

        let first = NocProfile::from_record(&record);
        let second = NocProfile::from_record(&record);
        assert_eq!(first, second);
    }

    #[test]
    fn null_fields_normalize_to_defined_defaults() {
        let profile = NocProfile::from_record(&base_record(1, "Test occupation", 3));

        assert_eq!(profile.total_eligibility_count, 0);
        assert_eq!(profile.ee_priority_score, 0);
        assert_eq!(profile.provincial_opportunities_count, 0);
        assert!(!profile.ee_health_eligible);
        assert!(!profile.bcpnp_international_students_eligible);
        assert!(!profile.sowp_c41_eligible);
        assert_eq!(profile.cec_clb_required, "N/A");
        assert!(profile.best_pathways.is_empty());
        assert!(profile.available_regions.is_empty());
    }

    #[test]
    fn pathway_order_is_keyed_by_flag_identity() {
        // Flags assigned "backwards" relative to display order.
        let mut record = base_record(2, "Order check", 2);
        record.bcpnp_childcare_eligible = Some(true);
        record.oinp_skilled_trades_eligible = Some(true);
        record.ee_health_eligible = Some(true);

        let profile = NocProfile::from_record(&record);
        assert_eq!(
            profile.best_pathways,
            vec![
                "EE-Healthcare (Priority)",
                "OINP-Skilled Trades (Ontario)",
                "BCPNP-Childcare (BC)",
            ]
        );
    }

    #[test]
    fn federal_region_requires_cec_or_fsw() {
        // Every labeled federal stream set, but neither CEC nor FSW.
        let mut record = base_record(3, "Federal check", 1);
        record.ee_health_eligible = Some(true);
        record.ee_stem_eligible = Some(true);
        record.ee_education_eligible = Some(true);
        record.ee_agriculture_eligible = Some(true);
        record.ee_trade_eligible = Some(true);
        record.ee_trade_program_eligible = Some(true);

        let profile = NocProfile::from_record(&record);
        assert!(!profile.available_regions.contains(&"Federal".to_string()));

        record.ee_fsw_eligible = Some(true);
        let profile = NocProfile::from_record(&record);
        assert!(profile.available_regions.contains(&"Federal".to_string()));
    }

    #[test]
    fn unlabeled_streams_still_grant_region_membership() {
        let mut record = base_record(4, "Region check", 4);
        record.oinp_foreign_worker_eligible = Some(true);
        record.bcpnp_skilled_worker_eligible = Some(true);

        let profile = NocProfile::from_record(&record);
        assert!(profile.best_pathways.is_empty());
        assert_eq!(
            profile.available_regions,
            vec!["Ontario", "British Columbia"]
        );
    }

    #[test]
    fn software_engineer_profile() {
        let mut record = base_record(21234, "Software engineer", 1);
        record.ee_priority_score = Some(35);
        record.total_eligibility_count = Some(4);
        record.ee_stem_eligible = Some(true);
        record.ee_cec_eligible = Some(true);
        record.oinp_tech_eligible = Some(true);

        let profile = NocProfile::from_record(&record);
        assert_eq!(profile.skill_level_description, "Professional Level");
        assert_eq!(profile.available_regions, vec!["Federal", "Ontario"]);
        assert_eq!(
            profile.best_pathways,
            vec!["EE-STEM (High Priority)", "OINP-Tech (Ontario)"]
        );
    }
}
