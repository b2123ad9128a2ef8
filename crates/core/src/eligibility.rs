//! Eligibility vocabulary: immigration pathways, jurisdictions, skill tiers.
//!
//! This module lives in `core` (zero internal deps) so the profile deriver
//! in the repository layer and any future CLI tooling share one vocabulary.
//! Pathway display order and label text are observable contracts (UI
//! consumers sort-stable on them), so both are fixed here and pinned by
//! tests.

// ---------------------------------------------------------------------------
// Pathways
// ---------------------------------------------------------------------------

/// A labeled immigration pathway derived from a single eligibility flag.
///
/// Variant order is the display order of a profile's `best_pathways`:
/// federal Express Entry streams first, then Ontario, then British
/// Columbia. The CEC/FSW flags and the provincial foreign-worker,
/// international-student and skilled-worker flags carry no pathway label;
/// they contribute to region membership only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pathway {
    EeHealth,
    EeStem,
    EeEducation,
    EeAgriculture,
    EeTrade,
    EeTradeProgram,
    OinpHealth,
    OinpTech,
    OinpInDemandSkills,
    OinpSkilledTrades,
    BcpnpHealth,
    BcpnpTech,
    BcpnpConstruction,
    BcpnpVet,
    BcpnpChildcare,
}

/// Every labeled pathway, in display order.
pub const PATHWAY_ORDER: [Pathway; 15] = [
    Pathway::EeHealth,
    Pathway::EeStem,
    Pathway::EeEducation,
    Pathway::EeAgriculture,
    Pathway::EeTrade,
    Pathway::EeTradeProgram,
    Pathway::OinpHealth,
    Pathway::OinpTech,
    Pathway::OinpInDemandSkills,
    Pathway::OinpSkilledTrades,
    Pathway::BcpnpHealth,
    Pathway::BcpnpTech,
    Pathway::BcpnpConstruction,
    Pathway::BcpnpVet,
    Pathway::BcpnpChildcare,
];

impl Pathway {
    /// Human-readable label with the priority-tier annotation baked in.
    pub fn label(self) -> &'static str {
        match self {
            Pathway::EeHealth => "EE-Healthcare (Priority)",
            Pathway::EeStem => "EE-STEM (High Priority)",
            Pathway::EeEducation => "EE-Education (Medium Priority)",
            Pathway::EeAgriculture => "EE-Agriculture (Medium Priority)",
            Pathway::EeTrade => "EE-Trade (High Priority)",
            Pathway::EeTradeProgram => "EE-Trade Program (High Priority)",
            Pathway::OinpHealth => "OINP-Health (Ontario)",
            Pathway::OinpTech => "OINP-Tech (Ontario)",
            Pathway::OinpInDemandSkills => "OINP-In-Demand Skills (Ontario)",
            Pathway::OinpSkilledTrades => "OINP-Skilled Trades (Ontario)",
            Pathway::BcpnpHealth => "BCPNP-Health (BC)",
            Pathway::BcpnpTech => "BCPNP-Tech (BC)",
            Pathway::BcpnpConstruction => "BCPNP-Construction (BC)",
            Pathway::BcpnpVet => "BCPNP-Veterinary (BC)",
            Pathway::BcpnpChildcare => "BCPNP-Childcare (BC)",
        }
    }
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// A jurisdiction whose selection programs may apply to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Federal,
    Ontario,
    BritishColumbia,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::Federal => "Federal",
            Region::Ontario => "Ontario",
            Region::BritishColumbia => "British Columbia",
        }
    }
}

// ---------------------------------------------------------------------------
// Skill levels
// ---------------------------------------------------------------------------

/// Map a TEER category to its human-readable skill level.
///
/// Categories outside 0..=5 fall through to "Unknown Level".
pub fn skill_level_description(teer_category: i16) -> &'static str {
    match teer_category {
        0 => "Management Level",
        1 => "Professional Level",
        2 => "Technical Level",
        3 => "Skilled Level",
        4 => "Semi-Skilled Level",
        5 => "Unskilled Level",
        _ => "Unknown Level",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
