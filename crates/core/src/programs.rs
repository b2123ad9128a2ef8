//! Closed program-selector tables.
//!
//! The backing table keys every eligibility stream off a dedicated boolean
//! column. Request selectors used to be matched as raw strings; here each
//! selector set is a closed enum so the flag-column mapping is exhaustive
//! at compile time. Unknown tokens still fall through silently (`parse`
//! returns `None`): a selector nobody recognizes filters nothing, it does
//! not error.

// ---------------------------------------------------------------------------
// Federal (Express Entry) category selector
// ---------------------------------------------------------------------------

/// Express Entry category filter accepted by the multi-criteria search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FederalProgram {
    Health,
    Stem,
    Education,
    Agriculture,
    Trade,
    TradeProgram,
}

impl FederalProgram {
    /// Parse a search-request token. Matching is exact and case-sensitive,
    /// as the search contract has always been.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "health" => Some(Self::Health),
            "stem" => Some(Self::Stem),
            "education" => Some(Self::Education),
            "agriculture" => Some(Self::Agriculture),
            "trade" => Some(Self::Trade),
            "trade_program" => Some(Self::TradeProgram),
            _ => None,
        }
    }

    /// The single flag column this selector filters on.
    pub fn column(self) -> &'static str {
        match self {
            Self::Health => "ee_health_eligible",
            Self::Stem => "ee_stem_eligible",
            Self::Education => "ee_education_eligible",
            Self::Agriculture => "ee_agriculture_eligible",
            Self::Trade => "ee_trade_eligible",
            Self::TradeProgram => "ee_trade_program_eligible",
        }
    }
}

// ---------------------------------------------------------------------------
// Provincial group selector
// ---------------------------------------------------------------------------

/// The six Ontario (OINP) stream flags, in filter order.
pub const ONTARIO_FLAG_COLUMNS: &[&str] = &[
    "oinp_health_eligible",
    "oinp_tech_eligible",
    "oinp_in_demand_skills_eligible",
    "oinp_skilled_trades_eligible",
    "oinp_foreign_worker_eligible",
    "oinp_international_student_eligible",
];

/// The seven British Columbia (BCPNP) stream flags, in filter order.
pub const BC_FLAG_COLUMNS: &[&str] = &[
    "bcpnp_construction_eligible",
    "bcpnp_health_eligible",
    "bcpnp_tech_eligible",
    "bcpnp_vet_eligible",
    "bcpnp_childcare_eligible",
    "bcpnp_skilled_worker_eligible",
    "bcpnp_international_students_eligible",
];

/// Provincial program group: a record qualifies when ANY stream in the
/// group applies (OR, never AND).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvincialGroup {
    Ontario,
    Bc,
}

impl ProvincialGroup {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "ontario" => Some(Self::Ontario),
            "bc" => Some(Self::Bc),
            _ => None,
        }
    }

    /// Flag columns OR-ed together for this jurisdiction.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Ontario => ONTARIO_FLAG_COLUMNS,
            Self::Bc => BC_FLAG_COLUMNS,
        }
    }
}

// ---------------------------------------------------------------------------
// Named program streams (single-program listing)
// ---------------------------------------------------------------------------

/// Program streams addressable by the single-program listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramStream {
    EeHealth,
    EeStem,
    EeEducation,
    EeAgriculture,
    EeTrade,
    EeTradeProgram,
    OinpHealth,
    OinpTech,
    BcpnpHealth,
    BcpnpTech,
}

impl ProgramStream {
    /// Parse a program name, case-insensitively. Unknown names yield
    /// `None`; the caller answers with an empty listing rather than an
    /// error.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ee-health" => Some(Self::EeHealth),
            "ee-stem" => Some(Self::EeStem),
            "ee-education" => Some(Self::EeEducation),
            "ee-agriculture" => Some(Self::EeAgriculture),
            "ee-trade" => Some(Self::EeTrade),
            "ee-trade-program" => Some(Self::EeTradeProgram),
            "oinp-health" => Some(Self::OinpHealth),
            "oinp-tech" => Some(Self::OinpTech),
            "bcpnp-health" => Some(Self::BcpnpHealth),
            "bcpnp-tech" => Some(Self::BcpnpTech),
            _ => None,
        }
    }

    /// The single flag column this stream filters on.
    pub fn column(self) -> &'static str {
        match self {
            Self::EeHealth => "ee_health_eligible",
            Self::EeStem => "ee_stem_eligible",
            Self::EeEducation => "ee_education_eligible",
            Self::EeAgriculture => "ee_agriculture_eligible",
            Self::EeTrade => "ee_trade_eligible",
            Self::EeTradeProgram => "ee_trade_program_eligible",
            Self::OinpHealth => "oinp_health_eligible",
            Self::OinpTech => "oinp_tech_eligible",
            Self::BcpnpHealth => "bcpnp_health_eligible",
            Self::BcpnpTech => "bcpnp_tech_eligible",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- FederalProgram ------------------------------------------------------

    #[test]
    fn federal_tokens_map_to_their_columns() {
        let cases = [
            ("health", "ee_health_eligible"),
            ("stem", "ee_stem_eligible"),
            ("education", "ee_education_eligible"),
            ("agriculture", "ee_agriculture_eligible"),
            ("trade", "ee_trade_eligible"),
            ("trade_program", "ee_trade_program_eligible"),
        ];
        for (token, column) in cases {
            assert_eq!(FederalProgram::parse(token).unwrap().column(), column);
        }
    }

    #[test]
    fn federal_parse_is_case_sensitive_and_rejects_unknowns() {
        assert_eq!(FederalProgram::parse("HEALTH"), None);
        assert_eq!(FederalProgram::parse("tech"), None);
        assert_eq!(FederalProgram::parse(""), None);
    }

    // -- ProvincialGroup -----------------------------------------------------

    #[test]
    fn provincial_groups_cover_every_stream_flag() {
        let ontario = ProvincialGroup::parse("ontario").unwrap();
        assert_eq!(ontario.columns().len(), 6);
        assert!(ontario.columns().contains(&"oinp_foreign_worker_eligible"));

        let bc = ProvincialGroup::parse("bc").unwrap();
        assert_eq!(bc.columns().len(), 7);
        assert!(bc.columns().contains(&"bcpnp_international_students_eligible"));
    }

    #[test]
    fn provincial_parse_rejects_unknowns() {
        assert_eq!(ProvincialGroup::parse("alberta"), None);
        assert_eq!(ProvincialGroup::parse("Ontario"), None);
    }

    // -- ProgramStream -------------------------------------------------------

    #[test]
    fn program_stream_parse_is_case_insensitive() {
        assert_eq!(
            ProgramStream::parse("EE-Health"),
            Some(ProgramStream::EeHealth)
        );
        assert_eq!(
            ProgramStream::parse("BCPNP-TECH"),
            Some(ProgramStream::BcpnpTech)
        );
    }

    #[test]
    fn program_stream_maps_all_ten_names() {
        let cases = [
            ("ee-health", "ee_health_eligible"),
            ("ee-stem", "ee_stem_eligible"),
            ("ee-education", "ee_education_eligible"),
            ("ee-agriculture", "ee_agriculture_eligible"),
            ("ee-trade", "ee_trade_eligible"),
            ("ee-trade-program", "ee_trade_program_eligible"),
            ("oinp-health", "oinp_health_eligible"),
            ("oinp-tech", "oinp_tech_eligible"),
            ("bcpnp-health", "bcpnp_health_eligible"),
            ("bcpnp-tech", "bcpnp_tech_eligible"),
        ];
        for (name, column) in cases {
            assert_eq!(ProgramStream::parse(name).unwrap().column(), column);
        }
    }

    #[test]
    fn program_stream_rejects_unknown_names() {
        assert_eq!(ProgramStream::parse("oinp-skilled-trades"), None);
        assert_eq!(ProgramStream::parse("ee_health"), None);
        assert_eq!(ProgramStream::parse(""), None);
    }
}
