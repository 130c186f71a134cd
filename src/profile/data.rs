//! Buyer, property and loan profiles supplied to the engine
//!
//! Every calculation receives a fully-formed immutable snapshot of these
//! types; the engine never reads shared state and never mutates an input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Australian state/territory jurisdictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Jurisdiction {
    Nsw,
    Vic,
    Qld,
    Sa,
    Wa,
    Tas,
    Nt,
    Act,
}

impl Jurisdiction {
    /// All eight jurisdictions in conventional order
    pub const ALL: [Jurisdiction; 8] = [
        Jurisdiction::Nsw,
        Jurisdiction::Vic,
        Jurisdiction::Qld,
        Jurisdiction::Sa,
        Jurisdiction::Wa,
        Jurisdiction::Tas,
        Jurisdiction::Nt,
        Jurisdiction::Act,
    ];

    /// Uppercase state code
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Nsw => "NSW",
            Jurisdiction::Vic => "VIC",
            Jurisdiction::Qld => "QLD",
            Jurisdiction::Sa => "SA",
            Jurisdiction::Wa => "WA",
            Jurisdiction::Tas => "TAS",
            Jurisdiction::Nt => "NT",
            Jurisdiction::Act => "ACT",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An unrecognized jurisdiction code is a boundary error, never a silent
/// fallback to another state's rates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized jurisdiction code: {0:?}")]
pub struct JurisdictionParseError(pub String);

impl FromStr for Jurisdiction {
    type Err = JurisdictionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NSW" => Ok(Jurisdiction::Nsw),
            "VIC" => Ok(Jurisdiction::Vic),
            "QLD" => Ok(Jurisdiction::Qld),
            "SA" => Ok(Jurisdiction::Sa),
            "WA" => Ok(Jurisdiction::Wa),
            "TAS" => Ok(Jurisdiction::Tas),
            "NT" => Ok(Jurisdiction::Nt),
            "ACT" => Ok(Jurisdiction::Act),
            _ => Err(JurisdictionParseError(s.to_string())),
        }
    }
}

/// Physical property category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    #[default]
    House,
    Apartment,
    Townhouse,
    Land,
}

/// Build status of the property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    Existing,
    NewBuild,
    OffThePlan,
    HouseAndLand,
}

/// WA region relative to the 26th parallel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WaRegion {
    #[default]
    South,
    North,
}

/// WA metropolitan zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WaZone {
    #[default]
    Metro,
    NonMetro,
}

/// The property being purchased
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyProfile {
    /// Contract price in whole dollars
    pub price: f64,

    pub jurisdiction: Jurisdiction,

    #[serde(default)]
    pub category: PropertyCategory,

    #[serde(default)]
    pub property_type: PropertyType,

    /// WA only: north or south of the 26th parallel
    #[serde(default)]
    pub wa_region: WaRegion,

    /// WA only: metropolitan or non-metropolitan
    #[serde(default)]
    pub wa_zone: WaZone,

    /// Regional property flag (drives the TAS regional concession)
    #[serde(default)]
    pub regional: bool,

    /// QLD only: the vacant land concession must be explicitly claimed
    #[serde(default)]
    pub claim_vacant_land_concession: bool,

    /// Estimated build cost, vacant land purchases only
    #[serde(default)]
    pub build_cost: Option<f64>,
}

impl PropertyProfile {
    /// Minimal profile used by the simplified legacy calculation paths
    pub fn simple(price: f64, jurisdiction: Jurisdiction) -> Self {
        Self {
            price,
            jurisdiction,
            category: PropertyCategory::House,
            property_type: PropertyType::Existing,
            wa_region: WaRegion::South,
            wa_zone: WaZone::Metro,
            regional: false,
            claim_vacant_land_concession: false,
            build_cost: None,
        }
    }

    pub fn is_land(&self) -> bool {
        self.category == PropertyCategory::Land
    }

    /// New builds and off-the-plan purchases qualify for new-home treatment
    pub fn is_new_home(&self) -> bool {
        matches!(
            self.property_type,
            PropertyType::NewBuild | PropertyType::OffThePlan | PropertyType::HouseAndLand
        )
    }

    /// Strata-titled categories attract body corporate fees
    pub fn has_body_corporate(&self) -> bool {
        matches!(
            self.category,
            PropertyCategory::Apartment | PropertyCategory::Townhouse
        )
    }
}

/// Owner-occupier or investment purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BuyerType {
    #[default]
    OwnerOccupier,
    Investor,
}

/// Residency status for foreign-buyer surcharge purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Residency {
    #[default]
    Resident,
    Foreign,
}

/// The purchaser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyerProfile {
    #[serde(default)]
    pub buyer_type: BuyerType,

    /// Will the buyer live in the property as their principal place of
    /// residence
    #[serde(default)]
    pub principal_residence: bool,

    #[serde(default)]
    pub residency: Residency,

    #[serde(default)]
    pub first_home_buyer: bool,

    /// TAS pensioner duty concession flag
    #[serde(default)]
    pub pensioner: bool,

    /// TAS senior duty concession flag
    #[serde(default)]
    pub senior: bool,

    #[serde(default)]
    pub needs_loan: bool,
}

impl BuyerProfile {
    /// Resident owner-occupier, not a first home buyer
    pub fn owner_occupier() -> Self {
        Self {
            buyer_type: BuyerType::OwnerOccupier,
            principal_residence: true,
            residency: Residency::Resident,
            first_home_buyer: false,
            pensioner: false,
            senior: false,
            needs_loan: false,
        }
    }

    /// Resident first home buyer moving in
    pub fn first_home_buyer() -> Self {
        Self {
            first_home_buyer: true,
            ..Self::owner_occupier()
        }
    }

    pub fn is_foreign(&self) -> bool {
        self.residency == Residency::Foreign
    }

    pub fn is_investor(&self) -> bool {
        self.buyer_type == BuyerType::Investor
    }
}

/// Repayment structure of the modelled loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RepaymentType {
    PrincipalAndInterest,
    /// Interest-only for the first `years`, amortizing afterwards.
    /// When `years` covers the whole term the loan is interest-only for
    /// its life.
    InterestOnly { years: u32 },
}

impl Default for RepaymentType {
    fn default() -> Self {
        RepaymentType::PrincipalAndInterest
    }
}

/// Terms of the loan being modelled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Cash deposit in dollars
    pub deposit: f64,

    /// Annual interest rate as a percentage (expected range 0.01-20)
    pub annual_rate_pct: f64,

    /// Loan term in years (expected range 1-30)
    pub term_years: u32,

    #[serde(default)]
    pub repayment: RepaymentType,

    /// Capitalize the LMI premium into the loan
    #[serde(default)]
    pub include_lmi: bool,

    #[serde(default = "default_settlement_fee")]
    pub settlement_fee: f64,

    #[serde(default = "default_establishment_fee")]
    pub establishment_fee: f64,
}

fn default_settlement_fee() -> f64 {
    crate::costs::DEFAULT_SETTLEMENT_FEE
}

fn default_establishment_fee() -> f64 {
    crate::costs::DEFAULT_ESTABLISHMENT_FEE
}

impl LoanTerms {
    /// Standard principal-and-interest terms
    pub fn standard(deposit: f64, annual_rate_pct: f64, term_years: u32) -> Self {
        Self {
            deposit,
            annual_rate_pct,
            term_years,
            repayment: RepaymentType::PrincipalAndInterest,
            include_lmi: false,
            settlement_fee: default_settlement_fee(),
            establishment_fee: default_establishment_fee(),
        }
    }
}

/// Editable conveyancing-side fee lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpfrontFees {
    #[serde(default = "default_legal_fees")]
    pub legal_fees: f64,

    #[serde(default = "default_inspection_fees")]
    pub inspection_fees: f64,
}

fn default_legal_fees() -> f64 {
    crate::costs::DEFAULT_LEGAL_FEES
}

fn default_inspection_fees() -> f64 {
    crate::costs::DEFAULT_INSPECTION_FEES
}

impl Default for UpfrontFees {
    fn default() -> Self {
        Self {
            legal_fees: default_legal_fees(),
            inspection_fees: default_inspection_fees(),
        }
    }
}

/// Annual holding costs, pro-rated to monthly by the aggregator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OngoingFees {
    #[serde(default = "default_council_rates")]
    pub council_rates: f64,

    #[serde(default = "default_water_rates")]
    pub water_rates: f64,

    /// Applied only to apartments and townhouses
    #[serde(default)]
    pub body_corporate: f64,

    /// Applied only to investment purchases
    #[serde(default)]
    pub land_tax: f64,
}

fn default_council_rates() -> f64 {
    crate::costs::DEFAULT_COUNCIL_RATES
}

fn default_water_rates() -> f64 {
    crate::costs::DEFAULT_WATER_RATES
}

impl Default for OngoingFees {
    fn default() -> Self {
        Self {
            council_rates: default_council_rates(),
            water_rates: default_water_rates(),
            body_corporate: 0.0,
            land_tax: 0.0,
        }
    }
}

/// One complete calculation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub buyer: BuyerProfile,
    pub property: PropertyProfile,

    #[serde(default)]
    pub loan: Option<LoanTerms>,

    #[serde(default)]
    pub upfront_fees: UpfrontFees,

    #[serde(default)]
    pub ongoing_fees: OngoingFees,
}

impl Scenario {
    /// Cash purchase with default fee lines
    pub fn cash(buyer: BuyerProfile, property: PropertyProfile) -> Self {
        Self {
            buyer,
            property,
            loan: None,
            upfront_fees: UpfrontFees::default(),
            ongoing_fees: OngoingFees::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jurisdiction_parse() {
        assert_eq!("nsw".parse::<Jurisdiction>().unwrap(), Jurisdiction::Nsw);
        assert_eq!(" ACT ".parse::<Jurisdiction>().unwrap(), Jurisdiction::Act);
        assert_eq!(
            "XYZ".parse::<Jurisdiction>(),
            Err(JurisdictionParseError("XYZ".to_string()))
        );
        assert_eq!(Jurisdiction::ALL.len(), 8);
    }

    #[test]
    fn test_jurisdiction_roundtrip_codes() {
        for j in Jurisdiction::ALL {
            assert_eq!(j.code().parse::<Jurisdiction>().unwrap(), j);
        }
    }

    #[test]
    fn test_new_home_classification() {
        let mut property = PropertyProfile::simple(500_000.0, Jurisdiction::Qld);
        assert!(!property.is_new_home());

        property.property_type = PropertyType::OffThePlan;
        assert!(property.is_new_home());

        property.category = PropertyCategory::Apartment;
        assert!(property.has_body_corporate());
    }

    #[test]
    fn test_scenario_json_roundtrip() {
        let scenario = Scenario {
            buyer: BuyerProfile::first_home_buyer(),
            property: PropertyProfile::simple(650_000.0, Jurisdiction::Vic),
            loan: Some(LoanTerms::standard(130_000.0, 6.0, 30)),
            upfront_fees: UpfrontFees::default(),
            ongoing_fees: OngoingFees::default(),
        };

        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back.property.jurisdiction, Jurisdiction::Vic);
        assert_eq!(back.loan.unwrap().term_years, 30);
    }

    #[test]
    fn test_loan_terms_defaults_from_json() {
        let json = r#"{"deposit": 50000, "annual_rate_pct": 5.5, "term_years": 25}"#;
        let terms: LoanTerms = serde_json::from_str(json).unwrap();
        assert_eq!(terms.repayment, RepaymentType::PrincipalAndInterest);
        assert!(!terms.include_lmi);
        assert_eq!(terms.settlement_fee, crate::costs::DEFAULT_SETTLEMENT_FEE);
    }
}
