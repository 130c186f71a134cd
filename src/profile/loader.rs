//! Scenario loading from CSV
//!
//! One row per scenario. The jurisdiction code must parse; descriptive
//! columns are lenient, falling back to defaults with a warning, and a
//! loan is modelled only when deposit, rate and term are all present.

use super::data::{
    BuyerProfile, BuyerType, Jurisdiction, JurisdictionParseError, LoanTerms, OngoingFees,
    PropertyCategory, PropertyProfile, PropertyType, RepaymentType, Residency, Scenario,
    UpfrontFees, WaRegion, WaZone,
};
use log::warn;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised at the scenario input boundary
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scenario row: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Jurisdiction(#[from] JurisdictionParseError),
}

/// Raw CSV row; empty cells deserialize as absent
#[derive(Debug, Deserialize)]
struct ScenarioRow {
    state: String,
    price: f64,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    property_type: Option<String>,
    #[serde(default)]
    buyer_type: Option<String>,
    #[serde(default)]
    principal_residence: Option<bool>,
    #[serde(default)]
    residency: Option<String>,
    #[serde(default)]
    first_home_buyer: Option<bool>,
    #[serde(default)]
    pensioner: Option<bool>,
    #[serde(default)]
    senior: Option<bool>,
    #[serde(default)]
    regional: Option<bool>,
    #[serde(default)]
    wa_region: Option<String>,
    #[serde(default)]
    wa_zone: Option<String>,
    #[serde(default)]
    vacant_land_concession: Option<bool>,
    #[serde(default)]
    build_cost: Option<f64>,
    #[serde(default)]
    deposit: Option<f64>,
    #[serde(default)]
    annual_rate_pct: Option<f64>,
    #[serde(default)]
    term_years: Option<u32>,
    #[serde(default)]
    interest_only_years: Option<u32>,
    #[serde(default)]
    include_lmi: Option<bool>,
}

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (used by tests with in-memory CSV)
pub fn load_scenarios_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: ScenarioRow = result?;
        scenarios.push(scenario_from_row(row)?);
    }

    Ok(scenarios)
}

fn scenario_from_row(row: ScenarioRow) -> Result<Scenario, ScenarioLoadError> {
    let jurisdiction: Jurisdiction = row.state.parse()?;

    let property = PropertyProfile {
        price: row.price,
        jurisdiction,
        category: row.category.as_deref().map(parse_category).unwrap_or_default(),
        property_type: row
            .property_type
            .as_deref()
            .map(parse_property_type)
            .unwrap_or_default(),
        wa_region: row.wa_region.as_deref().map(parse_wa_region).unwrap_or_default(),
        wa_zone: row.wa_zone.as_deref().map(parse_wa_zone).unwrap_or_default(),
        regional: row.regional.unwrap_or(false),
        claim_vacant_land_concession: row.vacant_land_concession.unwrap_or(false),
        build_cost: row.build_cost,
    };

    let loan = match (row.deposit, row.annual_rate_pct, row.term_years) {
        (Some(deposit), Some(rate), Some(term)) => {
            let repayment = match row.interest_only_years {
                Some(years) if years > 0 => RepaymentType::InterestOnly { years },
                _ => RepaymentType::PrincipalAndInterest,
            };
            let mut terms = LoanTerms::standard(deposit, rate, term);
            terms.repayment = repayment;
            terms.include_lmi = row.include_lmi.unwrap_or(false);
            Some(terms)
        }
        _ => None,
    };

    let buyer = BuyerProfile {
        buyer_type: row.buyer_type.as_deref().map(parse_buyer_type).unwrap_or_default(),
        principal_residence: row.principal_residence.unwrap_or(true),
        residency: row.residency.as_deref().map(parse_residency).unwrap_or_default(),
        first_home_buyer: row.first_home_buyer.unwrap_or(false),
        pensioner: row.pensioner.unwrap_or(false),
        senior: row.senior.unwrap_or(false),
        needs_loan: loan.is_some(),
    };

    Ok(Scenario {
        buyer,
        property,
        loan,
        upfront_fees: UpfrontFees::default(),
        ongoing_fees: OngoingFees::default(),
    })
}

fn parse_category(s: &str) -> PropertyCategory {
    match s.trim().to_ascii_lowercase().as_str() {
        "house" | "" => PropertyCategory::House,
        "apartment" | "unit" => PropertyCategory::Apartment,
        "townhouse" => PropertyCategory::Townhouse,
        "land" | "vacant_land" => PropertyCategory::Land,
        other => {
            warn!("unknown property category {:?}, defaulting to house", other);
            PropertyCategory::House
        }
    }
}

fn parse_property_type(s: &str) -> PropertyType {
    match s.trim().to_ascii_lowercase().as_str() {
        "existing" | "established" | "" => PropertyType::Existing,
        "new" | "new_build" => PropertyType::NewBuild,
        "off_the_plan" | "off-the-plan" => PropertyType::OffThePlan,
        "house_and_land" => PropertyType::HouseAndLand,
        other => {
            warn!("unknown property type {:?}, defaulting to existing", other);
            PropertyType::Existing
        }
    }
}

fn parse_buyer_type(s: &str) -> BuyerType {
    match s.trim().to_ascii_lowercase().as_str() {
        "investor" => BuyerType::Investor,
        _ => BuyerType::OwnerOccupier,
    }
}

fn parse_residency(s: &str) -> Residency {
    match s.trim().to_ascii_lowercase().as_str() {
        "foreign" => Residency::Foreign,
        _ => Residency::Resident,
    }
}

fn parse_wa_region(s: &str) -> WaRegion {
    match s.trim().to_ascii_lowercase().as_str() {
        "north" => WaRegion::North,
        _ => WaRegion::South,
    }
}

fn parse_wa_zone(s: &str) -> WaZone {
    match s.trim().to_ascii_lowercase().as_str() {
        "non_metro" | "non-metro" => WaZone::NonMetro,
        _ => WaZone::Metro,
    }
}
