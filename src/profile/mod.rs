//! Input profiles, scenario loading and grid generation

mod data;
pub mod generator;
pub mod loader;

pub use data::{
    BuyerProfile, BuyerType, Jurisdiction, JurisdictionParseError, LoanTerms, OngoingFees,
    PropertyCategory, PropertyProfile, PropertyType, RepaymentType, Residency, Scenario,
    UpfrontFees, WaRegion, WaZone,
};
pub use generator::{generate_grid, GridParams};
pub use loader::{load_scenarios, load_scenarios_from_reader, ScenarioLoadError};
