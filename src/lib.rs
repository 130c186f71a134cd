//! Property Costs - purchase cost engine for Australian residential
//! property
//!
//! This library provides:
//! - Transfer (stamp) duty across all eight state/territory schedules
//! - Concession and grant eligibility with machine-readable reasons
//! - Foreign purchaser surcharge duty
//! - Loan serviceability: repayments, LVR and LMI premiums
//! - Upfront and ongoing cost aggregation
//!
//! Every calculation is a pure function of an immutable scenario
//! snapshot; rate tables are versioned static configuration compiled
//! into the crate.

pub mod costs;
pub mod duty;
pub mod eligibility;
pub mod loan;
pub mod profile;

// Re-export the flat calculation surface
pub use costs::{calculate_costs, calculate_upfront_costs, CostSummary, LoanSummary};
pub use duty::{
    calculate_stamp_duty, first_home_grant, first_home_grant_amount, foreign_buyer_duty,
    foreign_surcharge_rate, land_transfer_fee, stamp_duty, tables_effective,
};
pub use eligibility::{resolve_concessions, ConcessionResolution, EligibilityOutcome};
pub use loan::{lmi_premium, lvr, monthly_repayment, total_interest, total_repayments};
pub use profile::{
    BuyerProfile, BuyerType, Jurisdiction, LoanTerms, PropertyCategory, PropertyProfile,
    PropertyType, RepaymentType, Residency, Scenario,
};
