//! Northern Territory transfer duty, first-home discount and grant
//!
//! NT duty is not bracket-linear below the formula ceiling: it follows a
//! quadratic in V = price / 1,000. Above the ceiling a flat percentage
//! of the entire value applies.

use crate::eligibility::{EligibilityOutcome, OutcomeDetails};
use crate::profile::{BuyerProfile, PropertyProfile};

/// Quadratic duty formula `D = COEFFICIENT * V^2 + LINEAR_TERM * V`,
/// V in thousands of dollars, for prices up to the ceiling
pub const QUAD_COEFFICIENT: f64 = 0.06571441;
pub const QUAD_LINEAR_TERM: f64 = 15.0;
pub const QUAD_CEILING: f64 = 525_000.0;

/// Flat percentage-of-value bands above the formula ceiling
pub static FLAT_BANDS: [(f64, f64); 3] = [
    (3_000_000.0, 0.0495),
    (5_000_000.0, 0.0575),
    (f64::INFINITY, 0.0595),
];

/// NT levies no foreign purchaser surcharge
pub const FOREIGN_SURCHARGE_RATE: f64 = 0.0;

/// First-home discount waives duty on the first $500,000 of value; the
/// cap is the quadratic evaluated at V = 500
pub const FHB_DISCOUNT_CAP: f64 = 23_928.60;

pub const GRANT_AMOUNT: f64 = 10_000.0;

/// Land titles office transfer fee
pub const LAND_TRANSFER_FEE: f64 = 165.0;

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub fn stamp_duty(price: f64) -> f64 {
    if !(price > 0.0) {
        return 0.0;
    }

    if price <= QUAD_CEILING {
        let v = price / 1_000.0;
        return round_cents(QUAD_COEFFICIENT * v * v + QUAD_LINEAR_TERM * v);
    }

    for (cap, rate) in FLAT_BANDS {
        if price <= cap {
            return round_cents(price * rate);
        }
    }
    // Unreachable: the last band is unbounded
    round_cents(price * FLAT_BANDS[FLAT_BANDS.len() - 1].1)
}

pub fn land_transfer_fee(_price: f64) -> f64 {
    LAND_TRANSFER_FEE
}

/// First-home discount: duty on the first $500,000 of value is waived
pub fn first_home_concession(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "nt_first_home_concession";

    if !buyer.first_home_buyer {
        return EligibilityOutcome::ineligible(NAME, "not a first home buyer");
    }
    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }
    if property.is_land() {
        return EligibilityOutcome::ineligible(NAME, "discount applies to homes only");
    }

    let amount = base_duty.min(FHB_DISCOUNT_CAP);
    EligibilityOutcome::eligible(NAME, amount, "duty waived on the first $500,000 of value")
        .with_details(OutcomeDetails {
            base_duty: Some(base_duty),
            amount_cap: Some(FHB_DISCOUNT_CAP),
            ..OutcomeDetails::default()
        })
}

/// First Home Owner Grant: new homes, no price cap
pub fn first_home_grant(buyer: &BuyerProfile, property: &PropertyProfile) -> EligibilityOutcome {
    const NAME: &str = "nt_first_home_grant";

    if !buyer.first_home_buyer {
        return EligibilityOutcome::ineligible(NAME, "not a first home buyer");
    }
    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }
    if !property.is_new_home() {
        return EligibilityOutcome::ineligible(NAME, "grant applies to new homes only");
    }

    EligibilityOutcome::eligible(NAME, GRANT_AMOUNT, "eligible new home purchase")
}
