//! South Australia transfer duty, first-home relief and grant

use super::brackets::{duty_from_table, RateBracket};
use crate::eligibility::{EligibilityOutcome, OutcomeDetails};
use crate::profile::{BuyerProfile, PropertyProfile};

/// SA transfer duty schedule
pub static BRACKETS: [RateBracket; 9] = [
    RateBracket { min: 0.0, max: 12_000.0, rate: 0.01, fixed: 0.0 },
    RateBracket { min: 12_000.0, max: 30_000.0, rate: 0.02, fixed: 120.0 },
    RateBracket { min: 30_000.0, max: 50_000.0, rate: 0.03, fixed: 480.0 },
    RateBracket { min: 50_000.0, max: 100_000.0, rate: 0.035, fixed: 1_080.0 },
    RateBracket { min: 100_000.0, max: 200_000.0, rate: 0.04, fixed: 2_830.0 },
    RateBracket { min: 200_000.0, max: 250_000.0, rate: 0.0425, fixed: 6_830.0 },
    RateBracket { min: 250_000.0, max: 300_000.0, rate: 0.0475, fixed: 8_955.0 },
    RateBracket { min: 300_000.0, max: 500_000.0, rate: 0.05, fixed: 11_330.0 },
    RateBracket { min: 500_000.0, max: f64::INFINITY, rate: 0.055, fixed: 21_330.0 },
];

pub const FOREIGN_SURCHARGE_RATE: f64 = 0.07;

/// First-home relief: new homes
pub const FHB_HOME_EXEMPT_CAP: f64 = 650_000.0;
pub const FHB_HOME_PHASE_OUT: f64 = 700_000.0;
/// First-home relief: vacant land
pub const FHB_LAND_EXEMPT_CAP: f64 = 400_000.0;
pub const FHB_LAND_PHASE_OUT: f64 = 450_000.0;

pub const GRANT_AMOUNT: f64 = 15_000.0;
pub const GRANT_CAP: f64 = 650_000.0;

/// Lands titles office transfer fee
pub const LAND_TRANSFER_FEE: f64 = 187.0;

pub fn stamp_duty(price: f64) -> f64 {
    duty_from_table(price, &BRACKETS)
}

pub fn land_transfer_fee(_price: f64) -> f64 {
    LAND_TRANSFER_FEE
}

/// First-home relief: full exemption under the cap with a linear
/// phase-out window; new homes and vacant land only.
pub fn first_home_concession(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "sa_first_home_concession";

    if !buyer.first_home_buyer {
        return EligibilityOutcome::ineligible(NAME, "not a first home buyer");
    }
    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }

    let (exempt_cap, phase_out) = if property.is_land() {
        (FHB_LAND_EXEMPT_CAP, FHB_LAND_PHASE_OUT)
    } else if property.is_new_home() {
        (FHB_HOME_EXEMPT_CAP, FHB_HOME_PHASE_OUT)
    } else {
        return EligibilityOutcome::ineligible(
            NAME,
            "relief applies to new homes and vacant land only",
        );
    };

    let price = property.price;
    let details = OutcomeDetails {
        base_duty: Some(base_duty),
        price_cap: Some(phase_out),
        taper_from: Some(exempt_cap),
        ..OutcomeDetails::default()
    };

    if price <= exempt_cap {
        return EligibilityOutcome::eligible(
            NAME,
            base_duty,
            format!("full relief: price within the ${:.0} cap", exempt_cap),
        )
        .with_details(details);
    }

    if price < phase_out {
        let fraction = (phase_out - price) / (phase_out - exempt_cap);
        let amount = (base_duty * fraction).clamp(0.0, base_duty);
        return EligibilityOutcome::eligible(
            NAME,
            amount,
            format!(
                "partial relief: price between ${:.0} and ${:.0}",
                exempt_cap, phase_out
            ),
        )
        .with_details(details);
    }

    EligibilityOutcome::ineligible(
        NAME,
        format!("price ${:.0} is at or above the ${:.0} phase-out", price, phase_out),
    )
    .with_details(details)
}

/// First Home Owner Grant: new homes under the cap
pub fn first_home_grant(buyer: &BuyerProfile, property: &PropertyProfile) -> EligibilityOutcome {
    const NAME: &str = "sa_first_home_grant";

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
    if property.price > GRANT_CAP {
        return EligibilityOutcome::ineligible(
            NAME,
            format!("price ${:.0} exceeds the ${:.0} cap", property.price, GRANT_CAP),
        );
    }

    EligibilityOutcome::eligible(NAME, GRANT_AMOUNT, "eligible new home purchase").with_details(
        OutcomeDetails {
            price_cap: Some(GRANT_CAP),
            ..OutcomeDetails::default()
        },
    )
}
