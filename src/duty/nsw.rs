//! New South Wales transfer duty, first-home concessions and grant

use super::brackets::{duty_from_table, RateBracket};
use crate::eligibility::{EligibilityOutcome, OutcomeDetails};
use crate::profile::{BuyerProfile, PropertyProfile};

/// NSW transfer duty schedule
pub static BRACKETS: [RateBracket; 6] = [
    RateBracket { min: 0.0, max: 14_000.0, rate: 0.0125, fixed: 0.0 },
    RateBracket { min: 14_000.0, max: 33_200.0, rate: 0.015, fixed: 175.0 },
    RateBracket { min: 33_200.0, max: 100_000.0, rate: 0.0175, fixed: 463.0 },
    RateBracket { min: 100_000.0, max: 372_000.0, rate: 0.035, fixed: 1_632.0 },
    RateBracket { min: 372_000.0, max: 1_240_000.0, rate: 0.045, fixed: 11_152.0 },
    RateBracket { min: 1_240_000.0, max: f64::INFINITY, rate: 0.055, fixed: 50_212.0 },
];

/// Foreign purchaser surcharge rate
pub const FOREIGN_SURCHARGE_RATE: f64 = 0.08;

/// First Home Buyers Assistance: full exemption ceiling for homes
pub const FHB_HOME_EXEMPT_CAP: f64 = 800_000.0;
/// Partial concession phases out at this price for homes
pub const FHB_HOME_PHASE_OUT: f64 = 1_000_000.0;
/// Full exemption ceiling for vacant land
pub const FHB_LAND_EXEMPT_CAP: f64 = 350_000.0;
/// Partial concession phases out at this price for vacant land
pub const FHB_LAND_PHASE_OUT: f64 = 450_000.0;

/// First Home Owner Grant amount and price caps
pub const GRANT_AMOUNT: f64 = 10_000.0;
pub const GRANT_NEW_HOME_CAP: f64 = 600_000.0;
pub const GRANT_HOUSE_AND_LAND_CAP: f64 = 750_000.0;

/// Land registry transfer fee
pub const LAND_TRANSFER_FEE: f64 = 154.20;

pub fn stamp_duty(price: f64) -> f64 {
    duty_from_table(price, &BRACKETS)
}

pub fn land_transfer_fee(_price: f64) -> f64 {
    LAND_TRANSFER_FEE
}

/// First Home Buyers Assistance Scheme: full exemption under the cap,
/// linear phase-out of the base duty up to the phase-out price.
pub fn first_home_concession(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "nsw_first_home_concession";

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
    } else {
        (FHB_HOME_EXEMPT_CAP, FHB_HOME_PHASE_OUT)
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
            format!("full exemption: price within the ${:.0} cap", exempt_cap),
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
                "partial concession: price between ${:.0} and ${:.0}",
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

/// First Home Owner Grant: new homes only
pub fn first_home_grant(buyer: &BuyerProfile, property: &PropertyProfile) -> EligibilityOutcome {
    const NAME: &str = "nsw_first_home_grant";

    if !buyer.first_home_buyer {
        return EligibilityOutcome::ineligible(NAME, "not a first home buyer");
    }
    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }

    // Vacant land qualifies when a build is costed with it
    let (assessed_value, cap) = match (property.is_land(), property.build_cost) {
        (true, Some(build)) => (property.price + build, GRANT_HOUSE_AND_LAND_CAP),
        (true, None) => {
            return EligibilityOutcome::ineligible(
                NAME,
                "vacant land without a costed build does not attract the grant",
            );
        }
        (false, _) if property.property_type == crate::profile::PropertyType::HouseAndLand => {
            (property.price, GRANT_HOUSE_AND_LAND_CAP)
        }
        (false, _) if property.is_new_home() => (property.price, GRANT_NEW_HOME_CAP),
        (false, _) => {
            return EligibilityOutcome::ineligible(NAME, "grant applies to new homes only");
        }
    };

    if assessed_value > cap {
        return EligibilityOutcome::ineligible(
            NAME,
            format!("value ${:.0} exceeds the ${:.0} cap", assessed_value, cap),
        )
        .with_details(OutcomeDetails {
            price_cap: Some(cap),
            ..OutcomeDetails::default()
        });
    }

    EligibilityOutcome::eligible(NAME, GRANT_AMOUNT, "eligible new home purchase").with_details(
        OutcomeDetails {
            price_cap: Some(cap),
            ..OutcomeDetails::default()
        },
    )
}
