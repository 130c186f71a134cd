//! Victoria transfer duty, duty concessions and grant
//!
//! VIC carries three mutually exclusive duty concessions (first-home,
//! principal place of residence, off-the-plan); selecting which one
//! applies is the resolver's job. This module only evaluates each
//! predicate independently.

use super::brackets::{duty_from_table, RateBracket};
use crate::eligibility::{EligibilityOutcome, OutcomeDetails};
use crate::profile::{BuyerProfile, PropertyProfile, PropertyType};

/// VIC general transfer duty schedule
pub static BRACKETS: [RateBracket; 5] = [
    RateBracket { min: 0.0, max: 25_000.0, rate: 0.014, fixed: 0.0 },
    RateBracket { min: 25_000.0, max: 130_000.0, rate: 0.024, fixed: 350.0 },
    RateBracket { min: 130_000.0, max: 960_000.0, rate: 0.06, fixed: 2_870.0 },
    RateBracket { min: 960_000.0, max: 2_000_000.0, rate: 0.055, fixed: 52_670.0 },
    RateBracket { min: 2_000_000.0, max: f64::INFINITY, rate: 0.065, fixed: 109_870.0 },
];

/// Alternate principal-place-of-residence schedule, applicable only
/// inside the PPR window
pub static PPR_BRACKETS: [RateBracket; 3] = [
    RateBracket { min: 130_000.0, max: 440_000.0, rate: 0.05, fixed: 2_870.0 },
    RateBracket { min: 440_000.0, max: 550_000.0, rate: 0.06, fixed: 18_370.0 },
    RateBracket { min: 550_000.0, max: 750_000.0, rate: 0.06, fixed: 24_970.0 },
];

/// PPR concession window
pub const PPR_WINDOW_MIN: f64 = 130_000.0;
pub const PPR_WINDOW_MAX: f64 = 750_000.0;

/// First-home concession: full exemption at or under this price
pub const FHB_EXEMPT_CAP: f64 = 600_000.0;
/// First-home concession: taper ends at this price
pub const FHB_TAPER_MAX: f64 = 750_000.0;

/// Off-the-plan concession: dutiable fraction of price and price window
pub const OFF_PLAN_DUTIABLE_FRACTION: f64 = 0.75;
pub const OFF_PLAN_CAP: f64 = 1_000_000.0;

pub const FOREIGN_SURCHARGE_RATE: f64 = 0.08;

pub const GRANT_AMOUNT: f64 = 10_000.0;
pub const GRANT_CAP: f64 = 750_000.0;

/// Land registry transfer fee: base plus a per-$1,000 component, capped
pub const TRANSFER_FEE_BASE: f64 = 86.50;
pub const TRANSFER_FEE_PER_THOUSAND: f64 = 2.34;
pub const TRANSFER_FEE_CAP: f64 = 3_609.0;

pub fn stamp_duty(price: f64) -> f64 {
    duty_from_table(price, &BRACKETS)
}

pub fn land_transfer_fee(price: f64) -> f64 {
    if !(price > 0.0) {
        return TRANSFER_FEE_BASE;
    }
    let thousands = (price / 1_000.0).floor();
    (TRANSFER_FEE_BASE + TRANSFER_FEE_PER_THOUSAND * thousands).min(TRANSFER_FEE_CAP)
}

/// First-home buyer duty concession.
///
/// Full exemption at or under $600,000. Between $600,000 and $750,000 an
/// effective duty *rate* is interpolated linearly between the two
/// endpoint rates (zero at the exemption cap, the schedule's average
/// rate at the taper ceiling) and `price * rate` is payable; the
/// concession is the base duty net of that amount. Foreign first-home
/// buyers are not eligible and fall back to the PPR concession.
pub fn first_home_concession(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "vic_first_home_concession";

    if !buyer.first_home_buyer {
        return EligibilityOutcome::ineligible(NAME, "not a first home buyer");
    }
    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }
    if buyer.is_foreign() {
        return EligibilityOutcome::ineligible(
            NAME,
            "foreign buyers are not eligible for the first-home concession",
        );
    }

    let price = property.price;
    if price <= FHB_EXEMPT_CAP {
        return EligibilityOutcome::eligible(
            NAME,
            base_duty,
            format!("full exemption: price within the ${:.0} cap", FHB_EXEMPT_CAP),
        )
        .with_details(OutcomeDetails {
            base_duty: Some(base_duty),
            price_cap: Some(FHB_TAPER_MAX),
            taper_from: Some(FHB_EXEMPT_CAP),
            ..OutcomeDetails::default()
        });
    }

    if price <= FHB_TAPER_MAX {
        // Endpoint rates of the taper: zero duty at the cap, the full
        // schedule's effective rate at the ceiling. Computed from the
        // schedule so the interpolation can never drift from the table.
        let upper_rate = stamp_duty(FHB_TAPER_MAX) / FHB_TAPER_MAX;
        let fraction = (price - FHB_EXEMPT_CAP) / (FHB_TAPER_MAX - FHB_EXEMPT_CAP);
        let interpolated_rate = upper_rate * fraction;
        let payable = price * interpolated_rate;
        let amount = (base_duty - payable).clamp(0.0, base_duty);

        return EligibilityOutcome::eligible(
            NAME,
            amount,
            format!(
                "partial concession at interpolated rate {:.4}% of price",
                interpolated_rate * 100.0
            ),
        )
        .with_details(OutcomeDetails {
            base_duty: Some(base_duty),
            price_cap: Some(FHB_TAPER_MAX),
            taper_from: Some(FHB_EXEMPT_CAP),
            applied_rate: Some(interpolated_rate),
            ..OutcomeDetails::default()
        });
    }

    EligibilityOutcome::ineligible(
        NAME,
        format!("price ${:.0} is above the ${:.0} taper ceiling", price, FHB_TAPER_MAX),
    )
}

/// Principal-place-of-residence concession: duty under the alternate PPR
/// schedule, applicable only inside the PPR window.
pub fn ppr_concession(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "vic_ppr_concession";

    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }

    let price = property.price;
    if price <= PPR_WINDOW_MIN || price > PPR_WINDOW_MAX {
        return EligibilityOutcome::ineligible(
            NAME,
            format!(
                "price ${:.0} outside the ${:.0}-${:.0} PPR window",
                price, PPR_WINDOW_MIN, PPR_WINDOW_MAX
            ),
        );
    }

    let ppr_duty = duty_from_table(price, &PPR_BRACKETS);
    let amount = (base_duty - ppr_duty).clamp(0.0, base_duty);

    EligibilityOutcome::eligible(NAME, amount, "duty assessed under the PPR schedule").with_details(
        OutcomeDetails {
            base_duty: Some(base_duty),
            price_cap: Some(PPR_WINDOW_MAX),
            taper_from: Some(PPR_WINDOW_MIN),
            ..OutcomeDetails::default()
        },
    )
}

/// Temporary off-the-plan concession: duty is assessed on a reduced
/// dutiable fraction of the price for off-the-plan PPR purchases.
pub fn off_the_plan_concession(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "vic_off_the_plan_concession";

    if property.property_type != PropertyType::OffThePlan {
        return EligibilityOutcome::ineligible(NAME, "not an off-the-plan purchase");
    }
    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }
    if property.price > OFF_PLAN_CAP {
        return EligibilityOutcome::ineligible(
            NAME,
            format!("price ${:.0} exceeds the ${:.0} cap", property.price, OFF_PLAN_CAP),
        );
    }

    let reduced_duty = stamp_duty(property.price * OFF_PLAN_DUTIABLE_FRACTION);
    let amount = (base_duty - reduced_duty).clamp(0.0, base_duty);

    EligibilityOutcome::eligible(
        NAME,
        amount,
        format!(
            "duty assessed on {:.0}% of the contract price",
            OFF_PLAN_DUTIABLE_FRACTION * 100.0
        ),
    )
    .with_details(OutcomeDetails {
        base_duty: Some(base_duty),
        price_cap: Some(OFF_PLAN_CAP),
        applied_rate: Some(OFF_PLAN_DUTIABLE_FRACTION),
        ..OutcomeDetails::default()
    })
}

/// First Home Owner Grant: new homes under the cap
pub fn first_home_grant(buyer: &BuyerProfile, property: &PropertyProfile) -> EligibilityOutcome {
    const NAME: &str = "vic_first_home_grant";

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
