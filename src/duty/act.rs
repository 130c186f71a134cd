//! Australian Capital Territory conveyance duty, home buyer concession
//!
//! Above the flat-rate threshold ACT charges a single rate on the
//! entire price, not just the excess; marginal brackets apply below it.
//!
//! Separate owner-occupier and investor schedules exist in the published
//! rate data and are carried here as public tables, but the duty
//! calculation runs on the general schedule only; wiring the
//! buyer-specific schedules in is pending product clarification.

use super::brackets::{duty_from_table, RateBracket};
use crate::eligibility::{EligibilityOutcome, OutcomeDetails};
use crate::profile::{BuyerProfile, PropertyProfile};

/// ACT general conveyance duty schedule, below the flat-rate threshold
pub static GENERAL_BRACKETS: [RateBracket; 6] = [
    RateBracket { min: 0.0, max: 200_000.0, rate: 0.012, fixed: 0.0 },
    RateBracket { min: 200_000.0, max: 300_000.0, rate: 0.022, fixed: 2_400.0 },
    RateBracket { min: 300_000.0, max: 500_000.0, rate: 0.034, fixed: 4_600.0 },
    RateBracket { min: 500_000.0, max: 750_000.0, rate: 0.0432, fixed: 11_400.0 },
    RateBracket { min: 750_000.0, max: 1_000_000.0, rate: 0.059, fixed: 22_200.0 },
    RateBracket { min: 1_000_000.0, max: 1_455_000.0, rate: 0.064, fixed: 36_950.0 },
];

/// Owner-occupier schedule (published but not wired into `stamp_duty`)
pub static OWNER_OCCUPIER_BRACKETS: [RateBracket; 6] = [
    RateBracket { min: 0.0, max: 200_000.0, rate: 0.0068, fixed: 0.0 },
    RateBracket { min: 200_000.0, max: 300_000.0, rate: 0.022, fixed: 1_360.0 },
    RateBracket { min: 300_000.0, max: 500_000.0, rate: 0.034, fixed: 3_560.0 },
    RateBracket { min: 500_000.0, max: 750_000.0, rate: 0.0432, fixed: 10_360.0 },
    RateBracket { min: 750_000.0, max: 1_000_000.0, rate: 0.059, fixed: 21_160.0 },
    RateBracket { min: 1_000_000.0, max: 1_455_000.0, rate: 0.064, fixed: 35_910.0 },
];

/// Investor schedule (published but not wired into `stamp_duty`)
pub static INVESTOR_BRACKETS: [RateBracket; 6] = [
    RateBracket { min: 0.0, max: 200_000.0, rate: 0.0208, fixed: 0.0 },
    RateBracket { min: 200_000.0, max: 300_000.0, rate: 0.0282, fixed: 4_160.0 },
    RateBracket { min: 300_000.0, max: 500_000.0, rate: 0.0401, fixed: 6_980.0 },
    RateBracket { min: 500_000.0, max: 750_000.0, rate: 0.0482, fixed: 15_000.0 },
    RateBracket { min: 750_000.0, max: 1_000_000.0, rate: 0.0618, fixed: 27_050.0 },
    RateBracket { min: 1_000_000.0, max: 1_455_000.0, rate: 0.0682, fixed: 42_500.0 },
];

/// Above this price the flat rate applies to the entire value
pub const FLAT_RATE_THRESHOLD: f64 = 1_455_000.0;
pub const FLAT_RATE: f64 = 0.0455;

pub const FOREIGN_SURCHARGE_RATE: f64 = 0.04;

/// Home buyer concession: duty waived up to this amount
pub const CONCESSION_CAP: f64 = 34_790.0;

/// ACT closed its first home owner grant when the duty concession
/// scheme replaced it
pub const GRANT_AMOUNT: f64 = 0.0;

/// Land titles office transfer fee
pub const LAND_TRANSFER_FEE: f64 = 426.0;

pub fn stamp_duty(price: f64) -> f64 {
    if !(price > 0.0) {
        return 0.0;
    }

    if price > FLAT_RATE_THRESHOLD {
        return price * FLAT_RATE;
    }
    duty_from_table(price, &GENERAL_BRACKETS)
}

pub fn land_transfer_fee(_price: f64) -> f64 {
    LAND_TRANSFER_FEE
}

/// Home buyer concession: full duty concession up to the cap
pub fn home_buyer_concession(
    buyer: &BuyerProfile,
    _property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "act_home_buyer_concession";

    if !buyer.first_home_buyer {
        return EligibilityOutcome::ineligible(NAME, "not a first home buyer");
    }
    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }

    let amount = base_duty.min(CONCESSION_CAP);
    EligibilityOutcome::eligible(NAME, amount, "home buyer concession scheme").with_details(
        OutcomeDetails {
            base_duty: Some(base_duty),
            amount_cap: Some(CONCESSION_CAP),
            ..OutcomeDetails::default()
        },
    )
}

/// The ACT grant is closed; the outcome records why
pub fn first_home_grant(buyer: &BuyerProfile, _property: &PropertyProfile) -> EligibilityOutcome {
    const NAME: &str = "act_first_home_grant";

    if !buyer.first_home_buyer {
        return EligibilityOutcome::ineligible(NAME, "not a first home buyer");
    }

    EligibilityOutcome::ineligible(
        NAME,
        "grant closed; replaced by the home buyer duty concession scheme",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duty::brackets::continuity_gap;
    use crate::profile::Jurisdiction;

    #[test]
    fn test_bracket_continuity_all_schedules() {
        assert!(continuity_gap(&GENERAL_BRACKETS) < 1e-6);
        assert!(continuity_gap(&OWNER_OCCUPIER_BRACKETS) < 1e-6);
        assert!(continuity_gap(&INVESTOR_BRACKETS) < 1e-6);
    }

    #[test]
    fn test_marginal_below_threshold() {
        // 4600 + 0.034 * 150000
        assert!((stamp_duty(450_000.0) - 9_700.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_rate_applies_to_entire_price() {
        let price = 1_600_000.0;
        assert_eq!(stamp_duty(price), price * FLAT_RATE);
        // Not the marginal continuation
        assert!(stamp_duty(price) > duty_from_table(FLAT_RATE_THRESHOLD, &GENERAL_BRACKETS));
    }

    #[test]
    fn test_monotonic_across_flat_threshold() {
        let below = stamp_duty(FLAT_RATE_THRESHOLD);
        let above = stamp_duty(FLAT_RATE_THRESHOLD + 0.01);
        assert!(above >= below);
    }

    #[test]
    fn test_concession_capped() {
        let buyer = BuyerProfile::first_home_buyer();
        let property = PropertyProfile::simple(900_000.0, Jurisdiction::Act);
        let base = stamp_duty(900_000.0);

        let outcome = home_buyer_concession(&buyer, &property, base);
        assert!(outcome.eligible);
        assert_eq!(outcome.amount, base.min(CONCESSION_CAP));
    }

    #[test]
    fn test_grant_closed() {
        let buyer = BuyerProfile::first_home_buyer();
        let property = PropertyProfile::simple(500_000.0, Jurisdiction::Act);
        let outcome = first_home_grant(&buyer, &property);
        assert!(!outcome.eligible);
        assert_eq!(outcome.amount, 0.0);
        assert!(outcome.reason.contains("closed"));
    }
}
