//! Tasmania transfer duty, stackable concessions and grant
//!
//! TAS is the one jurisdiction where several concessions stack: each is
//! evaluated independently here and the resolver deducts them
//! sequentially from base duty, never below zero.

use super::brackets::{duty_from_table, RateBracket};
use crate::eligibility::{EligibilityOutcome, OutcomeDetails};
use crate::profile::{BuyerProfile, PropertyProfile, PropertyType};

/// TAS transfer duty schedule. Duty is a flat $50 up to $3,000, encoded
/// as a zero-rate bracket with the minimum as its fixed fee; the table
/// is therefore evaluated with the closed form only.
pub static BRACKETS: [RateBracket; 7] = [
    RateBracket { min: 0.0, max: 3_000.0, rate: 0.0, fixed: 50.0 },
    RateBracket { min: 3_000.0, max: 25_000.0, rate: 0.0175, fixed: 50.0 },
    RateBracket { min: 25_000.0, max: 75_000.0, rate: 0.0225, fixed: 435.0 },
    RateBracket { min: 75_000.0, max: 200_000.0, rate: 0.035, fixed: 1_560.0 },
    RateBracket { min: 200_000.0, max: 375_000.0, rate: 0.04, fixed: 5_935.0 },
    RateBracket { min: 375_000.0, max: 725_000.0, rate: 0.0425, fixed: 12_935.0 },
    RateBracket { min: 725_000.0, max: f64::INFINITY, rate: 0.045, fixed: 27_810.0 },
];

pub const FOREIGN_SURCHARGE_RATE: f64 = 0.08;

/// First-home concession: established homes under the cap
pub const FHB_PRICE_CAP: f64 = 600_000.0;
pub const FHB_DUTY_SHARE: f64 = 0.5;
pub const FHB_AMOUNT_CAP: f64 = 11_000.0;

/// Regional property concession
pub const REGIONAL_DUTY_SHARE: f64 = 0.2;
pub const REGIONAL_AMOUNT_CAP: f64 = 2_000.0;

/// Vacant land concession
pub const VACANT_LAND_PRICE_CAP: f64 = 400_000.0;
pub const VACANT_LAND_DUTY_SHARE: f64 = 0.5;
pub const VACANT_LAND_AMOUNT_CAP: f64 = 3_500.0;

/// Off-the-plan concession
pub const OFF_PLAN_DUTY_SHARE: f64 = 0.25;
pub const OFF_PLAN_AMOUNT_CAP: f64 = 4_000.0;

/// Pensioner downsizing concession
pub const PENSIONER_PRICE_CAP: f64 = 600_000.0;
pub const PENSIONER_DUTY_SHARE: f64 = 0.5;
pub const PENSIONER_AMOUNT_CAP: f64 = 10_000.0;

/// Senior concession
pub const SENIOR_DUTY_SHARE: f64 = 0.25;
pub const SENIOR_AMOUNT_CAP: f64 = 5_000.0;

pub const GRANT_AMOUNT: f64 = 30_000.0;

/// Land titles office transfer fee
pub const LAND_TRANSFER_FEE: f64 = 241.76;

pub fn stamp_duty(price: f64) -> f64 {
    duty_from_table(price, &BRACKETS)
}

pub fn land_transfer_fee(_price: f64) -> f64 {
    LAND_TRANSFER_FEE
}

fn share_of_duty(base_duty: f64, share: f64, cap: f64) -> f64 {
    (base_duty * share).min(cap).max(0.0)
}

pub fn first_home_concession(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "tas_first_home_concession";

    if !buyer.first_home_buyer {
        return EligibilityOutcome::ineligible(NAME, "not a first home buyer");
    }
    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }
    if property.property_type != PropertyType::Existing || property.is_land() {
        return EligibilityOutcome::ineligible(
            NAME,
            "concession applies to established homes only",
        );
    }
    if property.price > FHB_PRICE_CAP {
        return EligibilityOutcome::ineligible(
            NAME,
            format!("price ${:.0} exceeds the ${:.0} cap", property.price, FHB_PRICE_CAP),
        );
    }

    EligibilityOutcome::eligible(
        NAME,
        share_of_duty(base_duty, FHB_DUTY_SHARE, FHB_AMOUNT_CAP),
        "50% duty concession for an established first home",
    )
    .with_details(OutcomeDetails {
        base_duty: Some(base_duty),
        price_cap: Some(FHB_PRICE_CAP),
        applied_rate: Some(FHB_DUTY_SHARE),
        amount_cap: Some(FHB_AMOUNT_CAP),
        ..OutcomeDetails::default()
    })
}

pub fn regional_concession(property: &PropertyProfile, base_duty: f64) -> EligibilityOutcome {
    const NAME: &str = "tas_regional_concession";

    if !property.regional {
        return EligibilityOutcome::ineligible(NAME, "property is not in a regional area");
    }

    EligibilityOutcome::eligible(
        NAME,
        share_of_duty(base_duty, REGIONAL_DUTY_SHARE, REGIONAL_AMOUNT_CAP),
        "regional property concession",
    )
    .with_details(OutcomeDetails {
        base_duty: Some(base_duty),
        applied_rate: Some(REGIONAL_DUTY_SHARE),
        amount_cap: Some(REGIONAL_AMOUNT_CAP),
        ..OutcomeDetails::default()
    })
}

pub fn vacant_land_concession(property: &PropertyProfile, base_duty: f64) -> EligibilityOutcome {
    const NAME: &str = "tas_vacant_land_concession";

    if !property.is_land() {
        return EligibilityOutcome::ineligible(NAME, "property is not vacant land");
    }
    if property.price > VACANT_LAND_PRICE_CAP {
        return EligibilityOutcome::ineligible(
            NAME,
            format!(
                "price ${:.0} exceeds the ${:.0} cap",
                property.price, VACANT_LAND_PRICE_CAP
            ),
        );
    }

    EligibilityOutcome::eligible(
        NAME,
        share_of_duty(base_duty, VACANT_LAND_DUTY_SHARE, VACANT_LAND_AMOUNT_CAP),
        "vacant land concession",
    )
    .with_details(OutcomeDetails {
        base_duty: Some(base_duty),
        price_cap: Some(VACANT_LAND_PRICE_CAP),
        applied_rate: Some(VACANT_LAND_DUTY_SHARE),
        amount_cap: Some(VACANT_LAND_AMOUNT_CAP),
        ..OutcomeDetails::default()
    })
}

pub fn off_the_plan_concession(property: &PropertyProfile, base_duty: f64) -> EligibilityOutcome {
    const NAME: &str = "tas_off_the_plan_concession";

    if property.property_type != PropertyType::OffThePlan {
        return EligibilityOutcome::ineligible(NAME, "not an off-the-plan purchase");
    }

    EligibilityOutcome::eligible(
        NAME,
        share_of_duty(base_duty, OFF_PLAN_DUTY_SHARE, OFF_PLAN_AMOUNT_CAP),
        "off-the-plan concession",
    )
    .with_details(OutcomeDetails {
        base_duty: Some(base_duty),
        applied_rate: Some(OFF_PLAN_DUTY_SHARE),
        amount_cap: Some(OFF_PLAN_AMOUNT_CAP),
        ..OutcomeDetails::default()
    })
}

pub fn pensioner_concession(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "tas_pensioner_concession";

    if !buyer.pensioner {
        return EligibilityOutcome::ineligible(NAME, "buyer is not a pensioner");
    }
    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }
    if property.price > PENSIONER_PRICE_CAP {
        return EligibilityOutcome::ineligible(
            NAME,
            format!(
                "price ${:.0} exceeds the ${:.0} cap",
                property.price, PENSIONER_PRICE_CAP
            ),
        );
    }

    EligibilityOutcome::eligible(
        NAME,
        share_of_duty(base_duty, PENSIONER_DUTY_SHARE, PENSIONER_AMOUNT_CAP),
        "pensioner downsizing concession",
    )
    .with_details(OutcomeDetails {
        base_duty: Some(base_duty),
        price_cap: Some(PENSIONER_PRICE_CAP),
        applied_rate: Some(PENSIONER_DUTY_SHARE),
        amount_cap: Some(PENSIONER_AMOUNT_CAP),
        ..OutcomeDetails::default()
    })
}

pub fn senior_concession(buyer: &BuyerProfile, base_duty: f64) -> EligibilityOutcome {
    const NAME: &str = "tas_senior_concession";

    if !buyer.senior {
        return EligibilityOutcome::ineligible(NAME, "buyer is not a senior");
    }

    EligibilityOutcome::eligible(
        NAME,
        share_of_duty(base_duty, SENIOR_DUTY_SHARE, SENIOR_AMOUNT_CAP),
        "senior concession",
    )
    .with_details(OutcomeDetails {
        base_duty: Some(base_duty),
        applied_rate: Some(SENIOR_DUTY_SHARE),
        amount_cap: Some(SENIOR_AMOUNT_CAP),
        ..OutcomeDetails::default()
    })
}

/// All TAS concessions, evaluated independently, in the order they are
/// deducted from base duty.
pub fn stackable_concessions(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> Vec<EligibilityOutcome> {
    vec![
        first_home_concession(buyer, property, base_duty),
        regional_concession(property, base_duty),
        vacant_land_concession(property, base_duty),
        off_the_plan_concession(property, base_duty),
        pensioner_concession(buyer, property, base_duty),
        senior_concession(buyer, base_duty),
    ]
}

/// First Home Owner Grant: new homes, no price cap
pub fn first_home_grant(buyer: &BuyerProfile, property: &PropertyProfile) -> EligibilityOutcome {
    const NAME: &str = "tas_first_home_grant";

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duty::brackets::continuity_gap;
    use crate::profile::{Jurisdiction, PropertyCategory};

    #[test]
    fn test_bracket_continuity() {
        assert!(continuity_gap(&BRACKETS) < 1e-6);
    }

    #[test]
    fn test_minimum_duty() {
        assert_eq!(stamp_duty(1_000.0), 50.0);
        assert_eq!(stamp_duty(3_000.0), 50.0);
        assert_eq!(stamp_duty(0.0), 0.0);
    }

    #[test]
    fn test_published_values() {
        // 5935 + 0.04 * 100000
        assert!((stamp_duty(300_000.0) - 9_935.0).abs() < 1e-9);
        // 12935 + 0.0425 * 125000
        assert!((stamp_duty(500_000.0) - 18_247.5).abs() < 1e-9);
    }

    #[test]
    fn test_first_home_capped() {
        let buyer = BuyerProfile::first_home_buyer();
        let property = PropertyProfile::simple(590_000.0, Jurisdiction::Tas);
        let base = stamp_duty(590_000.0);

        let outcome = first_home_concession(&buyer, &property, base);
        assert!(outcome.eligible);
        // Half of 22,072.50 exceeds the cap
        assert_eq!(outcome.amount, FHB_AMOUNT_CAP);
    }

    #[test]
    fn test_stack_evaluates_all_six() {
        let buyer = BuyerProfile::first_home_buyer();
        let property = PropertyProfile::simple(400_000.0, Jurisdiction::Tas);
        let outcomes = stackable_concessions(&buyer, &property, stamp_duty(400_000.0));
        assert_eq!(outcomes.len(), 6);
        // Only the first-home concession applies for this profile
        assert_eq!(outcomes.iter().filter(|o| o.eligible).count(), 1);
        assert_eq!(outcomes[0].name, "tas_first_home_concession");
    }

    #[test]
    fn test_pensioner_and_regional_stack() {
        let mut buyer = BuyerProfile::owner_occupier();
        buyer.pensioner = true;
        let mut property = PropertyProfile::simple(350_000.0, Jurisdiction::Tas);
        property.regional = true;

        let base = stamp_duty(350_000.0);
        let outcomes = stackable_concessions(&buyer, &property, base);
        let eligible: Vec<_> = outcomes.iter().filter(|o| o.eligible).collect();
        assert_eq!(eligible.len(), 2);
        let total: f64 = eligible.iter().map(|o| o.amount).sum();
        assert!(total < base);
    }

    #[test]
    fn test_vacant_land_cap() {
        let property = PropertyProfile {
            category: PropertyCategory::Land,
            ..PropertyProfile::simple(380_000.0, Jurisdiction::Tas)
        };
        let outcome = vacant_land_concession(&property, stamp_duty(380_000.0));
        assert!(outcome.eligible);
        assert_eq!(outcome.amount, VACANT_LAND_AMOUNT_CAP);
    }
}
