//! Queensland transfer duty, first-home concession and grant

use super::brackets::{duty_from_table, stepped_amount, ConcessionBracket, RateBracket};
use crate::eligibility::{EligibilityOutcome, OutcomeDetails};
use crate::profile::{BuyerProfile, PropertyProfile};

/// QLD transfer duty schedule
pub static BRACKETS: [RateBracket; 5] = [
    RateBracket { min: 0.0, max: 5_000.0, rate: 0.0, fixed: 0.0 },
    RateBracket { min: 5_000.0, max: 75_000.0, rate: 0.015, fixed: 0.0 },
    RateBracket { min: 75_000.0, max: 540_000.0, rate: 0.035, fixed: 1_050.0 },
    RateBracket { min: 540_000.0, max: 1_000_000.0, rate: 0.045, fixed: 17_325.0 },
    RateBracket { min: 1_000_000.0, max: f64::INFINITY, rate: 0.0575, fixed: 38_025.0 },
];

/// First-home stepped discount for established homes: full amount up to
/// $505,000, stepping down by $875 per $5,000 band, nil from $550,000.
pub static FHB_DISCOUNT_STEPS: [ConcessionBracket; 11] = [
    ConcessionBracket { min: 0.0, max: 505_000.0, amount: 8_750.0 },
    ConcessionBracket { min: 505_000.0, max: 510_000.0, amount: 7_875.0 },
    ConcessionBracket { min: 510_000.0, max: 515_000.0, amount: 7_000.0 },
    ConcessionBracket { min: 515_000.0, max: 520_000.0, amount: 6_125.0 },
    ConcessionBracket { min: 520_000.0, max: 525_000.0, amount: 5_250.0 },
    ConcessionBracket { min: 525_000.0, max: 530_000.0, amount: 4_375.0 },
    ConcessionBracket { min: 530_000.0, max: 535_000.0, amount: 3_500.0 },
    ConcessionBracket { min: 535_000.0, max: 540_000.0, amount: 2_625.0 },
    ConcessionBracket { min: 540_000.0, max: 545_000.0, amount: 1_750.0 },
    ConcessionBracket { min: 545_000.0, max: 550_000.0, amount: 875.0 },
    ConcessionBracket { min: 550_000.0, max: f64::INFINITY, amount: 0.0 },
];

pub const FOREIGN_SURCHARGE_RATE: f64 = 0.07;

pub const GRANT_AMOUNT: f64 = 15_000.0;
pub const GRANT_CAP: f64 = 750_000.0;

/// Titles registry fee: base amount plus a per-$10,000 component above
/// the fee threshold
pub const TRANSFER_FEE_BASE: f64 = 195.0;
pub const TRANSFER_FEE_THRESHOLD: f64 = 180_000.0;
pub const TRANSFER_FEE_PER_10K: f64 = 37.0;

pub fn stamp_duty(price: f64) -> f64 {
    duty_from_table(price, &BRACKETS)
}

pub fn land_transfer_fee(price: f64) -> f64 {
    if !(price > TRANSFER_FEE_THRESHOLD) {
        return TRANSFER_FEE_BASE;
    }
    let excess_bands = ((price - TRANSFER_FEE_THRESHOLD) / 10_000.0).ceil();
    TRANSFER_FEE_BASE + TRANSFER_FEE_PER_10K * excess_bands
}

/// First-home concession: full exemption for new and off-the-plan homes,
/// stepped discount for established homes.
pub fn first_home_concession(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "qld_first_home_concession";

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
        return EligibilityOutcome::ineligible(
            NAME,
            "vacant land is covered by the vacant land concession",
        );
    }

    if property.is_new_home() {
        return EligibilityOutcome::eligible(
            NAME,
            base_duty,
            "full exemption for a new or off-the-plan home",
        )
        .with_details(OutcomeDetails {
            base_duty: Some(base_duty),
            ..OutcomeDetails::default()
        });
    }

    let amount = stepped_amount(property.price, &FHB_DISCOUNT_STEPS).min(base_duty);
    if amount <= 0.0 {
        return EligibilityOutcome::ineligible(
            NAME,
            format!(
                "price ${:.0} is at or above the $550,000 concession ceiling",
                property.price
            ),
        );
    }

    EligibilityOutcome::eligible(NAME, amount, "stepped discount for an established home")
        .with_details(OutcomeDetails {
            base_duty: Some(base_duty),
            price_cap: Some(550_000.0),
            ..OutcomeDetails::default()
        })
}

/// Vacant land concession: zeroes duty entirely when explicitly claimed,
/// with no price cap.
pub fn vacant_land_concession(property: &PropertyProfile, base_duty: f64) -> EligibilityOutcome {
    const NAME: &str = "qld_vacant_land_concession";

    if !property.is_land() {
        return EligibilityOutcome::ineligible(NAME, "property is not vacant land");
    }
    if !property.claim_vacant_land_concession {
        return EligibilityOutcome::ineligible(NAME, "concession not claimed");
    }

    EligibilityOutcome::eligible(NAME, base_duty, "vacant land concession claimed").with_details(
        OutcomeDetails {
            base_duty: Some(base_duty),
            ..OutcomeDetails::default()
        },
    )
}

/// First Home Owner Grant: new homes under the cap
pub fn first_home_grant(buyer: &BuyerProfile, property: &PropertyProfile) -> EligibilityOutcome {
    const NAME: &str = "qld_first_home_grant";

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duty::brackets::continuity_gap;
    use crate::profile::{Jurisdiction, PropertyCategory, PropertyType};

    #[test]
    fn test_bracket_continuity() {
        assert!(continuity_gap(&BRACKETS) < 1e-6);
    }

    #[test]
    fn test_published_values() {
        assert_eq!(stamp_duty(4_000.0), 0.0);
        // 1050 + 0.035 * (350000 - 75000)
        assert!((stamp_duty(350_000.0) - 10_675.0).abs() < 1e-9);
        // 17325 + 0.045 * 160000
        assert!((stamp_duty(700_000.0) - 24_525.0).abs() < 1e-9);
    }

    #[test]
    fn test_discount_steps_non_increasing() {
        let mut last = f64::INFINITY;
        for step in &FHB_DISCOUNT_STEPS {
            assert!(step.amount <= last);
            last = step.amount;
        }
    }

    #[test]
    fn test_first_home_new_full_exemption() {
        let buyer = BuyerProfile::first_home_buyer();
        let mut property = PropertyProfile::simple(900_000.0, Jurisdiction::Qld);
        property.property_type = PropertyType::OffThePlan;

        let base = stamp_duty(900_000.0);
        let outcome = first_home_concession(&buyer, &property, base);
        assert!(outcome.eligible);
        assert_eq!(outcome.amount, base);
    }

    #[test]
    fn test_first_home_established_steps() {
        let buyer = BuyerProfile::first_home_buyer();

        let property = PropertyProfile::simple(480_000.0, Jurisdiction::Qld);
        let outcome = first_home_concession(&buyer, &property, stamp_duty(480_000.0));
        assert!(outcome.eligible);
        assert_eq!(outcome.amount, 8_750.0);

        let property = PropertyProfile::simple(537_500.0, Jurisdiction::Qld);
        let outcome = first_home_concession(&buyer, &property, stamp_duty(537_500.0));
        assert_eq!(outcome.amount, 2_625.0);

        let property = PropertyProfile::simple(550_000.0, Jurisdiction::Qld);
        let outcome = first_home_concession(&buyer, &property, stamp_duty(550_000.0));
        assert!(!outcome.eligible);
    }

    #[test]
    fn test_vacant_land_concession_claimed() {
        let mut property = PropertyProfile::simple(2_500_000.0, Jurisdiction::Qld);
        property.category = PropertyCategory::Land;

        // Not claimed: no concession
        assert!(!vacant_land_concession(&property, stamp_duty(2_500_000.0)).eligible);

        // Claimed: zeroes duty regardless of price
        property.claim_vacant_land_concession = true;
        let base = stamp_duty(2_500_000.0);
        let outcome = vacant_land_concession(&property, base);
        assert!(outcome.eligible);
        assert_eq!(outcome.amount, base);
        assert_eq!(base - outcome.amount, 0.0);
    }

    #[test]
    fn test_transfer_fee_scaling() {
        assert_eq!(land_transfer_fee(150_000.0), 195.0);
        // One band above the threshold
        assert_eq!(land_transfer_fee(185_000.0), 232.0);
        // 500000: 32 bands of 10k above 180k
        assert_eq!(land_transfer_fee(500_000.0), 195.0 + 37.0 * 32.0);
    }
}
