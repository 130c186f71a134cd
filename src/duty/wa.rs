//! Western Australia transfer duty, first-home rates and grant
//!
//! WA gates the grant's price cap on two property flags: north or south
//! of the 26th parallel, and metropolitan or non-metropolitan.

use super::brackets::{duty_from_table, RateBracket};
use crate::eligibility::{EligibilityOutcome, OutcomeDetails};
use crate::profile::{BuyerProfile, PropertyProfile, WaRegion, WaZone};

/// WA residential duty schedule
pub static BRACKETS: [RateBracket; 5] = [
    RateBracket { min: 0.0, max: 120_000.0, rate: 0.019, fixed: 0.0 },
    RateBracket { min: 120_000.0, max: 150_000.0, rate: 0.0285, fixed: 2_280.0 },
    RateBracket { min: 150_000.0, max: 360_000.0, rate: 0.038, fixed: 3_135.0 },
    RateBracket { min: 360_000.0, max: 725_000.0, rate: 0.0475, fixed: 11_115.0 },
    RateBracket { min: 725_000.0, max: f64::INFINITY, rate: 0.0515, fixed: 28_452.50 },
];

pub const FOREIGN_SURCHARGE_RATE: f64 = 0.07;

/// First home owner rate: homes pay nothing up to the threshold, then a
/// steep marginal rate on the excess until it meets the general schedule
pub const FHB_HOME_NIL_CAP: f64 = 430_000.0;
pub const FHB_HOME_PHASE_OUT: f64 = 530_000.0;
pub const FHB_HOME_EXCESS_RATE: f64 = 0.1919;
/// First home owner rate: vacant land
pub const FHB_LAND_NIL_CAP: f64 = 300_000.0;
pub const FHB_LAND_PHASE_OUT: f64 = 400_000.0;
pub const FHB_LAND_EXCESS_RATE: f64 = 0.1301;

pub const GRANT_AMOUNT: f64 = 10_000.0;
/// Grant price caps by region and zone
pub const GRANT_CAP_NORTH: f64 = 1_000_000.0;
pub const GRANT_CAP_SOUTH_METRO: f64 = 750_000.0;
pub const GRANT_CAP_SOUTH_NON_METRO: f64 = 850_000.0;

/// Landgate registration fee bands by price
pub static TRANSFER_FEE_BANDS: [(f64, f64); 9] = [
    (85_000.0, 207.40),
    (120_000.0, 217.40),
    (200_000.0, 227.40),
    (300_000.0, 247.40),
    (400_000.0, 267.40),
    (500_000.0, 287.40),
    (600_000.0, 307.40),
    (700_000.0, 327.40),
    (f64::INFINITY, 347.40),
];

pub fn stamp_duty(price: f64) -> f64 {
    duty_from_table(price, &BRACKETS)
}

pub fn land_transfer_fee(price: f64) -> f64 {
    for (cap, fee) in TRANSFER_FEE_BANDS {
        if price <= cap {
            return fee;
        }
    }
    // Unreachable: the last band is unbounded
    TRANSFER_FEE_BANDS[TRANSFER_FEE_BANDS.len() - 1].1
}

/// First home owner rate of duty: nil under the threshold, then the
/// excess rate applies to the value above it. The concession is the base
/// duty net of the amount payable under that rate.
pub fn first_home_concession(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> EligibilityOutcome {
    const NAME: &str = "wa_first_home_concession";

    if !buyer.first_home_buyer {
        return EligibilityOutcome::ineligible(NAME, "not a first home buyer");
    }
    if !buyer.principal_residence {
        return EligibilityOutcome::ineligible(
            NAME,
            "property will not be the principal place of residence",
        );
    }

    let (nil_cap, phase_out, excess_rate) = if property.is_land() {
        (FHB_LAND_NIL_CAP, FHB_LAND_PHASE_OUT, FHB_LAND_EXCESS_RATE)
    } else {
        (FHB_HOME_NIL_CAP, FHB_HOME_PHASE_OUT, FHB_HOME_EXCESS_RATE)
    };

    let price = property.price;
    let details = OutcomeDetails {
        base_duty: Some(base_duty),
        price_cap: Some(phase_out),
        taper_from: Some(nil_cap),
        applied_rate: Some(excess_rate),
        ..OutcomeDetails::default()
    };

    if price <= nil_cap {
        return EligibilityOutcome::eligible(
            NAME,
            base_duty,
            format!("nil duty: price within the ${:.0} threshold", nil_cap),
        )
        .with_details(details);
    }

    if price <= phase_out {
        let payable = (price - nil_cap) * excess_rate;
        let amount = (base_duty - payable).clamp(0.0, base_duty);
        return EligibilityOutcome::eligible(
            NAME,
            amount,
            format!(
                "first home owner rate: {:.2}% on the value above ${:.0}",
                excess_rate * 100.0,
                nil_cap
            ),
        )
        .with_details(details);
    }

    EligibilityOutcome::ineligible(
        NAME,
        format!("price ${:.0} is above the ${:.0} phase-out", price, phase_out),
    )
    .with_details(details)
}

/// Grant price cap for the property's region and zone
pub fn grant_cap(region: WaRegion, zone: WaZone) -> f64 {
    match (region, zone) {
        (WaRegion::North, _) => GRANT_CAP_NORTH,
        (WaRegion::South, WaZone::Metro) => GRANT_CAP_SOUTH_METRO,
        (WaRegion::South, WaZone::NonMetro) => GRANT_CAP_SOUTH_NON_METRO,
    }
}

/// First Home Owner Grant: new homes, cap gated on region and zone
pub fn first_home_grant(buyer: &BuyerProfile, property: &PropertyProfile) -> EligibilityOutcome {
    const NAME: &str = "wa_first_home_grant";

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

    let cap = grant_cap(property.wa_region, property.wa_zone);
    if property.price > cap {
        return EligibilityOutcome::ineligible(
            NAME,
            format!(
                "price ${:.0} exceeds the ${:.0} cap for the property's region",
                property.price, cap
            ),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duty::brackets::continuity_gap;
    use crate::profile::{Jurisdiction, PropertyType};

    #[test]
    fn test_bracket_continuity() {
        assert!(continuity_gap(&BRACKETS) < 1e-6);
    }

    #[test]
    fn test_published_values() {
        // 3135 + 0.038 * 140000
        assert!((stamp_duty(290_000.0) - 8_455.0).abs() < 1e-9);
        // 11115 + 0.0475 * 140000
        assert!((stamp_duty(500_000.0) - 17_765.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_home_rate_meets_schedule_at_phase_out() {
        let buyer = BuyerProfile::first_home_buyer();
        let property = PropertyProfile::simple(FHB_HOME_PHASE_OUT, Jurisdiction::Wa);
        let base = stamp_duty(FHB_HOME_PHASE_OUT);

        // At the phase-out price the first home owner rate reproduces the
        // general schedule exactly, so the concession bottoms out at zero
        let outcome = first_home_concession(&buyer, &property, base);
        assert!(outcome.eligible);
        assert!(outcome.amount.abs() < 1e-6);
    }

    #[test]
    fn test_first_home_nil_band() {
        let buyer = BuyerProfile::first_home_buyer();
        let property = PropertyProfile::simple(420_000.0, Jurisdiction::Wa);
        let base = stamp_duty(420_000.0);

        let outcome = first_home_concession(&buyer, &property, base);
        assert!(outcome.eligible);
        assert_eq!(outcome.amount, base);
    }

    #[test]
    fn test_grant_caps_by_region() {
        let buyer = BuyerProfile::first_home_buyer();
        let mut property = PropertyProfile::simple(800_000.0, Jurisdiction::Wa);
        property.property_type = PropertyType::NewBuild;

        // South metro: capped at 750k
        assert!(!first_home_grant(&buyer, &property).eligible);

        // South non-metro: 850k cap admits the same price
        property.wa_zone = WaZone::NonMetro;
        assert!(first_home_grant(&buyer, &property).eligible);

        // North: 1M cap
        property.wa_region = WaRegion::North;
        property.price = 950_000.0;
        assert!(first_home_grant(&buyer, &property).eligible);
        property.price = 1_050_000.0;
        assert!(!first_home_grant(&buyer, &property).eligible);
    }

    #[test]
    fn test_transfer_fee_bands() {
        assert_eq!(land_transfer_fee(80_000.0), 207.40);
        assert_eq!(land_transfer_fee(450_000.0), 287.40);
        assert_eq!(land_transfer_fee(2_000_000.0), 347.40);
    }
}
