//! Foreign purchaser surcharge duty
//!
//! A flat percentage of the contract price keyed by jurisdiction, gated
//! strictly on the buyer's residency status. The surcharge is never
//! reduced by any concession.

use super::{act, nsw, nt, qld, sa, tas, vic, wa};
use crate::eligibility::{EligibilityOutcome, OutcomeDetails};
use crate::profile::{Jurisdiction, Residency};

/// Surcharge rate for a jurisdiction; NT's published rate is zero
pub fn foreign_surcharge_rate(jurisdiction: Jurisdiction) -> f64 {
    match jurisdiction {
        Jurisdiction::Nsw => nsw::FOREIGN_SURCHARGE_RATE,
        Jurisdiction::Vic => vic::FOREIGN_SURCHARGE_RATE,
        Jurisdiction::Qld => qld::FOREIGN_SURCHARGE_RATE,
        Jurisdiction::Sa => sa::FOREIGN_SURCHARGE_RATE,
        Jurisdiction::Wa => wa::FOREIGN_SURCHARGE_RATE,
        Jurisdiction::Tas => tas::FOREIGN_SURCHARGE_RATE,
        Jurisdiction::Nt => nt::FOREIGN_SURCHARGE_RATE,
        Jurisdiction::Act => act::FOREIGN_SURCHARGE_RATE,
    }
}

/// Surcharge amount: `price * rate` for foreign buyers, zero otherwise
pub fn foreign_buyer_duty(price: f64, jurisdiction: Jurisdiction, residency: Residency) -> f64 {
    if residency != Residency::Foreign || !(price > 0.0) {
        return 0.0;
    }
    price * foreign_surcharge_rate(jurisdiction)
}

/// Surcharge evaluation as a displayable outcome
pub fn foreign_buyer_outcome(
    price: f64,
    jurisdiction: Jurisdiction,
    residency: Residency,
) -> EligibilityOutcome {
    const NAME: &str = "foreign_buyer_surcharge";

    if residency != Residency::Foreign {
        return EligibilityOutcome::ineligible(NAME, "buyer is an Australian resident");
    }

    let rate = foreign_surcharge_rate(jurisdiction);
    if rate == 0.0 {
        return EligibilityOutcome::ineligible(
            NAME,
            format!("{} levies no foreign purchaser surcharge", jurisdiction),
        );
    }

    EligibilityOutcome::eligible(
        NAME,
        foreign_buyer_duty(price, jurisdiction, residency),
        format!("{:.1}% surcharge on the contract price", rate * 100.0),
    )
    .with_details(OutcomeDetails {
        applied_rate: Some(rate),
        ..OutcomeDetails::default()
    })
}
