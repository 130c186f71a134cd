//! Concession resolution policy
//!
//! Every concession predicate is evaluated independently; this module
//! decides which of the eligible outcomes actually apply. VIC's three
//! concessions are mutually exclusive (the largest wins and the others
//! are recorded as displaced, for display); TAS concessions stack
//! sequentially; every other jurisdiction carries at most one. The total
//! applied is always clamped to `[0, base_duty]`.

use super::EligibilityOutcome;
use crate::duty::{act, nsw, nt, qld, sa, tas, vic, wa};
use crate::profile::{BuyerProfile, Jurisdiction, PropertyProfile};
use log::debug;

/// Reason attached to eligible-but-not-applied outcomes
pub const DISPLACED_REASON: &str = "only one concession can be applied";

/// Outcome of resolving a jurisdiction's concessions against base duty
#[derive(Debug, Clone, Default)]
pub struct ConcessionResolution {
    /// Concessions deducted from duty, in deduction order
    pub applied: Vec<EligibilityOutcome>,

    /// Eligible outcomes displaced by a mutually exclusive winner;
    /// computed for display even though rendering is out of scope
    pub displaced: Vec<EligibilityOutcome>,

    /// Total deduction, clamped to `[0, base_duty]`
    pub total: f64,
}

/// Resolve the applicable concessions for a buyer/property pair
pub fn resolve_concessions(
    buyer: &BuyerProfile,
    property: &PropertyProfile,
    base_duty: f64,
) -> ConcessionResolution {
    let resolution = match property.jurisdiction {
        Jurisdiction::Nsw => {
            single(nsw::first_home_concession(buyer, property, base_duty), base_duty)
        }
        Jurisdiction::Vic => {
            let candidates = vec![
                vic::first_home_concession(buyer, property, base_duty),
                vic::ppr_concession(buyer, property, base_duty),
                vic::off_the_plan_concession(buyer, property, base_duty),
            ];
            exclusive(candidates, base_duty)
        }
        Jurisdiction::Qld => {
            let candidates = vec![
                qld::vacant_land_concession(property, base_duty),
                qld::first_home_concession(buyer, property, base_duty),
            ];
            exclusive(candidates, base_duty)
        }
        Jurisdiction::Sa => {
            single(sa::first_home_concession(buyer, property, base_duty), base_duty)
        }
        Jurisdiction::Wa => {
            single(wa::first_home_concession(buyer, property, base_duty), base_duty)
        }
        Jurisdiction::Tas => {
            stacked(tas::stackable_concessions(buyer, property, base_duty), base_duty)
        }
        Jurisdiction::Nt => {
            single(nt::first_home_concession(buyer, property, base_duty), base_duty)
        }
        Jurisdiction::Act => {
            single(act::home_buyer_concession(buyer, property, base_duty), base_duty)
        }
    };

    debug!(
        "{}: {} concession(s) applied, total {:.2} against duty {:.2}",
        property.jurisdiction,
        resolution.applied.len(),
        resolution.total,
        base_duty
    );
    resolution
}

/// A jurisdiction with a single concession path
fn single(outcome: EligibilityOutcome, base_duty: f64) -> ConcessionResolution {
    if !outcome.eligible {
        return ConcessionResolution::default();
    }

    let mut outcome = outcome;
    outcome.amount = outcome.amount.clamp(0.0, base_duty.max(0.0));
    ConcessionResolution {
        total: outcome.amount,
        applied: vec![outcome],
        displaced: Vec::new(),
    }
}

/// Mutually exclusive concessions: the largest eligible amount wins and
/// the rest are recorded as displaced with their own reason
fn exclusive(candidates: Vec<EligibilityOutcome>, base_duty: f64) -> ConcessionResolution {
    let mut eligible: Vec<EligibilityOutcome> =
        candidates.into_iter().filter(|o| o.eligible).collect();
    if eligible.is_empty() {
        return ConcessionResolution::default();
    }

    let winner_idx = eligible
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.amount.total_cmp(&b.amount))
        .map(|(i, _)| i)
        .unwrap_or(0);

    let mut winner = eligible.swap_remove(winner_idx);
    winner.amount = winner.amount.clamp(0.0, base_duty.max(0.0));

    let displaced = eligible
        .into_iter()
        .map(|mut o| {
            o.eligible = false;
            o.reason = DISPLACED_REASON.to_string();
            o
        })
        .collect();

    ConcessionResolution {
        total: winner.amount,
        applied: vec![winner],
        displaced,
    }
}

/// Stackable concessions deducted sequentially, never below zero: each
/// outcome's applied amount is truncated to the duty remaining.
fn stacked(candidates: Vec<EligibilityOutcome>, base_duty: f64) -> ConcessionResolution {
    let mut remaining = base_duty.max(0.0);
    let mut applied = Vec::new();

    for mut outcome in candidates.into_iter().filter(|o| o.eligible) {
        let deduction = outcome.amount.clamp(0.0, remaining);
        outcome.amount = deduction;
        remaining -= deduction;
        applied.push(outcome);
    }

    ConcessionResolution {
        total: base_duty.max(0.0) - remaining,
        applied,
        displaced: Vec::new(),
    }
}
