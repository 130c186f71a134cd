//! Eligibility outcomes for concessions, grants and surcharge duty
//!
//! Every eligibility evaluation is total: ineligibility is an outcome
//! carrying a populated reason, never an error.

pub mod resolver;

pub use resolver::{resolve_concessions, ConcessionResolution};

use serde::{Deserialize, Serialize};

/// Structured figures backing an eligibility decision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeDetails {
    /// Base duty the concession was assessed against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_duty: Option<f64>,

    /// Price ceiling that applied to the decision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_cap: Option<f64>,

    /// Lower bound of a taper or phase-out window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taper_from: Option<f64>,

    /// Rate used by a rate-based concession or surcharge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_rate: Option<f64>,

    /// Dollar cap on the concession amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cap: Option<f64>,
}

/// Result of a single concession/grant/surcharge evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    /// Short stable identifier, e.g. "vic_first_home_concession"
    pub name: String,

    pub eligible: bool,

    /// Dollar amount; 0 when ineligible
    pub amount: f64,

    /// Why the outcome applies or does not apply
    pub reason: String,

    #[serde(default)]
    pub details: OutcomeDetails,
}

impl EligibilityOutcome {
    pub fn eligible(name: &str, amount: f64, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            eligible: true,
            amount,
            reason: reason.into(),
            details: OutcomeDetails::default(),
        }
    }

    pub fn ineligible(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            eligible: false,
            amount: 0.0,
            reason: reason.into(),
            details: OutcomeDetails::default(),
        }
    }

    /// Attach structured figures to the outcome
    pub fn with_details(mut self, details: OutcomeDetails) -> Self {
        self.details = details;
        self
    }
}
