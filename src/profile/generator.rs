//! Scenario grid generator for batch pricing runs
//!
//! Builds a deterministic grid of scenarios (jurisdiction x price x
//! buyer kind) so the batch runner has something representative to
//! price when no input file is supplied.

use super::data::{
    BuyerProfile, BuyerType, Jurisdiction, LoanTerms, OngoingFees, PropertyProfile, Residency,
    Scenario, UpfrontFees,
};
use serde::{Deserialize, Serialize};

/// Parameters shaping the generated grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridParams {
    /// Lowest price point
    #[serde(default = "default_price_min")]
    pub price_min: f64,

    /// Highest price point (inclusive)
    #[serde(default = "default_price_max")]
    pub price_max: f64,

    #[serde(default = "default_price_step")]
    pub price_step: f64,

    /// Jurisdictions to cover; empty means all eight
    #[serde(default)]
    pub jurisdictions: Vec<Jurisdiction>,

    /// Add an investor scenario per price point
    #[serde(default)]
    pub include_investors: bool,

    /// Add a foreign-buyer scenario per price point
    #[serde(default)]
    pub include_foreign: bool,

    /// Deposit as a fraction of price for generated loans
    #[serde(default = "default_deposit_fraction")]
    pub deposit_fraction: f64,

    #[serde(default = "default_annual_rate")]
    pub annual_rate_pct: f64,

    #[serde(default = "default_term_years")]
    pub term_years: u32,
}

fn default_price_min() -> f64 { 200_000.0 }
fn default_price_max() -> f64 { 1_000_000.0 }
fn default_price_step() -> f64 { 100_000.0 }
fn default_deposit_fraction() -> f64 { 0.2 }
fn default_annual_rate() -> f64 { 6.0 }
fn default_term_years() -> u32 { 30 }

impl Default for GridParams {
    fn default() -> Self {
        Self {
            price_min: default_price_min(),
            price_max: default_price_max(),
            price_step: default_price_step(),
            jurisdictions: Vec::new(),
            include_investors: false,
            include_foreign: false,
            deposit_fraction: default_deposit_fraction(),
            annual_rate_pct: default_annual_rate(),
            term_years: default_term_years(),
        }
    }
}

impl GridParams {
    fn jurisdictions(&self) -> Vec<Jurisdiction> {
        if self.jurisdictions.is_empty() {
            Jurisdiction::ALL.to_vec()
        } else {
            self.jurisdictions.clone()
        }
    }

    /// Buyer kinds per price point under these parameters
    pub fn buyers_per_price(&self) -> usize {
        2 + usize::from(self.include_investors) + usize::from(self.include_foreign)
    }
}

/// Generate the scenario grid
pub fn generate_grid(params: &GridParams) -> Vec<Scenario> {
    let jurisdictions = params.jurisdictions();
    let mut scenarios = Vec::new();

    for &jurisdiction in &jurisdictions {
        let mut price = params.price_min;
        while price <= params.price_max {
            let mut buyers = vec![BuyerProfile::owner_occupier(), BuyerProfile::first_home_buyer()];
            if params.include_investors {
                buyers.push(BuyerProfile {
                    buyer_type: BuyerType::Investor,
                    principal_residence: false,
                    ..BuyerProfile::owner_occupier()
                });
            }
            if params.include_foreign {
                buyers.push(BuyerProfile {
                    residency: Residency::Foreign,
                    ..BuyerProfile::owner_occupier()
                });
            }

            for mut buyer in buyers {
                buyer.needs_loan = true;
                let deposit = price * params.deposit_fraction;
                scenarios.push(Scenario {
                    buyer,
                    property: PropertyProfile::simple(price, jurisdiction),
                    loan: Some(LoanTerms::standard(
                        deposit,
                        params.annual_rate_pct,
                        params.term_years,
                    )),
                    upfront_fees: UpfrontFees::default(),
                    ongoing_fees: OngoingFees::default(),
                });
            }

            price += params.price_step;
        }
    }

    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_size() {
        let params = GridParams::default();
        let scenarios = generate_grid(&params);

        // 8 jurisdictions x 9 price points x 2 buyer kinds
        assert_eq!(scenarios.len(), 8 * 9 * 2);
        assert!(scenarios.iter().all(|s| s.loan.is_some()));
    }

    #[test]
    fn test_single_jurisdiction_with_extras() {
        let params = GridParams {
            jurisdictions: vec![Jurisdiction::Vic],
            include_investors: true,
            include_foreign: true,
            ..GridParams::default()
        };
        let scenarios = generate_grid(&params);
        assert_eq!(scenarios.len(), 9 * 4);
        assert_eq!(params.buyers_per_price(), 4);

        let foreign = scenarios
            .iter()
            .filter(|s| s.buyer.residency == Residency::Foreign)
            .count();
        assert_eq!(foreign, 9);
    }

    #[test]
    fn test_deposit_fraction_applied() {
        let params = GridParams {
            price_min: 500_000.0,
            price_max: 500_000.0,
            ..GridParams::default()
        };
        let scenarios = generate_grid(&params);
        let terms = scenarios[0].loan.as_ref().unwrap();
        assert_eq!(terms.deposit, 100_000.0);
    }
}
