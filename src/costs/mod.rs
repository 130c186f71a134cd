//! Upfront and ongoing cost aggregation
//!
//! Composes duty, concessions, grants, surcharge, fees and loan
//! serviceability into one summary. Nothing here assumes a loan exists:
//! a cash purchase sets every loan-derived field to zero
//! deterministically.

use crate::duty;
use crate::eligibility::{resolve_concessions, EligibilityOutcome};
use crate::loan;
use crate::profile::{BuyerProfile, PropertyProfile, Scenario};
use log::debug;
use serde::{Deserialize, Serialize};

// Default fee lines, editable per scenario
pub const DEFAULT_SETTLEMENT_FEE: f64 = 800.0;
pub const DEFAULT_ESTABLISHMENT_FEE: f64 = 600.0;
pub const DEFAULT_LEGAL_FEES: f64 = 1_800.0;
pub const DEFAULT_INSPECTION_FEES: f64 = 600.0;
/// Annual holding-cost defaults
pub const DEFAULT_COUNCIL_RATES: f64 = 2_000.0;
pub const DEFAULT_WATER_RATES: f64 = 1_200.0;

/// Serviceability figures for the modelled loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    /// Price less deposit
    pub loan_amount: f64,

    /// Zero unless LMI is included and the premium table covers the loan
    pub lmi_premium: f64,

    /// Loan amount plus any capitalized LMI premium
    pub financed_amount: f64,

    /// Percentage of total property cost financed
    pub lvr: f64,

    pub monthly_repayment: f64,
    pub total_repayments: f64,
    pub total_interest: f64,
}

/// Complete cost breakdown for one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSummary {
    pub jurisdiction: crate::profile::Jurisdiction,
    pub property_price: f64,

    /// Base transfer duty before concessions
    pub stamp_duty: f64,

    /// Concessions deducted from duty
    pub concessions: Vec<EligibilityOutcome>,

    /// Eligible concessions displaced by a mutually exclusive winner
    pub displaced_concessions: Vec<EligibilityOutcome>,

    pub concession_total: f64,

    /// Duty payable after concessions, never negative
    pub net_state_duty: f64,

    pub foreign_duty: f64,

    /// Surcharge evaluation with its reason, for display
    pub foreign_outcome: EligibilityOutcome,

    pub grants: Vec<EligibilityOutcome>,
    pub grant_total: f64,

    pub land_transfer_fee: f64,
    pub settlement_fee: f64,
    pub establishment_fee: f64,
    pub legal_fees: f64,
    pub inspection_fees: f64,
    pub deposit: f64,

    /// Cash required at settlement, net of grants. May be negative when
    /// grants exceed costs.
    pub total_upfront_costs: f64,

    pub loan: Option<LoanSummary>,

    pub total_monthly_costs: f64,
    pub total_annual_costs: f64,
}

/// Full cost calculation for a scenario
pub fn calculate_costs(scenario: &Scenario) -> CostSummary {
    let buyer = &scenario.buyer;
    let property = &scenario.property;
    let price = property.price;
    let jurisdiction = property.jurisdiction;

    let stamp_duty = duty::stamp_duty(price, jurisdiction);
    let resolution = resolve_concessions(buyer, property, stamp_duty);
    let net_state_duty = (stamp_duty - resolution.total).max(0.0);

    let foreign_outcome = duty::foreign_buyer_outcome(price, jurisdiction, buyer.residency);
    let foreign_duty = if foreign_outcome.eligible { foreign_outcome.amount } else { 0.0 };
    let land_transfer_fee = duty::land_transfer_fee(price, jurisdiction);

    let grant = duty::first_home_grant(buyer, property);
    let grant_total = if grant.eligible { grant.amount } else { 0.0 };

    let legal_fees = scenario.upfront_fees.legal_fees;
    let inspection_fees = scenario.upfront_fees.inspection_fees;
    let (settlement_fee, establishment_fee) = match &scenario.loan {
        Some(terms) => (terms.settlement_fee, terms.establishment_fee),
        None => (0.0, 0.0),
    };

    // Costs paid alongside the price; the LVR denominator uses these
    // before grant netting
    let upfront_excluding_financed = net_state_duty
        + foreign_duty
        + land_transfer_fee
        + settlement_fee
        + establishment_fee
        + legal_fees
        + inspection_fees;

    let (deposit, loan_summary) = match &scenario.loan {
        Some(terms) => {
            let loan_amount = (price - terms.deposit).max(0.0);
            let lmi_premium = if terms.include_lmi {
                loan::lmi_premium(loan_amount, price, upfront_excluding_financed)
            } else {
                0.0
            };
            let financed_amount = loan_amount + lmi_premium;
            let lvr = loan::lvr(financed_amount, price, upfront_excluding_financed);

            let monthly_repayment = loan::monthly_repayment(
                financed_amount,
                terms.annual_rate_pct,
                terms.term_years,
                terms.repayment,
            );
            let total_repayments = loan::total_repayments(
                financed_amount,
                terms.annual_rate_pct,
                terms.term_years,
                terms.repayment,
            );
            let total_interest = loan::total_interest(
                financed_amount,
                terms.annual_rate_pct,
                terms.term_years,
                terms.repayment,
            );

            (
                terms.deposit,
                Some(LoanSummary {
                    loan_amount,
                    lmi_premium,
                    financed_amount,
                    lvr,
                    monthly_repayment,
                    total_repayments,
                    total_interest,
                }),
            )
        }
        None => (0.0, None),
    };

    // Net of grants; intentionally not clamped, so a grant larger than
    // the costs shows as cash back
    let total_upfront_costs = deposit + upfront_excluding_financed - grant_total;

    let monthly_repayment = loan_summary
        .as_ref()
        .map(|l| l.monthly_repayment)
        .unwrap_or(0.0);
    let ongoing = &scenario.ongoing_fees;
    let mut total_monthly_costs =
        monthly_repayment + ongoing.council_rates / 12.0 + ongoing.water_rates / 12.0;
    if property.has_body_corporate() {
        total_monthly_costs += ongoing.body_corporate / 12.0;
    }
    if buyer.is_investor() {
        total_monthly_costs += ongoing.land_tax / 12.0;
    }

    debug!(
        "{} ${:.0}: duty {:.2} net {:.2}, upfront {:.2}",
        jurisdiction, price, stamp_duty, net_state_duty, total_upfront_costs
    );

    CostSummary {
        jurisdiction,
        property_price: price,
        stamp_duty,
        concessions: resolution.applied,
        displaced_concessions: resolution.displaced,
        concession_total: resolution.total,
        net_state_duty,
        foreign_duty,
        foreign_outcome,
        grants: vec![grant],
        grant_total,
        land_transfer_fee,
        settlement_fee,
        establishment_fee,
        legal_fees,
        inspection_fees,
        deposit,
        total_upfront_costs,
        loan: loan_summary,
        total_monthly_costs,
        total_annual_costs: total_monthly_costs * 12.0,
    }
}

/// Cash-purchase summary with default fee lines
pub fn calculate_upfront_costs(buyer: &BuyerProfile, property: &PropertyProfile) -> CostSummary {
    calculate_costs(&Scenario::cash(buyer.clone(), property.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{
        Jurisdiction, LoanTerms, PropertyCategory, PropertyType, Residency, BuyerType,
    };

    #[test]
    fn test_cash_purchase_has_no_loan_figures() {
        let buyer = BuyerProfile::owner_occupier();
        let property = PropertyProfile::simple(500_000.0, Jurisdiction::Nsw);

        let summary = calculate_upfront_costs(&buyer, &property);
        assert!(summary.loan.is_none());
        assert_eq!(summary.deposit, 0.0);
        assert_eq!(summary.settlement_fee, 0.0);
        assert_eq!(summary.establishment_fee, 0.0);
        assert!((summary.total_monthly_costs - (2_000.0 + 1_200.0) / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_nsw_cash_upfront_total() {
        let buyer = BuyerProfile::owner_occupier();
        let property = PropertyProfile::simple(500_000.0, Jurisdiction::Nsw);

        let summary = calculate_upfront_costs(&buyer, &property);
        assert_eq!(summary.stamp_duty, 16_912.0);
        assert_eq!(summary.net_state_duty, 16_912.0);
        let expected = 16_912.0 + 154.20 + DEFAULT_LEGAL_FEES + DEFAULT_INSPECTION_FEES;
        assert!((summary.total_upfront_costs - expected).abs() < 1e-9);
    }

    #[test]
    fn test_grant_can_exceed_costs() {
        // TAS pays a $30,000 grant on new homes with no price cap
        let buyer = BuyerProfile::first_home_buyer();
        let mut property = PropertyProfile::simple(100_000.0, Jurisdiction::Tas);
        property.property_type = PropertyType::NewBuild;

        let summary = calculate_upfront_costs(&buyer, &property);
        assert_eq!(summary.grant_total, 30_000.0);
        assert!(summary.total_upfront_costs < 0.0);
    }

    #[test]
    fn test_foreign_buyer_surcharge_included() {
        let mut buyer = BuyerProfile::owner_occupier();
        buyer.residency = Residency::Foreign;
        let property = PropertyProfile::simple(500_000.0, Jurisdiction::Vic);

        let summary = calculate_upfront_costs(&buyer, &property);
        assert_eq!(summary.foreign_duty, 40_000.0);
        assert_eq!(summary.stamp_duty, 25_070.0);
        // Surcharge is not reduced by any concession
        assert!(summary.total_upfront_costs > 40_000.0);
    }

    #[test]
    fn test_loan_summary_fields() {
        let buyer = BuyerProfile::owner_occupier();
        let property = PropertyProfile::simple(500_000.0, Jurisdiction::Nsw);
        let scenario = Scenario {
            loan: Some(LoanTerms::standard(100_000.0, 6.0, 30)),
            ..Scenario::cash(buyer, property)
        };

        let summary = calculate_costs(&scenario);
        let loan = summary.loan.expect("loan summary");
        assert_eq!(loan.loan_amount, 400_000.0);
        assert_eq!(loan.lmi_premium, 0.0);
        assert_eq!(loan.financed_amount, 400_000.0);
        assert!(loan.monthly_repayment > 0.0);
        // Amortization identity
        assert_eq!(loan.total_repayments, loan.monthly_repayment * 360.0);
        assert!((loan.total_interest - (loan.total_repayments - 400_000.0)).abs() < 1e-6);
        assert_eq!(summary.deposit, 100_000.0);
        assert_eq!(summary.settlement_fee, DEFAULT_SETTLEMENT_FEE);
    }

    #[test]
    fn test_capitalized_lmi_raises_lvr() {
        let buyer = BuyerProfile::owner_occupier();
        let property = PropertyProfile::simple(400_000.0, Jurisdiction::Qld);
        let mut terms = LoanTerms::standard(30_000.0, 6.0, 30);
        terms.include_lmi = true;
        let scenario = Scenario {
            loan: Some(terms),
            ..Scenario::cash(buyer, property)
        };

        let summary = calculate_costs(&scenario);
        let loan = summary.loan.expect("loan summary");
        assert!(loan.lmi_premium > 0.0);
        assert_eq!(loan.financed_amount, loan.loan_amount + loan.lmi_premium);
        // Capitalizing the premium pushes the ratio above the raw
        // loan-to-cost ratio
        let raw_lvr = crate::loan::lvr(
            loan.loan_amount,
            400_000.0,
            summary.net_state_duty
                + summary.land_transfer_fee
                + summary.settlement_fee
                + summary.establishment_fee
                + summary.legal_fees
                + summary.inspection_fees,
        );
        assert!(loan.lvr > raw_lvr);
    }

    #[test]
    fn test_body_corporate_and_land_tax_gating() {
        let mut buyer = BuyerProfile::owner_occupier();
        let mut property = PropertyProfile::simple(500_000.0, Jurisdiction::Nsw);
        let mut scenario = Scenario::cash(buyer.clone(), property.clone());
        scenario.ongoing_fees.body_corporate = 4_800.0;
        scenario.ongoing_fees.land_tax = 2_400.0;

        // House, owner-occupier: neither applies
        let base = calculate_costs(&scenario).total_monthly_costs;

        // Apartment: body corporate applies
        property.category = PropertyCategory::Apartment;
        scenario.property = property.clone();
        let with_bc = calculate_costs(&scenario).total_monthly_costs;
        assert!((with_bc - base - 400.0).abs() < 1e-9);

        // Investor: land tax applies too
        buyer.buyer_type = BuyerType::Investor;
        buyer.principal_residence = false;
        scenario.buyer = buyer;
        let with_land_tax = calculate_costs(&scenario).total_monthly_costs;
        assert!((with_land_tax - with_bc - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_net_duty_never_negative() {
        let buyer = BuyerProfile::first_home_buyer();
        for j in Jurisdiction::ALL {
            let mut price = 50_000.0;
            while price <= 1_200_000.0 {
                let property = PropertyProfile::simple(price, j);
                let summary = calculate_upfront_costs(&buyer, &property);
                assert!(summary.net_state_duty >= 0.0, "{} at {}", j, price);
                assert!(summary.concession_total <= summary.stamp_duty + 1e-9);
                price += 100_000.0;
            }
        }
    }
}
