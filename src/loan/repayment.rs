//! Amortized repayment and total-cost math
//!
//! Standard amortization for principal-and-interest loans with an
//! interest-only variant: during the interest-only window the payment
//! covers interest alone, and the remaining years amortize the original
//! principal (the balance is not reduced by the interest-only phase).

use crate::profile::RepaymentType;

/// Monthly rate from an annual percentage, e.g. 6.0 -> 0.005
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Fully amortized monthly payment: `P*r*(1+r)^n / ((1+r)^n - 1)`.
/// A zero rate degenerates to straight-line principal repayment.
pub fn amortized_payment(principal: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    if !(principal > 0.0) || term_years == 0 {
        return 0.0;
    }

    let months = (term_years * 12) as f64;
    let r = monthly_rate(annual_rate_pct);
    if r == 0.0 {
        return principal / months;
    }

    let growth = (1.0 + r).powf(months);
    principal * r * growth / (growth - 1.0)
}

/// Monthly repayment for the loan's current phase: the amortized payment
/// for principal-and-interest loans, the interest-only payment while an
/// interest-only window is in force.
pub fn monthly_repayment(
    principal: f64,
    annual_rate_pct: f64,
    term_years: u32,
    repayment: RepaymentType,
) -> f64 {
    if !(principal > 0.0) || term_years == 0 {
        return 0.0;
    }

    match repayment {
        RepaymentType::PrincipalAndInterest => {
            amortized_payment(principal, annual_rate_pct, term_years)
        }
        RepaymentType::InterestOnly { years: 0 } => {
            amortized_payment(principal, annual_rate_pct, term_years)
        }
        RepaymentType::InterestOnly { .. } => principal * monthly_rate(annual_rate_pct),
    }
}

/// Total of all repayments over the loan's life.
///
/// Principal-and-interest: exactly `monthly * years * 12`. A partial
/// interest-only period contributes its own payments, then the original
/// principal amortizes over the remaining years. An interest-only window
/// covering the whole term makes the loan interest-only for its life.
pub fn total_repayments(
    principal: f64,
    annual_rate_pct: f64,
    term_years: u32,
    repayment: RepaymentType,
) -> f64 {
    if !(principal > 0.0) || term_years == 0 {
        return 0.0;
    }

    match repayment {
        RepaymentType::PrincipalAndInterest | RepaymentType::InterestOnly { years: 0 } => {
            amortized_payment(principal, annual_rate_pct, term_years) * (term_years * 12) as f64
        }
        RepaymentType::InterestOnly { years } if years >= term_years => {
            principal * monthly_rate(annual_rate_pct) * (term_years * 12) as f64
        }
        RepaymentType::InterestOnly { years } => {
            let io_total = principal * monthly_rate(annual_rate_pct) * (years * 12) as f64;
            let remaining_years = term_years - years;
            let amortized = amortized_payment(principal, annual_rate_pct, remaining_years);
            io_total + amortized * (remaining_years * 12) as f64
        }
    }
}

/// Interest component of the loan's lifetime cost
pub fn total_interest(
    principal: f64,
    annual_rate_pct: f64,
    term_years: u32,
    repayment: RepaymentType,
) -> f64 {
    let total = total_repayments(principal, annual_rate_pct, term_years, repayment);
    if total <= 0.0 {
        return 0.0;
    }
    total - principal
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_amortized_payment_reference() {
        // $400,000 at 6% over 30 years: the standard reference figure
        let payment = amortized_payment(400_000.0, 6.0, 30);
        assert_relative_eq!(payment, 2_398.20, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_straight_line() {
        let payment = amortized_payment(360_000.0, 0.0, 30);
        assert_eq!(payment, 1_000.0);
    }

    #[test]
    fn test_amortization_identity() {
        // total == monthly * years * 12, exactly
        let principal = 525_000.0;
        let monthly = monthly_repayment(principal, 5.75, 25, RepaymentType::PrincipalAndInterest);
        let total = total_repayments(principal, 5.75, 25, RepaymentType::PrincipalAndInterest);
        assert_eq!(total, monthly * 25.0 * 12.0);
    }

    #[test]
    fn test_interest_only_payment() {
        // 6% annual on $400,000 is $2,000/month interest
        let payment =
            monthly_repayment(400_000.0, 6.0, 30, RepaymentType::InterestOnly { years: 5 });
        assert_relative_eq!(payment, 2_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_interest_only_zero_years_is_pi() {
        let io = monthly_repayment(400_000.0, 6.0, 30, RepaymentType::InterestOnly { years: 0 });
        let pi = monthly_repayment(400_000.0, 6.0, 30, RepaymentType::PrincipalAndInterest);
        assert_eq!(io, pi);
    }

    #[test]
    fn test_partial_interest_only_composition() {
        let principal = 400_000.0;
        let rate = 6.0;

        let total = total_repayments(principal, rate, 30, RepaymentType::InterestOnly { years: 5 });
        let io_phase = 2_000.0 * 60.0;
        let amortized_phase = amortized_payment(principal, rate, 25) * 300.0;
        assert_relative_eq!(total, io_phase + amortized_phase, epsilon = 1e-6);
    }

    #[test]
    fn test_whole_of_life_interest_only() {
        // Window at or beyond the term: interest-only for the life of
        // the loan
        let total =
            total_repayments(400_000.0, 6.0, 30, RepaymentType::InterestOnly { years: 30 });
        assert_relative_eq!(total, 2_000.0 * 360.0, epsilon = 1e-9);

        let beyond =
            total_repayments(400_000.0, 6.0, 30, RepaymentType::InterestOnly { years: 40 });
        assert_eq!(total, beyond);
    }

    #[test]
    fn test_total_interest() {
        let interest =
            total_interest(400_000.0, 6.0, 30, RepaymentType::PrincipalAndInterest);
        // 2398.20 * 360 - 400000
        assert_relative_eq!(interest, 463_352.76, epsilon = 5.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(amortized_payment(0.0, 6.0, 30), 0.0);
        assert_eq!(amortized_payment(-5_000.0, 6.0, 30), 0.0);
        assert_eq!(
            total_repayments(400_000.0, 6.0, 0, RepaymentType::PrincipalAndInterest),
            0.0
        );
        assert_eq!(
            total_interest(0.0, 6.0, 30, RepaymentType::PrincipalAndInterest),
            0.0
        );
    }
}
