//! Generic progressive-bracket evaluation shared by every jurisdiction
//! schedule
//!
//! Two equivalent forms are provided: a marginal accumulator and a closed
//! form that reads the cumulative fixed fee stored on the bracket
//! containing the price. The closed form requires the continuity
//! invariant: `fixed` at bracket n+1 equals the cumulative duty at
//! bracket n's upper bound. Every published table is unit-tested against
//! that invariant at every boundary.

/// One marginal duty bracket covering `(min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBracket {
    pub min: f64,
    pub max: f64,
    /// Marginal rate applied to the value in excess of `min`
    pub rate: f64,
    /// Cumulative duty at `min`
    pub fixed: f64,
}

/// One stepped concession band covering `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcessionBracket {
    pub min: f64,
    pub max: f64,
    pub amount: f64,
}

/// Marginal accumulator form: walk the brackets in ascending order,
/// taxing `min(remaining, width)` at each bracket's rate.
///
/// Price at or below zero (or non-finite) yields 0, never an error.
pub fn evaluate_brackets(price: f64, brackets: &[RateBracket]) -> f64 {
    if !(price > 0.0) {
        return 0.0;
    }

    let mut remaining = price;
    let mut duty = 0.0;
    for bracket in brackets {
        let width = bracket.max - bracket.min;
        let taxable = remaining.min(width);
        duty += taxable * bracket.rate;
        remaining -= taxable;
        if remaining <= 0.0 {
            break;
        }
    }
    duty
}

/// Closed form: `(price - min) * rate + fixed` on the containing bracket.
///
/// Bracket boundaries are `(min, max]` for every jurisdiction.
pub fn duty_from_table(price: f64, brackets: &[RateBracket]) -> f64 {
    if !(price > 0.0) {
        return 0.0;
    }

    match bracket_for(price, brackets) {
        Some(bracket) => (price - bracket.min) * bracket.rate + bracket.fixed,
        None => 0.0,
    }
}

/// The bracket containing `price` under the `(min, max]` convention.
/// The first bracket also catches prices at or below its `max`.
pub fn bracket_for(price: f64, brackets: &[RateBracket]) -> Option<&RateBracket> {
    brackets
        .iter()
        .find(|b| (price > b.min || b.min == 0.0) && price <= b.max)
}

/// Stepped concession amount for `price` under the `[min, max)` convention
pub fn stepped_amount(price: f64, brackets: &[ConcessionBracket]) -> f64 {
    if !(price >= 0.0) {
        return 0.0;
    }

    brackets
        .iter()
        .find(|b| price >= b.min && price < b.max)
        .map(|b| b.amount)
        .unwrap_or(0.0)
}

/// Largest absolute continuity gap across the table's interior
/// boundaries: `duty(bracket[i].max)` evaluated in each adjacent bracket
/// must agree exactly.
pub fn continuity_gap(brackets: &[RateBracket]) -> f64 {
    let mut worst: f64 = 0.0;
    for pair in brackets.windows(2) {
        let boundary = pair[0].max;
        if !boundary.is_finite() {
            continue;
        }
        let from_lower = (boundary - pair[0].min) * pair[0].rate + pair[0].fixed;
        let from_upper = pair[1].fixed;
        worst = worst.max((from_lower - from_upper).abs());
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_BRACKETS: [RateBracket; 3] = [
        RateBracket { min: 0.0, max: 100_000.0, rate: 0.01, fixed: 0.0 },
        RateBracket { min: 100_000.0, max: 500_000.0, rate: 0.03, fixed: 1_000.0 },
        RateBracket { min: 500_000.0, max: f64::INFINITY, rate: 0.05, fixed: 13_000.0 },
    ];

    #[test]
    fn test_accumulator_and_closed_form_agree() {
        for price in [0.0, 1.0, 50_000.0, 100_000.0, 100_001.0, 499_999.0, 500_000.0, 2_000_000.0] {
            let marginal = evaluate_brackets(price, &TEST_BRACKETS);
            let closed = duty_from_table(price, &TEST_BRACKETS);
            assert!(
                (marginal - closed).abs() < 1e-9,
                "forms disagree at {}: {} vs {}",
                price,
                marginal,
                closed
            );
        }
    }

    #[test]
    fn test_non_positive_price() {
        assert_eq!(evaluate_brackets(0.0, &TEST_BRACKETS), 0.0);
        assert_eq!(evaluate_brackets(-250_000.0, &TEST_BRACKETS), 0.0);
        assert_eq!(duty_from_table(f64::NAN, &TEST_BRACKETS), 0.0);
    }

    #[test]
    fn test_boundary_inclusivity() {
        // (min, max]: the boundary price belongs to the lower bracket
        let at_boundary = bracket_for(100_000.0, &TEST_BRACKETS).unwrap();
        assert_eq!(at_boundary.rate, 0.01);

        let just_above = bracket_for(100_000.01, &TEST_BRACKETS).unwrap();
        assert_eq!(just_above.rate, 0.03);
    }

    #[test]
    fn test_continuity_gap() {
        assert!(continuity_gap(&TEST_BRACKETS) < 1e-9);

        let broken = [
            RateBracket { min: 0.0, max: 100_000.0, rate: 0.01, fixed: 0.0 },
            RateBracket { min: 100_000.0, max: f64::INFINITY, rate: 0.03, fixed: 1_500.0 },
        ];
        assert!((continuity_gap(&broken) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_stepped_amount() {
        let steps = [
            ConcessionBracket { min: 0.0, max: 500_000.0, amount: 8_000.0 },
            ConcessionBracket { min: 500_000.0, max: 550_000.0, amount: 4_000.0 },
            ConcessionBracket { min: 550_000.0, max: f64::INFINITY, amount: 0.0 },
        ];
        assert_eq!(stepped_amount(499_999.0, &steps), 8_000.0);
        assert_eq!(stepped_amount(500_000.0, &steps), 4_000.0);
        assert_eq!(stepped_amount(800_000.0, &steps), 0.0);
        assert_eq!(stepped_amount(-1.0, &steps), 0.0);
    }
}
