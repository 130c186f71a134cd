//! Loan-to-value ratio and lenders mortgage insurance premium lookup
//!
//! The premium is a two-dimensional lookup: an LVR band crossed with a
//! loan-amount band. The published band set is sparse; any combination
//! missing from it prices at zero rather than erroring, and loans over
//! $1M are outside the table entirely.

/// LVR bands `(min, max)` in percent. The last band also catches
/// anything above 95%.
pub static LVR_BANDS: [(f64, f64); 6] = [
    (80.01, 81.0),
    (84.01, 85.0),
    (88.01, 89.0),
    (89.01, 90.0),
    (90.01, 91.0),
    (94.01, 95.0),
];

/// Loan-amount band upper bounds
pub static LOAN_BANDS: [f64; 5] = [300_000.0, 500_000.0, 600_000.0, 750_000.0, 1_000_000.0];

/// Premium rates by LVR band (rows) and loan band (columns)
pub static PREMIUM_RATES: [[f64; 5]; 6] = [
    [0.00475, 0.00568, 0.00904, 0.00904, 0.00913],
    [0.00727, 0.00969, 0.01165, 0.01333, 0.01407],
    [0.01295, 0.01621, 0.01948, 0.02218, 0.02395],
    [0.01463, 0.01873, 0.02180, 0.02367, 0.02516],
    [0.02013, 0.02618, 0.03513, 0.03783, 0.03820],
    [0.02609, 0.03345, 0.03998, 0.04613, 0.04603],
];

/// Premiums apply only above this LVR
pub const LVR_THRESHOLD: f64 = 80.0;

/// Loans above this amount are unsupported by the premium table
pub const MAX_INSURABLE_LOAN: f64 = 1_000_000.0;

/// Loan-to-value ratio as a percentage: the financed amount over the
/// total property cost (price plus unfinanced upfront costs).
pub fn lvr(financed_amount: f64, property_price: f64, upfront_costs: f64) -> f64 {
    let total_cost = property_price + upfront_costs;
    if !(total_cost > 0.0) || !(financed_amount > 0.0) {
        return 0.0;
    }
    financed_amount / total_cost * 100.0
}

/// Row index for an LVR, if the table covers it
fn lvr_band_index(lvr_pct: f64) -> Option<usize> {
    if lvr_pct > 95.0 {
        return Some(LVR_BANDS.len() - 1);
    }
    LVR_BANDS
        .iter()
        .position(|&(min, max)| lvr_pct >= min && lvr_pct <= max)
}

/// Column index for a loan amount, if insurable
fn loan_band_index(loan_amount: f64) -> Option<usize> {
    LOAN_BANDS.iter().position(|&cap| loan_amount <= cap)
}

/// LMI premium for a loan: zero at or below the 80% threshold, zero for
/// loans the table does not cover.
pub fn lmi_premium(loan_amount: f64, property_price: f64, upfront_costs: f64) -> f64 {
    if !(loan_amount > 0.0) || loan_amount > MAX_INSURABLE_LOAN {
        return 0.0;
    }

    let ratio = lvr(loan_amount, property_price, upfront_costs);
    if ratio <= LVR_THRESHOLD {
        return 0.0;
    }

    match (lvr_band_index(ratio), loan_band_index(loan_amount)) {
        (Some(row), Some(col)) => loan_amount * PREMIUM_RATES[row][col],
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lvr() {
        assert_relative_eq!(lvr(380_000.0, 400_000.0, 20_000.0), 90.47619, epsilon = 1e-4);
        assert_eq!(lvr(380_000.0, 0.0, 0.0), 0.0);
        assert_eq!(lvr(0.0, 400_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_reference_premium() {
        // LVR 90.476% -> band 90.01-91; $380,000 -> band 300K-500K
        let premium = lmi_premium(380_000.0, 400_000.0, 20_000.0);
        assert_relative_eq!(premium, 380_000.0 * 0.02618, epsilon = 1e-6);
        assert_relative_eq!(premium, 9_948.40, epsilon = 0.01);
    }

    #[test]
    fn test_zero_at_or_below_threshold() {
        // 80% exactly
        assert_eq!(lmi_premium(320_000.0, 400_000.0, 0.0), 0.0);
        // Well below
        assert_eq!(lmi_premium(200_000.0, 400_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_gap_between_bands_prices_at_zero() {
        // LVR 83%: between the 80.01-81 and 84.01-85 bands
        assert_eq!(lvr(332_000.0, 400_000.0, 0.0), 83.0);
        assert_eq!(lmi_premium(332_000.0, 400_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_above_95_catches_last_band() {
        // LVR 96%
        let premium = lmi_premium(384_000.0, 400_000.0, 0.0);
        assert_relative_eq!(premium, 384_000.0 * 0.03345, epsilon = 1e-6);
    }

    #[test]
    fn test_jumbo_loans_unsupported() {
        assert_eq!(lmi_premium(1_100_000.0, 1_200_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_rates_increase_with_lvr_and_loan_size() {
        for col in 0..LOAN_BANDS.len() {
            for row in 1..LVR_BANDS.len() {
                assert!(PREMIUM_RATES[row][col] >= PREMIUM_RATES[row - 1][col]);
            }
        }
    }
}
