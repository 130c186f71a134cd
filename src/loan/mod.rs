//! Loan serviceability: repayments, LVR and mortgage insurance

mod lmi;
mod repayment;

pub use lmi::{lmi_premium, lvr, LOAN_BANDS, LVR_BANDS, LVR_THRESHOLD, MAX_INSURABLE_LOAN};
pub use repayment::{
    amortized_payment, monthly_rate, monthly_repayment, total_interest, total_repayments,
};
