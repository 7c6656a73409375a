//! Schedule output structures

use serde::{Deserialize, Serialize};

/// A single row of the payment schedule, one per month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePeriod {
    /// Period index, 1..=number_of_payments
    pub period: u32,

    /// Annual effective rate (TEA), percent
    pub annual_rate_pct: f64,

    /// Monthly effective rate (TEM), percent
    pub monthly_rate_pct: f64,

    /// Balance owed at the start of the period
    pub opening_balance: f64,

    /// Principal repaid this period
    pub amortization: f64,

    /// Interest accrued on the opening balance
    pub interest: f64,

    /// Lien insurance charged on the opening balance
    pub lien_insurance: f64,

    /// All-risk insurance charged on the original property value
    pub all_risk_insurance: f64,

    /// Flat physical shipping commission
    pub commission: f64,

    /// Total installment: level fee plus all-risk insurance and commission
    pub total_fee: f64,
}

/// Complete payment schedule with the NPV of the operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Monthly rows, chronological, `period` strictly increasing from 1
    pub periods: Vec<SchedulePeriod>,

    /// Net present value of the operation, discounted at the monthly COK
    pub net_present_value: f64,

    /// Internal rate of return. Not computed in this version; always 0.00.
    pub internal_rate_of_return: f64,
}

impl ScheduleResult {
    /// Get summary totals over the whole schedule
    pub fn summary(&self) -> ScheduleSummary {
        let total_amortization: f64 = self.periods.iter().map(|p| p.amortization).sum();
        let total_interest: f64 = self.periods.iter().map(|p| p.interest).sum();
        let total_lien_insurance: f64 = self.periods.iter().map(|p| p.lien_insurance).sum();
        let total_all_risk_insurance: f64 =
            self.periods.iter().map(|p| p.all_risk_insurance).sum();
        let total_commission: f64 = self.periods.iter().map(|p| p.commission).sum();
        let total_fees: f64 = self.periods.iter().map(|p| p.total_fee).sum();

        ScheduleSummary {
            total_periods: self.periods.len() as u32,
            total_amortization,
            total_interest,
            total_lien_insurance,
            total_all_risk_insurance,
            total_commission,
            total_fees,
        }
    }
}

/// Summary totals for a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_periods: u32,
    pub total_amortization: f64,
    pub total_interest: f64,
    pub total_lien_insurance: f64,
    pub total_all_risk_insurance: f64,
    pub total_commission: f64,
    pub total_fees: f64,
}
