//! Interest rate conversions
//!
//! Banking convention here is a 360-day year with 30-day months. Nominal
//! rates compound daily over that base, and the monthly effective rate is
//! derived through the daily rate rather than directly from the annual
//! rate. The COK discount rate is the exception: it converts straight from
//! annual to monthly.

/// Days in the nominal compounding year (banking convention).
const DAYS_PER_YEAR: f64 = 360.0;

/// Days in a schedule month.
const DAYS_PER_MONTH: f64 = 30.0;

/// Convert a nominal annual rate (percent) to an effective annual rate
/// (percent), assuming daily compounding over the 360-day base.
pub fn nominal_to_effective_annual(nominal_pct: f64) -> f64 {
    ((1.0 + nominal_pct / 100.0 / DAYS_PER_YEAR).powf(DAYS_PER_YEAR) - 1.0) * 100.0
}

/// Convert an effective annual rate (percent) to the monthly effective rate
/// (fraction, not percent).
///
/// Derives the daily effective rate first and compounds it to 30 days. The
/// two-step path differs slightly from a direct annual-to-monthly
/// conversion and matches the bank's published schedules, so it must not be
/// collapsed.
pub fn annual_to_monthly_effective(annual_pct: f64) -> f64 {
    let daily = (1.0 + annual_pct / 100.0).powf(1.0 / DAYS_PER_YEAR) - 1.0;
    (1.0 + daily).powf(DAYS_PER_MONTH) - 1.0
}

/// Convert the annual opportunity cost of capital (percent) to the monthly
/// discount rate (fraction). Direct monthly compounding, no daily step.
pub fn annual_to_monthly_cok(cok_pct: f64) -> f64 {
    (1.0 + cok_pct / 100.0).powf(1.0 / 12.0) - 1.0
}
