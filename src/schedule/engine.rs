//! Core schedule engine for monthly payment computation
//!
//! Builds the period-by-period amortization table using the bank's level
//! payment (French) formula and accumulates the NPV of the operation
//! against the monthly COK.

use log::debug;

use super::rows::{SchedulePeriod, ScheduleResult};
use crate::credit::ScheduleRequest;
use crate::rates::{annual_to_monthly_cok, annual_to_monthly_effective};

/// Flat monthly commission charged when schedule documents ship physically.
const PHYSICAL_SHIPPING_FEE: f64 = 11.00;

/// Round to two decimals, ties away from zero.
///
/// Display values only; the running balance and the NPV accumulate at full
/// precision and the NPV is rounded once at the end.
fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Present value of a cash flow discounted `period` months at the monthly COK.
fn present_value(period: u32, monthly_cok: f64, flow: f64) -> f64 {
    flow / (1.0 + monthly_cok).powf(period as f64)
}

/// Builds payment schedules from adjusted requests.
///
/// Expects its input to have passed through the loan adjuster: the annual
/// rate must already be effective and the bonus reductions applied.
pub struct ScheduleEngine;

impl ScheduleEngine {
    /// Build the full schedule for a request.
    pub fn build(request: &ScheduleRequest) -> ScheduleResult {
        let n = request.number_of_payments;
        let monthly_cok = annual_to_monthly_cok(request.cok_rate_pct);
        let monthly_effective = annual_to_monthly_effective(request.annual_rate_pct);

        // Lien insurance is priced as a surcharge on the monthly rate so the
        // level fee covers it; all-risk insurance and shipping ride on top of
        // the fee as constant monthly amounts.
        let monthly_interest_rate = monthly_effective + request.lien_insurance_pct / 100.0;
        let monthly_all_risk =
            request.property_value * (request.all_risk_insurance_pct / 100.0) / 12.0;
        let monthly_shipping = if request.has_physical_shipping {
            PHYSICAL_SHIPPING_FEE
        } else {
            0.0
        };

        let mut balance = request.loan_amount;

        // Period 0 cash flow: the disbursement itself, discount factor 1
        let mut npv = present_value(0, monthly_cok, request.loan_amount);

        let mut periods = Vec::with_capacity(n as usize);
        for i in 0..n {
            let interest = balance * monthly_effective;
            let lien_insurance = balance * (request.lien_insurance_pct / 100.0);

            // Level payment re-derived each period from the remaining
            // balance and remaining term. It is mathematically constant
            // across periods, but the per-period recomputation pins down
            // the rounding of the emitted rows.
            let remaining = n - i;
            let fee = balance * monthly_interest_rate
                / (1.0 - (1.0 + monthly_interest_rate).powf(-(remaining as f64)));

            let amortization = fee - interest - lien_insurance;
            let total_fee = fee + monthly_all_risk + monthly_shipping;

            periods.push(SchedulePeriod {
                period: i + 1,
                annual_rate_pct: round_two(request.annual_rate_pct),
                monthly_rate_pct: round_two(monthly_effective * 100.0),
                opening_balance: round_two(balance),
                amortization: round_two(amortization),
                interest: round_two(interest),
                lien_insurance: round_two(lien_insurance),
                all_risk_insurance: round_two(monthly_all_risk),
                commission: round_two(monthly_shipping),
                total_fee: round_two(total_fee),
            });

            balance -= amortization;
            npv += present_value(i + 1, monthly_cok, -fee - monthly_all_risk - monthly_shipping);
        }

        debug!("schedule built: {} periods, npv {:.2}", periods.len(), npv);

        ScheduleResult {
            periods,
            net_present_value: round_two(npv),
            // IRR of the operation is a stated future extension; the field
            // is emitted but never computed here.
            internal_rate_of_return: 0.0,
        }
    }
}
