//! Bonus-driven loan amount adjustments
//!
//! Applies the good payer and green bonus programs to the requested loan
//! amount and enforces the bank's loan-to-value policy band. The caller's
//! request is never mutated; adjustment derives a new request value.

use log::debug;

use crate::credit::{InterestRateKind, ScheduleRequest};
use crate::error::{CreditError, CreditResult};
use crate::rates::nominal_to_effective_annual;

/// Flat reduction applied by the green bonus program.
const GREEN_BONUS_REDUCTION: f64 = 5_400.0;

/// Lower policy bound: loan must cover at least 7.5% of property value.
const POLICY_FLOOR_PCT: f64 = 0.075;

/// Upper policy bound: loan must not exceed 90% of property value.
const POLICY_CEILING_PCT: f64 = 0.9;

/// Good payer bonus reduction for a property value.
///
/// Bracket bounds are strict on both sides: a property valued exactly at a
/// bound receives no reduction. The program table is published with
/// exclusive bounds and schedules must reproduce it as-is, gaps included.
pub fn good_payer_reduction(property_value: f64) -> f64 {
    if property_value > 65_200.0 && property_value < 93_100.0 {
        25_700.0
    } else if property_value > 93_100.0 && property_value < 139_400.0 {
        214_000.0
    } else if property_value > 139_400.0 && property_value < 232_200.0 {
        19_600.0
    } else if property_value > 232_200.0 && property_value < 343_900.0 {
        10_800.0
    } else {
        0.0
    }
}

/// Apply rate normalization and the bonus programs, returning the adjusted
/// request the schedule engine runs on.
///
/// Ordering is fixed by the bank's rules:
/// 1. A nominal rate is replaced with its effective conversion.
/// 2. The good payer reduction is subtracted from the loan amount.
/// 3. The loan-to-value band (7.5%-90% of property value) is checked.
/// 4. The green bonus is subtracted, after the band check. It can push the
///    amount below the 7.5% floor without re-validation.
pub fn adjust(request: &ScheduleRequest) -> CreditResult<ScheduleRequest> {
    let mut adjusted = request.clone();

    if adjusted.interest_rate_kind == InterestRateKind::Nominal {
        adjusted.annual_rate_pct = nominal_to_effective_annual(adjusted.annual_rate_pct);
        adjusted.interest_rate_kind = InterestRateKind::Effective;
    }

    if adjusted.has_good_payer_bonus {
        let reduction = good_payer_reduction(adjusted.property_value);
        adjusted.loan_amount -= reduction;
        debug!(
            "good payer reduction {:.2}, loan amount now {:.2}",
            reduction, adjusted.loan_amount
        );
    }

    let floor = adjusted.property_value * POLICY_FLOOR_PCT;
    let ceiling = adjusted.property_value * POLICY_CEILING_PCT;
    if adjusted.loan_amount > ceiling || adjusted.loan_amount < floor {
        return Err(CreditError::OutOfPolicyRange {
            loan_amount: adjusted.loan_amount,
            property_value: adjusted.property_value,
        });
    }

    if adjusted.has_green_bonus {
        adjusted.loan_amount -= GREEN_BONUS_REDUCTION;
    }

    Ok(adjusted)
}
