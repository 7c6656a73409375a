//! Request data structures for schedule computation and credit registration

use serde::{Deserialize, Serialize};

use crate::error::{CreditError, CreditResult};

/// Kind of annual interest rate quoted on a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestRateKind {
    /// Nominal rate, compounded daily over a 360-day base
    Nominal,
    /// Effective annual rate, usable as-is
    Effective,
}

impl InterestRateKind {
    /// Parse a rate type name as stored in the reference data
    /// ("nominal" / "effective", case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("nominal") {
            Some(InterestRateKind::Nominal)
        } else if name.eq_ignore_ascii_case("effective") {
            Some(InterestRateKind::Effective)
        } else {
            None
        }
    }
}

/// Grace period metadata.
///
/// Carried on requests and stored records but not consulted by the schedule
/// loop in this version; every emitted period amortizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GracePeriod {
    /// Total grace: neither interest nor principal is paid
    pub is_total: bool,
    /// Partial grace: interest is paid, principal is deferred
    pub is_partial: bool,
    /// Length of the deferral window in months
    pub months: u32,
}

/// Validated input for the schedule engine.
///
/// Immutable once constructed; the loan adjuster derives a new value rather
/// than mutating the caller's request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Annual interest rate, percent (nominal or effective per `interest_rate_kind`)
    pub annual_rate_pct: f64,
    /// Annual opportunity cost of capital, percent (NPV discount rate)
    pub cok_rate_pct: f64,
    /// Number of monthly payments
    pub number_of_payments: u32,
    /// Appraised property value
    pub property_value: f64,
    /// Requested loan amount
    pub loan_amount: f64,
    /// Annual lien (mortgage relief) insurance rate, percent
    pub lien_insurance_pct: f64,
    /// Annual all-risk insurance rate, percent
    pub all_risk_insurance_pct: f64,
    /// Whether schedule documents ship physically (flat monthly commission)
    pub has_physical_shipping: bool,
    /// Good payer program bonus
    pub has_good_payer_bonus: bool,
    /// Green (sustainable housing) program bonus
    pub has_green_bonus: bool,
    /// How to interpret `annual_rate_pct`
    pub interest_rate_kind: InterestRateKind,
}

impl ScheduleRequest {
    /// Create a request, rejecting out-of-domain amounts at the boundary.
    ///
    /// All violations are reported together in a single
    /// [`CreditError::Validation`].
    pub fn new(
        annual_rate_pct: f64,
        cok_rate_pct: f64,
        number_of_payments: u32,
        property_value: f64,
        loan_amount: f64,
        lien_insurance_pct: f64,
        all_risk_insurance_pct: f64,
        has_physical_shipping: bool,
        has_good_payer_bonus: bool,
        has_green_bonus: bool,
        interest_rate_kind: InterestRateKind,
    ) -> CreditResult<Self> {
        let request = Self {
            annual_rate_pct,
            cok_rate_pct,
            number_of_payments,
            property_value,
            loan_amount,
            lien_insurance_pct,
            all_risk_insurance_pct,
            has_physical_shipping,
            has_good_payer_bonus,
            has_green_bonus,
            interest_rate_kind,
        };

        let messages = request.field_violations();
        if messages.is_empty() {
            Ok(request)
        } else {
            Err(CreditError::Validation { messages })
        }
    }

    /// Violated numeric constraints, one message per field.
    pub(crate) fn field_violations(&self) -> Vec<String> {
        let mut messages = Vec::new();

        if self.number_of_payments == 0 {
            messages.push("The amount of payments must be greater than zero".to_string());
        }
        if !(self.property_value.is_finite() && self.property_value > 0.0) {
            messages.push("The property value must be a positive number".to_string());
        }
        if !(self.loan_amount.is_finite() && self.loan_amount > 0.0) {
            messages.push("The loan amount must be a positive number".to_string());
        }
        if !(self.annual_rate_pct.is_finite() && self.annual_rate_pct >= 0.0) {
            messages.push("The rate must be a non-negative number".to_string());
        }
        if !(self.cok_rate_pct.is_finite() && self.cok_rate_pct >= 0.0) {
            messages.push("The COK rate must be a non-negative number".to_string());
        }
        if !(self.lien_insurance_pct.is_finite() && self.lien_insurance_pct >= 0.0) {
            messages.push("The lien insurance rate must be a non-negative number".to_string());
        }
        if !(self.all_risk_insurance_pct.is_finite() && self.all_risk_insurance_pct >= 0.0) {
            messages.push("The all risk insurance rate must be a non-negative number".to_string());
        }

        messages
    }
}

/// Service-level schedule request carrying the reference names the service
/// resolves before computing (rate type, currency, bank).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRequest {
    /// Annual interest rate, percent
    pub rate: f64,
    /// Annual opportunity cost of capital, percent
    pub cok_rate: f64,
    /// Number of monthly payments
    pub amount_payments: u32,
    /// Appraised property value
    pub property_value: f64,
    /// Requested loan amount
    pub loan_amount: f64,
    /// Annual lien insurance rate, percent
    pub lien_insurance: f64,
    /// Annual all-risk insurance rate, percent
    pub all_risk_insurance: f64,
    /// Whether schedule documents ship physically
    pub is_physical_shipping: bool,
    /// Good payer program bonus
    pub is_good_payer_bonus: bool,
    /// Green program bonus
    pub is_green_bonus: bool,
    /// Grace period metadata (not applied by the schedule loop)
    #[serde(default)]
    pub grace_period: GracePeriod,
    /// Name of the interest rate type, resolved via reference data
    pub interest_rate_type: String,
    /// Name of the currency, resolved via reference data
    pub currency_name: String,
    /// Name of the bank, resolved via reference data
    pub bank_name: String,
}

impl CreditRequest {
    /// Build the engine input once the rate kind has been resolved.
    pub fn to_schedule_request(&self, kind: InterestRateKind) -> ScheduleRequest {
        ScheduleRequest {
            annual_rate_pct: self.rate,
            cok_rate_pct: self.cok_rate,
            number_of_payments: self.amount_payments,
            property_value: self.property_value,
            loan_amount: self.loan_amount,
            lien_insurance_pct: self.lien_insurance,
            all_risk_insurance_pct: self.all_risk_insurance,
            has_physical_shipping: self.is_physical_shipping,
            has_good_payer_bonus: self.is_good_payer_bonus,
            has_green_bonus: self.is_green_bonus,
            interest_rate_kind: kind,
        }
    }
}

/// Request to register a credit for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCreditRequest {
    /// Display name of the credit, unique per user
    pub name: String,
    /// Owning user id
    pub user_id: u64,
    /// Financial terms of the credit
    pub credit: CreditRequest,
}
