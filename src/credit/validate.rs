//! Field-constraint validation for the wire requests
//!
//! All violated fields are reported together so callers see the complete
//! list at once, not just the first failure.

use super::request::{CreateCreditRequest, CreditRequest};

/// Declared field constraints for a request type.
pub trait Validate {
    /// Returns the violation message for every failed constraint
    /// (empty means the request is valid).
    fn validate(&self) -> Vec<String>;
}

impl Validate for CreditRequest {
    fn validate(&self) -> Vec<String> {
        let mut messages = Vec::new();

        if self.amount_payments == 0 {
            messages.push("The amount of payments must be greater than zero".to_string());
        }
        if !(self.property_value.is_finite() && self.property_value > 0.0) {
            messages.push("The property value must be a positive number".to_string());
        }
        if !(self.loan_amount.is_finite() && self.loan_amount > 0.0) {
            messages.push("The loan amount must be a positive number".to_string());
        }
        if !(self.rate.is_finite() && self.rate >= 0.0) {
            messages.push("The rate must be a non-negative number".to_string());
        }
        if !(self.cok_rate.is_finite() && self.cok_rate >= 0.0) {
            messages.push("The COK rate must be a non-negative number".to_string());
        }
        if !(self.lien_insurance.is_finite() && self.lien_insurance >= 0.0) {
            messages.push("The lien insurance rate must be a non-negative number".to_string());
        }
        if !(self.all_risk_insurance.is_finite() && self.all_risk_insurance >= 0.0) {
            messages.push("The all risk insurance rate must be a non-negative number".to_string());
        }
        if self.interest_rate_type.trim().is_empty() {
            messages.push("The interest rate type is required".to_string());
        }
        if self.currency_name.trim().is_empty() {
            messages.push("The currency name is required".to_string());
        }
        if self.bank_name.trim().is_empty() {
            messages.push("The bank name is required".to_string());
        }

        messages
    }
}

impl Validate for CreateCreditRequest {
    fn validate(&self) -> Vec<String> {
        let mut messages = Vec::new();

        if self.name.trim().is_empty() {
            messages.push("The credit name is required".to_string());
        }
        messages.extend(self.credit.validate());

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::GracePeriod;

    fn sample_request() -> CreditRequest {
        CreditRequest {
            rate: 10.5,
            cok_rate: 20.0,
            amount_payments: 240,
            property_value: 200_000.0,
            loan_amount: 150_000.0,
            lien_insurance: 0.028,
            all_risk_insurance: 0.30,
            is_physical_shipping: true,
            is_good_payer_bonus: false,
            is_green_bonus: false,
            grace_period: GracePeriod::default(),
            interest_rate_type: "effective".to_string(),
            currency_name: "sol".to_string(),
            bank_name: "interbank".to_string(),
        }
    }

    #[test]
    fn test_valid_request_has_no_violations() {
        assert!(sample_request().validate().is_empty());
    }

    #[test]
    fn test_violations_are_aggregated() {
        let mut request = sample_request();
        request.amount_payments = 0;
        request.bank_name = String::new();
        request.rate = -1.0;

        let messages = request.validate();
        assert_eq!(messages.len(), 3);
        assert!(messages.iter().any(|m| m.contains("amount of payments")));
        assert!(messages.iter().any(|m| m.contains("bank name")));
        assert!(messages.iter().any(|m| m.contains("rate must be")));
    }

    #[test]
    fn test_create_request_checks_name_and_terms() {
        let mut credit = sample_request();
        credit.loan_amount = 0.0;
        let create = CreateCreditRequest {
            name: "  ".to_string(),
            user_id: 1,
            credit,
        };

        let messages = create.validate();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("credit name"));
        assert!(messages[1].contains("loan amount"));
    }
}
