//! Credit service orchestrator
//!
//! Validates requests, resolves reference data, runs the loan adjustment
//! and the schedule engine, and fronts the credit store for the CRUD
//! operations. Everything is synchronous and one-shot: errors go straight
//! back to the caller.

use chrono::Utc;
use log::{debug, info};

use crate::adjust;
use crate::credit::{CreateCreditRequest, CreditRequest, Validate};
use crate::error::{CreditError, CreditResult};
use crate::schedule::{ScheduleEngine, ScheduleResult};
use crate::store::{CreditRecord, CreditStore, LookupResolver};

/// Orchestrates schedule computation and credit CRUD over the collaborator
/// seams.
pub struct CreditService<L, S> {
    lookups: L,
    store: S,
}

impl<L: LookupResolver, S: CreditStore> CreditService<L, S> {
    pub fn new(lookups: L, store: S) -> Self {
        Self { lookups, store }
    }

    /// Compute the payment schedule for a credit request.
    ///
    /// The sole pure entry point: field validation, rate type resolution,
    /// bonus adjustment and the engine run, with no writes anywhere.
    pub fn payment_schedule(&self, request: &CreditRequest) -> CreditResult<ScheduleResult> {
        let violations = request.validate();
        if !violations.is_empty() {
            return Err(CreditError::Validation {
                messages: violations,
            });
        }

        let kind = self
            .lookups
            .rate_kind(&request.interest_rate_type)
            .ok_or_else(|| CreditError::NotFound("Interested rate doesn't exist".to_string()))?;

        let adjusted = adjust::adjust(&request.to_schedule_request(kind))?;
        debug!(
            "schedule request adjusted: rate {:.4}%, loan amount {:.2}",
            adjusted.annual_rate_pct, adjusted.loan_amount
        );

        Ok(ScheduleEngine::build(&adjusted))
    }

    /// Register a credit for a user after validating the request and
    /// resolving every referenced record.
    pub fn create(&mut self, request: &CreateCreditRequest) -> CreditResult<String> {
        let violations = request.validate();
        if !violations.is_empty() {
            return Err(CreditError::Validation {
                messages: violations,
            });
        }

        let user = self
            .lookups
            .user(request.user_id)
            .ok_or_else(|| CreditError::NotFound("User doesn't exist".to_string()))?;
        self.lookups
            .rate_kind(&request.credit.interest_rate_type)
            .ok_or_else(|| CreditError::NotFound("Interested rate doesn't exist".to_string()))?;
        let currency = self
            .lookups
            .currency(&request.credit.currency_name)
            .ok_or_else(|| CreditError::NotFound("Currency doesn't exist".to_string()))?;
        let bank = self
            .lookups
            .bank(&request.credit.bank_name)
            .ok_or_else(|| CreditError::NotFound("Bank doesn't exist".to_string()))?;

        let duplicate = self
            .store
            .find_by_user(user.id)
            .iter()
            .any(|c| c.name == request.name);
        if duplicate {
            return Err(CreditError::NotFound(format!(
                "Credit with {} already exists",
                request.name
            )));
        }

        let record = CreditRecord {
            id: 0,
            name: request.name.clone(),
            user_id: user.id,
            rate: request.credit.rate,
            amount_payments: request.credit.amount_payments,
            loan_amount: request.credit.loan_amount,
            property_value: request.credit.property_value,
            lien_insurance: request.credit.lien_insurance,
            all_risk_insurance: request.credit.all_risk_insurance,
            is_physical_shipping: request.credit.is_physical_shipping,
            is_good_payer_bonus: request.credit.is_good_payer_bonus,
            is_green_bonus: request.credit.is_green_bonus,
            grace_period: request.credit.grace_period,
            interest_rate_type: request.credit.interest_rate_type.clone(),
            currency_name: currency.name,
            bank_name: bank.name,
            created_at: Utc::now(),
        };

        let id = self.store.save(record).map_err(CreditError::OperationFailed)?;
        info!("credit '{}' saved with id {}", request.name, id);

        Ok("Credit data saved successfully!!".to_string())
    }

    /// List the credits registered for a user.
    pub fn credits_by_user(&self, user_id: u64) -> CreditResult<Vec<CreditRecord>> {
        if self.lookups.user(user_id).is_none() {
            return Err(CreditError::NotFound(format!(
                "User with id {} doesn't exist in the database",
                user_id
            )));
        }

        Ok(self.store.find_by_user(user_id))
    }

    /// Delete a credit by id.
    pub fn delete_credit(&mut self, id: u64) -> CreditResult<String> {
        if !self.store.exists(id) {
            return Err(CreditError::NotFound(format!(
                "Credit with id {} doesn't exist in the database",
                id
            )));
        }

        self.store.delete(id).map_err(CreditError::OperationFailed)?;
        info!("credit {} deleted", id);

        Ok("Credit deleted successfully!!".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::GracePeriod;
    use crate::store::{InMemoryCreditStore, StaticLookups};

    fn service() -> CreditService<StaticLookups, InMemoryCreditStore> {
        let mut lookups = StaticLookups::with_defaults();
        lookups.add_user(1, "Carlos");
        CreditService::new(lookups, InMemoryCreditStore::new())
    }

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

    fn create_request(name: &str) -> CreateCreditRequest {
        CreateCreditRequest {
            name: name.to_string(),
            user_id: 1,
            credit: sample_request(),
        }
    }

    #[test]
    fn test_payment_schedule_end_to_end() {
        let result = service().payment_schedule(&sample_request()).unwrap();
        assert_eq!(result.periods.len(), 240);
        assert_eq!(result.periods[0].opening_balance, 150_000.0);
        assert_eq!(result.internal_rate_of_return, 0.0);
    }

    #[test]
    fn test_payment_schedule_is_idempotent() {
        let svc = service();
        let request = sample_request();
        let first = svc.payment_schedule(&request).unwrap();
        let second = svc.payment_schedule(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_failures_are_aggregated() {
        let mut request = sample_request();
        request.amount_payments = 0;
        request.currency_name = String::new();

        let err = service().payment_schedule(&request).unwrap_err();
        match err {
            CreditError::Validation { messages } => assert_eq!(messages.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_rate_type_is_not_found() {
        let mut request = sample_request();
        request.interest_rate_type = "variable".to_string();

        let err = service().payment_schedule(&request).unwrap_err();
        match err {
            CreditError::NotFound(message) => {
                assert_eq!(message, "Interested rate doesn't exist");
            }
            other => panic!("expected not-found error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_policy_loan_is_rejected() {
        let mut request = sample_request();
        request.loan_amount = 0.91 * request.property_value;

        let err = service().payment_schedule(&request).unwrap_err();
        assert!(matches!(err, CreditError::OutOfPolicyRange { .. }));
    }

    #[test]
    fn test_create_list_delete_round_trip() {
        let mut svc = service();

        let confirmation = svc.create(&create_request("casa")).unwrap();
        assert_eq!(confirmation, "Credit data saved successfully!!");

        let credits = svc.credits_by_user(1).unwrap();
        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].name, "casa");
        assert_eq!(credits[0].bank_name, "interbank");

        let confirmation = svc.delete_credit(credits[0].id).unwrap();
        assert_eq!(confirmation, "Credit deleted successfully!!");
        assert!(svc.credits_by_user(1).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_credit_name_is_rejected() {
        let mut svc = service();
        svc.create(&create_request("casa")).unwrap();

        let err = svc.create(&create_request("casa")).unwrap_err();
        match err {
            CreditError::NotFound(message) => {
                assert_eq!(message, "Credit with casa already exists");
            }
            other => panic!("expected not-found error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_for_unknown_user_fails() {
        let mut svc = service();
        let mut request = create_request("casa");
        request.user_id = 99;

        let err = svc.create(&request).unwrap_err();
        match err {
            CreditError::NotFound(message) => assert_eq!(message, "User doesn't exist"),
            other => panic!("expected not-found error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_with_unknown_currency_fails() {
        let mut svc = service();
        let mut request = create_request("casa");
        request.credit.currency_name = "euro".to_string();

        let err = svc.create(&request).unwrap_err();
        match err {
            CreditError::NotFound(message) => assert_eq!(message, "Currency doesn't exist"),
            other => panic!("expected not-found error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_for_unknown_user_fails() {
        let err = service().credits_by_user(42).unwrap_err();
        assert_eq!(
            err.to_string(),
            "User with id 42 doesn't exist in the database"
        );
    }

    #[test]
    fn test_delete_missing_credit_fails() {
        let err = service().delete_credit(7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Credit with id 7 doesn't exist in the database"
        );
    }
}
