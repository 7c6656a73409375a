//! Error types for credit schedule operations
//!
//! Every error is raised straight to the caller; nothing is retried or
//! silently recovered, and no partial schedules are ever returned.

use thiserror::Error;

/// A specialized Result type for credit operations.
pub type CreditResult<T> = Result<T, CreditError>;

/// The error taxonomy of the credit service.
#[derive(Error, Debug)]
pub enum CreditError {
    /// One or more request fields failed their declared constraints.
    /// All violations are collected before failing, not just the first.
    #[error("{}", .messages.join(", "))]
    Validation {
        /// One message per violated field.
        messages: Vec<String>,
    },

    /// A referenced entity (user, bank, currency, rate type, credit id)
    /// does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The adjusted loan amount fell outside the allowed band of the
    /// property value.
    #[error("The loan amount is greater than the 90% of property value or less than 7.5%")]
    OutOfPolicyRange {
        /// Loan amount after bonus adjustments.
        loan_amount: f64,
        /// Property value the band is derived from.
        property_value: f64,
    },

    /// Unexpected failure during a persistence write, with the original
    /// cause attached for diagnostics.
    #[error("The operation failed")]
    OperationFailed(#[source] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_joined() {
        let err = CreditError::Validation {
            messages: vec![
                "The loan amount must be greater than zero".to_string(),
                "The bank name is required".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "The loan amount must be greater than zero, The bank name is required"
        );
    }

    #[test]
    fn test_operation_failed_keeps_cause() {
        let err = CreditError::OperationFailed(anyhow::anyhow!("disk full"));
        assert_eq!(err.to_string(), "The operation failed");
        let source = std::error::Error::source(&err).expect("cause attached");
        assert_eq!(source.to_string(), "disk full");
    }
}
