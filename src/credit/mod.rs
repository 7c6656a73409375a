//! Credit request data structures and field validation

mod request;
mod validate;

pub use request::{
    CreateCreditRequest, CreditRequest, GracePeriod, InterestRateKind, ScheduleRequest,
};
pub use validate::Validate;
