//! Credit Schedule - payment schedule engine for mortgage credit products
//!
//! This library provides:
//! - Interest rate conversions (nominal/effective, annual/monthly/daily)
//! - Bonus-driven loan amount adjustments with policy range checks
//! - French (level-payment) amortization schedules with insurance add-ons
//! - NPV accumulation against an opportunity cost of capital
//! - A credit service orchestrating validation, lookups and persistence

pub mod credit;
pub mod error;
pub mod rates;
pub mod adjust;
pub mod schedule;
pub mod store;
pub mod service;

// Re-export commonly used types
pub use credit::{CreditRequest, CreateCreditRequest, InterestRateKind, ScheduleRequest};
pub use error::{CreditError, CreditResult};
pub use schedule::{ScheduleEngine, SchedulePeriod, ScheduleResult};
pub use service::CreditService;
