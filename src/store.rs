//! Collaborator seams for reference data and credit persistence
//!
//! The schedule engine is pure; the service resolves reference records and
//! persists credits through these traits. The in-memory implementations
//! back the demo binary and the tests. Whatever concurrency discipline a
//! shared backend needs is the implementor's problem, not the core's.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::credit::{GracePeriod, InterestRateKind};

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// A reference currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// A reference bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub name: String,
}

/// A persisted credit, as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRecord {
    /// Store-assigned identifier (0 until saved)
    pub id: u64,
    /// Display name, unique per user
    pub name: String,
    /// Owning user id
    pub user_id: u64,
    /// Annual interest rate, percent
    pub rate: f64,
    /// Number of monthly payments
    pub amount_payments: u32,
    /// Requested loan amount
    pub loan_amount: f64,
    /// Appraised property value
    pub property_value: f64,
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
    /// Grace period metadata
    pub grace_period: GracePeriod,
    /// Resolved interest rate type name
    pub interest_rate_type: String,
    /// Resolved currency name
    pub currency_name: String,
    /// Resolved bank name
    pub bank_name: String,
    /// When the record was saved
    pub created_at: DateTime<Utc>,
}

/// Resolves reference records by name or id.
pub trait LookupResolver {
    /// Rate kind for an interest rate type name, if the type exists.
    fn rate_kind(&self, name: &str) -> Option<InterestRateKind>;

    /// Currency record by name.
    fn currency(&self, name: &str) -> Option<Currency>;

    /// Bank record by name.
    fn bank(&self, name: &str) -> Option<Bank>;

    /// User record by id.
    fn user(&self, id: u64) -> Option<User>;
}

/// Persistence contract for credit records.
///
/// `save` and `delete` may fail for backend reasons; the service wraps
/// those failures with the original cause attached.
pub trait CreditStore {
    /// Persist a record, returning its assigned id.
    fn save(&mut self, record: CreditRecord) -> anyhow::Result<u64>;

    /// All credits owned by a user, in insertion order.
    fn find_by_user(&self, user_id: u64) -> Vec<CreditRecord>;

    /// Whether a credit with this id exists.
    fn exists(&self, id: u64) -> bool;

    /// Remove a credit by id.
    fn delete(&mut self, id: u64) -> anyhow::Result<()>;
}

/// Reference data fixture with the rate types, currencies and banks known
/// to the demo deployment. Users are registered explicitly.
#[derive(Debug, Clone, Default)]
pub struct StaticLookups {
    users: HashMap<u64, User>,
    currencies: Vec<Currency>,
    banks: Vec<Bank>,
}

impl StaticLookups {
    /// Fixture with the deployment's reference data: sol and dollar
    /// currencies, the single supported bank, no users.
    pub fn with_defaults() -> Self {
        Self {
            users: HashMap::new(),
            currencies: vec![
                Currency {
                    name: "sol".to_string(),
                    symbol: "S/".to_string(),
                },
                Currency {
                    name: "dollar".to_string(),
                    symbol: "$".to_string(),
                },
            ],
            banks: vec![Bank {
                name: "interbank".to_string(),
            }],
        }
    }

    /// Register a user in the fixture.
    pub fn add_user(&mut self, id: u64, name: &str) {
        self.users.insert(
            id,
            User {
                id,
                name: name.to_string(),
            },
        );
    }
}

impl LookupResolver for StaticLookups {
    fn rate_kind(&self, name: &str) -> Option<InterestRateKind> {
        InterestRateKind::from_name(name)
    }

    fn currency(&self, name: &str) -> Option<Currency> {
        self.currencies
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    fn bank(&self, name: &str) -> Option<Bank> {
        self.banks
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    fn user(&self, id: u64) -> Option<User> {
        self.users.get(&id).cloned()
    }
}

/// HashMap-backed credit store with a monotonically increasing id counter.
#[derive(Debug, Default)]
pub struct InMemoryCreditStore {
    next_id: u64,
    records: HashMap<u64, CreditRecord>,
}

impl InMemoryCreditStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CreditStore for InMemoryCreditStore {
    fn save(&mut self, mut record: CreditRecord) -> anyhow::Result<u64> {
        self.next_id += 1;
        record.id = self.next_id;
        self.records.insert(record.id, record);
        Ok(self.next_id)
    }

    fn find_by_user(&self, user_id: u64) -> Vec<CreditRecord> {
        let mut credits: Vec<CreditRecord> = self
            .records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        credits.sort_by_key(|r| r.id);
        credits
    }

    fn exists(&self, id: u64) -> bool {
        self.records.contains_key(&id)
    }

    fn delete(&mut self, id: u64) -> anyhow::Result<()> {
        self.records.remove(&id);
        Ok(())
    }
}
