//! Ledger row types
//!
//! One `Account` row per balance holder; `Entry` and `Transfer` rows are
//! insert-only audit records and are never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A balance holder. `balance` is in minor currency units and is only ever
/// mutated through atomic `balance = balance + delta` increments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub owner: String,
    pub balance: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// One signed posting against a single account. Every transfer owns exactly
/// two entries whose amounts sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Entry {
    pub id: i64,
    pub account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// The record of one atomic movement of funds between two accounts.
/// `amount` is always the positive transferred quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Transfer {
    pub id: i64,
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}
