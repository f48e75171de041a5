//! Single-row ledger accessors
//!
//! Each function is generic over [`sqlx::PgExecutor`] so the same statement
//! runs against the pool or against a transaction connection inside
//! [`Store::exec_tx`](crate::store::Store::exec_tx).

use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

use super::models::{Account, Entry, Transfer};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountParams {
    pub owner: String,
    pub balance: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreateEntryParams {
    pub account_id: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreateTransferParams {
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
}

pub async fn create_account(
    exec: impl PgExecutor<'_>,
    arg: &CreateAccountParams,
) -> Result<Account, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (owner, balance, currency)
        VALUES ($1, $2, $3)
        RETURNING id, owner, balance, currency, created_at
        "#,
    )
    .bind(&arg.owner)
    .bind(arg.balance)
    .bind(&arg.currency)
    .fetch_one(exec)
    .await
}

pub async fn get_account(exec: impl PgExecutor<'_>, id: i64) -> Result<Account, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id, owner, balance, currency, created_at FROM accounts WHERE id = $1",
    )
    .bind(id)
    .fetch_one(exec)
    .await
}

/// Atomic balance increment. The delta is applied in a single UPDATE so
/// concurrent increments to the same row cannot lose updates; there is no
/// read-modify-write at the application level.
pub async fn add_account_balance(
    exec: impl PgExecutor<'_>,
    id: i64,
    amount: i64,
) -> Result<Account, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        r#"
        UPDATE accounts
        SET balance = balance + $1
        WHERE id = $2
        RETURNING id, owner, balance, currency, created_at
        "#,
    )
    .bind(amount)
    .bind(id)
    .fetch_one(exec)
    .await
}

pub async fn create_entry(
    exec: impl PgExecutor<'_>,
    arg: &CreateEntryParams,
) -> Result<Entry, sqlx::Error> {
    sqlx::query_as::<_, Entry>(
        r#"
        INSERT INTO entries (account_id, amount)
        VALUES ($1, $2)
        RETURNING id, account_id, amount, created_at
        "#,
    )
    .bind(arg.account_id)
    .bind(arg.amount)
    .fetch_one(exec)
    .await
}

pub async fn get_entry(exec: impl PgExecutor<'_>, id: i64) -> Result<Entry, sqlx::Error> {
    sqlx::query_as::<_, Entry>(
        "SELECT id, account_id, amount, created_at FROM entries WHERE id = $1",
    )
    .bind(id)
    .fetch_one(exec)
    .await
}

pub async fn create_transfer(
    exec: impl PgExecutor<'_>,
    arg: &CreateTransferParams,
) -> Result<Transfer, sqlx::Error> {
    sqlx::query_as::<_, Transfer>(
        r#"
        INSERT INTO transfers (from_account_id, to_account_id, amount)
        VALUES ($1, $2, $3)
        RETURNING id, from_account_id, to_account_id, amount, created_at
        "#,
    )
    .bind(arg.from_account_id)
    .bind(arg.to_account_id)
    .bind(arg.amount)
    .fetch_one(exec)
    .await
}

pub async fn get_transfer(exec: impl PgExecutor<'_>, id: i64) -> Result<Transfer, sqlx::Error> {
    sqlx::query_as::<_, Transfer>(
        "SELECT id, from_account_id, to_account_id, amount, created_at FROM transfers WHERE id = $1",
    )
    .bind(id)
    .fetch_one(exec)
    .await
}
