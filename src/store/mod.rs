//! Store - ledger persistence and transaction orchestration
//!
//! [`Store`] wraps a [`PgPool`] and exposes the single-row accessors plus
//! [`Store::transfer_tx`], the one multi-statement operation. Everything
//! multi-statement runs through [`Store::exec_tx`], which owns the
//! begin / commit-or-rollback discipline.

pub mod error;
pub mod models;
pub mod queries;
mod transfer_tx;

pub use error::StoreError;
pub use transfer_tx::{TransferTxParams, TransferTxResult};

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

use models::{Account, Entry, Transfer};
use queries::CreateAccountParams;

/// All ledger database operations. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run `f` inside one database transaction.
    ///
    /// Begins a transaction, hands the connection to the unit of work, then
    /// commits on success or rolls back on failure. The closure returns a
    /// boxed future so the unit of work can be any async block borrowing
    /// the transaction connection, whatever its result type.
    ///
    /// Error mapping:
    /// - begin fails: [`StoreError::Begin`], `f` is never invoked
    /// - `f` fails, rollback succeeds: the original error, unchanged
    /// - `f` fails, rollback fails: [`StoreError::Rollback`] carrying both
    /// - `f` succeeds, commit fails: [`StoreError::Commit`]
    pub async fn exec_tx<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, StoreError>>,
    {
        let mut tx = self.pool.begin().await.map_err(StoreError::Begin)?;

        let result = f(&mut *tx).await;

        match result {
            Ok(value) => {
                tx.commit().await.map_err(StoreError::Commit)?;
                Ok(value)
            }
            Err(err) => match tx.rollback().await {
                Ok(()) => Err(err),
                Err(rb_err) => Err(StoreError::Rollback {
                    source: Box::new(err),
                    rollback: rb_err,
                }),
            },
        }
    }

    // Pool-backed accessors for callers and tests. The transfer path uses
    // the transaction-scoped versions in `queries` directly.

    pub async fn create_account(&self, arg: &CreateAccountParams) -> Result<Account, StoreError> {
        Ok(queries::create_account(&self.pool, arg).await?)
    }

    pub async fn get_account(&self, id: i64) -> Result<Account, StoreError> {
        Ok(queries::get_account(&self.pool, id).await?)
    }

    pub async fn get_entry(&self, id: i64) -> Result<Entry, StoreError> {
        Ok(queries::get_entry(&self.pool, id).await?)
    }

    pub async fn get_transfer(&self, id: i64) -> Result<Transfer, StoreError> {
        Ok(queries::get_transfer(&self.pool, id).await?)
    }
}
