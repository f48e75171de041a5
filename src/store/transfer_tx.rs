//! Transfer orchestration
//!
//! One transfer = one transfer row, two balancing entry rows, and two
//! atomic balance increments, all inside a single database transaction.
//!
//! Balance updates always lock rows in ascending account-ID order. Two
//! concurrent transfers in opposite directions between the same pair of
//! accounts would otherwise take the two row locks in opposite orders and
//! deadlock; a single global order removes the cycle.

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use sqlx::PgConnection;

use super::Store;
use super::error::StoreError;
use super::models::{Account, Entry, Transfer};
use super::queries::{self, CreateEntryParams, CreateTransferParams};

/// Input for [`Store::transfer_tx`]. `amount` is the positive quantity to
/// move, in minor currency units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransferTxParams {
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
}

/// Everything written by one successful transfer: the transfer record, both
/// accounts as of their post-update balances, and both entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferTxResult {
    pub transfer: Transfer,
    pub from_account: Account,
    pub to_account: Account,
    pub from_entry: Entry,
    pub to_entry: Entry,
}

impl Store {
    /// Move `amount` from one account to another.
    ///
    /// Creates the transfer record, posts a `-amount` entry against the
    /// source and a `+amount` entry against the destination, and applies
    /// both balance deltas, as one atomic unit of work. Any failing step
    /// aborts the whole transaction; the underlying error propagates
    /// unchanged.
    ///
    /// Amount positivity and `from != to` are not checked here; callers
    /// that need those rules enforce them in front of the store.
    pub async fn transfer_tx(&self, arg: TransferTxParams) -> Result<TransferTxResult, StoreError> {
        let result = self
            .exec_tx(move |conn| {
                Box::pin(async move {
                    let transfer = queries::create_transfer(
                        &mut *conn,
                        &CreateTransferParams {
                            from_account_id: arg.from_account_id,
                            to_account_id: arg.to_account_id,
                            amount: arg.amount,
                        },
                    )
                    .await?;

                    let from_entry = queries::create_entry(
                        &mut *conn,
                        &CreateEntryParams {
                            account_id: arg.from_account_id,
                            amount: -arg.amount,
                        },
                    )
                    .await?;

                    let to_entry = queries::create_entry(
                        &mut *conn,
                        &CreateEntryParams {
                            account_id: arg.to_account_id,
                            amount: arg.amount,
                        },
                    )
                    .await?;

                    // Always update the smaller account ID first, whichever
                    // direction the money moves.
                    let (from_account, to_account) = if arg.from_account_id < arg.to_account_id {
                        add_balances(
                            conn,
                            arg.from_account_id,
                            -arg.amount,
                            arg.to_account_id,
                            arg.amount,
                        )
                        .await?
                    } else {
                        let (to_account, from_account) = add_balances(
                            conn,
                            arg.to_account_id,
                            arg.amount,
                            arg.from_account_id,
                            -arg.amount,
                        )
                        .await?;
                        (from_account, to_account)
                    };

                    Ok(TransferTxResult {
                        transfer,
                        from_account,
                        to_account,
                        from_entry,
                        to_entry,
                    })
                }) as BoxFuture<'_, Result<TransferTxResult, StoreError>>
            })
            .await?;

        tracing::debug!(
            transfer_id = result.transfer.id,
            from_account_id = arg.from_account_id,
            to_account_id = arg.to_account_id,
            amount = arg.amount,
            "transfer committed"
        );

        Ok(result)
    }
}

/// Apply two balance deltas with single atomic increments.
///
/// The caller must pass the pair in ascending account-ID order; this
/// function applies them exactly as given. If the first increment fails the
/// second is never attempted and the enclosing transaction's rollback
/// undoes the partial state.
async fn add_balances(
    conn: &mut PgConnection,
    account_id1: i64,
    amount1: i64,
    account_id2: i64,
    amount2: i64,
) -> Result<(Account, Account), sqlx::Error> {
    let account1 = queries::add_account_balance(&mut *conn, account_id1, amount1).await?;
    let account2 = queries::add_account_balance(&mut *conn, account_id2, amount2).await?;
    Ok((account1, account2))
}
