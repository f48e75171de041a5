//! ledger-store - Atomic double-entry transfers on PostgreSQL
//!
//! A small ledger storage engine: accounts hold integer balances in minor
//! currency units, every transfer posts two balancing entries, and all
//! writes for one transfer land in a single database transaction.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL connection pool
//! - [`store`] - Store, transaction executor, transfer orchestration
//! - [`util`] - Random fixture helpers for tests

pub mod config;
pub mod db;
pub mod logging;
pub mod store;
pub mod util;

// Convenient re-exports at crate root
pub use config::{AppConfig, DatabaseConfig};
pub use db::Database;
pub use store::models::{Account, Entry, Transfer};
pub use store::{Store, StoreError, TransferTxParams, TransferTxResult};
