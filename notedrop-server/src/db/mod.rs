//! Database layer - per-request connections and the message repository
//!
//! # Design Principles
//!
//! - One fresh `PgConnection` per request, closed before the response goes
//!   out - no pool, no `Arc<Mutex<Connection>>`
//! - Single-statement operations with immediate commit - no multi-statement
//!   transactions
//! - Encrypted transport is mandatory (`sslmode=require`)

pub mod connect;
pub mod migrations;
pub mod repos;

pub use connect::DbConfig;
pub use repos::{Message, MessageRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// DATABASE_URL was missing or empty; no connection is possible.
    #[error("database is not configured")]
    Unconfigured,

    /// Establishing a connection failed (bad URL, network, auth).
    #[error("database connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    /// A statement failed after the connection was up.
    #[error(transparent)]
    Query(#[from] sqlx::Error),
}
