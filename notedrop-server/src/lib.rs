//! notedrop-server: HTTP service that saves short text messages to PostgreSQL
//!
//! Three endpoints: `POST /save` persists a message, `GET /messages` returns
//! the ten most recent, `GET /` answers a plain-text greeting. Every request
//! opens its own database connection and closes it before responding; there
//! is no pool and no shared mutable state.

pub mod db;
pub mod http;
pub mod models;

pub use db::DbConfig;
pub use http::{run_server, ServerConfig};
