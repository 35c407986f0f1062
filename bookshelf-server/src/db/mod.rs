//! Database layer - connection pool, query executor, and catalog
//!
//! # Design Principles
//!
//! - Bounded connection pool (4 connections by default), built once and injected
//! - One connection checked out per statement, returned on every path
//! - Positional `?` parameters only, no string-built SQL
//! - Read-only: this crate never writes to `book2018`

pub mod executor;
pub mod pool;
pub mod repos;

pub use executor::{QueryExecutor, SqlParam};
pub use pool::{create_pool, ping, DatabaseConfig};
pub use repos::*;
