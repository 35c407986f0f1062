//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Fixed SQL templates with positional parameters
//! - One pooled connection per statement, via `QueryExecutor`
//! - Absent rows are `None`, not errors

pub mod books;

pub use books::{BookCatalog, BookRow, DbError, MySqlBookCatalog};
