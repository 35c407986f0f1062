//! bookshelf-server: server-rendered catalog browser
//!
//! Paginates titles from the `book2018` table, renders book detail
//! pages (HTML or JSON), and proxies the NYT Books review API.

pub mod db;
pub mod http;
pub mod models;
pub mod reviews;
pub mod views;

pub use db::{create_pool, BookCatalog, DatabaseConfig, MySqlBookCatalog};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use reviews::{NytReviewClient, ReviewClientConfig, ReviewSource};
