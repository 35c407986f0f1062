//! Domain models with validation at construction
//!
//! User input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod book;
pub mod pagination;
pub mod title;
pub mod validation;

pub use book::{Book, BookSummary, DELIMITER};
pub use pagination::{Page, PageWindow, MAX_OFFSET, PAGE_SIZE};
pub use title::TitlePrefix;
pub use validation::ValidationError;
