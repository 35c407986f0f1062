//! Book catalog repository
//!
//! Three read-only queries over `book2018`:
//! - search: title prefix, alphabetical, one page
//! - count: total matches for the same prefix
//! - get: one record by identifier

use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};

use crate::db::executor::{QueryExecutor, SqlParam};
use crate::models::book::split_joined;
use crate::models::{Book, BookSummary, Page, TitlePrefix};

const SQL_BOOK_LIST: &str =
    "select book_id, title from book2018 where title like ? order by title asc limit ? offset ?";

const SQL_COUNT_RESULTS: &str = "select count(*) from book2018 where title like ?";

const SQL_BOOK_DETAILS: &str = r#"
    select book_id, title, authors, genres, description, pages, rating, rating_count
    from book2018
    where book_id = ?
"#;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Raw `book2018` row, multi-valued columns still `|`-joined
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub book_id: String,
    pub title: String,
    pub authors: String,
    pub genres: String,
    pub description: Option<String>,
    pub pages: i32,
    pub rating: f32,
    pub rating_count: i32,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            book_id: row.book_id,
            title: row.title,
            authors: split_joined(&row.authors),
            genres: split_joined(&row.genres),
            description: row.description.unwrap_or_default(),
            pages: row.pages,
            rating: row.rating,
            rating_count: row.rating_count,
        }
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    book_id: String,
    title: String,
}

/// Read access to the book catalog
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// One page of titles starting with `prefix`, alphabetical.
    /// Empty when nothing matches.
    async fn search(&self, prefix: &TitlePrefix, page: Page) -> Result<Vec<BookSummary>, DbError>;

    /// Total number of titles starting with `prefix`.
    async fn count(&self, prefix: &TitlePrefix) -> Result<i64, DbError>;

    /// The record for `book_id`, or `None` if there is no such book.
    async fn get(&self, book_id: &str) -> Result<Option<Book>, DbError>;
}

/// MySQL-backed catalog
#[derive(Clone)]
pub struct MySqlBookCatalog {
    executor: QueryExecutor,
}

impl MySqlBookCatalog {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            executor: QueryExecutor::new(pool),
        }
    }
}

#[async_trait]
impl BookCatalog for MySqlBookCatalog {
    async fn search(&self, prefix: &TitlePrefix, page: Page) -> Result<Vec<BookSummary>, DbError> {
        let params = [
            SqlParam::from(prefix.like_pattern()),
            SqlParam::from(page.limit()),
            SqlParam::from(page.offset()),
        ];
        let rows: Vec<SummaryRow> = self.executor.fetch_all(SQL_BOOK_LIST, &params).await?;

        Ok(rows
            .into_iter()
            .map(|r| BookSummary {
                book_id: r.book_id,
                title: r.title,
            })
            .collect())
    }

    async fn count(&self, prefix: &TitlePrefix) -> Result<i64, DbError> {
        let params = [SqlParam::from(prefix.like_pattern())];
        Ok(self.executor.fetch_scalar(SQL_COUNT_RESULTS, &params).await?)
    }

    async fn get(&self, book_id: &str) -> Result<Option<Book>, DbError> {
        let params = [SqlParam::from(book_id)];
        let row: Option<BookRow> = self.executor.fetch_optional(SQL_BOOK_DETAILS, &params).await?;
        Ok(row.map(Book::from))
    }
}
