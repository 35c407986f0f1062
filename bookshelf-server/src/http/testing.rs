//! In-memory catalog and review fakes for router tests

use async_trait::async_trait;

use crate::db::{BookCatalog, DbError};
use crate::models::book::split_joined;
use crate::models::{Book, BookSummary, Page, TitlePrefix};
use crate::reviews::{Review, ReviewError, ReviewPage, ReviewQuery, ReviewSource};

/// Catalog over a fixed set of books, or one that always fails
pub struct InMemoryCatalog {
    books: Vec<Book>,
    broken: bool,
}

impl InMemoryCatalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            broken: false,
        }
    }

    /// Every call fails as if the pool could not hand out a connection.
    pub fn broken() -> Self {
        Self {
            books: Vec::new(),
            broken: true,
        }
    }

    fn matching(&self, prefix: &TitlePrefix) -> Result<Vec<&Book>, DbError> {
        if self.broken {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        let mut hits: Vec<&Book> = self
            .books
            .iter()
            .filter(|b| b.title.starts_with(prefix.as_str()))
            .collect();
        hits.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(hits)
    }
}

#[async_trait]
impl BookCatalog for InMemoryCatalog {
    async fn search(&self, prefix: &TitlePrefix, page: Page) -> Result<Vec<BookSummary>, DbError> {
        Ok(self
            .matching(prefix)?
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|b| BookSummary {
                book_id: b.book_id.clone(),
                title: b.title.clone(),
            })
            .collect())
    }

    async fn count(&self, prefix: &TitlePrefix) -> Result<i64, DbError> {
        Ok(self.matching(prefix)?.len() as i64)
    }

    async fn get(&self, book_id: &str) -> Result<Option<Book>, DbError> {
        if self.broken {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(self.books.iter().find(|b| b.book_id == book_id).cloned())
    }
}

pub fn book(book_id: &str, title: &str, authors: &str, genres: &str) -> Book {
    Book {
        book_id: book_id.to_owned(),
        title: title.to_owned(),
        authors: split_joined(authors),
        genres: split_joined(genres),
        description: format!("About {}", title),
        pages: 300,
        rating: 4.5,
        rating_count: 1000,
    }
}

/// 23 "Harry ..." titles, book 123 with two genres, and a few others.
pub fn harry_potter_shelf() -> Vec<Book> {
    let mut books: Vec<Book> = (0..23)
        .map(|i| {
            book(
                &format!("hp{:02}", i),
                &format!("Harry Volume {:02}", i),
                "J.K. Rowling",
                "Fiction",
            )
        })
        .collect();
    books.push(book(
        "123",
        "The Hobbit",
        "J.R.R. Tolkien|Alan Lee",
        "Fiction|Fantasy",
    ));
    books.push(book("124", "Dune", "Frank Herbert", "Science Fiction"));
    books
}

/// Review source returning a canned outcome
pub enum FakeReviews {
    Found(Vec<Review>),
    TimedOut,
    Unavailable,
}

impl FakeReviews {
    pub fn empty() -> Self {
        Self::Found(Vec::new())
    }
}

#[async_trait]
impl ReviewSource for FakeReviews {
    async fn fetch(&self, query: &ReviewQuery) -> Result<ReviewPage, ReviewError> {
        match self {
            Self::Found(reviews) => Ok(ReviewPage {
                title: query.title.clone(),
                author: query.author_param().unwrap_or_default(),
                num_results: reviews.len() as u32,
                copyright: "Copyright (c) 2026 The New York Times Company.".into(),
                reviews: reviews.clone(),
                has_reviews: !reviews.is_empty(),
            }),
            Self::TimedOut => Err(ReviewError::Timeout),
            Self::Unavailable => Err(ReviewError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            }),
        }
    }
}
