//! Book records from the `book2018` table

use serde::Serialize;

/// Separator used by the table for multi-valued columns
pub const DELIMITER: char = '|';

/// One search hit: identifier and title only
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub book_id: String,
    pub title: String,
}

/// Full book record with multi-valued columns already split
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub book_id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub genres: Vec<String>,
    pub description: String,
    pub pages: i32,
    pub rating: f32,
    pub rating_count: i32,
}

impl Book {
    /// Authors as display text, e.g. "J.K. Rowling, Mary GrandPré".
    pub fn authors_text(&self) -> String {
        self.authors.join(", ")
    }

    /// Genres as display text, e.g. "Fiction, Fantasy".
    pub fn genres_text(&self) -> String {
        self.genres.join(", ")
    }
}

/// Split a `|`-joined column value into its segments.
///
/// Empty segments are dropped, surrounding whitespace trimmed.
pub fn split_joined(value: &str) -> Vec<String> {
    value
        .split(DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
