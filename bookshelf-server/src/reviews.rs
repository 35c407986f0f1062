//! NYT Books review proxy
//!
//! Builds one GET against the reviews endpoint, parses the JSON body,
//! and reshapes each entry to a fixed field set. No retry, no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::ValidationError;

/// Default NYT Books review endpoint
pub const NYT_REVIEWS_URL: &str = "https://api.nytimes.com/svc/books/v3/reviews.json";

/// Default per-request timeout for the upstream call
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// What to look reviews up by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    pub title: String,
    pub authors: Vec<String>,
}

impl ReviewQuery {
    /// Build a query from the `title` and `author` request parameters.
    ///
    /// Title is required; a missing or blank author is omitted upstream.
    pub fn from_params(title: Option<&str>, author: Option<&str>) -> Result<Self, ValidationError> {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ValidationError::Missing { field: "title" })?;

        let authors = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(|a| vec![a.to_owned()])
            .unwrap_or_default();

        Ok(Self {
            title: title.to_owned(),
            authors,
        })
    }

    /// The `author` parameter: all authors joined with " and ".
    pub fn author_param(&self) -> Option<String> {
        if self.authors.is_empty() {
            None
        } else {
            Some(join_authors(&self.authors))
        }
    }
}

/// Join author names the way the review API expects multiple authors.
pub fn join_authors(authors: &[String]) -> String {
    authors.join(" and ")
}

/// One review, reshaped from the upstream payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub book_title: String,
    pub book_author: String,
    pub byline: String,
    pub publication_date: String,
    pub summary: String,
    pub url: String,
}

/// Reviews found for one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewPage {
    pub title: String,
    pub author: String,
    pub num_results: u32,
    pub copyright: String,
    pub reviews: Vec<Review>,
    pub has_reviews: bool,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    num_results: u32,
    #[serde(default)]
    copyright: String,
    #[serde(default)]
    results: Vec<ApiReview>,
}

#[derive(Debug, Deserialize)]
struct ApiReview {
    #[serde(default)]
    url: String,
    #[serde(default)]
    publication_dt: String,
    #[serde(default)]
    byline: String,
    #[serde(default)]
    book_title: String,
    #[serde(default)]
    book_author: String,
    #[serde(default)]
    summary: String,
}

impl ReviewPage {
    fn from_api(query: &ReviewQuery, data: ApiResponse) -> Self {
        let reviews: Vec<Review> = data
            .results
            .into_iter()
            .map(|r| Review {
                book_title: r.book_title,
                book_author: r.book_author,
                byline: r.byline,
                publication_date: r.publication_dt,
                summary: r.summary,
                url: r.url,
            })
            .collect();

        Self {
            title: query.title.clone(),
            author: query.author_param().unwrap_or_default(),
            num_results: data.num_results,
            copyright: data.copyright,
            has_reviews: !reviews.is_empty(),
            reviews,
        }
    }
}

/// Review proxy error type
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("invalid review endpoint: {0}")]
    Url(#[from] url::ParseError),

    #[error("review request timed out")]
    Timeout,

    #[error("review request failed: {0}")]
    Transport(reqwest::Error),

    #[error("review API returned {status}")]
    Status { status: StatusCode },

    #[error("malformed review payload: {0}")]
    Decode(reqwest::Error),
}

/// Source of book reviews (testable)
#[async_trait]
pub trait ReviewSource: Send + Sync {
    async fn fetch(&self, query: &ReviewQuery) -> Result<ReviewPage, ReviewError>;
}

/// Review client settings
#[derive(Clone)]
pub struct ReviewClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for ReviewClientConfig {
    fn default() -> Self {
        Self {
            base_url: NYT_REVIEWS_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// NYT Books API client
pub struct NytReviewClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl NytReviewClient {
    pub fn new(config: ReviewClientConfig) -> Result<Self, ReviewError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ReviewError::Transport)?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
            api_key: config.api_key,
        })
    }

    /// Endpoint URL with `api-key`, `title` and `author` attached.
    pub fn request_url(&self, query: &ReviewQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api-key", &self.api_key);
            pairs.append_pair("title", &query.title);
            if let Some(author) = query.author_param() {
                pairs.append_pair("author", &author);
            }
        }
        url
    }
}

#[async_trait]
impl ReviewSource for NytReviewClient {
    async fn fetch(&self, query: &ReviewQuery) -> Result<ReviewPage, ReviewError> {
        tracing::debug!(title = %query.title, authors = ?query.authors, "fetching reviews");

        let response = self
            .client
            .get(self.request_url(query))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ReviewError::Timeout
                } else {
                    ReviewError::Transport(e)
                }
            })?;

        if !response.status().is_success() {
            return Err(ReviewError::Status {
                status: response.status(),
            });
        }

        let data: ApiResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ReviewError::Timeout
            } else {
                ReviewError::Decode(e)
            }
        })?;

        let page = ReviewPage::from_api(query, data);
        tracing::debug!(num_results = page.num_results, "reviews fetched");
        Ok(page)
    }
}
