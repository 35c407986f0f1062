//! Title search and book detail endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::negotiate::{Negotiated, Representation};
use crate::http::server::AppState;
use crate::models::{Book, BookSummary, Page, PageWindow, TitlePrefix};
use crate::views::{self, ListView};

/// Query parameters for GET /list
///
/// Kept as raw strings so a bad `offset` falls back to 0 instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub offset: Option<String>,
}

/// JSON form of one page of search results
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub q: String,
    pub books: Vec<BookSummary>,
    pub has_results: bool,
    #[serde(flatten)]
    pub window: PageWindow,
}

/// JSON form of a book record
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailsResponse {
    pub book_id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    pub pages: i32,
    pub rating: f32,
    pub rating_count: i32,
    pub genre: Vec<String>,
}

impl From<Book> for BookDetailsResponse {
    fn from(b: Book) -> Self {
        Self {
            book_id: b.book_id,
            title: b.title,
            authors: b.authors,
            summary: b.description,
            pages: b.pages,
            rating: b.rating,
            rating_count: b.rating_count,
            genre: b.genres,
        }
    }
}

/// GET /list?q=&offset= - one page of titles starting with `q`
async fn list_books(
    State(state): State<Arc<AppState>>,
    Negotiated(representation): Negotiated,
    Query(params): Query<ListParams>,
) -> Result<Response, ApiError> {
    let prefix = TitlePrefix::new(params.q.as_deref())?;
    let page = Page::from_param(params.offset.as_deref());
    tracing::debug!(q = prefix.as_str(), offset = page.offset(), "listing titles");

    let books = state.catalog.search(&prefix, page).await?;
    let total = state.catalog.count(&prefix).await?;
    let window = page.window(total);

    Ok(match representation {
        Representation::Html => {
            let view = ListView {
                q: prefix.as_str(),
                books: &books,
                window,
            };
            Html(views::list(&view)).into_response()
        }
        Representation::Json => Json(ListResponse {
            q: prefix.as_str().to_owned(),
            has_results: !books.is_empty(),
            books,
            window,
        })
        .into_response(),
    })
}

/// GET /details/{book_id} - one book, HTML or JSON
async fn book_details(
    State(state): State<Arc<AppState>>,
    Negotiated(representation): Negotiated,
    Path(book_id): Path<String>,
) -> Result<Response, ApiError> {
    tracing::debug!(book_id = %book_id, ?representation, "book details");

    let book = state
        .catalog
        .get(&book_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "book",
            id: book_id.clone(),
        })?;

    Ok(match representation {
        Representation::Html => Html(views::details(&book)).into_response(),
        Representation::Json => Json(BookDetailsResponse::from(book)).into_response(),
    })
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(list_books))
        .route("/details/{book_id}", get(book_details))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::header::{ACCEPT, CONTENT_TYPE};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::http::server::build_router;
    use crate::http::testing::{harry_potter_shelf, FakeReviews, InMemoryCatalog};

    fn app_with(catalog: InMemoryCatalog) -> Router {
        build_router(AppState::new(Arc::new(catalog), Arc::new(FakeReviews::empty())))
    }

    fn app() -> Router {
        app_with(InMemoryCatalog::new(harry_potter_shelf()))
    }

    async fn get(app: Router, uri: &str, accept: Option<&str>) -> (StatusCode, String) {
        let mut request = Request::builder().uri(uri);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }
        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(app(), uri, Some("application/json")).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn first_page_of_23_matches() {
        let (status, body) = get_json("/list?q=Harry&offset=0").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["books"].as_array().unwrap().len(), 10);
        assert_eq!(body["hasLess"], false);
        assert_eq!(body["hasMore"], true);
        assert_eq!(body["nextOffset"], 10);
        assert_eq!(body["prevOffset"], 0);
        assert_eq!(body["total"], 23);
        assert_eq!(body["books"][0]["title"], "Harry Volume 00");
    }

    #[tokio::test]
    async fn last_page_has_no_more() {
        let (_, body) = get_json("/list?q=Harry&offset=20").await;

        assert_eq!(body["books"].as_array().unwrap().len(), 3);
        assert_eq!(body["hasLess"], true);
        assert_eq!(body["hasMore"], false);
        assert_eq!(body["prevOffset"], 10);
        assert_eq!(body["nextOffset"], 30);
    }

    #[tokio::test]
    async fn list_is_idempotent() {
        let (_, first) = get_json("/list?q=Harry&offset=10").await;
        let (_, second) = get_json("/list?q=Harry&offset=10").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn bad_offset_falls_back_to_zero() {
        let (status, body) = get_json("/list?q=Harry&offset=abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hasLess"], false);
        assert_eq!(body["books"][0]["title"], "Harry Volume 00");
    }

    #[tokio::test]
    async fn huge_offset_is_clamped_not_fatal() {
        let (status, body) = get_json("/list?q=Harry&offset=18446744073709551615").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["books"].as_array().unwrap().len(), 0);
        assert_eq!(body["hasLess"], true);
        assert_eq!(body["hasMore"], false);
        assert_eq!(body["nextOffset"], 9_223_372_036_854_775_817u64);
    }

    #[tokio::test]
    async fn trailing_junk_in_offset_is_ignored() {
        let (_, body) = get_json("/list?q=Harry&offset=20abc").await;
        assert_eq!(body["books"].as_array().unwrap().len(), 3);
        assert_eq!(body["prevOffset"], 10);
    }

    #[tokio::test]
    async fn no_matches_is_empty_not_error() {
        let (status, body) = get_json("/list?q=Zebra").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hasResults"], false);
        assert_eq!(body["hasMore"], false);
    }

    #[tokio::test]
    async fn missing_q_is_400() {
        let (status, body) = get(app(), "/list?offset=0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("missing required parameter 'q'"));
    }

    #[tokio::test]
    async fn list_renders_html_by_default() {
        let (status, body) = get(app(), "/list?q=Harry&offset=0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<li>").count(), 10);
        assert!(body.contains(r#"rel="next" href="/list?q=Harry&amp;offset=10""#));
        assert!(!body.contains(r#"rel="prev""#));
    }

    #[tokio::test]
    async fn database_failure_is_500() {
        let (status, body) = get(app_with(InMemoryCatalog::broken()), "/list?q=Harry", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("pool"));
    }

    #[tokio::test]
    async fn details_html_joins_genres() {
        let (status, body) = get(app(), "/details/123", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Fiction, Fantasy"));
        assert!(body.contains("J.R.R. Tolkien, Alan Lee"));
        assert!(!body.contains('|'));
    }

    #[tokio::test]
    async fn details_json_has_genre_array() {
        let (status, body) = get_json("/details/123").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bookId"], "123");
        assert_eq!(body["genre"], serde_json::json!(["Fiction", "Fantasy"]));
        assert_eq!(body["authors"], serde_json::json!(["J.R.R. Tolkien", "Alan Lee"]));
        assert_eq!(body["ratingCount"], 1000);
    }

    #[tokio::test]
    async fn details_json_content_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/details/123")
                    .header(ACCEPT, "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }

    #[tokio::test]
    async fn unknown_book_is_404() {
        let (status, body) = get(app(), "/details/does-not-exist", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("not_found"));
    }

    #[tokio::test]
    async fn unsupported_accept_is_406() {
        let (status, body) = get(app(), "/details/123", Some("application/xml")).await;
        assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
        assert!(body.starts_with("Not Acceptable"));
    }
}
