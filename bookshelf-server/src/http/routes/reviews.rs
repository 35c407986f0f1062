//! Review proxy endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::reviews::ReviewQuery;
use crate::views;

/// Query parameters for GET /reviews
#[derive(Debug, Default, Deserialize)]
pub struct ReviewParams {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// GET /reviews?title=&author=
async fn book_reviews(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewParams>,
) -> Result<Html<String>, ApiError> {
    let query = ReviewQuery::from_params(params.title.as_deref(), params.author.as_deref())?;
    tracing::info!(title = %query.title, author = ?query.author_param(), "review lookup");

    let page = state.reviews.fetch(&query).await?;
    Ok(Html(views::reviews(&page)))
}

/// Review routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/reviews", get(book_reviews))
}
