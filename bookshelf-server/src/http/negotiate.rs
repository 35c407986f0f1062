//! Content negotiation on the `Accept` header

use axum::extract::FromRequestParts;
use axum::http::header::ACCEPT;
use axum::http::request::Parts;

use super::error::ApiError;

/// Media types this server can produce, in preference order
pub const SUPPORTED_TYPES: [&str; 2] = ["text/html", "application/json"];

/// Response representation chosen for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Html,
    Json,
}

impl Representation {
    fn for_range(range: &str) -> Option<Self> {
        match range {
            "text/html" | "text/*" | "*/*" => Some(Self::Html),
            "application/json" | "application/*" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Pick a representation from an `Accept` header value.
///
/// Ranges are tried in descending `q` order (ties keep header order);
/// `q=0` ranges are ignored. No header, or an empty one, means HTML.
pub fn choose(accept: Option<&str>) -> Option<Representation> {
    let accept = match accept.map(str::trim) {
        None | Some("") => return Some(Representation::Html),
        Some(value) => value,
    };

    let mut ranges: Vec<(String, f32)> = accept
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let range = pieces.next()?.trim().to_ascii_lowercase();
            if range.is_empty() {
                return None;
            }
            let q = pieces
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|v| v.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((range, q))
        })
        .filter(|(_, q)| *q > 0.0)
        .collect();

    // stable sort keeps header order among equal weights
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranges
        .iter()
        .find_map(|(range, _)| Representation::for_range(range))
}

/// Extract the negotiated representation, rejecting with 406
pub struct Negotiated(pub Representation);

impl<S> FromRequestParts<S> for Negotiated
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = parts
            .headers
            .get(ACCEPT)
            .and_then(|value| value.to_str().ok());

        choose(accept).map(Self).ok_or(ApiError::NotAcceptable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_header_is_html() {
        assert_eq!(choose(None), Some(Representation::Html));
        assert_eq!(choose(Some("  ")), Some(Representation::Html));
    }

    #[test]
    fn exact_types() {
        assert_eq!(choose(Some("application/json")), Some(Representation::Json));
        assert_eq!(choose(Some("text/html")), Some(Representation::Html));
    }

    #[test]
    fn wildcard_is_html() {
        assert_eq!(choose(Some("*/*")), Some(Representation::Html));
    }

    #[test]
    fn browser_accept_header() {
        let accept = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
        assert_eq!(choose(Some(accept)), Some(Representation::Html));
    }

    #[test]
    fn quality_ordering() {
        assert_eq!(
            choose(Some("text/html;q=0.5, application/json")),
            Some(Representation::Json)
        );
        assert_eq!(
            choose(Some("application/json;q=0.2, text/html;q=0.9")),
            Some(Representation::Html)
        );
    }

    #[test]
    fn q_zero_excludes() {
        assert_eq!(
            choose(Some("text/html;q=0, application/json")),
            Some(Representation::Json)
        );
        assert_eq!(choose(Some("text/html;q=0")), None);
    }

    #[test]
    fn unsupported_types() {
        assert_eq!(choose(Some("application/xml")), None);
        assert_eq!(choose(Some("image/png, text/plain")), None);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(choose(Some("Application/JSON")), Some(Representation::Json));
    }
}
