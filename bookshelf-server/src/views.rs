//! HTML views
//!
//! Four pages (index, list, details, reviews) sharing one layout. Every
//! interpolated value goes through [`escape`].

use std::fmt::Write;

use url::form_urlencoded;

use crate::models::{Book, BookSummary, PageWindow};
use crate::reviews::{join_authors, ReviewPage};

/// Data for the search results page
#[derive(Debug, Clone)]
pub struct ListView<'a> {
    pub q: &'a str,
    pub books: &'a [BookSummary],
    pub window: PageWindow,
}

impl ListView<'_> {
    pub fn has_results(&self) -> bool {
        !self.books.is_empty()
    }
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn query_string(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Landing page: one link per leading character plus a free-text search.
pub fn index() -> String {
    let mut body = String::from("<h1>Book Catalog</h1>\n<nav class=\"letters\">\n");
    for c in ('A'..='Z').chain('0'..='9') {
        let letter = c.to_string();
        let _ = writeln!(
            body,
            r#"<a href="/list?{}">{}</a>"#,
            escape(&query_string(&[("q", letter.as_str()), ("offset", "0")])),
            letter
        );
    }
    body.push_str("</nav>\n");
    body.push_str(
        r#"<form method="get" action="/list">
<input type="text" name="q" placeholder="Title starts with...">
<input type="hidden" name="offset" value="0">
<button type="submit">Search</button>
</form>"#,
    );
    layout("Book Catalog", &body)
}

/// Search results with previous/next links.
pub fn list(view: &ListView<'_>) -> String {
    let mut body = format!("<h1>Titles starting with &quot;{}&quot;</h1>\n", escape(view.q));

    if view.has_results() {
        body.push_str("<ol class=\"books\">\n");
        for book in view.books {
            let _ = writeln!(
                body,
                r#"<li><a href="/details/{}">{}</a></li>"#,
                escape(&form_urlencoded::byte_serialize(book.book_id.as_bytes()).collect::<String>()),
                escape(&book.title)
            );
        }
        body.push_str("</ol>\n");
    } else {
        body.push_str("<p class=\"empty\">No books found.</p>\n");
    }

    body.push_str("<nav class=\"pager\">\n");
    if view.window.has_less {
        let offset = view.window.prev_offset.to_string();
        let _ = writeln!(
            body,
            r#"<a rel="prev" href="/list?{}">Previous</a>"#,
            escape(&query_string(&[("q", view.q), ("offset", offset.as_str())]))
        );
    }
    if view.window.has_more {
        let offset = view.window.next_offset.to_string();
        let _ = writeln!(
            body,
            r#"<a rel="next" href="/list?{}">Next</a>"#,
            escape(&query_string(&[("q", view.q), ("offset", offset.as_str())]))
        );
    }
    body.push_str("<a href=\"/\">Back</a>\n</nav>");

    layout(&format!("Search: {}", view.q), &body)
}

/// One book's record.
pub fn details(book: &Book) -> String {
    let reviews_href = query_string(&[
        ("title", book.title.as_str()),
        ("author", join_authors(&book.authors).as_str()),
    ]);

    let body = format!(
        r#"<h1>{title}</h1>
<dl class="details">
<dt>Authors</dt><dd class="authors">{authors}</dd>
<dt>Genres</dt><dd class="genres">{genres}</dd>
<dt>Pages</dt><dd class="pages">{pages}</dd>
<dt>Rating</dt><dd class="rating">{rating:.2} ({rating_count} ratings)</dd>
</dl>
<p class="description">{description}</p>
<nav>
<a href="/reviews?{reviews_href}">Reviews</a>
<a href="/">Back</a>
</nav>"#,
        title = escape(&book.title),
        authors = escape(&book.authors_text()),
        genres = escape(&book.genres_text()),
        pages = book.pages,
        rating = book.rating,
        rating_count = book.rating_count,
        description = escape(&book.description),
        reviews_href = escape(&reviews_href),
    );

    layout(&book.title, &body)
}

/// Reviews returned by the upstream API.
pub fn reviews(page: &ReviewPage) -> String {
    let mut body = format!("<h1>Reviews of {}</h1>\n", escape(&page.title));
    if !page.author.is_empty() {
        let _ = writeln!(body, "<p class=\"by\">by {}</p>", escape(&page.author));
    }
    let _ = writeln!(body, "<p class=\"count\">{} review(s) found</p>", page.num_results);

    if page.has_reviews {
        body.push_str("<ul class=\"reviews\">\n");
        for review in &page.reviews {
            let _ = writeln!(
                body,
                r#"<li>
<h2>{title}</h2>
<p class="author">{author}</p>
<p class="byline">{byline} ({date})</p>
<p class="summary">{summary}</p>
<a href="{url}">Read review</a>
</li>"#,
                title = escape(&review.book_title),
                author = escape(&review.book_author),
                byline = escape(&review.byline),
                date = escape(&review.publication_date),
                summary = escape(&review.summary),
                url = escape(&review.url),
            );
        }
        body.push_str("</ul>\n");
    } else {
        body.push_str("<p class=\"empty\">No reviews found.</p>\n");
    }

    let _ = write!(
        body,
        "<footer class=\"copyright\">{}</footer>\n<a href=\"/\">Back</a>",
        escape(&page.copyright)
    );

    layout(&format!("Reviews: {}", page.title), &body)
}
