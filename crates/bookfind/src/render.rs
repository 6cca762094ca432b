//! HTML rendering of the results area.
//!
//! Every piece of text that came from the API or from the user goes through [`html_escape`]
//! before it is placed in markup, rendering never concatenates raw text into tags.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    api::open_library::SearchResult,
    view::{Card, View, PLACEHOLDER_COVER_URL},
};

const LOADING_HTML: &str = r#"<div class="loading">Searching books...</div>"#;
const NO_RESULTS_HTML: &str =
    r#"<div class="no-results">No books found. Please try a different search.</div>"#;

const STYLE: &str = r#"
    body {
        font-family: system-ui, sans-serif;
        margin: 0;
        padding: 2rem;
        --text-secondary: #5f6368;
    }

    #resultsArea {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
        gap: 1.5rem;
    }

    .book-card {
        border-radius: 8px;
        box-shadow: 0 1px 4px rgba(0, 0, 0, 0.15);
        overflow: hidden;
    }

    .book-cover {
        width: 100%;
        height: 300px;
        object-fit: cover;
    }

    .book-info {
        padding: 1rem;
    }

    .book-title {
        font-size: 1.1rem;
        margin: 0 0 0.5rem;
    }

    .book-author,
    .book-year {
        margin: 0.25rem 0;
        color: var(--text-secondary);
    }

    .loading {
        text-align: center;
        padding: 2rem;
        color: var(--text-secondary);
    }

    .error {
        text-align: center;
        padding: 2rem;
        color: #d32f2f;
    }

    .error-details {
        font-size: 0.9rem;
        margin-top: 0.5rem;
        color: var(--text-secondary);
    }

    .no-results {
        text-align: center;
        padding: 2rem;
        color: var(--text-secondary);
    }
"#;

/// Renders the content of the results area for `view`.
///
/// The returned markup is the complete content of the area: callers replace whatever was shown
/// before with it.
#[must_use]
pub fn render(view: &View) -> String {
    match view {
        View::Loading => LOADING_HTML.to_owned(),
        View::NoResults => NO_RESULTS_HTML.to_owned(),
        View::Failed(message) => render_error(message),
        View::Results(cards) => cards.iter().map(render_card).collect(),
    }
}

/// Renders `results` as cards, or the "no results" message when there are none.
#[must_use]
pub fn render_results(results: &[SearchResult]) -> String {
    render(&View::from_results(results))
}

/// Renders `view` inside a standalone HTML page.
#[must_use]
pub fn page(view: &View) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Book Search</title>
<style>{STYLE}</style>
</head>
<body>
<div id="resultsArea">
{}
</div>
</body>
</html>
"#,
        render(view)
    )
}

fn render_error(message: &str) -> String {
    format!(
        r#"<div class="error">
    <p>Sorry, something went wrong. Please try again later.</p>
    <p class="error-details">Error: {}</p>
</div>"#,
        encode_text(message)
    )
}

fn render_card(card: &Card) -> String {
    let mut html = format!(
        r#"<div class="book-card">
    <img class="book-cover" src="{src}" alt="{alt}" onerror="this.onerror=null;this.src='{PLACEHOLDER_COVER_URL}'">
    <div class="book-info">
        <h2 class="book-title">{title}</h2>
        <p class="book-author">{authors}</p>
"#,
        src = encode_double_quoted_attribute(&card.cover_url),
        alt = encode_double_quoted_attribute(&card.title),
        title = encode_text(&card.title),
        authors = encode_text(&card.authors),
    );

    if let Some(year) = card.year {
        html.push_str(&format!(
            "        <p class=\"book-year\">First published: {year}</p>\n"
        ));
    }

    html.push_str("    </div>\n</div>\n");
    html
}
