//! HTML rendering - search page, result cards, status texts / HTML attēlošana
//!
//! Thin presentation layer: everything snippet-related goes through `highlight`,
//! everything else is escaped with `escape_html` before it reaches the page.

use crate::backend::{BackendError, SearchHit};
use crate::highlight::{escape_html, Highlighter};

pub const ALL_CATEGORIES_LABEL: &str = "Visas kategorijas";
pub const NOTHING_FOUND: &str = "Nekas netika atrasts.";
pub const SEARCH_FAILED_FALLBACK: &str = "neizdevās veikt meklēšanu";

/// Status line for a successful search / Rezultātu skaita teksts
pub fn results_status(count: usize) -> String {
    if count == 0 {
        NOTHING_FOUND.to_string()
    } else {
        format!("Atrasto rezultātu skaits: {}", count)
    }
}

/// Status line for a failed search, prefers the backend's own detail / Meklēšanas kļūda
pub fn search_error_status(err: &BackendError) -> String {
    format!("Kļūda: {}", err.user_detail().unwrap_or(SEARCH_FAILED_FALLBACK))
}

/// Status line for a failed category load / Kategoriju ielādes kļūda
pub fn categories_error_status(err: &BackendError) -> String {
    format!("Kategoriju ielādes kļūda: {}", err)
}

/// Rendered search results / Attēlotie rezultāti
#[derive(Debug, Clone, Default)]
pub struct ResultsView {
    pub status: String,
    pub cards_html: String,
}

/// Render one result card / Viena rezultāta kartīte
pub fn render_card(hit: &SearchHit, highlighter: &Highlighter) -> String {
    let meta = format!(
        "Kategorija: {} | Fails: {} | Rezultāts: {}",
        hit.category, hit.source, hit.score
    );

    format!(
        "<article class=\"card\"><div class=\"meta\">{}</div><div class=\"snippet\">{}</div></article>",
        escape_html(&meta),
        highlighter.highlight(&hit.chunk)
    )
}

/// Render all hits with the tokens of the query that produced them / Attēlo rezultātus
pub fn render_results<S: AsRef<str>>(hits: &[SearchHit], tokens: &[S]) -> ResultsView {
    let highlighter = Highlighter::new(tokens);

    let cards_html = hits
        .iter()
        .map(|hit| render_card(hit, &highlighter))
        .collect::<Vec<_>>()
        .join("\n");

    ResultsView {
        status: results_status(hits.len()),
        cards_html,
    }
}

/// Data needed to render the search page / Meklēšanas lapas dati
#[derive(Debug, Clone, Default)]
pub struct PageView<'a> {
    pub query: &'a str,
    pub categories: &'a [String],
    pub selected_category: Option<&'a str>,
    pub status: Option<String>,
    pub results_html: String,
}

/// Render the full search page / Attēlo meklēšanas lapu
pub fn render_page(view: &PageView<'_>) -> String {
    let mut options = format!("<option value=\"\">{}</option>", ALL_CATEGORIES_LABEL);
    for category in view.categories {
        let selected = if view.selected_category == Some(category.as_str()) {
            " selected"
        } else {
            ""
        };
        let escaped = escape_html(category);
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escaped, selected, escaped
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="lv">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Meklēšana</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main>
<h1>Meklēšana</h1>
<form id="search-form" method="get" action="/">
<input id="query" name="query" type="search" value="{query}" placeholder="Meklēt..." autofocus>
<select id="category" name="category">{options}</select>
<button type="submit">Meklēt</button>
</form>
<p id="status">{status}</p>
<section id="results">
{results}
</section>
</main>
</body>
</html>
"#,
        query = escape_html(view.query),
        options = options,
        status = escape_html(view.status.as_deref().unwrap_or("")),
        results = view.results_html,
    )
}
