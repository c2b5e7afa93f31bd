//! Highlight module - diacritic-aware keyword highlighting / Iezīmēšanas modulis
//!
//! Pipeline / Plūsma：
//! - Tokenizer: query text -> lowercase unique tokens
//! - Pattern builder: token -> regex fragment, Latvian letters widened to `[aā]` style classes
//! - Highlighter: escape snippet for HTML, then wrap every match in `<mark class="hit">`
//!
//! All functions are pure, the caller owns the token set for one search.

pub mod markup;
pub mod pattern;
pub mod tokenizer;

pub use markup::{escape_html, highlight_text, Highlighter, HIGHLIGHT_CLASS};
pub use pattern::{char_group, token_to_pattern};
pub use tokenizer::query_to_tokens;
