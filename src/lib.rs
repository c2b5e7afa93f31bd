pub mod api;
pub mod backend;
pub mod config;
pub mod highlight;
pub mod render;
pub mod state;

pub use api::build_router;
pub use backend::{HttpSearchBackend, SearchBackend, SearchHit, SearchQuery};
pub use highlight::{escape_html, highlight_text, query_to_tokens, token_to_pattern, Highlighter};
pub use state::AppState;
