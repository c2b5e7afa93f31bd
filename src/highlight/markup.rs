//! Snippet escaping and highlight markup / Fragmentu aizsardzība un iezīmēšana
//!
//! Order is fixed: the snippet is HTML-escaped first, markers are inserted afterwards.
//! Markers never land inside an entity produced by the escape step.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use unicode_normalization::UnicodeNormalization;

use super::pattern::token_to_pattern;

/// CSS class of the highlight marker / Iezīmes CSS klase
pub const HIGHLIGHT_CLASS: &str = "hit";

const MARK_OPEN: &str = "<mark class=\"hit\">";
const MARK_CLOSE: &str = "</mark>";

/// Entities emitted by `escape_html`
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&(?:amp|lt|gt|quot|#39);").unwrap());

/// Escape text for embedding into HTML / Aizsargā tekstu iegulšanai HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Compiled highlighter for one token set / Iezīmētājs vienam tokenu kopumam
///
/// Build it once per search and reuse it for every snippet of the response.
#[derive(Debug, Clone)]
pub struct Highlighter {
    regex: Option<Regex>,
}

impl Highlighter {
    /// Compile the alternation of all token patterns
    ///
    /// Tokens with an empty pattern are skipped; with nothing left the highlighter only escapes.
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Self {
        let alternation = tokens
            .iter()
            .map(|token| token_to_pattern(token.as_ref()))
            .filter(|pattern| !pattern.is_empty())
            .collect::<Vec<_>>()
            .join("|");

        if alternation.is_empty() {
            return Self { regex: None };
        }

        let regex = RegexBuilder::new(&format!("(?:{})", alternation))
            .case_insensitive(true)
            .unicode(true)
            .build();

        match regex {
            Ok(regex) => Self { regex: Some(regex) },
            Err(e) => {
                tracing::warn!("Highlight pattern rejected, falling back to plain text: {}", e);
                Self { regex: None }
            }
        }
    }

    /// Whether any token pattern is active
    pub fn is_active(&self) -> bool {
        self.regex.is_some()
    }

    /// Escape `text` and wrap every match in a highlight marker / Iezīmē fragmentu
    ///
    /// Without an active pattern the text is only escaped, code points untouched.
    /// With one, matching runs on the NFC form, so the output is canonically
    /// equivalent to the input rather than byte-identical.
    pub fn highlight(&self, text: &str) -> String {
        let Some(regex) = &self.regex else {
            return escape_html(text);
        };

        let normalized: String = text.nfc().collect();
        let safe = escape_html(&normalized);

        let mut out = String::with_capacity(safe.len() + 32);
        let mut last = 0;
        for entity in ENTITY_RE.find_iter(&safe) {
            mark_matches(regex, &safe[last..entity.start()], &mut out);
            out.push_str(entity.as_str());
            last = entity.end();
        }
        mark_matches(regex, &safe[last..], &mut out);

        out
    }
}

fn mark_matches(regex: &Regex, segment: &str, out: &mut String) {
    let mut last = 0;
    for m in regex.find_iter(segment) {
        if m.start() == m.end() {
            continue;
        }
        out.push_str(&segment[last..m.start()]);
        out.push_str(MARK_OPEN);
        out.push_str(m.as_str());
        out.push_str(MARK_CLOSE);
        last = m.end();
    }
    out.push_str(&segment[last..]);
}

/// One-shot helper: escape `text` and highlight every token match / Vienreizēja iezīmēšana
pub fn highlight_text<S: AsRef<str>>(text: &str, tokens: &[S]) -> String {
    Highlighter::new(tokens).highlight(text)
}
