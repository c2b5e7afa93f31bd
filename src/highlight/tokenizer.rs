//! Query tokenizer / Vaicājuma sadalītājs
//!
//! Splits a free-text query into lowercase word tokens (letters, digits, underscore).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Word characters: any Unicode letter or number plus underscore / Vārda rakstzīmes
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").unwrap());

/// Extract unique lowercase tokens in first-occurrence order / Iegūst unikālus tokenus
///
/// The query is NFC-normalised first so a decomposed `a` + U+0304 stays one letter `ā`.
pub fn query_to_tokens(query: &str) -> Vec<String> {
    let lower = query.nfc().collect::<String>().to_lowercase();

    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for m in TOKEN_RE.find_iter(&lower) {
        let token = m.as_str();
        if seen.insert(token) {
            tokens.push(token.to_string());
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_fold_and_dedup() {
        assert_eq!(query_to_tokens("Māja māja"), vec!["māja"]);
    }

    #[test]
    fn test_keeps_first_occurrence_order() {
        let tokens = query_to_tokens("zaļš Koks, ZAĻŠ ābols");
        assert_eq!(tokens, vec!["zaļš", "koks", "ābols"]);
    }

    #[test]
    fn test_blank_query() {
        assert!(query_to_tokens("").is_empty());
        assert!(query_to_tokens("   \t\n").is_empty());
        assert!(query_to_tokens("?! -- ...").is_empty());
    }

    #[test]
    fn test_punctuation_is_delimiter() {
        let tokens = query_to_tokens("likums#2024/grozījumi_v2");
        assert_eq!(tokens, vec!["likums", "2024", "grozījumi_v2"]);
    }

    #[test]
    fn test_decomposed_diacritic_stays_in_token() {
        // "māja" with combining macron
        let tokens = query_to_tokens("ma\u{0304}ja");
        assert_eq!(tokens, vec!["māja"]);
    }
}
