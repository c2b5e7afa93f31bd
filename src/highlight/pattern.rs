//! Latvian flexible pattern builder / Latviešu burtu elastīgais šablons
//!
//! Every letter that has a diacritic counterpart is replaced by a character class
//! covering both forms, so `zale` matches `zāle` and `žale` alike.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Base letter / diacritic letter pairs / Burtu pāri
const LV_LETTER_PAIRS: [(char, char, &str); 11] = [
    ('a', 'ā', "[aā]"),
    ('c', 'č', "[cč]"),
    ('e', 'ē', "[eē]"),
    ('g', 'ģ', "[gģ]"),
    ('i', 'ī', "[iī]"),
    ('k', 'ķ', "[kķ]"),
    ('l', 'ļ', "[lļ]"),
    ('n', 'ņ', "[nņ]"),
    ('s', 'š', "[sš]"),
    ('u', 'ū', "[uū]"),
    ('z', 'ž', "[zž]"),
];

/// Character group table, both letters of a pair share one class / Rakstzīmju grupu tabula
static LV_CHAR_GROUPS: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut groups = HashMap::with_capacity(LV_LETTER_PAIRS.len() * 2);
    for (base, accented, class) in LV_LETTER_PAIRS {
        groups.insert(base, class);
        groups.insert(accented, class);
    }
    groups
});

/// Look up the character class for a lowercase letter / Atrod rakstzīmes klasi
pub fn char_group(ch: char) -> Option<&'static str> {
    LV_CHAR_GROUPS.get(&ch).copied()
}

/// Build a regex fragment matching `token` with any letter swapped for its diacritic pair
///
/// Characters outside the table are escaped literally. One fragment position per `char`,
/// no quantifiers. An empty token yields an empty fragment.
pub fn token_to_pattern(token: &str) -> String {
    let mut pattern = String::with_capacity(token.len() * 4);
    let mut buf = [0u8; 4];

    for ch in token.to_lowercase().chars() {
        match char_group(ch) {
            Some(class) => pattern.push_str(class),
            None => pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
        }
    }

    pattern
}
