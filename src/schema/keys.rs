// src/schema/keys.rs

use unicode_normalization::UnicodeNormalization;

/// Canonical, comparable form of a header or token.
///
///  - NFKC normalize (full-width and ligature forms fold to plain text)
///  - NBSP becomes an ordinary space
///  - anything that is not a letter, digit or `_` becomes a space, as do
///    letters with no lowercase form (e.g. enclosed capitals)
///  - whitespace runs collapse to one space, ends trimmed
///  - lower-cased
///
/// Total over any input and idempotent.
pub fn normalize_key(raw: &str) -> String {
    let folded: String = raw.nfkc().collect::<String>().replace('\u{00A0}', " ");

    let mut out = String::with_capacity(folded.len());
    let mut pending_space = false;
    for ch in folded.chars().flat_map(char::to_lowercase) {
        if (ch.is_alphanumeric() && !ch.is_uppercase()) || ch == '_' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            pending_space = true;
        }
    }
    out
}

/// Trim a cell value for storage; `None` is an empty cell.
pub fn clean_cell(raw: Option<&String>) -> String {
    raw.map(|s| s.trim().to_string()).unwrap_or_default()
}
