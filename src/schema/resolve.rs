// src/schema/resolve.rs

use super::fields::FieldSpec;
use super::header::HeaderMap;
use super::keys::normalize_key;

/// Locate the column for one field.
///
/// Exact aliases win, in declared order, whether or not the column is
/// populated. Only when no alias is present are the `tokens` tried: the first
/// header key (in header order) containing every token is taken.
pub fn resolve_column(headers: &HeaderMap, aliases: &[&str], tokens: &[&str]) -> Option<usize> {
    if let Some(idx) = aliases.iter().find_map(|a| headers.get(&normalize_key(a))) {
        return Some(idx);
    }
    if tokens.is_empty() {
        return None;
    }
    let want: Vec<String> = tokens.iter().map(|t| normalize_key(t)).collect();
    headers
        .iter()
        .find(|(key, _)| want.iter().all(|t| key.contains(t.as_str())))
        .map(|(_, idx)| idx)
}

/// Candidate columns for a field, one per fallback family, deduplicated and
/// in family order. A row reads them in order and keeps the first non-empty
/// cell.
pub fn resolve_candidates(headers: &HeaderMap, spec: &FieldSpec) -> Vec<usize> {
    if spec.fallbacks.is_empty() {
        return resolve_column(headers, spec.aliases, &[]).into_iter().collect();
    }
    let mut out: Vec<usize> = Vec::with_capacity(spec.fallbacks.len());
    for tokens in spec.fallbacks {
        if let Some(idx) = resolve_column(headers, spec.aliases, tokens) {
            if !out.contains(&idx) {
                out.push(idx);
            }
        }
    }
    out
}
