// src/schema/header.rs

use serde::Serialize;
use tracing::debug;

use super::fields::{DESTINATION_SYNONYMS, ORIGIN_SYNONYMS};
use super::keys::normalize_key;

/// Canonical header key → column index, in first-seen key order.
///
/// A key repeated across columns keeps its first position but points at the
/// last column carrying it. Blank headers are not mapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderMap {
    entries: Vec<(String, usize)>,
}

impl HeaderMap {
    pub fn from_row(raw_headers: &[String]) -> Self {
        let mut map = HeaderMap::default();
        for (idx, raw) in raw_headers.iter().enumerate() {
            let key = normalize_key(raw);
            if key.is_empty() {
                continue;
            }
            match map.entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = idx,
                None => map.entries.push((key, idx)),
            }
        }
        map
    }

    /// Exact lookup; `key` must already be canonical.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, idx)| *idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, idx)| (k.as_str(), *idx))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const DEFAULT_MAX_SCAN: usize = 25;

/// Find the first of the leading `max_scan` rows that names both an origin
/// and a destination column. Falls back to row 0 when none does.
pub fn locate_header_row(matrix: &[Vec<String>], max_scan: usize) -> usize {
    let origin: Vec<String> = ORIGIN_SYNONYMS.iter().map(|s| normalize_key(s)).collect();
    let destination: Vec<String> = DESTINATION_SYNONYMS
        .iter()
        .map(|s| normalize_key(s))
        .collect();

    for (idx, row) in matrix.iter().take(max_scan).enumerate() {
        let keys: Vec<String> = row.iter().map(|c| normalize_key(c)).collect();
        let has_origin = keys.iter().any(|k| origin.contains(k));
        let has_destination = keys.iter().any(|k| destination.contains(k));
        if has_origin && has_destination {
            debug!(row = idx, "header row located");
            return idx;
        }
    }

    debug!(
        scanned = matrix.len().min(max_scan),
        "no header row found, using row 0"
    );
    0
}
