// src/lookup/mod.rs

use serde::Serialize;
use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::process::RateRecord;

/// Dropdown values derived from a record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupIndex {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
}

impl LookupIndex {
    pub fn build(records: &[RateRecord]) -> Self {
        Self {
            origins: unique_sorted(records.iter().map(|r| r.pol.as_str())),
            destinations: unique_sorted(records.iter().map(|r| r.pod.as_str())),
        }
    }
}

/// Result of a route search.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryOutcome<'a> {
    /// Origin or destination was not chosen.
    SelectionIncomplete,
    NoMatches,
    Matches(Vec<&'a RateRecord>),
}

/// Records whose origin and destination equal the given values exactly, in
/// record order. Blank input matches nothing.
pub fn query<'a>(records: &'a [RateRecord], origin: &str, destination: &str) -> Vec<&'a RateRecord> {
    if origin.trim().is_empty() || destination.trim().is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| r.pol == origin && r.pod == destination)
        .collect()
}

pub fn search<'a>(records: &'a [RateRecord], origin: &str, destination: &str) -> QueryOutcome<'a> {
    if origin.trim().is_empty() || destination.trim().is_empty() {
        return QueryOutcome::SelectionIncomplete;
    }
    match query(records, origin, destination) {
        m if m.is_empty() => QueryOutcome::NoMatches,
        m => QueryOutcome::Matches(m),
    }
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    out.sort_by(|a, b| locale_cmp(a, b));
    out.dedup();
    out
}

/// Dictionary order: accents and case only break ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
