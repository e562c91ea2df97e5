//! Filtering stage

use chrono::NaiveDate;
use super::{CriteriaFor, Record};

/// Case-insensitive substring match against any searchable field
///
/// Matching is plain lowercase substring; accents are significant.
pub fn matches_search<R: Record>(record: &R, term: &str) -> bool {
    term.is_empty() || contains_lowercase(record, &term.to_lowercase())
}

fn contains_lowercase<R: Record>(record: &R, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keep the records that satisfy every criterion, preserving input order
pub fn apply<'a, R: Record>(records: &'a [R], criteria: &CriteriaFor<R>, today: NaiveDate) -> Vec<&'a R> {
    let window = criteria.date.resolve(today);
    let needle = criteria.search.to_lowercase();

    records
        .iter()
        .filter(|record| needle.is_empty() || contains_lowercase(*record, &needle))
        .filter(|record| {
            criteria
                .filters
                .iter()
                .all(|(field, filter)| filter.matches(record.field_value(*field).as_deref()))
        })
        .filter(|record| window.contains(record.primary_date()))
        .collect()
}
