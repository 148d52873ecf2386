//! Duplicate-title diagnostic. Reports only; records are never removed.

use std::collections::{BTreeMap, HashMap};

use movie_model::CleanRecord;

/// Cleaned titles shared by two or more records, with their record counts.
pub fn duplicate_titles(records: &[CleanRecord]) -> BTreeMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.title.as_str()).or_insert(0) += 1;
    }
    counts.into_iter().filter(|(_, count)| *count > 1).collect()
}
