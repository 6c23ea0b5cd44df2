// Record filtering - one pass, logical AND of all set criteria
use crate::domain::record::{FilterCriteria, SalesRecord};

/// Narrow `records` to those matching every set criterion. Returns a new
/// collection; the input is untouched. Fully empty criteria return the
/// input content unchanged.
pub fn apply(records: &[SalesRecord], criteria: &FilterCriteria) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
