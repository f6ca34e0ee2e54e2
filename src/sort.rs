use crate::index::{ConcordanceIndex, ConcordanceRecord};

/// Sort records ascending by word, comparing bytes.
/// The sort is stable; records with equal words keep their input order.
pub fn sort_records(mut records: Vec<ConcordanceRecord>) -> Vec<ConcordanceRecord> {
    records.sort_by(|a, b| a.word.as_str().as_bytes().cmp(b.word.as_str().as_bytes()));
    records
}

/// Consume the index into its records in alphabetical order
pub fn into_sorted(index: ConcordanceIndex) -> Vec<ConcordanceRecord> {
    sort_records(index.into_records())
}
