use crate::tokenizer::hash_token;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Longest accepted word, in bytes
pub const WORD_CAPACITY: usize = 45;

/// Capacity of a rendered line summary, in bytes
pub const LINE_SUMMARY_CAPACITY: usize = 16535;

/// Headroom kept below `LINE_SUMMARY_CAPACITY`; appends stop once it is reached
pub const LINE_SUMMARY_MARGIN: usize = 16;

/// Index key derived from a word by `hash_token`
pub type WordKey = u32;

// ============================================================================
// Bounded value types
// ============================================================================

/// A token accepted into the index (at most `WORD_CAPACITY` bytes)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Accept a token, or `None` if it exceeds `WORD_CAPACITY`.
    /// Oversized tokens are rejected whole, never truncated.
    pub fn new(text: &str) -> Option<Self> {
        if text.len() > WORD_CAPACITY {
            None
        } else {
            Some(Self(text.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result of pushing a line number onto a `LineSummary`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPush {
    /// The marker was appended
    Appended,
    /// The marker text was already present
    Duplicate,
    /// The summary reached its threshold; the marker was dropped
    Truncated,
}

/// Space-prefixed decimal line numbers, in insertion order, bounded in length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSummary {
    text: String,
}

impl LineSummary {
    /// Rendered length at which appends stop for good
    pub const THRESHOLD: usize = LINE_SUMMARY_CAPACITY - LINE_SUMMARY_MARGIN;

    pub fn new() -> Self {
        Self::default()
    }

    /// Render a line number as its marker, e.g. `" 21"`
    pub fn marker(line_number: u64) -> String {
        format!(" {}", line_number)
    }

    /// Append the marker for `line_number` unless the summary is frozen or
    /// the marker text already occurs in it.
    pub fn push(&mut self, line_number: u64) -> SummaryPush {
        if self.is_frozen() {
            return SummaryPush::Truncated;
        }

        let marker = Self::marker(line_number);
        if self.text.contains(&marker) {
            return SummaryPush::Duplicate;
        }

        self.text.push_str(&marker);
        SummaryPush::Appended
    }

    /// True once no further markers will ever be appended
    pub fn is_frozen(&self) -> bool {
        self.text.len() >= Self::THRESHOLD
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the recorded line numbers
    pub fn line_numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.text.split(' ').filter_map(|n| n.parse().ok())
    }
}

// ============================================================================
// ConcordanceRecord
// ============================================================================

/// One distinct key in the concordance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcordanceRecord {
    pub key: WordKey,

    /// Text of the most recent token stored under `key`
    pub word: Word,

    pub line_summary: LineSummary,
}

impl ConcordanceRecord {
    fn new(key: WordKey, word: Word) -> Self {
        Self {
            key,
            word,
            line_summary: LineSummary::new(),
        }
    }

    /// Render as a report line without the terminator, e.g. `apple 3 7 21`
    pub fn render(&self) -> String {
        format!("{}{}", self.word.as_str(), self.line_summary.as_str())
    }
}

// ============================================================================
// ConcordanceIndex
// ============================================================================

/// Outcome of `ConcordanceIndex::upsert`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// Word longer than `WORD_CAPACITY`; nothing stored
    Rejected,
    /// Word stored; `created` is true when a new record was made
    Stored { created: bool, push: SummaryPush },
}

/// Map from word key to record
///
/// The key is trusted as the word's identity: two words with the same hash
/// share one record, and the record's `word` becomes whichever was stored last.
#[derive(Debug, Default)]
pub struct ConcordanceIndex {
    records: FxHashMap<WordKey, ConcordanceRecord>,
}

impl ConcordanceIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `word` occurs on `line_number`
    pub fn upsert(&mut self, token: &str, line_number: u64) -> Upsert {
        let Some(word) = Word::new(token) else {
            debug!(
                word = token,
                len = token.len(),
                capacity = WORD_CAPACITY,
                "rejecting word that exceeds capacity"
            );
            return Upsert::Rejected;
        };

        let key = hash_token(word.as_str());
        let mut created = false;
        let record = self.records.entry(key).or_insert_with(|| {
            created = true;
            ConcordanceRecord::new(key, word.clone())
        });
        record.word = word;

        let push = record.line_summary.push(line_number);
        if push == SummaryPush::Truncated {
            debug!(
                word = record.word.as_str(),
                len = record.line_summary.len(),
                line_number,
                "line summary exceeds capacity"
            );
        }

        Upsert::Stored { created, push }
    }

    /// Get record by key
    pub fn find(&self, key: WordKey) -> Option<&ConcordanceRecord> {
        self.records.get(&key)
    }

    /// Get record for a word, via its key
    pub fn get(&self, word: &str) -> Option<&ConcordanceRecord> {
        self.find(hash_token(word))
    }

    /// Iterate over all records in no particular order
    pub fn records(&self) -> impl Iterator<Item = &ConcordanceRecord> + '_ {
        self.records.values()
    }

    /// Consume the index into its records, in no particular order
    pub fn into_records(self) -> Vec<ConcordanceRecord> {
        self.records.into_values().collect()
    }

    /// Get total distinct records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_index() {
        let index = ConcordanceIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.records().count(), 0);
    }

    #[test]
    fn test_upsert_creates_record() {
        let mut index = ConcordanceIndex::new();
        let outcome = index.upsert("apple", 3);

        assert_eq!(
            outcome,
            Upsert::Stored {
                created: true,
                push: SummaryPush::Appended
            }
        );
        let record = index.find(hash_token("apple")).unwrap();
        assert_eq!(record.word.as_str(), "apple");
        assert_eq!(record.line_summary.as_str(), " 3");
    }

    #[test]
    fn test_upsert_appends_lines() {
        let mut index = ConcordanceIndex::new();
        index.upsert("apple", 3);
        index.upsert("apple", 7);
        index.upsert("apple", 21);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("apple").unwrap().render(), "apple 3 7 21");
    }

    #[test]
    fn test_duplicate_line_is_noop() {
        let mut once = ConcordanceIndex::new();
        once.upsert("cat", 4);

        let mut twice = ConcordanceIndex::new();
        twice.upsert("cat", 4);
        let outcome = twice.upsert("cat", 4);

        assert_eq!(
            outcome,
            Upsert::Stored {
                created: false,
                push: SummaryPush::Duplicate
            }
        );
        assert_eq!(
            once.get("cat").unwrap().line_summary,
            twice.get("cat").unwrap().line_summary
        );
    }

    #[test]
    fn test_duplicate_check_is_textual() {
        let mut summary = LineSummary::new();
        assert_eq!(summary.push(12), SummaryPush::Appended);
        // " 1" already occurs inside " 12"
        assert_eq!(summary.push(1), SummaryPush::Duplicate);
        assert_eq!(summary.as_str(), " 12");
    }

    #[test]
    fn test_word_capacity_boundary() {
        let mut index = ConcordanceIndex::new();
        let fits = "a".repeat(WORD_CAPACITY);
        let too_long = "b".repeat(WORD_CAPACITY + 1);

        assert!(matches!(index.upsert(&fits, 1), Upsert::Stored { .. }));
        assert_eq!(index.upsert(&too_long, 1), Upsert::Rejected);

        assert_eq!(index.len(), 1);
        assert!(index.get(&too_long).is_none());
    }

    #[test]
    fn test_collision_merges_and_overwrites_word() {
        let mut index = ConcordanceIndex::new();
        index.upsert("ae", 1);
        index.upsert("c'", 2);

        assert_eq!(index.len(), 1);
        let record = index.find(hash_token("ae")).unwrap();
        assert_eq!(record.word.as_str(), "c'");
        assert_eq!(record.line_summary.as_str(), " 1 2");
    }

    #[test]
    fn test_summary_freezes_at_threshold() {
        let mut index = ConcordanceIndex::new();
        let mut line = 0u64;
        loop {
            line += 1;
            if let Upsert::Stored {
                push: SummaryPush::Truncated,
                ..
            } = index.upsert("the", line)
            {
                break;
            }
        }

        let summary = index.get("the").unwrap().line_summary.clone();
        assert!(summary.len() >= LineSummary::THRESHOLD);
        assert!(summary.len() < LineSummary::THRESHOLD + LineSummary::marker(line).len());

        // Nothing is ever appended again, even for new line numbers
        index.upsert("the", line + 1000);
        assert_eq!(index.get("the").unwrap().line_summary, summary);

        // The summary is an exact prefix of the full rendering
        let expected: String = (1..line).map(LineSummary::marker).collect();
        assert_eq!(summary.as_str(), expected);
        assert_eq!(summary.line_numbers().last(), Some(line - 1));
    }

    #[test]
    fn test_truncated_word_still_indexed() {
        let mut index = ConcordanceIndex::new();
        for line in 1..=5000 {
            index.upsert("and", line);
        }
        let record = index.get("and").unwrap();
        assert!(record.line_summary.is_frozen());
        assert_eq!(record.line_summary.line_numbers().next(), Some(1));
    }

    #[test]
    fn test_into_records() {
        let mut index = ConcordanceIndex::new();
        index.upsert("dogs", 1);
        index.upsert("cats", 1);
        index.upsert("dogs", 2);

        let mut words: Vec<_> = index
            .into_records()
            .into_iter()
            .map(|r| r.word.as_str().to_owned())
            .collect();
        words.sort();
        assert_eq!(words, vec!["cats", "dogs"]);
    }
}
