use crate::error::Result;
use crate::index::{ConcordanceIndex, SummaryPush, Upsert};
use crate::normalize::normalize_line;
use crate::tokenizer::tokenize;
use std::io::BufRead;

/// Counters collected while scanning a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines read, including blank ones
    pub lines: u64,

    /// Tokens handed to the index
    pub tokens: u64,

    /// Tokens dropped for exceeding the word capacity
    pub rejected_words: u64,

    /// Markers skipped because the line was already recorded
    pub duplicate_markers: u64,

    /// Markers dropped because a line summary was full
    pub truncated_markers: u64,
}

impl ScanStats {
    fn record(&mut self, outcome: Upsert) {
        self.tokens += 1;
        match outcome {
            Upsert::Rejected => self.rejected_words += 1,
            Upsert::Stored {
                push: SummaryPush::Duplicate,
                ..
            } => self.duplicate_markers += 1,
            Upsert::Stored {
                push: SummaryPush::Truncated,
                ..
            } => self.truncated_markers += 1,
            Upsert::Stored {
                push: SummaryPush::Appended,
                ..
            } => {}
        }
    }
}

/// Read `reader` to the end, one newline-delimited line at a time, recording
/// every token's line number (1-based) in `index`.
pub fn scan_reader<R: BufRead>(mut reader: R, index: &mut ConcordanceIndex) -> Result<ScanStats> {
    let mut stats = ScanStats::default();
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        stats.lines += 1;
        let line = normalize_line(&buf);

        for token in tokenize(&line) {
            stats.record(index.upsert(token, stats.lines));
        }
    }

    Ok(stats)
}

/// Build a concordance from a whole stream
pub fn build_concordance<R: BufRead>(reader: R) -> Result<(ConcordanceIndex, ScanStats)> {
    let mut index = ConcordanceIndex::new();
    let stats = scan_reader(reader, &mut index)?;
    Ok((index, stats))
}
