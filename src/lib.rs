//! Word concordance over a text stream
//!
//! Every distinct word is recorded with the line numbers it appears on, and
//! the result is reported in alphabetical order, one word per line.
//!
//! # Example
//!
//! ```
//! use concordance::{build_concordance, into_sorted, write_report};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("Dogs chase cats.\nCats chase dogs!\n");
//! let (index, _stats) = build_concordance(input).unwrap();
//!
//! let mut out = Vec::new();
//! write_report(&into_sorted(index), &mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "cats 1 2\nchase 1 2\ndogs 1 2\n"
//! );
//! ```

mod error;
mod index;
mod normalize;
mod report;
mod scanner;
mod sort;
mod tokenizer;

// Re-export public API
pub use error::{ConcordanceError, Result};
pub use index::{
    ConcordanceIndex, ConcordanceRecord, LineSummary, SummaryPush, Upsert, Word, WordKey,
    LINE_SUMMARY_CAPACITY, LINE_SUMMARY_MARGIN, WORD_CAPACITY,
};
pub use normalize::{normalize_byte, normalize_in_place, normalize_line};
pub use report::{render_record, write_report};
pub use scanner::{build_concordance, scan_reader, ScanStats};
pub use sort::{into_sorted, sort_records};
pub use tokenizer::{hash_token, tokenize, TokenIterator, TOKEN_SEPARATOR};
