use crate::error::Result;
use crate::index::ConcordanceRecord;
use std::io::Write;

/// Render one report line, without the terminator
pub fn render_record(record: &ConcordanceRecord) -> String {
    record.render()
}

/// Write one `<word><line summary>` line per record and flush.
/// Returns the number of lines written.
pub fn write_report<'a, I, W>(records: I, writer: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = &'a ConcordanceRecord>,
    W: Write,
{
    let mut written = 0;

    for record in records {
        writeln!(writer, "{}{}", record.word.as_str(), record.line_summary.as_str())?;
        written += 1;
    }

    writer.flush()?;

    Ok(written)
}
