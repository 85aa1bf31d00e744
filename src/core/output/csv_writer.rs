//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::aggregate::AggregateRow;
use crate::error::Result;

const HEADER: [&str; 6] = [
    "bucket_start",
    "weekday",
    "speaker",
    "message_count",
    "message_length_sum",
    "contains_emoji_mean",
];

/// Writes aggregate rows to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Header: `bucket_start;weekday;speaker;message_count;message_length_sum;contains_emoji_mean`,
///   written even when there are no rows
/// - Dates as `YYYY-MM-DD`, weekdays as full English names
/// - Encoding: UTF-8
pub fn write_csv(rows: &[AggregateRow], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(rows, file)
}

/// Converts aggregate rows to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(rows: &[AggregateRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(rows, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(rows: &[AggregateRow], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    // serialize() derives the header from the first row
    if rows.is_empty() {
        writer.write_record(HEADER)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}
