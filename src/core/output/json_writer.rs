//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::aggregate::AggregateRow;
use crate::error::Result;

/// Writes aggregate rows to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"bucket_start": "2023-02-01", "weekday": "Wednesday", "speaker": "Alice",
///    "message_count": 2, "message_length_sum": 20, "contains_emoji_mean": 0.5}
/// ]
/// ```
pub fn write_json(rows: &[AggregateRow], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(rows)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts aggregate rows to a pretty-printed JSON array.
pub fn to_json(rows: &[AggregateRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
