//! JSON Lines (JSONL) output writer.
//!
//! One row per line, convenient for appending tables from several chats
//! into a single dataset.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::aggregate::AggregateRow;
use crate::error::Result;

/// Writes aggregate rows in JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"bucket_start":"2023-02-01","weekday":"Wednesday","speaker":"Alice","message_count":1,"message_length_sum":12,"contains_emoji_mean":0.0}
/// ```
pub fn write_jsonl(rows: &[AggregateRow], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(rows, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts aggregate rows to a JSONL string.
pub fn to_jsonl(rows: &[AggregateRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(rows, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(rows: &[AggregateRow], writer: &mut W) -> Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *writer, row)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enrich::Weekday;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn row(speaker: &str) -> AggregateRow {
        AggregateRow {
            bucket_start: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            weekday: Weekday::Wednesday,
            speaker: speaker.to_string(),
            message_count: 1,
            message_length_sum: 12,
            contains_emoji_mean: 0.0,
        }
    }

    #[test]
    fn test_to_jsonl_one_object_per_line() {
        let jsonl = to_jsonl(&[row("Alice"), row("Bob")]).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();

        assert_eq!(lines.len(), 2);
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["message_count"], 1);
        }
        assert!(lines[1].contains(r#""speaker":"Bob""#));
    }

    #[test]
    fn test_write_jsonl_file() {
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&[row("Alice")], temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.ends_with('\n'));
        assert!(content.contains(r#""weekday":"Wednesday""#));
    }
}
