//! CSV record exporter.

use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::record::MessageRecord;

/// Writes parsed records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Participant`, `Message`
/// - Encoding: UTF-8
///
/// Records without a parsed timestamp get an empty timestamp column.
pub fn write_records_csv(records: &[MessageRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(file);

    writer.write_record(["Timestamp", "Participant", "Message"])?;

    for record in records {
        writer.write_record([
            record
                .timestamp()
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            record.participant().to_string(),
            record.body().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_transcript;
    use crate::record::{MessageRecord, Participant};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_records_csv() {
        let records = parse_transcript(
            "1/2/2024, 10:30 AM - Alice: hello\n1/2/2024, 10:31 AM - Bob: hi there",
        );

        let temp_file = NamedTempFile::new().unwrap();
        write_records_csv(&records, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("Timestamp;Participant;Message"));
        assert!(content.contains("2024-02-01 10:30:00;Alice;hello"));
        assert!(content.contains("2024-02-01 10:31:00;Bob;hi there"));
    }

    #[test]
    fn test_write_records_csv_without_timestamp() {
        let records = vec![MessageRecord::new(Participant::member("Alice"), "hi")];

        let temp_file = NamedTempFile::new().unwrap();
        write_records_csv(&records, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains(";Alice;hi"));
    }

    #[test]
    fn test_write_group_notice_row() {
        let records = vec![MessageRecord::new(Participant::GroupNotice, "secured")];

        let temp_file = NamedTempFile::new().unwrap();
        write_records_csv(&records, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("Group notice;secured"));
    }
}
