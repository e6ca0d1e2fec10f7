//! Client-side encoders for the cleaned records.
//!
//! JSON and CSV are produced here from the in-memory result; Excel is
//! regenerated by the backend (see [`crate::services::HttpCleaningService`]).

use crate::config::{CSV_FILE_NAME, CSV_MIME, EXCEL_FILE_NAME, EXCEL_MIME, JSON_FILE_NAME, JSON_MIME};
use crate::types::{AppError, AppResult, QaRecord};

const CSV_HEADER: &str = "Category,Question,Answer\n";

/// The three export triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Excel,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => JSON_FILE_NAME,
            ExportFormat::Csv => CSV_FILE_NAME,
            ExportFormat::Excel => EXCEL_FILE_NAME,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Json => JSON_MIME,
            ExportFormat::Csv => CSV_MIME,
            ExportFormat::Excel => EXCEL_MIME,
        }
    }
}

/// A file ready to be handed to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format.file_name(),
            mime: format.mime(),
            bytes,
        }
    }
}

/// Records as a JSON array, 2-space indented.
pub fn records_to_json(records: &[QaRecord]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Records as CSV: bare header row, then every field double-quoted.
pub fn records_to_csv(records: &[QaRecord]) -> AppResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        writer.write_record([
            record.category_label(),
            record.question.as_str(),
            record.answer.as_str(),
        ])?;
    }

    let body = writer
        .into_inner()
        .map_err(|e| AppError::Serialize(e.error().to_string()))?;
    let body = String::from_utf8(body).map_err(|e| AppError::Serialize(e.to_string()))?;

    Ok(format!("{}{}", CSV_HEADER, body))
}

/// Build the download for a client-side format.
///
/// Excel has no client-side encoder and yields `None`.
pub fn encode(format: ExportFormat, records: &[QaRecord]) -> AppResult<Option<Download>> {
    let content = match format {
        ExportFormat::Json => records_to_json(records)?,
        ExportFormat::Csv => records_to_csv(records)?,
        ExportFormat::Excel => return Ok(None),
    };
    Ok(Some(Download::new(format, content.into_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Option<&str>, question: &str, answer: &str) -> QaRecord {
        QaRecord::new(category, question, answer)
    }

    fn sample() -> Vec<QaRecord> {
        vec![
            record(Some("Billing"), "How do I pay?", "Via portal."),
            record(None, "Refund?", "30 days."),
            record(Some("Quotes"), r#"What does "ASAP" mean?"#, "As soon as possible, usually."),
            record(Some("Multi"), "Line one\nline two?", "Yes,\r\nreally."),
        ]
    }

    #[test]
    fn test_csv_layout() {
        let csv = records_to_csv(&sample()[..2]).unwrap();
        assert_eq!(
            csv,
            "Category,Question,Answer\n\
             \"Billing\",\"How do I pay?\",\"Via portal.\"\n\
             \"General\",\"Refund?\",\"30 days.\"\n"
        );
    }

    #[test]
    fn test_csv_doubles_quotes() {
        let csv = records_to_csv(&sample()[2..3]).unwrap();
        assert!(csv.contains(r#""What does ""ASAP"" mean?""#));
        assert!(csv.contains(r#""As soon as possible, usually.""#));
    }

    #[test]
    fn test_csv_round_trip() {
        let records = sample();
        let csv = records_to_csv(&records).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["Category", "Question", "Answer"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), records.len());
        for (row, original) in rows.iter().zip(&records) {
            assert_eq!(&row[0], original.category_label());
            assert_eq!(&row[1], original.question);
            assert_eq!(&row[2], original.answer);
        }
    }

    #[test]
    fn test_csv_empty() {
        assert_eq!(records_to_csv(&[]).unwrap(), "Category,Question,Answer\n");
    }

    #[test]
    fn test_json_round_trip() {
        let records = sample();
        let json = records_to_json(&records).unwrap();

        let parsed: Vec<QaRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_json_keeps_backend_records_verbatim() {
        let backend = r#"[
            {"category": null, "question": "Refund?", "answer": "30 days."},
            {"question": "Hours?", "answer": "9 to 5."},
            {"category": "Billing", "question": "How do I pay?", "answer": "Via portal.", "id": 7, "source": {"row": 3}}
        ]"#;
        let records: Vec<QaRecord> = serde_json::from_str(backend).unwrap();

        let exported = records_to_json(&records).unwrap();

        let before: serde_json::Value = serde_json::from_str(backend).unwrap();
        let after: serde_json::Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(after, before);

        // CSV still applies the display default
        let csv = records_to_csv(&records).unwrap();
        assert!(csv.contains("\"General\",\"Refund?\""));
        assert!(csv.contains("\"General\",\"Hours?\""));
    }

    #[test]
    fn test_json_indentation() {
        let json = records_to_json(&sample()[..1]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"category\": \"Billing\",\n    \"question\": \"How do I pay?\",\n    \"answer\": \"Via portal.\"\n  }\n]"
        );
    }

    #[test]
    fn test_encode_downloads() {
        let records = sample();

        let json = encode(ExportFormat::Json, &records).unwrap().unwrap();
        assert_eq!(json.file_name, "cleaned_qa_data.json");
        assert_eq!(json.mime, "application/json");

        let csv = encode(ExportFormat::Csv, &records).unwrap().unwrap();
        assert_eq!(csv.file_name, "cleaned_qa_data.csv");
        assert_eq!(csv.mime, "text/csv");
        assert!(csv.bytes.starts_with(b"Category,Question,Answer\n"));

        assert!(encode(ExportFormat::Excel, &records).unwrap().is_none());
        assert_eq!(ExportFormat::Excel.file_name(), "cleaned_qa_data.xlsx");
    }
}
