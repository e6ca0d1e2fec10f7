//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Selection Types** - The file chosen for upload
//! - **API Types** - Backend response structures
//! - **Display Types** - Summary counters, preview rows, progress, AI label
//! - **Workflow Types** - Upload state machine states
//! - **Error Types** - Frontend error handling

use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{
    AI_COLOR_DISABLED, AI_COLOR_ENABLED, AI_LABEL_DISABLED, AI_LABEL_ENABLED, DEFAULT_CATEGORY,
};

// =============================================================================
// Selection Types
// =============================================================================

static EXCEL_NAME: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?i)\.(xlsx|xls)$").ok());

/// Whether a file name carries an Excel extension (`.xlsx` / `.xls`, any case).
pub fn is_excel_file_name(name: &str) -> bool {
    EXCEL_NAME
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// The file the user picked, by browse or by drop.
///
/// `handle` is whatever the upload transport needs (a `web_sys::File`
/// in the browser, plain bytes in tests).
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Transport handle
    pub handle: F,
}

impl<F> SelectedFile<F> {
    pub fn new(name: impl Into<String>, size: u64, handle: F) -> Self {
        Self {
            name: name.into(),
            size,
            handle,
        }
    }

    /// Size in kilobytes, two decimals (`"12.50 KB"`).
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }

    /// Heading shown in the upload box once selected.
    pub fn title_label(&self) -> String {
        format!("Selected: {}", self.name)
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// One cleaned question/answer pair.
///
/// Whatever the backend sent comes back out unchanged on export: an
/// explicit `"category": null` stays null and unknown fields are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    /// Topic: absent (`None`), `null` (`Some(None)`) or a string
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_field"
    )]
    pub category: Option<Option<String>>,
    pub question: String,
    pub answer: String,
    /// Fields this frontend does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Marks a field as present, even when its value is `null`.
fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl QaRecord {
    pub fn new(category: Option<&str>, question: &str, answer: &str) -> Self {
        Self {
            category: category.map(|c| Some(c.to_string())),
            question: question.to_string(),
            answer: answer.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    /// Category to display and export, `"General"` when missing, null or empty.
    pub fn category_label(&self) -> &str {
        match self.category.as_ref().and_then(|c| c.as_deref()) {
            Some(category) if !category.is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }
}

/// Response from the backend upload endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanResult {
    pub total_questions: u64,
    pub duplicates_removed: u64,
    pub issues_fixed: u64,
    #[serde(default)]
    pub sensitive_info_removed: Option<u64>,
    #[serde(default)]
    pub questions_rephrased: Option<u64>,
    /// Rows in the uploaded sheet before cleaning
    #[serde(default)]
    pub original_count: Option<u64>,
    #[serde(default)]
    pub success: Option<bool>,
    pub cleaned_data: Vec<QaRecord>,
}

impl CleanResult {
    /// Counters for the summary cards, optional ones defaulted to 0.
    pub fn summary(&self) -> Summary {
        Summary {
            total_questions: self.total_questions,
            duplicates_removed: self.duplicates_removed,
            issues_fixed: self.issues_fixed,
            sensitive_info_removed: self.sensitive_info_removed.unwrap_or(0),
            questions_rephrased: self.questions_rephrased.unwrap_or(0),
        }
    }

    /// Every record as a table row, in backend order.
    pub fn preview_rows(&self) -> Vec<PreviewRow> {
        self.cleaned_data
            .iter()
            .enumerate()
            .map(|(idx, record)| PreviewRow {
                index: idx + 1,
                category: record.category_label().to_string(),
                question: record.question.clone(),
                answer: record.answer.clone(),
            })
            .collect()
    }
}

// =============================================================================
// Display Types
// =============================================================================

/// The five summary counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_questions: u64,
    pub duplicates_removed: u64,
    pub issues_fixed: u64,
    pub sensitive_info_removed: u64,
    pub questions_rephrased: u64,
}

/// A row of the preview table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRow {
    /// 1-based position
    pub index: usize,
    pub category: String,
    pub question: String,
    pub answer: String,
}

/// Progress bar state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    /// Percentage, 0..=100
    pub percent: u8,
    pub message: String,
}

impl Progress {
    pub fn new(percent: u8, message: impl Into<String>) -> Self {
        Self {
            percent,
            message: message.into(),
        }
    }
}

/// Status label next to the AI toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiModeLabel {
    pub text: &'static str,
    pub color: &'static str,
}

impl AiModeLabel {
    pub fn for_mode(enabled: bool) -> Self {
        if enabled {
            Self {
                text: AI_LABEL_ENABLED,
                color: AI_COLOR_ENABLED,
            }
        } else {
            Self {
                text: AI_LABEL_DISABLED,
                color: AI_COLOR_DISABLED,
            }
        }
    }
}

// =============================================================================
// Workflow Types
// =============================================================================

/// Upload state machine.
///
/// `Idle -> Uploading -> Processing -> Complete`, or `-> Failed` from
/// either in-flight state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkflowState {
    #[default]
    Idle,
    Uploading,
    Processing,
    Complete,
    Failed,
}

impl WorkflowState {
    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, WorkflowState::Uploading | WorkflowState::Processing)
    }
}

/// Shared handle to the active result.
pub type SharedResult = Rc<CleanResult>;

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Selected file is not an Excel workbook.
    #[error("Please select a valid Excel file (.xlsx or .xls)")]
    InvalidFile,

    /// Backend answered with a non-2xx status.
    #[error("{0}")]
    Upload(String),

    /// Transport failure.
    #[error("{0}")]
    Network(String),

    /// Response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Excel regeneration failed.
    #[error("{0}")]
    Export(String),

    /// A browser API call failed.
    #[error("Browser error: {0}")]
    Browser(String),

    /// JSON encoding failed.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialize(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Serialize(err.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for AppError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        AppError::Browser(format!("{:?}", err))
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{"total_questions":2,"duplicates_removed":1,"issues_fixed":0,"cleaned_data":[{"category":"Billing","question":"How do I pay?","answer":"Via portal."},{"question":"Refund?","answer":"30 days."}]}"#;

    #[test]
    fn test_excel_name_matching() {
        assert!(is_excel_file_name("faq.xlsx"));
        assert!(is_excel_file_name("faq.xls"));
        assert!(is_excel_file_name("FAQ.XLSX"));
        assert!(is_excel_file_name("report.final.Xls"));

        assert!(!is_excel_file_name("faq.csv"));
        assert!(!is_excel_file_name("faq.xlsx.txt"));
        assert!(!is_excel_file_name("xlsx"));
        assert!(!is_excel_file_name("faq.xlsm"));
        assert!(!is_excel_file_name(""));
    }

    #[test]
    fn test_size_label() {
        let file = SelectedFile::new("faq.xlsx", 12_800, ());
        assert_eq!(file.size_label(), "12.50 KB");
        assert_eq!(file.title_label(), "Selected: faq.xlsx");

        let tiny = SelectedFile::new("a.xls", 1, ());
        assert_eq!(tiny.size_label(), "0.00 KB");

        let odd = SelectedFile::new("b.xls", 1000, ());
        assert_eq!(odd.size_label(), "0.98 KB");
    }

    #[test]
    fn test_scenario_deserialization() {
        let result: CleanResult = serde_json::from_str(SCENARIO).unwrap();

        assert_eq!(result.cleaned_data.len(), 2);
        assert_eq!(result.sensitive_info_removed, None);

        let summary = result.summary();
        assert_eq!(summary.total_questions, 2);
        assert_eq!(summary.duplicates_removed, 1);
        assert_eq!(summary.issues_fixed, 0);
        assert_eq!(summary.sensitive_info_removed, 0);
        assert_eq!(summary.questions_rephrased, 0);

        let rows = result.preview_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].category, "Billing");
        assert_eq!(rows[0].question, "How do I pay?");
        assert_eq!(rows[0].answer, "Via portal.");
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].category, "General");
        assert_eq!(rows[1].question, "Refund?");
        assert_eq!(rows[1].answer, "30 days.");
    }

    #[test]
    fn test_full_backend_response() {
        let json = r#"{
            "success": true,
            "cleaned_data": [{"category": "Fever Management", "question": "What should be done when fever?", "answer": "Rest."}],
            "total_questions": 1,
            "duplicates_removed": 3,
            "issues_fixed": 2,
            "sensitive_info_removed": 1,
            "questions_rephrased": 1,
            "original_count": 6
        }"#;

        let result: CleanResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.success, Some(true));
        assert_eq!(result.original_count, Some(6));
        assert_eq!(result.summary().sensitive_info_removed, 1);
        assert_eq!(result.summary().questions_rephrased, 1);
    }

    #[test]
    fn test_empty_category_falls_back() {
        let record = QaRecord::new(Some(""), "Q?", "A.");
        assert_eq!(record.category_label(), "General");

        let null: QaRecord =
            serde_json::from_str(r#"{"category": null, "question": "Q?", "answer": "A."}"#).unwrap();
        assert_eq!(null.category, Some(None));
        assert_eq!(null.category_label(), "General");
    }

    #[test]
    fn test_markup_kept_verbatim() {
        let json = r#"{"total_questions":1,"duplicates_removed":0,"issues_fixed":0,"cleaned_data":[{"question":"</td><td>x","answer":"<b>bold</b>"}]}"#;
        let result: CleanResult = serde_json::from_str(json).unwrap();
        let rows = result.preview_rows();
        assert_eq!(rows[0].question, "</td><td>x");
        assert_eq!(rows[0].answer, "<b>bold</b>");
    }

    #[test]
    fn test_ai_mode_label() {
        let on = AiModeLabel::for_mode(true);
        assert_eq!(on.text, "Govtech AIBot • Smart & Secure");
        assert_eq!(on.color, "#00a651");

        let off = AiModeLabel::for_mode(false);
        assert_eq!(off.text, "Rule-based • Fast & Free");
        assert_eq!(off.color, "#7f8c8d");
    }

    #[test]
    fn test_busy_states() {
        assert!(WorkflowState::Uploading.is_busy());
        assert!(WorkflowState::Processing.is_busy());
        assert!(!WorkflowState::Idle.is_busy());
        assert!(!WorkflowState::Complete.is_busy());
        assert!(!WorkflowState::Failed.is_busy());
    }
}
