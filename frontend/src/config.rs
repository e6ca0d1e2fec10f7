//! Application configuration.
//!
//! Centralized configuration for the Q&A Cleaner frontend.
//! Values are compile-time constants; the backend origin can be
//! overridden at build time with `QA_CLEANER_BACKEND_URL`.

/// Default backend origin (the cleaning service).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Backend origin used by the HTTP client.
pub fn backend_url() -> &'static str {
    option_env!("QA_CLEANER_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// Port the configured backend listens on, quoted when an upload fails.
pub fn backend_port() -> u16 {
    url_port(backend_url())
}

/// Port of an `http(s)://host[:port][/path]` URL, or the scheme default.
fn url_port(url: &str) -> u16 {
    let (scheme, rest) = url.split_once("://").unwrap_or(("http", url));
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    // Skip IPv6 brackets before looking for the port separator
    let after_host = host_port.rsplit(']').next().unwrap_or_default();

    after_host
        .rsplit_once(':')
        .and_then(|(_, port)| port.parse().ok())
        .unwrap_or(if scheme.eq_ignore_ascii_case("https") { 443 } else { 80 })
}

/// Multipart upload endpoint.
pub const UPLOAD_PATH: &str = "/upload";

/// Excel regeneration endpoint.
pub const EXCEL_EXPORT_PATH: &str = "/download/excel";

/// localStorage key holding the AI mode flag (`"true"` / `"false"`).
pub const AI_MODE_STORAGE_KEY: &str = "useAI";

/// Delay between reaching 100% and switching to the results view.
pub const RESULTS_DELAY_MS: u32 = 500;

/// Progress milestones of the upload workflow.
pub const PROGRESS_UPLOADING: u8 = 20;
pub const PROGRESS_PROCESSING: u8 = 40;
pub const PROGRESS_CLEANING: u8 = 70;
pub const PROGRESS_COMPLETE: u8 = 100;

/// Accepted input extensions, for the browse dialog `accept` attribute.
pub const ACCEPTED_EXTENSIONS: &str = ".xlsx,.xls";

/// Category shown when a record has none.
pub const DEFAULT_CATEGORY: &str = "General";

// Download names and MIME types.
pub const JSON_FILE_NAME: &str = "cleaned_qa_data.json";
pub const JSON_MIME: &str = "application/json";
pub const CSV_FILE_NAME: &str = "cleaned_qa_data.csv";
pub const CSV_MIME: &str = "text/csv";
pub const EXCEL_FILE_NAME: &str = "cleaned_qa_data.xlsx";
pub const EXCEL_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// AI mode status label, enabled state.
pub const AI_LABEL_ENABLED: &str = "Govtech AIBot • Smart & Secure";
pub const AI_COLOR_ENABLED: &str = "#00a651";

/// AI mode status label, disabled state.
pub const AI_LABEL_DISABLED: &str = "Rule-based • Fast & Free";
pub const AI_COLOR_DISABLED: &str = "#7f8c8d";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend_port() {
        assert_eq!(url_port(DEFAULT_BACKEND_URL), 5000);
    }

    #[test]
    fn test_port_follows_backend_url() {
        assert_eq!(url_port("http://127.0.0.1:8080"), 8080);
        assert_eq!(url_port("http://cleaner.local:9000/api/"), 9000);
        assert_eq!(url_port("http://[::1]:7000"), 7000);
        assert_eq!(url_port("http://[::1]"), 80);
        assert_eq!(url_port("http://cleaner.local"), 80);
        assert_eq!(url_port("https://cleaner.example.com/"), 443);
    }
}
