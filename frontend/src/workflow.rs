//! Upload workflow controller.
//!
//! One [`UploadWorkflow`] is built per page. It owns the selected file,
//! the active [`CleanResult`] and the AI mode flag, and drives the
//! upload state machine:
//!
//! ```text
//! Idle ──submit──▶ Uploading ──accepted──▶ Processing ──parsed──▶ Complete
//!                      │                        │
//!                      └──────── error ─────────┴──────────────▶ Failed
//! ```
//!
//! Side effects go through three ports so the controller can run
//! outside a browser:
//!
//! - [`CleaningService`] - the backend (`POST /upload`, `POST /download/excel`)
//! - [`PreferenceStore`] - durable storage for the AI mode flag
//! - [`WorkflowView`] - DOM updates, alerts, downloads and the results delay
//!
//! The submit control being disabled is the only guard against a second
//! upload starting while one is in flight. Nothing here locks or queues.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::{
    backend_port, AI_MODE_STORAGE_KEY, PROGRESS_CLEANING, PROGRESS_COMPLETE, PROGRESS_PROCESSING,
    PROGRESS_UPLOADING, RESULTS_DELAY_MS,
};
use crate::export::{self, Download, ExportFormat};
use crate::types::{
    is_excel_file_name, AiModeLabel, AppError, AppResult, CleanResult, Progress, QaRecord,
    SelectedFile, SharedResult, WorkflowState,
};

// =============================================================================
// Ports
// =============================================================================

/// The remote cleaning service.
///
/// Upload is split in two so the controller can report progress between
/// the request being accepted and its body being parsed.
#[allow(async_fn_in_trait)]
pub trait CleaningService {
    /// Transport handle for a selected file.
    type File: Clone;
    /// An accepted (2xx) response whose body has not been read yet.
    type Response;

    /// Send the file and AI flag. Non-2xx statuses are errors.
    async fn send_upload(&self, file: &Self::File, use_llm: bool) -> AppResult<Self::Response>;

    /// Read and parse the body of an accepted upload.
    async fn read_result(&self, response: Self::Response) -> AppResult<CleanResult>;

    /// Ask the backend to rebuild an `.xlsx` from the records.
    async fn export_excel(&self, records: &[QaRecord]) -> AppResult<Vec<u8>>;
}

/// Durable storage for boolean preferences (localStorage in the browser).
///
/// Flags are stored as the literals `true` / `false`; anything else
/// reads as unset.
pub trait PreferenceStore {
    fn load_flag(&self, key: &str) -> Option<bool>;
    fn save_flag(&self, key: &str, value: bool) -> AppResult<()>;
}

/// Everything the controller shows to the user.
#[allow(async_fn_in_trait)]
pub trait WorkflowView {
    fn show_ai_mode(&self, enabled: bool, label: AiModeLabel);
    fn show_selection(&self, title: String, size: String);
    fn set_submit_enabled(&self, enabled: bool);
    fn set_status_visible(&self, visible: bool);
    fn set_results_visible(&self, visible: bool);
    fn set_progress(&self, progress: Progress);
    fn show_result(&self, result: SharedResult);
    /// Blocking message box.
    fn alert(&self, message: &str);
    fn offer_download(&self, download: Download) -> AppResult<()>;
    /// Wait before switching to the results view.
    async fn pause(&self, millis: u32);
}

// =============================================================================
// Controller
// =============================================================================

/// The page's single workflow controller.
pub struct UploadWorkflow<B: CleaningService, S, V> {
    service: B,
    store: S,
    view: V,
    selected: RefCell<Option<SelectedFile<B::File>>>,
    cleaned: RefCell<Option<SharedResult>>,
    ai_mode: Cell<bool>,
    state: Cell<WorkflowState>,
}

impl<B, S, V> UploadWorkflow<B, S, V>
where
    B: CleaningService,
    S: PreferenceStore,
    V: WorkflowView,
{
    /// Build the controller and restore the persisted AI mode.
    pub fn new(service: B, store: S, view: V) -> Self {
        let ai_mode = store.load_flag(AI_MODE_STORAGE_KEY).unwrap_or(false);

        view.show_ai_mode(ai_mode, AiModeLabel::for_mode(ai_mode));
        view.set_submit_enabled(false);

        Self {
            service,
            store,
            view,
            selected: RefCell::new(None),
            cleaned: RefCell::new(None),
            ai_mode: Cell::new(ai_mode),
            state: Cell::new(WorkflowState::Idle),
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state.get()
    }

    pub fn ai_mode(&self) -> bool {
        self.ai_mode.get()
    }

    /// The active result, if an upload has completed.
    pub fn cleaned_result(&self) -> Option<SharedResult> {
        self.cleaned.borrow().clone()
    }

    pub fn selected_file(&self) -> Option<SelectedFile<B::File>> {
        self.selected.borrow().clone()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // -------------------------------------------------------------------------
    // AI mode
    // -------------------------------------------------------------------------

    /// Toggle change: persist, then update the label.
    pub fn set_ai_mode(&self, enabled: bool) {
        self.ai_mode.set(enabled);

        if let Err(e) = self.store.save_flag(AI_MODE_STORAGE_KEY, enabled) {
            log::warn!("Could not persist AI mode: {}", e);
        }

        self.view.show_ai_mode(enabled, AiModeLabel::for_mode(enabled));

        if enabled {
            log::info!("✅ AI mode enabled - the backend needs its AIBot key configured");
        } else {
            log::info!("⚡ Rule-based mode - no API calls");
        }
    }

    // -------------------------------------------------------------------------
    // File selection
    // -------------------------------------------------------------------------

    /// Accept a file from the browse dialog or a drop.
    ///
    /// `None` (empty selection) is ignored. A non-Excel name is alerted
    /// and leaves every piece of state untouched.
    pub fn select_file(&self, file: Option<SelectedFile<B::File>>) -> AppResult<()> {
        let Some(file) = file else {
            return Ok(());
        };

        if !is_excel_file_name(&file.name) {
            log::warn!("Rejected file: {}", file.name);
            let err = AppError::InvalidFile;
            self.view.alert(&err.to_string());
            return Err(err);
        }

        log::info!("📄 Selected {} ({} bytes)", file.name, file.size);
        self.view.show_selection(file.title_label(), file.size_label());
        *self.selected.borrow_mut() = Some(file);
        self.view.set_submit_enabled(true);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Upload
    // -------------------------------------------------------------------------

    /// Run the upload state machine for the selected file.
    ///
    /// Returns `Ok(None)` when nothing is selected. Failures are reported
    /// to the user here and also returned to the caller.
    pub async fn submit(&self) -> AppResult<Option<SharedResult>> {
        let Some(file) = self.selected.borrow().as_ref().map(|f| f.handle.clone()) else {
            return Ok(None);
        };

        let use_llm = self.ai_mode.get();
        self.state.set(WorkflowState::Uploading);
        self.view.set_submit_enabled(false);
        self.view.set_status_visible(true);
        self.view.set_results_visible(false);
        self.progress(PROGRESS_UPLOADING, "Uploading file...");

        log::info!(
            "🎚️ Uploading with AI mode {}",
            if use_llm { "ON" } else { "OFF (rule-based)" }
        );

        match self.run_upload(&file, use_llm).await {
            Ok(result) => {
                let result = Rc::new(result);
                self.complete(result.clone());
                Ok(Some(result))
            }
            Err(e) => {
                log::error!("❌ Upload failed: {}", e);
                self.state.set(WorkflowState::Failed);
                self.view.set_status_visible(false);
                self.view.set_submit_enabled(true);
                self.view.alert(&format!(
                    "Error processing file: {}\n\nMake sure the backend server is running on port {}",
                    e,
                    backend_port()
                ));
                Err(e)
            }
        }
    }

    async fn run_upload(&self, file: &B::File, use_llm: bool) -> AppResult<CleanResult> {
        let response = self.service.send_upload(file, use_llm).await?;

        self.state.set(WorkflowState::Processing);
        self.progress(
            PROGRESS_PROCESSING,
            if use_llm {
                "Processing with AI..."
            } else {
                "Processing Excel file..."
            },
        );

        let result = self.service.read_result(response).await?;
        self.progress(PROGRESS_CLEANING, "Cleaning and formatting data...");
        self.progress(PROGRESS_COMPLETE, "Complete!");

        self.view.pause(RESULTS_DELAY_MS).await;
        Ok(result)
    }

    fn complete(&self, result: SharedResult) {
        log::info!(
            "✅ {} questions kept ({} duplicates removed, {} issues fixed, original rows: {})",
            result.total_questions,
            result.duplicates_removed,
            result.issues_fixed,
            result
                .original_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string()),
        );

        self.view.set_status_visible(false);
        self.view.set_results_visible(true);
        self.view.show_result(result.clone());
        *self.cleaned.borrow_mut() = Some(result);
        self.state.set(WorkflowState::Complete);
        self.view.set_submit_enabled(true);
    }

    fn progress(&self, percent: u8, message: &str) {
        log::debug!("{}% {}", percent, message);
        self.view.set_progress(Progress::new(percent, message));
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Export the active result. A no-op until an upload has completed.
    pub async fn export(&self, format: ExportFormat) -> AppResult<()> {
        let Some(result) = self.cleaned_result() else {
            return Ok(());
        };

        log::info!("💾 Exporting {} records as {:?}", result.cleaned_data.len(), format);

        let outcome = match export::encode(format, &result.cleaned_data)? {
            Some(download) => self.view.offer_download(download),
            None => self.export_excel(&result.cleaned_data).await,
        };

        if let Err(e) = &outcome {
            log::error!("❌ Export failed: {}", e);
        }
        outcome
    }

    async fn export_excel(&self, records: &[QaRecord]) -> AppResult<()> {
        let saved = match self.service.export_excel(records).await {
            Ok(bytes) => self
                .view
                .offer_download(Download::new(ExportFormat::Excel, bytes)),
            Err(e) => Err(e),
        };

        if let Err(e) = &saved {
            self.view
                .alert(&format!("Error downloading Excel file: {}", e));
        }
        saved
    }
}
