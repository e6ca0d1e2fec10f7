//! Reactive page state.
//!
//! [`PageState`] holds one signal per piece of UI the workflow drives;
//! it implements [`WorkflowView`] by writing those signals, and the
//! components read them.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::export::Download;
use crate::services::{alert, save_download, HttpCleaningService, LocalPreferenceStore};
use crate::types::{AiModeLabel, AppResult, Progress, SharedResult};
use crate::workflow::{UploadWorkflow, WorkflowView};

/// Text of the upload box before a file is chosen.
pub const UPLOAD_PROMPT_TITLE: &str = "Click or drop an Excel file here";
pub const UPLOAD_PROMPT_HINT: &str = "Supports .xlsx and .xls";

/// The workflow as wired in the browser.
pub type BrowserWorkflow = UploadWorkflow<HttpCleaningService, LocalPreferenceStore, PageState>;

/// Signals shared by the page components.
#[derive(Clone, Copy)]
pub struct PageState {
    pub ai_mode: RwSignal<bool>,
    pub ai_label: RwSignal<AiModeLabel>,
    /// Upload box heading and sub-line
    pub selection: RwSignal<Option<(String, String)>>,
    pub submit_enabled: RwSignal<bool>,
    pub status_visible: RwSignal<bool>,
    pub results_visible: RwSignal<bool>,
    pub progress: RwSignal<Progress>,
    pub result: RwSignal<Option<SharedResult>>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            ai_mode: create_rw_signal(false),
            ai_label: create_rw_signal(AiModeLabel::for_mode(false)),
            selection: create_rw_signal(None),
            submit_enabled: create_rw_signal(false),
            status_visible: create_rw_signal(false),
            results_visible: create_rw_signal(false),
            progress: create_rw_signal(Progress::default()),
            result: create_rw_signal(None),
        }
    }

    /// Build the page's workflow around these signals.
    pub fn into_workflow(self) -> Rc<BrowserWorkflow> {
        Rc::new(UploadWorkflow::new(
            HttpCleaningService::default(),
            LocalPreferenceStore,
            self,
        ))
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowView for PageState {
    fn show_ai_mode(&self, enabled: bool, label: AiModeLabel) {
        self.ai_mode.set(enabled);
        self.ai_label.set(label);
    }

    fn show_selection(&self, title: String, size: String) {
        self.selection.set(Some((title, size)));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn set_status_visible(&self, visible: bool) {
        self.status_visible.set(visible);
    }

    fn set_results_visible(&self, visible: bool) {
        self.results_visible.set(visible);
    }

    fn set_progress(&self, progress: Progress) {
        self.progress.set(progress);
    }

    fn show_result(&self, result: SharedResult) {
        self.result.set(Some(result));
    }

    fn alert(&self, message: &str) {
        alert(message);
    }

    fn offer_download(&self, download: Download) -> AppResult<()> {
        save_download(&download)
    }

    async fn pause(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
