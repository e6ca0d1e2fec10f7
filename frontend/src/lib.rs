//! Q&A Cleaner - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a question/answer spreadsheet to
//! the cleaning backend, reviewing the cleaned result and exporting it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the UploadWorkflow)                       │
//! │  ├── Hero (title, description)                              │
//! │  ├── AiToggle                                               │
//! │  ├── UploadSection (browse / drop, submit)                  │
//! │  ├── StatusPanel (while uploading)                          │
//! │  └── ResultsPanel (summary, table, exports)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (QaRecord, CleanResult, AppError, etc.)
//! - [`workflow`] - Upload state machine and its ports
//! - [`export`] - JSON / CSV encoders
//! - [`state`] - Signals backing the page, `WorkflowView` for the browser
//! - [`components`] - UI components
//! - [`services`] - Backend HTTP client, localStorage, downloads

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod workflow;
pub mod export;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Selection
    SelectedFile,
    // API
    CleanResult, QaRecord,
    // Display
    Summary, PreviewRow, Progress, AiModeLabel,
    // Workflow
    WorkflowState,
    // Errors
    AppError, AppResult,
};

// Workflow
pub use workflow::{CleaningService, PreferenceStore, UploadWorkflow, WorkflowView};
pub use export::{Download, ExportFormat};
pub use state::{BrowserWorkflow, PageState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Q&A Cleaner - Starting Leptos App (backend {})", backend_url());

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Q&A Data Cleaner"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // One controller for the page lifetime
    let workflow = PageState::new().into_workflow();
    let state = *workflow.view();

    view! {
        <div class="container">
            <Hero/>
            <AiToggle workflow=workflow.clone()/>
            <UploadSection workflow=workflow.clone()/>
            <StatusPanel state=state/>
            <ResultsPanel workflow=workflow/>
        </div>

        <Footer/>
    }
}
