//! UI Components for the Q&A Cleaner.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`AiToggle`] - AI-assisted vs rule-based switch
//! - [`UploadSection`] - Excel file selection with drag & drop, submit button
//! - [`StatusPanel`] - Upload progress indicator
//! - [`ResultsPanel`] - Cleaning summary, preview table and exports

mod hero;
mod ai_toggle;
mod upload;
mod status;
mod results;
mod footer;

pub use hero::*;
pub use ai_toggle::*;
pub use upload::*;
pub use status::*;
pub use results::*;
pub use footer::*;
