//! Browser and backend services.
//!
//! # Services
//!
//! - [`upload`] - Excel upload and Excel regeneration against the cleaning backend
//! - [`storage`] - localStorage preferences (AI mode)
//! - [`download`] - Blob downloads and alerts

pub mod upload;
pub mod storage;
pub mod download;

pub use upload::*;
pub use storage::*;
pub use download::*;
