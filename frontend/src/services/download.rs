//! Browser file downloads.
//!
//! Wraps bytes in a Blob, points a transient anchor at an object URL,
//! clicks it and releases the URL straight away.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::export::Download;
use crate::types::{AppError, AppResult};

/// Hand `download` to the browser as a file save.
pub fn save_download(download: &Download) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Browser("no document".to_string()))?;

    let parts = Array::of1(&Uint8Array::from(download.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(download.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| AppError::Browser("anchor element".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(download.file_name);
    anchor.click();

    Url::revoke_object_url(&url)?;
    log::debug!("Downloaded {} ({} bytes)", download.file_name, download.bytes.len());
    Ok(())
}

/// Show a blocking message box.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("alert failed: {:?}", e);
            }
        }
        None => log::error!("{}", message),
    }
}
