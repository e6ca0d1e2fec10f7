//! Excel upload box with drag & drop support, plus the submit button.
//!
//! Browse and drop feed the same `select_file` path; the submit button
//! starts the upload workflow.

use std::rc::Rc;

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::config::ACCEPTED_EXTENSIONS;
use crate::state::{BrowserWorkflow, UPLOAD_PROMPT_HINT, UPLOAD_PROMPT_TITLE};
use crate::types::SelectedFile;

fn to_selection(file: File) -> SelectedFile<File> {
    SelectedFile::new(file.name(), file.size() as u64, file)
}

#[component]
pub fn UploadSection(workflow: Rc<BrowserWorkflow>) -> impl IntoView {
    let state = *workflow.view();
    let (is_dragover, set_is_dragover) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let select = {
        let workflow = workflow.clone();
        move |file: Option<File>| {
            if let Err(e) = workflow.select_file(file.map(to_selection)) {
                log::debug!("Selection refused: {}", e);
            }
        }
    };

    let on_file_change = {
        let select = select.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            select(input.files().and_then(|files| files.get(0)));
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        select(file);
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // The hidden input sits outside the box so its click does not bubble back
    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_submit = move |_| {
        let workflow = workflow.clone();
        spawn_local(async move {
            if let Err(e) = workflow.submit().await {
                log::debug!("Upload ended with error: {}", e);
            }
        });
    };

    view! {
        <div class="upload-section">
            <div
                class=move || {
                    let mut classes = vec!["upload-box"];
                    if is_dragover.get() {
                        classes.push("drag-over");
                    }
                    if state.selection.get().is_some() {
                        classes.push("file-selected");
                    }
                    classes.join(" ")
                }
                id="uploadBox"
                on:click=trigger_file_input
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <div class="upload-icon">"📊"</div>
                <h3>
                    {move || state
                        .selection
                        .get()
                        .map(|(title, _)| title)
                        .unwrap_or_else(|| UPLOAD_PROMPT_TITLE.to_string())}
                </h3>
                <p>
                    {move || state
                        .selection
                        .get()
                        .map(|(_, size)| size)
                        .unwrap_or_else(|| UPLOAD_PROMPT_HINT.to_string())}
                </p>
            </div>

            <input
                type="file"
                id="fileInput"
                accept=ACCEPTED_EXTENSIONS
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <button
                class="btn btn-primary"
                id="uploadBtn"
                disabled=move || !state.submit_enabled.get()
                on:click=on_submit
            >
                "Clean Data"
            </button>
        </div>
    }
}
