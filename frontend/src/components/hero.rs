//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Q&A Data Cleaner"</h1>
            <p class="subtitle">
                "Upload a question/answer spreadsheet to remove duplicates, fix formatting "
                "and strip sensitive details, then download the cleaned set."
            </p>
        </div>
    }
}
