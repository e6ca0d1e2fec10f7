use leptos::*;

use crate::state::PageState;

#[component]
pub fn StatusPanel(state: PageState) -> impl IntoView {
    view! {
        <Show
            when=move || state.status_visible.get()
            fallback=|| view! { }
        >
            <div class="status-section" id="statusSection">
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        id="progressFill"
                        style:width=move || format!("{}%", state.progress.get().percent)
                    ></div>
                </div>
                <p class="status-message" id="statusMessage">
                    {move || state.progress.get().message}
                </p>
            </div>
        </Show>
    }
}
