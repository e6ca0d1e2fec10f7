//! AI mode switch.

use std::rc::Rc;

use leptos::*;

use crate::state::BrowserWorkflow;

#[component]
pub fn AiToggle(workflow: Rc<BrowserWorkflow>) -> impl IntoView {
    let state = *workflow.view();

    let on_change = move |ev: ev::Event| {
        workflow.set_ai_mode(event_target_checked(&ev));
    };

    view! {
        <div class="ai-toggle">
            <label class="switch">
                <input
                    type="checkbox"
                    id="aiToggle"
                    prop:checked=move || state.ai_mode.get()
                    on:change=on_change
                />
                <span class="slider"></span>
            </label>
            <div class="ai-toggle-text">
                <strong>"AI-assisted cleaning"</strong>
                <span
                    id="aiStatus"
                    style:color=move || state.ai_label.get().color
                >
                    {move || state.ai_label.get().text}
                </span>
            </div>
        </div>
    }
}
