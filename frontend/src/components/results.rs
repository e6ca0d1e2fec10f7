//! Cleaning summary, preview table and export buttons.

use std::rc::Rc;

use leptos::*;

use crate::export::ExportFormat;
use crate::state::BrowserWorkflow;
use crate::types::Summary;

#[component]
fn StatCard(label: &'static str, value: Signal<u64>, counter_id: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value" id=counter_id>{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
pub fn ResultsPanel(workflow: Rc<BrowserWorkflow>) -> impl IntoView {
    let state = *workflow.view();

    let summary = Signal::derive(move || {
        state
            .result
            .get()
            .map(|r| r.summary())
            .unwrap_or_default()
    });
    let counter = move |pick: fn(&Summary) -> u64| Signal::derive(move || pick(&summary.get()));

    let export = move |format: ExportFormat| {
        let workflow = workflow.clone();
        move |_| {
            let workflow = workflow.clone();
            spawn_local(async move {
                if let Err(e) = workflow.export(format).await {
                    log::debug!("Export ended with error: {}", e);
                }
            });
        }
    };
    let no_result = move || state.result.get().is_none();

    view! {
        <Show
            when=move || state.results_visible.get()
            fallback=|| view! { }
        >
            <div class="results-section" id="resultsSection">
                <div class="stats">
                    <StatCard label="Total Questions" counter_id="totalQuestions" value=counter(|s| s.total_questions)/>
                    <StatCard label="Duplicates Removed" counter_id="removedDuplicates" value=counter(|s| s.duplicates_removed)/>
                    <StatCard label="Issues Fixed" counter_id="fixedIssues" value=counter(|s| s.issues_fixed)/>
                    <StatCard label="Sensitive Info Removed" counter_id="sensitiveInfo" value=counter(|s| s.sensitive_info_removed)/>
                    <StatCard label="Questions Rephrased" counter_id="rephrased" value=counter(|s| s.questions_rephrased)/>
                </div>

                <div class="export-buttons">
                    <button class="btn btn-secondary" id="downloadJsonBtn" disabled=no_result on:click=export(ExportFormat::Json)>
                        "Download JSON"
                    </button>
                    <button class="btn btn-secondary" id="downloadCsvBtn" disabled=no_result on:click=export(ExportFormat::Csv)>
                        "Download CSV"
                    </button>
                    <button class="btn btn-secondary" id="downloadExcelBtn" disabled=no_result on:click=export(ExportFormat::Excel)>
                        "Download Excel"
                    </button>
                </div>

                <table class="preview-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Category"</th>
                            <th>"Question"</th>
                            <th>"Answer"</th>
                        </tr>
                    </thead>
                    // Rebuilt from scratch on every new result; text nodes only
                    <tbody id="previewBody">
                        {move || {
                            state
                                .result
                                .get()
                                .map(|r| r.preview_rows())
                                .unwrap_or_default()
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.index}</td>
                                        <td><span class="category-badge">{row.category}</span></td>
                                        <td>{row.question}</td>
                                        <td>{row.answer}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
