//! PDF upload component.
//!
//! Handles file selection, removal and submission to the analysis service.
//! All decisions are taken by [`UploadController`]; this component only
//! forwards DOM events and renders the controller state.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::{LOADING_NOTE, PDF_MIME_TYPE};
use crate::controller::{PaperFile, UploadController};
use crate::services::{AnalysisTransport, HttpAnalyzer};

#[component]
pub fn UploadSection(upload: RwSignal<UploadController<File>>) -> impl IntoView {
    // Handler for the file picker
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else {
            return;
        };

        let picked: Vec<File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        upload.update(|u| {
            if let Err(e) = u.select_files(picked) {
                log::warn!("⚠️ {}", e);
            }
        });
    };

    // Handler for the analyze button
    let on_analyze = move |_| {
        let mut request = None;
        upload.update(|u| match u.begin_submit() {
            Ok(r) => request = Some(r),
            Err(e) => log::warn!("⚠️ {}", e),
        });
        let Some(request) = request else {
            return;
        };

        spawn_local(async move {
            let outcome = HttpAnalyzer::default().analyze(&request).await;
            upload.update(|u| u.complete_submit(outcome));
        });
    };

    let is_submitting = move || upload.with(|u| u.is_submitting());
    let selected = move || {
        upload.with(|u| {
            u.files()
                .iter()
                .map(|f| f.file_name())
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="upload-section">
            <input
                type="file"
                class="file-input"
                multiple=true
                accept=PDF_MIME_TYPE
                disabled=is_submitting
                on:change=on_file_change
            />

            <Show
                when=move || upload.with(|u| !u.files().is_empty())
                fallback=|| view! { }
            >
                <div class="file-list">
                    <h3>"Selected Files (" {move || upload.with(|u| u.files().len())} ")"</h3>
                    <For
                        each=selected
                        key=|(idx, name)| (*idx, name.clone())
                        children=move |(idx, name)| {
                            let on_remove = move |_| {
                                upload.update(|u| {
                                    u.remove_file(idx);
                                });
                            };
                            view! {
                                <div class="file-item">
                                    <span>{name}</span>
                                    <button
                                        class="btn btn-remove"
                                        disabled=is_submitting
                                        on:click=on_remove
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <Show
                when=move || upload.with(|u| u.error().is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || upload.with(|u| u.error().map(|e| e.to_string()).unwrap_or_default())}
                </div>
            </Show>

            <button
                class="btn btn-primary"
                on:click=on_analyze
                disabled=move || upload.with(|u| !u.can_submit())
            >
                {move || upload.with(|u| u.submit_label())}
            </button>

            <Show
                when=is_submitting
                fallback=|| view! { }
            >
                <p class="loading-note">{LOADING_NOTE}</p>
            </Show>
        </div>
    }
}
