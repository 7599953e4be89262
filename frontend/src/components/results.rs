//! Results view: summary counters, priority filter and ranked questions.

use leptos::*;
use web_sys::File;

use crate::components::QuestionCard;
use crate::controller::UploadController;
use crate::ranking::{ranked_view, PriorityFilter, SummaryStats};

#[component]
fn StatCard(#[prop(into)] value: Signal<usize>, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
pub fn ResultsSection(upload: RwSignal<UploadController<File>>) -> impl IntoView {
    let (filter, set_filter) = create_signal(PriorityFilter::default());

    let stats = create_memo(move |_| upload.with(|u| u.result().map(SummaryStats::from_result)));
    let stat = move |pick: fn(&SummaryStats) -> usize| {
        Signal::derive(move || stats.get().as_ref().map(pick).unwrap_or(0))
    };

    let papers = move || {
        upload.with(|u| {
            u.result()
                .map(|r| r.papers_analyzed.join(" • "))
                .unwrap_or_default()
        })
    };

    // Recomputed on every filter change; ranks restart at 1.
    let visible = move || {
        let current = filter.get();
        upload.with(|u| {
            u.result()
                .map(|r| {
                    ranked_view(&r.ranked_questions, current)
                        .map(|(rank, q)| (rank, q.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    let on_reset = move |_| {
        log::info!("↻ Back to upload");
        upload.update(|u| u.reset());
    };

    view! {
        <div class="results-section">
            <div class="stats-bar">
                <StatCard value=stat(|s| s.papers_analyzed) label="Papers Analyzed"/>
                <StatCard value=stat(|s| s.questions_extracted) label="Questions Found"/>
                <StatCard value=stat(|s| s.groups) label="Unique Groups"/>
            </div>
            <div class="papers-analyzed">{papers}</div>

            <h2 class="results-title">"Ranked Questions by Priority"</h2>
            <div class="filter-row">
                {PriorityFilter::OPTIONS
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class="filter-btn"
                                class:active=move || filter.get() == option
                                on:click=move |_| set_filter.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="question-list">
                <For
                    each=visible
                    key=|(rank, q)| (*rank, q.representative.clone())
                    children=|(rank, question)| {
                        view! { <QuestionCard question=question rank=rank/> }
                    }
                />
            </div>

            <button class="btn btn-secondary" on:click=on_reset>
                "↻ Analyze New Papers"
            </button>
        </div>
    }
}
