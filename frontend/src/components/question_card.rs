//! One ranked question group.

use leptos::*;

use crate::ranking::{count_text, VariantDisclosure};
use crate::types::RankedQuestion;

/// Card for `question` shown at position `rank` of the current view.
///
/// The variant list is collapsed by default and its state is local to
/// the card.
#[component]
pub fn QuestionCard(question: RankedQuestion, rank: usize) -> impl IntoView {
    let (disclosure, set_disclosure) = create_signal(VariantDisclosure::for_question(&question));
    let toggleable = disclosure.get_untracked().is_toggleable();

    let priority = question.priority;
    let count = count_text(&question);
    let representative = question.representative.clone();
    let question = store_value(question);

    let on_toggle = move |_| set_disclosure.update(|d| d.toggle());

    let variants = move || {
        question.with_value(|q| {
            disclosure
                .get()
                .visible_variants(q)
                .iter()
                .map(|variant| {
                    view! {
                        <div class="variant-item">
                            <span class="variant-source">"📄 " {variant.source.clone()}</span>
                            <p class="variant-text">{variant.text.clone()}</p>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class=format!("question-card {}", priority.css_class())>
            <div class="card-header">
                <span class="rank">"#" {rank}</span>
                <div class="card-content">
                    <div class="card-meta">
                        <span class="priority-badge">{priority.badge_text()}</span>
                        <span class="count-badge">{count}</span>
                    </div>

                    <p class="question-text">{representative}</p>

                    {toggleable.then(|| view! {
                        <button class="variant-toggle" on:click=on_toggle>
                            {move || disclosure.get().toggle_label()}
                        </button>
                        <div class="variant-list">{variants}</div>
                    })}
                </div>
            </div>
        </div>
    }
}
