//! View logic for the results page.
//!
//! Everything here is a pure function of the [`AnalysisResult`] received
//! from the service. Filtering never touches the underlying list; ranks are
//! recomputed inside each filtered view and always start at 1.

use crate::types::{AnalysisResult, Priority, RankedQuestion, Variant};

// =============================================================================
// Priority filter
// =============================================================================

/// Filter buttons above the question list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl PriorityFilter {
    /// Button order.
    pub const OPTIONS: [PriorityFilter; 4] = [
        PriorityFilter::All,
        PriorityFilter::High,
        PriorityFilter::Medium,
        PriorityFilter::Low,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriorityFilter::All => "All",
            PriorityFilter::High => "High",
            PriorityFilter::Medium => "Medium",
            PriorityFilter::Low => "Low",
        }
    }

    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::High => priority == Priority::High,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::Low => priority == Priority::Low,
        }
    }
}

/// Questions visible under `filter`, paired with their 1-based rank in
/// the filtered view. Service order is preserved.
pub fn ranked_view<'a>(
    questions: &'a [RankedQuestion],
    filter: PriorityFilter,
) -> impl Iterator<Item = (usize, &'a RankedQuestion)> + 'a {
    questions
        .iter()
        .filter(move |q| filter.matches(q.priority))
        .enumerate()
        .map(|(index, q)| (index + 1, q))
}

// =============================================================================
// Summary counters
// =============================================================================

/// The three counters at the top of the results view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryStats {
    pub papers_analyzed: usize,
    pub questions_extracted: usize,
    pub groups: usize,
}

impl SummaryStats {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            papers_analyzed: result.papers_analyzed.len(),
            questions_extracted: result.total_questions_extracted,
            groups: result.total_groups,
        }
    }
}

// =============================================================================
// Question card
// =============================================================================

/// Occurrence count shown on a card.
///
/// The service's `count` is capped at the number of variants it actually
/// sent; an empty variant list leaves `count` as is.
pub fn displayed_count(question: &RankedQuestion) -> usize {
    let variants = question.variants.len();
    if variants == 0 {
        return question.count;
    }
    if question.count != variants {
        log::warn!(
            "Group {:?} reports count {} but carries {} variants",
            question.representative,
            question.count,
            variants
        );
    }
    question.count.min(variants)
}

/// `Appears 3× across papers`
pub fn count_text(question: &RankedQuestion) -> String {
    format!("Appears {}× across papers", displayed_count(question))
}

/// Expand/collapse state of one card's variant list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantDisclosure {
    variant_count: usize,
    expanded: bool,
}

impl VariantDisclosure {
    /// Collapsed state for `question`.
    pub fn for_question(question: &RankedQuestion) -> Self {
        Self {
            variant_count: question.variants.len(),
            expanded: false,
        }
    }

    /// Only groups with more than one variant get a toggle.
    pub fn is_toggleable(&self) -> bool {
        self.variant_count > 1
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        if self.is_toggleable() {
            self.expanded = !self.expanded;
        }
    }

    pub fn toggle_label(&self) -> String {
        let arrow = if self.expanded { "▲ Hide" } else { "▼ Show" };
        let plural = if self.variant_count == 1 { "" } else { "s" };
        format!("{} {} variant{}", arrow, self.variant_count, plural)
    }

    /// Variants to render: all of them when expanded, none otherwise.
    pub fn visible_variants<'a>(&self, question: &'a RankedQuestion) -> &'a [Variant] {
        if self.expanded {
            &question.variants
        } else {
            &[]
        }
    }
}
