//! Unit tests for filter predicate composition.

use super::fixtures::{task, task_with_priority};
use crate::board::domain::{Priority, TaskFilter, TaskStatus};
use rstest::rstest;

#[rstest]
fn default_filter_matches_every_task() {
    let filter = TaskFilter::default();
    for priority in [Priority::High, Priority::Medium, Priority::Low] {
        let candidate = task_with_priority("t", "Any title", TaskStatus::Todo, priority);
        assert!(filter.matches(&candidate));
    }
}

#[rstest]
#[case("query", true)]
#[case("QUERY", true)]
#[case("plan", true)]
#[case("missing", false)]
fn search_matches_title_and_description_case_insensitively(
    #[case] term: &str,
    #[case] expected: bool,
) {
    let candidate =
        task("t", "Review query", TaskStatus::Todo).with_description("Check the index plan");
    let filter = TaskFilter::new().with_search_term(term);
    assert_eq!(filter.matches(&candidate), expected);
}

/// The haystack joins title and description with a space, so a term may span
/// the seam, but only across the inserted space.
#[rstest]
fn search_spans_the_title_description_seam_with_a_space() {
    let candidate = task("t", "Fix login", TaskStatus::Todo).with_description("form layout");

    let across_seam = TaskFilter::new().with_search_term("login form");
    let fused_seam = TaskFilter::new().with_search_term("loginform");

    assert!(across_seam.matches(&candidate));
    assert!(!fused_seam.matches(&candidate));
}

#[rstest]
fn blank_search_term_matches_everything() {
    let candidate = task("t", "Anything", TaskStatus::Todo);
    assert!(TaskFilter::new().with_search_term("   ").matches(&candidate));
}

#[rstest]
#[case(Priority::High, true)]
#[case(Priority::Medium, false)]
#[case(Priority::Low, false)]
fn priority_filter_requires_exact_match(#[case] wanted: Priority, #[case] expected: bool) {
    let candidate = task_with_priority("t", "Urgent fix", TaskStatus::Todo, Priority::High);
    let filter = TaskFilter::new().with_priority(wanted);
    assert_eq!(filter.matches(&candidate), expected);
}

#[rstest]
fn search_and_priority_conditions_are_anded() {
    let candidate = task_with_priority("t", "Urgent fix", TaskStatus::Todo, Priority::High);

    let both = TaskFilter::new()
        .with_search_term("urgent")
        .with_priority(Priority::High);
    let wrong_priority = TaskFilter::new()
        .with_search_term("urgent")
        .with_priority(Priority::Low);
    let wrong_term = TaskFilter::new()
        .with_search_term("calm")
        .with_priority(Priority::High);

    assert!(both.matches(&candidate));
    assert!(!wrong_priority.matches(&candidate));
    assert!(!wrong_term.matches(&candidate));
}

/// Narrowing either filter field can only shrink or preserve the matched set.
#[rstest]
fn narrowing_shrinks_or_preserves_the_matched_set() {
    let tasks = vec![
        task_with_priority("a", "Fix login", TaskStatus::Todo, Priority::High),
        task_with_priority("b", "Fix logout", TaskStatus::Todo, Priority::Low),
        task_with_priority("c", "Write docs", TaskStatus::Done, Priority::High),
    ];

    let matched = |filter: &TaskFilter| tasks.iter().filter(|t| filter.matches(t)).count();

    let unfiltered = TaskFilter::new();
    let by_term = TaskFilter::new().with_search_term("fix");
    let by_term_and_priority = TaskFilter::new()
        .with_search_term("fix")
        .with_priority(Priority::High);

    assert_eq!(matched(&unfiltered), 3);
    assert!(matched(&by_term) <= matched(&unfiltered));
    assert!(matched(&by_term_and_priority) <= matched(&by_term));
    assert_eq!(matched(&by_term_and_priority), 1);
}
