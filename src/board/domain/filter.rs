//! Predicate composition for board views.

use super::{Priority, Task};

/// Priority narrowing applied by a [`TaskFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Universal match.
    #[default]
    All,
    /// Match only tasks with exactly this priority.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns whether the given priority passes the filter.
    #[must_use]
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

/// Search and priority predicate applied to every projected column.
///
/// The default filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search_term: String,
    priority: PriorityFilter,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Narrows the filter to a single priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = PriorityFilter::Only(priority);
        self
    }

    /// Returns the search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the priority narrowing.
    #[must_use]
    pub const fn priority(&self) -> PriorityFilter {
        self.priority
    }

    /// Returns whether the task satisfies both filter conditions.
    ///
    /// The search term is matched case-insensitively as a substring of the
    /// task's title and description taken together; an empty term matches
    /// everything.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task) && self.priority.matches(task.priority())
    }

    fn matches_search(&self, task: &Task) -> bool {
        let term = self.search_term.trim();
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        let haystack = format!("{} {}", task.title(), task.description()).to_lowercase();
        haystack.contains(&needle)
    }
}
