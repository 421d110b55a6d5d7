//! Pure derivation of ordered status columns from a task snapshot.
//!
//! A projection is disposable render data: it is recomputed from scratch on
//! every store or filter change and never persisted.

use crate::board::domain::{BoardDefinition, Task, TaskFilter, TaskStatus};

/// One projected column: a declared status and the filtered tasks in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    status: TaskStatus,
    title: &'static str,
    tasks: Vec<Task>,
}

impl BoardColumn {
    /// Returns the status this column holds.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the tasks in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks shown in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the column shows no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// A full board view: one column per declared status, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    columns: Vec<BoardColumn>,
}

impl BoardView {
    /// Returns the columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the column holding the given status, when declared.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status() == status)
    }

    /// Returns the total number of tasks shown across all columns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.columns.iter().map(BoardColumn::len).sum()
    }
}

/// Projects a task snapshot into ordered, filtered status columns.
///
/// Every status declared by `definition` yields a column, even when empty.
/// Within a column, store order is preserved. Tasks whose status is not a
/// column on the board are not shown anywhere.
#[must_use]
pub fn project(tasks: &[Task], definition: BoardDefinition, filter: &TaskFilter) -> BoardView {
    let columns = definition
        .columns()
        .iter()
        .map(|column| BoardColumn {
            status: column.status(),
            title: column.title(),
            tasks: tasks
                .iter()
                .filter(|task| task.status() == column.status() && filter.matches(task))
                .cloned()
                .collect(),
        })
        .collect();

    BoardView { columns }
}
