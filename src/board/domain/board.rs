//! Board types and their immutable column definitions.

use super::{BoardDomainError, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported board layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    /// Three-column board: to do, in progress, done.
    Kanban,
    /// Five-column board: backlog, to do, in progress, review, done.
    Scrum,
}

impl BoardType {
    /// Returns the canonical board name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kanban => "kanban",
            Self::Scrum => "scrum",
        }
    }

    /// Returns the column definition for this board type.
    #[must_use]
    pub const fn definition(self) -> BoardDefinition {
        BoardDefinition::of(self)
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single column declaration: the status it holds and its display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    status: TaskStatus,
    title: &'static str,
}

impl ColumnDefinition {
    const fn new(status: TaskStatus, title: &'static str) -> Self {
        Self { status, title }
    }

    /// Returns the status this column holds.
    #[must_use]
    pub const fn status(self) -> TaskStatus {
        self.status
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        self.title
    }
}

const KANBAN_COLUMNS: [ColumnDefinition; 3] = [
    ColumnDefinition::new(TaskStatus::Todo, "To Do"),
    ColumnDefinition::new(TaskStatus::InProgress, "In Progress"),
    ColumnDefinition::new(TaskStatus::Done, "Done"),
];

const SCRUM_COLUMNS: [ColumnDefinition; 5] = [
    ColumnDefinition::new(TaskStatus::Backlog, "Backlog"),
    ColumnDefinition::new(TaskStatus::Todo, "To Do"),
    ColumnDefinition::new(TaskStatus::InProgress, "In Progress"),
    ColumnDefinition::new(TaskStatus::Review, "Review"),
    ColumnDefinition::new(TaskStatus::Done, "Done"),
];

/// Ordered list of status columns for one board type.
///
/// Definitions are immutable; the declared order is the display order and the
/// projection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDefinition {
    board_type: BoardType,
    columns: &'static [ColumnDefinition],
}

impl BoardDefinition {
    /// Returns the definition for the given board type.
    #[must_use]
    pub const fn of(board_type: BoardType) -> Self {
        let columns: &'static [ColumnDefinition] = match board_type {
            BoardType::Kanban => &KANBAN_COLUMNS,
            BoardType::Scrum => &SCRUM_COLUMNS,
        };
        Self {
            board_type,
            columns,
        }
    }

    /// Returns the board type.
    #[must_use]
    pub const fn board_type(self) -> BoardType {
        self.board_type
    }

    /// Returns the columns in declared order.
    #[must_use]
    pub const fn columns(self) -> &'static [ColumnDefinition] {
        self.columns
    }

    /// Returns the declared statuses in column order.
    pub fn statuses(self) -> impl Iterator<Item = TaskStatus> {
        self.columns.iter().map(|column| column.status())
    }

    /// Returns whether the status is a column on this board.
    #[must_use]
    pub fn contains(self, status: TaskStatus) -> bool {
        self.statuses().any(|declared| declared == status)
    }

    /// Returns the display title for the status, when declared.
    #[must_use]
    pub fn column_title(self, status: TaskStatus) -> Option<&'static str> {
        self.columns
            .iter()
            .find(|column| column.status() == status)
            .map(|column| column.title())
    }

    /// Checks that the status is a column on this board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::StatusNotOnBoard`] when it is not.
    pub fn ensure_contains(self, status: TaskStatus) -> Result<(), BoardDomainError> {
        if self.contains(status) {
            return Ok(());
        }
        Err(BoardDomainError::StatusNotOnBoard {
            status: status.as_str(),
            board: self.board_type.as_str(),
        })
    }
}
