//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or validating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The identifier is empty after trimming.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The status is not a column on the active board.
    #[error("status '{status}' is not a column on the {board} board")]
    StatusNotOnBoard {
        /// Canonical name of the rejected status.
        status: &'static str,
        /// Canonical name of the active board type.
        board: &'static str,
    },
}

/// Error returned while parsing task statuses from wire or storage values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing priorities from wire or storage values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
