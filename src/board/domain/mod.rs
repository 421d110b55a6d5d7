//! Domain model for the task-board engine.
//!
//! The board domain models task records, the two board layouts, and the
//! filter predicate applied to board views while keeping all infrastructure
//! concerns outside of the domain boundary.

mod board;
mod error;
mod filter;
mod ids;
mod task;

pub use board::{BoardDefinition, BoardType, ColumnDefinition};
pub use error::{BoardDomainError, ParsePriorityError, ParseTaskStatusError};
pub use filter::{PriorityFilter, TaskFilter};
pub use ids::{ProjectId, TaskId, UserId};
pub use task::{Label, Priority, Task, TaskStatus};
