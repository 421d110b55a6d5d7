//! Then steps for drag-and-drop BDD scenarios.

use super::world::DragDropWorld;
use rstest_bdd_macros::then;
use tessera::board::{
    domain::TaskStatus,
    services::{DragDropError, MoveOutcome},
};

#[then("the move is committed")]
fn move_is_committed(world: &DragDropWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(MoveOutcome::Committed)) => Ok(()),
        other => Err(eyre::eyre!("expected committed move, got {other:?}")),
    }
}

#[then("the move is rolled back")]
fn move_is_rolled_back(world: &DragDropWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(DragDropError::RolledBack { .. })) => Ok(()),
        other => Err(eyre::eyre!("expected rolled back move, got {other:?}")),
    }
}

#[then("the move is a no-op")]
fn move_is_a_no_op(world: &DragDropWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(MoveOutcome::Unchanged)) => Ok(()),
        other => Err(eyre::eyre!("expected unchanged move, got {other:?}")),
    }
}

#[then("the drop is ignored")]
fn drop_is_ignored(world: &DragDropWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(MoveOutcome::Cancelled)) => Ok(()),
        other => Err(eyre::eyre!("expected cancelled drop, got {other:?}")),
    }
}

#[then(r#"the task sits in the "{column}" column"#)]
fn task_sits_in_column(world: &DragDropWorld, column: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let id = world
        .task_id
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let actual = world
        .store
        .get(id)
        .map(|task| task.status())
        .ok_or_else(|| eyre::eyre!("task not in store"))?;

    if actual != expected {
        return Err(eyre::eyre!(
            "expected column {}, found {}",
            expected.as_str(),
            actual.as_str()
        ));
    }
    Ok(())
}
