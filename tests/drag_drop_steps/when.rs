//! When steps for drag-and-drop BDD scenarios.

use super::world::{DragDropWorld, run_async};
use rstest_bdd_macros::when;
use tessera::board::{
    domain::TaskStatus,
    services::{DropGesture, DropPosition},
};

#[when(r#"the task is dropped onto the "{column}" column at index {index:usize}"#)]
fn drop_onto_column(
    world: &mut DragDropWorld,
    column: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let destination_status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let id = world
        .task_id
        .clone()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let source_status = world
        .store
        .get(&id)
        .map(|task| task.status())
        .ok_or_else(|| eyre::eyre!("task not in store"))?;

    let gesture = DropGesture::new(
        id,
        DropPosition::new(source_status, 0),
        DropPosition::new(destination_status, index),
    );
    world.last_result = Some(run_async(world.coordinator.handle_drop(gesture)));
    Ok(())
}

#[when("the drag is cancelled outside any column")]
fn drag_cancelled(world: &mut DragDropWorld) -> Result<(), eyre::Report> {
    let id = world
        .task_id
        .clone()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let source_status = world
        .store
        .get(&id)
        .map(|task| task.status())
        .ok_or_else(|| eyre::eyre!("task not in store"))?;

    let gesture = DropGesture::cancelled(id, DropPosition::new(source_status, 0));
    world.last_result = Some(run_async(world.coordinator.handle_drop(gesture)));
    Ok(())
}
