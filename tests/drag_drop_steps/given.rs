//! Given steps for drag-and-drop BDD scenarios.

use super::world::DragDropWorld;
use rstest_bdd_macros::given;
use tessera::board::domain::{ProjectId, Task, TaskId, TaskStatus};

#[given(r#"a kanban task "{task_id}" in the "{column}" column synced to the remote store"#)]
fn synced_task(
    world: &mut DragDropWorld,
    task_id: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let id = TaskId::new(task_id).map_err(|err| eyre::eyre!("invalid task id: {err}"))?;
    let project = ProjectId::new("alpha").map_err(|err| eyre::eyre!("invalid project: {err}"))?;

    let task = Task::new(id.clone(), "Scenario task", project)
        .map_err(|err| eyre::eyre!("invalid task: {err}"))?
        .with_status(status);

    world.store.add(task.clone());
    world.gateway.insert(task);
    world.task_id = Some(id);
    Ok(())
}

#[given("the remote store has lost the task")]
fn remote_lost_the_task(world: &mut DragDropWorld) -> Result<(), eyre::Report> {
    let id = world
        .task_id
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    world.gateway.delete(id);
    Ok(())
}
