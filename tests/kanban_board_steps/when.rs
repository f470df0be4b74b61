//! When steps for kanban board BDD scenarios.

use super::given::add_task;
use super::world::KanbanWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"a task titled "{title}" due in {days:i64} days is added"#)]
fn task_added(world: &mut KanbanWorld, title: String, days: i64) -> Result<(), eyre::Report> {
    add_task(world, &title, days)
}

#[when(r#"the task is dropped on the "{column}" column"#)]
fn task_dropped(world: &mut KanbanWorld, column: String) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id().clone();
    let result = world.store.move_task_named(&id, &column);
    if let Ok(ref moved) = result {
        world.last_task = Some(moved.clone());
    }
    world.last_move_result = Some(result);
    Ok(())
}

#[when("the task is deleted")]
fn task_deleted(world: &mut KanbanWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id().clone();
    world
        .store
        .delete(&id)
        .wrap_err("delete task in scenario")?;
    Ok(())
}
