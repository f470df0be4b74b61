//! Given steps for kanban board BDD scenarios.

use super::world::KanbanWorld;
use eyre::WrapErr;
use kazera::task::domain::TaskDraft;
use rstest_bdd_macros::given;

#[given("an empty task board")]
fn empty_board(world: &mut KanbanWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.store.is_empty(), "scenario board should start empty");
    Ok(())
}

#[given(r#"a task titled "{title}" due in {days:i64} days"#)]
fn task_due_in(world: &mut KanbanWorld, title: String, days: i64) -> Result<(), eyre::Report> {
    add_task(world, &title, days)
}

#[given(r#"a task titled "{title}" overdue by {days:i64} days"#)]
fn task_overdue_by(
    world: &mut KanbanWorld,
    title: String,
    days: i64,
) -> Result<(), eyre::Report> {
    add_task(world, &title, -days)
}

pub fn add_task(world: &mut KanbanWorld, title: &str, offset: i64) -> Result<(), eyre::Report> {
    let draft = TaskDraft::new(title, world.deadline(offset)?)?;
    let task = world
        .store
        .add(draft)
        .wrap_err("add task in scenario setup")?;
    world.last_task = Some(task);
    Ok(())
}
