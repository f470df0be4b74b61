//! Then steps for kanban board BDD scenarios.

use super::world::KanbanWorld;
use kazera::task::domain::{DeadlineClassifier, TaskDomainError, TaskStatus};
use kazera::task::services::{Board, TaskStoreError};
use rstest_bdd_macros::then;

fn column_titles(world: &KanbanWorld, column: &str) -> Result<Vec<String>, eyre::Report> {
    let status = TaskStatus::try_from(column)
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let board = Board::project(world.store.tasks());
    let projected = board
        .column(status)
        .ok_or_else(|| eyre::eyre!("board has no {column} column"))?;
    Ok(projected
        .tasks()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect())
}

#[then(r#"the "{column}" column lists "{title}""#)]
fn column_lists(world: &KanbanWorld, column: String, title: String) -> Result<(), eyre::Report> {
    let titles = column_titles(world, &column)?;
    eyre::ensure!(
        titles.contains(&title),
        "expected {title} in {column}, found {titles:?}"
    );
    Ok(())
}

#[then(r#"the "{column}" column is empty"#)]
fn column_is_empty(world: &KanbanWorld, column: String) -> Result<(), eyre::Report> {
    let titles = column_titles(world, &column)?;
    eyre::ensure!(titles.is_empty(), "expected {column} to be empty, found {titles:?}");
    Ok(())
}

#[then("the board holds {count:usize} tasks")]
fn board_holds(world: &KanbanWorld, count: usize) -> Result<(), eyre::Report> {
    let board = Board::project(world.store.tasks());
    eyre::ensure!(
        board.len() == count,
        "expected {count} tasks, found {}",
        board.len()
    );
    Ok(())
}

#[then("the move fails with an invalid status error")]
fn move_fails_invalid_status(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;
    if !matches!(
        result,
        Err(TaskStoreError::Validation(TaskDomainError::InvalidStatus(_)))
    ) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }
    Ok(())
}

#[then("the move fails with a not found error")]
fn move_fails_not_found(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;
    if !matches!(result, Err(TaskStoreError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the task is flagged "{label}""#)]
fn task_is_flagged(world: &KanbanWorld, label: String) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    let class = DeadlineClassifier::default().classify_task(task, world.today);
    eyre::ensure!(
        class.as_str() == label,
        "expected {label}, found {}",
        class.as_str()
    );
    Ok(())
}
