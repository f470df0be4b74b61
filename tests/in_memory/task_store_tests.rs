//! In-memory integration tests for task store operations.

use super::helpers::{days_ago, draft, in_days, local_storage, store};
use kazera::snapshot::adapters::MemorySnapshotStore;
use kazera::task::domain::{Attachment, TaskId, TaskStatus};
use kazera::task::services::{TaskStore, TaskStoreError};
use rstest::rstest;

#[rstest]
fn full_lifecycle_is_reflected_in_snapshot(
    local_storage: MemorySnapshotStore,
) -> eyre::Result<()> {
    let mut store = TaskStore::open(local_storage.clone());
    let essay = store.add(
        draft("History Essay", TaskStatus::Todo, in_days(5, 9))
            .with_description("1000 words on the industrial revolution")
            .with_attachments([Attachment::new(
                "outline.docx",
                "https://files.example/outline",
            )?]),
    )?;
    let lab = store.add(draft(
        "Science Lab Report",
        TaskStatus::InProgress,
        days_ago(2, 9),
    ))?;

    store.move_task_named(essay.id(), "in-progress")?;
    store.delete(lab.id())?;

    let raw = local_storage
        .raw()?
        .ok_or_else(|| eyre::eyre!("snapshot should have been written"))?;
    let records: serde_json::Value = serde_json::from_str(&raw)?;
    let entries = records
        .as_array()
        .ok_or_else(|| eyre::eyre!("snapshot should be an array"))?;

    eyre::ensure!(entries.len() == 1, "expected one record, found {}", entries.len());
    eyre::ensure!(records[0]["id"] == essay.id().as_str());
    eyre::ensure!(records[0]["status"] == "in-progress");
    eyre::ensure!(records[0]["attachments"][0]["name"] == "outline.docx");
    Ok(())
}

#[rstest]
fn reopened_store_matches_saved_tasks(local_storage: MemorySnapshotStore) -> eyre::Result<()> {
    let mut store = TaskStore::open(local_storage.clone());
    store.add(
        draft("Math Assignment", TaskStatus::Todo, in_days(3, 9))
            .with_link("https://classroom.example/math")
            .with_attachments([Attachment::new(
                "chapter4.pdf",
                "https://files.example/chapter4",
            )?]),
    )?;
    store.add(draft("History Essay", TaskStatus::InProgress, in_days(5, 9)))?;
    store.add(draft("Science Lab Report", TaskStatus::Done, days_ago(2, 9)))?;

    let reopened = TaskStore::open(local_storage);

    eyre::ensure!(reopened.tasks() == store.tasks());
    eyre::ensure!(
        reopened
            .tasks()
            .first()
            .map(|task| task.attachments().len())
            == Some(1)
    );
    eyre::ensure!(reopened.last_persistence_error().is_none());
    Ok(())
}

#[rstest]
fn supplied_identifiers_survive_and_collisions_are_rejected(
    mut store: TaskStore<MemorySnapshotStore>,
) -> eyre::Result<()> {
    let id = TaskId::new("task-1")?;
    store.add(draft("Math Assignment", TaskStatus::Todo, in_days(3, 9)).with_id(id.clone()))?;

    let duplicate = store.add(draft("Other", TaskStatus::Todo, in_days(3, 9)).with_id(id.clone()));

    eyre::ensure!(duplicate == Err(TaskStoreError::DuplicateTask(id.clone())));
    eyre::ensure!(store.get(&id).is_some());
    eyre::ensure!(store.len() == 1);
    Ok(())
}

#[rstest]
fn edits_after_deletion_report_not_found(
    mut store: TaskStore<MemorySnapshotStore>,
) -> eyre::Result<()> {
    let task = store.add(draft("Reading Log", TaskStatus::Todo, in_days(1, 9)))?;
    store.delete(task.id())?;

    let not_found = Err(TaskStoreError::NotFound(task.id().clone()));
    eyre::ensure!(store.update(task.clone()) == not_found);
    eyre::ensure!(store.move_task(task.id(), TaskStatus::Done) == not_found);
    eyre::ensure!(store.delete(task.id()) == not_found);
    Ok(())
}
