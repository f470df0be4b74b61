//! Kazera: personal assignment tracking.
//!
//! This crate provides the core of an assignment tracker: a task collection
//! with add, edit, move and delete operations, a kanban board projection,
//! deadline urgency classification, a dashboard summary, and a free-form
//! note board.
//!
//! # Architecture
//!
//! Kazera follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`task`]: Task model, task store, board projection and deadlines
//! - [`note`]: Note board
//! - [`snapshot`]: Collection snapshot persistence
//! - [`config`]: Runtime configuration

pub mod config;
pub mod note;
pub mod snapshot;
pub mod task;

#[cfg(test)]
mod test_support;
