//! Assignment tracking for Kazera.
//!
//! This module owns the task collection and everything derived from it:
//! creating, editing, moving and deleting tasks, projecting them onto the
//! kanban board, classifying deadline urgency, and summarising the
//! collection for the dashboard. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]
//!
//! Persistence goes through the shared [`crate::snapshot`] port.

pub mod domain;
pub mod services;
