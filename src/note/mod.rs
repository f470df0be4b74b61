//! Free-form note board.
//!
//! Notes are short text cards with an optional deadline and attachments,
//! kept separately from the task collection but persisted the same way.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
