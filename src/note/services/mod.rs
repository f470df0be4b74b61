//! Application services for the note board.

mod board;

pub use board::{NoteBoard, NoteBoardError, NoteBoardResult};
