//! Unit tests for the note board.
