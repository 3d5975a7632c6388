//! Per-pawn editing session
//!
//! Edits happen on text buffers and only reach the record on commit.

mod pawn_editor;

pub use pawn_editor::*;
