//! Operations over many pawn kinds at once

mod filter;
mod multiply;

pub use filter::*;
pub use multiply::*;
