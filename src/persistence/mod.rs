//! Override file persistence
//!
//! Features:
//! - Flat CSV, one row per non-empty record, no header
//! - Tolerant load: unknown rows and unparsable segments are skipped
//! - Save always applies the store to the host afterwards

mod codec;
mod file;


pub use codec::*;
pub use file::*;
