//! Pawn Tweak Core - Per-pawn-kind spawn parameter overrides
//!
//! This crate keeps a sparse set of overrides on top of a host game's pawn
//! kind definitions: money ranges, a tech hediff chance and three tag
//! lists. Overrides persist to a flat CSV file and are written back into
//! the host on demand.

pub mod bulk;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod persistence;
pub mod session;
pub mod tweak;

pub use crate::bulk::{FactionFilter, PawnFilter};
pub use crate::clipboard::Clipboard;
pub use crate::config::{DefDatabase, FloatRange, PawnKindDef, PawnKindHost, TagCatalog, ThingDef};
pub use crate::editor::PawnEditor;
pub use crate::error::{PawnTweakError, Result};
pub use crate::persistence::{LoadSummary, SaveSummary};
pub use crate::session::TweakSession;
pub use crate::tweak::{
    ApplyReport, Field, FieldKind, FieldValue, Override, PawnTweak, TweakStore, Verification,
    VerifyReport,
};
