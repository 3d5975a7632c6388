//! Contract of the host game's definition database

use crate::config::PawnKindDef;
use crate::error::Result;
use crate::tweak::{Field, FieldValue};

/// Source of record for pawn kind defaults, and the target overrides are
/// applied to. The core never creates or destroys host pawn kinds.
pub trait PawnKindHost {
    /// Def names of every known pawn kind, in host order
    fn pawn_kind_names(&self) -> Vec<String>;

    /// Live definition of one pawn kind
    fn pawn_kind(&self, def_name: &str) -> Option<&PawnKindDef>;

    /// Write one field into the live definition. The host may refuse the
    /// value with [`crate::error::PawnTweakError::Rejected`].
    fn write_field(&mut self, def_name: &str, field: Field, value: FieldValue) -> Result<()>;
}
