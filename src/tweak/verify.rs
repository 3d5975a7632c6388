//! Comparing overrides against the host's live values

use crate::tweak::{Field, FieldValue};
use smallvec::SmallVec;
use std::fmt;

/// One field whose override differs from the live value
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub field: Field,
    pub config: FieldValue,
    pub live: FieldValue,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {}: Config = {}, In-Game = {}",
            self.field.label(),
            self.config,
            self.live
        )
    }
}

/// Result of verifying one record. At most one mismatch per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Verification {
    pub mismatches: SmallVec<[Mismatch; 7]>,
}

impl Verification {
    #[inline]
    pub fn matches(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mismatch in &self.mismatches {
            write!(f, "\n{}", mismatch)?;
        }
        Ok(())
    }
}

/// Verification of a selection of pawn kinds; only mismatching ones are kept
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerifyReport {
    pub checked: usize,
    pub mismatched: Vec<(String, Verification)>,
}

impl VerifyReport {
    #[inline]
    pub fn all_match(&self) -> bool {
        self.mismatched.is_empty()
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.all_match() {
            return f.write_str("All selected pawns' in-game values match the config values.");
        }
        f.write_str("Mismatch detected for the following pawns:")?;
        for (def_name, verification) in &self.mismatched {
            write!(f, "\nPawn: {}{}", def_name, verification)?;
        }
        Ok(())
    }
}
