//! Copy/paste of field values between pawn kinds
//!
//! One slot per field, last write wins, never persisted.

use crate::config::PawnKindDef;
use crate::tweak::{Field, FieldValue, PawnTweak};

/// Last copied value per field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clipboard {
    slots: [Option<FieldValue>; 7],
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.slots[field.index()].as_ref()
    }

    #[inline]
    pub fn has(&self, field: Field) -> bool {
        self.slots[field.index()].is_some()
    }

    /// Store `value` in the slot for `field`. A value of the wrong kind is
    /// refused and the slot is left as it was.
    pub fn store(&mut self, field: Field, value: FieldValue) -> bool {
        if value.kind() != field.kind() {
            return false;
        }
        self.slots[field.index()] = Some(value);
        true
    }

    pub fn clear_slot(&mut self, field: Field) {
        self.slots[field.index()] = None;
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Copy the effective value of `field`
    pub fn copy(&mut self, field: Field, tweak: &PawnTweak, def: &PawnKindDef) {
        self.store(field, tweak.effective(field, def));
    }

    /// Copy the effective value of every field
    pub fn copy_all(&mut self, tweak: &PawnTweak, def: &PawnKindDef) {
        for field in Field::ALL {
            self.copy(field, tweak, def);
        }
    }

    /// Set `field` on `tweak` from the slot. No-op when the slot is empty.
    pub fn paste(&self, field: Field, tweak: &mut PawnTweak) -> bool {
        match self.get(field) {
            Some(value) => tweak.set(field, value.clone()),
            None => false,
        }
    }

    /// Paste every filled slot; returns how many fields were set
    pub fn paste_all(&self, tweak: &mut PawnTweak) -> usize {
        Field::ALL
            .into_iter()
            .filter(|&field| self.paste(field, tweak))
            .count()
    }
}
