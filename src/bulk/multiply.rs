//! Multiply one field across a selection of pawn kinds

use crate::config::PawnKindHost;
use crate::editor::parse_number;
use crate::error::{PawnTweakError, Result};
use crate::tweak::{Field, FieldValue, TweakStore, CHANCE_EPSILON};
use ahash::AHashSet;

/// Multiplier text as typed; anything unparsable is a no-op factor of 1
pub fn parse_multiplier(text: &str) -> f32 {
    parse_number(text).unwrap_or(1.0)
}

/// Scaled replacement for `current`, or `None` when scaling changes nothing
fn scale(current: FieldValue, multiplier: f32) -> Option<FieldValue> {
    match current {
        FieldValue::Range(range) => {
            let scaled = range.scaled(multiplier);
            (scaled != range).then_some(FieldValue::Range(scaled))
        }
        FieldValue::Chance(chance) => {
            let scaled = (chance * multiplier).clamp(0.0, 1.0);
            ((scaled - chance).abs() > CHANCE_EPSILON).then_some(FieldValue::Chance(scaled))
        }
        FieldValue::Tags(_) => None,
    }
}

/// Multiply the effective value of `field` for every selected pawn kind
/// and store the result as an override.
///
/// Every name is checked before anything changes. Returns how many
/// records were changed.
pub fn multiply_selected<H, S>(
    store: &mut TweakStore,
    host: &H,
    selection: &[S],
    field: Field,
    multiplier: f32,
) -> Result<usize>
where
    H: PawnKindHost + ?Sized,
    S: AsRef<str>,
{
    if selection.is_empty() {
        return Err(PawnTweakError::EmptySelection);
    }
    if !field.is_multipliable() {
        return Err(PawnTweakError::NotMultipliable(field));
    }
    let multiplier = if multiplier.is_finite() { multiplier } else { 1.0 };

    let mut seen = AHashSet::with_capacity(selection.len());
    let mut updates = Vec::with_capacity(selection.len());
    for name in selection {
        let name = name.as_ref();
        let (tweak, def) = store.lookup(host, name)?;
        if !seen.insert(name) {
            continue;
        }
        if let Some(value) = scale(tweak.effective(field, def), multiplier) {
            updates.push((name, value));
        }
    }

    let changed = updates.len();
    for (name, value) in updates {
        if let Some(tweak) = store.get_mut(name) {
            tweak.set(field, value);
        }
    }
    log::debug!(
        "Multiplied {} by {} for {} of {} selected pawn kinds",
        field,
        multiplier,
        changed,
        seen.len()
    );
    Ok(changed)
}
