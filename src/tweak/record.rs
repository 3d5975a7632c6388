//! Per-pawn-kind override record

use crate::config::{FloatRange, PawnKindDef, PawnKindHost};
use crate::error::Result;
use crate::tweak::{Field, FieldValue, Mismatch, Override, Verification};

/// Overrides for one pawn kind, keyed by its def name.
///
/// Every accessor that resolves an effective value takes the pawn kind's
/// live definition as the fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct PawnTweak {
    def_name: String,
    pub apparel_money: Override<FloatRange>,
    pub weapon_money: Override<FloatRange>,
    pub tech_hediffs_money: Override<FloatRange>,
    pub tech_hediffs_chance: Override<f32>,
    pub apparel_tags: Override<Vec<String>>,
    pub weapon_tags: Override<Vec<String>>,
    pub tech_hediffs_tags: Override<Vec<String>>,
}

impl PawnTweak {
    /// A record with every field unset
    pub fn new(def_name: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
            apparel_money: Override::Unset,
            weapon_money: Override::Unset,
            tech_hediffs_money: Override::Unset,
            tech_hediffs_chance: Override::Unset,
            apparel_tags: Override::Unset,
            weapon_tags: Override::Unset,
            tech_hediffs_tags: Override::Unset,
        }
    }

    #[inline]
    pub fn def_name(&self) -> &str {
        &self.def_name
    }

    // Typed effective values

    pub fn apparel_money(&self, def: &PawnKindDef) -> FloatRange {
        *self.apparel_money.resolve(&def.apparel_money)
    }

    pub fn weapon_money(&self, def: &PawnKindDef) -> FloatRange {
        *self.weapon_money.resolve(&def.weapon_money)
    }

    pub fn tech_hediffs_money(&self, def: &PawnKindDef) -> FloatRange {
        *self.tech_hediffs_money.resolve(&def.tech_hediffs_money)
    }

    pub fn tech_hediffs_chance(&self, def: &PawnKindDef) -> f32 {
        *self.tech_hediffs_chance.resolve(&def.tech_hediffs_chance)
    }

    pub fn apparel_tags<'a>(&'a self, def: &'a PawnKindDef) -> &'a [String] {
        self.apparel_tags.resolve(&def.apparel_tags)
    }

    pub fn weapon_tags<'a>(&'a self, def: &'a PawnKindDef) -> &'a [String] {
        self.weapon_tags.resolve(&def.weapon_tags)
    }

    pub fn tech_hediffs_tags<'a>(&'a self, def: &'a PawnKindDef) -> &'a [String] {
        self.tech_hediffs_tags.resolve(&def.tech_hediffs_tags)
    }

    /// Override if set, else the definition's value
    pub fn effective(&self, field: Field, def: &PawnKindDef) -> FieldValue {
        self.override_value(field).unwrap_or_else(|| def.value(field))
    }

    /// The set value of `field`, if any
    pub fn override_value(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::ApparelMoney => self.apparel_money.as_ref().copied().map(FieldValue::Range),
            Field::WeaponMoney => self.weapon_money.as_ref().copied().map(FieldValue::Range),
            Field::TechHediffsMoney => self
                .tech_hediffs_money
                .as_ref()
                .copied()
                .map(FieldValue::Range),
            Field::TechHediffsChance => self
                .tech_hediffs_chance
                .as_ref()
                .copied()
                .map(FieldValue::Chance),
            Field::ApparelTags => self.apparel_tags.as_ref().cloned().map(FieldValue::Tags),
            Field::WeaponTags => self.weapon_tags.as_ref().cloned().map(FieldValue::Tags),
            Field::TechHediffsTags => self
                .tech_hediffs_tags
                .as_ref()
                .cloned()
                .map(FieldValue::Tags),
        }
    }

    /// True iff `field` is set, whatever its value
    pub fn is_changed(&self, field: Field) -> bool {
        match field {
            Field::ApparelMoney => self.apparel_money.is_set(),
            Field::WeaponMoney => self.weapon_money.is_set(),
            Field::TechHediffsMoney => self.tech_hediffs_money.is_set(),
            Field::TechHediffsChance => self.tech_hediffs_chance.is_set(),
            Field::ApparelTags => self.apparel_tags.is_set(),
            Field::WeaponTags => self.weapon_tags.is_set(),
            Field::TechHediffsTags => self.tech_hediffs_tags.is_set(),
        }
    }

    /// True iff no field is set
    pub fn is_empty(&self) -> bool {
        !Field::ALL.iter().any(|&f| self.is_changed(f))
    }

    /// Number of set fields
    pub fn changed_count(&self) -> usize {
        Field::ALL.iter().filter(|&&f| self.is_changed(f)).count()
    }

    /// Clear every field
    pub fn reset(&mut self) {
        for field in Field::ALL {
            self.clear(field);
        }
    }

    /// Set `field` to `value`. Returns false, leaving the record untouched,
    /// when the value kind does not fit the field.
    pub fn set(&mut self, field: Field, value: FieldValue) -> bool {
        match (field, value) {
            (Field::ApparelMoney, FieldValue::Range(r)) => self.apparel_money.set(r),
            (Field::WeaponMoney, FieldValue::Range(r)) => self.weapon_money.set(r),
            (Field::TechHediffsMoney, FieldValue::Range(r)) => self.tech_hediffs_money.set(r),
            (Field::TechHediffsChance, FieldValue::Chance(c)) => self.tech_hediffs_chance.set(c),
            (Field::ApparelTags, FieldValue::Tags(t)) => self.apparel_tags.set(t),
            (Field::WeaponTags, FieldValue::Tags(t)) => self.weapon_tags.set(t),
            (Field::TechHediffsTags, FieldValue::Tags(t)) => self.tech_hediffs_tags.set(t),
            _ => return false,
        }
        true
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::ApparelMoney => self.apparel_money.clear(),
            Field::WeaponMoney => self.weapon_money.clear(),
            Field::TechHediffsMoney => self.tech_hediffs_money.clear(),
            Field::TechHediffsChance => self.tech_hediffs_chance.clear(),
            Field::ApparelTags => self.apparel_tags.clear(),
            Field::WeaponTags => self.weapon_tags.clear(),
            Field::TechHediffsTags => self.tech_hediffs_tags.clear(),
        }
    }

    /// Write every set field into the host definition. Unset fields are
    /// left alone on the host side. Stops at the first rejected field.
    ///
    /// Returns the number of fields written.
    pub fn apply<H: PawnKindHost + ?Sized>(&self, host: &mut H) -> Result<usize> {
        let mut written = 0;
        for field in Field::ALL {
            if let Some(value) = self.override_value(field) {
                host.write_field(&self.def_name, field, value)?;
                written += 1;
            }
        }
        Ok(written)
    }

    /// Compare every set field against the definition's live value
    pub fn verify(&self, def: &PawnKindDef) -> Verification {
        let mut verification = Verification::default();
        for field in Field::ALL {
            if let Some(config) = self.override_value(field) {
                let live = def.value(field);
                if !config.matches(&live) {
                    verification.mismatches.push(Mismatch {
                        field,
                        config,
                        live,
                    });
                }
            }
        }
        verification
    }

    /// Short list-view text; overridden values carry a `*` marker
    pub fn display(&self, field: Field, def: &PawnKindDef) -> String {
        let changed = self.is_changed(field);
        match self.effective(field, def) {
            FieldValue::Range(r) if changed => format!("{}*", r),
            FieldValue::Range(r) => r.to_string(),
            FieldValue::Chance(c) if changed => format!("{:.2}*", c),
            FieldValue::Chance(c) => format!("{:.2}", c),
            FieldValue::Tags(t) if t.is_empty() => "None".to_string(),
            FieldValue::Tags(t) if changed => format!("*{}", t.join(",")),
            FieldValue::Tags(t) => t.join(","),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefDatabase;
    use crate::error::PawnTweakError;

    fn raider() -> PawnKindDef {
        PawnKindDef {
            apparel_money: FloatRange::new(200.0, 800.0),
            weapon_money: FloatRange::new(150.0, 400.0),
            tech_hediffs_money: FloatRange::new(0.0, 100.0),
            tech_hediffs_chance: 0.1,
            apparel_tags: vec!["Industrial".to_string()],
            weapon_tags: vec!["Gun".to_string(), "Melee".to_string()],
            ..PawnKindDef::new("Raider")
        }
    }

    #[test]
    fn test_new_record_is_empty() {
        let tweak = PawnTweak::new("Raider");
        assert!(tweak.is_empty());
        assert_eq!(tweak.changed_count(), 0);
        let def = raider();
        for field in Field::ALL {
            assert_eq!(tweak.effective(field, &def), def.value(field));
        }
    }

    #[test]
    fn test_effective_prefers_override() {
        let def = raider();
        let mut tweak = PawnTweak::new("Raider");
        tweak.apparel_money.set(FloatRange::new(100.0, 500.0));
        tweak.weapon_tags.set(vec!["Bow".to_string()]);

        assert_eq!(tweak.apparel_money(&def), FloatRange::new(100.0, 500.0));
        assert_eq!(tweak.weapon_money(&def), def.weapon_money);
        assert_eq!(tweak.weapon_tags(&def), ["Bow".to_string()]);
        assert_eq!(tweak.apparel_tags(&def), def.apparel_tags.as_slice());
        assert!(!tweak.is_empty());
    }

    #[test]
    fn test_override_equal_to_default_counts_as_changed() {
        let def = raider();
        let mut tweak = PawnTweak::new("Raider");
        tweak.tech_hediffs_chance.set(def.tech_hediffs_chance);
        assert!(tweak.is_changed(Field::TechHediffsChance));
        assert!(!tweak.is_empty());
    }

    #[test]
    fn test_set_rejects_wrong_kind() {
        let mut tweak = PawnTweak::new("Raider");
        assert!(!tweak.set(Field::ApparelTags, FieldValue::Chance(0.3)));
        assert!(tweak.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut tweak = PawnTweak::new("Raider");
        for field in Field::ALL {
            let value = match field.kind() {
                crate::tweak::FieldKind::Range => FieldValue::Range(FloatRange::new(1.0, 2.0)),
                crate::tweak::FieldKind::Chance => FieldValue::Chance(0.5),
                crate::tweak::FieldKind::Tags => FieldValue::Tags(vec!["x".to_string()]),
            };
            assert!(tweak.set(field, value));
        }
        assert_eq!(tweak.changed_count(), 7);
        tweak.reset();
        assert!(tweak.is_empty());
    }

    #[test]
    fn test_apply_writes_only_set_fields() {
        let mut db = DefDatabase::new(vec![raider()], Vec::new()).unwrap();
        let mut tweak = PawnTweak::new("Raider");
        tweak.apparel_money.set(FloatRange::new(100.0, 500.0));
        tweak.tech_hediffs_tags.set(vec!["Advanced".to_string()]);

        assert_eq!(tweak.apply(&mut db).unwrap(), 2);

        let live = db.pawn_kind("Raider").unwrap();
        assert_eq!(live.apparel_money, FloatRange::new(100.0, 500.0));
        assert_eq!(live.tech_hediffs_tags, vec!["Advanced"]);
        assert_eq!(live.weapon_money, FloatRange::new(150.0, 400.0));
        assert_eq!(live.weapon_tags, vec!["Gun", "Melee"]);
    }

    #[test]
    fn test_apply_stops_at_rejection() {
        let mut db = DefDatabase::new(vec![raider()], Vec::new()).unwrap();
        let mut tweak = PawnTweak::new("Raider");
        tweak.apparel_money.set(FloatRange::new(100.0, 500.0));
        tweak.weapon_money.set(FloatRange::new(f32::NAN, 1.0));

        let err = tweak.apply(&mut db).unwrap_err();
        assert!(matches!(
            err,
            PawnTweakError::Rejected {
                field: Field::WeaponMoney,
                ..
            }
        ));
        // Fields before the rejected one stay written
        let live = db.pawn_kind("Raider").unwrap();
        assert_eq!(live.apparel_money, FloatRange::new(100.0, 500.0));
    }

    #[test]
    fn test_display() {
        let def = raider();
        let mut tweak = PawnTweak::new("Raider");
        assert_eq!(tweak.display(Field::ApparelMoney, &def), "200~800");
        assert_eq!(tweak.display(Field::TechHediffsChance, &def), "0.10");
        assert_eq!(tweak.display(Field::WeaponTags, &def), "Gun,Melee");
        assert_eq!(tweak.display(Field::TechHediffsTags, &def), "None");

        tweak.apparel_money.set(FloatRange::new(100.0, 500.0));
        tweak.tech_hediffs_chance.set(0.25);
        tweak.weapon_tags.set(vec!["Bow".to_string()]);
        tweak.apparel_tags.set(Vec::new());
        assert_eq!(tweak.display(Field::ApparelMoney, &def), "100~500*");
        assert_eq!(tweak.display(Field::TechHediffsChance, &def), "0.25*");
        assert_eq!(tweak.display(Field::WeaponTags, &def), "*Bow");
        assert_eq!(tweak.display(Field::ApparelTags, &def), "None");
    }
}
