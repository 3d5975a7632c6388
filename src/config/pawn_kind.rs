//! Pawn kind definition structures

use crate::tweak::{Field, FieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive numeric range, written as `min~max`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    #[inline]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Parse `min~max`; surrounding whitespace on either bound is ignored.
    /// Non-finite bounds are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let (min, max) = s.split_once('~')?;
        if max.contains('~') {
            return None;
        }
        let min: f32 = min.trim().parse().ok()?;
        let max: f32 = max.trim().parse().ok()?;
        let range = Self::new(min, max);
        range.is_finite().then_some(range)
    }

    /// Both bounds multiplied by `factor`
    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl fmt::Display for FloatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.min, self.max)
    }
}

/// Spawn-generation parameters of one pawn kind, as the host defines them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PawnKindDef {
    pub def_name: String,
    /// Faction this kind spawns for by default; `None` for factionless kinds
    #[serde(default)]
    pub default_faction: Option<String>,
    #[serde(default)]
    pub apparel_money: FloatRange,
    #[serde(default)]
    pub weapon_money: FloatRange,
    #[serde(default)]
    pub tech_hediffs_money: FloatRange,
    #[serde(default)]
    pub tech_hediffs_chance: f32,
    #[serde(default)]
    pub apparel_tags: Vec<String>,
    #[serde(default)]
    pub weapon_tags: Vec<String>,
    #[serde(default)]
    pub tech_hediffs_tags: Vec<String>,
}

impl PawnKindDef {
    pub fn new(def_name: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
            default_faction: None,
            apparel_money: FloatRange::default(),
            weapon_money: FloatRange::default(),
            tech_hediffs_money: FloatRange::default(),
            tech_hediffs_chance: 0.0,
            apparel_tags: Vec::new(),
            weapon_tags: Vec::new(),
            tech_hediffs_tags: Vec::new(),
        }
    }

    /// Current value of `field`
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::ApparelMoney => FieldValue::Range(self.apparel_money),
            Field::WeaponMoney => FieldValue::Range(self.weapon_money),
            Field::TechHediffsMoney => FieldValue::Range(self.tech_hediffs_money),
            Field::TechHediffsChance => FieldValue::Chance(self.tech_hediffs_chance),
            Field::ApparelTags => FieldValue::Tags(self.apparel_tags.clone()),
            Field::WeaponTags => FieldValue::Tags(self.weapon_tags.clone()),
            Field::TechHediffsTags => FieldValue::Tags(self.tech_hediffs_tags.clone()),
        }
    }

    /// Tag list behind a tag field, `None` for numeric fields
    pub fn tags(&self, field: Field) -> Option<&[String]> {
        match field {
            Field::ApparelTags => Some(&self.apparel_tags),
            Field::WeaponTags => Some(&self.weapon_tags),
            Field::TechHediffsTags => Some(&self.tech_hediffs_tags),
            _ => None,
        }
    }

    /// Overwrite `field` with `value`. Returns false when the value kind
    /// does not fit the field.
    pub fn assign(&mut self, field: Field, value: FieldValue) -> bool {
        match (field, value) {
            (Field::ApparelMoney, FieldValue::Range(r)) => self.apparel_money = r,
            (Field::WeaponMoney, FieldValue::Range(r)) => self.weapon_money = r,
            (Field::TechHediffsMoney, FieldValue::Range(r)) => self.tech_hediffs_money = r,
            (Field::TechHediffsChance, FieldValue::Chance(c)) => self.tech_hediffs_chance = c,
            (Field::ApparelTags, FieldValue::Tags(t)) => self.apparel_tags = t,
            (Field::WeaponTags, FieldValue::Tags(t)) => self.weapon_tags = t,
            (Field::TechHediffsTags, FieldValue::Tags(t)) => self.tech_hediffs_tags = t,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_parse() {
        assert_eq!(FloatRange::parse("100~500"), Some(FloatRange::new(100.0, 500.0)));
        assert_eq!(FloatRange::parse(" 1.5 ~ 2 "), Some(FloatRange::new(1.5, 2.0)));
        assert_eq!(FloatRange::parse("100"), None);
        assert_eq!(FloatRange::parse("1~2~3"), None);
        assert_eq!(FloatRange::parse("a~2"), None);
        assert_eq!(FloatRange::parse("NaN~2"), None);
    }

    #[test]
    fn test_range_display() {
        assert_eq!(FloatRange::new(100.0, 500.0).to_string(), "100~500");
        assert_eq!(FloatRange::new(0.5, 12.25).to_string(), "0.5~12.25");
    }

    #[test]
    fn test_assign_rejects_wrong_kind() {
        let mut def = PawnKindDef::new("Raider");
        assert!(!def.assign(Field::ApparelMoney, FieldValue::Chance(0.5)));
        assert!(def.assign(Field::TechHediffsChance, FieldValue::Chance(0.5)));
        assert_eq!(def.tech_hediffs_chance, 0.5);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let def: PawnKindDef = serde_json::from_str(
            r#"{"def_name": "Raider", "apparel_money": {"min": 100, "max": 500}}"#,
        )
        .unwrap();
        assert_eq!(def.apparel_money, FloatRange::new(100.0, 500.0));
        assert!(def.weapon_tags.is_empty());
        assert_eq!(def.default_faction, None);
    }
}
