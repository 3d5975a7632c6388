//! Tweakable fields and their values

use crate::config::FloatRange;
use std::fmt;

/// Tolerance used when comparing tech hediff chances
pub const CHANCE_EPSILON: f32 = 0.001;

/// Kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Range,
    Chance,
    Tags,
}

/// One of the seven overridable spawn-generation fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    ApparelMoney,
    WeaponMoney,
    TechHediffsMoney,
    TechHediffsChance,
    ApparelTags,
    WeaponTags,
    TechHediffsTags,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::ApparelMoney,
        Field::WeaponMoney,
        Field::TechHediffsMoney,
        Field::TechHediffsChance,
        Field::ApparelTags,
        Field::WeaponTags,
        Field::TechHediffsTags,
    ];

    /// Fields accepted by the bulk multiply action
    pub const MULTIPLIABLE: [Field; 4] = [
        Field::ApparelMoney,
        Field::WeaponMoney,
        Field::TechHediffsMoney,
        Field::TechHediffsChance,
    ];

    /// Position in [`Field::ALL`]
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::ApparelMoney | Field::WeaponMoney | Field::TechHediffsMoney => FieldKind::Range,
            Field::TechHediffsChance => FieldKind::Chance,
            Field::ApparelTags | Field::WeaponTags | Field::TechHediffsTags => FieldKind::Tags,
        }
    }

    #[inline]
    pub fn is_multipliable(&self) -> bool {
        self.kind() != FieldKind::Tags
    }

    /// Stable camelCase name
    pub fn name(&self) -> &'static str {
        match self {
            Field::ApparelMoney => "apparelMoney",
            Field::WeaponMoney => "weaponMoney",
            Field::TechHediffsMoney => "techHediffsMoney",
            Field::TechHediffsChance => "techHediffsChance",
            Field::ApparelTags => "apparelTags",
            Field::WeaponTags => "weaponTags",
            Field::TechHediffsTags => "techHediffsTags",
        }
    }

    /// Label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Field::ApparelMoney => "ApparelMoney",
            Field::WeaponMoney => "WeaponMoney",
            Field::TechHediffsMoney => "TechHediffsMoney",
            Field::TechHediffsChance => "TechHediffsChance",
            Field::ApparelTags => "ApparelTags",
            Field::WeaponTags => "WeaponTags",
            Field::TechHediffsTags => "TechHediffsTags",
        }
    }

    /// Accepts either the name or the label
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|f| f.name() == s || f.label() == s)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of one field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Range(FloatRange),
    Chance(f32),
    Tags(Vec<String>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Range(_) => FieldKind::Range,
            FieldValue::Chance(_) => FieldKind::Chance,
            FieldValue::Tags(_) => FieldKind::Tags,
        }
    }

    /// Tags are always finite
    pub fn is_finite(&self) -> bool {
        match self {
            FieldValue::Range(r) => r.is_finite(),
            FieldValue::Chance(c) => c.is_finite(),
            FieldValue::Tags(_) => true,
        }
    }

    /// Equality as verification sees it: exact for ranges, within
    /// [`CHANCE_EPSILON`] for the chance, multiset for tags.
    pub fn matches(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Range(a), FieldValue::Range(b)) => a == b,
            (FieldValue::Chance(a), FieldValue::Chance(b)) => (a - b).abs() <= CHANCE_EPSILON,
            (FieldValue::Tags(a), FieldValue::Tags(b)) => tags_equal(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Range(r) => write!(f, "{}", r),
            FieldValue::Chance(c) => write!(f, "{}", c),
            FieldValue::Tags(t) => f.write_str(&t.join(", ")),
        }
    }
}

/// Order-insensitive tag comparison; duplicates count
pub fn tags_equal<S: AsRef<str>>(a: &[S], b: &[S]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&str> = a.iter().map(AsRef::as_ref).collect();
    let mut b: Vec<&str> = b.iter().map(AsRef::as_ref).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_and_index() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_field_parse() {
        assert_eq!(Field::parse("apparelMoney"), Some(Field::ApparelMoney));
        assert_eq!(Field::parse("TechHediffsTags"), Some(Field::TechHediffsTags));
        assert_eq!(Field::parse("armor"), None);
    }

    #[test]
    fn test_multipliable() {
        for field in Field::MULTIPLIABLE {
            assert!(field.is_multipliable());
        }
        assert!(!Field::WeaponTags.is_multipliable());
    }

    #[test]
    fn test_tags_equal_ignores_order() {
        assert!(tags_equal(&["b", "a"], &["a", "b"]));
        assert!(tags_equal::<&str>(&[], &[]));
    }

    #[test]
    fn test_tags_equal_counts_duplicates() {
        assert!(!tags_equal(&["a", "a", "b"], &["a", "b"]));
        assert!(!tags_equal(&["a", "a", "b"], &["a", "b", "b"]));
    }

    #[test]
    fn test_chance_tolerance() {
        assert!(FieldValue::Chance(0.5).matches(&FieldValue::Chance(0.5005)));
        assert!(!FieldValue::Chance(0.5).matches(&FieldValue::Chance(0.502)));
    }

    #[test]
    fn test_range_equality_is_exact() {
        let a = FieldValue::Range(FloatRange::new(100.0, 500.0));
        let b = FieldValue::Range(FloatRange::new(100.0, 500.0001));
        assert!(!a.matches(&b));
    }
}
