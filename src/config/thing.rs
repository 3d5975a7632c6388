//! Equipment definitions and the tag universe they span

use crate::tweak::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Equipment definition carrying the tags pawn kinds select from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThingDef {
    pub def_name: String,
    #[serde(default)]
    pub apparel_tags: Vec<String>,
    #[serde(default)]
    pub weapon_tags: Vec<String>,
    #[serde(default)]
    pub tech_hediffs_tags: Vec<String>,
    /// Only flagged things contribute tech hediff tags
    #[serde(default)]
    pub is_tech_hediff: bool,
}

/// Distinct, sorted tags per category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagCatalog {
    pub apparel: Vec<String>,
    pub weapon: Vec<String>,
    pub tech_hediffs: Vec<String>,
}

impl TagCatalog {
    pub fn from_things<'a>(things: impl IntoIterator<Item = &'a ThingDef>) -> Self {
        let mut apparel = BTreeSet::new();
        let mut weapon = BTreeSet::new();
        let mut tech_hediffs = BTreeSet::new();

        for thing in things {
            apparel.extend(thing.apparel_tags.iter().cloned());
            weapon.extend(thing.weapon_tags.iter().cloned());
            if thing.is_tech_hediff {
                tech_hediffs.extend(thing.tech_hediffs_tags.iter().cloned());
            }
        }

        Self {
            apparel: apparel.into_iter().collect(),
            weapon: weapon.into_iter().collect(),
            tech_hediffs: tech_hediffs.into_iter().collect(),
        }
    }

    /// Selectable tags for a tag field; empty for numeric fields
    pub fn tags(&self, field: Field) -> &[String] {
        match field {
            Field::ApparelTags => &self.apparel,
            Field::WeaponTags => &self.weapon,
            Field::TechHediffsTags => &self.tech_hediffs,
            _ => &[],
        }
    }
}
