//! In-memory definition database loaded from JSON

use crate::config::{PawnKindDef, PawnKindHost, TagCatalog, ThingDef};
use crate::error::{PawnTweakError, Result};
use crate::tweak::{Field, FieldValue};
use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;

/// On-disk shape: `{"pawn_kinds": [...], "things": [...]}`
#[derive(Debug, Deserialize)]
struct RawDatabase {
    #[serde(default)]
    pawn_kinds: Vec<PawnKindDef>,
    #[serde(default)]
    things: Vec<ThingDef>,
}

/// Pawn kinds and things keyed by def name
#[derive(Debug, Clone, Default)]
pub struct DefDatabase {
    pawn_kinds: Vec<PawnKindDef>,
    things: Vec<ThingDef>,
    index: AHashMap<String, usize>,
}

impl DefDatabase {
    /// Build a database; duplicate pawn kind names are rejected
    pub fn new(pawn_kinds: Vec<PawnKindDef>, things: Vec<ThingDef>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(pawn_kinds.len());
        for (i, def) in pawn_kinds.iter().enumerate() {
            if index.insert(def.def_name.clone(), i).is_some() {
                return Err(PawnTweakError::DeserializationError(format!(
                    "duplicate pawn kind: {}",
                    def.def_name
                )));
            }
        }
        Ok(Self {
            pawn_kinds,
            things,
            index,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDatabase = serde_json::from_str(json)?;
        Self::new(raw.pawn_kinds, raw.things)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let db = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} pawn kinds and {} things from {}",
            db.pawn_kinds.len(),
            db.things.len(),
            path.display()
        );
        Ok(db)
    }

    pub fn pawn_kinds(&self) -> &[PawnKindDef] {
        &self.pawn_kinds
    }

    pub fn things(&self) -> &[ThingDef] {
        &self.things
    }

    pub fn tag_catalog(&self) -> TagCatalog {
        TagCatalog::from_things(&self.things)
    }
}

impl PawnKindHost for DefDatabase {
    fn pawn_kind_names(&self) -> Vec<String> {
        self.pawn_kinds.iter().map(|d| d.def_name.clone()).collect()
    }

    fn pawn_kind(&self, def_name: &str) -> Option<&PawnKindDef> {
        self.index.get(def_name).map(|&i| &self.pawn_kinds[i])
    }

    fn write_field(&mut self, def_name: &str, field: Field, value: FieldValue) -> Result<()> {
        let rejected = |reason: &str| PawnTweakError::Rejected {
            def_name: def_name.to_string(),
            field,
            reason: reason.to_string(),
        };

        let &i = self
            .index
            .get(def_name)
            .ok_or_else(|| PawnTweakError::PawnKindNotFound(def_name.to_string()))?;

        if !value.is_finite() {
            return Err(rejected("value is not finite"));
        }
        if !self.pawn_kinds[i].assign(field, value) {
            return Err(rejected("value kind does not match field"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloatRange;

    const JSON: &str = r#"{
        "pawn_kinds": [
            {"def_name": "Raider", "default_faction": "Pirate",
             "apparel_money": {"min": 200, "max": 800},
             "tech_hediffs_chance": 0.1,
             "weapon_tags": ["Gun"]},
            {"def_name": "Villager"}
        ],
        "things": [
            {"def_name": "Rifle", "weapon_tags": ["Gun"]}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let db = DefDatabase::from_json_str(JSON).unwrap();
        assert_eq!(db.pawn_kind_names(), vec!["Raider", "Villager"]);
        let raider = db.pawn_kind("Raider").unwrap();
        assert_eq!(raider.apparel_money, FloatRange::new(200.0, 800.0));
        assert_eq!(raider.default_faction.as_deref(), Some("Pirate"));
        assert_eq!(db.tag_catalog().weapon, vec!["Gun"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = DefDatabase::new(
            vec![PawnKindDef::new("Raider"), PawnKindDef::new("Raider")],
            Vec::new(),
        );
        assert!(matches!(result, Err(PawnTweakError::DeserializationError(_))));
    }

    #[test]
    fn test_write_field() {
        let mut db = DefDatabase::from_json_str(JSON).unwrap();
        db.write_field(
            "Villager",
            Field::WeaponMoney,
            FieldValue::Range(FloatRange::new(10.0, 20.0)),
        )
        .unwrap();
        assert_eq!(
            db.pawn_kind("Villager").unwrap().weapon_money,
            FloatRange::new(10.0, 20.0)
        );
    }

    #[test]
    fn test_write_field_rejections() {
        let mut db = DefDatabase::from_json_str(JSON).unwrap();

        let err = db
            .write_field("Raider", Field::TechHediffsChance, FieldValue::Chance(f32::NAN))
            .unwrap_err();
        assert!(matches!(err, PawnTweakError::Rejected { .. }));

        let err = db
            .write_field("Raider", Field::ApparelTags, FieldValue::Chance(0.5))
            .unwrap_err();
        assert!(matches!(err, PawnTweakError::Rejected { .. }));

        let err = db
            .write_field("Nobody", Field::TechHediffsChance, FieldValue::Chance(0.5))
            .unwrap_err();
        assert!(matches!(err, PawnTweakError::PawnKindNotFound(_)));
    }
}
