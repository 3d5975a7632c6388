//! Pawn kind list filtering

use crate::config::{PawnKindDef, PawnKindHost};
use crate::tweak::{PawnTweak, TweakStore};
use std::collections::BTreeSet;

/// Which default faction a pawn kind must have
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FactionFilter {
    #[default]
    All,
    /// Pawn kinds without a default faction
    NoFaction,
    Faction(String),
}

impl FactionFilter {
    pub fn matches(&self, faction: Option<&str>) -> bool {
        match self {
            FactionFilter::All => true,
            FactionFilter::NoFaction => faction.is_none(),
            FactionFilter::Faction(name) => faction == Some(name.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PawnFilter {
    /// Case-insensitive substring of the def name; empty matches all
    pub search: String,
    pub faction: FactionFilter,
    /// Keep only pawn kinds with at least one override
    pub only_modified: bool,
}

impl PawnFilter {
    pub fn matches(&self, def: &PawnKindDef, tweak: &PawnTweak) -> bool {
        if self.only_modified && tweak.is_empty() {
            return false;
        }
        if !self.faction.matches(def.default_faction.as_deref()) {
            return false;
        }
        let search = self.search.trim();
        search.is_empty()
            || def
                .def_name
                .to_lowercase()
                .contains(&search.to_lowercase())
    }

    /// Names of the matching pawn kinds, sorted
    pub fn apply<H: PawnKindHost + ?Sized>(&self, store: &TweakStore, host: &H) -> Vec<String> {
        let mut names: Vec<String> = store
            .iter()
            .filter(|tweak| {
                host.pawn_kind(tweak.def_name())
                    .is_some_and(|def| self.matches(def, tweak))
            })
            .map(|tweak| tweak.def_name().to_string())
            .collect();
        names.sort_unstable();
        names
    }
}

/// Distinct default factions across the host, sorted
pub fn factions<H: PawnKindHost + ?Sized>(host: &H) -> Vec<String> {
    host.pawn_kind_names()
        .iter()
        .filter_map(|name| host.pawn_kind(name)?.default_faction.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DefDatabase, FloatRange};

    fn kind(name: &str, faction: Option<&str>) -> PawnKindDef {
        PawnKindDef {
            default_faction: faction.map(str::to_string),
            ..PawnKindDef::new(name)
        }
    }

    fn setup() -> (DefDatabase, TweakStore) {
        let db = DefDatabase::new(
            vec![
                kind("Villager", Some("OutlanderCivil")),
                kind("Raider", Some("Pirate")),
                kind("SpaceRefugee", None),
                kind("PirateBoss", Some("Pirate")),
            ],
            Vec::new(),
        )
        .unwrap();
        let store = TweakStore::from_host(&db);
        (db, store)
    }

    #[test]
    fn test_default_filter_lists_all_sorted() {
        let (db, store) = setup();
        assert_eq!(
            PawnFilter::default().apply(&store, &db),
            vec!["PirateBoss", "Raider", "SpaceRefugee", "Villager"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (db, store) = setup();
        let filter = PawnFilter {
            search: "RAID".to_string(),
            ..PawnFilter::default()
        };
        assert_eq!(filter.apply(&store, &db), vec!["Raider"]);
    }

    #[test]
    fn test_faction_filters() {
        let (db, store) = setup();
        let mut filter = PawnFilter {
            faction: FactionFilter::Faction("Pirate".to_string()),
            ..PawnFilter::default()
        };
        assert_eq!(filter.apply(&store, &db), vec!["PirateBoss", "Raider"]);

        filter.faction = FactionFilter::NoFaction;
        assert_eq!(filter.apply(&store, &db), vec!["SpaceRefugee"]);
    }

    #[test]
    fn test_only_modified() {
        let (db, mut store) = setup();
        store
            .get_mut("Villager")
            .unwrap()
            .weapon_money
            .set(FloatRange::new(1.0, 2.0));
        let filter = PawnFilter {
            only_modified: true,
            ..PawnFilter::default()
        };
        assert_eq!(filter.apply(&store, &db), vec!["Villager"]);
    }

    #[test]
    fn test_factions_are_distinct() {
        let (db, _) = setup();
        assert_eq!(factions(&db), vec!["OutlanderCivil", "Pirate"]);
    }
}
