//! The collection of override records

use crate::config::{PawnKindDef, PawnKindHost};
use crate::error::{PawnTweakError, Result};
use crate::tweak::{Field, FieldValue, PawnTweak};
use ahash::AHashMap;

/// Outcome of applying every record to the host
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Records written without error (empty records included)
    pub applied: usize,
    /// Fields written across all records
    pub fields_written: usize,
    /// One entry per record the host refused
    pub failures: Vec<PawnTweakError>,
}

impl ApplyReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One record per known pawn kind, in host order
#[derive(Debug, Clone, Default)]
pub struct TweakStore {
    tweaks: Vec<PawnTweak>,
    index: AHashMap<String, usize>,
}

impl TweakStore {
    /// An all-unset record for every pawn kind the host knows
    pub fn from_host<H: PawnKindHost + ?Sized>(host: &H) -> Self {
        Self::from_names(host.pawn_kind_names())
    }

    /// Repeated names collapse onto the first record
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::default();
        for name in names {
            let name = name.into();
            if store.index.contains_key(&name) {
                continue;
            }
            store.index.insert(name.clone(), store.tweaks.len());
            store.tweaks.push(PawnTweak::new(name));
        }
        store
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tweaks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tweaks.is_empty()
    }

    #[inline]
    pub fn contains(&self, def_name: &str) -> bool {
        self.index.contains_key(def_name)
    }

    pub fn get(&self, def_name: &str) -> Option<&PawnTweak> {
        self.index.get(def_name).map(|&i| &self.tweaks[i])
    }

    pub fn get_mut(&mut self, def_name: &str) -> Option<&mut PawnTweak> {
        self.index.get(def_name).map(|&i| &mut self.tweaks[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PawnTweak> {
        self.tweaks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PawnTweak> {
        self.tweaks.iter_mut()
    }

    /// Records with at least one set field
    pub fn non_empty(&self) -> impl Iterator<Item = &PawnTweak> {
        self.tweaks.iter().filter(|t| !t.is_empty())
    }

    /// Clear every record
    pub fn reset_all(&mut self) {
        self.tweaks.iter_mut().for_each(PawnTweak::reset);
    }

    /// Effective value of one field of one pawn kind
    pub fn effective<H: PawnKindHost + ?Sized>(
        &self,
        host: &H,
        def_name: &str,
        field: Field,
    ) -> Result<FieldValue> {
        let (tweak, def) = self.lookup(host, def_name)?;
        Ok(tweak.effective(field, def))
    }

    /// Record and live definition of one pawn kind
    pub fn lookup<'a, H: PawnKindHost + ?Sized>(
        &'a self,
        host: &'a H,
        def_name: &str,
    ) -> Result<(&'a PawnTweak, &'a PawnKindDef)> {
        let tweak = self
            .get(def_name)
            .ok_or_else(|| PawnTweakError::PawnKindNotFound(def_name.to_string()))?;
        let def = host
            .pawn_kind(def_name)
            .ok_or_else(|| PawnTweakError::PawnKindNotFound(def_name.to_string()))?;
        Ok((tweak, def))
    }

    /// Apply every record. A refused record is logged and recorded;
    /// the remaining records are still applied.
    pub fn apply_all<H: PawnKindHost + ?Sized>(&self, host: &mut H) -> ApplyReport {
        let mut report = ApplyReport::default();
        for tweak in &self.tweaks {
            match tweak.apply(host) {
                Ok(written) => {
                    report.applied += 1;
                    report.fields_written += written;
                }
                Err(err) => {
                    log::error!("Error applying tweak to {}: {}", tweak.def_name(), err);
                    report.failures.push(err);
                }
            }
        }
        log::debug!(
            "Applied {} records ({} fields), {} failed",
            report.applied,
            report.fields_written,
            report.failures.len()
        );
        report
    }
}
