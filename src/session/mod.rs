//! Session context tying the host, the override store and the clipboard
//! together
//!
//! One session per running host. Nothing here is global.

use crate::bulk::{self, PawnFilter};
use crate::clipboard::Clipboard;
use crate::config::{self, PawnKindDef, PawnKindHost};
use crate::editor::PawnEditor;
use crate::error::{PawnTweakError, Result};
use crate::persistence::{self, LoadSummary, SaveSummary};
use crate::tweak::{ApplyReport, Field, FieldValue, TweakStore, VerifyReport};
use ahash::AHashMap;
use std::path::{Path, PathBuf};

pub struct TweakSession<H: PawnKindHost> {
    host: H,
    store: TweakStore,
    clipboard: Clipboard,
    file_path: Option<PathBuf>,
    /// Host definitions as they were before the first apply
    defaults: AHashMap<String, PawnKindDef>,
}

impl<H: PawnKindHost> TweakSession<H> {
    /// One unset record per pawn kind the host knows; nothing is loaded.
    /// The host's current definitions become the session's defaults.
    pub fn new(host: H, file_path: Option<PathBuf>) -> Self {
        let store = TweakStore::from_host(&host);
        let defaults = host
            .pawn_kind_names()
            .into_iter()
            .filter_map(|name| {
                let def = host.pawn_kind(&name)?.clone();
                Some((name, def))
            })
            .collect();
        Self {
            host,
            store,
            clipboard: Clipboard::new(),
            file_path,
            defaults,
        }
    }

    /// Build the session, load the override file and apply every record.
    ///
    /// A failed load is logged and the session starts with whatever rows
    /// were read before the failure.
    pub fn start(host: H, file_path: Option<PathBuf>) -> Self {
        let mut session = Self::new(host, file_path);
        if let Err(err) = persistence::load(session.file_path.as_deref(), &mut session.store) {
            log::error!("Error loading pawn tweaks: {}", err);
        }
        session.apply();
        session
    }

    /// [`TweakSession::start`] with the override file in the platform
    /// config folder
    pub fn start_default(host: H) -> Self {
        Self::start(host, config::default_tweak_file_path())
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn store(&self) -> &TweakStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TweakStore {
        &mut self.store
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Definition of a pawn kind from before any override was applied
    pub fn default_def(&self, def_name: &str) -> Option<&PawnKindDef> {
        self.defaults.get(def_name)
    }

    pub fn effective(&self, def_name: &str, field: Field) -> Result<FieldValue> {
        self.store.effective(&self.host, def_name, field)
    }

    /// Write every record's overrides into the host
    pub fn apply(&mut self) -> ApplyReport {
        self.store.apply_all(&mut self.host)
    }

    /// Re-read the override file, replacing every record, then apply
    pub fn reload(&mut self) -> Result<LoadSummary> {
        let summary = persistence::load(self.file_path.as_deref(), &mut self.store)?;
        self.apply();
        Ok(summary)
    }

    /// Save the non-empty records and apply them to the host
    pub fn export(&mut self) -> Result<SaveSummary> {
        persistence::save(self.file_path.as_deref(), &self.store, &mut self.host)
    }

    /// Clear every override of one pawn kind. The host keeps whatever was
    /// last applied.
    pub fn reset(&mut self, def_name: &str) -> Result<()> {
        self.store
            .get_mut(def_name)
            .ok_or_else(|| PawnTweakError::PawnKindNotFound(def_name.to_string()))?
            .reset();
        Ok(())
    }

    pub fn reset_all(&mut self) {
        self.store.reset_all();
    }

    /// Compare the overrides of the selected pawn kinds with the host's
    /// live values
    pub fn verify_selected<S: AsRef<str>>(&self, selection: &[S]) -> Result<VerifyReport> {
        if selection.is_empty() {
            return Err(PawnTweakError::EmptySelection);
        }
        let mut report = VerifyReport::default();
        for name in selection {
            let name = name.as_ref();
            let (tweak, def) = self.store.lookup(&self.host, name)?;
            let verification = tweak.verify(def);
            report.checked += 1;
            if !verification.matches() {
                log::warn!("In-game values of {} differ from the config:{}", name, verification);
                report.mismatched.push((name.to_string(), verification));
            }
        }
        Ok(report)
    }

    pub fn multiply_selected<S: AsRef<str>>(
        &mut self,
        selection: &[S],
        field: Field,
        multiplier: f32,
    ) -> Result<usize> {
        bulk::multiply_selected(&mut self.store, &self.host, selection, field, multiplier)
    }

    pub fn filter(&self, filter: &PawnFilter) -> Vec<String> {
        filter.apply(&self.store, &self.host)
    }

    pub fn factions(&self) -> Vec<String> {
        bulk::factions(&self.host)
    }

    pub fn open_editor(&self, def_name: &str) -> Result<PawnEditor> {
        let (tweak, def) = self.store.lookup(&self.host, def_name)?;
        Ok(PawnEditor::open(tweak, def))
    }

    /// Write an editor's buffers into its record. Edited values equal to
    /// the pre-apply defaults clear their override. The host is untouched
    /// until the next apply or export.
    pub fn commit_editor(&mut self, editor: &PawnEditor) -> Result<()> {
        let defaults = self
            .defaults
            .get(editor.def_name())
            .ok_or_else(|| PawnTweakError::PawnKindNotFound(editor.def_name().to_string()))?;
        let tweak = self
            .store
            .get_mut(editor.def_name())
            .ok_or_else(|| PawnTweakError::PawnKindNotFound(editor.def_name().to_string()))?;
        editor.commit(tweak, defaults);
        Ok(())
    }

    /// Copy the effective value of one field into the clipboard
    pub fn copy(&mut self, def_name: &str, field: Field) -> Result<()> {
        let (tweak, def) = self.store.lookup(&self.host, def_name)?;
        self.clipboard.copy(field, tweak, def);
        Ok(())
    }

    pub fn copy_all(&mut self, def_name: &str) -> Result<()> {
        let (tweak, def) = self.store.lookup(&self.host, def_name)?;
        self.clipboard.copy_all(tweak, def);
        Ok(())
    }

    /// Set one field from the clipboard; `false` when the slot is empty
    pub fn paste(&mut self, def_name: &str, field: Field) -> Result<bool> {
        let tweak = self
            .store
            .get_mut(def_name)
            .ok_or_else(|| PawnTweakError::PawnKindNotFound(def_name.to_string()))?;
        Ok(self.clipboard.paste(field, tweak))
    }

    pub fn paste_all(&mut self, def_name: &str) -> Result<usize> {
        let tweak = self
            .store
            .get_mut(def_name)
            .ok_or_else(|| PawnTweakError::PawnKindNotFound(def_name.to_string()))?;
        Ok(self.clipboard.paste_all(tweak))
    }
}
