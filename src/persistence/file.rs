//! Reading and writing the override file

use super::codec::{decode_row, encode_record};
use crate::config::PawnKindHost;
use crate::error::{PawnTweakError, Result};
use crate::tweak::{ApplyReport, TweakStore};
use std::fs::File;
use std::path::{Path, PathBuf};

/// What a load did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// False when there was no file to read
    pub found: bool,
    /// Non-blank rows read
    pub rows: usize,
    /// Rows whose def name matched a record
    pub matched: usize,
    /// Rows skipped for an unknown def name
    pub unknown: usize,
    pub fields_set: usize,
    /// Segments left unset because they did not parse
    pub malformed: usize,
}

/// What a save did
#[derive(Debug)]
pub struct SaveSummary {
    pub path: PathBuf,
    /// Rows written, one per non-empty record
    pub written: usize,
    pub apply: ApplyReport,
}

/// Restore overrides from `path`.
///
/// Every record is reset first, so overrides absent from the file are
/// cleared. A missing path or file leaves all records unset. Unknown def
/// names and unparsable segments are skipped. A read error aborts the load
/// without rolling back rows already applied.
pub fn load(path: Option<&Path>, store: &mut TweakStore) -> Result<LoadSummary> {
    store.reset_all();

    let Some(path) = path.filter(|p| p.exists()) else {
        log::info!("No override file found, all pawn kinds use their defaults");
        return Ok(LoadSummary::default());
    };

    let summary = read_rows(File::open(path)?, store)?;
    log::info!(
        "Loaded {} overrides for {} pawn kinds from {} ({} unknown, {} malformed)",
        summary.fields_set,
        summary.matched,
        path.display(),
        summary.unknown,
        summary.malformed
    );
    Ok(summary)
}

/// Decode rows from `input` onto the matching records, without resetting
/// anything first
pub fn read_rows<R: std::io::Read>(input: R, store: &mut TweakStore) -> Result<LoadSummary> {
    let mut summary = LoadSummary {
        found: true,
        ..LoadSummary::default()
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    for result in reader.records() {
        let record = result?;
        if record.iter().all(|s| s.trim().is_empty()) {
            continue;
        }
        summary.rows += 1;

        let def_name = record.get(0).unwrap_or_default();
        let Some(tweak) = store.get_mut(def_name) else {
            log::debug!("Skipping unknown pawn kind {:?}", def_name);
            summary.unknown += 1;
            continue;
        };

        let outcome = decode_row(tweak, record.iter());
        summary.matched += 1;
        summary.fields_set += outcome.fields_set;
        summary.malformed += outcome.malformed;
    }

    Ok(summary)
}

/// Write one row per non-empty record to `path`, then apply every record
/// to the host. Saving always applies.
pub fn save<H: PawnKindHost + ?Sized>(
    path: Option<&Path>,
    store: &TweakStore,
    host: &mut H,
) -> Result<SaveSummary> {
    let path = path.ok_or(PawnTweakError::MissingPath)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let written = write_rows(File::create(path)?, store)?;
    let apply = store.apply_all(host);
    log::info!("Exported {} overrides to {}", written, path.display());

    Ok(SaveSummary {
        path: path.to_path_buf(),
        written,
        apply,
    })
}

/// Encode every non-empty record into `out`; returns the row count
pub fn write_rows<W: std::io::Write>(out: W, store: &TweakStore) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    let mut written = 0;
    for tweak in store.non_empty() {
        writer.write_record(encode_record(tweak))?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}
