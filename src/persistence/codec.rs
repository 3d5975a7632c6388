//! Line encoding of override records
//!
//! One row per record: the def name followed by seven segments in
//! [`CSV_COLUMNS`] order. Ranges are `min~max`, tag lists are
//! `;`-joined, an unset field is an empty segment.

use crate::config::FloatRange;
use crate::tweak::{Field, FieldKind, FieldValue, PawnTweak};

/// Column order after the def name. Differs from [`Field::ALL`]:
/// tech hediff tags come before apparel and weapon tags.
pub const CSV_COLUMNS: [Field; 7] = [
    Field::ApparelMoney,
    Field::WeaponMoney,
    Field::TechHediffsMoney,
    Field::TechHediffsChance,
    Field::TechHediffsTags,
    Field::ApparelTags,
    Field::WeaponTags,
];

pub const TAG_SEPARATOR: &str = ";";

/// Decoded state of one segment
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Nothing to set; the field stays unset
    Empty,
    Value(FieldValue),
    /// Present but unparsable; the field stays unset
    Malformed,
}

/// Encode a value as a segment. An empty tag list encodes as an empty
/// segment, so it reads back as unset.
pub fn encode_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Range(r) => r.to_string(),
        FieldValue::Chance(c) => c.to_string(),
        FieldValue::Tags(t) => t.join(TAG_SEPARATOR),
    }
}

/// Def name followed by the seven segments
pub fn encode_record(tweak: &PawnTweak) -> Vec<String> {
    let mut row = Vec::with_capacity(CSV_COLUMNS.len() + 1);
    row.push(tweak.def_name().to_string());
    for field in CSV_COLUMNS {
        row.push(
            tweak
                .override_value(field)
                .map(|v| encode_value(&v))
                .unwrap_or_default(),
        );
    }
    row
}

pub fn decode_segment(field: Field, segment: &str) -> Segment {
    if segment.is_empty() {
        return Segment::Empty;
    }
    match field.kind() {
        FieldKind::Range => FloatRange::parse(segment)
            .map(|r| Segment::Value(FieldValue::Range(r)))
            .unwrap_or(Segment::Malformed),
        FieldKind::Chance => match segment.trim().parse::<f32>() {
            Ok(c) if c.is_finite() => Segment::Value(FieldValue::Chance(c)),
            _ => Segment::Malformed,
        },
        FieldKind::Tags => {
            let tags: Vec<String> = segment
                .split(TAG_SEPARATOR)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            if tags.is_empty() {
                Segment::Empty
            } else {
                Segment::Value(FieldValue::Tags(tags))
            }
        }
    }
}

/// Per-row decode counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowOutcome {
    pub fields_set: usize,
    pub malformed: usize,
}

/// Set every decodable segment of `row` (def name at index 0) on `tweak`.
/// Missing trailing segments and extra segments are ignored.
pub fn decode_row<'r>(
    tweak: &mut PawnTweak,
    row: impl IntoIterator<Item = &'r str>,
) -> RowOutcome {
    let mut outcome = RowOutcome::default();
    for (field, segment) in CSV_COLUMNS.into_iter().zip(row.into_iter().skip(1)) {
        match decode_segment(field, segment) {
            Segment::Value(value) => {
                tweak.set(field, value);
                outcome.fields_set += 1;
            }
            Segment::Malformed => {
                log::warn!(
                    "Ignoring malformed {} segment {:?} for {}",
                    field,
                    segment,
                    tweak.def_name()
                );
                outcome.malformed += 1;
            }
            Segment::Empty => {}
        }
    }
    outcome
}
