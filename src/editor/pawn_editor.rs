//! Text-buffer edit session for one pawn kind

use crate::clipboard::Clipboard;
use crate::config::{FloatRange, PawnKindDef};
use crate::tweak::{tags_equal, Field, FieldValue, PawnTweak, CHANCE_EPSILON};

/// Parse user-typed number text; non-finite values count as unparsable
pub fn parse_number(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Money is shown without decimals after a multiply
fn format_money(value: f32) -> String {
    format!("{:.0}", value)
}

fn format_chance(value: f32) -> String {
    format!("{:.2}", value)
}

/// Min/max text of a money range, plus the multiplier text beside it
#[derive(Debug, Clone, PartialEq)]
pub struct RangeBuffer {
    pub min: String,
    pub max: String,
    pub multiplier: String,
}

impl RangeBuffer {
    fn new(range: FloatRange) -> Self {
        let mut buffer = Self {
            min: String::new(),
            max: String::new(),
            multiplier: "1".to_string(),
        };
        buffer.fill(range);
        buffer
    }

    fn fill(&mut self, range: FloatRange) {
        self.min = range.min.to_string();
        self.max = range.max.to_string();
    }

    /// `None` unless both bounds parse
    pub fn parse(&self) -> Option<FloatRange> {
        Some(FloatRange::new(parse_number(&self.min)?, parse_number(&self.max)?))
    }

    /// Scale both bounds by the multiplier text, rounding to whole money.
    /// Leaves the text alone when anything fails to parse.
    pub fn multiply(&mut self) -> bool {
        let Some(factor) = parse_number(&self.multiplier) else {
            return false;
        };
        let Some(range) = self.parse() else {
            return false;
        };
        let scaled = range.scaled(factor);
        self.min = format_money(scaled.min);
        self.max = format_money(scaled.max);
        true
    }
}

/// Chance text plus its multiplier text
#[derive(Debug, Clone, PartialEq)]
pub struct ChanceBuffer {
    pub text: String,
    pub multiplier: String,
}

impl ChanceBuffer {
    fn new(chance: f32) -> Self {
        Self {
            text: chance.to_string(),
            multiplier: "1".to_string(),
        }
    }

    pub fn parse(&self) -> Option<f32> {
        parse_number(&self.text)
    }

    /// Scale by the multiplier text, clamped to [0, 1]
    pub fn multiply(&mut self) -> bool {
        let (Some(factor), Some(chance)) = (parse_number(&self.multiplier), self.parse()) else {
            return false;
        };
        self.text = format_chance((chance * factor).clamp(0.0, 1.0));
        true
    }
}

/// Editable copy of one record's effective values.
///
/// Nothing touches the record until [`PawnEditor::commit`]. Tag buffers
/// keep duplicates and order.
#[derive(Debug, Clone, PartialEq)]
pub struct PawnEditor {
    def_name: String,
    pub apparel_money: RangeBuffer,
    pub weapon_money: RangeBuffer,
    pub tech_hediffs_money: RangeBuffer,
    pub tech_hediffs_chance: ChanceBuffer,
    pub apparel_tags: Vec<String>,
    pub weapon_tags: Vec<String>,
    pub tech_hediffs_tags: Vec<String>,
    /// Parsed buffers as seeded, in [`Field::ALL`] order
    opened: [Option<FieldValue>; 7],
}

impl PawnEditor {
    /// Seed every buffer from the record's effective values
    pub fn open(tweak: &PawnTweak, def: &PawnKindDef) -> Self {
        let mut editor = Self {
            def_name: tweak.def_name().to_string(),
            apparel_money: RangeBuffer::new(tweak.apparel_money(def)),
            weapon_money: RangeBuffer::new(tweak.weapon_money(def)),
            tech_hediffs_money: RangeBuffer::new(tweak.tech_hediffs_money(def)),
            tech_hediffs_chance: ChanceBuffer::new(tweak.tech_hediffs_chance(def)),
            apparel_tags: tweak.apparel_tags(def).to_vec(),
            weapon_tags: tweak.weapon_tags(def).to_vec(),
            tech_hediffs_tags: tweak.tech_hediffs_tags(def).to_vec(),
            opened: Default::default(),
        };
        editor.opened = Field::ALL.map(|field| editor.parse_field(field));
        editor
    }

    #[inline]
    pub fn def_name(&self) -> &str {
        &self.def_name
    }

    pub fn range_buffer_mut(&mut self, field: Field) -> Option<&mut RangeBuffer> {
        match field {
            Field::ApparelMoney => Some(&mut self.apparel_money),
            Field::WeaponMoney => Some(&mut self.weapon_money),
            Field::TechHediffsMoney => Some(&mut self.tech_hediffs_money),
            _ => None,
        }
    }

    fn range_buffer(&self, field: Field) -> Option<&RangeBuffer> {
        match field {
            Field::ApparelMoney => Some(&self.apparel_money),
            Field::WeaponMoney => Some(&self.weapon_money),
            Field::TechHediffsMoney => Some(&self.tech_hediffs_money),
            _ => None,
        }
    }

    pub fn tag_set_mut(&mut self, field: Field) -> Option<&mut Vec<String>> {
        match field {
            Field::ApparelTags => Some(&mut self.apparel_tags),
            Field::WeaponTags => Some(&mut self.weapon_tags),
            Field::TechHediffsTags => Some(&mut self.tech_hediffs_tags),
            _ => None,
        }
    }

    fn tag_set(&self, field: Field) -> Option<&Vec<String>> {
        match field {
            Field::ApparelTags => Some(&self.apparel_tags),
            Field::WeaponTags => Some(&self.weapon_tags),
            Field::TechHediffsTags => Some(&self.tech_hediffs_tags),
            _ => None,
        }
    }

    /// Flip a tag's selection; returns whether it is now selected.
    /// Deselecting removes every copy of the tag.
    pub fn toggle_tag(&mut self, field: Field, tag: &str) -> bool {
        let Some(tags) = self.tag_set_mut(field) else {
            return false;
        };
        if tags.iter().any(|t| t == tag) {
            tags.retain(|t| t != tag);
            false
        } else {
            tags.push(tag.to_string());
            true
        }
    }

    pub fn is_selected(&self, field: Field, tag: &str) -> bool {
        self.tag_set(field)
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// Run the multiply helper of a range or chance field
    pub fn multiply(&mut self, field: Field) -> bool {
        if field == Field::TechHediffsChance {
            return self.tech_hediffs_chance.multiply();
        }
        self.range_buffer_mut(field).is_some_and(RangeBuffer::multiply)
    }

    /// Current buffer content of `field`, `None` when it does not parse
    pub fn parse_field(&self, field: Field) -> Option<FieldValue> {
        if field == Field::TechHediffsChance {
            return self.tech_hediffs_chance.parse().map(FieldValue::Chance);
        }
        if let Some(buffer) = self.range_buffer(field) {
            return buffer.parse().map(FieldValue::Range);
        }
        self.tag_set(field).cloned().map(FieldValue::Tags)
    }

    /// Copy the buffer content; unparsable text empties the slot
    pub fn copy(&self, field: Field, clipboard: &mut Clipboard) {
        match self.parse_field(field) {
            Some(value) => {
                clipboard.store(field, value);
            }
            None => clipboard.clear_slot(field),
        }
    }

    pub fn copy_all(&self, clipboard: &mut Clipboard) {
        for field in Field::ALL {
            self.copy(field, clipboard);
        }
    }

    /// Overwrite the buffer from the clipboard; no-op on an empty slot
    pub fn paste(&mut self, field: Field, clipboard: &Clipboard) -> bool {
        let Some(value) = clipboard.get(field) else {
            return false;
        };
        match value {
            FieldValue::Chance(c) if field == Field::TechHediffsChance => {
                self.tech_hediffs_chance.text = c.to_string();
            }
            FieldValue::Range(r) => match self.range_buffer_mut(field) {
                Some(buffer) => buffer.fill(*r),
                None => return false,
            },
            FieldValue::Tags(t) => match self.tag_set_mut(field) {
                Some(tags) => tags.clone_from(t),
                None => return false,
            },
            FieldValue::Chance(_) => return false,
        }
        true
    }

    pub fn paste_all(&mut self, clipboard: &Clipboard) -> usize {
        Field::ALL
            .into_iter()
            .filter(|&field| self.paste(field, clipboard))
            .count()
    }

    /// Whether the buffer of `field` differs from what [`PawnEditor::open`]
    /// seeded
    pub fn is_touched(&self, field: Field) -> bool {
        self.parse_field(field) != self.opened[field.index()]
    }

    /// Write the touched buffers into `tweak`; untouched fields keep their
    /// current state.
    ///
    /// Per touched field: text that does not parse clears the override; a
    /// value equal to `defaults` clears it; anything else sets it. The
    /// chance is clamped to [0, 1] first. `defaults` must hold the host's
    /// values from before any override was applied.
    pub fn commit(&self, tweak: &mut PawnTweak, defaults: &PawnKindDef) {
        for field in Field::ALL.into_iter().filter(|&f| self.is_touched(f)) {
            match self.parse_field(field) {
                Some(FieldValue::Chance(c)) => {
                    let c = c.clamp(0.0, 1.0);
                    if (c - defaults.tech_hediffs_chance).abs() <= CHANCE_EPSILON {
                        tweak.clear(field);
                    } else {
                        tweak.set(field, FieldValue::Chance(c));
                    }
                }
                Some(FieldValue::Range(r)) => {
                    if FieldValue::Range(r) == defaults.value(field) {
                        tweak.clear(field);
                    } else {
                        tweak.set(field, FieldValue::Range(r));
                    }
                }
                Some(FieldValue::Tags(t)) => {
                    let default = defaults.tags(field).unwrap_or_default();
                    if tags_equal(t.as_slice(), default) {
                        tweak.clear(field);
                    } else {
                        tweak.set(field, FieldValue::Tags(t));
                    }
                }
                None => tweak.clear(field),
            }
        }
    }
}
