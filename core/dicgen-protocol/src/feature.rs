use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Text field of a feature vector. Static tables borrow, materialized rows own.
pub type Text = Cow<'static, str>;

/// Number of positional fields in an IPADIC-style user dictionary row.
pub const FIELD_COUNT: usize = 15;

/// Field separator of the dictionary CSV. Fields are never quoted.
pub const DELIMITER: char = ',';

/// Positional indices of the row schema.
pub mod field {
    pub const SURFACE: usize = 0;
    pub const LEFT_ID: usize = 1;
    pub const RIGHT_ID: usize = 2;
    pub const COST: usize = 3;
    pub const POS_MAJOR: usize = 4;
    pub const CONJ_TYPE: usize = 8;
    pub const CONJ_FORM: usize = 9;
    pub const BASE: usize = 10;
    pub const READING: usize = 11;
    pub const PRONUNCIATION: usize = 12;
    pub const EXTRA: usize = 13;
}

/// One dictionary entry as the analyzer sees it (15 fields).
///
/// Conjugation tables hold these as templates: only the surface, base form,
/// reading, pronunciation and cost are rewritten when a row is produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct FeatureVector {
    pub surface: Text,
    pub left_id: u16,
    pub right_id: u16,
    pub cost: i32,
    /// Major / minor / sub / sub-sub category.
    pub pos: [Text; 4],
    pub conj_type: Text,
    pub conj_form: Text,
    pub base: Text,
    pub reading: Text,
    pub pronunciation: Text,
    pub extra: [Text; 2],
}

impl FeatureVector {
    /// Builds a template with empty surface and reading fields.
    pub const fn template(
        left_id: u16,
        right_id: u16,
        pos: [&'static str; 4],
        conj_type: &'static str,
        conj_form: &'static str,
    ) -> Self {
        Self {
            surface: Cow::Borrowed(""),
            left_id,
            right_id,
            cost: 0,
            pos: [
                Cow::Borrowed(pos[0]),
                Cow::Borrowed(pos[1]),
                Cow::Borrowed(pos[2]),
                Cow::Borrowed(pos[3]),
            ],
            conj_type: Cow::Borrowed(conj_type),
            conj_form: Cow::Borrowed(conj_form),
            base: Cow::Borrowed(""),
            reading: Cow::Borrowed(""),
            pronunciation: Cow::Borrowed(""),
            extra: [Cow::Borrowed(""), Cow::Borrowed("")],
        }
    }

    /// All fields in schema order, stringified.
    pub fn fields(&self) -> [Cow<'_, str>; FIELD_COUNT] {
        [
            Cow::Borrowed(self.surface.as_ref()),
            Cow::Owned(self.left_id.to_string()),
            Cow::Owned(self.right_id.to_string()),
            Cow::Owned(self.cost.to_string()),
            Cow::Borrowed(self.pos[0].as_ref()),
            Cow::Borrowed(self.pos[1].as_ref()),
            Cow::Borrowed(self.pos[2].as_ref()),
            Cow::Borrowed(self.pos[3].as_ref()),
            Cow::Borrowed(self.conj_type.as_ref()),
            Cow::Borrowed(self.conj_form.as_ref()),
            Cow::Borrowed(self.base.as_ref()),
            Cow::Borrowed(self.reading.as_ref()),
            Cow::Borrowed(self.pronunciation.as_ref()),
            Cow::Borrowed(self.extra[0].as_ref()),
            Cow::Borrowed(self.extra[1].as_ref()),
        ]
    }
}

/// A materialized feature vector, optionally tagged with a generator marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct DictionaryRow {
    pub features: FeatureVector,
    pub marker: Option<Text>,
}

impl DictionaryRow {
    /// Copies `template` and fills in the per-row fields. The template itself
    /// is left untouched.
    pub fn materialize(template: &FeatureVector, term: &str, lemma: &str, reading: &str) -> Self {
        let mut features = template.clone();
        features.surface = Cow::Owned(term.to_string());
        features.base = Cow::Owned(lemma.to_string());
        features.cost = 0;
        features.reading = Cow::Owned(reading.to_string());
        features.pronunciation = Cow::Owned(reading.to_string());

        Self {
            features,
            marker: None,
        }
    }

    /// Appends `marker` as a 16th field unless it is already the last one.
    pub fn with_marker(mut self, marker: &str) -> Self {
        if self.last_field() != marker {
            self.marker = Some(Cow::Owned(marker.to_string()));
        }
        self
    }

    fn last_field(&self) -> &str {
        match &self.marker {
            Some(m) => m.as_ref(),
            None => self.features.extra[1].as_ref(),
        }
    }

    /// 15, or 16 when a marker is present.
    pub fn arity(&self) -> usize {
        FIELD_COUNT + usize::from(self.marker.is_some())
    }

    pub fn to_line(&self) -> String {
        let mut fields: Vec<Cow<'_, str>> = self.features.fields().into_iter().collect();
        if let Some(marker) = &self.marker {
            fields.push(Cow::Borrowed(marker.as_ref()));
        }

        let mut line = String::new();
        for (i, f) in fields.iter().enumerate() {
            if i > 0 {
                line.push(DELIMITER);
            }
            line.push_str(f);
        }
        line
    }

    /// Parses a line previously produced by [`DictionaryRow::to_line`].
    pub fn parse(line: &str) -> Result<Self, RowParseError> {
        let parts: Vec<&str> = line.split(DELIMITER).collect();
        if parts.len() != FIELD_COUNT && parts.len() != FIELD_COUNT + 1 {
            return Err(RowParseError::Arity(parts.len()));
        }

        let owned = |i: usize| -> Text { Cow::Owned(parts[i].to_string()) };
        let number = |i: usize| -> Result<i64, RowParseError> {
            parts[i]
                .parse::<i64>()
                .map_err(|_| RowParseError::Number { index: i, value: parts[i].to_string() })
        };
        let id = |i: usize| -> Result<u16, RowParseError> {
            u16::try_from(number(i)?)
                .map_err(|_| RowParseError::Number { index: i, value: parts[i].to_string() })
        };

        let features = FeatureVector {
            surface: owned(field::SURFACE),
            left_id: id(field::LEFT_ID)?,
            right_id: id(field::RIGHT_ID)?,
            cost: i32::try_from(number(field::COST)?).map_err(|_| RowParseError::Number {
                index: field::COST,
                value: parts[field::COST].to_string(),
            })?,
            pos: [
                owned(field::POS_MAJOR),
                owned(field::POS_MAJOR + 1),
                owned(field::POS_MAJOR + 2),
                owned(field::POS_MAJOR + 3),
            ],
            conj_type: owned(field::CONJ_TYPE),
            conj_form: owned(field::CONJ_FORM),
            base: owned(field::BASE),
            reading: owned(field::READING),
            pronunciation: owned(field::PRONUNCIATION),
            extra: [owned(field::EXTRA), owned(field::EXTRA + 1)],
        };

        Ok(Self {
            features,
            marker: parts.get(FIELD_COUNT).map(|m| Cow::Owned(m.to_string())),
        })
    }
}

impl fmt::Display for DictionaryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowParseError {
    Arity(usize),
    Number { index: usize, value: String },
}

impl fmt::Display for RowParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowParseError::Arity(n) => {
                write!(f, "expected {} or {} fields, found {}", FIELD_COUNT, FIELD_COUNT + 1, n)
            }
            RowParseError::Number { index, value } => {
                write!(f, "field {} is not a valid number: {:?}", index, value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RowParseError {}
