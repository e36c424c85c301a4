use dicgen_morph::kana;
use dicgen_protocol::DELIMITER;

/// One "add term" request as entered by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRequest {
    /// Coarse part-of-speech label, e.g. `名詞,固有名詞`, `動詞` or `〜しい`.
    pub pos: String,
    pub term: String,
    pub lemma: String,
    /// Katakana reading.
    pub reading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{field} must not contain a comma: {value}")]
    Delimiter { field: &'static str, value: String },

    #[error("reading must be katakana: {0}")]
    ReadingNotKatakana(String),

    #[error("term contains a symbol: {0}")]
    TermSymbol(String),
}

impl EntryRequest {
    pub fn new(
        pos: impl Into<String>,
        term: impl Into<String>,
        lemma: impl Into<String>,
        reading: impl Into<String>,
    ) -> Self {
        Self {
            pos: pos.into(),
            term: term.into(),
            lemma: lemma.into(),
            reading: reading.into(),
        }
    }

    /// Rejects input that would produce a malformed or unusable row.
    ///
    /// The dispatcher itself does not call this; the row format has no
    /// escaping, so callers accepting free-form input should.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("pos", &self.pos),
            ("term", &self.term),
            ("lemma", &self.lemma),
            ("reading", &self.reading),
        ] {
            if value.is_empty() {
                return Err(ValidationError::Empty(field));
            }
        }

        // Labels such as `名詞,一般名詞` legitimately contain the delimiter.
        for (field, value) in [("term", &self.term), ("lemma", &self.lemma), ("reading", &self.reading)] {
            if value.contains(DELIMITER) {
                return Err(ValidationError::Delimiter {
                    field,
                    value: value.clone(),
                });
            }
        }

        if !kana::is_katakana_reading(&self.reading) {
            return Err(ValidationError::ReadingNotKatakana(self.reading.clone()));
        }
        if kana::contains_symbol(&self.term) {
            return Err(ValidationError::TermSymbol(self.term.clone()));
        }
        Ok(())
    }
}
