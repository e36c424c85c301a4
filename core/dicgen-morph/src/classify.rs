/// Which ending selects the euphonic suffix list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EuphonicVariant {
    /// Lemma ends in う.
    U,
    /// Lemma ends in る.
    Ru,
}

impl EuphonicVariant {
    pub fn trigger(self) -> char {
        match self {
            EuphonicVariant::U => 'う',
            EuphonicVariant::Ru => 'る',
        }
    }
}

/// The conjugation class a verb lemma falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    EuphonicVerb(EuphonicVariant),
    /// Compound verb in 〜込む / 〜こむ.
    CompoundMaVerb,
    NotAVerb,
}

const COMPOUND_MA_ENDINGS: [&str; 2] = ["込む", "こむ"];

/// Classifies a verb lemma by its ending.
///
/// The euphonic test runs first, so a lemma is never reported as both.
pub fn classify(lemma: &str) -> Classification {
    for variant in [EuphonicVariant::U, EuphonicVariant::Ru] {
        if lemma.ends_with(variant.trigger()) {
            return Classification::EuphonicVerb(variant);
        }
    }

    if COMPOUND_MA_ENDINGS.iter().any(|ending| lemma.ends_with(ending)) {
        Classification::CompoundMaVerb
    } else {
        Classification::NotAVerb
    }
}
