use alloc::borrow::Cow;
use alloc::vec::Vec;
use crate::feature::{FeatureVector, Text};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One inflected form of a word class: the ending attached to the stem and
/// the template describing that form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct ConjugationRule {
    pub suffix: Text,
    pub template: FeatureVector,
}

impl ConjugationRule {
    pub fn new(suffix: impl Into<Text>, template: FeatureVector) -> Self {
        Self {
            suffix: suffix.into(),
            template,
        }
    }
}

/// Every form a conjugation class produces, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct ConjugationTable {
    pub name: Text,
    pub rules: Vec<ConjugationRule>,
}

impl ConjugationTable {
    pub fn new(name: impl Into<Text>, rules: Vec<ConjugationRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Builds a table from static `(suffix, template)` pairs.
    pub fn from_pairs(name: &'static str, pairs: &[(&'static str, FeatureVector)]) -> Self {
        let rules = pairs
            .iter()
            .map(|(suffix, template)| ConjugationRule::new(Cow::Borrowed(*suffix), template.clone()))
            .collect();
        Self::new(Cow::Borrowed(name), rules)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ConjugationRule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a ConjugationTable {
    type Item = &'a ConjugationRule;
    type IntoIter = core::slice::Iter<'a, ConjugationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
