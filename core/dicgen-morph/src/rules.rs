use std::borrow::Cow;
use std::collections::HashSet;

use dicgen_protocol::{ConjugationRule, ConjugationTable, FeatureVector, Text};

use crate::classify::EuphonicVariant;
use crate::error::TableError;
use crate::tables;

/// The validated rule tables, built once at start-up and shared read-only.
#[derive(Debug, Clone)]
pub struct RuleSet {
    wa_onbin_u: ConjugationTable,
    wa_onbin_ru: ConjugationTable,
    godan_ma: ConjugationTable,
    shii: ConjugationTable,
    fixed: Vec<(Text, FeatureVector)>,
}

impl RuleSet {
    /// The built-in IPADIC tables.
    pub fn builtin() -> Result<Self, TableError> {
        Self::new(
            &tables::GODAN_WA_ONBIN,
            tables::WA_ONBIN_U_SUFFIXES,
            tables::WA_ONBIN_RU_SUFFIXES,
            ConjugationTable::from_pairs("godan_ma", &tables::GODAN_MA),
            ConjugationTable::from_pairs("shii", &tables::SHII),
            tables::FIXED_CATEGORIES
                .iter()
                .map(|(label, template)| (Cow::Borrowed(*label), template.clone()))
                .collect(),
        )
    }

    /// Validates and assembles a rule set.
    ///
    /// The euphonic templates are zipped one-to-one with the characters of
    /// each suffix string; a length mismatch is rejected rather than truncated.
    pub fn new(
        euphonic_templates: &[FeatureVector],
        u_suffixes: &str,
        ru_suffixes: &str,
        godan_ma: ConjugationTable,
        shii: ConjugationTable,
        fixed: Vec<(Text, FeatureVector)>,
    ) -> Result<Self, TableError> {
        let wa_onbin_u = zip_suffixes("wa_onbin_u", euphonic_templates, u_suffixes)?;
        let wa_onbin_ru = zip_suffixes("wa_onbin_ru", euphonic_templates, ru_suffixes)?;

        for table in [&godan_ma, &shii] {
            if table.is_empty() {
                return Err(TableError::Empty(table.name.to_string()));
            }
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for (label, _) in &fixed {
            if label == tables::VERB_LABEL || label == tables::SHII_LABEL {
                return Err(TableError::ReservedLabel(label.to_string()));
            }
            if !seen.insert(label.as_ref()) {
                return Err(TableError::DuplicateLabel(label.to_string()));
            }
        }

        Ok(Self {
            wa_onbin_u,
            wa_onbin_ru,
            godan_ma,
            shii,
            fixed,
        })
    }

    pub fn euphonic(&self, variant: EuphonicVariant) -> &ConjugationTable {
        match variant {
            EuphonicVariant::U => &self.wa_onbin_u,
            EuphonicVariant::Ru => &self.wa_onbin_ru,
        }
    }

    pub fn compound_ma(&self) -> &ConjugationTable {
        &self.godan_ma
    }

    pub fn shii(&self) -> &ConjugationTable {
        &self.shii
    }

    /// Exact-match lookup of a non-inflecting category.
    pub fn fixed_template(&self, label: &str) -> Option<&FeatureVector> {
        self.fixed
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, template)| template)
    }

    pub fn fixed_categories(&self) -> impl Iterator<Item = (&str, &FeatureVector)> {
        self.fixed.iter().map(|(l, t)| (l.as_ref(), t))
    }

    /// Every label the dispatcher accepts, fixed categories first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fixed
            .iter()
            .map(|(l, _)| l.as_ref())
            .chain([tables::VERB_LABEL, tables::SHII_LABEL])
    }

    /// All inflecting tables, for inspection.
    pub fn tables(&self) -> [&ConjugationTable; 4] {
        [&self.wa_onbin_u, &self.wa_onbin_ru, &self.godan_ma, &self.shii]
    }
}

fn zip_suffixes(
    name: &'static str,
    templates: &[FeatureVector],
    suffixes: &str,
) -> Result<ConjugationTable, TableError> {
    let chars: Vec<char> = suffixes.chars().collect();
    if chars.len() != templates.len() {
        return Err(TableError::SuffixCountMismatch {
            table: name.to_string(),
            templates: templates.len(),
            suffixes: chars.len(),
        });
    }
    if templates.is_empty() {
        return Err(TableError::Empty(name.to_string()));
    }

    let rules = templates
        .iter()
        .zip(chars)
        .map(|(template, c)| ConjugationRule::new(Cow::Owned(c.to_string()), template.clone()))
        .collect();
    Ok(ConjugationTable::new(name, rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let rules = RuleSet::builtin().expect("built-in tables are consistent");
        assert_eq!(rules.euphonic(EuphonicVariant::U).len(), 7);
        assert_eq!(rules.euphonic(EuphonicVariant::Ru).len(), 7);
        assert_eq!(rules.compound_ma().len(), 8);
        assert_eq!(rules.shii().len(), 16);
        assert_eq!(rules.fixed_categories().count(), 25);
        assert_eq!(rules.labels().count(), 27);
    }

    #[test]
    fn test_euphonic_suffixes_follow_template_order() {
        let rules = RuleSet::builtin().unwrap();
        let table = rules.euphonic(EuphonicVariant::Ru);
        let suffixes: String = table.iter().map(|r| &*r.suffix).collect();
        assert_eq!(suffixes, "れるろられっり");
        assert_eq!(table.rules[0].template.conj_form, "仮定形");
        assert_eq!(table.rules[6].template.conj_form, "連用形");
    }

    #[test]
    fn test_suffix_mismatch_fails_fast() {
        let err = RuleSet::new(
            &tables::GODAN_WA_ONBIN,
            "えうお",
            tables::WA_ONBIN_RU_SUFFIXES,
            ConjugationTable::from_pairs("godan_ma", &tables::GODAN_MA),
            ConjugationTable::from_pairs("shii", &tables::SHII),
            Vec::new(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            TableError::SuffixCountMismatch {
                table: "wa_onbin_u".to_string(),
                templates: 7,
                suffixes: 3,
            }
        );
    }

    #[test]
    fn test_duplicate_and_reserved_labels() {
        let noun = tables::FIXED_CATEGORIES[0].1.clone();
        let build = |fixed: Vec<(Text, FeatureVector)>| {
            RuleSet::new(
                &tables::GODAN_WA_ONBIN,
                tables::WA_ONBIN_U_SUFFIXES,
                tables::WA_ONBIN_RU_SUFFIXES,
                ConjugationTable::from_pairs("godan_ma", &tables::GODAN_MA),
                ConjugationTable::from_pairs("shii", &tables::SHII),
                fixed,
            )
        };

        let dup = build(vec![("名詞".into(), noun.clone()), ("名詞".into(), noun.clone())]);
        assert_eq!(dup.unwrap_err(), TableError::DuplicateLabel("名詞".to_string()));

        let reserved = build(vec![("動詞".into(), noun)]);
        assert_eq!(reserved.unwrap_err(), TableError::ReservedLabel("動詞".to_string()));
    }

    #[test]
    fn test_fixed_lookup_is_exact() {
        let rules = RuleSet::builtin().unwrap();
        let template = rules.fixed_template("名詞,固有名詞").expect("label exists");
        assert_eq!(template.left_id, 1288);
        assert!(rules.fixed_template("名詞").is_none());
        assert!(rules.fixed_template("名詞,固有名詞 ").is_none());
    }
}
