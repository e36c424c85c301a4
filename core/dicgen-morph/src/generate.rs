use dicgen_protocol::{ConjugationTable, FeatureVector};

use crate::classify::{classify, Classification};
use crate::kana::hira_to_kata;
use crate::rules::RuleSet;

/// One inflected realization, ready to be materialized against its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceForm<'r> {
    pub term: String,
    pub reading: String,
    pub template: &'r FeatureVector,
}

/// Forms produced for a verb lemma, along with the class that selected them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inflection<'r> {
    pub class: Classification,
    pub forms: Vec<SurfaceForm<'r>>,
}

/// Drops the last character (not byte) of `s`.
fn strip_last(s: &str) -> &str {
    s.char_indices().last().map_or(s, |(i, _)| &s[..i])
}

/// Attaches every rule of `table` to the given stems.
pub fn attach<'r>(table: &'r ConjugationTable, stem: &str, reading_stem: &str) -> Vec<SurfaceForm<'r>> {
    table
        .iter()
        .map(|rule| {
            let form = SurfaceForm {
                term: format!("{}{}", stem, rule.suffix),
                reading: format!("{}{}", reading_stem, hira_to_kata(&rule.suffix)),
                template: &rule.template,
            };
            log::debug!("{}: {} / {} ({})", table.name, form.term, form.reading, rule.template.conj_form);
            form
        })
        .collect()
}

/// Classifies `lemma` and expands it through the matching verb table.
///
/// Both verb classes replace the final mora: the stem is the lemma and the
/// reading each minus their last character. A lemma of neither class yields
/// no forms.
pub fn inflect_verb<'r>(rules: &'r RuleSet, lemma: &str, reading: &str) -> Inflection<'r> {
    let class = classify(lemma);
    let table = match class {
        Classification::EuphonicVerb(variant) => rules.euphonic(variant),
        Classification::CompoundMaVerb => rules.compound_ma(),
        Classification::NotAVerb => {
            return Inflection {
                class,
                forms: Vec::new(),
            }
        }
    };

    Inflection {
        class,
        forms: attach(table, strip_last(lemma), strip_last(reading)),
    }
}

/// Brings a 〜しい adjective to its し-final stem.
///
/// `full` is the complete ending (しい / シイ), `linker` the stem-final unit
/// (し / シ).
fn shii_stem(word: &str, full: &str, linker: &str) -> String {
    if word.ends_with(full) {
        strip_last(word).to_string()
    } else if word.ends_with(linker) {
        word.to_string()
    } else {
        format!("{}{}", word, linker)
    }
}

/// Expands a 〜しい adjective. Accepts the full form (怪しい), the stem (怪し)
/// or the bare root (怪), and likewise for the reading.
pub fn inflect_shii<'r>(rules: &'r RuleSet, term: &str, reading: &str) -> Vec<SurfaceForm<'r>> {
    let stem = shii_stem(term, "しい", "し");
    let reading_stem = shii_stem(reading, "シイ", "シ");
    attach(rules.shii(), &stem, &reading_stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::EuphonicVariant;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn rules() -> RuleSet {
        RuleSet::builtin().unwrap()
    }

    fn terms(forms: &[SurfaceForm<'_>]) -> Vec<String> {
        forms.iter().map(|f| f.term.clone()).collect()
    }

    #[test]
    fn test_strip_last() {
        assert_eq!(strip_last("言う"), "言");
        assert_eq!(strip_last("う"), "");
        assert_eq!(strip_last(""), "");
    }

    #[test]
    fn test_euphonic_u() {
        let rules = rules();
        let inflection = inflect_verb(&rules, "言う", "イウ");

        assert_eq!(inflection.class, Classification::EuphonicVerb(EuphonicVariant::U));
        assert_eq!(
            terms(&inflection.forms),
            ["言え", "言う", "言お", "言わ", "言え", "言っ", "言い"]
        );
        let readings: Vec<&str> = inflection.forms.iter().map(|f| f.reading.as_str()).collect();
        assert_eq!(readings, ["イエ", "イウ", "イオ", "イワ", "イエ", "イッ", "イイ"]);
    }

    #[test]
    fn test_euphonic_ru() {
        let rules = rules();
        let inflection = inflect_verb(&rules, "ググる", "ググル");

        assert_eq!(
            terms(&inflection.forms),
            ["ググれ", "ググる", "ググろ", "ググら", "ググれ", "ググっ", "ググり"]
        );
        assert_eq!(inflection.forms[5].reading, "ググッ");
        assert_eq!(inflection.forms[5].template.conj_form, "連用タ接続");
    }

    #[test]
    fn test_compound_ma() {
        let rules = rules();
        let inflection = inflect_verb(&rules, "書き込む", "カキコム");

        assert_eq!(inflection.class, Classification::CompoundMaVerb);
        assert_eq!(inflection.forms.len(), rules.compound_ma().len());
        for (form, rule) in inflection.forms.iter().zip(rules.compound_ma()) {
            assert_eq!(form.term, format!("書き込{}", rule.suffix));
            assert_eq!(form.reading, format!("カキコ{}", hira_to_kata(&rule.suffix)));
        }
        assert_eq!(inflection.forms[1].term, "書き込みゃ");
        assert_eq!(inflection.forms[1].reading, "カキコミャ");
    }

    #[test]
    fn test_not_a_verb_yields_nothing() {
        let rules = rules();
        let inflection = inflect_verb(&rules, "書く", "カク");
        assert_eq!(inflection.class, Classification::NotAVerb);
        assert!(inflection.forms.is_empty());
    }

    #[test]
    fn test_shii_normalization() {
        let rules = rules();
        for (term, reading) in [("怪しい", "アヤシイ"), ("怪し", "アヤシ"), ("怪", "アヤ")] {
            let forms = inflect_shii(&rules, term, reading);
            assert_eq!(forms.len(), 16);
            assert_eq!(forms[0].term, "怪しい");
            assert_eq!(forms[0].reading, "アヤシイ");
            assert_eq!(forms[1].term, "怪し");
            assert_eq!(forms[13].term, "怪しけりゃ");
            assert_eq!(forms[13].reading, "アヤシケリャ");
        }
    }

    #[test]
    fn test_shii_reading_normalized_independently() {
        let rules = rules();
        let forms = inflect_shii(&rules, "怪しい", "アヤ");
        assert_eq!(forms[2].term, "怪しから");
        assert_eq!(forms[2].reading, "アヤシカラ");
    }

    #[test]
    fn test_generation_is_restartable() {
        let rules = rules();
        let first = inflect_verb(&rules, "言う", "イウ");
        let second = inflect_verb(&rules, "言う", "イウ");
        assert_eq!(first, second);
    }

    #[test]
    fn test_forms_distinct_within_table() {
        let rules = rules();
        let all = [
            inflect_verb(&rules, "言う", "イウ").forms,
            inflect_verb(&rules, "ググる", "ググル").forms,
            inflect_verb(&rules, "書き込む", "カキコム").forms,
            inflect_shii(&rules, "怪しい", "アヤシイ"),
        ];
        for forms in all.iter() {
            let keys: HashSet<(&str, &str)> = forms
                .iter()
                .map(|f| (f.term.as_str(), f.template.conj_form.as_ref()))
                .collect();
            assert_eq!(keys.len(), forms.len());
        }
    }

    proptest! {
        #[test]
        fn test_verb_row_count_matches_table(stem in "[一-龥]{1,3}[あ-ん]{0,2}", u in any::<bool>()) {
            let rules = rules();
            let (lemma, variant) = if u {
                (format!("{}う", stem), EuphonicVariant::U)
            } else {
                (format!("{}る", stem), EuphonicVariant::Ru)
            };
            let reading = hira_to_kata(&lemma);

            let inflection = inflect_verb(&rules, &lemma, &reading);
            prop_assert_eq!(inflection.class, Classification::EuphonicVerb(variant));
            prop_assert_eq!(inflection.forms.len(), rules.euphonic(variant).len());
            for form in &inflection.forms {
                prop_assert!(form.term.starts_with(&stem));
                prop_assert_eq!(form.term.chars().count(), lemma.chars().count());
            }
        }

        #[test]
        fn test_shii_row_count_is_stable(root in "[一-龥]{1,2}") {
            let rules = rules();
            let forms = inflect_shii(&rules, &format!("{}しい", root), "アヤシイ");
            prop_assert_eq!(forms.len(), rules.shii().len());
            for form in &forms {
                let expected_prefix = format!("{}し", root);
                prop_assert!(form.term.starts_with(&expected_prefix));
            }
        }
    }
}
