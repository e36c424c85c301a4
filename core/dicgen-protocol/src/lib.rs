#![no_std] // Pure data: no I/O happens at this layer

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod feature;
pub mod model;

pub use feature::{field, DictionaryRow, FeatureVector, RowParseError, Text, DELIMITER, FIELD_COUNT};
pub use model::{ConjugationRule, ConjugationTable};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    const NOUN: FeatureVector = FeatureVector::template(1285, 1285, ["名詞", "一般", "*", "*"], "*", "*");

    #[test]
    fn test_materialize_leaves_template_untouched() {
        let row = DictionaryRow::materialize(&NOUN, "ぁゃιぃ", "ぁゃιぃ", "アヤシイ");

        assert_eq!(NOUN.surface, "");
        assert_eq!(NOUN.reading, "");
        assert_eq!(row.features.surface, "ぁゃιぃ");
        assert_eq!(row.features.base, "ぁゃιぃ");
        assert_eq!(row.features.reading, "アヤシイ");
        assert_eq!(row.features.pronunciation, "アヤシイ");
        assert_eq!(row.features.pos, NOUN.pos);
    }

    #[test]
    fn test_materialize_forces_zero_cost() {
        let mut template = NOUN.clone();
        template.cost = 4000;
        let row = DictionaryRow::materialize(&template, "a", "a", "ア");
        assert_eq!(row.features.cost, 0);
    }

    #[test]
    fn test_line_layout() {
        let row = DictionaryRow::materialize(&NOUN, "単語", "単語", "タンゴ").with_marker("MA");
        assert_eq!(row.to_line(), "単語,1285,1285,0,名詞,一般,*,*,*,*,単語,タンゴ,タンゴ,,,MA");
        assert_eq!(row.arity(), 16);
        assert_eq!(row.to_string(), row.to_line());
    }

    #[test]
    fn test_marker_is_idempotent() {
        let row = DictionaryRow::materialize(&NOUN, "x", "x", "エックス")
            .with_marker("MA")
            .with_marker("MA");
        assert_eq!(row.arity(), 16);
        assert_eq!(row.to_line().matches("MA").count(), 1);

        // A template whose last field already carries the marker is not tagged twice.
        let mut tagged = NOUN.clone();
        tagged.extra[1] = "MA".into();
        let row = DictionaryRow::materialize(&tagged, "x", "x", "エックス").with_marker("MA");
        assert_eq!(row.arity(), FIELD_COUNT);
    }

    #[test]
    fn test_round_trip_field_for_field() {
        let row = DictionaryRow::materialize(&NOUN, "単語", "単語", "タンゴ").with_marker("MA");
        let line = row.to_line();

        let split: Vec<&str> = line.split(DELIMITER).collect();
        assert_eq!(split.len(), 16);
        for (a, b) in split.iter().zip(row.features.fields().iter()) {
            assert_eq!(*a, b.as_ref());
        }

        let parsed = DictionaryRow::parse(&line).expect("row should parse");
        assert_eq!(parsed, row);

        let unmarked = DictionaryRow::materialize(&NOUN, "単語", "単語", "タンゴ");
        let parsed = DictionaryRow::parse(&unmarked.to_line()).expect("row should parse");
        assert_eq!(parsed.arity(), FIELD_COUNT);
        assert_eq!(parsed, unmarked);
    }

    #[test]
    fn test_parse_rejects_bad_rows() {
        assert_eq!(DictionaryRow::parse("a,b,c"), Err(RowParseError::Arity(3)));

        let bad_id = "x,left,1,0,名詞,一般,*,*,*,*,x,エ,エ,,";
        assert!(matches!(
            DictionaryRow::parse(bad_id),
            Err(RowParseError::Number { index: 1, .. })
        ));
    }

    #[test]
    fn test_table_from_pairs() {
        let pairs = [("む", NOUN.clone()), ("め", NOUN.clone())];
        let table = ConjugationTable::from_pairs("test", &pairs);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        let suffixes: Vec<&str> = table.iter().map(|r| r.suffix.as_ref()).collect();
        assert_eq!(suffixes, ["む", "め"]);
    }
}
