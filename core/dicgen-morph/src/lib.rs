//! Japanese inflection for user-dictionary entries: rule tables, lemma
//! classification and surface-form generation.

pub mod classify;
pub mod error;
pub mod generate;
pub mod kana;
pub mod rules;
pub mod tables;

pub use classify::{classify, Classification, EuphonicVariant};
pub use error::TableError;
pub use generate::{attach, inflect_shii, inflect_verb, Inflection, SurfaceForm};
pub use rules::RuleSet;
pub use tables::{SHII_LABEL, VERB_LABEL};
