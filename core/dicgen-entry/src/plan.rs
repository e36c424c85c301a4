use dicgen_morph::{inflect_shii, inflect_verb, Classification, RuleSet, SurfaceForm, SHII_LABEL, VERB_LABEL};

use crate::request::EntryRequest;

/// How the confirmation message lists written rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// `Added <row>\n` per row (inflected entries).
    PerRow,
    /// A single `Added <row>` without terminator (fixed categories).
    Single,
}

/// Why a request produced no rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unhandled {
    #[error("no rule for category `{0}`")]
    UnknownCategory(String),

    #[error("verb `{0}` matches no known conjugation class")]
    UnclassifiedVerb(String),
}

/// The rows a request will produce, computed before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPlan<'r> {
    pub style: MessageStyle,
    pub forms: Vec<SurfaceForm<'r>>,
    pub unhandled: Option<Unhandled>,
}

impl EntryPlan<'_> {
    fn unhandled(style: MessageStyle, reason: Unhandled) -> Self {
        Self {
            style,
            forms: Vec::new(),
            unhandled: Some(reason),
        }
    }
}

/// Routes `req.pos` to an inflection table or a fixed template.
pub fn plan<'r>(rules: &'r RuleSet, req: &EntryRequest) -> EntryPlan<'r> {
    match req.pos.as_str() {
        VERB_LABEL => {
            let inflection = inflect_verb(rules, &req.lemma, &req.reading);
            if inflection.class == Classification::NotAVerb {
                return EntryPlan::unhandled(MessageStyle::PerRow, Unhandled::UnclassifiedVerb(req.lemma.clone()));
            }
            EntryPlan {
                style: MessageStyle::PerRow,
                forms: inflection.forms,
                unhandled: None,
            }
        }
        SHII_LABEL => EntryPlan {
            style: MessageStyle::PerRow,
            forms: inflect_shii(rules, &req.term, &req.reading),
            unhandled: None,
        },
        label => match rules.fixed_template(label) {
            Some(template) => EntryPlan {
                style: MessageStyle::Single,
                forms: vec![SurfaceForm {
                    term: req.term.clone(),
                    reading: req.reading.clone(),
                    template,
                }],
                unhandled: None,
            },
            None => EntryPlan::unhandled(MessageStyle::Single, Unhandled::UnknownCategory(label.to_string())),
        },
    }
}
