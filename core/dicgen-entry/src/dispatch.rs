use std::fmt;

use dicgen_morph::RuleSet;
use dicgen_store::{DicDirResolver, DictionaryStore, PreviewSink, RowSink, StoreError};

use crate::error::{EntryError, Result};
use crate::plan::{plan, EntryPlan, MessageStyle, Unhandled};
use crate::request::EntryRequest;

/// What an `add_term` call wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReport {
    pub style: MessageStyle,
    /// Serialized rows in write order.
    pub lines: Vec<String>,
    pub unhandled: Option<Unhandled>,
}

impl AddReport {
    /// Human-readable confirmation; empty when nothing was written.
    pub fn message(&self) -> String {
        match self.style {
            MessageStyle::PerRow => self.lines.iter().map(|l| format!("Added {}\n", l)).collect(),
            MessageStyle::Single => self
                .lines
                .first()
                .map(|l| format!("Added {}", l))
                .unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for AddReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Writes every planned form to `sink`, stopping at the first failure.
/// Rows written before a failure stay written.
pub fn apply<S: RowSink>(plan: &EntryPlan<'_>, lemma: &str, sink: &mut S) -> Result<AddReport, StoreError> {
    let mut lines = Vec::with_capacity(plan.forms.len());
    for form in &plan.forms {
        lines.push(sink.write(form.template, &form.term, lemma, &form.reading)?);
    }

    Ok(AddReport {
        style: plan.style,
        lines,
        unhandled: plan.unhandled.clone(),
    })
}

/// Top-level "add term" operation over a rule set and a dictionary store.
pub struct EntryDispatcher<R> {
    rules: RuleSet,
    store: DictionaryStore<R>,
    strict: bool,
}

impl<R: DicDirResolver> EntryDispatcher<R> {
    pub fn new(rules: RuleSet, store: DictionaryStore<R>) -> Self {
        Self {
            rules,
            store,
            strict: false,
        }
    }

    /// In strict mode an unhandled request is an error instead of an empty report.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn add_term(&self, pos: &str, term: &str, lemma: &str, reading: &str) -> Result<AddReport> {
        self.add(&EntryRequest::new(pos, term, lemma, reading))
    }

    /// Plans the request and appends its rows in one file session.
    ///
    /// A request that matches nothing neither resolves nor opens the file.
    pub fn add(&self, req: &EntryRequest) -> Result<AddReport> {
        let plan = plan(&self.rules, req);
        if let Some(report) = self.check_unhandled(&plan)? {
            return Ok(report);
        }

        let mut session = self.store.open()?;
        let report = apply(&plan, &req.lemma, &mut session)?;
        log::info!(
            "added {} row(s) for {} [{}] to {}",
            session.written(),
            req.lemma,
            req.pos,
            session.path().display()
        );
        Ok(report)
    }

    /// Same as [`EntryDispatcher::add`] but nothing is written.
    pub fn preview(&self, req: &EntryRequest) -> Result<AddReport> {
        let plan = plan(&self.rules, req);
        if let Some(report) = self.check_unhandled(&plan)? {
            return Ok(report);
        }

        let mut sink = PreviewSink::new(self.store.marker());
        Ok(apply(&plan, &req.lemma, &mut sink)?)
    }

    fn check_unhandled(&self, plan: &EntryPlan<'_>) -> Result<Option<AddReport>> {
        if !plan.forms.is_empty() {
            return Ok(None);
        }
        let reason = match &plan.unhandled {
            Some(reason) => reason.clone(),
            None => return Ok(Some(AddReport { style: plan.style, lines: Vec::new(), unhandled: None })),
        };

        if self.strict {
            return Err(EntryError::Unhandled(reason));
        }
        log::warn!("{}", reason);
        Ok(Some(AddReport {
            style: plan.style,
            lines: Vec::new(),
            unhandled: Some(reason),
        }))
    }
}
