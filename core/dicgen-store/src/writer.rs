use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use dicgen_protocol::{DictionaryRow, FeatureVector};

use crate::error::{Result, StoreError};
use crate::resolve::DicDirResolver;

/// File the generator appends to, inside the resolved dictionary directory.
pub const DEFAULT_FILENAME: &str = "manual.csv";

/// Trailing field tagging rows as generator-produced.
pub const DEFAULT_MARKER: &str = "MA";

/// Destination for materialized rows.
pub trait RowSink {
    /// Materializes `template` for one surface form, records it and returns
    /// the serialized line (without terminator).
    fn write(&mut self, template: &FeatureVector, term: &str, lemma: &str, reading: &str) -> Result<String>;
}

fn render(template: &FeatureVector, term: &str, lemma: &str, reading: &str, marker: &str) -> String {
    DictionaryRow::materialize(template, term, lemma, reading)
        .with_marker(marker)
        .to_line()
}

/// The shared, append-only dictionary CSV.
///
/// The path is resolved anew for every [`DictionaryStore::open`]; nothing is
/// cached between sessions.
#[derive(Debug, Clone)]
pub struct DictionaryStore<R> {
    resolver: R,
    filename: PathBuf,
    marker: String,
}

impl<R: DicDirResolver> DictionaryStore<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            filename: PathBuf::from(DEFAULT_FILENAME),
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Resolves the dictionary path.
    pub fn path(&self) -> Result<PathBuf> {
        Ok(self.resolver.resolve()?.join(&self.filename))
    }

    /// Resolves the path and opens the file for appending, creating it if
    /// absent. The handle is released when the session is dropped.
    pub fn open(&self) -> Result<AppendSession> {
        let path = self.path()?;
        AppendSession::open(path, self.marker.clone())
    }
}

/// An open append handle on the dictionary file.
#[derive(Debug)]
pub struct AppendSession {
    file: File,
    path: PathBuf,
    marker: String,
    written: usize,
}

impl AppendSession {
    pub fn open(path: PathBuf, marker: String) -> Result<Self> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        log::debug!("opened {} for appending", path.display());

        Ok(Self {
            file,
            path,
            marker,
            written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows appended through this session.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl RowSink for AppendSession {
    fn write(&mut self, template: &FeatureVector, term: &str, lemma: &str, reading: &str) -> Result<String> {
        let line = render(template, term, lemma, reading, &self.marker);

        // One write per row, so a failure part-way leaves whole lines behind.
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(&line);
        buf.push('\n');
        self.file
            .write_all(buf.as_bytes())
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        self.written += 1;
        Ok(line)
    }
}

impl Drop for AppendSession {
    fn drop(&mut self) {
        if let Err(e) = self.file.flush() {
            log::error!("failed to flush {}: {}", self.path.display(), e);
        }
    }
}

/// Collects rows without touching the dictionary file.
#[derive(Debug, Clone, Default)]
pub struct PreviewSink {
    marker: String,
    lines: Vec<String>,
}

impl PreviewSink {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl RowSink for PreviewSink {
    fn write(&mut self, template: &FeatureVector, term: &str, lemma: &str, reading: &str) -> Result<String> {
        let line = render(template, term, lemma, reading, &self.marker);
        self.lines.push(line.clone());
        Ok(line)
    }
}
