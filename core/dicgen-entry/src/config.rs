use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dicgen_morph::RuleSet;
use dicgen_store::{DicDirResolver, DictionaryStore, FixedDicDir, MecabConfig, DEFAULT_FILENAME, DEFAULT_MARKER};

use crate::dispatch::EntryDispatcher;
use crate::error::{EntryError, Result};

/// Where and how rows are written. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DicgenConfig {
    /// Fixed dictionary directory. When unset, `mecab_config` is asked.
    pub dicdir: Option<PathBuf>,
    pub mecab_config: String,
    /// Appended to the `mecab-config --dicdir` output.
    pub subdir: PathBuf,
    pub filename: PathBuf,
    pub marker: String,
    pub strict: bool,
}

impl Default for DicgenConfig {
    fn default() -> Self {
        let mecab = MecabConfig::default();
        Self {
            dicdir: None,
            mecab_config: mecab.program,
            subdir: mecab.subdir,
            filename: PathBuf::from(DEFAULT_FILENAME),
            marker: DEFAULT_MARKER.to_string(),
            strict: false,
        }
    }
}

impl DicgenConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| EntryError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| EntryError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies command-line or environment overrides on top of this config.
    /// `None` and `false` leave the loaded value untouched.
    pub fn with_overrides(mut self, dicdir: Option<PathBuf>, strict: bool) -> Self {
        if let Some(dir) = dicdir {
            self.dicdir = Some(dir);
        }
        self.strict |= strict;
        self
    }

    pub fn resolver(&self) -> Box<dyn DicDirResolver> {
        match &self.dicdir {
            Some(dir) => Box::new(FixedDicDir::new(dir.clone())),
            None => Box::new(MecabConfig {
                program: self.mecab_config.clone(),
                subdir: self.subdir.clone(),
            }),
        }
    }

    pub fn store(&self) -> DictionaryStore<Box<dyn DicDirResolver>> {
        DictionaryStore::new(self.resolver())
            .with_filename(self.filename.clone())
            .with_marker(self.marker.clone())
    }

    pub fn dispatcher(&self, rules: RuleSet) -> EntryDispatcher<Box<dyn DicDirResolver>> {
        EntryDispatcher::new(rules, self.store()).strict(self.strict)
    }
}
