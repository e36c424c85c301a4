use std::path::PathBuf;

use dicgen_morph::TableError;
use dicgen_store::StoreError;

use crate::plan::Unhandled;
use crate::request::ValidationError;

pub type Result<T, E = EntryError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("invalid entry: {0}")]
    Invalid(#[from] ValidationError),

    /// Only returned when the dispatcher runs in strict mode.
    #[error("nothing written: {0}")]
    Unhandled(#[from] Unhandled),

    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
