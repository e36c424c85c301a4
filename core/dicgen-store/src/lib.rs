//! Append-only access to the MeCab user dictionary CSV.

pub mod error;
pub mod resolve;
pub mod writer;

pub use error::{Result, StoreError};
pub use resolve::{DicDirResolver, FixedDicDir, MecabConfig};
pub use writer::{AppendSession, DictionaryStore, PreviewSink, RowSink, DEFAULT_FILENAME, DEFAULT_MARKER};
