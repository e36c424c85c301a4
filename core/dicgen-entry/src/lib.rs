//! The "add term" operation: route a part-of-speech label to the right
//! inflection table, then append one row per surface form.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod plan;
pub mod request;

pub use config::DicgenConfig;
pub use dispatch::{apply, AddReport, EntryDispatcher};
pub use error::{EntryError, Result};
pub use plan::{plan, EntryPlan, MessageStyle, Unhandled};
pub use request::{EntryRequest, ValidationError};
