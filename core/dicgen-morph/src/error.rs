/// Rule tables that cannot be used as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("table `{table}` has {templates} templates but {suffixes} suffix characters")]
    SuffixCountMismatch {
        table: String,
        templates: usize,
        suffixes: usize,
    },

    #[error("table `{0}` is empty")]
    Empty(String),

    #[error("category label `{0}` is defined more than once")]
    DuplicateLabel(String),

    #[error("category label `{0}` collides with an inflecting label")]
    ReservedLabel(String),
}
