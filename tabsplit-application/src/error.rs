use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ProcessError {
    /// An item line was classified while the tab sequence was still empty.
    /// Fatal: the receipt is structurally malformed.
    #[error("item before name at line {line}: no tab is open to take the charge")]
    ItemBeforeName { line: usize },
}
