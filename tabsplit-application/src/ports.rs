use crate::model::ReceiptLine;

/// Turns one line of raw receipt text into its classified form.
///
/// Implementations must be total (unmatched input is `Extra`), deterministic
/// and side-effect-free.
pub trait LineClassifier: Send + Sync {
    fn classify<'a>(&self, line: &'a str) -> ReceiptLine<'a>;
}
