use tabsplit_domain::TabLedger;

use crate::{error::ProcessError, model::ReceiptLine, ports::LineClassifier};

/// Single forward pass over a receipt: classifies each line and routes it
/// into the tab ledger. Any structural error aborts the pass; nothing is
/// retried or recovered mid-stream.
#[derive(Clone, Copy)]
pub struct ReceiptProcessor<'a> {
    classifier: &'a dyn LineClassifier,
}

impl<'a> ReceiptProcessor<'a> {
    pub fn new(classifier: &'a dyn LineClassifier) -> Self {
        Self { classifier }
    }

    /// Consumes the receipt lines in order and returns the populated ledger.
    ///
    /// A receipt that ends without a payment-confirmation line is reported
    /// with a single warning; the ledger then settles against the
    /// missing-total sentinel, reproducing the long-standing negative-charge
    /// behavior of such receipts.
    pub fn process<I, S>(&self, lines: I) -> Result<TabLedger, ProcessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ledger = TabLedger::new();
        let mut line_count = 0usize;

        for (idx, line) in lines.into_iter().enumerate() {
            let line_number = idx + 1;
            let classified = self.classifier.classify(line.as_ref());
            tracing::trace!(line = line_number, kind = %classified.kind(), "classified receipt line");

            match classified {
                ReceiptLine::Total { amount } => {
                    if let Some(previous) = ledger.total() {
                        tracing::debug!(
                            line = line_number,
                            %previous,
                            "total recorded again; keeping the newest amount"
                        );
                    }
                    ledger.record_total(amount);
                }
                ReceiptLine::Name { name } => ledger.open_tab(name),
                ReceiptLine::Item { amount } => {
                    ledger
                        .add_item(amount)
                        .map_err(|_| ProcessError::ItemBeforeName { line: line_number })?;
                }
                ReceiptLine::Extra => {}
            }

            line_count = line_number;
        }

        if ledger.total().is_none() {
            tracing::warn!("total price not found; charges will settle against the missing-total sentinel");
        }

        tracing::debug!(
            lines = line_count,
            tabs = ledger.tabs().len(),
            subtotal = %ledger.subtotal(),
            "receipt pass complete"
        );

        Ok(ledger)
    }
}
