use tabsplit_application::{LineClassifier, ReceiptLine};
use tabsplit_domain::Money;

/// Adapts the nom-based receipt grammar to the application's classifier port.
#[derive(Default)]
pub struct TabsplitLineClassifier;

impl LineClassifier for TabsplitLineClassifier {
    fn classify<'a>(&self, line: &'a str) -> ReceiptLine<'a> {
        match tabsplit_parser::classify(line) {
            tabsplit_parser::ReceiptLine::Total { amount } => match to_money(amount) {
                Some(amount) => ReceiptLine::Total { amount },
                None => ReceiptLine::Extra,
            },
            tabsplit_parser::ReceiptLine::Item { amount } => match to_money(amount) {
                Some(amount) => ReceiptLine::Item { amount },
                None => ReceiptLine::Extra,
            },
            tabsplit_parser::ReceiptLine::Name { name } => ReceiptLine::Name { name },
            tabsplit_parser::ReceiptLine::Extra => ReceiptLine::Extra,
        }
    }
}

// Amounts past the signed cent range cannot enter the ledger.
fn to_money(cents: u64) -> Option<Money> {
    i64::try_from(cents).ok().map(Money::from_cents)
}
