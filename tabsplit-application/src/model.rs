use std::fmt;

use tabsplit_domain::Money;

/// One receipt line, classified into exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptLine<'a> {
    /// The grand total actually paid.
    Total { amount: Money },
    /// One purchased item's price, charged to the newest tab.
    Item { amount: Money },
    /// Opens a new tab for the named participant.
    Name { name: &'a str },
    /// Anything else; ignored.
    Extra,
}

/// Category tag of a classified line, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Total,
    Item,
    Name,
    Extra,
}

impl ReceiptLine<'_> {
    pub fn kind(&self) -> LineKind {
        match self {
            ReceiptLine::Total { .. } => LineKind::Total,
            ReceiptLine::Item { .. } => LineKind::Item,
            ReceiptLine::Name { .. } => LineKind::Name,
            ReceiptLine::Extra => LineKind::Extra,
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LineKind::Total => "Total",
            LineKind::Item => "Item",
            LineKind::Name => "Name",
            LineKind::Extra => "Extra",
        };
        f.write_str(label)
    }
}
