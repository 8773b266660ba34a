use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use thiserror::Error;

use crate::services::charge_split::{ChargeSplitError, proportional_share};

/// Stand-in total applied at settle time when the receipt never carried a
/// payment-confirmation line. Keeps the classic "-1 means not found"
/// convention, so the resulting charges go negative instead of silently zero.
pub const MISSING_TOTAL_SENTINEL: Money = Money::from_cents(-100);

/// A currency amount as a signed count of cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Money {
    /// Fixed two-decimal notation without a currency symbol (`6.00`, `-0.62`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// An item charge arrived while the tab sequence was still empty.
    #[error("no tab is open to take an item charge")]
    NoActiveTab,
}

/// One participant's tab: a name fixed at creation and the pre-adjustment
/// spend accumulated against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    name: String,
    running_total: Money,
}

impl Tab {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            running_total: Money::zero(),
        }
    }

    fn add(&mut self, amount: Money) {
        self.running_total += amount;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn running_total(&self) -> Money {
        self.running_total
    }
}

/// A settled, ceiling-rounded share owed by one tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabCharge<'a> {
    pub name: &'a str,
    pub amount: Money,
}

/// Ordered collection of tabs plus the running totals of one receipt pass.
///
/// Tabs stay in creation order and are never merged or removed, so settled
/// output order matches input order. `subtotal` equals the sum of every tab's
/// running total at all times: `add_item` updates both in the same step.
#[derive(Debug, Default, PartialEq)]
pub struct TabLedger {
    tabs: Vec<Tab>,
    subtotal: Money,
    total: Option<Money>,
}

impl TabLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a fresh tab at the end of the sequence. Duplicate names open
    /// distinct tabs; names are not validated.
    pub fn open_tab(&mut self, name: &str) {
        self.tabs.push(Tab::new(name));
    }

    /// Charges `amount` to the newest tab and to the receipt subtotal.
    pub fn add_item(&mut self, amount: Money) -> Result<(), LedgerError> {
        let tab = self.tabs.last_mut().ok_or(LedgerError::NoActiveTab)?;
        tab.add(amount);
        self.subtotal += amount;
        Ok(())
    }

    /// Records the paid total. Last write wins.
    pub fn record_total(&mut self, amount: Money) {
        self.total = Some(amount);
    }

    pub fn total(&self) -> Option<Money> {
        self.total
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Computes each non-empty tab's ceiling-rounded share of the paid total,
    /// in creation order.
    ///
    /// A zero subtotal short-circuits to an empty charge list: no tab can
    /// hold a positive running total without items, and the split must never
    /// divide by zero. A never-recorded total falls back to
    /// [`MISSING_TOTAL_SENTINEL`].
    pub fn settle(&self) -> Result<Vec<TabCharge<'_>>, ChargeSplitError> {
        if self.subtotal.is_zero() {
            return Ok(Vec::new());
        }

        let total = self.total.unwrap_or(MISSING_TOTAL_SENTINEL);
        let mut charges = Vec::with_capacity(self.tabs.len());
        for tab in &self.tabs {
            if !tab.running_total.is_positive() {
                continue;
            }
            let amount = proportional_share(tab.running_total, total, self.subtotal)?;
            charges.push(TabCharge {
                name: tab.name(),
                amount,
            });
        }

        Ok(charges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole_dollars(600, "6.00")]
    #[case::cents_only(5, "0.05")]
    #[case::mixed(1234, "12.34")]
    #[case::zero(0, "0.00")]
    #[case::negative_under_a_dollar(-62, "-0.62")]
    #[case::negative_dollars(-100, "-1.00")]
    fn money_displays_fixed_two_decimals(#[case] cents: i64, #[case] expected: &str) {
        assert_eq!(Money::from_cents(cents).to_string(), expected);
    }

    #[test]
    fn item_before_any_tab_is_rejected() {
        let mut ledger = TabLedger::new();
        assert_eq!(
            ledger.add_item(Money::from_cents(500)),
            Err(LedgerError::NoActiveTab)
        );
        assert!(ledger.subtotal().is_zero());
    }

    #[test]
    fn items_charge_the_newest_tab_and_the_subtotal() {
        let mut ledger = TabLedger::new();
        ledger.open_tab("Alice");
        ledger.add_item(Money::from_cents(500)).expect("tab is open");
        ledger.open_tab("Bob");
        ledger.add_item(Money::from_cents(300)).expect("tab is open");

        assert_eq!(ledger.tabs()[0].running_total(), Money::from_cents(500));
        assert_eq!(ledger.tabs()[1].running_total(), Money::from_cents(300));
        assert_eq!(ledger.subtotal(), Money::from_cents(800));
    }

    #[test]
    fn duplicate_names_open_distinct_tabs() {
        let mut ledger = TabLedger::new();
        ledger.open_tab("Alice");
        ledger.add_item(Money::from_cents(200)).expect("tab is open");
        ledger.open_tab("Alice");
        ledger.add_item(Money::from_cents(300)).expect("tab is open");

        assert_eq!(ledger.tabs().len(), 2);
        assert_eq!(ledger.tabs()[0].running_total(), Money::from_cents(200));
        assert_eq!(ledger.tabs()[1].running_total(), Money::from_cents(300));
    }

    #[test]
    fn record_total_keeps_the_newest_amount() {
        let mut ledger = TabLedger::new();
        ledger.record_total(Money::from_cents(960));
        ledger.record_total(Money::from_cents(1060));
        assert_eq!(ledger.total(), Some(Money::from_cents(1060)));
    }

    #[test]
    fn settle_splits_proportionally_in_creation_order() {
        let mut ledger = TabLedger::new();
        ledger.open_tab("Alice");
        ledger.add_item(Money::from_cents(500)).expect("tab is open");
        ledger.open_tab("Bob");
        ledger.add_item(Money::from_cents(300)).expect("tab is open");
        ledger.record_total(Money::from_cents(960));

        let charges = ledger.settle().expect("settle succeeds");
        assert_eq!(
            charges,
            vec![
                TabCharge {
                    name: "Alice",
                    amount: Money::from_cents(600),
                },
                TabCharge {
                    name: "Bob",
                    amount: Money::from_cents(360),
                },
            ]
        );
    }

    #[test]
    fn settle_excludes_tabs_without_items() {
        let mut ledger = TabLedger::new();
        ledger.open_tab("Alice");
        ledger.add_item(Money::from_cents(500)).expect("tab is open");
        ledger.open_tab("Bob");
        ledger.record_total(Money::from_cents(600));

        let charges = ledger.settle().expect("settle succeeds");
        assert_eq!(charges.len(), 1);
        assert_eq!(charges[0].name, "Alice");
    }

    #[test]
    fn settle_with_no_items_is_empty_without_dividing() {
        let mut ledger = TabLedger::new();
        ledger.open_tab("Alice");
        ledger.record_total(Money::from_cents(960));
        assert_eq!(ledger.settle().expect("settle succeeds"), Vec::new());
    }

    #[test]
    fn settle_without_a_total_uses_the_missing_total_sentinel() {
        let mut ledger = TabLedger::new();
        ledger.open_tab("Alice");
        ledger.add_item(Money::from_cents(500)).expect("tab is open");

        let charges = ledger.settle().expect("settle succeeds");
        assert_eq!(charges[0].amount, Money::from_cents(-100));
    }
}
