use tabsplit_domain::TabCharge;

pub struct ChargePresenter;

impl ChargePresenter {
    /// One `<name>: $<amount>` line per charge, in the order given.
    pub fn render(charges: &[TabCharge<'_>]) -> String {
        charges
            .iter()
            .map(|charge| format!("{}: ${}\n", charge.name, charge.amount))
            .collect()
    }
}
