#![warn(clippy::uninlined_format_args)]

pub mod charge_presenter;

pub use charge_presenter::ChargePresenter;
