pub mod charge_split;

pub use charge_split::{ChargeSplitError, proportional_share};
