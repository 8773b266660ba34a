#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod processor;

pub use error::ProcessError;
pub use model::{LineKind, ReceiptLine};
pub use ports::LineClassifier;
pub use processor::ReceiptProcessor;
