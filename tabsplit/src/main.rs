#![warn(clippy::uninlined_format_args)]

mod infrastructure;

use std::{
    borrow::Cow,
    io::{self, Read},
    process,
};

use infrastructure::parser::TabsplitLineClassifier;
use tabsplit_application::ReceiptProcessor;
use tabsplit_presentation::ChargePresenter;
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

/// Diagnostics go to stderr so the charge lines on stdout stay clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let mut receipt = String::new();
    io::stdin()
        .read_to_string(&mut receipt)
        .map_err(|err| format!("Failed to read receipt from stdin: {err}"))?;

    let classifier = TabsplitLineClassifier;
    let processor = ReceiptProcessor::new(&classifier);

    let ledger = processor
        .process(receipt.lines())
        .map_err(|err| err.to_string())?;
    let charges = ledger.settle().map_err(|err| err.to_string())?;

    print!("{}", ChargePresenter::render(&charges));
    Ok(())
}
