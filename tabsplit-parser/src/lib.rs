#![warn(clippy::uninlined_format_args)]

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_until, take_while_m_n},
    character::complete::{char, satisfy, u64},
    combinator::{map_opt, peek, rest},
};

const NAME_MARKER: &str = "- For: ";
const NAME_BOUNDARY: &str = " -";

/// One receipt line, classified into exactly one category.
///
/// Amounts are integer cent counts; the name payload borrows from the input
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptLine<'a> {
    /// The grand total actually paid, from the payment-confirmation line.
    Total { amount: u64 },
    /// One purchased item's price.
    Item { amount: u64 },
    /// Opens a new tab for the named participant.
    Name { name: &'a str },
    /// Narrative text; carries no data and is ignored.
    Extra,
}

/// Classifies one line of receipt text. Total function: unmatched input is
/// [`ReceiptLine::Extra`], never an error, and classification is
/// deterministic and side-effect-free.
pub fn classify(line: &str) -> ReceiptLine<'_> {
    // Priority order is load-bearing: a payment-confirmation line also
    // contains an item-shaped amount, so Total must be tested before Item,
    // and both before Name.
    if let Some(amount) = first_total(line) {
        return ReceiptLine::Total { amount };
    }
    if let Some(amount) = first_amount(line) {
        return ReceiptLine::Item { amount };
    }
    if let Ok((_, name)) = tab_name(line) {
        return ReceiptLine::Name { name };
    }
    ReceiptLine::Extra
}

/// First currency amount on the line that qualifies as the paid total.
fn first_total(line: &str) -> Option<u64> {
    scan_dollar_positions(line)
        .find_map(|tail| total_amount(tail).ok().map(|(_, amount)| amount))
}

/// First currency amount on the line, regardless of what follows it.
fn first_amount(line: &str) -> Option<u64> {
    scan_dollar_positions(line)
        .find_map(|tail| currency_amount(tail).ok().map(|(_, amount)| amount))
}

fn scan_dollar_positions(line: &str) -> impl Iterator<Item = &str> {
    line.char_indices()
        .filter(|&(_, c)| c == '$')
        .map(move |(idx, _)| &line[idx..])
}

/// `$<digits>.<exactly two digits>`, as an integer cent count. Trailing
/// digits past the second cent digit are left unconsumed, matching the fixed
/// two-fraction-digit grammar.
fn currency_amount(input: &str) -> IResult<&str, u64> {
    map_opt(
        (
            char('$'),
            u64,
            char('.'),
            take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        ),
        |(_, dollars, _, minor): (_, _, _, &str)| {
            let minor = minor.parse::<u64>().ok()?;
            dollars.checked_mul(100)?.checked_add(minor)
        },
    )
    .parse(input)
}

/// A currency amount with the payment-confirmation phrase immediately ahead:
/// one whitespace character, `Paid`, one whitespace character, `with`. The
/// phrase itself is not consumed.
fn total_amount(input: &str) -> IResult<&str, u64> {
    let (remaining, amount) = currency_amount(input)?;
    peek((
        satisfy(char::is_whitespace),
        tag("Paid"),
        satisfy(char::is_whitespace),
        tag("with"),
    ))
    .parse(remaining)?;
    Ok((remaining, amount))
}

/// Name payload of a `- For: <name>` annotation: the text after the marker,
/// up to (not including) the next ` -` boundary or end of line.
fn tab_name(input: &str) -> IResult<&str, &str> {
    let (input, _) = take_until(NAME_MARKER)(input)?;
    let (input, _) = tag(NAME_MARKER)(input)?;
    alt((take_until(NAME_BOUNDARY), rest)).parse(input)
}
