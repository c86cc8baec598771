//! Lenient money parsing for claim fields.

use rust_decimal::Decimal;

/// Parses a claim amount, coercing anything unrecognizable to zero.
///
/// Commas are stripped and surrounding whitespace is trimmed; whatever
/// remains must parse as a plain decimal number. Non-numeric residue
/// yields `Decimal::ZERO` silently rather than an error, so a typo in a
/// claim field never fails the request.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::parsing::parse_money;
///
/// assert_eq!(parse_money("1,234.50"), Decimal::new(123450, 2));
/// assert_eq!(parse_money(" 10 "), Decimal::new(10, 0));
/// assert_eq!(parse_money("abc"), Decimal::ZERO);
/// assert_eq!(parse_money(""), Decimal::ZERO);
/// ```
pub fn parse_money(text: &str) -> Decimal {
    let cleaned = text.replace(',', "");
    cleaned.trim().parse().unwrap_or(Decimal::ZERO)
}
