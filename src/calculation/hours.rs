//! Elapsed-hours calculation with overnight wraparound.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::parsing::parse_time;

use super::pay::round_currency;

/// Minutes in a day, added to a negative span to wrap overnight shifts.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Computes the worked hours between two free-text clock times.
///
/// Both texts are parsed with the lenient time parser; if either fails,
/// the error names both raw inputs so the caller can surface one message
/// and still show a 0.00-hour row.
///
/// Both times are treated as times-of-day on the same calendar day. A
/// negative raw difference means the shift crossed midnight, and 24
/// hours are added. This is the only overnight handling; spans of 24
/// hours or more are not representable.
///
/// The result is rounded to 2 decimal places (banker's rounding, see
/// [`round_currency`]).
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::hours_between;
///
/// assert_eq!(hours_between("9:00 AM", "5:30 PM").unwrap(), Decimal::new(85, 1));
/// assert_eq!(hours_between("11:00 PM", "1:00 AM").unwrap(), Decimal::new(2, 0));
/// assert!(hours_between("garbage", "9:00 AM").is_err());
/// ```
pub fn hours_between(start_text: &str, end_text: &str) -> EngineResult<Decimal> {
    let (start, end) = match (parse_time(start_text), parse_time(end_text)) {
        (Ok(start), Ok(end)) => (start, end),
        _ => {
            return Err(EngineError::TimeNotUnderstood {
                start: start_text.to_string(),
                end: end_text.to_string(),
            });
        }
    };

    let mut minutes = end.signed_duration_since(start).num_minutes();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY; // overnight shift
    }

    Ok(round_currency(
        Decimal::new(minutes, 0) / Decimal::new(60, 0),
    ))
}
