//! Candidate time layouts and the top-level parse entry point.

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};

use super::normalize::normalize;

/// A recognized time-of-day layout.
///
/// Layouts are tried in the order of [`CANDIDATE_LAYOUTS`]; the first
/// match wins. The 12-hour layouts require a meridiem, the 24-hour
/// layouts forbid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// 12-hour with minutes and meridiem, e.g. "8:30 AM".
    TwelveHourMinutes,
    /// 12-hour, hour only, with meridiem, e.g. "8 AM".
    TwelveHour,
    /// 24-hour with minutes, e.g. "21:15".
    TwentyFourMinutes,
    /// 24-hour, hour only, e.g. "8". Accepts 0-23; "24" is rejected.
    TwentyFour,
}

/// The candidate layouts in priority order.
pub const CANDIDATE_LAYOUTS: [TimeLayout; 4] = [
    TimeLayout::TwelveHourMinutes,
    TimeLayout::TwelveHour,
    TimeLayout::TwentyFourMinutes,
    TimeLayout::TwentyFour,
];

impl TimeLayout {
    /// Attempts to interpret an already-normalized text as this layout.
    ///
    /// Hour-only layouts default the minutes to zero. chrono does not
    /// default a missing minute field, so those layouts pad a ":00"
    /// before delegating to the same format strings the full layouts
    /// use.
    pub fn try_match(&self, text: &str) -> Option<NaiveTime> {
        match self {
            TimeLayout::TwelveHourMinutes => NaiveTime::parse_from_str(text, "%I:%M %p").ok(),
            TimeLayout::TwelveHour => {
                let (hour, meridiem) = text.split_once(' ')?;
                if hour.is_empty() || !hour.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                NaiveTime::parse_from_str(&format!("{hour}:00 {meridiem}"), "%I:%M %p").ok()
            }
            TimeLayout::TwentyFourMinutes => NaiveTime::parse_from_str(text, "%H:%M").ok(),
            TimeLayout::TwentyFour => {
                if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                NaiveTime::parse_from_str(&format!("{text}:00"), "%H:%M").ok()
            }
        }
    }
}

/// Parses a free-text time into a [`NaiveTime`].
///
/// The input is normalized (see [`normalize`]) and then matched against
/// [`CANDIDATE_LAYOUTS`] in priority order. On failure the returned
/// error carries the original, pre-normalization text.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use timesheet_engine::parsing::parse_time;
///
/// let expected = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
/// assert_eq!(parse_time("8:30 AM").unwrap(), expected);
/// assert_eq!(parse_time("0830am").unwrap(), expected);
/// assert!(parse_time("noonish").is_err());
/// ```
pub fn parse_time(input: &str) -> EngineResult<NaiveTime> {
    if input.trim().is_empty() {
        return Err(EngineError::UnrecognizedTime {
            input: input.to_string(),
        });
    }
    let normalized = normalize(input);
    CANDIDATE_LAYOUTS
        .iter()
        .find_map(|layout| layout.try_match(&normalized))
        .ok_or_else(|| EngineError::UnrecognizedTime {
            input: input.to_string(),
        })
}
