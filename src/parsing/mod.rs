//! Lenient free-text parsing for times and money.
//!
//! Users type clock times inconsistently: missing separators, missing
//! spaces, lowercase meridiems, periods instead of colons. The time
//! parser applies an ordered list of cheap textual fixups
//! ([`normalize`]) and then tries a fixed priority list of candidate
//! layouts ([`TimeLayout`]) rather than building a full grammar; the
//! input domain (clock times) is small and regular enough for that.
//!
//! Money parsing is even more lenient: anything that is not a number
//! silently becomes zero.

mod layout;
mod money;
mod normalize;

pub use layout::{CANDIDATE_LAYOUTS, TimeLayout, parse_time};
pub use money::parse_money;
pub use normalize::normalize;
