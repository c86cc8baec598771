//! Calculation logic for the timesheet pay engine.
//!
//! This module contains the pure functions that turn parsed time pairs
//! into worked hours (including overnight wraparound) and worked hours
//! into pay figures at the configured rates. Every function here is a
//! pure function of its inputs; there is no cross-request state.

mod hours;
mod pay;

pub use hours::{MINUTES_PER_DAY, hours_between};
pub use pay::{PayBreakdown, compute_pay, round_currency};
