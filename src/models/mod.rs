//! Core data models for the timesheet pay engine.
//!
//! This module contains the domain types shared by the form layer and
//! the calculation functions.

mod entry;
mod result;

pub use entry::{ClaimAmounts, TimeEntry};
pub use result::{EntryResult, Submission};
