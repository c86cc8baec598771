//! Time entry and claim models.
//!
//! A [`TimeEntry`] is one (start, end) pair of raw texts as submitted in
//! the form; [`ClaimAmounts`] are the flat reimbursements that the
//! single-entry form variant collects alongside it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One submitted clock-in/clock-out pair, still as raw text.
///
/// Entries are identified by a fixed positional label ("Subject 1"
/// through "Subject 4"). The texts are kept verbatim so that parse
/// errors can name exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Positional label for the entry, e.g. "Subject 2".
    pub label: String,
    /// The clock-in text as submitted.
    pub start_text: String,
    /// The clock-out text as submitted.
    pub end_text: String,
}

impl TimeEntry {
    /// Returns true when both time fields are empty or whitespace-only.
    ///
    /// Blank entries produce no result row and no error.
    pub fn is_blank(&self) -> bool {
        self.start_text.trim().is_empty() && self.end_text.trim().is_empty()
    }
}

/// Flat monetary reimbursements added to pay independent of hours.
///
/// Absent or unparsable claim text is coerced to zero before this struct
/// is built, so the amounts here are always valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimAmounts {
    /// Cash/card expense claim.
    pub cash_card: Decimal,
    /// Taxi expense claim.
    pub taxi: Decimal,
}

impl ClaimAmounts {
    /// The sum of both claims.
    pub fn total(&self) -> Decimal {
        self.cash_card + self.taxi
    }
}
