//! Result models returned to the rendering layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed outcome for one submitted time entry.
///
/// Every entry with at least one non-empty time field produces exactly
/// one of these, even when the pair could not be parsed (hours and pay
/// are then zero and a matching message appears in
/// [`Submission::errors`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryResult {
    /// Positional label, e.g. "Subject 1".
    pub label: String,
    /// The clock-in text exactly as submitted.
    pub start_text: String,
    /// The clock-out text exactly as submitted.
    pub end_text: String,
    /// Worked hours, rounded to 2 decimal places; zero on parse failure.
    pub hours: Decimal,
    /// Pay at the standard hourly rate, claims included, rounded to 2 dp.
    pub pay_standard: Decimal,
    /// Pay at the premium hourly rate, claims included, rounded to 2 dp.
    pub pay_premium: Decimal,
    /// Cash/card claim folded into the pay figures, rounded to 2 dp.
    /// Only present for the single-entry-with-claims form variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_card: Option<Decimal>,
    /// Taxi claim folded into the pay figures, rounded to 2 dp.
    /// Only present for the single-entry-with-claims form variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxi: Option<Decimal>,
}

/// The full outcome of processing one form submission.
///
/// Results and errors are ordered by entry position. Either list may be
/// empty; both are rendered as-is by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// One result per non-blank entry, in position order.
    pub results: Vec<EntryResult>,
    /// Human-readable messages for entries that could not be parsed.
    pub errors: Vec<String>,
}
