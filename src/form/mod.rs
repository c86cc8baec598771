//! Form-field collection and per-entry processing.
//!
//! The web layer hands over a flat map of form-field names to raw text.
//! Two request shapes exist, differing only in which fields they
//! collect; the parsing and calculation core behind them is shared.
//!
//! Failures are handled at the entry level and never abort siblings:
//! an entry with at least one non-empty time field always produces
//! exactly one result row (hours forced to zero plus one error message
//! when the pair cannot be parsed), while an entry with both fields
//! blank produces nothing.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::calculation::{compute_pay, hours_between, round_currency};
use crate::config::RatesConfig;
use crate::models::{ClaimAmounts, EntryResult, Submission, TimeEntry};
use crate::parsing::parse_money;

/// The maximum number of entries the multi-entry shape collects.
pub const MAX_ENTRIES: usize = 4;

/// The `action` field value that discards the submission.
pub const RESET_ACTION: &str = "reset";

/// Which set of form fields a submission carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// One entry (`start`/`end`) plus flat claim fields
    /// (`cash_card_claim`/`taxi_claim`).
    SingleWithClaims,
    /// Up to four independent entries (`start1`..`start4`,
    /// `end1`..`end4`), no claims.
    FourEntries,
}

/// Processes one form submission into results and error messages.
///
/// Missing fields are treated as empty text. An `action` field equal to
/// "reset" (case-insensitive) short-circuits to an empty submission.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use timesheet_engine::config::RatesConfig;
/// use timesheet_engine::form::{FormVariant, process_submission};
///
/// let fields = HashMap::from([
///     ("start1".to_string(), "9:00 AM".to_string()),
///     ("end1".to_string(), "5:00 PM".to_string()),
/// ]);
/// let submission = process_submission(FormVariant::FourEntries, &fields, &RatesConfig::default());
/// assert_eq!(submission.results.len(), 1);
/// assert!(submission.errors.is_empty());
/// ```
pub fn process_submission(
    variant: FormVariant,
    fields: &HashMap<String, String>,
    rates: &RatesConfig,
) -> Submission {
    if is_reset(fields) {
        return Submission::default();
    }

    let mut submission = Submission::default();
    match variant {
        FormVariant::SingleWithClaims => {
            let entry = TimeEntry {
                label: "Subject 1".to_string(),
                start_text: field(fields, "start"),
                end_text: field(fields, "end"),
            };
            let claims = ClaimAmounts {
                cash_card: parse_money(&field(fields, "cash_card_claim")),
                taxi: parse_money(&field(fields, "taxi_claim")),
            };
            push_entry(&mut submission, entry, Some(claims), rates);
        }
        FormVariant::FourEntries => {
            for position in 1..=MAX_ENTRIES {
                let entry = TimeEntry {
                    label: format!("Subject {position}"),
                    start_text: field(fields, &format!("start{position}")),
                    end_text: field(fields, &format!("end{position}")),
                };
                push_entry(&mut submission, entry, None, rates);
            }
        }
    }
    submission
}

fn is_reset(fields: &HashMap<String, String>) -> bool {
    fields
        .get("action")
        .is_some_and(|action| action.trim().eq_ignore_ascii_case(RESET_ACTION))
}

fn field(fields: &HashMap<String, String>, name: &str) -> String {
    fields
        .get(name)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Computes and appends one entry's result row, skipping blank entries.
fn push_entry(
    submission: &mut Submission,
    entry: TimeEntry,
    claims: Option<ClaimAmounts>,
    rates: &RatesConfig,
) {
    if entry.is_blank() {
        return;
    }

    let hours = match hours_between(&entry.start_text, &entry.end_text) {
        Ok(hours) => hours,
        Err(err) => {
            submission.errors.push(err.to_string());
            Decimal::ZERO
        }
    };

    let pay = compute_pay(hours, rates, claims.as_ref().unwrap_or(&ClaimAmounts::default()));
    submission.results.push(EntryResult {
        label: entry.label,
        start_text: entry.start_text,
        end_text: entry.end_text,
        hours,
        pay_standard: pay.standard,
        pay_premium: pay.premium,
        cash_card: claims.as_ref().map(|c| round_currency(c.cash_card)),
        taxi: claims.as_ref().map(|c| round_currency(c.taxi)),
    });
}
