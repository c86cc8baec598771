//! Error types for the timesheet pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing entries and
//! loading configuration.

use thiserror::Error;

/// The main error type for the timesheet pay engine.
///
/// Time-parse errors are per-entry and non-fatal: callers downgrade them
/// to a 0.00-hour result row plus a displayable message. Configuration
/// errors are the only hard failures and surface at startup.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::TimeNotUnderstood {
///     start: "garbage".to_string(),
///     end: "9:00 AM".to_string(),
/// };
/// assert!(error.to_string().starts_with("Time not understood ('garbage' → '9:00 AM')."));
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A single time text matched none of the recognized layouts.
    ///
    /// Carries the original, pre-normalization input.
    #[error("Unrecognized time '{input}'")]
    UnrecognizedTime {
        /// The raw text that could not be parsed.
        input: String,
    },

    /// A (start, end) pair could not be turned into a span because at
    /// least one side failed to parse. The message names both raw texts
    /// and lists the accepted example formats, and is rendered to users
    /// as-is.
    #[error(
        "Time not understood ('{start}' → '{end}'). Try: 8:30 AM, 8 AM, 0830PM, 15:30, or 1530."
    )]
    TimeNotUnderstood {
        /// The raw start text as submitted.
        start: String,
        /// The raw end text as submitted.
        end: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
