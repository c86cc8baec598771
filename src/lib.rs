//! Timesheet Pay Engine
//!
//! This crate parses loosely-formatted clock-in/clock-out texts, computes
//! worked hours (handling overnight spans), and derives pay totals at two
//! configured hourly rates, optionally folding in flat cash/card and taxi
//! claims. An axum router exposes the two form shapes the timesheet web
//! form submits.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod parsing;
