//! HTTP API module for the timesheet pay engine.
//!
//! This module provides the endpoints the timesheet form posts to, plus
//! a liveness check.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
