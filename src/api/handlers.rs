//! HTTP request handlers for the timesheet pay engine API.

use std::collections::HashMap;

use axum::{
    Form, Json, Router,
    extract::{State, rejection::FormRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::form::{FormVariant, process_submission};

use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// - `POST /payroll` — single entry with cash/card and taxi claims
/// - `POST /timesheet` — up to four independent entries
/// - `GET /ping` — liveness check
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/timesheet", post(timesheet_handler))
        .route("/ping", get(ping_handler))
        .with_state(state)
}

/// Handler for POST /payroll (single entry plus flat claims).
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    handle_submission(FormVariant::SingleWithClaims, &state, payload)
}

/// Handler for POST /timesheet (up to four entries, no claims).
async fn timesheet_handler(
    State(state): State<AppState>,
    payload: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    handle_submission(FormVariant::FourEntries, &state, payload)
}

/// Handler for GET /ping.
async fn ping_handler() -> &'static str {
    "OK"
}

fn handle_submission(
    variant: FormVariant,
    state: &AppState,
    payload: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, ?variant, "Processing timesheet submission");

    let fields = match payload {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected form body"
            );
            return ApiErrorResponse::malformed_form(rejection.body_text()).into_response();
        }
    };

    let submission = process_submission(variant, &fields, state.rates());

    for error in &submission.errors {
        warn!(correlation_id = %correlation_id, error = %error, "Entry could not be parsed");
    }
    info!(
        correlation_id = %correlation_id,
        results = submission.results.len(),
        errors = submission.errors.len(),
        "Submission processed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(submission),
    )
        .into_response()
}
