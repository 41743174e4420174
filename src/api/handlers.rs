//! HTTP request handlers for the summary API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::batch::DocumentInput;
use crate::error::EngineError;
use crate::export::export_report;
use crate::models::BatchReport;

use super::request::{ExportQuery, PdfQuery, SummarizeRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config().server().max_upload_bytes;
    Router::new()
        .route("/health", get(health_handler))
        .route("/summarize", post(summarize_handler))
        .route("/summarize/pdf", post(summarize_pdf_handler))
        .route("/export", post(export_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Handler for POST /summarize.
///
/// Accepts page texts or base64 PDFs and returns the consolidated report.
/// Documents that yield no rows are listed in the report rather than
/// failing the request.
async fn summarize_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summarize request");

    let inputs = match parse_request(correlation_id, payload) {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };

    let report = run_batch(&state, correlation_id, inputs).await;
    json_response(StatusCode::OK, &report)
}

/// Handler for POST /summarize/pdf.
///
/// Accepts a single raw PDF body; `source_name` comes from the query string.
async fn summarize_pdf_handler(
    State(state): State<AppState>,
    Query(query): Query<PdfQuery>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let source_name = query.source_name();
    info!(
        correlation_id = %correlation_id,
        source = %source_name,
        bytes = body.len(),
        "Processing PDF upload"
    );

    if body.is_empty() {
        warn!(correlation_id = %correlation_id, "Empty PDF upload");
        return error_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error("request body must contain a PDF"),
        );
    }

    let inputs = vec![DocumentInput::from_pdf(source_name, body.to_vec())];
    let report = run_batch(&state, correlation_id, inputs).await;
    json_response(StatusCode::OK, &report)
}

/// Handler for POST /export.
///
/// Same input as `/summarize`; returns the consolidated spreadsheet as a
/// download. `?format=csv|xlsx` overrides the configured format.
async fn export_handler(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let export = state.config().export();
    let format = query.format.unwrap_or(export.format);
    info!(
        correlation_id = %correlation_id,
        format = format.extension(),
        "Processing export request"
    );

    let inputs = match parse_request(correlation_id, payload) {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };
    let documents = inputs.len();

    let report = run_batch(&state, correlation_id, inputs).await;
    if report.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            documents,
            "No document produced employee rows"
        );
        return engine_error_response(EngineError::EmptyBatch { documents });
    }

    match export_report(&report, export, format) {
        Ok(file) => {
            info!(
                correlation_id = %correlation_id,
                rows = report.rows.len(),
                bytes = file.bytes.len(),
                file_name = %file.file_name,
                "Export completed"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, file.content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file.file_name),
                    ),
                ],
                file.bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Export failed");
            engine_error_response(err)
        }
    }
}

/// Unwraps the JSON payload and validates it into batch inputs.
fn parse_request(
    correlation_id: Uuid,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Vec<DocumentInput>, Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                JsonRejection::BytesRejection(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "Request body rejected"
                    );
                    return Err(error_response(
                        err.status(),
                        ApiError::new("BODY_REJECTED", err.body_text()),
                    ));
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(error_response(StatusCode::BAD_REQUEST, error));
        }
    };

    request.into_inputs().map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid summarize request");
        engine_error_response(err)
    })
}

async fn run_batch(
    state: &AppState,
    correlation_id: Uuid,
    inputs: Vec<DocumentInput>,
) -> BatchReport {
    let start_time = Instant::now();
    let documents = inputs.len();
    let report = state.processor().process(inputs).await;

    for document in report.unproductive_documents() {
        warn!(
            correlation_id = %correlation_id,
            source = %document.source_name,
            status = ?document.status,
            "Document produced no rows"
        );
    }
    info!(
        correlation_id = %correlation_id,
        documents,
        rows = report.rows.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Summary completed"
    );
    report
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(status: StatusCode, error: ApiError) -> Response {
    ApiErrorResponse { status, error }.into_response()
}

fn engine_error_response(err: EngineError) -> Response {
    ApiErrorResponse::from(err).into_response()
}
