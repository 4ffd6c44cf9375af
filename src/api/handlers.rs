//! HTTP request handlers for the Salary Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_yearly, calculate_net_salary, compute_tiered_breakdown,
    filter_shifts_for_salary_cycle, parse_local_date, predict_end_of_month,
};
use crate::config::{validate_configuration, Configuration};
use crate::error::EngineError;

use super::request::{BreakdownRequest, CalculateRequest, PredictRequest, YearlyRequest};
use super::response::{ApiError, ApiErrorResponse, ValidationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/calculate", post(calculate_handler))
        .route("/breakdown", post(breakdown_handler))
        .route("/cycle", post(cycle_handler))
        .route("/yearly", post(yearly_handler))
        .route("/predict", post(predict_handler))
        .route("/config/validate", post(validate_config_handler))
        .with_state(state)
}

/// Handler for GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    json_response(
        StatusCode::OK,
        json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Handler for POST /calculate endpoint.
///
/// Selects the shifts of the requested salary month and returns the full
/// monthly summary with every deduction line.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Some(error) = check_month(correlation_id, request.month) {
        return error;
    }

    let config = request.config.unwrap_or_else(|| state.defaults().clone());
    let start_time = Instant::now();

    let cycle = filter_shifts_for_salary_cycle(&request.shifts, &config, request.year, request.month);
    let summary = calculate_net_salary(&cycle, &config);

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        month = request.month,
        shifts_count = cycle.len(),
        net = summary.net,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );
    json_response(StatusCode::OK, summary)
}

/// Handler for POST /breakdown endpoint.
///
/// Splits a single shift's hours across the overtime tier schedule.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tier breakdown request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = request.config.unwrap_or_else(|| state.defaults().clone());
    let breakdown =
        compute_tiered_breakdown(request.hours, request.rate, request.percent, &config);

    info!(
        correlation_id = %correlation_id,
        hours = %request.hours,
        bands = breakdown.len(),
        "Tier breakdown completed"
    );
    json_response(StatusCode::OK, breakdown)
}

/// Handler for POST /cycle endpoint.
///
/// Returns the evaluated shifts of one salary month, newest first.
async fn cycle_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary cycle request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Some(error) = check_month(correlation_id, request.month) {
        return error;
    }

    let config = request.config.unwrap_or_else(|| state.defaults().clone());
    let cycle = filter_shifts_for_salary_cycle(&request.shifts, &config, request.year, request.month);

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        month = request.month,
        shifts_count = cycle.len(),
        "Salary cycle resolved"
    );
    json_response(StatusCode::OK, cycle)
}

/// Handler for POST /yearly endpoint.
///
/// Aggregates a full year of salary months.
async fn yearly_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearlyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing yearly statistics request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = request.config.unwrap_or_else(|| state.defaults().clone());
    let start_time = Instant::now();
    let stats = aggregate_yearly(&request.shifts, &config, request.year);

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        shifts_count = stats.yearly_totals.shift_count,
        duration_us = start_time.elapsed().as_micros(),
        "Yearly statistics completed"
    );
    json_response(StatusCode::OK, stats)
}

/// Handler for POST /predict endpoint.
///
/// Projects the month-end net from the pace so far.
async fn predict_handler(payload: Result<Json<PredictRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing prediction request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let reference = match request.reference_date.as_deref() {
        Some(value) => match parse_local_date(value) {
            Ok(date) => date,
            Err(error) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %error,
                    "Rejecting unparseable reference date"
                );
                return engine_error_response(error);
            }
        },
        None => Utc::now().date_naive(),
    };

    let predicted = predict_end_of_month(request.shift_count, request.net, reference);

    info!(
        correlation_id = %correlation_id,
        shift_count = request.shift_count,
        predicted = predicted,
        "Prediction completed"
    );
    json_response(StatusCode::OK, json!({ "predictedNet": predicted }))
}

/// Handler for POST /config/validate endpoint.
///
/// Checks a configuration and reports every issue found. The response is
/// 200 either way; a rejected configuration is a result, not a failure.
async fn validate_config_handler(
    payload: Result<Json<Configuration>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing configuration validation request");

    let config = match payload {
        Ok(Json(config)) => config,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let issues = validate_configuration(&config);
    info!(
        correlation_id = %correlation_id,
        issue_count = issues.len(),
        "Configuration validation completed"
    );
    json_response(
        StatusCode::OK,
        ValidationResponse {
            valid: issues.is_empty(),
            issues,
        },
    )
}

/// Rejects months outside 1-12 before any calculation runs.
fn check_month(correlation_id: Uuid, month: u32) -> Option<Response> {
    if (1..=12).contains(&month) {
        return None;
    }
    warn!(correlation_id = %correlation_id, month = month, "Rejecting out-of-range month");
    Some(json_response(
        StatusCode::BAD_REQUEST,
        ApiError::validation_error(format!("month must be between 1 and 12, got {}", month)),
    ))
}

/// Maps a JSON extraction rejection to the API error body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn engine_error_response(error: EngineError) -> Response {
    let api_error: ApiErrorResponse = error.into();
    json_response(api_error.status, api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(Configuration::default())
    }

    async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn test_calculate_returns_summary() {
        let router = create_router(create_test_state());
        let body = r#"{
            "shifts": {
                "2024-03-11": {"type": "עבודה", "totalHours": 8}
            },
            "config": {"hourlyRate": 50, "travelDaily": 20, "isBreakDeducted": false},
            "year": 2024,
            "month": 3
        }"#;

        let (status, json) = post_json(router, "/calculate", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["gross"], 420);
        assert_eq!(json["shiftCount"], 1);
        assert_eq!(json["totalHours"], "8.0");
    }

    #[tokio::test]
    async fn test_calculate_rejects_out_of_range_month() {
        let router = create_router(create_test_state());
        let body = r#"{"shifts": {}, "year": 2024, "month": 13}"#;

        let (status, json) = post_json(router, "/calculate", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("month"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, json) = post_json(router, "/calculate", "{invalid json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_mentions_the_field() {
        let router = create_router(create_test_state());

        // No month in the body
        let (status, json) = post_json(router, "/calculate", r#"{"shifts": {}, "year": 2024}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("month"));
    }

    #[tokio::test]
    async fn test_breakdown_splits_hours() {
        let router = create_router(create_test_state());
        let body = r#"{"hours": 10, "rate": 50}"#;

        let (status, json) = post_json(router, "/breakdown", body).await;
        assert_eq!(status, StatusCode::OK);
        let bands = json.as_array().unwrap();
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0]["amount"], 400.0);
        assert_eq!(bands[1]["amount"], 125.0);
    }

    #[tokio::test]
    async fn test_predict_rejects_bad_reference_date() {
        let router = create_router(create_test_state());
        let body = r#"{"shiftCount": 10, "net": 5000, "referenceDate": "soon"}"#;

        let (status, json) = post_json(router, "/predict", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_DATE");
    }

    #[tokio::test]
    async fn test_predict_with_reference_date() {
        let router = create_router(create_test_state());
        let body = r#"{"shiftCount": 8, "net": 5000, "referenceDate": "2024-04-15"}"#;

        let (status, json) = post_json(router, "/predict", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["predictedNet"], 10000);
    }

    #[tokio::test]
    async fn test_validate_reports_issues() {
        let router = create_router(create_test_state());
        let body = r#"{"hourlyRate": -4, "creditPoints": 99}"#;

        let (status, json) = post_json(router, "/config/validate", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["valid"], false);
        let issues = json["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 2);
    }
}
