use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::assumptions::{AssumptionKey, AssumptionOverrides, Assumptions};
use crate::config::Config;
use crate::engine::maturity::{self, MaturityCurvePoint};
use crate::engine::whatif::{simulate_whatif, WhatIfResult};
use crate::engine::{build_business_case, BusinessCase, EngineError, PriorityOutcome};
use crate::priority::PriorityRegistry;

#[derive(Clone)]
struct ApiState {
    config: Config,
    registry: PriorityRegistry,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(error: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: error.to_string(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        // Every engine failure is an input problem; nothing internal can fail.
        Self::bad_request(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorBody {
            ok: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Clone, Default, Deserialize)]
struct EstimateRequest {
    #[serde(flatten)]
    overrides: AssumptionOverrides,
}

#[derive(Debug, Clone, Deserialize)]
struct AssumptionChangeInput {
    assumption: String,
    to: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WhatIfRequest {
    #[serde(flatten)]
    overrides: AssumptionOverrides,
    #[serde(default)]
    changes: Vec<AssumptionChangeInput>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct BreakdownResponse {
    outcomes: Vec<PriorityOutcome>,
}

#[derive(Debug, Serialize)]
struct MaturityResponse {
    curve: Vec<MaturityCurvePoint>,
}

pub async fn run_server(config: Config, bind: SocketAddr) -> Result<()> {
    let state = ApiState {
        config,
        registry: PriorityRegistry::with_defaults(),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/v1/estimate", post(estimate))
        .route("/v1/breakdown", post(breakdown))
        .route("/v1/whatif", post(whatif))
        .route("/v1/maturity", get(maturity_curve))
        .route("/v1/config", get(show_config))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("REST API listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<ApiResponse<HealthResponse>> {
    ok(HealthResponse { status: "ok" })
}

async fn show_config(State(state): State<ApiState>) -> Json<ApiResponse<Config>> {
    ok(state.config)
}

async fn estimate(
    State(state): State<ApiState>,
    Json(request): Json<EstimateRequest>,
) -> ApiResult<BusinessCase> {
    let assumptions = resolve_assumptions(&state, &request.overrides)?;
    let case = build_business_case(&assumptions, &state.registry)?;
    Ok(ok(case))
}

async fn breakdown(
    State(state): State<ApiState>,
    Json(request): Json<EstimateRequest>,
) -> ApiResult<BreakdownResponse> {
    let assumptions = resolve_assumptions(&state, &request.overrides)?;
    let case = build_business_case(&assumptions, &state.registry)?;
    Ok(ok(BreakdownResponse {
        outcomes: case.outcomes,
    }))
}

async fn whatif(
    State(state): State<ApiState>,
    Json(request): Json<WhatIfRequest>,
) -> ApiResult<WhatIfResult> {
    let assumptions = resolve_assumptions(&state, &request.overrides)?;
    let changes = parse_changes(&request.changes)?;
    if changes.is_empty() {
        return Err(ApiError::bad_request(
            "at least one assumption change is required",
        ));
    }
    let result = simulate_whatif(&assumptions, &changes, &state.registry)?;
    Ok(ok(result))
}

async fn maturity_curve() -> Json<ApiResponse<MaturityResponse>> {
    ok(MaturityResponse {
        curve: maturity::curve(),
    })
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { ok: true, data })
}

fn resolve_assumptions(
    state: &ApiState,
    overrides: &AssumptionOverrides,
) -> std::result::Result<Assumptions, ApiError> {
    let mut assumptions = state.config.to_assumptions().map_err(ApiError::internal)?;
    overrides.apply(&mut assumptions);
    Ok(assumptions)
}

fn parse_changes(
    inputs: &[AssumptionChangeInput],
) -> std::result::Result<Vec<(AssumptionKey, f64)>, ApiError> {
    let mut changes = Vec::with_capacity(inputs.len());
    for input in inputs {
        let key = AssumptionKey::from_str(&input.assumption)
            .map_err(|error| ApiError::bad_request(error.to_string()))?;
        changes.push((key, input.to));
    }
    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assumption_changes() {
        let changes = parse_changes(&[
            AssumptionChangeInput {
                assumption: "maturity_level".to_string(),
                to: 5.0,
            },
            AssumptionChangeInput {
                assumption: "utilization".to_string(),
                to: 80.0,
            },
        ])
        .expect("failed to parse changes");
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].0, AssumptionKey::MaturityLevel);
    }

    #[test]
    fn unknown_assumption_is_a_bad_request() {
        let result = parse_changes(&[AssumptionChangeInput {
            assumption: "warp_factor".to_string(),
            to: 9.0,
        }]);
        assert!(result.is_err());
    }
}
