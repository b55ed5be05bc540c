//! Health check endpoints
//!
//! - /health - Service status plus the calculator settings in effect
//! - /health/live - Liveness probe (always returns OK if server is running)

use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use weight_loss_shared::validation::MAX_WEEK_COUNT;
use weight_loss_shared::DecayRate;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculator: Option<CalculatorStatus>,
}

/// Calculator settings reported by `/health`
#[derive(Serialize)]
pub struct CalculatorStatus {
    pub decay_rates: Vec<&'static str>,
    pub default_week_count: u32,
    pub max_week_count: u32,
}

/// Service status with calculator settings
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        calculator: Some(CalculatorStatus {
            decay_rates: DecayRate::ALL.iter().map(|r| r.label()).collect(),
            default_week_count: state.config().calculator.default_week_count,
            max_week_count: MAX_WEEK_COUNT,
        }),
    })
}

/// Liveness probe, OK whenever the process is serving
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive",
        version: env!("CARGO_PKG_VERSION"),
        calculator: None,
    })
}
