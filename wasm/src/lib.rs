//! Weight Loss Calculator WASM Module
//!
//! This crate provides WebAssembly bindings so the browser can run the
//! BMI classifier and the weight projection without a server round-trip.
//!
//! The browser passes its own calendar date as `today`, which keeps the
//! bindings free of any clock access.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use weight_loss_shared::validation::{parse_start_date, validate_week_count, validate_weight_kg};
use weight_loss_shared::{
    classify, decay_series, project_on, CalcResult, DecayRate, RateSummary, ValidationError,
    WeightTrajectory,
};

/// JSON shape returned by [`project_trajectory_json`]
#[derive(Serialize)]
struct TrajectoryPayload {
    summary: Vec<RateSummary>,
    points: WeightTrajectory,
}

fn to_js_error(err: ValidationError) -> JsError {
    JsError::new(&err.user_message())
}

fn rate_at(rate_index: usize) -> CalcResult<DecayRate> {
    DecayRate::ALL
        .get(rate_index)
        .copied()
        .ok_or_else(|| ValidationError::new("rate", format!("Unknown rate index {}", rate_index)))
}

fn weight_series(weight_kg: f64, week_count: u32, rate_index: usize) -> CalcResult<Vec<f64>> {
    validate_weight_kg(weight_kg)?;
    validate_week_count(week_count)?;
    Ok(decay_series(weight_kg, rate_at(rate_index)?, week_count))
}

fn trajectory_json(
    weight_kg: f64,
    height_m: f64,
    week_count: u32,
    start_date: &str,
    today: &str,
) -> CalcResult<String> {
    let today = parse_start_date(today)?;
    let start = if start_date.trim().is_empty() {
        today
    } else {
        parse_start_date(start_date)?
    };
    let trajectory = project_on(start, week_count, weight_kg, height_m, today)?;
    let payload = TrajectoryPayload {
        summary: trajectory.summary(),
        points: trajectory,
    };
    serde_json::to_string(&payload)
        .map_err(|e| ValidationError::new("trajectory", format!("Serialization failed: {}", e)))
}

/// Calculate BMI (3 decimals) from weight (kg) and height (m)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Result<f64, JsError> {
    classify(weight_kg, height_m)
        .map(|r| r.value)
        .map_err(to_js_error)
}

/// BMI category name for weight (kg) and height (m)
#[wasm_bindgen]
pub fn bmi_category(weight_kg: f64, height_m: f64) -> Result<String, JsError> {
    classify(weight_kg, height_m)
        .map(|r| r.category.name().to_string())
        .map_err(to_js_error)
}

/// Weight series for one rate: 0 = 1%, 1 = 0.75%, 2 = 0.5%, 3 = 0.25%
#[wasm_bindgen]
pub fn project_weight_series(
    weight_kg: f64,
    week_count: u32,
    rate_index: usize,
) -> Result<Vec<f64>, JsError> {
    weight_series(weight_kg, week_count, rate_index).map_err(to_js_error)
}

/// Full trajectory as JSON; an empty `start_date` means `today`
#[wasm_bindgen]
pub fn project_trajectory_json(
    weight_kg: f64,
    height_m: f64,
    week_count: u32,
    start_date: &str,
    today: &str,
) -> Result<String, JsError> {
    trajectory_json(weight_kg, height_m, week_count, start_date, today).map_err(to_js_error)
}
