//! BMI classification API routes

use crate::error::ApiError;
use crate::services::projection::ProjectionService;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use weight_loss_shared::bmi_reference_table;
use weight_loss_shared::types::{BmiCategoriesResponse, BmiRequest, BmiResponse};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(classify_bmi))
        .route("/categories", get(get_categories))
}

/// POST /api/v1/bmi - Classify BMI for weight (kg) and height (m)
async fn classify_bmi(
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> Result<Json<BmiResponse>, ApiError> {
    let Json(req) = payload?;
    let response = ProjectionService::classify(&req)?;
    Ok(Json(response))
}

/// GET /api/v1/bmi/categories - BMI reference table
async fn get_categories() -> Json<BmiCategoriesResponse> {
    Json(BmiCategoriesResponse {
        categories: bmi_reference_table(),
    })
}
