//! Weight projection API routes

use crate::error::ApiError;
use crate::services::export::{ExportService, TRAJECTORY_CSV_FILE_NAME};
use crate::services::projection::ProjectionService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use weight_loss_shared::types::{ProjectionRequest, ProjectionResponse};

/// Create projection routes
pub fn projection_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(project_weight))
        .route("/csv", post(export_projection_csv))
}

/// POST /api/v1/projection - Project weight and BMI under all four rates
///
/// `week_count` falls back to the configured default and `start_date`
/// to today's date.
async fn project_weight(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Result<Json<ProjectionResponse>, ApiError> {
    let Json(req) = payload?;
    let response = ProjectionService::project(
        &req,
        &state.config().calculator,
        ProjectionService::today(),
    )?;
    Ok(Json(response))
}

/// POST /api/v1/projection/csv - Download the projection table as CSV
async fn export_projection_csv(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let today = ProjectionService::today();
    let input = ProjectionService::resolve_input(&req, &state.config().calculator, today)?;
    let trajectory = ProjectionService::trajectory(&input, today)?;
    let csv = ExportService::trajectory_csv(&trajectory)?;

    let disposition = format!("attachment; filename=\"{}\"", TRAJECTORY_CSV_FILE_NAME);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid header value: {}", e)))?,
    );

    Ok((headers, csv))
}
