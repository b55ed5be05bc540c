//! Tabular export of a weight trajectory
//!
//! One CSV row per trajectory point: the date, then the four weight
//! columns, then the four BMI columns, always in decay-rate order
//! 1%, 0.75%, 0.5%, 0.25%.

use crate::error::ApiError;
use serde::Serialize;
use weight_loss_shared::format::format_display_date;
use weight_loss_shared::{TrajectoryPoint, WeightTrajectory};

/// File name offered for the CSV download
pub const TRAJECTORY_CSV_FILE_NAME: &str = "WeightLossData.csv";

/// CSV export row for a trajectory point
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryCsvRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "1p")]
    pub weight_1p: f64,
    #[serde(rename = "075p")]
    pub weight_075p: f64,
    #[serde(rename = "05p")]
    pub weight_05p: f64,
    #[serde(rename = "025p")]
    pub weight_025p: f64,
    #[serde(rename = "bmi1p")]
    pub bmi_1p: f64,
    #[serde(rename = "bmi075p")]
    pub bmi_075p: f64,
    #[serde(rename = "bmi05p")]
    pub bmi_05p: f64,
    #[serde(rename = "bmi025p")]
    pub bmi_025p: f64,
}

impl From<&TrajectoryPoint> for TrajectoryCsvRow {
    fn from(point: &TrajectoryPoint) -> Self {
        Self {
            date: format_display_date(point.date),
            weight_1p: point.weight_kg.one_percent,
            weight_075p: point.weight_kg.three_quarters_percent,
            weight_05p: point.weight_kg.half_percent,
            weight_025p: point.weight_kg.quarter_percent,
            bmi_1p: point.bmi.one_percent,
            bmi_075p: point.bmi.three_quarters_percent,
            bmi_05p: point.bmi.half_percent,
            bmi_025p: point.bmi.quarter_percent,
        }
    }
}

/// Data export service
pub struct ExportService;

impl ExportService {
    /// Export a trajectory as CSV text
    pub fn trajectory_csv(trajectory: &WeightTrajectory) -> Result<String, ApiError> {
        let rows: Vec<TrajectoryCsvRow> = trajectory.points().iter().map(Into::into).collect();
        Self::to_csv(&rows)
    }

    /// Convert data to CSV string
    fn to_csv<T: Serialize>(data: &[T]) -> Result<String, ApiError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }
}
