//! API request and response types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::health_metrics::{BmiCategory, BmiRangeInfo, BmiResult};
use crate::trajectory::{DecayRate, RateSummary, WeightTrajectory};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// BMI Types
// ============================================================================

/// BMI classification request (metric units only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRequest {
    pub weight_kg: f64,
    pub height_m: f64,
}

/// BMI classification response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: BmiCategory,
    pub category_label: String,
}

impl From<BmiResult> for BmiResponse {
    fn from(result: BmiResult) -> Self {
        Self {
            bmi: result.value,
            category: result.category,
            category_label: result.category.name().to_string(),
        }
    }
}

/// BMI reference table response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiCategoriesResponse {
    pub categories: Vec<BmiRangeInfo>,
}

// ============================================================================
// Projection Types
// ============================================================================

/// Weight projection request
///
/// `start_date` is kept as raw text so a malformed date surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub weight_kg: f64,
    pub height_m: f64,
    /// Weeks to project; server default when omitted
    #[serde(default)]
    pub week_count: Option<u32>,
    /// `YYYY-MM-DD`; today when omitted
    #[serde(default)]
    pub start_date: Option<String>,
}

/// Description of one decay rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayRateInfo {
    pub rate: DecayRate,
    pub weekly_fraction: f64,
    pub weight_column: String,
    pub bmi_column: String,
}

impl From<DecayRate> for DecayRateInfo {
    fn from(rate: DecayRate) -> Self {
        Self {
            rate,
            weekly_fraction: rate.fraction(),
            weight_column: rate.weight_column().to_string(),
            bmi_column: rate.bmi_column().to_string(),
        }
    }
}

/// Weight projection response
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionResponse {
    pub start_date: NaiveDate,
    pub week_count: u32,
    /// Classification of the starting weight
    pub current_bmi: BmiResponse,
    pub rates: Vec<DecayRateInfo>,
    pub points: WeightTrajectory,
    pub summary: Vec<RateSummary>,
}
