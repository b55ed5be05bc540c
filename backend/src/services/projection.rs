//! Weight projection service
//!
//! Turns raw API requests into calls to the shared calculator:
//! - BMI classification of the current weight
//! - Multi-rate weight trajectory with its summary

use crate::config::CalculatorConfig;
use crate::error::ApiError;
use chrono::{Local, NaiveDate};
use tracing::debug;
use weight_loss_shared::types::{
    BmiRequest, BmiResponse, DecayRateInfo, ProjectionRequest, ProjectionResponse,
};
use weight_loss_shared::validation::parse_start_date;
use weight_loss_shared::{classify, project_on, DecayRate, WeightTrajectory};

/// Validated projection inputs with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionInput {
    pub weight_kg: f64,
    pub height_m: f64,
    pub week_count: u32,
    pub start_date: NaiveDate,
}

/// Projection service
pub struct ProjectionService;

impl ProjectionService {
    /// Classify the BMI for a weight/height pair
    pub fn classify(req: &BmiRequest) -> Result<BmiResponse, ApiError> {
        let result = classify(req.weight_kg, req.height_m)?;
        debug!(bmi = result.value, category = %result.category, "Classified BMI");
        Ok(result.into())
    }

    /// Apply defaults and parse the start date
    ///
    /// A missing start date means `today`.
    pub fn resolve_input(
        req: &ProjectionRequest,
        defaults: &CalculatorConfig,
        today: NaiveDate,
    ) -> Result<ProjectionInput, ApiError> {
        let start_date = match req.start_date.as_deref() {
            Some(raw) => parse_start_date(raw)?,
            None => today,
        };

        Ok(ProjectionInput {
            weight_kg: req.weight_kg,
            height_m: req.height_m,
            week_count: req.week_count.unwrap_or(defaults.default_week_count),
            start_date,
        })
    }

    /// Build the trajectory for resolved inputs
    pub fn trajectory(input: &ProjectionInput, today: NaiveDate) -> Result<WeightTrajectory, ApiError> {
        let trajectory = project_on(
            input.start_date,
            input.week_count,
            input.weight_kg,
            input.height_m,
            today,
        )?;

        debug!(
            weeks = input.week_count,
            start = %input.start_date,
            points = trajectory.len(),
            "Projected weight trajectory"
        );

        Ok(trajectory)
    }

    /// Full projection response: current BMI, rates, points and summary
    pub fn project(
        req: &ProjectionRequest,
        defaults: &CalculatorConfig,
        today: NaiveDate,
    ) -> Result<ProjectionResponse, ApiError> {
        let input = Self::resolve_input(req, defaults, today)?;
        let current_bmi = classify(input.weight_kg, input.height_m)?;
        let trajectory = Self::trajectory(&input, today)?;

        let start_date = trajectory
            .first()
            .map(|p| p.date)
            .unwrap_or(input.start_date);

        Ok(ProjectionResponse {
            start_date,
            week_count: input.week_count,
            current_bmi: current_bmi.into(),
            rates: DecayRate::ALL.into_iter().map(DecayRateInfo::from).collect(),
            summary: trajectory.summary(),
            points: trajectory,
        })
    }

    /// Today's calendar date on the server's local clock
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}
