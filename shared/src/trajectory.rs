//! Weight trajectory projection
//!
//! Projects a starting weight forward week by week under the four fixed
//! decay rates. Each week's loss is a percentage of the current, already
//! reduced weight, so every series is a geometric sequence:
//!
//! ```text
//! weight[0] = start
//! weight[i] = weight[i-1] × (1 − rate)
//! ```
//!
//! The recurrence runs at full precision; only the derived BMI values are
//! rounded (to 2 decimals) as each point is assembled.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CalcResult, ValidationError};
use crate::format::{round_to, TRAJECTORY_BMI_DECIMALS};
use crate::health_metrics::{calculate_bmi, AnthropometricProfile};
use crate::validation::validate_week_count;

/// Days between consecutive trajectory points
pub const DAYS_PER_WEEK: u64 = 7;

// ============================================================================
// Decay Rates
// ============================================================================

/// Fixed weekly weight-loss rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecayRate {
    #[serde(rename = "1%")]
    OnePercent,
    #[serde(rename = "0.75%")]
    ThreeQuartersPercent,
    #[serde(rename = "0.5%")]
    HalfPercent,
    #[serde(rename = "0.25%")]
    QuarterPercent,
}

impl DecayRate {
    /// All rates, fastest first. Export columns follow this order.
    pub const ALL: [DecayRate; 4] = [
        DecayRate::OnePercent,
        DecayRate::ThreeQuartersPercent,
        DecayRate::HalfPercent,
        DecayRate::QuarterPercent,
    ];

    /// Weekly loss as a fraction of current weight
    pub fn fraction(&self) -> f64 {
        match self {
            DecayRate::OnePercent => 0.01,
            DecayRate::ThreeQuartersPercent => 0.0075,
            DecayRate::HalfPercent => 0.005,
            DecayRate::QuarterPercent => 0.0025,
        }
    }

    fn index(&self) -> usize {
        match self {
            DecayRate::OnePercent => 0,
            DecayRate::ThreeQuartersPercent => 1,
            DecayRate::HalfPercent => 2,
            DecayRate::QuarterPercent => 3,
        }
    }

    /// Multiplier applied to last week's weight
    pub fn weekly_factor(&self) -> f64 {
        1.0 - self.fraction()
    }

    /// Display label, e.g. `0.75%`
    pub fn label(&self) -> &'static str {
        match self {
            DecayRate::OnePercent => "1%",
            DecayRate::ThreeQuartersPercent => "0.75%",
            DecayRate::HalfPercent => "0.5%",
            DecayRate::QuarterPercent => "0.25%",
        }
    }

    /// Weight column key in the tabular export
    pub fn weight_column(&self) -> &'static str {
        match self {
            DecayRate::OnePercent => "1p",
            DecayRate::ThreeQuartersPercent => "075p",
            DecayRate::HalfPercent => "05p",
            DecayRate::QuarterPercent => "025p",
        }
    }

    /// BMI column key in the tabular export
    pub fn bmi_column(&self) -> &'static str {
        match self {
            DecayRate::OnePercent => "bmi1p",
            DecayRate::ThreeQuartersPercent => "bmi075p",
            DecayRate::HalfPercent => "bmi05p",
            DecayRate::QuarterPercent => "bmi025p",
        }
    }
}

impl fmt::Display for DecayRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per decay rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateValues {
    #[serde(rename = "1%")]
    pub one_percent: f64,
    #[serde(rename = "0.75%")]
    pub three_quarters_percent: f64,
    #[serde(rename = "0.5%")]
    pub half_percent: f64,
    #[serde(rename = "0.25%")]
    pub quarter_percent: f64,
}

impl RateValues {
    /// Build by evaluating `f` for every rate
    pub fn from_fn(mut f: impl FnMut(DecayRate) -> f64) -> Self {
        Self {
            one_percent: f(DecayRate::OnePercent),
            three_quarters_percent: f(DecayRate::ThreeQuartersPercent),
            half_percent: f(DecayRate::HalfPercent),
            quarter_percent: f(DecayRate::QuarterPercent),
        }
    }

    pub fn get(&self, rate: DecayRate) -> f64 {
        match rate {
            DecayRate::OnePercent => self.one_percent,
            DecayRate::ThreeQuartersPercent => self.three_quarters_percent,
            DecayRate::HalfPercent => self.half_percent,
            DecayRate::QuarterPercent => self.quarter_percent,
        }
    }

    /// Values paired with their rate, in export column order
    pub fn iter(&self) -> impl Iterator<Item = (DecayRate, f64)> + '_ {
        DecayRate::ALL.into_iter().map(move |rate| (rate, self.get(rate)))
    }
}

// ============================================================================
// Trajectory
// ============================================================================

/// A single week of the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub date: NaiveDate,
    /// Projected weight in kg, full precision
    pub weight_kg: RateValues,
    /// Projected BMI, rounded to 2 decimals
    pub bmi: RateValues,
}

/// End-of-projection figures for one rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSummary {
    pub rate: DecayRate,
    pub final_weight_kg: f64,
    pub total_loss_kg: f64,
    pub final_bmi: f64,
}

/// Chronological projection for all four rates
///
/// Always holds `week_count + 1` points; index 0 is the starting weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightTrajectory {
    points: Vec<TrajectoryPoint>,
}

impl WeightTrajectory {
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of projected weeks (excludes the starting point)
    pub fn week_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Weight series for one rate
    pub fn weights(&self, rate: DecayRate) -> Vec<f64> {
        self.points.iter().map(|p| p.weight_kg.get(rate)).collect()
    }

    /// BMI series for one rate
    pub fn bmis(&self, rate: DecayRate) -> Vec<f64> {
        self.points.iter().map(|p| p.bmi.get(rate)).collect()
    }

    /// Final weight, total loss and final BMI per rate
    pub fn summary(&self) -> Vec<RateSummary> {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return Vec::new();
        };
        DecayRate::ALL
            .iter()
            .map(|&rate| RateSummary {
                rate,
                final_weight_kg: last.weight_kg.get(rate),
                total_loss_kg: first.weight_kg.get(rate) - last.weight_kg.get(rate),
                final_bmi: last.bmi.get(rate),
            })
            .collect()
    }

    pub fn into_points(self) -> Vec<TrajectoryPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a WeightTrajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Compounding weight series of length `week_count + 1`
pub fn decay_series(start_weight_kg: f64, rate: DecayRate, week_count: u32) -> Vec<f64> {
    let factor = rate.weekly_factor();
    let mut series = Vec::with_capacity(week_count as usize + 1);
    let mut current = start_weight_kg;
    series.push(current);
    for _ in 0..week_count {
        current *= factor;
        series.push(current);
    }
    series
}

/// First date of the projection
///
/// A start date equal to today (by calendar date) begins at today; any
/// other supplied date is honoured as given.
pub fn resolve_start_date(start_date: NaiveDate, today: NaiveDate) -> NaiveDate {
    if start_date == today {
        today
    } else {
        start_date
    }
}

/// Weekly dates of length `week_count + 1` beginning at `first`
pub fn date_series(first: NaiveDate, week_count: u32) -> CalcResult<Vec<NaiveDate>> {
    (0..=u64::from(week_count))
        .map(|week| {
            first
                .checked_add_days(Days::new(week * DAYS_PER_WEEK))
                .ok_or_else(|| {
                    ValidationError::new("start_date", "Starting date is too far in the future")
                })
        })
        .collect()
}

/// Project weight and BMI using the local calendar date as "today"
pub fn project(
    start_date: NaiveDate,
    week_count: u32,
    weight_kg: f64,
    height_m: f64,
) -> CalcResult<WeightTrajectory> {
    project_on(start_date, week_count, weight_kg, height_m, Local::now().date_naive())
}

/// Project weight and BMI against an explicit "today"
///
/// All inputs are validated before anything is computed.
pub fn project_on(
    start_date: NaiveDate,
    week_count: u32,
    weight_kg: f64,
    height_m: f64,
    today: NaiveDate,
) -> CalcResult<WeightTrajectory> {
    let profile = AnthropometricProfile::new(weight_kg, height_m)?;
    validate_week_count(week_count)?;
    let dates = date_series(resolve_start_date(start_date, today), week_count)?;
    Ok(build_trajectory(&profile, &dates, week_count))
}

fn build_trajectory(
    profile: &AnthropometricProfile,
    dates: &[NaiveDate],
    week_count: u32,
) -> WeightTrajectory {
    let series = DecayRate::ALL.map(|rate| decay_series(profile.weight_kg, rate, week_count));

    let points = dates
        .iter()
        .enumerate()
        .map(|(week, &date)| {
            let weight_kg = RateValues::from_fn(|rate| series[rate.index()][week]);
            let bmi = RateValues::from_fn(|rate| {
                round_to(
                    calculate_bmi(weight_kg.get(rate), profile.height_m),
                    TRAJECTORY_BMI_DECIMALS,
                )
            });
            TrajectoryPoint { date, weight_kg, bmi }
        })
        .collect();

    WeightTrajectory { points }
}
