//! Rounding and display formatting helpers
//!
//! Rounding is a presentation step only. Compounding always runs at full
//! precision and values are rounded when they are derived for output.

use chrono::NaiveDate;

/// Decimal places for the standalone BMI classification
pub const CLASSIFICATION_BMI_DECIMALS: u32 = 3;

/// Decimal places for BMI values inside a trajectory
pub const TRAJECTORY_BMI_DECIMALS: u32 = 2;

/// Day-first date format used in tables and exports
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Round to a fixed number of decimal places (half away from zero)
///
/// Values too large to scale are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Format a date as `dd/mm/YYYY`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
