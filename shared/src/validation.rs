//! Input validation functions
//!
//! Every calculation entry point runs these checks before touching any
//! numbers, so a rejected input never produces a partial result.

use chrono::NaiveDate;

use crate::errors::{CalcResult, ValidationError};

/// Smallest projection horizon, in weeks
pub const MIN_WEEK_COUNT: u32 = 1;

/// Largest projection horizon, in weeks
pub const MAX_WEEK_COUNT: u32 = 400;

/// Lightest accepted body weight, in kg
pub const MIN_WEIGHT_KG: f64 = 1.0;

/// Heaviest accepted body weight, in kg
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Shortest accepted height, in meters
pub const MIN_HEIGHT_M: f64 = 0.5;

/// Tallest accepted height, in meters
pub const MAX_HEIGHT_M: f64 = 2.5;

/// Accepted start date format (ISO 8601 calendar date)
pub const START_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> CalcResult<()> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err(ValidationError::new("weight_kg", "Weight must be a valid number"));
    }
    if weight_kg <= 0.0 {
        return Err(ValidationError::new("weight_kg", "Weight must be greater than 0 kg"));
    }
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(ValidationError::new(
            "weight_kg",
            format!("Weight must be between {} and {} kg", MIN_WEIGHT_KG, MAX_WEIGHT_KG),
        ));
    }
    Ok(())
}

/// Validate height value (in meters)
///
/// The lower bound keeps `height²` well away from zero, so BMI is always finite.
pub fn validate_height_m(height_m: f64) -> CalcResult<()> {
    if height_m.is_nan() || height_m.is_infinite() {
        return Err(ValidationError::new("height_m", "Height must be a valid number"));
    }
    if height_m <= 0.0 {
        return Err(ValidationError::new("height_m", "Height must be greater than 0 m"));
    }
    if !(MIN_HEIGHT_M..=MAX_HEIGHT_M).contains(&height_m) {
        return Err(ValidationError::new(
            "height_m",
            format!("Height must be between {} and {} m", MIN_HEIGHT_M, MAX_HEIGHT_M),
        ));
    }
    Ok(())
}

/// Validate projection horizon
pub fn validate_week_count(week_count: u32) -> CalcResult<()> {
    if week_count < MIN_WEEK_COUNT {
        return Err(ValidationError::new(
            "week_count",
            format!("Number of weeks must be at least {}", MIN_WEEK_COUNT),
        ));
    }
    if week_count > MAX_WEEK_COUNT {
        return Err(ValidationError::new(
            "week_count",
            format!("Number of weeks must be at most {}", MAX_WEEK_COUNT),
        ));
    }
    Ok(())
}

/// Parse a start date supplied as `YYYY-MM-DD`
pub fn parse_start_date(raw: &str) -> CalcResult<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("start_date", "Starting date cannot be empty"));
    }
    NaiveDate::parse_from_str(trimmed, START_DATE_FORMAT).map_err(|_| {
        ValidationError::new(
            "start_date",
            format!("Invalid date '{}', expected YYYY-MM-DD", trimmed),
        )
    })
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" | "weight_kg" => "Weight",
        "height" | "height_m" => "Height",
        "week_count" => "Number of Weeks",
        "start_date" => "Starting Date",
        _ => field_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(MIN_WEIGHT_KG).is_ok());
        assert!(validate_weight_kg(MAX_WEIGHT_KG).is_ok());
        assert!(validate_weight_kg(0.0).is_err());
        assert!(validate_weight_kg(0.5).is_err());
        assert!(validate_weight_kg(5e-324).is_err());
        assert!(validate_weight_kg(1e306).is_err());
        assert!(validate_weight_kg(-5.0).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height_m() {
        assert!(validate_height_m(1.75).is_ok());
        assert!(validate_height_m(MIN_HEIGHT_M).is_ok());
        assert!(validate_height_m(MAX_HEIGHT_M).is_ok());
        assert!(validate_height_m(0.0).is_err());
        assert!(validate_height_m(1e-200).is_err());
        assert!(validate_height_m(3.0).is_err());
        assert!(validate_height_m(-1.75).is_err());
        assert!(validate_height_m(f64::NAN).is_err());
        assert!(validate_height_m(f64::NEG_INFINITY).is_err());

        let err = validate_height_m(0.0).unwrap_err();
        assert_eq!(err.field, "height_m");
    }

    #[test]
    fn test_validate_week_count() {
        assert!(validate_week_count(1).is_ok());
        assert!(validate_week_count(13).is_ok());
        assert!(validate_week_count(400).is_ok());
        assert!(validate_week_count(0).is_err());
        assert!(validate_week_count(401).is_err());
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(
            parse_start_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            parse_start_date(" 2024-03-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_start_date("").is_err());
        assert!(parse_start_date("01/03/2024").is_err());
        assert!(parse_start_date("2024-02-30").is_err());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("weight_kg"), "Weight");
        assert_eq!(get_field_display_label("height_m"), "Height");
        assert_eq!(get_field_display_label("week_count"), "Number of Weeks");
        assert_eq!(get_field_display_label("start_date"), "Starting Date");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_bounded_weight_is_valid(weight in MIN_WEIGHT_KG..=MAX_WEIGHT_KG) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_tiny_positive_weight_is_invalid(weight in 0.0f64..MIN_WEIGHT_KG) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_tiny_positive_height_is_invalid(height in f64::MIN_POSITIVE..MIN_HEIGHT_M) {
            let err = validate_height_m(height).unwrap_err();
            prop_assert_eq!(err.field, "height_m");
        }

        #[test]
        fn prop_non_positive_height_is_invalid(height in -10.0f64..=0.0) {
            prop_assert!(validate_height_m(height).is_err());
        }

        #[test]
        fn prop_week_count_range(weeks in MIN_WEEK_COUNT..=MAX_WEEK_COUNT) {
            prop_assert!(validate_week_count(weeks).is_ok());
        }
    }
}
