//! BMI calculation and classification
//!
//! Provides the BMI formula, the fixed four-band category table and the
//! validated `classify` entry point used by every presentation surface.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Metric Only**: Weight in kilograms, height in meters
//! 3. **Validate First**: Invalid profiles are rejected before any division

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CalcResult;
use crate::format::{round_to, CLASSIFICATION_BMI_DECIMALS};
use crate::validation::{validate_height_m, validate_weight_kg};

// ============================================================================
// Anthropometric Profile
// ============================================================================

/// Weight and height for a single calculation
///
/// Only constructed through [`AnthropometricProfile::new`], so a profile in
/// hand always holds validated values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnthropometricProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
}

impl AnthropometricProfile {
    /// Build a profile, rejecting values outside the accepted bounds
    pub fn new(weight_kg: f64, height_m: f64) -> CalcResult<Self> {
        validate_weight_kg(weight_kg)?;
        validate_height_m(height_m)?;
        Ok(Self { weight_kg, height_m })
    }

    /// Unrounded BMI for this profile
    pub fn bmi(&self) -> f64 {
        calculate_bmi(self.weight_kg, self.height_m)
    }
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// Highest BMI still classed as Underweight
pub const UNDERWEIGHT_MAX_BMI: f64 = 18.5;

/// Lowest BMI classed as Overweight
pub const OVERWEIGHT_MIN_BMI: f64 = 25.0;

/// Lowest BMI classed as Obesity
pub const OBESITY_MIN_BMI: f64 = 30.0;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// All categories from lowest to highest BMI
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obesity,
    ];

    /// Whether `bmi` falls inside this category's band
    ///
    /// Underweight closes at 18.5; Overweight and Obesity open at 25 and 30.
    pub fn contains(&self, bmi: f64) -> bool {
        match self {
            BmiCategory::Underweight => bmi <= UNDERWEIGHT_MAX_BMI,
            BmiCategory::Normal => bmi > UNDERWEIGHT_MAX_BMI && bmi < OVERWEIGHT_MIN_BMI,
            BmiCategory::Overweight => bmi >= OVERWEIGHT_MIN_BMI && bmi < OBESITY_MIN_BMI,
            BmiCategory::Obesity => bmi >= OBESITY_MIN_BMI,
        }
    }

    /// Short category name
    pub fn name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    /// Range as shown in the BMI reference table
    pub fn range_label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "<=18.5",
            BmiCategory::Normal => "18.5–24.9",
            BmiCategory::Overweight => "25–29.9",
            BmiCategory::Obesity => ">=30",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value rounded to 3 decimals
    pub value: f64,
    /// BMI category
    pub category: BmiCategory,
}

/// One row of the BMI reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRangeInfo {
    pub category: BmiCategory,
    pub label: String,
    pub values: String,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// No validation happens here; callers holding raw input go through
/// [`classify`] or [`AnthropometricProfile::new`].
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
///
/// The bands cover every ordered value; NaN falls through to Obesity.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    BmiCategory::ALL
        .into_iter()
        .find(|category| category.contains(bmi))
        .unwrap_or(BmiCategory::Obesity)
}

/// Validate inputs, compute BMI to 3 decimals and classify it
pub fn classify(weight_kg: f64, height_m: f64) -> CalcResult<BmiResult> {
    let profile = AnthropometricProfile::new(weight_kg, height_m)?;
    Ok(classify_profile(&profile))
}

/// Classify an already validated profile
pub fn classify_profile(profile: &AnthropometricProfile) -> BmiResult {
    let value = round_to(profile.bmi(), CLASSIFICATION_BMI_DECIMALS);
    BmiResult {
        value,
        category: classify_bmi(value),
    }
}

/// The BMI reference table, lowest band first
pub fn bmi_reference_table() -> Vec<BmiRangeInfo> {
    BmiCategory::ALL
        .iter()
        .map(|category| BmiRangeInfo {
            category: *category,
            label: category.description().to_string(),
            values: category.range_label().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 1.75m -> BMI ~22.86
        let bmi = calculate_bmi(70.0, 1.75);
        assert!((bmi - 22.857).abs() < 0.001);
    }

    #[rstest]
    #[case(18.4999, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Underweight)]
    #[case(18.5001, BmiCategory::Normal)]
    #[case(24.9999, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.9999, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obesity)]
    #[case(45.0, BmiCategory::Obesity)]
    fn test_bmi_category_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_classify_reference_example() {
        let result = classify(100.0, 1.75).unwrap();
        assert_eq!(result.value, 32.653);
        assert_eq!(result.category, BmiCategory::Obesity);
    }

    #[test]
    fn test_classify_rounds_before_classifying() {
        // 18.50049... rounds to 18.5 which is still Underweight
        let height = 1.0;
        let result = classify(18.500_49, height).unwrap();
        assert_eq!(result.value, 18.5);
        assert_eq!(result.category, BmiCategory::Underweight);
    }

    #[rstest]
    #[case(100.0, 0.0)]
    #[case(0.0, 1.75)]
    #[case(-70.0, 1.75)]
    #[case(70.0, -1.75)]
    #[case(f64::NAN, 1.75)]
    fn test_classify_rejects_invalid_profile(#[case] weight: f64, #[case] height: f64) {
        assert!(classify(weight, height).is_err());
    }

    #[rstest]
    #[case(1e306, 1.0, "weight_kg")]
    #[case(70.0, 1e-200, "height_m")]
    #[case(5e-324, 1.75, "weight_kg")]
    fn test_classify_rejects_values_that_overflow_bmi(
        #[case] weight: f64,
        #[case] height: f64,
        #[case] field: &str,
    ) {
        assert_eq!(classify(weight, height).unwrap_err().field, field);
    }

    #[test]
    fn test_extreme_accepted_profile_has_finite_bmi() {
        let result = classify(500.0, 0.5).unwrap();
        assert_eq!(result.value, 2000.0);
        assert!(result.value.is_finite());
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("null"));
    }

    #[rstest]
    #[case(BmiCategory::Underweight, 18.5, true)]
    #[case(BmiCategory::Normal, 18.5, false)]
    #[case(BmiCategory::Normal, 24.9999, true)]
    #[case(BmiCategory::Overweight, 25.0, true)]
    #[case(BmiCategory::Overweight, 30.0, false)]
    #[case(BmiCategory::Obesity, 30.0, true)]
    fn test_category_band_edges(
        #[case] category: BmiCategory,
        #[case] bmi: f64,
        #[case] inside: bool,
    ) {
        assert_eq!(category.contains(bmi), inside);
    }

    #[test]
    fn test_zero_height_reports_height_field() {
        let err = classify(100.0, 0.0).unwrap_err();
        assert_eq!(err.field, "height_m");
    }

    #[test]
    fn test_reference_table() {
        let table = bmi_reference_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table[0].label, "Underweight");
        assert_eq!(table[0].values, "<=18.5");
        assert_eq!(table[1].label, "Normal weight");
        assert_eq!(table[3].values, ">=30");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(BmiCategory::Normal.to_string(), "Normal");
        assert_eq!(
            serde_json::to_string(&BmiCategory::Overweight).unwrap(),
            "\"overweight\""
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: every BMI lands in exactly one band
        #[test]
        fn prop_categories_are_exclusive(bmi in -100.0f64..200.0) {
            let matching = BmiCategory::ALL
                .iter()
                .filter(|c| c.contains(bmi))
                .count();
            prop_assert_eq!(matching, 1);
        }

        /// Property: classification matches the literal threshold table
        #[test]
        fn prop_classification_matches_thresholds(bmi in -100.0f64..200.0) {
            let expected = if bmi <= 18.5 {
                BmiCategory::Underweight
            } else if bmi < 25.0 {
                BmiCategory::Normal
            } else if bmi < 30.0 {
                BmiCategory::Overweight
            } else {
                BmiCategory::Obesity
            };
            prop_assert_eq!(classify_bmi(bmi), expected);
        }

        /// Property: heavier weight = higher BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 40.0f64..100.0,
            weight2 in 100.0f64..200.0,
            height in 1.4f64..2.2
        ) {
            prop_assert!(calculate_bmi(weight2, height) > calculate_bmi(weight1, height));
        }

        /// Property: any valid profile classifies successfully
        #[test]
        fn prop_valid_profile_classifies(weight in 1.0f64..300.0, height in 0.5f64..2.5) {
            let result = classify(weight, height);
            prop_assert!(result.is_ok());
            prop_assert!(result.unwrap().value > 0.0);
        }
    }
}
