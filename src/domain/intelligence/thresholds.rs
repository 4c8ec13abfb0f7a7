//! Tunable cutoffs shared by the detector and the classifier.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Tier;

/// Default minimum dimension sample before any test is attempted.
pub const DEFAULT_MIN_SAMPLE_SIZE: usize = 10;

/// Default minimum category size before a category is evaluated for deviations.
pub const DEFAULT_MIN_CATEGORY_SIZE: usize = 10;

/// Thresholds for sample guards, deviation magnitude and traffic-light status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisThresholds {
    /// Dimension sample size below which the result is `insufficient_data`.
    pub min_sample_size: usize,
    /// Category size below which a category is never evaluated for deviations.
    pub min_category_size: usize,
    /// |z| at or above which a deviation is moderate.
    pub moderate_z: f64,
    /// |z| at or above which a deviation is severe.
    pub severe_z: f64,
    /// p-value at or below which a dimension is at least yellow.
    pub yellow_p_value: f64,
    /// p-value at or below which a medium effect turns a dimension red.
    pub red_p_value: f64,
    /// Effect size separating small from medium skew.
    pub medium_effect_size: f64,
    /// Tier whose rate is compared in deviation detection.
    pub reference_tier: Tier,
}

impl Default for AnalysisThresholds {
    fn default() -> Self {
        Self {
            min_sample_size: DEFAULT_MIN_SAMPLE_SIZE,
            min_category_size: DEFAULT_MIN_CATEGORY_SIZE,
            moderate_z: 2.0,
            severe_z: 3.0,
            yellow_p_value: 0.05,
            red_p_value: 0.01,
            medium_effect_size: 0.3,
            reference_tier: Tier::High,
        }
    }
}
