//! Severity Classifier - Maps test statistics and deviations to a traffic light.

use super::{AnalysisStatus, AnalysisThresholds, Deviation, TestOutcome};

/// Classifies one dimension's outcome as green, yellow, red or insufficient.
#[derive(Debug, Clone, Copy)]
pub struct SeverityClassifier {
    yellow_p_value: f64,
    red_p_value: f64,
    medium_effect_size: f64,
}

impl SeverityClassifier {
    /// Creates a classifier from explicit cutoffs.
    pub fn new(yellow_p_value: f64, red_p_value: f64, medium_effect_size: f64) -> Self {
        Self {
            yellow_p_value,
            red_p_value,
            medium_effect_size,
        }
    }

    /// Creates a classifier from shared thresholds.
    pub fn from_thresholds(thresholds: &AnalysisThresholds) -> Self {
        Self::new(
            thresholds.yellow_p_value,
            thresholds.red_p_value,
            thresholds.medium_effect_size,
        )
    }

    /// Classifies a test outcome, short-circuiting insufficient samples.
    pub fn classify_outcome(&self, outcome: &TestOutcome, deviations: &[Deviation]) -> AnalysisStatus {
        match outcome {
            TestOutcome::InsufficientData { .. } => AnalysisStatus::InsufficientData,
            TestOutcome::Evaluated(stats) => self.classify(stats.p_value, stats.effect_size, deviations),
        }
    }

    /// Classifies evaluated statistics.
    ///
    /// Rules are applied in order:
    /// 1. Red: significant at the red level with at least a medium effect,
    ///    or a severe deviation on a significant table
    /// 2. Yellow: significant at the yellow level, or any deviation at all
    /// 3. Green: otherwise
    ///
    /// Red therefore always implies `p <= yellow_p_value`, and green never
    /// carries a deviation.
    pub fn classify(&self, p_value: f64, effect_size: f64, deviations: &[Deviation]) -> AnalysisStatus {
        let significant = p_value <= self.yellow_p_value;
        let has_severe = deviations.iter().any(Deviation::is_severe);

        if (p_value <= self.red_p_value && effect_size >= self.medium_effect_size)
            || (has_severe && significant)
        {
            return AnalysisStatus::Red;
        }
        if significant || !deviations.is_empty() {
            return AnalysisStatus::Yellow;
        }
        AnalysisStatus::Green
    }
}
