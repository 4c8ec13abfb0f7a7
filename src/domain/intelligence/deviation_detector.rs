//! Deviation Detector - Flags categories whose reference-tier rate differs
//! from baseline, using a one-sample z-test for proportions.

use std::collections::BTreeMap;

use crate::domain::foundation::Tier;

use super::{AnalysisThresholds, Baseline, Deviation, DeviationMagnitude, Direction, TierHistogram};

/// Finds over- and under-represented categories within one dimension.
#[derive(Debug, Clone, Copy)]
pub struct DeviationDetector {
    min_category_size: usize,
    moderate_z: f64,
    severe_z: f64,
    reference_tier: Tier,
}

impl DeviationDetector {
    /// Creates a detector from explicit cutoffs.
    pub fn new(min_category_size: usize, moderate_z: f64, severe_z: f64, reference_tier: Tier) -> Self {
        Self {
            min_category_size,
            moderate_z,
            severe_z,
            reference_tier,
        }
    }

    /// Creates a detector from shared thresholds.
    pub fn from_thresholds(thresholds: &AnalysisThresholds) -> Self {
        Self::new(
            thresholds.min_category_size,
            thresholds.moderate_z,
            thresholds.severe_z,
            thresholds.reference_tier,
        )
    }

    /// Returns deviations sorted by |z| descending, ties by category name.
    ///
    /// # Algorithm
    /// z = (p_cat - p_base) / sqrt(p_base * (1 - p_base) / n_cat)
    ///
    /// # Edge Cases
    /// - Category below `min_category_size`: never evaluated
    /// - Baseline rate of exactly 0 or 1: no z-score exists, nothing flagged
    /// - |z| below the moderate cutoff: not a deviation
    pub fn find_deviations(
        &self,
        categories: &BTreeMap<String, TierHistogram>,
        baseline: &Baseline,
    ) -> Vec<Deviation> {
        let baseline_rate = baseline.share(self.reference_tier);
        if baseline_rate <= 0.0 || baseline_rate >= 1.0 {
            return Vec::new();
        }

        let mut deviations: Vec<Deviation> = categories
            .iter()
            .filter(|(_, histogram)| {
                let n = histogram.total();
                n > 0 && n >= self.min_category_size
            })
            .filter_map(|(category, histogram)| self.evaluate(category, histogram, baseline_rate))
            .collect();

        deviations.sort_by(|a, b| {
            b.z_score
                .abs()
                .total_cmp(&a.z_score.abs())
                .then_with(|| a.category.cmp(&b.category))
        });
        deviations
    }

    fn evaluate(&self, category: &str, histogram: &TierHistogram, baseline_rate: f64) -> Option<Deviation> {
        let sample_size = histogram.total();
        let observed_count = histogram.count(self.reference_tier);
        let observed_rate = observed_count as f64 / sample_size as f64;

        let standard_error = (baseline_rate * (1.0 - baseline_rate) / sample_size as f64).sqrt();
        let z_score = (observed_rate - baseline_rate) / standard_error;
        if !z_score.is_finite() {
            return None;
        }

        let magnitude = self.magnitude(z_score)?;
        Some(Deviation {
            category: category.to_string(),
            tier: self.reference_tier,
            observed_rate,
            baseline_rate,
            z_score,
            direction: if z_score > 0.0 { Direction::Over } else { Direction::Under },
            magnitude,
            sample_size,
            observed_count,
        })
    }

    fn magnitude(&self, z_score: f64) -> Option<DeviationMagnitude> {
        let z = z_score.abs();
        if z >= self.severe_z {
            Some(DeviationMagnitude::Severe)
        } else if z >= self.moderate_z {
            Some(DeviationMagnitude::Moderate)
        } else {
            None
        }
    }
}
