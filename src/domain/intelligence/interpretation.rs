//! Interpretation Generator - Deterministic one-sentence summaries.

use super::{AnalysisStatus, Deviation};

/// Template-based summaries of a dimension's outcome.
pub struct InterpretationGenerator;

impl InterpretationGenerator {
    /// Renders a single sentence for the UI and downstream summarizers.
    ///
    /// # Edge Cases
    /// - Non-green status without deviations: diffuse-skew message
    /// - More than one deviation: the strongest is described, the rest counted
    pub fn summarize(dimension: &str, status: AnalysisStatus, deviations: &[Deviation]) -> String {
        match status {
            AnalysisStatus::InsufficientData => {
                return format!("Not enough employees to assess skew for {}.", dimension);
            }
            AnalysisStatus::Error => {
                return format!("Analysis unavailable for {}.", dimension);
            }
            _ => {}
        }

        let Some(strongest) = deviations.first() else {
            return match status {
                AnalysisStatus::Green => format!("No significant skew detected for {}.", dimension),
                _ => format!(
                    "The {} distribution is skewed but no single group stands out.",
                    dimension
                ),
            };
        };

        let lead = Self::describe(strongest);
        match deviations.len() {
            1 => format!("{}.", lead),
            2 => format!("{}, and 1 other group also deviates.", lead),
            n => format!("{}, and {} other groups also deviate.", lead, n - 1),
        }
    }

    fn describe(deviation: &Deviation) -> String {
        format!(
            "{} shows {:.1}% {} vs {:.1}% baseline (z={:.2}, {} deviation)",
            deviation.category,
            deviation.observed_rate * 100.0,
            deviation.tier.performer_label(),
            deviation.baseline_rate * 100.0,
            deviation.z_score,
            deviation.magnitude
        )
    }
}
