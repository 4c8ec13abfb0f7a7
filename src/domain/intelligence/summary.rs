//! Report Summary - Status counts and an overall quality score.

use serde::{Deserialize, Serialize};

use super::{AnalysisReport, AnalysisStatus};

/// Aggregate view of one report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
    pub insufficient_data: usize,
    pub error: usize,
    pub total_deviations: usize,
    /// 0-100, where 100 means every evaluated dimension is green.
    /// `None` when no dimension could be evaluated.
    pub quality_score: Option<u8>,
}

impl ReportSummary {
    /// Counts statuses across every dimension in `report`.
    ///
    /// # Edge Cases
    /// - Empty report: all counts zero, no quality score
    /// - Only insufficient/error results: no quality score
    pub fn from_report(report: &AnalysisReport) -> Self {
        let mut summary = Self::default();
        for (_, result) in report.iter() {
            summary.total += 1;
            summary.total_deviations += result.deviations.len();
            match result.status {
                AnalysisStatus::Green => summary.green += 1,
                AnalysisStatus::Yellow => summary.yellow += 1,
                AnalysisStatus::Red => summary.red += 1,
                AnalysisStatus::InsufficientData => summary.insufficient_data += 1,
                AnalysisStatus::Error => summary.error += 1,
            }
        }
        summary.quality_score = summary.compute_quality_score();
        summary
    }

    /// Number of dimensions with a computed test.
    pub fn evaluated(&self) -> usize {
        self.green + self.yellow + self.red
    }

    /// Returns true if any dimension is red.
    pub fn has_red(&self) -> bool {
        self.red > 0
    }

    fn compute_quality_score(&self) -> Option<u8> {
        let evaluated = self.evaluated();
        if evaluated == 0 {
            return None;
        }
        let weighted = self.green as f64 + 0.5 * self.yellow as f64;
        let score = (100.0 * weighted / evaluated as f64).round();
        Some(score.clamp(0.0, 100.0) as u8)
    }
}
