//! Summary Payload - Structured handoff of a report to narrative consumers.
//!
//! The payload is derived from an already-computed `AnalysisReport`; nothing
//! is recomputed, so the narrative sees exactly the numbers the UI shows.
//! Dimensions without a computed test are listed under `unavailable` rather
//! than described.

use serde::{Deserialize, Serialize};

use super::{AnalysisReport, AnalysisStatus, Deviation, PackagingError, ReportSummary};

/// One evaluated dimension as handed to a narrative consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadAnalysis {
    pub name: String,
    pub status: AnalysisStatus,
    pub p_value: Option<f64>,
    pub effect_size: Option<f64>,
    pub sample_size: usize,
    pub deviations: Vec<Deviation>,
    pub interpretation: String,
}

/// A dimension omitted from the narrative, with the reason why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableDimension {
    pub name: String,
    pub status: AnalysisStatus,
    pub reason: String,
}

/// Everything a narrative generator needs about one intelligence run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub analyses: Vec<PayloadAnalysis>,
    pub unavailable: Vec<UnavailableDimension>,
    pub summary: ReportSummary,
    /// Fingerprint of the report this payload was built from.
    pub fingerprint: String,
}

impl SummaryPayload {
    /// Packages `report` without re-running any analysis.
    pub fn from_report(report: &AnalysisReport) -> Result<Self, PackagingError> {
        let mut analyses = Vec::new();
        let mut unavailable = Vec::new();

        for (name, result) in report.iter() {
            if result.status.is_evaluated() {
                analyses.push(PayloadAnalysis {
                    name: name.to_string(),
                    status: result.status,
                    p_value: result.p_value,
                    effect_size: result.effect_size,
                    sample_size: result.sample_size,
                    deviations: result.deviations.clone(),
                    interpretation: result.interpretation.clone(),
                });
            } else {
                let reason = match &result.error {
                    Some(message) => message.clone(),
                    None => format!(
                        "sample of {} employees is below the minimum for testing",
                        result.sample_size
                    ),
                };
                unavailable.push(UnavailableDimension {
                    name: name.to_string(),
                    status: result.status,
                    reason,
                });
            }
        }

        Ok(Self {
            analyses,
            unavailable,
            summary: report.summary(),
            fingerprint: report.fingerprint()?,
        })
    }

    /// Renders the payload as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PackagingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the payload as YAML.
    pub fn to_yaml(&self) -> Result<String, PackagingError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intelligence::{AnalysisResult, TestStatistics};

    fn sample_report() -> AnalysisReport {
        let stats = TestStatistics {
            chi_square: 14.2,
            p_value: 0.007,
            degrees_of_freedom: 4,
            effect_size: 0.11,
            sample_size: 550,
            category_count: 3,
        };
        let mut report = AnalysisReport::new();
        report.insert(
            "location".into(),
            AnalysisResult::evaluated("location", &stats, AnalysisStatus::Yellow, vec![], "Skewed."),
        );
        report.insert(
            "tenure".into(),
            AnalysisResult::insufficient_data("tenure", 4, "Not enough."),
        );
        report.insert(
            "manager".into(),
            AnalysisResult::error("manager", "division by zero"),
        );
        report
    }

    #[test]
    fn only_evaluated_dimensions_are_described() {
        let payload = SummaryPayload::from_report(&sample_report()).unwrap();
        assert_eq!(payload.analyses.len(), 1);
        assert_eq!(payload.analyses[0].name, "location");
        assert_eq!(payload.analyses[0].p_value, Some(0.007));
    }

    #[test]
    fn unavailable_dimensions_carry_reasons() {
        let payload = SummaryPayload::from_report(&sample_report()).unwrap();
        let names: Vec<_> = payload.unavailable.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["manager", "tenure"]);
        assert_eq!(payload.unavailable[0].reason, "division by zero");
        assert!(payload.unavailable[1].reason.contains("4 employees"));
    }

    #[test]
    fn payload_fingerprint_matches_report() {
        let report = sample_report();
        let payload = SummaryPayload::from_report(&report).unwrap();
        assert_eq!(payload.fingerprint, report.fingerprint().unwrap());
        assert_eq!(payload.summary, report.summary());
    }

    #[test]
    fn renders_json_and_yaml() {
        let payload = SummaryPayload::from_report(&sample_report()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(json["analyses"][0]["status"], "yellow");
        assert_eq!(json["unavailable"][1]["status"], "insufficient_data");

        let yaml = payload.to_yaml().unwrap();
        assert!(yaml.contains("fingerprint:"));
        assert!(yaml.contains("name: location"));
    }
}
