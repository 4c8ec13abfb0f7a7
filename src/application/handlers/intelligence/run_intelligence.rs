//! RunIntelligenceHandler - Runs every registered analysis over a snapshot.

use std::sync::Arc;

use tracing::{info, info_span};

use crate::domain::employee::Employee;
use crate::domain::intelligence::{
    run_all_analyses, AnalysisRegistry, AnalysisReport, ReportSummary,
};

/// Command to analyze one employee snapshot.
#[derive(Debug, Clone, Default)]
pub struct RunIntelligenceCommand {
    pub employees: Vec<Employee>,
}

/// Report plus its aggregate summary.
#[derive(Debug, Clone, PartialEq)]
pub struct IntelligenceOutcome {
    pub report: AnalysisReport,
    pub summary: ReportSummary,
}

/// Handler for intelligence runs.
///
/// Holds the registry composed at startup; every run shares it read-only.
#[derive(Debug, Clone)]
pub struct RunIntelligenceHandler {
    registry: Arc<AnalysisRegistry>,
}

impl RunIntelligenceHandler {
    pub fn new(registry: Arc<AnalysisRegistry>) -> Self {
        Self { registry }
    }

    /// Runs all analyses. Never fails: per-dimension problems are statuses
    /// inside the report.
    pub fn handle(&self, cmd: RunIntelligenceCommand) -> IntelligenceOutcome {
        let span = info_span!(
            "intelligence_run",
            employees = cmd.employees.len(),
            dimensions = self.registry.len()
        );
        let _enter = span.enter();

        let report = run_all_analyses(&cmd.employees, &self.registry);
        let summary = report.summary();

        info!(
            green = summary.green,
            yellow = summary.yellow,
            red = summary.red,
            insufficient_data = summary.insufficient_data,
            error = summary.error,
            quality_score = ?summary.quality_score,
            "Intelligence run complete"
        );

        IntelligenceOutcome { report, summary }
    }

    /// Registered dimension names, in registration order.
    pub fn list_dimensions(&self) -> Vec<String> {
        self.registry.names().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EmployeeId, GridPosition};
    use crate::domain::intelligence::{AnalysisStatus, AnalysisThresholds};

    fn handler() -> RunIntelligenceHandler {
        RunIntelligenceHandler::new(Arc::new(AnalysisRegistry::standard(
            &AnalysisThresholds::default(),
        )))
    }

    #[test]
    fn empty_command_yields_insufficient_report() {
        let outcome = handler().handle(RunIntelligenceCommand::default());
        assert_eq!(outcome.report.len(), 6);
        assert_eq!(outcome.summary.insufficient_data, 6);
        assert!(outcome.summary.quality_score.is_none());
    }

    #[test]
    fn summary_matches_report() {
        let employees = (0..60)
            .map(|i| {
                Employee::new(EmployeeId::new(format!("E{}", i)).unwrap())
                    .with_position(GridPosition::try_new((i % 9) as u8 + 1).unwrap())
                    .with_location(if i % 2 == 0 { "Austin" } else { "Berlin" })
            })
            .collect();

        let outcome = handler().handle(RunIntelligenceCommand { employees });
        assert_eq!(outcome.summary, outcome.report.summary());
        assert!(outcome.report.get("location").unwrap().status.is_evaluated());
        assert_eq!(
            outcome.report.get("function").unwrap().status,
            AnalysisStatus::InsufficientData
        );
    }

    #[test]
    fn lists_registered_dimensions() {
        let names = handler().list_dimensions();
        assert_eq!(names.first().map(String::as_str), Some("location"));
        assert_eq!(names.last().map(String::as_str), Some("per_level_distribution"));
    }
}
