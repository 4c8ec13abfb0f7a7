//! BuildSummaryPayloadHandler - Packages one run for narrative generation.

use std::sync::Arc;

use tracing::debug;

use crate::domain::intelligence::{AnalysisRegistry, PackagingError, SummaryPayload};

use super::{RunIntelligenceCommand, RunIntelligenceHandler};

/// Handler producing the narrative payload.
///
/// Runs the registry exactly once and derives the payload from that report.
#[derive(Debug, Clone)]
pub struct BuildSummaryPayloadHandler {
    runner: RunIntelligenceHandler,
}

impl BuildSummaryPayloadHandler {
    pub fn new(registry: Arc<AnalysisRegistry>) -> Self {
        Self {
            runner: RunIntelligenceHandler::new(registry),
        }
    }

    pub fn handle(&self, cmd: RunIntelligenceCommand) -> Result<SummaryPayload, PackagingError> {
        let outcome = self.runner.handle(cmd);
        let payload = SummaryPayload::from_report(&outcome.report)?;

        debug!(
            analyses = payload.analyses.len(),
            unavailable = payload.unavailable.len(),
            fingerprint = %payload.fingerprint,
            "Summary payload built"
        );

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::Employee;
    use crate::domain::foundation::{EmployeeId, GridPosition};
    use crate::domain::intelligence::AnalysisThresholds;

    fn registry() -> Arc<AnalysisRegistry> {
        Arc::new(AnalysisRegistry::standard(&AnalysisThresholds::default()))
    }

    #[test]
    fn empty_snapshot_lists_every_dimension_as_unavailable() {
        let payload = BuildSummaryPayloadHandler::new(registry())
            .handle(RunIntelligenceCommand::default())
            .unwrap();
        assert!(payload.analyses.is_empty());
        assert_eq!(payload.unavailable.len(), 6);
    }

    #[test]
    fn payload_fingerprint_matches_direct_run() {
        let employees: Vec<_> = (0..40)
            .map(|i| {
                Employee::new(EmployeeId::new(format!("E{}", i)).unwrap())
                    .with_position(GridPosition::try_new((i % 9) as u8 + 1).unwrap())
                    .with_function(if i < 20 { "Sales" } else { "Engineering" })
            })
            .collect();

        let direct = RunIntelligenceHandler::new(registry()).handle(RunIntelligenceCommand {
            employees: employees.clone(),
        });
        let payload = BuildSummaryPayloadHandler::new(registry())
            .handle(RunIntelligenceCommand { employees })
            .unwrap();

        assert_eq!(payload.fingerprint, direct.report.fingerprint().unwrap());
        assert_eq!(payload.analyses.len(), direct.summary.evaluated());
    }
}
