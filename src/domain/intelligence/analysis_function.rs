//! Analysis Function - The per-dimension template composing test, detector,
//! classifier and interpretation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::domain::employee::{Dimension, Employee};

use super::{
    AnalysisError, AnalysisResult, AnalysisStatus, AnalysisThresholds, Baseline, ContingencyTable,
    DeviationDetector, InterpretationGenerator, PositionHistogram, SeverityClassifier,
    StatisticalTest, TestOutcome, TierHistogram,
};

/// Anything that turns an employee snapshot into one dimension's result.
///
/// Returning `Err` is the Rust analogue of raising: the registry converts it
/// into an `error` status for that dimension only. Plain closures with the
/// matching signature are analysis functions too.
pub trait AnalysisFunction: Send + Sync {
    fn run(&self, employees: &[Employee]) -> Result<AnalysisResult, AnalysisError>;
}

impl<F> AnalysisFunction for F
where
    F: Fn(&[Employee]) -> Result<AnalysisResult, AnalysisError> + Send + Sync,
{
    fn run(&self, employees: &[Employee]) -> Result<AnalysisResult, AnalysisError> {
        self(employees)
    }
}

/// Reference distribution a dimension's categories are compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineStrategy {
    /// Headcount-weighted tier shares of the whole sample.
    #[default]
    CompanyWide,
    /// Every job level in the sample weighs the same, so large levels do not
    /// dominate the reference. Falls back to company-wide when no employee in
    /// the sample has a level.
    LevelNormalized,
}

/// Per-category histograms for one dimension.
#[derive(Debug, Clone, Default)]
struct Partition {
    categories: BTreeMap<String, PositionHistogram>,
    levels: BTreeMap<String, TierHistogram>,
}

impl Partition {
    fn category_tiers(&self) -> BTreeMap<String, TierHistogram> {
        self.categories
            .iter()
            .map(|(category, histogram)| (category.clone(), histogram.tiers()))
            .collect()
    }
}

/// One parameterized analysis: a grouping key plus a baseline strategy.
///
/// The six built-in dimensions are all instances of this template.
#[derive(Debug, Clone)]
pub struct DimensionAnalysis {
    name: String,
    dimension: Dimension,
    baseline: BaselineStrategy,
    thresholds: AnalysisThresholds,
}

impl DimensionAnalysis {
    /// Creates an analysis named after its dimension.
    pub fn new(dimension: Dimension, baseline: BaselineStrategy, thresholds: AnalysisThresholds) -> Self {
        Self {
            name: dimension.name().to_string(),
            dimension,
            baseline,
            thresholds,
        }
    }

    /// Overrides the result name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn baseline_strategy(&self) -> BaselineStrategy {
        self.baseline
    }

    /// Runs the analysis. Never fails: computation errors become an
    /// `error` result.
    pub fn analyze(&self, employees: &[Employee]) -> AnalysisResult {
        match self.compute(employees) {
            Ok(result) => result,
            Err(err) => {
                warn!(dimension = %self.name, error = %err, "Dimension analysis failed");
                AnalysisResult::error(&self.name, err.to_string())
            }
        }
    }

    fn compute(&self, employees: &[Employee]) -> Result<AnalysisResult, AnalysisError> {
        let partition = self.partition(employees)?;
        let categories = partition.category_tiers();
        let table = ContingencyTable::from_groups(&categories);

        let test = StatisticalTest::new(self.thresholds.min_sample_size);
        let stats = if table.is_empty() {
            None
        } else {
            let baseline = self.baseline(&table, &partition)?;
            match test.evaluate(&table, &baseline)? {
                TestOutcome::Evaluated(stats) => Some((stats, baseline)),
                TestOutcome::InsufficientData { .. } => None,
            }
        };

        let Some((stats, baseline)) = stats else {
            let sample_size = table.grand_total();
            debug!(dimension = %self.name, sample_size, "Insufficient data for dimension");
            return Ok(AnalysisResult::insufficient_data(
                &self.name,
                sample_size,
                InterpretationGenerator::summarize(&self.name, AnalysisStatus::InsufficientData, &[]),
            ));
        };

        let deviations = DeviationDetector::from_thresholds(&self.thresholds)
            .find_deviations(&categories, &baseline);
        let status = SeverityClassifier::from_thresholds(&self.thresholds).classify(
            stats.p_value,
            stats.effect_size,
            &deviations,
        );
        let interpretation = InterpretationGenerator::summarize(&self.name, status, &deviations);

        debug!(
            dimension = %self.name,
            sample_size = stats.sample_size,
            p_value = stats.p_value,
            effect_size = stats.effect_size,
            deviations = deviations.len(),
            status = %status,
            "Dimension analyzed"
        );

        Ok(AnalysisResult::evaluated(
            &self.name,
            &stats,
            status,
            deviations,
            interpretation,
        ))
    }

    /// Groups placed employees by the dimension's key, discarding nulls.
    fn partition(&self, employees: &[Employee]) -> Result<Partition, AnalysisError> {
        let mut partition = Partition::default();
        for employee in employees {
            let (Some(position), Some(key)) = (employee.position, self.dimension.key(employee)) else {
                continue;
            };
            if key.chars().any(char::is_control) {
                return Err(AnalysisError::MalformedCategory(format!(
                    "employee {} has a control character in its {} value",
                    employee.id, self.dimension
                )));
            }
            partition
                .categories
                .entry(key.into_owned())
                .or_default()
                .add(position);

            if self.baseline == BaselineStrategy::LevelNormalized {
                if let Some(level) = Dimension::Level.key(employee) {
                    partition
                        .levels
                        .entry(level.into_owned())
                        .or_default()
                        .add(position.tier());
                }
            }
        }
        Ok(partition)
    }

    fn baseline(&self, table: &ContingencyTable, partition: &Partition) -> Result<Baseline, AnalysisError> {
        match self.baseline {
            BaselineStrategy::LevelNormalized if !partition.levels.is_empty() => {
                Baseline::equal_weighted(partition.levels.values())
            }
            _ => Baseline::from_histogram(&table.column_totals()),
        }
    }
}

impl AnalysisFunction for DimensionAnalysis {
    fn run(&self, employees: &[Employee]) -> Result<AnalysisResult, AnalysisError> {
        Ok(self.analyze(employees))
    }
}
