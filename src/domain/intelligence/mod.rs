//! Intelligence Module - Statistical skew detection over the talent grid.
//!
//! Every dimension (location, function, level, tenure, manager and the
//! level-normalized distribution) runs the same pipeline:
//!
//! 1. Partition placed employees by the dimension's key into a
//!    `ContingencyTable` of tier counts
//! 2. `StatisticalTest` - chi-square goodness of fit against a `Baseline`,
//!    p-value and Cramér's V
//! 3. `DeviationDetector` - per-category z-scores on the reference tier
//! 4. `SeverityClassifier` - green / yellow / red / insufficient_data
//! 5. `InterpretationGenerator` - one-sentence summary
//!
//! `AnalysisRegistry` holds the named analyses and `run_all_analyses` runs
//! them, isolating failures per dimension.
//!
//! # Design Philosophy
//!
//! All computation is pure and deterministic. Identical input yields an
//! identical `AnalysisReport`, and consumers share that one report instead
//! of recomputing.

mod analysis_function;
mod deviation_detector;
mod distribution;
mod errors;
mod interpretation;
mod packaging;
mod registry;
mod result;
mod severity;
mod summary;
mod thresholds;

pub use analysis_function::{AnalysisFunction, BaselineStrategy, DimensionAnalysis};
pub use deviation_detector::DeviationDetector;
pub use distribution::{Baseline, ContingencyRow, ContingencyTable, PositionHistogram, TierHistogram};
pub use errors::{AnalysisError, PackagingError, RegistryError};
pub use interpretation::InterpretationGenerator;
pub use packaging::{PayloadAnalysis, SummaryPayload, UnavailableDimension};
pub use registry::{run_all_analyses, AnalysisRegistry, AnalysisRegistryBuilder, PER_LEVEL_DISTRIBUTION};
pub use result::{
    AnalysisReport, AnalysisResult, AnalysisStatus, Deviation, DeviationMagnitude, Direction,
};
pub use severity::SeverityClassifier;
pub use statistical_test::{chi_square_survival, StatisticalTest, TestOutcome, TestStatistics};
pub use summary::ReportSummary;
pub use thresholds::{AnalysisThresholds, DEFAULT_MIN_CATEGORY_SIZE, DEFAULT_MIN_SAMPLE_SIZE};
