//! Analysis Registry - The composed set of named dimension analyses.
//!
//! The registry is built once by a composition step and passed by reference
//! into `run_all_analyses`. Entries are only ever appended: `extend` consumes
//! the registry and returns a new one with the extra dimension at the end.
//!
//! # Example
//!
//! ```
//! use ninebox_intelligence::domain::employee::Employee;
//! use ninebox_intelligence::domain::intelligence::{
//!     run_all_analyses, AnalysisError, AnalysisRegistry, AnalysisResult, AnalysisThresholds,
//! };
//!
//! let registry = AnalysisRegistry::standard(&AnalysisThresholds::default())
//!     .extend("headcount", |employees: &[Employee]| -> Result<AnalysisResult, AnalysisError> {
//!         Ok(AnalysisResult::insufficient_data("headcount", employees.len(), "Not tested."))
//!     })
//!     .unwrap();
//!
//! let report = run_all_analyses(&[], &registry);
//! assert_eq!(report.len(), 7);
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::employee::{Dimension, Employee};

use super::{
    AnalysisFunction, AnalysisReport, AnalysisResult, AnalysisThresholds, BaselineStrategy,
    DimensionAnalysis, RegistryError,
};

/// Name of the built-in level analysis compared against a level-normalized baseline.
pub const PER_LEVEL_DISTRIBUTION: &str = "per_level_distribution";

#[derive(Clone)]
struct RegistryEntry {
    name: String,
    function: Arc<dyn AnalysisFunction>,
}

/// Ordered, append-only list of (name, analysis function) pairs.
#[derive(Clone, Default)]
pub struct AnalysisRegistry {
    entries: Vec<RegistryEntry>,
}

impl fmt::Debug for AnalysisRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl AnalysisRegistry {
    /// Starts composing a registry.
    pub fn builder() -> AnalysisRegistryBuilder {
        AnalysisRegistryBuilder::default()
    }

    /// The six built-in dimensions, in registration order.
    pub fn standard(thresholds: &AnalysisThresholds) -> Self {
        let dimension = |dimension: Dimension, baseline: BaselineStrategy| {
            DimensionAnalysis::new(dimension, baseline, thresholds.clone())
        };

        let analyses = [
            dimension(Dimension::Location, BaselineStrategy::CompanyWide),
            dimension(Dimension::Function, BaselineStrategy::CompanyWide),
            dimension(Dimension::Level, BaselineStrategy::CompanyWide),
            dimension(Dimension::Tenure, BaselineStrategy::CompanyWide),
            dimension(Dimension::Manager, BaselineStrategy::CompanyWide),
            dimension(Dimension::Level, BaselineStrategy::LevelNormalized)
                .with_name(PER_LEVEL_DISTRIBUTION),
        ];

        let entries = analyses
            .into_iter()
            .map(|analysis| RegistryEntry {
                name: analysis.name().to_string(),
                function: Arc::new(analysis),
            })
            .collect();
        Self { entries }
    }

    /// Returns a new registry with `function` appended under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if the name is empty, malformed or taken.
    pub fn extend(
        self,
        name: impl Into<String>,
        function: impl AnalysisFunction + 'static,
    ) -> Result<Self, RegistryError> {
        AnalysisRegistryBuilder {
            entries: self.entries,
        }
        .register(name, function)
        .map(AnalysisRegistryBuilder::build)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|registered| registered == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Composes an `AnalysisRegistry`, validating names as they are added.
#[derive(Default)]
pub struct AnalysisRegistryBuilder {
    entries: Vec<RegistryEntry>,
}

impl AnalysisRegistryBuilder {
    /// Appends `function` under `name`.
    ///
    /// Names must be non-empty lowercase snake_case (`[a-z][a-z0-9_]*`) and
    /// unique within the registry.
    pub fn register(
        mut self,
        name: impl Into<String>,
        function: impl AnalysisFunction + 'static,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        validate_name(&name)?;
        if self.entries.iter().any(|entry| entry.name == name) {
            return Err(RegistryError::DuplicateName(name));
        }
        self.entries.push(RegistryEntry {
            name,
            function: Arc::new(function),
        });
        Ok(self)
    }

    /// Finishes composition.
    pub fn build(self) -> AnalysisRegistry {
        AnalysisRegistry {
            entries: self.entries,
        }
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(RegistryError::EmptyName);
    };
    let valid = first.is_ascii_lowercase()
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !valid {
        return Err(RegistryError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Runs every registered analysis over `employees`.
///
/// The output holds exactly one entry per registered name. A function that
/// returns `Err` or panics yields an `error` result for its own dimension;
/// every other dimension is computed normally.
pub fn run_all_analyses(employees: &[Employee], registry: &AnalysisRegistry) -> AnalysisReport {
    info!(
        employees = employees.len(),
        dimensions = registry.len(),
        "Running intelligence analyses"
    );

    let mut report = AnalysisReport::new();
    for entry in &registry.entries {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| entry.function.run(employees)));

        let mut result = match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => {
                error!(dimension = %entry.name, error = %err, "Analysis returned an error");
                AnalysisResult::error(&entry.name, err.to_string())
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(dimension = %entry.name, error = %message, "Analysis panicked");
                AnalysisResult::error(&entry.name, message)
            }
        };
        result.name = entry.name.clone();

        debug!(
            dimension = %entry.name,
            status = %result.status,
            sample_size = result.sample_size,
            deviations = result.deviations.len(),
            "Analysis complete"
        );
        report.insert(entry.name.clone(), result);
    }
    report
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("analysis panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("analysis panicked: {}", message)
    } else {
        "analysis panicked".to_string()
    }
}
