//! Analysis output types shared by every consumer.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::Tier;

use super::{InterpretationGenerator, PackagingError, ReportSummary, TestStatistics};

/// Traffic-light status of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Green,
    Yellow,
    Red,
    InsufficientData,
    Error,
}

impl AnalysisStatus {
    /// Returns true for green/yellow/red, the statuses backed by a computed test.
    pub fn is_evaluated(&self) -> bool {
        matches!(
            self,
            AnalysisStatus::Green | AnalysisStatus::Yellow | AnalysisStatus::Red
        )
    }

    /// Returns the wire label.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisStatus::Green => "green",
            AnalysisStatus::Yellow => "yellow",
            AnalysisStatus::Red => "red",
            AnalysisStatus::InsufficientData => "insufficient_data",
            AnalysisStatus::Error => "error",
        }
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether a category is over- or under-represented in the reference tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Over,
    Under,
}

/// How far a category sits from the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviationMagnitude {
    Moderate,
    Severe,
}

impl fmt::Display for DeviationMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviationMagnitude::Moderate => write!(f, "moderate"),
            DeviationMagnitude::Severe => write!(f, "severe"),
        }
    }
}

/// A category whose reference-tier rate differs significantly from baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    pub category: String,
    pub tier: Tier,
    /// Fraction of the category in `tier`.
    pub observed_rate: f64,
    /// Baseline fraction in `tier`.
    pub baseline_rate: f64,
    /// Standardized residual of the proportion test.
    pub z_score: f64,
    pub direction: Direction,
    pub magnitude: DeviationMagnitude,
    pub sample_size: usize,
    pub observed_count: usize,
}

impl Deviation {
    /// Returns true for severe deviations.
    pub fn is_severe(&self) -> bool {
        self.magnitude == DeviationMagnitude::Severe
    }
}

/// Outcome of one dimension's analysis. Produced fresh on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    pub chi_square: Option<f64>,
    pub p_value: Option<f64>,
    pub degrees_of_freedom: Option<usize>,
    pub effect_size: Option<f64>,
    pub sample_size: usize,
    #[serde(default)]
    pub category_count: usize,
    pub status: AnalysisStatus,
    /// Most severe first.
    pub deviations: Vec<Deviation>,
    pub interpretation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Creates a result from computed statistics.
    pub fn evaluated(
        name: impl Into<String>,
        stats: &TestStatistics,
        status: AnalysisStatus,
        deviations: Vec<Deviation>,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            chi_square: Some(stats.chi_square),
            p_value: Some(stats.p_value),
            degrees_of_freedom: Some(stats.degrees_of_freedom),
            effect_size: Some(stats.effect_size),
            sample_size: stats.sample_size,
            category_count: stats.category_count,
            status,
            deviations,
            interpretation: interpretation.into(),
            error: None,
        }
    }

    /// Creates an `insufficient_data` result. No statistic is reported.
    pub fn insufficient_data(
        name: impl Into<String>,
        sample_size: usize,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            chi_square: None,
            p_value: None,
            degrees_of_freedom: None,
            effect_size: None,
            sample_size,
            category_count: 0,
            status: AnalysisStatus::InsufficientData,
            deviations: Vec::new(),
            interpretation: interpretation.into(),
            error: None,
        }
    }

    /// Creates an `error` result with sample size 0.
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            interpretation: InterpretationGenerator::summarize(&name, AnalysisStatus::Error, &[]),
            name,
            chi_square: None,
            p_value: None,
            degrees_of_freedom: None,
            effect_size: None,
            sample_size: 0,
            category_count: 0,
            status: AnalysisStatus::Error,
            deviations: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Returns true if any deviation is severe.
    pub fn has_severe_deviation(&self) -> bool {
        self.deviations.iter().any(Deviation::is_severe)
    }
}

/// Every registered dimension's result, keyed by registered name.
///
/// Serializes as a plain JSON object in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisReport {
    results: BTreeMap<String, AnalysisResult>,
}

impl AnalysisReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: String, result: AnalysisResult) {
        self.results.insert(name, result);
    }

    /// Returns the result for `name`.
    pub fn get(&self, name: &str) -> Option<&AnalysisResult> {
        self.results.get(name)
    }

    /// Returns all dimension names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    /// Iterates `(name, result)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnalysisResult)> {
        self.results.iter().map(|(name, result)| (name.as_str(), result))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Aggregates statuses across dimensions.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_report(self)
    }

    /// Lowercase hex SHA-256 of the report's JSON encoding.
    ///
    /// Two consumers holding reports with equal fingerprints are looking at
    /// the same numbers.
    pub fn fingerprint(&self) -> Result<String, PackagingError> {
        let bytes = serde_json::to_vec(self)?;
        let digest = Sha256::digest(&bytes);
        Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
    }
}
