//! Distribution Model - Position histograms, tier histograms, baselines and
//! the category-by-tier contingency table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{GridPosition, Tier};

use super::AnalysisError;

/// Count of employees per grid position (1-9).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionHistogram {
    counts: [usize; 9],
}

impl PositionHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a histogram from a sequence of positions.
    pub fn from_positions(positions: impl IntoIterator<Item = GridPosition>) -> Self {
        let mut histogram = Self::new();
        for position in positions {
            histogram.add(position);
        }
        histogram
    }

    /// Records one employee at `position`.
    pub fn add(&mut self, position: GridPosition) {
        self.counts[usize::from(position.value() - 1)] += 1;
    }

    /// Returns the count at `position`.
    pub fn count(&self, position: GridPosition) -> usize {
        self.counts[usize::from(position.value() - 1)]
    }

    /// Returns the sample size the histogram was built from.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Collapses positions into High/Medium/Low tiers.
    pub fn tiers(&self) -> TierHistogram {
        let mut tiers = TierHistogram::new();
        for position in GridPosition::all() {
            tiers.add_count(position.tier(), self.count(position));
        }
        tiers
    }
}

/// Count of employees per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierHistogram {
    counts: [usize; 3],
}

impl TierHistogram {
    /// Creates an empty tier histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tier histogram from explicit High/Medium/Low counts.
    pub fn from_counts(high: usize, medium: usize, low: usize) -> Self {
        Self {
            counts: [high, medium, low],
        }
    }

    /// Records one employee in `tier`.
    pub fn add(&mut self, tier: Tier) {
        self.add_count(tier, 1);
    }

    fn add_count(&mut self, tier: Tier, count: usize) {
        self.counts[tier.index()] += count;
    }

    /// Returns the count in `tier`.
    pub fn count(&self, tier: Tier) -> usize {
        self.counts[tier.index()]
    }

    /// Returns the total count.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns the fraction of the histogram in `tier`, or `None` when empty.
    pub fn share(&self, tier: Tier) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some(self.count(tier) as f64 / total as f64)
    }

    /// Adds another histogram's counts into this one.
    pub fn merge(&mut self, other: &TierHistogram) {
        for tier in Tier::ALL {
            self.add_count(tier, other.count(tier));
        }
    }
}

/// Reference tier distribution a category is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    shares: [f64; 3],
}

impl Baseline {
    /// Creates a baseline from explicit tier shares.
    ///
    /// Shares must be finite, non-negative and sum to 1 (within 1e-9).
    pub fn from_shares(high: f64, medium: f64, low: f64) -> Result<Self, AnalysisError> {
        let shares = [high, medium, low];
        if shares.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(AnalysisError::InvalidBaseline(
                "tier shares must be finite and non-negative".to_string(),
            ));
        }
        let sum: f64 = shares.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(AnalysisError::InvalidBaseline(format!(
                "tier shares sum to {:.6}, expected 1",
                sum
            )));
        }
        Ok(Self { shares })
    }

    /// Headcount-weighted baseline: the tier shares of one histogram.
    pub fn from_histogram(histogram: &TierHistogram) -> Result<Self, AnalysisError> {
        let total = histogram.total();
        if total == 0 {
            return Err(AnalysisError::InvalidBaseline(
                "baseline histogram is empty".to_string(),
            ));
        }
        let share = |tier: Tier| histogram.count(tier) as f64 / total as f64;
        Self::from_shares(share(Tier::High), share(Tier::Medium), share(Tier::Low))
    }

    /// Equal-weighted baseline: the unweighted mean of each histogram's
    /// tier shares. Empty histograms are ignored.
    pub fn equal_weighted<'a>(
        histograms: impl IntoIterator<Item = &'a TierHistogram>,
    ) -> Result<Self, AnalysisError> {
        let mut sums = [0.0_f64; 3];
        let mut groups = 0_usize;
        for histogram in histograms {
            if histogram.total() == 0 {
                continue;
            }
            for tier in Tier::ALL {
                sums[tier.index()] += histogram.share(tier).unwrap_or(0.0);
            }
            groups += 1;
        }
        if groups == 0 {
            return Err(AnalysisError::InvalidBaseline(
                "no non-empty groups to average".to_string(),
            ));
        }
        let n = groups as f64;
        let [high, medium, low] = sums;
        Self::from_shares(high / n, medium / n, low / n)
    }

    /// Returns the baseline share of `tier`.
    pub fn share(&self, tier: Tier) -> f64 {
        self.shares[tier.index()]
    }
}

/// One row of a contingency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyRow {
    pub category: String,
    pub counts: TierHistogram,
}

/// Category-by-tier table of counts for one dimension.
///
/// Rows are kept in category order so every derived statistic is summed in
/// a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    rows: Vec<ContingencyRow>,
}

impl ContingencyTable {
    /// Builds a table from per-category tier histograms.
    pub fn from_groups(groups: &BTreeMap<String, TierHistogram>) -> Self {
        Self {
            rows: groups
                .iter()
                .map(|(category, counts)| ContingencyRow {
                    category: category.clone(),
                    counts: *counts,
                })
                .collect(),
        }
    }

    /// Returns all rows, including empty ones.
    pub fn rows(&self) -> &[ContingencyRow] {
        &self.rows
    }

    /// Returns rows with at least one employee.
    pub fn non_empty_rows(&self) -> impl Iterator<Item = &ContingencyRow> {
        self.rows.iter().filter(|row| row.counts.total() > 0)
    }

    /// Returns the column margins as a histogram.
    pub fn column_totals(&self) -> TierHistogram {
        let mut totals = TierHistogram::new();
        for row in &self.rows {
            totals.merge(&row.counts);
        }
        totals
    }

    /// Returns tiers with a non-zero column margin, in canonical order.
    pub fn non_empty_columns(&self) -> Vec<Tier> {
        let totals = self.column_totals();
        Tier::ALL
            .into_iter()
            .filter(|tier| totals.count(*tier) > 0)
            .collect()
    }

    /// Returns the grand total.
    pub fn grand_total(&self) -> usize {
        self.rows.iter().map(|row| row.counts.total()).sum()
    }

    /// Returns true if the table holds no employees.
    pub fn is_empty(&self) -> bool {
        self.grand_total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(value: u8) -> GridPosition {
        GridPosition::try_new(value).unwrap()
    }

    #[test]
    fn position_histogram_sums_to_sample_size() {
        let histogram = PositionHistogram::from_positions([pos(9), pos(9), pos(5), pos(1)]);
        assert_eq!(histogram.total(), 4);
        assert_eq!(histogram.count(pos(9)), 2);
        assert_eq!(histogram.count(pos(2)), 0);
    }

    #[test]
    fn position_histogram_collapses_to_tiers() {
        let histogram =
            PositionHistogram::from_positions([pos(9), pos(8), pos(6), pos(5), pos(3), pos(1)]);
        let tiers = histogram.tiers();
        assert_eq!(tiers.count(Tier::High), 3);
        assert_eq!(tiers.count(Tier::Medium), 2);
        assert_eq!(tiers.count(Tier::Low), 1);
        assert_eq!(tiers.total(), histogram.total());
    }

    #[test]
    fn tier_share_is_none_when_empty() {
        assert!(TierHistogram::new().share(Tier::High).is_none());
        let tiers = TierHistogram::from_counts(1, 1, 2);
        assert_eq!(tiers.share(Tier::Low), Some(0.5));
    }

    #[test]
    fn baseline_from_histogram_uses_headcount_shares() {
        let baseline = Baseline::from_histogram(&TierHistogram::from_counts(20, 60, 20)).unwrap();
        assert!((baseline.share(Tier::High) - 0.2).abs() < 1e-12);
        assert!((baseline.share(Tier::Medium) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn baseline_rejects_empty_histogram() {
        assert!(Baseline::from_histogram(&TierHistogram::new()).is_err());
    }

    #[test]
    fn baseline_rejects_shares_not_summing_to_one() {
        assert!(Baseline::from_shares(0.5, 0.5, 0.5).is_err());
        assert!(Baseline::from_shares(-0.1, 0.6, 0.5).is_err());
        assert!(Baseline::from_shares(f64::NAN, 0.5, 0.5).is_err());
    }

    #[test]
    fn equal_weighted_baseline_ignores_group_size() {
        let big = TierHistogram::from_counts(10, 80, 10);
        let small = TierHistogram::from_counts(5, 5, 0);
        let baseline = Baseline::equal_weighted([&big, &small]).unwrap();
        // (0.1 + 0.5) / 2 = 0.3
        assert!((baseline.share(Tier::High) - 0.3).abs() < 1e-9);
        assert!((baseline.share(Tier::Medium) - 0.65).abs() < 1e-9);
        assert!((baseline.share(Tier::Low) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn equal_weighted_baseline_requires_a_group() {
        let empty = TierHistogram::new();
        assert!(Baseline::equal_weighted([&empty]).is_err());
    }

    #[test]
    fn contingency_table_margins_match_grand_total() {
        let mut groups = BTreeMap::new();
        groups.insert("A".to_string(), TierHistogram::from_counts(3, 4, 0));
        groups.insert("B".to_string(), TierHistogram::from_counts(1, 2, 0));
        groups.insert("C".to_string(), TierHistogram::new());
        let table = ContingencyTable::from_groups(&groups);

        assert_eq!(table.grand_total(), 10);
        assert_eq!(table.column_totals().total(), 10);
        assert_eq!(table.non_empty_rows().count(), 2);
        assert_eq!(table.non_empty_columns(), vec![Tier::High, Tier::Medium]);
    }
}
