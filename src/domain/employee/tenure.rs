//! Tenure buckets derived from hire dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse tenure grouping used as an analysis dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureBucket {
    LessThanOneYear,
    OneToThreeYears,
    ThreeToFiveYears,
    FivePlusYears,
}

impl TenureBucket {
    /// Derives the bucket from whole years elapsed between `hire_date` and `as_of`.
    ///
    /// Returns `None` when the hire date lies after `as_of`.
    pub fn from_hire_date(hire_date: NaiveDate, as_of: NaiveDate) -> Option<Self> {
        let years = as_of.years_since(hire_date)?;
        Some(match years {
            0 => TenureBucket::LessThanOneYear,
            1 | 2 => TenureBucket::OneToThreeYears,
            3 | 4 => TenureBucket::ThreeToFiveYears,
            _ => TenureBucket::FivePlusYears,
        })
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            TenureBucket::LessThanOneYear => "<1 year",
            TenureBucket::OneToThreeYears => "1-3 years",
            TenureBucket::ThreeToFiveYears => "3-5 years",
            TenureBucket::FivePlusYears => "5+ years",
        }
    }
}

impl fmt::Display for TenureBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_hire_is_less_than_one_year() {
        let today = date(2026, 10, 16);
        assert_eq!(
            TenureBucket::from_hire_date(today, today),
            Some(TenureBucket::LessThanOneYear)
        );
    }

    #[test]
    fn bucket_boundaries_use_whole_years() {
        let as_of = date(2026, 10, 16);
        assert_eq!(
            TenureBucket::from_hire_date(date(2025, 10, 17), as_of),
            Some(TenureBucket::LessThanOneYear)
        );
        assert_eq!(
            TenureBucket::from_hire_date(date(2025, 10, 16), as_of),
            Some(TenureBucket::OneToThreeYears)
        );
        assert_eq!(
            TenureBucket::from_hire_date(date(2023, 10, 16), as_of),
            Some(TenureBucket::ThreeToFiveYears)
        );
        assert_eq!(
            TenureBucket::from_hire_date(date(2021, 10, 16), as_of),
            Some(TenureBucket::FivePlusYears)
        );
    }

    #[test]
    fn future_hire_date_has_no_bucket() {
        assert_eq!(
            TenureBucket::from_hire_date(date(2027, 1, 1), date(2026, 10, 16)),
            None
        );
    }

    #[test]
    fn tenure_bucket_serializes_snake_case() {
        let json = serde_json::to_string(&TenureBucket::FivePlusYears).unwrap();
        assert_eq!(json, "\"five_plus_years\"");
    }
}
