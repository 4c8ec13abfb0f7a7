//! Organizational dimensions used to partition employees.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::Employee;

/// A categorical employee attribute used as a grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Location,
    Function,
    Level,
    Tenure,
    Manager,
}

impl Dimension {
    /// Returns the grouping value for an employee, or `None` when the
    /// attribute is missing or blank.
    pub fn key<'a>(&self, employee: &'a Employee) -> Option<Cow<'a, str>> {
        let raw = match self {
            Dimension::Location => employee.location.as_deref(),
            Dimension::Function => employee.function.as_deref(),
            Dimension::Level => employee.job_level.as_deref(),
            Dimension::Manager => employee.manager_id.as_deref(),
            Dimension::Tenure => return employee.tenure.map(|t| Cow::Borrowed(t.label())),
        };
        raw.map(str::trim)
            .filter(|value| !value.is_empty())
            .map(Cow::Borrowed)
    }

    /// Returns the identifier used for registry entries.
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Location => "location",
            Dimension::Function => "function",
            Dimension::Level => "level",
            Dimension::Tenure => "tenure",
            Dimension::Manager => "manager",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
