//! Employee snapshot value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmployeeId, GridPosition};

use super::TenureBucket;

/// One employee as seen by the intelligence engine.
///
/// Owned by the grid/session collaborator and passed in as a read-only
/// snapshot. Every attribute is optional; a missing attribute only removes
/// the employee from that dimension's analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<GridPosition>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub job_level: Option<String>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub tenure: Option<TenureBucket>,
    #[serde(default)]
    pub manager_id: Option<String>,
}

impl Employee {
    /// Creates an employee with no position and no attributes.
    pub fn new(id: EmployeeId) -> Self {
        Self {
            id,
            name: None,
            position: None,
            location: None,
            function: None,
            job_level: None,
            hire_date: None,
            tenure: None,
            manager_id: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Places the employee on the grid.
    pub fn with_position(mut self, position: GridPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the job function.
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Sets the job level.
    pub fn with_job_level(mut self, job_level: impl Into<String>) -> Self {
        self.job_level = Some(job_level.into());
        self
    }

    /// Sets the manager identifier.
    pub fn with_manager(mut self, manager_id: impl Into<String>) -> Self {
        self.manager_id = Some(manager_id.into());
        self
    }

    /// Sets the hire date and the tenure bucket derived from it.
    pub fn with_hire_date(mut self, hire_date: NaiveDate, as_of: NaiveDate) -> Self {
        self.hire_date = Some(hire_date);
        self.tenure = TenureBucket::from_hire_date(hire_date, as_of);
        self
    }

    /// Fills in the tenure bucket from the hire date when it is not already set.
    pub fn with_tenure_as_of(mut self, as_of: NaiveDate) -> Self {
        if self.tenure.is_none() {
            self.tenure = self
                .hire_date
                .and_then(|hire_date| TenureBucket::from_hire_date(hire_date, as_of));
        }
        self
    }

    /// Returns true if the employee has a grid position.
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_employee_has_no_attributes() {
        let employee = Employee::new(EmployeeId::new("1").unwrap());
        assert!(!employee.is_placed());
        assert!(employee.location.is_none());
        assert!(employee.tenure.is_none());
    }

    #[test]
    fn with_hire_date_derives_tenure() {
        let employee = Employee::new(EmployeeId::new("1").unwrap())
            .with_hire_date(date(2020, 1, 1), date(2026, 10, 16));
        assert_eq!(employee.tenure, Some(TenureBucket::FivePlusYears));
    }

    #[test]
    fn with_tenure_as_of_keeps_explicit_bucket() {
        let mut employee = Employee::new(EmployeeId::new("1").unwrap());
        employee.hire_date = Some(date(2020, 1, 1));
        employee.tenure = Some(TenureBucket::LessThanOneYear);

        let employee = employee.with_tenure_as_of(date(2026, 10, 16));
        assert_eq!(employee.tenure, Some(TenureBucket::LessThanOneYear));
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let employee: Employee =
            serde_json::from_str(r#"{"id": "E1", "position": 9, "location": "HQ"}"#).unwrap();
        assert_eq!(employee.position.map(|p| p.value()), Some(9));
        assert_eq!(employee.location.as_deref(), Some("HQ"));
        assert!(employee.function.is_none());
    }

    #[test]
    fn deserialization_rejects_invalid_position() {
        let result: Result<Employee, _> = serde_json::from_str(r#"{"id": "E1", "position": 0}"#);
        assert!(result.is_err());
    }
}
