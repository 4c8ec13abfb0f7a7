//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Identifier of an employee as supplied by the grid/session owner.
///
/// Identifiers come from imported spreadsheets, so they are opaque strings
/// rather than generated UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a new EmployeeId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("employee_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_accepts_non_empty_string() {
        let id = EmployeeId::new("E-1001").unwrap();
        assert_eq!(id.as_str(), "E-1001");
        assert_eq!(id.to_string(), "E-1001");
    }

    #[test]
    fn employee_id_rejects_empty_string() {
        let result = EmployeeId::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "employee_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn employee_id_rejects_whitespace() {
        assert!(EmployeeId::new("   ").is_err());
    }

    #[test]
    fn employee_id_deserializes_from_plain_string() {
        let id: EmployeeId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn employee_id_deserialization_rejects_empty() {
        let result: Result<EmployeeId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
