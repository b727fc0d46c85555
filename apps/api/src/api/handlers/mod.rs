// HTTP handlers, one module per resource

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use serde::Deserialize;

use crate::domain::question::ValidationError;

/// Integer field that clients may also send as a numeric string
///
/// The quiz and form clients post ids taken from `<select>` values, which
/// arrive as strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    pub fn to_i32(&self, field: &'static str) -> Result<i32, ValidationError> {
        let invalid = || ValidationError::NotAnInteger {
            field,
            value: match self {
                IntOrString::Int(n) => n.to_string(),
                IntOrString::Text(s) => s.clone(),
            },
        };

        match self {
            IntOrString::Int(n) => i32::try_from(*n).map_err(|_| invalid()),
            IntOrString::Text(s) => s.trim().parse::<i32>().map_err(|_| invalid()),
        }
    }
}

/// Optional `IntOrString` field converted to `Option<i32>`
pub(crate) fn optional_int(
    value: Option<&IntOrString>,
    field: &'static str,
) -> Result<Option<i32>, ValidationError> {
    value.map(|v| v.to_i32(field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let n: IntOrString = serde_json::from_str("5").unwrap();
        let s: IntOrString = serde_json::from_str("\" 5 \"").unwrap();

        assert_eq!(n.to_i32("id"), Ok(5));
        assert_eq!(s.to_i32("id"), Ok(5));
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let s: IntOrString = serde_json::from_str("\"five\"").unwrap();
        assert_eq!(
            s.to_i32("id"),
            Err(ValidationError::NotAnInteger {
                field: "id",
                value: "five".to_string()
            })
        );
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        let n: IntOrString = serde_json::from_str("9999999999").unwrap();
        assert!(n.to_i32("id").is_err());
    }
}
