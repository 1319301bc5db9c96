//! Common validation utilities.
//!
//! Business-rule checks report violations as [`FieldError`] values tagged
//! with the input field they concern. Checks aggregate every violation
//! instead of short-circuiting so callers can report all problems at once.

use serde::Serialize;
use validator::ValidationError;

/// A single business-rule violation, tagged with the field it concerns.
///
/// Field tags use dotted paths (`team1.captain`, `team2.players`) so callers
/// can attribute each message to the offending part of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Render a batch of field errors as a single log-friendly line.
pub fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates that a price is non-negative.
pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price >= 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("price_range");
        err.message = Some("Price must be non-negative".into());
        Err(err)
    }
}

/// Validates that a match score is non-negative.
pub fn validate_score(score: i32) -> Result<(), ValidationError> {
    if score >= 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("score_range");
        err.message = Some("Score must be non-negative".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("team1.captain", "Team1 must have a captain.");
        assert_eq!(err.to_string(), "team1.captain: Team1 must have a captain.");
    }

    #[test]
    fn test_field_error_equality() {
        let a = FieldError::new("teams.sport", "Both teams must belong to the same sport.");
        let b = FieldError::new("teams.sport", "Both teams must belong to the same sport.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_summarize_joins_errors() {
        let errors = vec![
            FieldError::new("team1.players", "too few"),
            FieldError::new("team2.captain", "missing"),
        ];
        assert_eq!(summarize(&errors), "team1.players: too few; team2.captain: missing");
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), "");
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(25.5).is_ok());
        assert!(validate_price(-0.01).is_err());
    }

    #[test]
    fn test_validate_score() {
        assert!(validate_score(0).is_ok());
        assert!(validate_score(3).is_ok());
        assert!(validate_score(-1).is_err());
    }

    #[test]
    fn test_field_error_serializes() {
        let err = FieldError::new("team2.required", "Private matches require a second team.");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("team2.required"));
        assert!(json.contains("Private matches require a second team."));
    }
}
