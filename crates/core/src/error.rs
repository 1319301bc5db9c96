//! Error taxonomy for the reservation and invitation workflows.
//!
//! Every service returns these as typed results; nothing in the core
//! reports failures as bare strings. A service returning early drops its
//! transaction, which rolls back all writes made so far.

use shared::validation::{summarize, FieldError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Aggregated business-rule violations. Fully recoverable: the caller
    /// may retry with corrected input.
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    /// The time slot was not available at claim time. Retryable after the
    /// caller reloads slot state.
    #[error("Time slot is not available")]
    SlotUnavailable,

    /// An active invitation already exists for this (sender, receiver,
    /// kind, target) tuple.
    #[error("An invitation already exists for this target")]
    DuplicateInvitation,

    /// Current members plus pending invitations already fill the team.
    #[error("Team capacity exceeded by current members and pending invitations")]
    TeamCapacityExceeded,

    /// The team already has the maximum number of active members.
    #[error("Team is already full")]
    TeamFull,

    /// The acting user is not allowed to perform this operation.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The invitation has already reached a terminal status.
    #[error("Invitation has already been resolved")]
    AlreadyResolved,

    /// A referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl CoreError {
    /// The field errors carried by a validation failure, if any.
    pub fn validation_errors(&self) -> Option<&[FieldError]> {
        match self {
            CoreError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return CoreError::NotFound("Resource not found".into());
        }
        if let sqlx::Error::Database(db_err) = &err {
            // Unique-violation races surface as the same typed errors the
            // pre-checks produce.
            match db_err.constraint() {
                Some("uniq_active_invitation") => return CoreError::DuplicateInvitation,
                Some("uniq_live_reservation_per_slot") => return CoreError::SlotUnavailable,
                _ => {}
            }
            if db_err.code().as_deref() == Some("23503") {
                return CoreError::NotFound("Referenced resource not found".into());
            }
        }
        CoreError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_lists_fields() {
        let err = CoreError::Validation(vec![
            FieldError::new("team1.captain", "Team1 must have a captain."),
            FieldError::new("team2.required", "Private matches require a second team."),
        ]);
        let message = err.to_string();
        assert!(message.starts_with("Validation failed:"));
        assert!(message.contains("team1.captain"));
        assert!(message.contains("team2.required"));
    }

    #[test]
    fn test_validation_errors_accessor() {
        let err = CoreError::Validation(vec![FieldError::new("teams.sport", "mismatch")]);
        assert_eq!(err.validation_errors().unwrap().len(), 1);
        assert!(CoreError::SlotUnavailable.validation_errors().is_none());
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let err: CoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn test_terminal_error_messages() {
        assert_eq!(
            CoreError::SlotUnavailable.to_string(),
            "Time slot is not available"
        );
        assert_eq!(
            CoreError::AlreadyResolved.to_string(),
            "Invitation has already been resolved"
        );
        assert_eq!(CoreError::TeamFull.to_string(), "Team is already full");
    }
}
