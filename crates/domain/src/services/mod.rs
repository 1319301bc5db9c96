//! Domain services for the Courtbook backend.
//!
//! Services contain business logic that operates on domain models. The
//! validation services are pure: they aggregate field-tagged errors and
//! never touch storage.

pub mod facility_validation;
pub mod notification;
pub mod team_validation;

pub use facility_validation::validate_facility_compatibility;

pub use notification::{MockNotificationSink, NotificationResult, NotificationSink};

pub use team_validation::{
    validate_team, validate_team_compatibility, validate_team_player_count, validate_teams,
};
