//! Facility compatibility rules.

use shared::validation::FieldError;

use crate::models::{SlotFacilityView, TeamRoster};

/// Check that each team's sport is among the sports supported by the
/// facility behind the time slot.
pub fn validate_facility_compatibility(
    team1: &TeamRoster,
    team2: Option<&TeamRoster>,
    slot: &SlotFacilityView,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !slot.supports_sport(team1.sport_id) {
        errors.push(FieldError::new(
            "team1.sport",
            "Team 1 sport does not match the facility sports.",
        ));
    }
    if let Some(team2) = team2 {
        if !slot.supports_sport(team2.sport_id) {
            errors.push(FieldError::new(
                "team2.sport",
                "Team 2 sport does not match the facility sports.",
            ));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlotStatus;
    use uuid::Uuid;

    fn roster(sport_id: Uuid) -> TeamRoster {
        TeamRoster {
            team_id: Uuid::new_v4(),
            name: "Lions".to_string(),
            sport_id,
            sport_name: "Football".to_string(),
            min_players: 8,
            max_players: 11,
            captain_user_id: Some(Uuid::new_v4()),
            active_player_count: 9,
        }
    }

    fn slot(sports: Vec<Uuid>) -> SlotFacilityView {
        SlotFacilityView {
            time_slot_id: Uuid::new_v4(),
            status: TimeSlotStatus::Available,
            facility_id: Uuid::new_v4(),
            supported_sport_ids: sports,
        }
    }

    #[test]
    fn test_supported_sport_passes() {
        let football = Uuid::new_v4();
        let errors = validate_facility_compatibility(&roster(football), None, &slot(vec![football]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unsupported_sport_fails_per_team() {
        let football = Uuid::new_v4();
        let tennis = Uuid::new_v4();
        let errors = validate_facility_compatibility(
            &roster(tennis),
            Some(&roster(tennis)),
            &slot(vec![football]),
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "team1.sport");
        assert_eq!(errors[1].field, "team2.sport");
    }

    #[test]
    fn test_mixed_compatibility() {
        let football = Uuid::new_v4();
        let tennis = Uuid::new_v4();
        let errors = validate_facility_compatibility(
            &roster(football),
            Some(&roster(tennis)),
            &slot(vec![football]),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "team2.sport");
    }
}
