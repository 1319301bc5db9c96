//! Team validation rules.
//!
//! Pure checks over eagerly loaded [`TeamRoster`] summaries. Every function
//! aggregates all violations it finds; the caller decides whether a
//! non-empty result aborts the operation.

use shared::validation::FieldError;

use crate::models::{MatchType, TeamRoster};

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Validate a single team: active captain present, player count within the
/// sport's bounds.
///
/// `key` tags the errors with the team's position in the request
/// (`team1`/`team2`).
pub fn validate_team(team: &TeamRoster, key: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !team.has_captain() {
        errors.push(FieldError::new(
            format!("{key}.captain"),
            format!("{} must have a captain.", capitalize(key)),
        ));
    }
    if !team.player_count_in_bounds() {
        errors.push(FieldError::new(
            format!("{key}.players"),
            format!(
                "{} must have between {} and {} players.",
                capitalize(key),
                team.min_players,
                team.max_players
            ),
        ));
    }
    errors
}

/// Validate only the player-count bounds, reporting the current count.
///
/// Used when a captain challenges a public match: the challenging team must
/// already be able to field a legal side.
pub fn validate_team_player_count(team: &TeamRoster, key: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if team.active_player_count < team.min_players as i64 {
        errors.push(FieldError::new(
            format!("{key}.players"),
            format!(
                "{} must have at least {} players (currently has {}).",
                key, team.min_players, team.active_player_count
            ),
        ));
    }
    if team.active_player_count > team.max_players as i64 {
        errors.push(FieldError::new(
            format!("{key}.players"),
            format!(
                "{} cannot have more than {} players (currently has {}).",
                key, team.max_players, team.active_player_count
            ),
        ));
    }
    errors
}

/// Validate that two teams can face each other: same sport, different teams.
pub fn validate_team_compatibility(team1: &TeamRoster, team2: &TeamRoster) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if team1.sport_id != team2.sport_id {
        errors.push(FieldError::new(
            "teams.sport",
            "Both teams must belong to the same sport.",
        ));
    }
    if team1.team_id == team2.team_id {
        errors.push(FieldError::new("teams.different", "Teams must be different."));
    }
    errors
}

/// Run every team-level check for a match reservation.
///
/// A private match without a second team is itself a violation; a public
/// match may legitimately have one team and an open slot.
pub fn validate_teams(
    team1: &TeamRoster,
    team2: Option<&TeamRoster>,
    match_type: MatchType,
) -> Vec<FieldError> {
    let mut errors = validate_team(team1, "team1");
    match team2 {
        Some(team2) => {
            errors.extend(validate_team(team2, "team2"));
            errors.extend(validate_team_compatibility(team1, team2));
        }
        None => {
            if match_type == MatchType::Private {
                errors.push(FieldError::new(
                    "team2.required",
                    "Private matches require a second team.",
                ));
            }
        }
    }
    errors
}
