//! Sport domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sport with its team-size bounds.
///
/// `min_players`/`max_players` bound the number of active players a team in
/// this sport may field; the validation engine and the team-invitation
/// capacity ceiling both read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Sport {
    pub id: Uuid,
    pub name: String,
    pub min_players: i32,
    pub max_players: i32,
}
