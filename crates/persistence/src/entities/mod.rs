//! Entity definitions (database row mappings).

mod game;
mod invitation;
mod notification;
mod reservation;
mod team;
mod time_slot;

pub use game::{GameEntity, MatchStatusDb, MatchTypeDb, TeamMatchEntity};
pub use invitation::{InvitationEntity, InvitationKindDb, InvitationStatusDb};
pub use notification::{NotificationEntity, NotificationTypeDb};
pub use reservation::{NewReservation, ReservationEntity, ReservationStatusDb};
pub use team::{TeamEntity, TeamRosterEntity};
pub use time_slot::{SlotFacilityEntity, TimeSlotInstanceEntity, TimeSlotStatusDb};
