//! Repository implementations.
//!
//! Each repository is a pool-bound struct for standalone reads, plus free
//! `*_tx` functions for reads and writes that must share a caller-owned
//! transaction. Workflow services open the transaction and thread it
//! through every step so a failure anywhere rolls everything back.

mod game;
mod invitation;
mod notification;
mod reservation;
mod team;
mod time_slot;

pub use game::{
    add_team_match_tx, create_match_tx, find_match_tx, transition_match_tx, GameRepository,
};
pub use invitation::{
    active_duplicate_exists_tx, count_pending_team_invitations_tx, create_invitation_tx,
    delete_team_invitations_tx, find_invitation_for_update_tx, set_invitation_status_tx,
    InvitationRepository,
};
pub use notification::NotificationRepository;
pub use reservation::{
    create_reservation_tx, find_reservation_by_match_tx, set_reservation_status_tx,
    transition_reservation_tx, ReservationRepository,
};
pub use team::{
    add_member_tx, find_captained_roster_in_match_tx, find_captained_roster_in_sport_tx,
    find_captained_roster_tx, find_roster_tx, TeamRepository,
};
pub use time_slot::{
    claim_slot_tx, facility_sport_ids_tx, find_slot_facility_tx, release_slot_tx,
    TimeSlotRepository,
};
