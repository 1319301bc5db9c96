//! Workflow services: the consistency core behind the controllers.

pub mod expiry;
pub mod invitation;
pub mod match_reservation;
pub mod notification;
pub mod reservation;

pub use expiry::{ExpirySweepService, SweepOutcome};
pub use invitation::InvitationService;
pub use match_reservation::MatchReservationService;
pub use notification::DbNotificationSink;
pub use reservation::ReservationService;
