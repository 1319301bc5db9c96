//! Reservation, match and invitation workflows for the Courtbook backend.
//!
//! This crate orchestrates the consistency core: simple and match-backed
//! reservations, the invitation lifecycle, and the periodic sweep that
//! keeps invitations, matches, reservations and time slots in agreement.
//! HTTP controllers live outside this crate and call the service layer
//! directly.

pub mod config;
pub mod error;
pub mod jobs;
pub mod logging;
pub mod services;
