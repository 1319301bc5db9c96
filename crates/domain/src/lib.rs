//! Domain layer for the Courtbook backend.
//!
//! This crate contains:
//! - Domain models (teams, time slots, matches, reservations, invitations)
//! - Business logic services (the validation engine, notification sink)
//! - Domain error types

pub mod models;
pub mod services;
