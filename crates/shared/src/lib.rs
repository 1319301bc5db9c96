//! Shared utilities and common types for the Courtbook backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Field-tagged business-rule error reporting
//! - Common validation logic

pub mod validation;
