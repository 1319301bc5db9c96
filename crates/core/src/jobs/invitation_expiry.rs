//! Invitation expiry background job.
//!
//! Drives the sweep that cancels stale match invitations and confirms
//! accepted ones, keeping matches, reservations and time slots in sync.

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use crate::services::ExpirySweepService;

use super::scheduler::{Job, JobFrequency};

/// Background job that runs the invitation sweep.
pub struct InvitationExpiryJob {
    pool: PgPool,
    interval_minutes: u64,
}

impl InvitationExpiryJob {
    /// Create a new invitation expiry job.
    pub fn new(pool: PgPool, interval_minutes: u64) -> Self {
        Self {
            pool,
            interval_minutes,
        }
    }
}

#[async_trait::async_trait]
impl Job for InvitationExpiryJob {
    fn name(&self) -> &'static str {
        "invitation_expiry"
    }

    fn frequency(&self) -> JobFrequency {
        JobFrequency::Minutes(self.interval_minutes)
    }

    async fn execute(&self) -> Result<(), String> {
        let service = ExpirySweepService::new(self.pool.clone());

        let outcome = service
            .run(Utc::now())
            .await
            .map_err(|e| format!("Invitation sweep failed: {e}"))?;

        if outcome.expired > 0 || outcome.confirmed > 0 {
            info!(
                expired = outcome.expired,
                confirmed = outcome.confirmed,
                "Settled match invitations"
            );
        }

        Ok(())
    }
}
