//! Database-backed notification sink.

use domain::models::NotificationDraft;
use domain::services::{NotificationResult, NotificationSink};
use persistence::repositories::NotificationRepository;
use sqlx::PgPool;
use tracing::warn;
use validator::Validate;

/// Sink that records notifications as rows for the notification feature to
/// deliver and manage.
///
/// Kept outside workflow transactions on purpose: a failed insert is logged
/// and reported, never propagated into the triggering operation.
#[derive(Clone)]
pub struct DbNotificationSink {
    repository: NotificationRepository,
}

impl DbNotificationSink {
    /// Create a new sink over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: NotificationRepository::new(pool),
        }
    }
}

#[async_trait::async_trait]
impl NotificationSink for DbNotificationSink {
    async fn notify(&self, draft: NotificationDraft) -> NotificationResult {
        if let Err(errors) = draft.validate() {
            warn!(user_id = %draft.user_id, %errors, "Dropping invalid notification draft");
            return NotificationResult::Skipped;
        }

        let result = self
            .repository
            .create(
                draft.user_id,
                draft.notification_type.into(),
                &draft.title,
                &draft.message,
                draft.notifiable.map(|r| r.tag()),
                draft.notifiable.map(|r| r.id()),
            )
            .await;

        match result {
            Ok(_) => NotificationResult::Recorded,
            Err(err) => {
                warn!(
                    user_id = %draft.user_id,
                    error = %err,
                    "Failed to record notification"
                );
                NotificationResult::Failed(err.to_string())
            }
        }
    }
}
