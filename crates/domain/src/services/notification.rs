//! Notification sink abstraction.
//!
//! Workflows hand finished [`NotificationDraft`]s to a sink after their
//! transaction commits. Delivery is fire-and-forget: a sink failure is
//! reported in the result, logged by the caller, and never rolls back the
//! reservation or invitation that triggered it.

use crate::models::NotificationDraft;

/// Result of handing a notification to a sink.
#[derive(Debug, Clone)]
pub enum NotificationResult {
    /// The notification was recorded.
    Recorded,
    /// The sink failed; the triggering operation proceeds regardless.
    Failed(String),
    /// The notification was dropped (e.g., invalid draft).
    Skipped,
}

/// Sink for notification records produced by the workflows.
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    /// Record a notification for its user.
    async fn notify(&self, draft: NotificationDraft) -> NotificationResult;
}

/// Mock notification sink for development and testing.
///
/// Logs notifications but doesn't persist them.
#[derive(Debug, Clone, Default)]
pub struct MockNotificationSink {
    /// Whether to simulate failures for testing.
    pub simulate_failure: bool,
}

impl MockNotificationSink {
    /// Create a new mock sink.
    pub fn new() -> Self {
        Self {
            simulate_failure: false,
        }
    }

    /// Create a mock sink that simulates failures.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
        }
    }
}

#[async_trait::async_trait]
impl NotificationSink for MockNotificationSink {
    async fn notify(&self, draft: NotificationDraft) -> NotificationResult {
        if self.simulate_failure {
            tracing::warn!(
                user_id = %draft.user_id,
                kind = %draft.notification_type,
                "Mock notification sink simulating failure"
            );
            return NotificationResult::Failed("Simulated failure".to_string());
        }

        tracing::info!(
            user_id = %draft.user_id,
            kind = %draft.notification_type,
            title = %draft.title,
            "Mock: would record notification"
        );

        NotificationResult::Recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationType;
    use uuid::Uuid;

    fn draft() -> NotificationDraft {
        NotificationDraft {
            user_id: Uuid::nil(),
            notification_type: NotificationType::MatchNotification,
            title: "Match invitation".to_string(),
            message: "You have received an invitation.".to_string(),
            notifiable: None,
        }
    }

    #[tokio::test]
    async fn test_mock_sink_records() {
        let sink = MockNotificationSink::new();
        let result = sink.notify(draft()).await;
        assert!(matches!(result, NotificationResult::Recorded));
    }

    #[tokio::test]
    async fn test_mock_sink_failure() {
        let sink = MockNotificationSink::failing();
        let result = sink.notify(draft()).await;
        assert!(matches!(result, NotificationResult::Failed(_)));
    }
}
