//! Notification repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{NotificationEntity, NotificationTypeDb};
use crate::metrics::QueryTimer;

/// Repository for notification-related database operations.
///
/// Writes happen outside workflow transactions: notifications are
/// fire-and-forget and must never roll back the operation that caused them.
#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Creates a new NotificationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Record a notification.
    pub async fn create(
        &self,
        user_id: Uuid,
        notification_type: NotificationTypeDb,
        title: &str,
        message: &str,
        notifiable_type: Option<&str>,
        notifiable_id: Option<Uuid>,
    ) -> Result<NotificationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_notification");
        let result = sqlx::query_as::<_, NotificationEntity>(
            r#"
            INSERT INTO notifications (user_id, type, title, message, notifiable_type, notifiable_id, is_read)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE)
            RETURNING id, user_id, type, title, message, notifiable_type, notifiable_id, is_read, created_at
            "#,
        )
        .bind(user_id)
        .bind(notification_type)
        .bind(title)
        .bind(message)
        .bind(notifiable_type)
        .bind(notifiable_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Unread notification count for a user.
    pub async fn count_unread(&self, user_id: Uuid) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_unread_notifications");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM notifications
            WHERE user_id = $1 AND is_read = FALSE
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
