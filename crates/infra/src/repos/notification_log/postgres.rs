use super::INotificationLogRepo;

use peakform_domain::{NotificationLogEntry, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresNotificationLogRepo {
    pool: PgPool,
}

impl PostgresNotificationLogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationLogEntryRaw {
    entry_uid: Uuid,
    session_uid: Uuid,
    message: String,
    status: String,
    error: Option<String>,
    created_at: i64,
}

impl From<NotificationLogEntryRaw> for NotificationLogEntry {
    fn from(e: NotificationLogEntryRaw) -> Self {
        Self {
            id: e.entry_uid.into(),
            session_id: e.session_uid.into(),
            message: e.message,
            status: e.status.parse().unwrap(),
            error: e.error,
            created_at: e.created_at,
        }
    }
}

#[async_trait::async_trait]
impl INotificationLogRepo for PostgresNotificationLogRepo {
    async fn insert(&self, entry: &NotificationLogEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notification_log
            (entry_uid, session_uid, message, status, error, created_at)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id.inner_ref())
        .bind(entry.session_id.inner_ref())
        .bind(&entry.message)
        .bind(entry.status.as_str())
        .bind(&entry.error)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert notification log entry: {:?}. DB returned error: {:?}",
                entry, e
            );
            e
        })?;
        Ok(())
    }

    async fn find_by_session(
        &self,
        session_id: &ID,
    ) -> anyhow::Result<Vec<NotificationLogEntry>> {
        let entries: Vec<NotificationLogEntryRaw> = sqlx::query_as(
            r#"
            SELECT * FROM notification_log
            WHERE session_uid = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(session_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find notification log entries for session: {:?} failed. DB returned error: {:?}",
                session_id, e
            );
            e
        })?;
        Ok(entries.into_iter().map(|entry| entry.into()).collect())
    }
}
