mod inmemory;
mod postgres;

pub use inmemory::InMemoryNotificationLogRepo;
use peakform_domain::{NotificationLogEntry, ID};
pub use postgres::PostgresNotificationLogRepo;

/// Append-only: the log exposes no update or delete operations.
#[async_trait::async_trait]
pub trait INotificationLogRepo: Send + Sync {
    async fn insert(&self, entry: &NotificationLogEntry) -> anyhow::Result<()>;
    async fn find_by_session(&self, session_id: &ID)
        -> anyhow::Result<Vec<NotificationLogEntry>>;
}
