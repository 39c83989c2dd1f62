mod inmemory;
mod postgres;

use chrono::{NaiveDate, NaiveTime};
pub use inmemory::InMemorySessionRepo;
use peakform_domain::{Session, ID};
pub use postgres::PostgresSessionRepo;

#[async_trait::async_trait]
pub trait ISessionRepo: Send + Sync {
    async fn insert(&self, session: &Session) -> anyhow::Result<()>;
    async fn save(&self, session: &Session) -> anyhow::Result<()>;
    async fn find(&self, session_id: &ID) -> Option<Session>;
    async fn delete(&self, session_id: &ID) -> Option<Session>;
    /// Sessions on `date` whose start time is strictly before `time` and
    /// that have not been flagged as started.
    async fn find_unstarted_before(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> anyhow::Result<Vec<Session>>;
    /// Sessions without a sent reminder whose start instant lies in
    /// `[from, to]` (UTC millis, inclusive boundaries).
    async fn find_reminder_due_between(&self, from: i64, to: i64)
        -> anyhow::Result<Vec<Session>>;
}
