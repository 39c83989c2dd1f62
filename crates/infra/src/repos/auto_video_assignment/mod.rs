mod inmemory;
mod postgres;

pub use inmemory::InMemoryAutoVideoAssignmentRepo;
use peakform_domain::{AutoVideoAssignment, ID};
pub use postgres::PostgresAutoVideoAssignmentRepo;

#[async_trait::async_trait]
pub trait IAutoVideoAssignmentRepo: Send + Sync {
    async fn insert(&self, assignment: &AutoVideoAssignment) -> anyhow::Result<()>;
    async fn save(&self, assignment: &AutoVideoAssignment) -> anyhow::Result<()>;
    async fn find(&self, assignment_id: &ID) -> Option<AutoVideoAssignment>;
    async fn find_by_video(&self, video_id: &ID) -> anyhow::Result<Vec<AutoVideoAssignment>>;
    /// Rows whose sent flag is neither true nor false. Targets of the
    /// normalization pass.
    async fn find_sent_unset(&self) -> anyhow::Result<Vec<AutoVideoAssignment>>;
    /// Rows missing their scheduled dispatch timestamp. Targets of the
    /// schedule repair pass.
    async fn find_schedule_unset(&self) -> anyhow::Result<Vec<AutoVideoAssignment>>;
    /// Unsent rows whose scheduled dispatch timestamp has passed. Rows
    /// with an unset sent flag are excluded, they are picked up after
    /// normalization.
    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<AutoVideoAssignment>>;
}
