mod inmemory;
mod postgres;

pub use inmemory::InMemoryPlayerRepo;
use peakform_domain::{Player, ID};
pub use postgres::PostgresPlayerRepo;

#[async_trait::async_trait]
pub trait IPlayerRepo: Send + Sync {
    async fn insert(&self, player: &Player) -> anyhow::Result<()>;
    async fn find(&self, player_id: &ID) -> Option<Player>;
    async fn find_by_coach(&self, coach_id: &ID) -> anyhow::Result<Vec<Player>>;
    /// Single-row atomic bump of the assigned-videos counter.
    async fn increment_video_count(&self, player_id: &ID) -> anyhow::Result<()>;
}
