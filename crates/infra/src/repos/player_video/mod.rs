mod inmemory;
mod postgres;

pub use inmemory::InMemoryPlayerVideoRepo;
use peakform_domain::{PlayerVideo, ID};
pub use postgres::PostgresPlayerVideoRepo;

#[async_trait::async_trait]
pub trait IPlayerVideoRepo: Send + Sync {
    async fn insert(&self, player_video: &PlayerVideo) -> anyhow::Result<()>;
    async fn find_by_player_and_video(
        &self,
        player_id: &ID,
        video_id: &ID,
    ) -> Option<PlayerVideo>;
}
