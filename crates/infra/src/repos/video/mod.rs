mod inmemory;
mod postgres;

pub use inmemory::InMemoryVideoRepo;
use peakform_domain::{Video, ID};
pub use postgres::PostgresVideoRepo;

#[async_trait::async_trait]
pub trait IVideoRepo: Send + Sync {
    async fn insert(&self, video: &Video) -> anyhow::Result<()>;
    async fn find(&self, video_id: &ID) -> Option<Video>;
}
