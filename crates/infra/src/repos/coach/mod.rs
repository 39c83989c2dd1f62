mod inmemory;
mod postgres;

pub use inmemory::InMemoryCoachRepo;
use peakform_domain::{Coach, ID};
pub use postgres::PostgresCoachRepo;

#[async_trait::async_trait]
pub trait ICoachRepo: Send + Sync {
    async fn insert(&self, coach: &Coach) -> anyhow::Result<()>;
    async fn find(&self, coach_id: &ID) -> Option<Coach>;
}
