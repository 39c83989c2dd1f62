use super::ICoachRepo;
use crate::repos::shared::inmemory_repo::*;
use peakform_domain::{Coach, ID};

pub struct InMemoryCoachRepo {
    coaches: std::sync::Mutex<Vec<Coach>>,
}

impl InMemoryCoachRepo {
    pub fn new() -> Self {
        Self {
            coaches: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICoachRepo for InMemoryCoachRepo {
    async fn insert(&self, coach: &Coach) -> anyhow::Result<()> {
        insert(coach, &self.coaches);
        Ok(())
    }

    async fn find(&self, coach_id: &ID) -> Option<Coach> {
        find(coach_id, &self.coaches)
    }
}
