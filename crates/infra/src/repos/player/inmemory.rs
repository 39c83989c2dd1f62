use super::IPlayerRepo;
use crate::repos::shared::inmemory_repo::*;
use peakform_domain::{Player, ID};

pub struct InMemoryPlayerRepo {
    players: std::sync::Mutex<Vec<Player>>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self {
            players: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPlayerRepo for InMemoryPlayerRepo {
    async fn insert(&self, player: &Player) -> anyhow::Result<()> {
        insert(player, &self.players);
        Ok(())
    }

    async fn find(&self, player_id: &ID) -> Option<Player> {
        find(player_id, &self.players)
    }

    async fn find_by_coach(&self, coach_id: &ID) -> anyhow::Result<Vec<Player>> {
        let res = find_by(&self.players, |player| player.coach_id == *coach_id);
        Ok(res)
    }

    async fn increment_video_count(&self, player_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.players,
            |player| player.id == *player_id,
            |player| player.video_count += 1,
        );
        Ok(())
    }
}
