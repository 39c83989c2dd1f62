use super::IPlayerVideoRepo;
use crate::repos::shared::inmemory_repo::*;
use peakform_domain::{PlayerVideo, ID};

pub struct InMemoryPlayerVideoRepo {
    player_videos: std::sync::Mutex<Vec<PlayerVideo>>,
}

impl InMemoryPlayerVideoRepo {
    pub fn new() -> Self {
        Self {
            player_videos: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPlayerVideoRepo for InMemoryPlayerVideoRepo {
    async fn insert(&self, player_video: &PlayerVideo) -> anyhow::Result<()> {
        insert(player_video, &self.player_videos);
        Ok(())
    }

    async fn find_by_player_and_video(
        &self,
        player_id: &ID,
        video_id: &ID,
    ) -> Option<PlayerVideo> {
        find_by(&self.player_videos, |player_video| {
            player_video.player_id == *player_id && player_video.video_id == *video_id
        })
        .into_iter()
        .next()
    }
}
