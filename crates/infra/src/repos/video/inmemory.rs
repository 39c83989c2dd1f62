use super::IVideoRepo;
use crate::repos::shared::inmemory_repo::*;
use peakform_domain::{Video, ID};

pub struct InMemoryVideoRepo {
    videos: std::sync::Mutex<Vec<Video>>,
}

impl InMemoryVideoRepo {
    pub fn new() -> Self {
        Self {
            videos: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IVideoRepo for InMemoryVideoRepo {
    async fn insert(&self, video: &Video) -> anyhow::Result<()> {
        insert(video, &self.videos);
        Ok(())
    }

    async fn find(&self, video_id: &ID) -> Option<Video> {
        find(video_id, &self.videos)
    }
}
