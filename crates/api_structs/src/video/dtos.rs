use peakform_domain::{Video, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VideoDTO {
    pub id: ID,
    pub coach_id: ID,
    pub title: String,
    pub url: String,
    pub auto_assign: bool,
    pub auto_assign_day_offset: Option<i64>,
}

impl VideoDTO {
    pub fn new(video: Video) -> Self {
        Self {
            id: video.id,
            coach_id: video.coach_id,
            title: video.title,
            url: video.url,
            auto_assign: video.auto_assign,
            auto_assign_day_offset: video.auto_assign_day_offset,
        }
    }
}
