use crate::dtos::VideoDTO;
use peakform_domain::{Video, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub video: VideoDTO,
}

impl VideoResponse {
    pub fn new(video: Video) -> Self {
        Self {
            video: VideoDTO::new(video),
        }
    }
}

pub mod create_video {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub coach_id: ID,
        pub title: String,
        pub url: String,
        pub auto_assign: Option<bool>,
        pub auto_assign_day_offset: Option<i64>,
    }

    pub type APIResponse = VideoResponse;
}

pub mod process_auto_assignments {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub repaired_null_sent: usize,
        pub repaired_null_schedule: usize,
        pub dispatched: usize,
    }
}
