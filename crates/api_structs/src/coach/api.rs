use crate::dtos::CoachDTO;
use peakform_domain::Coach;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachResponse {
    pub coach: CoachDTO,
}

impl CoachResponse {
    pub fn new(coach: Coach) -> Self {
        Self {
            coach: CoachDTO::new(coach),
        }
    }
}

pub mod create_coach {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub phone: Option<String>,
    }

    pub type APIResponse = CoachResponse;
}
