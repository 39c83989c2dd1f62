use crate::dtos::PlayerDTO;
use peakform_domain::{Player, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub player: PlayerDTO,
}

impl PlayerResponse {
    pub fn new(player: Player) -> Self {
        Self {
            player: PlayerDTO::new(player),
        }
    }
}

pub mod create_player {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub coach_id: ID,
        pub name: String,
        pub phone: Option<String>,
    }

    pub type APIResponse = PlayerResponse;
}

pub mod get_player {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub player_id: ID,
    }

    pub type APIResponse = PlayerResponse;
}
