use peakform_domain::{Player, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDTO {
    pub id: ID,
    pub coach_id: ID,
    pub name: String,
    pub phone: Option<String>,
    pub registered_at: i64,
    pub video_count: i64,
}

impl PlayerDTO {
    pub fn new(player: Player) -> Self {
        Self {
            id: player.id,
            coach_id: player.coach_id,
            name: player.name,
            phone: player.phone,
            registered_at: player.registered_at,
            video_count: player.video_count,
        }
    }
}
