use crate::shared::entity::{Entity, ID};

/// A `Player` belongs to a `Coach` and owns zero or more `Session`s and
/// video assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: ID,
    pub coach_id: ID,
    pub name: String,
    /// Phone number in international format, the reminder recipient.
    pub phone: Option<String>,
    /// UTC millis at registration. Anchors the scheduling of auto video
    /// assignments.
    pub registered_at: i64,
    /// Number of videos that have been assigned to this player so far.
    pub video_count: i64,
}

impl Player {
    pub fn new(coach_id: ID, name: &str, registered_at: i64) -> Self {
        Self {
            id: Default::default(),
            coach_id,
            name: name.to_string(),
            phone: None,
            registered_at,
            video_count: 0,
        }
    }
}

impl Entity for Player {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
