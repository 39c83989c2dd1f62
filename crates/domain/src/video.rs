use crate::shared::entity::{Entity, ID};

/// Days after player registration at which an auto-assigned video is
/// delivered when the video does not configure its own offset.
pub const DEFAULT_AUTO_ASSIGN_DAY_OFFSET: i64 = 1;

/// A training `Video` that coaches make available to players. Videos
/// flagged with `auto_assign` are delivered to each player some days
/// after the player registered.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: ID,
    /// The `Coach` who owns the video; auto assignment targets this
    /// coach's players.
    pub coach_id: ID,
    pub title: String,
    pub url: String,
    pub auto_assign: bool,
    /// Days after a player's registration at which the video should be
    /// delivered. `None` falls back to `DEFAULT_AUTO_ASSIGN_DAY_OFFSET`.
    pub auto_assign_day_offset: Option<i64>,
}

impl Video {
    pub fn new(coach_id: ID, title: &str, url: &str) -> Self {
        Self {
            id: Default::default(),
            coach_id,
            title: title.to_string(),
            url: url.to_string(),
            auto_assign: false,
            auto_assign_day_offset: None,
        }
    }

    pub fn day_offset(&self) -> i64 {
        self.auto_assign_day_offset
            .unwrap_or(DEFAULT_AUTO_ASSIGN_DAY_OFFSET)
    }
}

impl Entity for Video {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
