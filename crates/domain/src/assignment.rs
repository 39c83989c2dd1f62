use crate::shared::entity::{Entity, ID};

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// UTC millis at which an auto-assigned video becomes due for a player
/// registered at `registered_at`.
pub fn scheduled_dispatch_at(registered_at: i64, day_offset: i64) -> i64 {
    registered_at + day_offset * MILLIS_PER_DAY
}

/// A rule-driven, time-delayed delivery of a `Video` to a `Player`.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoVideoAssignment {
    pub id: ID,
    pub player_id: ID,
    pub video_id: ID,
    /// UTC millis at which the video should be delivered. Stored rows can
    /// lack this value; the repair pass must never leave it unset.
    pub scheduled_at: Option<i64>,
    /// Tri-state in stored data: absent rows predate the flag and must be
    /// normalized to `false` before any dispatch decision.
    pub sent: Option<bool>,
}

impl AutoVideoAssignment {
    pub fn new(player_id: ID, video_id: ID, scheduled_at: i64) -> Self {
        Self {
            id: Default::default(),
            player_id,
            video_id,
            scheduled_at: Some(scheduled_at),
            sent: Some(false),
        }
    }

    pub fn is_sent(&self) -> bool {
        self.sent.unwrap_or(false)
    }

    pub fn is_due(&self, now: i64) -> bool {
        !self.is_sent() && matches!(self.scheduled_at, Some(ts) if ts <= now)
    }
}

impl Entity for AutoVideoAssignment {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// The watch record marking a video as assigned and visible to a player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerVideo {
    pub id: ID,
    pub player_id: ID,
    pub video_id: ID,
    /// The `Coach` on whose behalf the video was assigned.
    pub assigned_by: ID,
    pub watched: bool,
    pub assigned_at: i64,
}

impl PlayerVideo {
    pub fn new(player_id: ID, video_id: ID, assigned_by: ID, assigned_at: i64) -> Self {
        Self {
            id: Default::default(),
            player_id,
            video_id,
            assigned_by,
            watched: false,
            assigned_at,
        }
    }
}

impl Entity for PlayerVideo {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn dispatch_schedule_is_registration_plus_offset_days() {
        let registered_at = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        let expected = Utc
            .with_ymd_and_hms(2024, 1, 4, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(scheduled_dispatch_at(registered_at, 3), expected);
    }

    #[test]
    fn unset_sent_flag_reads_as_not_sent() {
        let mut assignment =
            AutoVideoAssignment::new(Default::default(), Default::default(), 1000);
        assignment.sent = None;
        assert!(!assignment.is_sent());
        assert!(assignment.is_due(1000));
        assert!(!assignment.is_due(999));

        assignment.sent = Some(true);
        assert!(!assignment.is_due(2000));
    }

    #[test]
    fn assignment_without_schedule_is_never_due() {
        let mut assignment =
            AutoVideoAssignment::new(Default::default(), Default::default(), 1000);
        assignment.scheduled_at = None;
        assert!(!assignment.is_due(i64::MAX));
    }
}
