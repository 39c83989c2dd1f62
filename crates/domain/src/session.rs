use crate::shared::entity::{Entity, ID};
use chrono::{NaiveDate, NaiveTime};

/// A `Session` is a scheduled meeting between a `Coach` and a `Player`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: ID,
    pub coach_id: ID,
    pub player_id: ID,
    /// Calendar date of the scheduled start, UTC.
    pub date: NaiveDate,
    /// Time of day of the scheduled start, UTC.
    pub time: NaiveTime,
    pub location: Option<String>,
    pub notes: Option<String>,
    /// Guards against duplicate reminders, at most one reminder is sent
    /// per session.
    pub reminder_sent: bool,
    /// Flipped by the session transition job once the scheduled start has
    /// passed.
    pub started: bool,
}

impl Session {
    pub fn new(coach_id: ID, player_id: ID, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: Default::default(),
            coach_id,
            player_id,
            date,
            time,
            location: None,
            notes: None,
            reminder_sent: false,
            started: false,
        }
    }

    /// UTC millisecond timestamp of the scheduled start.
    pub fn start_timestamp_millis(&self) -> i64 {
        self.date.and_time(self.time).and_utc().timestamp_millis()
    }
}

impl Entity for Session {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_timestamp_is_utc_millis_of_date_and_time() {
        let session = Session::new(
            Default::default(),
            Default::default(),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        // 2024-05-10T09:00:00Z
        assert_eq!(session.start_timestamp_millis(), 1715331600000);
    }
}
