use chrono::{NaiveDate, NaiveTime};
use peakform_domain::{Session, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionDTO {
    pub id: ID,
    pub coach_id: ID,
    pub player_id: ID,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub reminder_sent: bool,
    pub started: bool,
}

impl SessionDTO {
    pub fn new(session: Session) -> Self {
        Self {
            id: session.id,
            coach_id: session.coach_id,
            player_id: session.player_id,
            date: session.date,
            time: session.time,
            location: session.location,
            notes: session.notes,
            reminder_sent: session.reminder_sent,
            started: session.started,
        }
    }
}

/// One row of the reminder run report: what happened to one session.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderAttemptDTO {
    pub session_id: ID,
    pub status: String,
    pub error: Option<String>,
}
