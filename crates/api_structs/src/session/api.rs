use crate::dtos::{ReminderAttemptDTO, SessionDTO};
use chrono::{NaiveDate, NaiveTime};
use peakform_domain::{Session, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session: SessionDTO,
}

impl SessionResponse {
    pub fn new(session: Session) -> Self {
        Self {
            session: SessionDTO::new(session),
        }
    }
}

pub mod create_session {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub coach_id: ID,
        pub player_id: ID,
        pub date: NaiveDate,
        pub time: NaiveTime,
        pub location: Option<String>,
        pub notes: Option<String>,
    }

    pub type APIResponse = SessionResponse;
}

pub mod get_session {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub session_id: ID,
    }

    pub type APIResponse = SessionResponse;
}

pub mod delete_session {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub session_id: ID,
    }

    pub type APIResponse = SessionResponse;
}

pub mod transition_sessions {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub transitioned: usize,
        pub timestamp: i64,
    }
}

pub mod send_session_reminders {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub attempted: usize,
        pub sent: usize,
        pub failed: usize,
        pub results: Vec<ReminderAttemptDTO>,
    }
}
