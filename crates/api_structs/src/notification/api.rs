use crate::dtos::NotificationLogEntryDTO;
use peakform_domain::{NotificationLogEntry, ID};
use serde::{Deserialize, Serialize};

pub mod send_notification {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub session_id: ID,
        pub phone_number: String,
        pub message: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub delivered: bool,
        pub error: Option<String>,
    }
}

pub mod get_session_notifications {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub session_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub notifications: Vec<NotificationLogEntryDTO>,
    }

    impl APIResponse {
        pub fn new(entries: Vec<NotificationLogEntry>) -> Self {
            Self {
                notifications: entries
                    .into_iter()
                    .map(NotificationLogEntryDTO::new)
                    .collect(),
            }
        }
    }
}
