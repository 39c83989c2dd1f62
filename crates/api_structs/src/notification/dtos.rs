use peakform_domain::{NotificationLogEntry, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationLogEntryDTO {
    pub id: ID,
    pub session_id: ID,
    pub message: String,
    pub status: String,
    pub error: Option<String>,
    pub created_at: i64,
}

impl NotificationLogEntryDTO {
    pub fn new(entry: NotificationLogEntry) -> Self {
        Self {
            id: entry.id,
            session_id: entry.session_id,
            message: entry.message,
            status: entry.status.as_str().to_string(),
            error: entry.error,
            created_at: entry.created_at,
        }
    }
}
