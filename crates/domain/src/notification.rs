use crate::shared::entity::{Entity, ID};
use chrono::{NaiveDate, NaiveTime};
use std::str::FromStr;

/// Outcome of a single dispatch attempt against the messaging gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Success,
    Error,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl FromStr for NotificationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            _ => Err(anyhow::anyhow!("Invalid notification status: {}", s)),
        }
    }
}

/// One immutable record of a dispatch attempt. The log is append-only,
/// nothing in the pipeline updates or deletes entries.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationLogEntry {
    pub id: ID,
    pub session_id: ID,
    /// The rendered message body that was handed to the gateway.
    pub message: String,
    pub status: NotificationStatus,
    /// Gateway error payload serialized as text, present iff `status` is
    /// `Error`.
    pub error: Option<String>,
    pub created_at: i64,
}

impl NotificationLogEntry {
    pub fn success(session_id: ID, message: String, created_at: i64) -> Self {
        Self {
            id: Default::default(),
            session_id,
            message,
            status: NotificationStatus::Success,
            error: None,
            created_at,
        }
    }

    pub fn error(session_id: ID, message: String, error: String, created_at: i64) -> Self {
        Self {
            id: Default::default(),
            session_id,
            message,
            status: NotificationStatus::Error,
            error: Some(error),
            created_at,
        }
    }
}

impl Entity for NotificationLogEntry {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Template for the text message sent ahead of a session start.
#[derive(Debug)]
pub struct ReminderMessage<'a> {
    pub player_name: &'a str,
    pub coach_name: &'a str,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ReminderMessage<'_> {
    pub fn render(&self) -> String {
        format!(
            "Hi {}! This is a reminder of your session with {} on {} at {}. See you there!",
            self.player_name,
            self.coach_name,
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
        )
    }
}
