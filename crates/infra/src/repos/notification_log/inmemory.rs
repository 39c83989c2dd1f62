use super::INotificationLogRepo;
use crate::repos::shared::inmemory_repo::*;
use peakform_domain::{NotificationLogEntry, ID};

pub struct InMemoryNotificationLogRepo {
    entries: std::sync::Mutex<Vec<NotificationLogEntry>>,
}

impl InMemoryNotificationLogRepo {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl INotificationLogRepo for InMemoryNotificationLogRepo {
    async fn insert(&self, entry: &NotificationLogEntry) -> anyhow::Result<()> {
        insert(entry, &self.entries);
        Ok(())
    }

    async fn find_by_session(
        &self,
        session_id: &ID,
    ) -> anyhow::Result<Vec<NotificationLogEntry>> {
        let mut res = find_by(&self.entries, |entry| entry.session_id == *session_id);
        res.sort_by_key(|entry| entry.created_at);
        Ok(res)
    }
}
