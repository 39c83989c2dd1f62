use super::ISessionRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{NaiveDate, NaiveTime};
use peakform_domain::{Session, ID};

pub struct InMemorySessionRepo {
    sessions: std::sync::Mutex<Vec<Session>>,
}

impl InMemorySessionRepo {
    pub fn new() -> Self {
        Self {
            sessions: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISessionRepo for InMemorySessionRepo {
    async fn insert(&self, session: &Session) -> anyhow::Result<()> {
        insert(session, &self.sessions);
        Ok(())
    }

    async fn save(&self, session: &Session) -> anyhow::Result<()> {
        save(session, &self.sessions);
        Ok(())
    }

    async fn find(&self, session_id: &ID) -> Option<Session> {
        find(session_id, &self.sessions)
    }

    async fn delete(&self, session_id: &ID) -> Option<Session> {
        delete(session_id, &self.sessions)
    }

    async fn find_unstarted_before(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> anyhow::Result<Vec<Session>> {
        let res = find_by(&self.sessions, |session| {
            !session.started && session.date == date && session.time < time
        });
        Ok(res)
    }

    async fn find_reminder_due_between(
        &self,
        from: i64,
        to: i64,
    ) -> anyhow::Result<Vec<Session>> {
        let res = find_by(&self.sessions, |session| {
            if session.reminder_sent {
                return false;
            }
            let start = session.start_timestamp_millis();
            start >= from && start <= to
        });
        Ok(res)
    }
}
