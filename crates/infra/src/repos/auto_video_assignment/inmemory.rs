use super::IAutoVideoAssignmentRepo;
use crate::repos::shared::inmemory_repo::*;
use peakform_domain::{AutoVideoAssignment, ID};

pub struct InMemoryAutoVideoAssignmentRepo {
    assignments: std::sync::Mutex<Vec<AutoVideoAssignment>>,
}

impl InMemoryAutoVideoAssignmentRepo {
    pub fn new() -> Self {
        Self {
            assignments: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAutoVideoAssignmentRepo for InMemoryAutoVideoAssignmentRepo {
    async fn insert(&self, assignment: &AutoVideoAssignment) -> anyhow::Result<()> {
        insert(assignment, &self.assignments);
        Ok(())
    }

    async fn save(&self, assignment: &AutoVideoAssignment) -> anyhow::Result<()> {
        save(assignment, &self.assignments);
        Ok(())
    }

    async fn find(&self, assignment_id: &ID) -> Option<AutoVideoAssignment> {
        find(assignment_id, &self.assignments)
    }

    async fn find_by_video(&self, video_id: &ID) -> anyhow::Result<Vec<AutoVideoAssignment>> {
        let res = find_by(&self.assignments, |assignment| {
            assignment.video_id == *video_id
        });
        Ok(res)
    }

    async fn find_sent_unset(&self) -> anyhow::Result<Vec<AutoVideoAssignment>> {
        let res = find_by(&self.assignments, |assignment| assignment.sent.is_none());
        Ok(res)
    }

    async fn find_schedule_unset(&self) -> anyhow::Result<Vec<AutoVideoAssignment>> {
        let res = find_by(&self.assignments, |assignment| {
            assignment.scheduled_at.is_none()
        });
        Ok(res)
    }

    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<AutoVideoAssignment>> {
        let res = find_by(&self.assignments, |assignment| {
            assignment.sent == Some(false)
                && matches!(assignment.scheduled_at, Some(ts) if ts <= now)
        });
        Ok(res)
    }
}
