use super::IAutoVideoAssignmentRepo;

use peakform_domain::{AutoVideoAssignment, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresAutoVideoAssignmentRepo {
    pool: PgPool,
}

impl PostgresAutoVideoAssignmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AutoVideoAssignmentRaw {
    assignment_uid: Uuid,
    player_uid: Uuid,
    video_uid: Uuid,
    scheduled_at: Option<i64>,
    sent: Option<bool>,
}

impl From<AutoVideoAssignmentRaw> for AutoVideoAssignment {
    fn from(e: AutoVideoAssignmentRaw) -> Self {
        Self {
            id: e.assignment_uid.into(),
            player_id: e.player_uid.into(),
            video_id: e.video_uid.into(),
            scheduled_at: e.scheduled_at,
            sent: e.sent,
        }
    }
}

#[async_trait::async_trait]
impl IAutoVideoAssignmentRepo for PostgresAutoVideoAssignmentRepo {
    async fn insert(&self, assignment: &AutoVideoAssignment) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO auto_video_assignments
            (assignment_uid, player_uid, video_uid, scheduled_at, sent)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(assignment.id.inner_ref())
        .bind(assignment.player_id.inner_ref())
        .bind(assignment.video_id.inner_ref())
        .bind(assignment.scheduled_at)
        .bind(assignment.sent)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert auto video assignment: {:?}. DB returned error: {:?}",
                assignment, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, assignment: &AutoVideoAssignment) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE auto_video_assignments
            SET scheduled_at = $2,
            sent = $3
            WHERE assignment_uid = $1
            "#,
        )
        .bind(assignment.id.inner_ref())
        .bind(assignment.scheduled_at)
        .bind(assignment.sent)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save auto video assignment: {:?}. DB returned error: {:?}",
                assignment, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, assignment_id: &ID) -> Option<AutoVideoAssignment> {
        let res: Option<AutoVideoAssignmentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM auto_video_assignments
            WHERE assignment_uid = $1
            "#,
        )
        .bind(assignment_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find auto video assignment with id: {:?} failed. DB returned error: {:?}",
                assignment_id, e
            );
            e
        })
        .ok()?;
        res.map(|assignment| assignment.into())
    }

    async fn find_by_video(&self, video_id: &ID) -> anyhow::Result<Vec<AutoVideoAssignment>> {
        let assignments: Vec<AutoVideoAssignmentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM auto_video_assignments
            WHERE video_uid = $1
            "#,
        )
        .bind(video_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find auto video assignments for video: {:?} failed. DB returned error: {:?}",
                video_id, e
            );
            e
        })?;
        Ok(assignments
            .into_iter()
            .map(|assignment| assignment.into())
            .collect())
    }

    async fn find_sent_unset(&self) -> anyhow::Result<Vec<AutoVideoAssignment>> {
        let assignments: Vec<AutoVideoAssignmentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM auto_video_assignments
            WHERE sent IS NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find auto video assignments with unset sent flag failed. DB returned error: {:?}",
                e
            );
            e
        })?;
        Ok(assignments
            .into_iter()
            .map(|assignment| assignment.into())
            .collect())
    }

    async fn find_schedule_unset(&self) -> anyhow::Result<Vec<AutoVideoAssignment>> {
        let assignments: Vec<AutoVideoAssignmentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM auto_video_assignments
            WHERE scheduled_at IS NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find auto video assignments with unset schedule failed. DB returned error: {:?}",
                e
            );
            e
        })?;
        Ok(assignments
            .into_iter()
            .map(|assignment| assignment.into())
            .collect())
    }

    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<AutoVideoAssignment>> {
        let assignments: Vec<AutoVideoAssignmentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM auto_video_assignments
            WHERE sent = FALSE AND scheduled_at IS NOT NULL AND scheduled_at <= $1
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find due auto video assignments at {} failed. DB returned error: {:?}",
                now, e
            );
            e
        })?;
        Ok(assignments
            .into_iter()
            .map(|assignment| assignment.into())
            .collect())
    }
}
