use super::ISessionRepo;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use peakform_domain::{Session, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresSessionRepo {
    pool: PgPool,
}

impl PostgresSessionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SessionRaw {
    session_uid: Uuid,
    coach_uid: Uuid,
    player_uid: Uuid,
    session_date: NaiveDate,
    session_time: NaiveTime,
    location: Option<String>,
    notes: Option<String>,
    reminder_sent: bool,
    started: bool,
}

impl From<SessionRaw> for Session {
    fn from(e: SessionRaw) -> Self {
        Self {
            id: e.session_uid.into(),
            coach_id: e.coach_uid.into(),
            player_id: e.player_uid.into(),
            date: e.session_date,
            time: e.session_time,
            location: e.location,
            notes: e.notes,
            reminder_sent: e.reminder_sent,
            started: e.started,
        }
    }
}

fn to_naive_utc(millis: i64) -> anyhow::Result<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| anyhow::anyhow!("Timestamp out of range: {}", millis))
}

#[async_trait::async_trait]
impl ISessionRepo for PostgresSessionRepo {
    async fn insert(&self, session: &Session) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions
            (session_uid, coach_uid, player_uid, session_date, session_time, location, notes, reminder_sent, started)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(session.id.inner_ref())
        .bind(session.coach_id.inner_ref())
        .bind(session.player_id.inner_ref())
        .bind(session.date)
        .bind(session.time)
        .bind(&session.location)
        .bind(&session.notes)
        .bind(session.reminder_sent)
        .bind(session.started)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert session: {:?}. DB returned error: {:?}",
                session, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, session: &Session) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE sessions
            SET session_date = $2,
            session_time = $3,
            location = $4,
            notes = $5,
            reminder_sent = $6,
            started = $7
            WHERE session_uid = $1
            "#,
        )
        .bind(session.id.inner_ref())
        .bind(session.date)
        .bind(session.time)
        .bind(&session.location)
        .bind(&session.notes)
        .bind(session.reminder_sent)
        .bind(session.started)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save session: {:?}. DB returned error: {:?}",
                session, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, session_id: &ID) -> Option<Session> {
        let res: Option<SessionRaw> = sqlx::query_as(
            r#"
            SELECT * FROM sessions
            WHERE session_uid = $1
            "#,
        )
        .bind(session_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find session with id: {:?} failed. DB returned error: {:?}",
                session_id, e
            );
            e
        })
        .ok()?;
        res.map(|session| session.into())
    }

    async fn delete(&self, session_id: &ID) -> Option<Session> {
        let res: Option<SessionRaw> = sqlx::query_as(
            r#"
            DELETE FROM sessions
            WHERE session_uid = $1
            RETURNING *
            "#,
        )
        .bind(session_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete session with id: {:?} failed. DB returned error: {:?}",
                session_id, e
            );
            e
        })
        .ok()?;
        res.map(|session| session.into())
    }

    async fn find_unstarted_before(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> anyhow::Result<Vec<Session>> {
        let sessions: Vec<SessionRaw> = sqlx::query_as(
            r#"
            SELECT * FROM sessions
            WHERE started = FALSE AND session_date = $1 AND session_time < $2
            "#,
        )
        .bind(date)
        .bind(time)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find unstarted sessions before {} {} failed. DB returned error: {:?}",
                date, time, e
            );
            e
        })?;
        Ok(sessions.into_iter().map(|session| session.into()).collect())
    }

    async fn find_reminder_due_between(
        &self,
        from: i64,
        to: i64,
    ) -> anyhow::Result<Vec<Session>> {
        let sessions: Vec<SessionRaw> = sqlx::query_as(
            r#"
            SELECT * FROM sessions
            WHERE reminder_sent = FALSE
            AND (session_date + session_time) BETWEEN $1 AND $2
            "#,
        )
        .bind(to_naive_utc(from)?)
        .bind(to_naive_utc(to)?)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find sessions with reminder due between {} and {} failed. DB returned error: {:?}",
                from, to, e
            );
            e
        })?;
        Ok(sessions.into_iter().map(|session| session.into()).collect())
    }
}
