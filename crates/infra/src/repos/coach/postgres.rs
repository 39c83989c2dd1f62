use super::ICoachRepo;

use peakform_domain::{Coach, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresCoachRepo {
    pool: PgPool,
}

impl PostgresCoachRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CoachRaw {
    coach_uid: Uuid,
    name: String,
    phone: Option<String>,
}

impl From<CoachRaw> for Coach {
    fn from(e: CoachRaw) -> Self {
        Self {
            id: e.coach_uid.into(),
            name: e.name,
            phone: e.phone,
        }
    }
}

#[async_trait::async_trait]
impl ICoachRepo for PostgresCoachRepo {
    async fn insert(&self, coach: &Coach) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO coaches(coach_uid, name, phone)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(coach.id.inner_ref())
        .bind(&coach.name)
        .bind(&coach.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert coach: {:?}. DB returned error: {:?}",
                coach, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, coach_id: &ID) -> Option<Coach> {
        let res: Option<CoachRaw> = sqlx::query_as(
            r#"
            SELECT * FROM coaches
            WHERE coach_uid = $1
            "#,
        )
        .bind(coach_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find coach with id: {:?} failed. DB returned error: {:?}",
                coach_id, e
            );
            e
        })
        .ok()?;
        res.map(|coach| coach.into())
    }
}
