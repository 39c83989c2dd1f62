use super::IPlayerRepo;

use peakform_domain::{Player, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresPlayerRepo {
    pool: PgPool,
}

impl PostgresPlayerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PlayerRaw {
    player_uid: Uuid,
    coach_uid: Uuid,
    name: String,
    phone: Option<String>,
    registered_at: i64,
    video_count: i64,
}

impl From<PlayerRaw> for Player {
    fn from(e: PlayerRaw) -> Self {
        Self {
            id: e.player_uid.into(),
            coach_id: e.coach_uid.into(),
            name: e.name,
            phone: e.phone,
            registered_at: e.registered_at,
            video_count: e.video_count,
        }
    }
}

#[async_trait::async_trait]
impl IPlayerRepo for PostgresPlayerRepo {
    async fn insert(&self, player: &Player) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO players
            (player_uid, coach_uid, name, phone, registered_at, video_count)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(player.id.inner_ref())
        .bind(player.coach_id.inner_ref())
        .bind(&player.name)
        .bind(&player.phone)
        .bind(player.registered_at)
        .bind(player.video_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert player: {:?}. DB returned error: {:?}",
                player, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, player_id: &ID) -> Option<Player> {
        let res: Option<PlayerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM players
            WHERE player_uid = $1
            "#,
        )
        .bind(player_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find player with id: {:?} failed. DB returned error: {:?}",
                player_id, e
            );
            e
        })
        .ok()?;
        res.map(|player| player.into())
    }

    async fn find_by_coach(&self, coach_id: &ID) -> anyhow::Result<Vec<Player>> {
        let players: Vec<PlayerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM players
            WHERE coach_uid = $1
            "#,
        )
        .bind(coach_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find players for coach: {:?} failed. DB returned error: {:?}",
                coach_id, e
            );
            e
        })?;
        Ok(players.into_iter().map(|player| player.into()).collect())
    }

    async fn increment_video_count(&self, player_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE players
            SET video_count = video_count + 1
            WHERE player_uid = $1
            "#,
        )
        .bind(player_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to increment video count for player: {:?}. DB returned error: {:?}",
                player_id, e
            );
            e
        })?;
        Ok(())
    }
}
