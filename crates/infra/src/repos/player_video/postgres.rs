use super::IPlayerVideoRepo;

use peakform_domain::{PlayerVideo, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresPlayerVideoRepo {
    pool: PgPool,
}

impl PostgresPlayerVideoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PlayerVideoRaw {
    player_video_uid: Uuid,
    player_uid: Uuid,
    video_uid: Uuid,
    assigned_by: Uuid,
    watched: bool,
    assigned_at: i64,
}

impl From<PlayerVideoRaw> for PlayerVideo {
    fn from(e: PlayerVideoRaw) -> Self {
        Self {
            id: e.player_video_uid.into(),
            player_id: e.player_uid.into(),
            video_id: e.video_uid.into(),
            assigned_by: e.assigned_by.into(),
            watched: e.watched,
            assigned_at: e.assigned_at,
        }
    }
}

#[async_trait::async_trait]
impl IPlayerVideoRepo for PostgresPlayerVideoRepo {
    async fn insert(&self, player_video: &PlayerVideo) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO player_videos
            (player_video_uid, player_uid, video_uid, assigned_by, watched, assigned_at)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(player_video.id.inner_ref())
        .bind(player_video.player_id.inner_ref())
        .bind(player_video.video_id.inner_ref())
        .bind(player_video.assigned_by.inner_ref())
        .bind(player_video.watched)
        .bind(player_video.assigned_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert player video: {:?}. DB returned error: {:?}",
                player_video, e
            );
            e
        })?;
        Ok(())
    }

    async fn find_by_player_and_video(
        &self,
        player_id: &ID,
        video_id: &ID,
    ) -> Option<PlayerVideo> {
        let res: Option<PlayerVideoRaw> = sqlx::query_as(
            r#"
            SELECT * FROM player_videos
            WHERE player_uid = $1 AND video_uid = $2
            "#,
        )
        .bind(player_id.inner_ref())
        .bind(video_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find player video for player: {:?} and video: {:?} failed. DB returned error: {:?}",
                player_id, video_id, e
            );
            e
        })
        .ok()?;
        res.map(|player_video| player_video.into())
    }
}
