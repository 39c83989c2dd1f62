use super::IVideoRepo;

use peakform_domain::{Video, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresVideoRepo {
    pool: PgPool,
}

impl PostgresVideoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VideoRaw {
    video_uid: Uuid,
    coach_uid: Uuid,
    title: String,
    url: String,
    auto_assign: bool,
    auto_assign_day_offset: Option<i64>,
}

impl From<VideoRaw> for Video {
    fn from(e: VideoRaw) -> Self {
        Self {
            id: e.video_uid.into(),
            coach_id: e.coach_uid.into(),
            title: e.title,
            url: e.url,
            auto_assign: e.auto_assign,
            auto_assign_day_offset: e.auto_assign_day_offset,
        }
    }
}

#[async_trait::async_trait]
impl IVideoRepo for PostgresVideoRepo {
    async fn insert(&self, video: &Video) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO videos(video_uid, coach_uid, title, url, auto_assign, auto_assign_day_offset)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(video.id.inner_ref())
        .bind(video.coach_id.inner_ref())
        .bind(&video.title)
        .bind(&video.url)
        .bind(video.auto_assign)
        .bind(video.auto_assign_day_offset)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert video: {:?}. DB returned error: {:?}",
                video, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, video_id: &ID) -> Option<Video> {
        let res: Option<VideoRaw> = sqlx::query_as(
            r#"
            SELECT * FROM videos
            WHERE video_uid = $1
            "#,
        )
        .bind(video_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find video with id: {:?} failed. DB returned error: {:?}",
                video_id, e
            );
            e
        })
        .ok()?;
        res.map(|video| video.into())
    }
}
