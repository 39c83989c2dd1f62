mod auto_video_assignment;
mod coach;
mod notification_log;
mod player;
mod player_video;
mod session;
mod shared;
mod video;

pub use auto_video_assignment::{
    IAutoVideoAssignmentRepo, InMemoryAutoVideoAssignmentRepo, PostgresAutoVideoAssignmentRepo,
};
pub use coach::{ICoachRepo, InMemoryCoachRepo, PostgresCoachRepo};
pub use notification_log::{
    INotificationLogRepo, InMemoryNotificationLogRepo, PostgresNotificationLogRepo,
};
pub use player::{IPlayerRepo, InMemoryPlayerRepo, PostgresPlayerRepo};
pub use player_video::{IPlayerVideoRepo, InMemoryPlayerVideoRepo, PostgresPlayerVideoRepo};
pub use session::{ISessionRepo, InMemorySessionRepo, PostgresSessionRepo};
pub use video::{IVideoRepo, InMemoryVideoRepo, PostgresVideoRepo};

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub coaches: Arc<dyn ICoachRepo>,
    pub players: Arc<dyn IPlayerRepo>,
    pub sessions: Arc<dyn ISessionRepo>,
    pub videos: Arc<dyn IVideoRepo>,
    pub auto_video_assignments: Arc<dyn IAutoVideoAssignmentRepo>,
    pub player_videos: Arc<dyn IPlayerVideoRepo>,
    pub notification_log: Arc<dyn INotificationLogRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        sqlx::query("SELECT 1").execute(&pool).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            coaches: Arc::new(PostgresCoachRepo::new(pool.clone())),
            players: Arc::new(PostgresPlayerRepo::new(pool.clone())),
            sessions: Arc::new(PostgresSessionRepo::new(pool.clone())),
            videos: Arc::new(PostgresVideoRepo::new(pool.clone())),
            auto_video_assignments: Arc::new(PostgresAutoVideoAssignmentRepo::new(pool.clone())),
            player_videos: Arc::new(PostgresPlayerVideoRepo::new(pool.clone())),
            notification_log: Arc::new(PostgresNotificationLogRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            coaches: Arc::new(InMemoryCoachRepo::new()),
            players: Arc::new(InMemoryPlayerRepo::new()),
            sessions: Arc::new(InMemorySessionRepo::new()),
            videos: Arc::new(InMemoryVideoRepo::new()),
            auto_video_assignments: Arc::new(InMemoryAutoVideoAssignmentRepo::new()),
            player_videos: Arc::new(InMemoryPlayerVideoRepo::new()),
            notification_log: Arc::new(InMemoryNotificationLogRepo::new()),
        }
    }
}
