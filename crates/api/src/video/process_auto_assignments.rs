use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use peakform_api_structs::process_auto_assignments::*;
use peakform_domain::{scheduled_dispatch_at, AutoVideoAssignment, PlayerVideo};
use peakform_infra::PeakformContext;
use tracing::error;

pub async fn process_auto_assignments_controller(
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let usecase = ProcessAutoAssignmentsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                success: true,
                repaired_null_sent: res.repaired_null_sent,
                repaired_null_schedule: res.repaired_null_schedule,
                dispatched: res.dispatched,
            })
        })
        .map_err(PeakformError::from)
}

/// Repairs incomplete auto assignment rows, then delivers the due ones:
/// creates the player-facing watch record, bumps the player's video
/// counter and flips the row to sent. Every row is processed
/// independently, a failing row is logged and retried on the next run.
#[derive(Debug)]
pub struct ProcessAutoAssignmentsUseCase {}

#[derive(Debug, Default)]
pub struct ProcessedAutoAssignments {
    pub repaired_null_sent: usize,
    pub repaired_null_schedule: usize,
    pub dispatched: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for PeakformError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ProcessAutoAssignmentsUseCase {
    type Response = ProcessedAutoAssignments;

    type Error = UseCaseError;

    const NAME: &'static str = "ProcessAutoAssignments";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let mut counts = ProcessedAutoAssignments::default();

        // Repair phase: rows whose sent flag was never written read as
        // not sent.
        let sent_unset = ctx
            .repos
            .auto_video_assignments
            .find_sent_unset()
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        for mut assignment in sent_unset {
            assignment.sent = Some(false);
            match ctx.repos.auto_video_assignments.save(&assignment).await {
                Ok(()) => counts.repaired_null_sent += 1,
                Err(e) => error!(
                    "Unable to normalize sent flag for assignment {}: {:?}",
                    assignment.id, e
                ),
            }
        }

        // Repair phase: recompute missing dispatch schedules from the
        // player's registration time and the video's day offset.
        let schedule_unset = ctx
            .repos
            .auto_video_assignments
            .find_schedule_unset()
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        for mut assignment in schedule_unset {
            let video = match ctx.repos.videos.find(&assignment.video_id).await {
                Some(video) => video,
                None => {
                    error!(
                        "Skipping schedule repair for assignment {}: video {} not found",
                        assignment.id, assignment.video_id
                    );
                    continue;
                }
            };
            let player = match ctx.repos.players.find(&assignment.player_id).await {
                Some(player) => player,
                None => {
                    error!(
                        "Skipping schedule repair for assignment {}: player {} not found",
                        assignment.id, assignment.player_id
                    );
                    continue;
                }
            };

            assignment.scheduled_at =
                Some(scheduled_dispatch_at(player.registered_at, video.day_offset()));
            match ctx.repos.auto_video_assignments.save(&assignment).await {
                Ok(()) => counts.repaired_null_schedule += 1,
                Err(e) => error!(
                    "Unable to repair schedule for assignment {}: {:?}",
                    assignment.id, e
                ),
            }
        }

        // Dispatch phase.
        let due = ctx
            .repos
            .auto_video_assignments
            .find_due(now)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        for assignment in due {
            if dispatch_assignment(&assignment, ctx, now).await {
                counts.dispatched += 1;
            }
        }

        Ok(counts)
    }
}

/// Delivers one due assignment. Returns false when the row was skipped;
/// a skipped row keeps sent = false and is retried on every later run.
async fn dispatch_assignment(
    assignment: &AutoVideoAssignment,
    ctx: &PeakformContext,
    now: i64,
) -> bool {
    // The coach lookup gates the whole dispatch: without it the watch
    // record would lack its assigner.
    let player = match ctx.repos.players.find(&assignment.player_id).await {
        Some(player) => player,
        None => {
            error!(
                "Skipping assignment {}: player {} not found",
                assignment.id, assignment.player_id
            );
            return false;
        }
    };
    let coach = match ctx.repos.coaches.find(&player.coach_id).await {
        Some(coach) => coach,
        None => {
            error!(
                "Skipping assignment {}: coach {} not found",
                assignment.id, player.coach_id
            );
            return false;
        }
    };

    let existing = ctx
        .repos
        .player_videos
        .find_by_player_and_video(&assignment.player_id, &assignment.video_id)
        .await;
    if existing.is_none() {
        let player_video = PlayerVideo::new(
            assignment.player_id.clone(),
            assignment.video_id.clone(),
            coach.id.clone(),
            now,
        );
        if let Err(e) = ctx.repos.player_videos.insert(&player_video).await {
            error!(
                "Unable to create watch record for assignment {}: {:?}",
                assignment.id, e
            );
            return false;
        }
        if let Err(e) = ctx
            .repos
            .players
            .increment_video_count(&assignment.player_id)
            .await
        {
            error!(
                "Unable to increment video count for player {}: {:?}",
                assignment.player_id, e
            );
        }
    }

    let mut assignment = assignment.clone();
    assignment.sent = Some(true);
    match ctx.repos.auto_video_assignments.save(&assignment).await {
        Ok(()) => true,
        Err(e) => {
            error!(
                "Unable to flag assignment {} as sent: {:?}",
                assignment.id, e
            );
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use peakform_domain::{Coach, Player, Video, ID};
    use peakform_infra::{setup_context_inmemory, ISys};
    use std::sync::Arc;

    const NOW: i64 = 1715328000000; // 2024-05-10T08:00:00Z

    struct StaticTimeSys;
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            NOW
        }
    }

    struct TestContext {
        ctx: PeakformContext,
        coach: Coach,
        player: Player,
        video: Video,
    }

    async fn setup() -> TestContext {
        let mut ctx = setup_context_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});

        let coach = Coach::new("Sam");
        ctx.repos.coaches.insert(&coach).await.unwrap();
        // 2024-01-01T00:00:00Z
        let player = Player::new(coach.id.clone(), "Alex", 1704067200000);
        ctx.repos.players.insert(&player).await.unwrap();
        let mut video = Video::new(coach.id.clone(), "Focus drills", "https://videos.example.com/focus");
        video.auto_assign = true;
        video.auto_assign_day_offset = Some(3);
        ctx.repos.videos.insert(&video).await.unwrap();

        TestContext {
            ctx,
            coach,
            player,
            video,
        }
    }

    #[actix_web::main]
    #[test]
    async fn normalizes_unset_sent_flags() {
        let TestContext {
            ctx, player, video, ..
        } = setup().await;

        let mut assignment =
            AutoVideoAssignment::new(player.id.clone(), video.id.clone(), NOW + 1000);
        assignment.sent = None;
        ctx.repos
            .auto_video_assignments
            .insert(&assignment)
            .await
            .unwrap();

        let mut usecase = ProcessAutoAssignmentsUseCase {};
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.repaired_null_sent, 1);
        assert_eq!(res.dispatched, 0);
        let stored = ctx
            .repos
            .auto_video_assignments
            .find(&assignment.id)
            .await
            .unwrap();
        assert_eq!(stored.sent, Some(false));
    }

    #[actix_web::main]
    #[test]
    async fn repairs_missing_schedule_from_registration_and_offset() {
        let TestContext {
            ctx, player, video, ..
        } = setup().await;

        let mut assignment = AutoVideoAssignment::new(player.id.clone(), video.id.clone(), 0);
        assignment.scheduled_at = None;
        ctx.repos
            .auto_video_assignments
            .insert(&assignment)
            .await
            .unwrap();

        let mut usecase = ProcessAutoAssignmentsUseCase {};
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.repaired_null_schedule, 1);
        let stored = ctx
            .repos
            .auto_video_assignments
            .find(&assignment.id)
            .await
            .unwrap();
        // 2024-01-01T00:00:00Z + 3 days
        assert_eq!(stored.scheduled_at, Some(1704326400000));
    }

    #[actix_web::main]
    #[test]
    async fn missing_day_offset_defaults_to_one_day() {
        let TestContext {
            ctx,
            coach,
            player,
            ..
        } = setup().await;

        let mut video = Video::new(coach.id.clone(), "Warmup", "https://videos.example.com/warmup");
        video.auto_assign = true;
        ctx.repos.videos.insert(&video).await.unwrap();

        let mut assignment = AutoVideoAssignment::new(player.id.clone(), video.id.clone(), 0);
        assignment.scheduled_at = None;
        ctx.repos
            .auto_video_assignments
            .insert(&assignment)
            .await
            .unwrap();

        let mut usecase = ProcessAutoAssignmentsUseCase {};
        usecase.execute(&ctx).await.unwrap();

        let stored = ctx
            .repos
            .auto_video_assignments
            .find(&assignment.id)
            .await
            .unwrap();
        // 2024-01-01T00:00:00Z + 1 day
        assert_eq!(stored.scheduled_at, Some(1704153600000));
    }

    #[actix_web::main]
    #[test]
    async fn dispatches_due_assignment_and_creates_watch_record() {
        let TestContext {
            ctx,
            coach,
            player,
            video,
        } = setup().await;

        let assignment = AutoVideoAssignment::new(player.id.clone(), video.id.clone(), NOW - 1000);
        ctx.repos
            .auto_video_assignments
            .insert(&assignment)
            .await
            .unwrap();

        let mut usecase = ProcessAutoAssignmentsUseCase {};
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.dispatched, 1);
        let stored = ctx
            .repos
            .auto_video_assignments
            .find(&assignment.id)
            .await
            .unwrap();
        assert_eq!(stored.sent, Some(true));

        let watch_record = ctx
            .repos
            .player_videos
            .find_by_player_and_video(&player.id, &video.id)
            .await
            .unwrap();
        assert_eq!(watch_record.assigned_by, coach.id);
        assert!(!watch_record.watched);
        assert_eq!(watch_record.assigned_at, NOW);

        assert_eq!(ctx.repos.players.find(&player.id).await.unwrap().video_count, 1);
    }

    #[actix_web::main]
    #[test]
    async fn existing_watch_record_is_not_duplicated() {
        let TestContext {
            ctx,
            coach,
            player,
            video,
        } = setup().await;

        let watch_record =
            PlayerVideo::new(player.id.clone(), video.id.clone(), coach.id.clone(), 0);
        ctx.repos.player_videos.insert(&watch_record).await.unwrap();

        let assignment = AutoVideoAssignment::new(player.id.clone(), video.id.clone(), NOW - 1000);
        ctx.repos
            .auto_video_assignments
            .insert(&assignment)
            .await
            .unwrap();

        let mut usecase = ProcessAutoAssignmentsUseCase {};
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.dispatched, 1);
        let stored = ctx
            .repos
            .auto_video_assignments
            .find(&assignment.id)
            .await
            .unwrap();
        assert_eq!(stored.sent, Some(true));
        // Counter only moves when a new watch record is created.
        assert_eq!(ctx.repos.players.find(&player.id).await.unwrap().video_count, 0);
    }

    #[actix_web::main]
    #[test]
    async fn failed_coach_lookup_skips_the_assignment() {
        let TestContext { ctx, video, .. } = setup().await;

        // Player whose coach does not exist.
        let orphan = Player::new(ID::default(), "Kim", 1704067200000);
        ctx.repos.players.insert(&orphan).await.unwrap();

        let assignment = AutoVideoAssignment::new(orphan.id.clone(), video.id.clone(), NOW - 1000);
        ctx.repos
            .auto_video_assignments
            .insert(&assignment)
            .await
            .unwrap();

        let mut usecase = ProcessAutoAssignmentsUseCase {};
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.dispatched, 0);
        let stored = ctx
            .repos
            .auto_video_assignments
            .find(&assignment.id)
            .await
            .unwrap();
        assert_eq!(stored.sent, Some(false));
        assert!(ctx
            .repos
            .player_videos
            .find_by_player_and_video(&orphan.id, &video.id)
            .await
            .is_none());
    }

    #[actix_web::main]
    #[test]
    async fn future_assignments_are_left_alone() {
        let TestContext {
            ctx, player, video, ..
        } = setup().await;

        let assignment = AutoVideoAssignment::new(player.id.clone(), video.id.clone(), NOW + 1000);
        ctx.repos
            .auto_video_assignments
            .insert(&assignment)
            .await
            .unwrap();

        let mut usecase = ProcessAutoAssignmentsUseCase {};
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.dispatched, 0);
        let stored = ctx
            .repos
            .auto_video_assignments
            .find(&assignment.id)
            .await
            .unwrap();
        assert_eq!(stored.sent, Some(false));
    }
}
