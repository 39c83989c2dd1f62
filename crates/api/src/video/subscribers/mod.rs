use super::create_video::CreateVideoUseCase;
use crate::shared::usecase::Subscriber;
use peakform_domain::{scheduled_dispatch_at, AutoVideoAssignment, Video};
use tracing::error;

pub struct CreateAutoAssignmentsOnVideoCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateVideoUseCase> for CreateAutoAssignmentsOnVideoCreated {
    async fn notify(&self, video: &Video, ctx: &peakform_infra::PeakformContext) {
        if !video.auto_assign {
            return;
        }

        let players = match ctx.repos.players.find_by_coach(&video.coach_id).await {
            Ok(players) => players,
            Err(e) => {
                error!(
                    "Unable to list players for auto assignment of video {}: {:?}",
                    video.id, e
                );
                return;
            }
        };

        for player in players {
            let scheduled_at = scheduled_dispatch_at(player.registered_at, video.day_offset());
            let assignment =
                AutoVideoAssignment::new(player.id.clone(), video.id.clone(), scheduled_at);

            // Sideeffect, one failed row should not block the others
            if let Err(e) = ctx.repos.auto_video_assignments.insert(&assignment).await {
                error!(
                    "Unable to create auto assignment of video {} for player {}: {:?}",
                    video.id, player.id, e
                );
            }
        }
    }
}
