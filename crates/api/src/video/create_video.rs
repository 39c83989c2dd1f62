use super::subscribers::CreateAutoAssignmentsOnVideoCreated;
use crate::error::PeakformError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use peakform_api_structs::create_video::*;
use peakform_domain::{Video, ID};
use peakform_infra::PeakformContext;

pub async fn create_video_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let body = body.0;
    let usecase = CreateVideoUseCase {
        coach_id: body.coach_id,
        title: body.title,
        url: body.url,
        auto_assign: body.auto_assign.unwrap_or(false),
        auto_assign_day_offset: body.auto_assign_day_offset,
    };

    execute(usecase, &ctx)
        .await
        .map(|video| HttpResponse::Created().json(APIResponse::new(video)))
        .map_err(PeakformError::from)
}

#[derive(Debug)]
pub struct CreateVideoUseCase {
    pub coach_id: ID,
    pub title: String,
    pub url: String,
    pub auto_assign: bool,
    pub auto_assign_day_offset: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    CoachNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PeakformError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::CoachNotFound(coach_id) => {
                Self::NotFound(format!("The coach with id: {}, was not found.", coach_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateVideoUseCase {
    type Response = Video;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateVideo";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.coaches.find(&self.coach_id).await.is_none() {
            return Err(UseCaseError::CoachNotFound(self.coach_id.clone()));
        }

        let mut video = Video::new(self.coach_id.clone(), &self.title, &self.url);
        video.auto_assign = self.auto_assign;
        video.auto_assign_day_offset = self.auto_assign_day_offset;

        ctx.repos
            .videos
            .insert(&video)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(video)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CreateAutoAssignmentsOnVideoCreated)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use peakform_domain::{scheduled_dispatch_at, Coach, Player};
    use peakform_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn creates_video_and_assignments_for_each_player() {
        let ctx = setup_context_inmemory();

        let coach = Coach::new("Sam");
        ctx.repos.coaches.insert(&coach).await.unwrap();
        let player1 = Player::new(coach.id.clone(), "Alex", 1704067200000);
        let player2 = Player::new(coach.id.clone(), "Kim", 1704153600000);
        ctx.repos.players.insert(&player1).await.unwrap();
        ctx.repos.players.insert(&player2).await.unwrap();

        let usecase = CreateVideoUseCase {
            coach_id: coach.id.clone(),
            title: "Visualization basics".into(),
            url: "https://videos.example.com/visualization".into(),
            auto_assign: true,
            auto_assign_day_offset: Some(3),
        };

        let video = execute(usecase, &ctx).await.unwrap();

        let assignments = ctx
            .repos
            .auto_video_assignments
            .find_by_video(&video.id)
            .await
            .unwrap();
        assert_eq!(assignments.len(), 2);
        for assignment in &assignments {
            assert_eq!(assignment.sent, Some(false));
        }
        let for_player1 = assignments
            .iter()
            .find(|a| a.player_id == player1.id)
            .unwrap();
        assert_eq!(
            for_player1.scheduled_at,
            Some(scheduled_dispatch_at(player1.registered_at, 3))
        );
    }

    #[actix_web::main]
    #[test]
    async fn skips_assignments_when_auto_assign_is_off() {
        let ctx = setup_context_inmemory();

        let coach = Coach::new("Sam");
        ctx.repos.coaches.insert(&coach).await.unwrap();
        let player = Player::new(coach.id.clone(), "Alex", 0);
        ctx.repos.players.insert(&player).await.unwrap();

        let usecase = CreateVideoUseCase {
            coach_id: coach.id.clone(),
            title: "Breathing drills".into(),
            url: "https://videos.example.com/breathing".into(),
            auto_assign: false,
            auto_assign_day_offset: None,
        };

        let video = execute(usecase, &ctx).await.unwrap();

        let assignments = ctx
            .repos
            .auto_video_assignments
            .find_by_video(&video.id)
            .await
            .unwrap();
        assert!(assignments.is_empty());
    }
}
