use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use peakform_api_structs::create_player::*;
use peakform_domain::{Player, ID};
use peakform_infra::PeakformContext;

pub async fn create_player_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let body = body.0;
    let usecase = CreatePlayerUseCase {
        coach_id: body.coach_id,
        name: body.name,
        phone: body.phone,
    };

    execute(usecase, &ctx)
        .await
        .map(|player| HttpResponse::Created().json(APIResponse::new(player)))
        .map_err(PeakformError::from)
}

#[derive(Debug)]
pub struct CreatePlayerUseCase {
    pub coach_id: ID,
    pub name: String,
    pub phone: Option<String>,
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
impl UseCase for CreatePlayerUseCase {
    type Response = Player;

    type Error = UseCaseError;

    const NAME: &'static str = "CreatePlayer";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        let coach = match ctx.repos.coaches.find(&self.coach_id).await {
            Some(coach) => coach,
            None => return Err(UseCaseError::CoachNotFound(self.coach_id.clone())),
        };

        let mut player = Player::new(
            coach.id.clone(),
            &self.name,
            ctx.sys.get_timestamp_millis(),
        );
        player.phone = self.phone.clone();

        ctx.repos
            .players
            .insert(&player)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(player)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use peakform_domain::Coach;
    use peakform_infra::{setup_context_inmemory, ISys};
    use std::sync::Arc;

    struct StaticTimeSys;
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            1704067200000 // 2024-01-01T00:00:00Z
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_player_with_registration_timestamp() {
        let mut ctx = setup_context_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});

        let coach = Coach::new("Sam");
        ctx.repos.coaches.insert(&coach).await.unwrap();

        let mut usecase = CreatePlayerUseCase {
            coach_id: coach.id.clone(),
            name: "Alex".into(),
            phone: None,
        };

        let res = usecase.execute(&ctx).await;

        assert!(res.is_ok());
        let player = res.unwrap();
        assert_eq!(player.registered_at, 1704067200000);
        assert_eq!(player.video_count, 0);
        assert_eq!(ctx.repos.players.find(&player.id).await, Some(player));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_coach() {
        let ctx = setup_context_inmemory();

        let mut usecase = CreatePlayerUseCase {
            coach_id: ID::default(),
            name: "Alex".into(),
            phone: None,
        };

        let res = usecase.execute(&ctx).await;

        assert!(res.is_err());
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::CoachNotFound(usecase.coach_id)
        );
    }
}
