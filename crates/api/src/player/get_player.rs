use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use peakform_api_structs::get_player::*;
use peakform_domain::{Player, ID};
use peakform_infra::PeakformContext;

pub async fn get_player_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let usecase = GetPlayerUseCase {
        player_id: path_params.player_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|player| HttpResponse::Ok().json(APIResponse::new(player)))
        .map_err(PeakformError::from)
}

#[derive(Debug)]
pub struct GetPlayerUseCase {
    pub player_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for PeakformError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(player_id) => {
                Self::NotFound(format!("The player with id: {}, was not found.", player_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPlayerUseCase {
    type Response = Player;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPlayer";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .players
            .find(&self.player_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.player_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use peakform_domain::{Coach, Player};
    use peakform_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn returns_player_when_it_exists() {
        let ctx = setup_context_inmemory();

        let coach = Coach::new("Sam");
        ctx.repos.coaches.insert(&coach).await.unwrap();
        let player = Player::new(coach.id.clone(), "Alex", 0);
        ctx.repos.players.insert(&player).await.unwrap();

        let mut usecase = GetPlayerUseCase {
            player_id: player.id.clone(),
        };

        let res = usecase.execute(&ctx).await;

        assert_eq!(res, Ok(player));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_player() {
        let ctx = setup_context_inmemory();

        let mut usecase = GetPlayerUseCase {
            player_id: ID::default(),
        };

        let res = usecase.execute(&ctx).await;

        assert!(res.is_err());
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(usecase.player_id));
    }
}
