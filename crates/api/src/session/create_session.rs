use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, NaiveTime};
use peakform_api_structs::create_session::*;
use peakform_domain::{Session, ID};
use peakform_infra::PeakformContext;

pub async fn create_session_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let body = body.0;
    let usecase = CreateSessionUseCase {
        coach_id: body.coach_id,
        player_id: body.player_id,
        date: body.date,
        time: body.time,
        location: body.location,
        notes: body.notes,
    };

    execute(usecase, &ctx)
        .await
        .map(|session| HttpResponse::Created().json(APIResponse::new(session)))
        .map_err(PeakformError::from)
}

#[derive(Debug)]
pub struct CreateSessionUseCase {
    pub coach_id: ID,
    pub player_id: ID,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    CoachNotFound(ID),
    PlayerNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PeakformError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::CoachNotFound(coach_id) => {
                Self::NotFound(format!("The coach with id: {}, was not found.", coach_id))
            }
            UseCaseError::PlayerNotFound(player_id) => {
                Self::NotFound(format!("The player with id: {}, was not found.", player_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateSessionUseCase {
    type Response = Session;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateSession";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.coaches.find(&self.coach_id).await.is_none() {
            return Err(UseCaseError::CoachNotFound(self.coach_id.clone()));
        }
        let player = match ctx.repos.players.find(&self.player_id).await {
            Some(player) if player.coach_id == self.coach_id => player,
            _ => return Err(UseCaseError::PlayerNotFound(self.player_id.clone())),
        };

        let mut session = Session::new(
            self.coach_id.clone(),
            player.id.clone(),
            self.date,
            self.time,
        );
        session.location = self.location.clone();
        session.notes = self.notes.clone();

        ctx.repos
            .sessions
            .insert(&session)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(session)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use peakform_domain::{Coach, Player};
    use peakform_infra::setup_context_inmemory;

    struct TestContext {
        ctx: PeakformContext,
        coach: Coach,
        player: Player,
    }

    async fn setup() -> TestContext {
        let ctx = setup_context_inmemory();
        let coach = Coach::new("Sam");
        ctx.repos.coaches.insert(&coach).await.unwrap();
        let player = Player::new(coach.id.clone(), "Alex", 0);
        ctx.repos.players.insert(&player).await.unwrap();

        TestContext { ctx, coach, player }
    }

    #[actix_web::main]
    #[test]
    async fn creates_session_with_cleared_flags() {
        let TestContext { ctx, coach, player } = setup().await;

        let mut usecase = CreateSessionUseCase {
            coach_id: coach.id.clone(),
            player_id: player.id.clone(),
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            location: Some("Court 2".into()),
            notes: None,
        };

        let res = usecase.execute(&ctx).await;

        assert!(res.is_ok());
        let session = res.unwrap();
        assert!(!session.reminder_sent);
        assert!(!session.started);
        assert_eq!(ctx.repos.sessions.find(&session.id).await, Some(session));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_player_of_another_coach() {
        let TestContext { ctx, coach, .. } = setup().await;

        let other_coach = Coach::new("Robin");
        ctx.repos.coaches.insert(&other_coach).await.unwrap();
        let other_player = Player::new(other_coach.id.clone(), "Kim", 0);
        ctx.repos.players.insert(&other_player).await.unwrap();

        let mut usecase = CreateSessionUseCase {
            coach_id: coach.id.clone(),
            player_id: other_player.id.clone(),
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            location: None,
            notes: None,
        };

        let res = usecase.execute(&ctx).await;

        assert!(res.is_err());
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::PlayerNotFound(other_player.id)
        );
    }
}
