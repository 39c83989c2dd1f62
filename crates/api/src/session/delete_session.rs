use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use peakform_api_structs::delete_session::*;
use peakform_domain::{Session, ID};
use peakform_infra::PeakformContext;

pub async fn delete_session_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let usecase = DeleteSessionUseCase {
        session_id: path_params.session_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|session| HttpResponse::Ok().json(APIResponse::new(session)))
        .map_err(PeakformError::from)
}

#[derive(Debug)]
pub struct DeleteSessionUseCase {
    pub session_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for PeakformError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(session_id) => {
                Self::NotFound(format!("The session with id: {}, was not found.", session_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteSessionUseCase {
    type Response = Session;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteSession";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .sessions
            .delete(&self.session_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.session_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use peakform_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn deletes_existing_session() {
        let ctx = setup_context_inmemory();

        let session = Session::new(
            Default::default(),
            Default::default(),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        ctx.repos.sessions.insert(&session).await.unwrap();

        let mut usecase = DeleteSessionUseCase {
            session_id: session.id.clone(),
        };

        let res = usecase.execute(&ctx).await;

        assert_eq!(res, Ok(session.clone()));
        assert_eq!(ctx.repos.sessions.find(&session.id).await, None);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_session() {
        let ctx = setup_context_inmemory();

        let mut usecase = DeleteSessionUseCase {
            session_id: ID::default(),
        };

        let res = usecase.execute(&ctx).await;

        assert!(res.is_err());
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(usecase.session_id));
    }
}
