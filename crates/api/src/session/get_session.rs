use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use peakform_api_structs::get_session::*;
use peakform_domain::{Session, ID};
use peakform_infra::PeakformContext;

pub async fn get_session_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let usecase = GetSessionUseCase {
        session_id: path_params.session_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|session| HttpResponse::Ok().json(APIResponse::new(session)))
        .map_err(PeakformError::from)
}

#[derive(Debug)]
pub struct GetSessionUseCase {
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
impl UseCase for GetSessionUseCase {
    type Response = Session;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSession";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .sessions
            .find(&self.session_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.session_id.clone()))
    }
}
