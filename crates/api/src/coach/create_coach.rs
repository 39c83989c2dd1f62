use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use peakform_api_structs::create_coach::*;
use peakform_domain::Coach;
use peakform_infra::PeakformContext;

pub async fn create_coach_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let body = body.0;
    let usecase = CreateCoachUseCase {
        name: body.name,
        phone: body.phone,
    };

    execute(usecase, &ctx)
        .await
        .map(|coach| HttpResponse::Created().json(APIResponse::new(coach)))
        .map_err(PeakformError::from)
}

#[derive(Debug)]
pub struct CreateCoachUseCase {
    pub name: String,
    pub phone: Option<String>,
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
impl UseCase for CreateCoachUseCase {
    type Response = Coach;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCoach";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        let mut coach = Coach::new(&self.name);
        coach.phone = self.phone.clone();

        ctx.repos
            .coaches
            .insert(&coach)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(coach)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use peakform_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn creates_coach() {
        let ctx = setup_context_inmemory();

        let mut usecase = CreateCoachUseCase {
            name: "Sam".into(),
            phone: Some("+4790000000".into()),
        };

        let res = usecase.execute(&ctx).await;

        assert!(res.is_ok());
        let coach = res.unwrap();
        assert_eq!(ctx.repos.coaches.find(&coach.id).await, Some(coach));
    }
}
