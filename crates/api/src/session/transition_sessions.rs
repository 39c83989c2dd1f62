use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::DateTime;
use peakform_api_structs::transition_sessions::*;
use peakform_infra::PeakformContext;

pub async fn transition_sessions_controller(
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let usecase = TransitionSessionsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                success: true,
                transitioned: res.transitioned,
                timestamp: res.timestamp,
            })
        })
        .map_err(PeakformError::from)
}

/// Flags sessions whose scheduled start has passed as started. Only
/// sessions dated today are considered; the job is expected to run at a
/// sub-daily cadence.
#[derive(Debug)]
pub struct TransitionSessionsUseCase {}

#[derive(Debug)]
pub struct TransitionedSessions {
    pub transitioned: usize,
    pub timestamp: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidTimestamp,
    StorageError,
}

impl From<UseCaseError> for PeakformError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTimestamp => Self::InternalError,
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for TransitionSessionsUseCase {
    type Response = TransitionedSessions;

    type Error = UseCaseError;

    const NAME: &'static str = "TransitionSessions";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let now_utc = DateTime::from_timestamp_millis(now).ok_or(UseCaseError::InvalidTimestamp)?;
        let today = now_utc.date_naive();
        let time_of_day = now_utc.time();

        let due_sessions = ctx
            .repos
            .sessions
            .find_unstarted_before(today, time_of_day)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        // A write failure aborts the run; rows already flipped stay flipped.
        let mut transitioned = 0;
        for mut session in due_sessions {
            session.started = true;
            ctx.repos
                .sessions
                .save(&session)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            transitioned += 1;
        }

        Ok(TransitionedSessions {
            transitioned,
            timestamp: now,
        })
    }
}
