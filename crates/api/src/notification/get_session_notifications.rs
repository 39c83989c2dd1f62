use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use peakform_api_structs::get_session_notifications::*;
use peakform_domain::{NotificationLogEntry, ID};
use peakform_infra::PeakformContext;

pub async fn get_session_notifications_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let usecase = GetSessionNotificationsUseCase {
        session_id: path_params.session_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|entries| HttpResponse::Ok().json(APIResponse::new(entries)))
        .map_err(PeakformError::from)
}

#[derive(Debug)]
pub struct GetSessionNotificationsUseCase {
    pub session_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    SessionNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PeakformError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::SessionNotFound(session_id) => {
                Self::NotFound(format!("The session with id: {}, was not found.", session_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSessionNotificationsUseCase {
    type Response = Vec<NotificationLogEntry>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSessionNotifications";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.sessions.find(&self.session_id).await.is_none() {
            return Err(UseCaseError::SessionNotFound(self.session_id.clone()));
        }

        ctx.repos
            .notification_log
            .find_by_session(&self.session_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use peakform_domain::Session;
    use peakform_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn lists_entries_for_the_session_in_order() {
        let ctx = setup_context_inmemory();

        let session = Session::new(
            Default::default(),
            Default::default(),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        ctx.repos.sessions.insert(&session).await.unwrap();

        let second = NotificationLogEntry::success(session.id.clone(), "second".into(), 2000);
        let first = NotificationLogEntry::error(
            session.id.clone(),
            "first".into(),
            "gateway timeout".into(),
            1000,
        );
        ctx.repos.notification_log.insert(&second).await.unwrap();
        ctx.repos.notification_log.insert(&first).await.unwrap();

        let mut usecase = GetSessionNotificationsUseCase {
            session_id: session.id.clone(),
        };

        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.len(), 2);
        assert_eq!(res[0].message, "first");
        assert_eq!(res[1].message, "second");
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_session() {
        let ctx = setup_context_inmemory();

        let mut usecase = GetSessionNotificationsUseCase {
            session_id: ID::default(),
        };

        let res = usecase.execute(&ctx).await;

        assert!(res.is_err());
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::SessionNotFound(usecase.session_id)
        );
    }
}
