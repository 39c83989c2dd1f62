use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use peakform_api_structs::send_notification::*;
use peakform_domain::{NotificationLogEntry, ID};
use peakform_infra::PeakformContext;
use tracing::error;

pub async fn send_notification_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let body = body.0;
    let usecase = SendNotificationUseCase {
        session_id: body.session_id,
        phone_number: body.phone_number,
        message: body.message,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                success: true,
                delivered: res.delivered,
                error: res.error,
            })
        })
        .map_err(PeakformError::from)
}

/// Ad hoc WhatsApp send, keyed by session for the audit trail. A gateway
/// failure is reported in the response body, not as a transport error.
#[derive(Debug)]
pub struct SendNotificationUseCase {
    pub session_id: ID,
    pub phone_number: String,
    pub message: String,
}

#[derive(Debug)]
pub struct NotificationDelivery {
    pub delivered: bool,
    pub error: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingConfiguration,
    SessionNotFound(ID),
}

impl From<UseCaseError> for PeakformError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingConfiguration => Self::ServerConfiguration(
                "Messaging gateway credentials are not configured".into(),
            ),
            UseCaseError::SessionNotFound(session_id) => {
                Self::NotFound(format!("The session with id: {}, was not found.", session_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendNotificationUseCase {
    type Response = NotificationDelivery;

    type Error = UseCaseError;

    const NAME: &'static str = "SendNotification";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        let gateway = ctx
            .gateway
            .clone()
            .ok_or(UseCaseError::MissingConfiguration)?;

        if ctx.repos.sessions.find(&self.session_id).await.is_none() {
            return Err(UseCaseError::SessionNotFound(self.session_id.clone()));
        }

        let now = ctx.sys.get_timestamp_millis();
        match gateway.send_message(&self.phone_number, &self.message).await {
            Ok(()) => {
                let entry = NotificationLogEntry::success(
                    self.session_id.clone(),
                    self.message.clone(),
                    now,
                );
                if let Err(e) = ctx.repos.notification_log.insert(&entry).await {
                    error!(
                        "Unable to record notification log entry for session {}: {:?}",
                        self.session_id, e
                    );
                }
                Ok(NotificationDelivery {
                    delivered: true,
                    error: None,
                })
            }
            Err(gateway_error) => {
                let detail = gateway_error.as_log_detail();
                let entry = NotificationLogEntry::error(
                    self.session_id.clone(),
                    self.message.clone(),
                    detail.clone(),
                    now,
                );
                if let Err(e) = ctx.repos.notification_log.insert(&entry).await {
                    error!(
                        "Unable to record notification log entry for session {}: {:?}",
                        self.session_id, e
                    );
                }
                Ok(NotificationDelivery {
                    delivered: false,
                    error: Some(detail),
                })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use peakform_domain::{NotificationStatus, Session};
    use peakform_infra::{setup_context_inmemory, InMemoryMessagingGateway};
    use std::sync::Arc;

    async fn insert_session(ctx: &PeakformContext) -> Session {
        let session = Session::new(
            Default::default(),
            Default::default(),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        ctx.repos.sessions.insert(&session).await.unwrap();
        session
    }

    #[actix_web::main]
    #[test]
    async fn delivers_and_logs_success() {
        let mut ctx = setup_context_inmemory();
        let gateway = Arc::new(InMemoryMessagingGateway::new());
        ctx.gateway = Some(gateway.clone());
        let session = insert_session(&ctx).await;

        let mut usecase = SendNotificationUseCase {
            session_id: session.id.clone(),
            phone_number: "+4790000000".into(),
            message: "See you at practice".into(),
        };

        let res = usecase.execute(&ctx).await.unwrap();

        assert!(res.delivered);
        assert_eq!(
            gateway.sent_messages(),
            vec![("+4790000000".to_string(), "See you at practice".to_string())]
        );
        let log = ctx
            .repos
            .notification_log
            .find_by_session(&session.id)
            .await
            .unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].status, NotificationStatus::Success);
        assert_eq!(log[0].message, "See you at practice");
    }

    #[actix_web::main]
    #[test]
    async fn failed_delivery_is_reported_and_logged() {
        let mut ctx = setup_context_inmemory();
        ctx.gateway = Some(Arc::new(InMemoryMessagingGateway::failing()));
        let session = insert_session(&ctx).await;

        let mut usecase = SendNotificationUseCase {
            session_id: session.id.clone(),
            phone_number: "+4790000000".into(),
            message: "See you at practice".into(),
        };

        let res = usecase.execute(&ctx).await.unwrap();

        assert!(!res.delivered);
        assert!(res.error.is_some());
        let log = ctx
            .repos
            .notification_log
            .find_by_session(&session.id)
            .await
            .unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].status, NotificationStatus::Error);
        assert!(log[0].error.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_session() {
        let ctx = setup_context_inmemory();

        let mut usecase = SendNotificationUseCase {
            session_id: ID::default(),
            phone_number: "+4790000000".into(),
            message: "See you at practice".into(),
        };

        let res = usecase.execute(&ctx).await;

        assert!(res.is_err());
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::SessionNotFound(usecase.session_id)
        );
    }
}
