use crate::error::PeakformError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use peakform_api_structs::dtos::ReminderAttemptDTO;
use peakform_api_structs::send_session_reminders::*;
use peakform_domain::{NotificationLogEntry, ReminderMessage, Session, ID};
use peakform_infra::{IMessagingGateway, PeakformContext};
use tracing::error;

/// Sessions starting within this window ahead of now get their reminder.
const REMINDER_WINDOW_MILLIS: i64 = 24 * 60 * 60 * 1000;

pub async fn send_session_reminders_controller(
    ctx: web::Data<PeakformContext>,
) -> Result<HttpResponse, PeakformError> {
    let usecase = SendSessionRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let sent = res.attempts.iter().filter(|a| a.delivered).count();
            HttpResponse::Ok().json(APIResponse {
                success: true,
                attempted: res.attempts.len(),
                sent,
                failed: res.attempts.len() - sent,
                results: res
                    .attempts
                    .into_iter()
                    .map(|a| {
                        let status = if a.delivered { "success" } else { "error" };
                        ReminderAttemptDTO {
                            session_id: a.session_id,
                            status: status.into(),
                            error: a.error,
                        }
                    })
                    .collect(),
            })
        })
        .map_err(PeakformError::from)
}

/// Sends one reminder per session starting within the next 24 hours.
/// Each session is processed independently; the reminder-sent flag is
/// only flipped on confirmed delivery, so failed sessions are retried on
/// the next run (at-least-once delivery).
#[derive(Debug)]
pub struct SendSessionRemindersUseCase {}

#[derive(Debug)]
pub struct ReminderAttempt {
    pub session_id: ID,
    pub delivered: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct SentReminders {
    pub attempts: Vec<ReminderAttempt>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingConfiguration,
    StorageError,
}

impl From<UseCaseError> for PeakformError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingConfiguration => Self::ServerConfiguration(
                "Messaging gateway credentials are not configured".into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendSessionRemindersUseCase {
    type Response = SentReminders;

    type Error = UseCaseError;

    const NAME: &'static str = "SendSessionReminders";

    async fn execute(&mut self, ctx: &PeakformContext) -> Result<Self::Response, Self::Error> {
        let gateway = ctx
            .gateway
            .clone()
            .ok_or(UseCaseError::MissingConfiguration)?;

        let now = ctx.sys.get_timestamp_millis();
        let due_sessions = ctx
            .repos
            .sessions
            .find_reminder_due_between(now, now + REMINDER_WINDOW_MILLIS)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut attempts = Vec::with_capacity(due_sessions.len());
        for session in due_sessions {
            attempts.push(send_reminder(&session, gateway.as_ref(), ctx, now).await);
        }

        Ok(SentReminders { attempts })
    }
}

async fn send_reminder(
    session: &Session,
    gateway: &dyn IMessagingGateway,
    ctx: &PeakformContext,
    now: i64,
) -> ReminderAttempt {
    let session_id = session.id.clone();

    let player = match ctx.repos.players.find(&session.player_id).await {
        Some(player) => player,
        None => {
            error!(
                "Player {} for session {} not found",
                session.player_id, session.id
            );
            return ReminderAttempt {
                session_id,
                delivered: false,
                error: Some(format!("Player {} not found", session.player_id)),
            };
        }
    };
    let phone = match &player.phone {
        Some(phone) => phone.clone(),
        None => {
            error!("Player {} has no phone number", player.id);
            return ReminderAttempt {
                session_id,
                delivered: false,
                error: Some(format!("Player {} has no phone number", player.id)),
            };
        }
    };
    let coach = match ctx.repos.coaches.find(&session.coach_id).await {
        Some(coach) => coach,
        None => {
            error!(
                "Coach {} for session {} not found",
                session.coach_id, session.id
            );
            return ReminderAttempt {
                session_id,
                delivered: false,
                error: Some(format!("Coach {} not found", session.coach_id)),
            };
        }
    };

    let message = ReminderMessage {
        player_name: &player.name,
        coach_name: &coach.name,
        date: session.date,
        time: session.time,
    }
    .render();

    match gateway.send_message(&phone, &message).await {
        Ok(()) => {
            let entry = NotificationLogEntry::success(session.id.clone(), message, now);
            if let Err(e) = ctx.repos.notification_log.insert(&entry).await {
                error!(
                    "Unable to record notification log entry for session {}: {:?}",
                    session.id, e
                );
            }

            let mut session = session.clone();
            session.reminder_sent = true;
            if let Err(e) = ctx.repos.sessions.save(&session).await {
                // The message went out but the flag write failed: the
                // session stays eligible and may receive a duplicate
                // reminder on the next run.
                error!(
                    "Unable to flag reminder as sent for session {}: {:?}",
                    session.id, e
                );
                return ReminderAttempt {
                    session_id,
                    delivered: true,
                    error: Some("Reminder delivered but session flag update failed".into()),
                };
            }

            ReminderAttempt {
                session_id,
                delivered: true,
                error: None,
            }
        }
        Err(gateway_error) => {
            let detail = gateway_error.as_log_detail();
            let entry =
                NotificationLogEntry::error(session.id.clone(), message, detail.clone(), now);
            if let Err(e) = ctx.repos.notification_log.insert(&entry).await {
                error!(
                    "Unable to record notification log entry for session {}: {:?}",
                    session.id, e
                );
            }

            ReminderAttempt {
                session_id,
                delivered: false,
                error: Some(detail),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use peakform_domain::{Coach, NotificationStatus, Player};
    use peakform_infra::{setup_context_inmemory, ISys, InMemoryMessagingGateway};
    use std::sync::Arc;

    struct StaticTimeSys;
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            1715328000000 // 2024-05-10T08:00:00Z
        }
    }

    struct TestContext {
        ctx: PeakformContext,
        gateway: Arc<InMemoryMessagingGateway>,
        coach: Coach,
        player: Player,
    }

    async fn setup() -> TestContext {
        let mut ctx = setup_context_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});
        let gateway = Arc::new(InMemoryMessagingGateway::new());
        ctx.gateway = Some(gateway.clone());

        let coach = Coach::new("Sam");
        ctx.repos.coaches.insert(&coach).await.unwrap();
        let mut player = Player::new(coach.id.clone(), "Alex", 0);
        player.phone = Some("+4790000000".into());
        ctx.repos.players.insert(&player).await.unwrap();

        TestContext {
            ctx,
            gateway,
            coach,
            player,
        }
    }

    fn session_at(
        coach: &Coach,
        player: &Player,
        date: (i32, u32, u32),
        time: (u32, u32, u32),
    ) -> Session {
        Session::new(
            coach.id.clone(),
            player.id.clone(),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            NaiveTime::from_hms_opt(time.0, time.1, time.2).unwrap(),
        )
    }

    #[actix_web::main]
    #[test]
    async fn sends_reminders_for_sessions_in_the_next_24_hours() {
        let TestContext {
            ctx,
            gateway,
            coach,
            player,
        } = setup().await;

        let due_today = session_at(&coach, &player, (2024, 5, 10), (10, 0, 0));
        let due_tomorrow = session_at(&coach, &player, (2024, 5, 11), (7, 0, 0));
        let outside_window = session_at(&coach, &player, (2024, 5, 13), (9, 0, 0));
        let mut already_reminded = session_at(&coach, &player, (2024, 5, 10), (12, 0, 0));
        already_reminded.reminder_sent = true;

        for session in [&due_today, &due_tomorrow, &outside_window, &already_reminded] {
            ctx.repos.sessions.insert(session).await.unwrap();
        }

        let mut usecase = SendSessionRemindersUseCase {};
        let res = usecase.execute(&ctx).await;

        assert!(res.is_ok());
        let res = res.unwrap();
        assert_eq!(res.attempts.len(), 2);
        assert!(res.attempts.iter().all(|a| a.delivered));
        assert_eq!(gateway.sent_messages().len(), 2);

        for session_id in [&due_today.id, &due_tomorrow.id] {
            assert!(ctx.repos.sessions.find(session_id).await.unwrap().reminder_sent);
            let log = ctx
                .repos
                .notification_log
                .find_by_session(session_id)
                .await
                .unwrap();
            assert_eq!(log.len(), 1);
            assert_eq!(log[0].status, NotificationStatus::Success);
        }
        assert!(
            !ctx.repos
                .sessions
                .find(&outside_window.id)
                .await
                .unwrap()
                .reminder_sent
        );
    }

    #[actix_web::main]
    #[test]
    async fn renders_reminder_with_names_and_schedule() {
        let TestContext {
            ctx,
            gateway,
            coach,
            player,
        } = setup().await;

        let session = session_at(&coach, &player, (2024, 5, 10), (10, 0, 0));
        ctx.repos.sessions.insert(&session).await.unwrap();

        let mut usecase = SendSessionRemindersUseCase {};
        usecase.execute(&ctx).await.unwrap();

        let sent = gateway.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+4790000000");
        assert_eq!(
            sent[0].1,
            "Hi Alex! This is a reminder of your session with Sam on 2024-05-10 at 10:00. See you there!"
        );
    }

    #[actix_web::main]
    #[test]
    async fn second_run_does_not_send_duplicates() {
        let TestContext {
            ctx,
            gateway,
            coach,
            player,
        } = setup().await;

        let session = session_at(&coach, &player, (2024, 5, 10), (10, 0, 0));
        ctx.repos.sessions.insert(&session).await.unwrap();

        let mut usecase = SendSessionRemindersUseCase {};
        usecase.execute(&ctx).await.unwrap();
        let mut usecase = SendSessionRemindersUseCase {};
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.attempts.len(), 0);
        assert_eq!(gateway.sent_messages().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn gateway_failure_leaves_session_eligible_and_logs_error() {
        let TestContext {
            ctx,
            gateway,
            coach,
            player,
        } = setup().await;
        gateway.set_failure(Some(peakform_infra::GatewayError {
            code: Some(63016),
            message: "Failed to send message".into(),
        }));

        let session = session_at(&coach, &player, (2024, 5, 10), (10, 0, 0));
        ctx.repos.sessions.insert(&session).await.unwrap();

        let mut usecase = SendSessionRemindersUseCase {};
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(res.attempts.len(), 1);
        assert!(!res.attempts[0].delivered);
        assert!(res.attempts[0].error.is_some());

        assert!(!ctx.repos.sessions.find(&session.id).await.unwrap().reminder_sent);
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
    async fn aborts_with_configuration_error_when_gateway_is_missing() {
        let TestContext { mut ctx, .. } = setup().await;
        ctx.gateway = None;

        let mut usecase = SendSessionRemindersUseCase {};
        let res = usecase.execute(&ctx).await;

        assert!(res.is_err());
        assert_eq!(res.unwrap_err(), UseCaseError::MissingConfiguration);
    }
}
