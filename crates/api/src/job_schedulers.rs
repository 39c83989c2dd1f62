use crate::session::send_session_reminders::SendSessionRemindersUseCase;
use crate::session::transition_sessions::TransitionSessionsUseCase;
use crate::shared::usecase::execute;
use crate::video::process_auto_assignments::ProcessAutoAssignmentsUseCase;
use actix_web::rt::time::{interval, sleep_until, Instant};
use peakform_infra::PeakformContext;
use std::time::Duration;

const SEND_REMINDERS_INTERVAL_SECS: u64 = 15 * 60;
const AUTO_ASSIGNMENTS_INTERVAL_SECS: u64 = 30 * 60;

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Flags overdue sessions as started once a minute, aligned to the
/// minute boundary so the sweep never skips a whole minute.
pub fn start_session_transition_job(ctx: PeakformContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);

        sleep_until(start).await;
        let mut minutely_interval = interval(Duration::from_secs(60));
        loop {
            minutely_interval.tick().await;

            let usecase = TransitionSessionsUseCase {};
            let _ = execute(usecase, &ctx).await;
        }
    });
}

pub fn start_send_reminders_job(ctx: PeakformContext) {
    actix_web::rt::spawn(async move {
        let mut reminders_interval = interval(Duration::from_secs(SEND_REMINDERS_INTERVAL_SECS));
        loop {
            reminders_interval.tick().await;

            let usecase = SendSessionRemindersUseCase {};
            let _ = execute(usecase, &ctx).await;
        }
    });
}

pub fn start_auto_assignments_job(ctx: PeakformContext) {
    actix_web::rt::spawn(async move {
        let mut assignments_interval = interval(Duration::from_secs(AUTO_ASSIGNMENTS_INTERVAL_SECS));
        loop {
            assignments_interval.tick().await;

            let usecase = ProcessAutoAssignmentsUseCase {};
            let _ = execute(usecase, &ctx).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(50 * 1000, 5), 5);
        assert_eq!(get_start_delay(50 * 1000, 10), 60);
        assert_eq!(get_start_delay(50 * 1000, 15), 55);
        assert_eq!(get_start_delay(60 * 1000, 60), 60);
        assert_eq!(get_start_delay(60 * 1000, 10), 50);
        assert_eq!(get_start_delay(59 * 1000, 0), 1);
        assert_eq!(get_start_delay(59 * 1000, 1), 60);
    }
}
