mod get_session_notifications;
mod send_notification;

use actix_web::web;
use get_session_notifications::get_session_notifications_controller;
use send_notification::send_notification_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/notifications/whatsapp")
            .route(web::post().to(send_notification_controller)),
    );
    cfg.service(
        web::resource("/sessions/{session_id}/notifications")
            .route(web::get().to(get_session_notifications_controller)),
    );
}
