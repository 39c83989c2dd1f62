mod create_session;
mod delete_session;
mod get_session;
pub mod send_session_reminders;
pub mod transition_sessions;

use actix_web::web;
use create_session::create_session_controller;
use delete_session::delete_session_controller;
use get_session::get_session_controller;
use send_session_reminders::send_session_reminders_controller;
use transition_sessions::transition_sessions_controller;

// Method guards stay on the routes so that a request with the wrong
// method gets a 405 instead of falling through to a 404.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/sessions").route(web::post().to(create_session_controller)));
    cfg.service(
        web::resource("/sessions/transition")
            .route(web::post().to(transition_sessions_controller)),
    );
    cfg.service(
        web::resource("/sessions/reminders")
            .route(web::post().to(send_session_reminders_controller)),
    );
    cfg.service(
        web::resource("/sessions/{session_id}")
            .route(web::get().to(get_session_controller))
            .route(web::delete().to(delete_session_controller)),
    );
}
