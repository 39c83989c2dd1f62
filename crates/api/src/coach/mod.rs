mod create_coach;

use actix_web::web;
use create_coach::create_coach_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/coaches").route(web::post().to(create_coach_controller)));
}
