mod create_video;
pub mod process_auto_assignments;
mod subscribers;

use actix_web::web;
use create_video::create_video_controller;
use process_auto_assignments::process_auto_assignments_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/videos").route(web::post().to(create_video_controller)));
    cfg.service(
        web::resource("/videos/auto-assignments/process")
            .route(web::post().to(process_auto_assignments_controller)),
    );
}
