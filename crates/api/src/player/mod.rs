mod create_player;
mod get_player;

use actix_web::web;
use create_player::create_player_controller;
use get_player::get_player_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/players").route(web::post().to(create_player_controller)));
    cfg.service(
        web::resource("/players/{player_id}").route(web::get().to(get_player_controller)),
    );
}
