use super::controller::login_user;
use actix_web::web;

pub fn user_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login_user));
}
