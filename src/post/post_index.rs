use super::post_controller::{create_post, list_posts};
use crate::middleware::auth::verify_token;
use actix_web::{guard, web};
use actix_web_httpauth::middleware::HttpAuthentication;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/posts")
            .guard(guard::Post())
            .wrap(HttpAuthentication::bearer(verify_token))
            .route(web::post().to(create_post)),
    )
    .service(
        web::resource("/posts")
            .guard(guard::Get())
            .route(web::get().to(list_posts)),
    );
}
