use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use serde_json::json;

use rooted_risen::config::ServerConfig;
use rooted_risen::middleware::error_handler::json_error_handlers;
use rooted_risen::post::post_service::PostService;
use rooted_risen::router::index::routes;
use rooted_risen::user::service::UserService;
use rooted_risen::utils::helpers::service_name;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Rooted & Risen backend",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": service_name(),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    let post_service = match PostService::new(config.data_file.clone()).await {
        Ok(service) => web::Data::new(service),
        Err(e) => {
            error!("Failed to open post store: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let user_service = web::Data::new(UserService::new(config.auth.clone()));
    let auth_config = web::Data::new(config.auth.clone());

    info!(
        "Rooted & Risen backend listening on http://{}:{} (store: {})",
        config.host,
        config.port,
        post_service.path().display()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(post_service.clone())
            .app_data(user_service.clone())
            .app_data(auth_config.clone())
            .configure(routes)
            .wrap(json_error_handlers())
            .service(default)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
