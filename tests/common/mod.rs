#![allow(dead_code)]

use std::path::Path;

use actix_web::{App, HttpServer, web};
use rooted_risen::config::AuthConfig;
use rooted_risen::middleware::error_handler::json_error_handlers;
use rooted_risen::post::post_model::{Category, Post};
use rooted_risen::post::post_service::PostService;
use rooted_risen::router::index::routes;
use rooted_risen::user::service::UserService;

pub const SECRET: &str = "test-secret";

pub struct TestState {
    pub posts: web::Data<PostService>,
    pub users: web::Data<UserService>,
    pub auth: web::Data<AuthConfig>,
}

pub async fn build_state(dir: &Path) -> TestState {
    let auth = AuthConfig::new(SECRET);
    TestState {
        posts: web::Data::new(
            PostService::new(dir.join("posts.json"))
                .await
                .expect("open post store"),
        ),
        users: web::Data::new(UserService::new(auth.clone())),
        auth: web::Data::new(auth),
    }
}

/// Runs the full service on an ephemeral port and returns its base URL.
pub async fn spawn_server(dir: &Path) -> String {
    let state = build_state(dir).await;
    let (posts, users, auth) = (state.posts, state.users, state.auth);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(posts.clone())
            .app_data(users.clone())
            .app_data(auth.clone())
            .configure(routes)
            .wrap(json_error_handlers())
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind test server");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{}", addr)
}

pub fn sample_post(id: i64, category: Category) -> Post {
    Post {
        id,
        title: format!("Story {}", id),
        content: "Learning to rise again".into(),
        category,
        image: None,
        date: "3/14/2025, 7:30:00 PM".into(),
    }
}
