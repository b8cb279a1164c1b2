use crate::middleware::auth::Claims;
use crate::post::post_model::Post;
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use crate::utils::helpers::service_name;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use log::info;
use serde_json::json;

pub async fn list_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, CustomError> {
    let posts = post_service.list_posts().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Posts fetched successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "posts": posts
    })))
}

pub async fn create_post(
    post_service: web::Data<PostService>,
    post: web::Json<Post>,
    req: HttpRequest,
) -> Result<HttpResponse, CustomError> {
    let author = req
        .extensions()
        .get::<Claims>()
        .map(|claims| claims.username.clone())
        .ok_or_else(|| CustomError::UnauthorizedError("No claims found".into()))?;

    let inserted_post = post_service.create_post(post.into_inner()).await?;
    info!("{} published post {}", author, inserted_post.id);

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Post created successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "post": inserted_post
    })))
}
