use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::user::model::LoginRequest;
use crate::user::service::UserService;
use crate::utils::error::CustomError;
use crate::utils::helpers::service_name;

pub async fn login_user(
    user_service: web::Data<UserService>,
    login_info: web::Json<LoginRequest>,
) -> Result<HttpResponse, CustomError> {
    let token = user_service.login_fn(&login_info)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Login successful",
        "httpStatusCode": 200,
        "service": service_name(),
        "token": token
    })))
}
