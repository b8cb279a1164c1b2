use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, Result};
use serde_json::json;

use super::not_found::not_found;
use crate::utils::helpers::service_name;

/// JSON envelopes for every error response that isn't one already
pub fn json_error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new()
        .handler(StatusCode::NOT_FOUND, not_found)
        .default_handler(handle_error)
}

pub fn handle_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    if is_json(&res) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status_code = res.status();
    let error_message = match status_code {
        StatusCode::UNAUTHORIZED => "Unauthorized".to_string(),
        _ => res
            .response()
            .error()
            .map(|e| e.to_string())
            .unwrap_or_else(|| status_code.canonical_reason().unwrap_or("Unknown").to_string()),
    };

    let mut new_response = HttpResponse::build(status_code).json(json!({
        "success": false,
        "message": error_message,
        "httpStatusCode": status_code.as_u16(),
        "error": error_code(status_code),
        "service": service_name(),
    }));
    if let Some(challenge) = res.headers().get(header::WWW_AUTHENTICATE) {
        new_response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, challenge.clone());
    }

    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}

fn is_json<B>(res: &ServiceResponse<B>) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

fn error_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNAUTHORIZED => "UNAUTHORIZED_ERROR",
        StatusCode::BAD_REQUEST => "BAD_REQUEST_ERROR",
        StatusCode::METHOD_NOT_ALLOWED => "METHOD_NOT_ALLOWED_ERROR",
        s if s.is_server_error() => "INTERNAL_SERVER_ERROR",
        _ => "REQUEST_ERROR",
    }
}
