use crate::config::AuthConfig;
use crate::utils::error::CustomError;
use actix_web::{Error, HttpMessage, dev::ServiceRequest, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

/// Bearer validator guarding post creation
pub async fn verify_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let auth = match req.app_data::<web::Data<AuthConfig>>() {
        Some(auth) => auth.clone(),
        None => {
            return Err((
                CustomError::InternalServerError("Auth is not configured".into()).into(),
                req,
            ));
        }
    };

    match decode_token(credentials.token(), &auth.secret) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(e) => {
            debug!("Rejected bearer token: {}", e);
            Err((CustomError::UnauthorizedError("Invalid or expired token".into()).into(), req))
        }
    }
}

/// Signs a token for `username` that expires after the configured TTL.
pub fn create_token(username: &str, auth: &AuthConfig) -> Result<String, CustomError> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(auth.token_ttl)
        .ok_or_else(|| CustomError::InternalServerError("Invalid token expiry".into()))?;

    let claims = Claims {
        username: username.to_owned(),
        iat: now.timestamp() as usize,
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.secret.as_bytes()),
    )
    .map_err(|_| CustomError::InternalServerError("Token generation failed".to_string()))
}

/// Checks signature and expiry.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn issued_token_decodes_with_same_secret() {
        let auth = AuthConfig::new("secret-a");
        let token = create_token("talitha", &auth).unwrap();
        let claims = decode_token(&token, "secret-a").unwrap();
        assert_eq!(claims.username, "talitha");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let token = create_token("talitha", &AuthConfig::new("secret-a")).unwrap();
        assert!(decode_token(&token, "secret-b").is_err());
        assert!(decode_token("garbage", "secret-a").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut auth = AuthConfig::new("secret-a");
        auth.token_ttl = Duration::hours(-2);
        let token = create_token("talitha", &auth).unwrap();
        assert!(decode_token(&token, "secret-a").is_err());
    }
}
