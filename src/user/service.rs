use log::info;

use crate::config::AuthConfig;
use crate::middleware::auth::create_token;
use crate::user::model::LoginRequest;
use crate::utils::error::CustomError;

/// Gatekeeper for the single demo author
pub struct UserService {
    auth: AuthConfig,
}

impl UserService {
    pub fn new(auth: AuthConfig) -> Self {
        UserService { auth }
    }

    /// Returns a signed token when the pair matches the configured credential.
    pub fn login_fn(&self, login_data: &LoginRequest) -> Result<String, CustomError> {
        if login_data.username != self.auth.username || login_data.password != self.auth.password
        {
            return Err(CustomError::UnauthorizedError(
                "Invalid credentials".to_string(),
            ));
        }

        let token = create_token(&login_data.username, &self.auth)?;
        info!("Issued token for {}", login_data.username);

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEMO_PASSWORD, DEMO_USERNAME};
    use crate::middleware::auth::decode_token;

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn demo_pair_gets_a_token() {
        let service = UserService::new(AuthConfig::new("k"));
        let token = service
            .login_fn(&request(DEMO_USERNAME, DEMO_PASSWORD))
            .unwrap();
        assert_eq!(decode_token(&token, "k").unwrap().username, DEMO_USERNAME);
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let service = UserService::new(AuthConfig::new("k"));
        let err = service.login_fn(&request(DEMO_USERNAME, "nope")).unwrap_err();
        assert!(matches!(err, CustomError::UnauthorizedError(_)));

        let err = service.login_fn(&request("someone", DEMO_PASSWORD)).unwrap_err();
        assert!(matches!(err, CustomError::UnauthorizedError(_)));
    }
}
