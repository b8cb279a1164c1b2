//! Environment-driven configuration for the post store service and the client.
//!
//! Both sides read plain environment variables (a `.env` file is loaded by the
//! binaries first), falling back to development defaults.
use std::env;
use std::path::PathBuf;

use chrono::Duration;
use log::warn;

/// The one credential pair allowed to publish
pub const DEMO_USERNAME: &str = "talitha";
pub const DEMO_PASSWORD: &str = "rise123";

pub const DEFAULT_SECRET: &str = "dev-secret-change-me";
pub const DEFAULT_PORT: u16 = 4000;

/// Service settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Path of the JSON document holding every post
    pub data_file: PathBuf,
    pub auth: AuthConfig,
}

/// Login and token-signing settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    /// HMAC secret for issued tokens
    pub secret: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            username: DEMO_USERNAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
            secret: secret.into(),
            token_ttl: Duration::days(30),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let secret = env::var("RAR_SECRET").unwrap_or_else(|_| {
            warn!("RAR_SECRET is not set, signing tokens with the development secret");
            DEFAULT_SECRET.to_string()
        });

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid PORT value {:?}", raw);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            data_file: env::var("RAR_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("posts.json")),
            auth: AuthConfig::new(secret),
        }
    }
}

/// Client settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL; `None` means local-only mode
    pub api_base: Option<String>,
    /// Directory backing the local store
    pub data_dir: PathBuf,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            api_base: normalize_api_base(env::var("RAR_API_BASE").ok()),
            data_dir: env::var("RAR_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".rooted")),
        }
    }
}

/// Blank values select local-only mode; a trailing slash is dropped so paths join cleanly.
pub fn normalize_api_base(raw: Option<String>) -> Option<String> {
    raw.map(|base| base.trim().trim_end_matches('/').to_string())
        .filter(|base| !base.is_empty())
}
