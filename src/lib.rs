pub mod client;
pub mod config;
pub mod middleware;
pub mod post;
pub mod router;
pub mod user;
pub mod utils;
