//! Client state manager: the post list a reader browses and an author publishes into.
//!
//! Works the same with or without a backend. [`session::BlogSession`] owns the state
//! and talks to two collaborators, a [`storage::LocalStore`] and an optional
//! [`remote::PostApi`].

pub mod remote;
pub mod session;
pub mod storage;

use thiserror::Error;

pub use remote::{HttpPostApi, PostApi, RemoteError};
pub use session::{BlogSession, PublishOutcome};
pub use storage::{FileStore, LocalStore, MemoryStore, StorageError};

/// Errors surfaced to the user; each carries the message to show.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Network(String),

    #[error("No backend configured. Set RAR_API_BASE to enable login.")]
    NoBackend,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to encode posts: {0}")]
    Serialization(#[from] serde_json::Error),
}
