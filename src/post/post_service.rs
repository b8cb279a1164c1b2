use std::path::{Path, PathBuf};

use log::info;
use tokio::sync::Mutex;

use crate::post::post_model::{Post, PostsDocument};
use crate::utils::error::CustomError;

/// Flat-file post store. Every write rewrites the whole document.
pub struct PostService {
    path: PathBuf,
    // Serializes the read-modify-write cycle across workers
    write_lock: Mutex<()>,
}

impl PostService {
    /// Opens the store, creating an empty document if the file is missing.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self, CustomError> {
        let service = PostService {
            path: path.into(),
            write_lock: Mutex::new(()),
        };

        if tokio::fs::metadata(&service.path).await.is_err() {
            info!("Creating empty post store at {}", service.path.display());
            service.write_document(&PostsDocument::default()).await?;
        }

        Ok(service)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, CustomError> {
        Ok(self.read_document().await?.posts)
    }

    /// Appends the post as received and returns it.
    pub async fn create_post(&self, post: Post) -> Result<Post, CustomError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?;
        document.posts.push(post.clone());
        self.write_document(&document).await?;

        Ok(post)
    }

    async fn read_document(&self) -> Result<PostsDocument, CustomError> {
        let raw = tokio::fs::read(&self.path).await.map_err(|e| {
            CustomError::InternalServerError(format!("Failed to read posts: {}", e))
        })?;

        serde_json::from_slice(&raw).map_err(|e| {
            CustomError::InternalServerError(format!("Failed to parse posts: {}", e))
        })
    }

    async fn write_document(&self, document: &PostsDocument) -> Result<(), CustomError> {
        let body = serde_json::to_vec_pretty(document).map_err(|e| {
            CustomError::InternalServerError(format!("Failed to encode posts: {}", e))
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, body).await.map_err(|e| {
            CustomError::InternalServerError(format!("Failed to write posts: {}", e))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            CustomError::InternalServerError(format!("Failed to replace posts: {}", e))
        })
    }
}
