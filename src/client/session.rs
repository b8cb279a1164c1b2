use log::{info, warn};

use crate::client::ClientError;
use crate::client::remote::{PostApi, RemoteError};
use crate::client::storage::{LocalStore, POSTS_KEY, TOKEN_KEY};
use crate::post::post_model::{Category, Post, PostDraft};
use crate::user::model::LoginRequest;
use crate::utils::helpers::{display_date, now_millis};

/// Where a published post ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Accepted by the backend; holds the echoed post
    Remote(Post),
    /// Local-only mode, or remote mode without a token
    Local(Post),
    /// Backend unreachable, kept locally instead
    LocalFallback(Post),
}

impl PublishOutcome {
    pub fn post(&self) -> &Post {
        match self {
            PublishOutcome::Remote(post)
            | PublishOutcome::Local(post)
            | PublishOutcome::LocalFallback(post) => post,
        }
    }
}

/// Client-side state: the newest-first post list, the token and the compose draft.
///
/// With no remote configured every change to the list is written through to the
/// local store as a full snapshot.
pub struct BlogSession<S: LocalStore> {
    posts: Vec<Post>,
    token: Option<String>,
    draft: PostDraft,
    remote: Option<Box<dyn PostApi>>,
    store: S,
}

impl<S: LocalStore> BlogSession<S> {
    /// Loads the token and the post list, preferring the remote when one is configured.
    pub async fn start(remote: Option<Box<dyn PostApi>>, store: S) -> Result<Self, ClientError> {
        let token = store.load(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let mut session = BlogSession {
            posts: Vec::new(),
            token,
            draft: PostDraft::default(),
            remote,
            store,
        };

        if let Some(remote) = &session.remote {
            match remote.list_posts().await {
                Ok(mut posts) => {
                    posts.reverse();
                    session.posts = posts;
                    return Ok(session);
                }
                Err(e) => warn!("Backend unreachable, falling back to local storage: {}", e),
            }
        }

        let snapshot = session.load_snapshot()?;
        session.commit(snapshot)?;
        Ok(session)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether the session talks to a backend; if so nothing is mirrored locally.
    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PostDraft {
        &mut self.draft
    }

    /// Publishes the current draft and resets it on success.
    pub async fn publish(&mut self) -> Result<PublishOutcome, ClientError> {
        let draft = self.draft.clone();
        let outcome = self.publish_draft(draft).await?;
        self.draft = PostDraft::default();
        Ok(outcome)
    }

    pub async fn publish_draft(&mut self, draft: PostDraft) -> Result<PublishOutcome, ClientError> {
        if draft.is_blank() {
            return Err(ClientError::Validation(
                "Title and content required.".to_string(),
            ));
        }

        let post = draft.into_post(self.next_post_id(), display_date());

        let outcome = match (&self.remote, &self.token) {
            (Some(remote), Some(token)) => match remote.create_post(token, &post).await {
                Ok(saved) => PublishOutcome::Remote(saved),
                Err(RemoteError::Rejected { message, .. }) => {
                    return Err(ClientError::Rejected(format!(
                        "Error saving post: {}",
                        message
                    )));
                }
                Err(e) => {
                    warn!("Network error, saving post {} locally: {}", post.id, e);
                    PublishOutcome::LocalFallback(post)
                }
            },
            _ => PublishOutcome::Local(post),
        };

        let mut posts = Vec::with_capacity(self.posts.len() + 1);
        posts.push(outcome.post().clone());
        posts.extend(self.posts.iter().cloned());
        self.commit(posts)?;
        Ok(outcome)
    }

    /// Exchanges the credential pair for a token and keeps it for later publishes.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let remote = self.remote.as_ref().ok_or(ClientError::NoBackend)?;
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let token = match remote.login(&credentials).await {
            Ok(token) => token,
            Err(RemoteError::Network(e)) => {
                warn!("Login request failed: {}", e);
                return Err(ClientError::Network("Login network error.".to_string()));
            }
            Err(e) => {
                info!("Login rejected: {}", e);
                return Err(ClientError::Rejected("Login failed.".to_string()));
            }
        };

        self.store.save(TOKEN_KEY, &token)?;
        self.token = Some(token);
        Ok(())
    }

    /// Posts in `category`, newest first.
    pub fn by_category(&self, category: Category) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.category == category)
            .collect()
    }

    /// Every category in browse order with its posts; empty groups included.
    pub fn categories(&self) -> Vec<(Category, Vec<&Post>)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.by_category(category)))
            .collect()
    }

    /// Timestamp id, bumped past the newest known id if the clock hasn't moved.
    fn next_post_id(&self) -> i64 {
        let now = now_millis();
        match self.posts.iter().map(|post| post.id).max() {
            Some(max) if max >= now => max + 1,
            _ => now,
        }
    }

    fn load_snapshot(&self) -> Result<Vec<Post>, ClientError> {
        let Some(raw) = self.store.load(POSTS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(posts) => Ok(posts),
            Err(e) => {
                warn!("Ignoring unreadable local snapshot: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the list. Local-only sessions write the snapshot first and keep the
    /// old list if that fails.
    fn commit(&mut self, posts: Vec<Post>) -> Result<(), ClientError> {
        if self.remote.is_none() {
            let snapshot = serde_json::to_string(&posts)?;
            self.store.save(POSTS_KEY, &snapshot)?;
        }
        self.posts = posts;
        Ok(())
    }
}
