mod common;

use common::{dead_base_url, sample_post, spawn_server};
use rooted_risen::client::storage::{POSTS_KEY, TOKEN_KEY};
use rooted_risen::client::{
    BlogSession, ClientError, FileStore, HttpPostApi, LocalStore, MemoryStore, PostApi,
    PublishOutcome, RemoteError,
};
use rooted_risen::config::{DEMO_PASSWORD, DEMO_USERNAME};
use rooted_risen::post::post_model::{Category, Post, PostDraft};
use rooted_risen::user::model::LoginRequest;

fn remote(base: &str) -> Option<Box<dyn PostApi>> {
    Some(Box::new(HttpPostApi::new(base)))
}

#[actix_web::test]
async fn login_then_publish_round_trips_through_service() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(dir.path()).await;

    let mut session = BlogSession::start(remote(&base), MemoryStore::new())
        .await
        .unwrap();
    assert!(session.posts().is_empty());

    session.login(DEMO_USERNAME, DEMO_PASSWORD).await.unwrap();
    assert!(session.token().is_some());

    let outcome = session
        .publish_draft(PostDraft::new("Sunrise", "Mercies are new", Category::Devotional))
        .await
        .unwrap();
    let PublishOutcome::Remote(saved) = outcome else {
        panic!("expected remote publish, got {:?}", outcome);
    };
    assert_eq!(session.posts(), [saved.clone()].as_slice());

    // A fresh session sees the stored post
    let reloaded = BlogSession::start(remote(&base), MemoryStore::new())
        .await
        .unwrap();
    assert_eq!(reloaded.posts(), [saved].as_slice());
}

#[actix_web::test]
async fn fetched_list_is_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(dir.path()).await;

    let mut author = BlogSession::start(remote(&base), MemoryStore::new())
        .await
        .unwrap();
    author.login(DEMO_USERNAME, DEMO_PASSWORD).await.unwrap();
    for title in ["one", "two", "three"] {
        author
            .publish_draft(PostDraft::new(title, "body", Category::Story))
            .await
            .unwrap();
    }

    let reader = BlogSession::start(remote(&base), MemoryStore::new())
        .await
        .unwrap();
    let titles: Vec<_> = reader.posts().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["three", "two", "one"]);
}

#[actix_web::test]
async fn wrong_password_yields_no_token() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(dir.path()).await;

    let mut session = BlogSession::start(remote(&base), MemoryStore::new())
        .await
        .unwrap();
    let err = session.login(DEMO_USERNAME, "wrong").await.unwrap_err();

    assert!(matches!(err, ClientError::Rejected(_)));
    assert_eq!(session.token(), None);
    assert!(session.store().load(TOKEN_KEY).unwrap().is_none());
}

#[actix_web::test]
async fn garbage_token_is_rejected_by_service() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(dir.path()).await;
    let api = HttpPostApi::new(&base);

    let err = api
        .create_post("garbage", &sample_post(1, Category::Prayer))
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::Rejected { status: 401, .. }));
    assert!(api.list_posts().await.unwrap().is_empty());
}

#[actix_web::test]
async fn stale_stored_token_aborts_publish() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(dir.path()).await;
    let mut store = MemoryStore::new();
    store.save(TOKEN_KEY, "stale").unwrap();

    let mut session = BlogSession::start(remote(&base), store).await.unwrap();
    let err = session
        .publish_draft(PostDraft::new("t", "c", Category::Story))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Rejected(ref m) if m == "Error saving post: Unauthorized: Invalid or expired token"
    ));
    assert!(session.posts().is_empty());
}

#[actix_web::test]
async fn unreachable_backend_falls_back_to_local_snapshot() {
    let data = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(data.path());
    let saved: Vec<Post> = vec![sample_post(9, Category::Reflection)];
    store
        .save(POSTS_KEY, &serde_json::to_string(&saved).unwrap())
        .unwrap();
    store.save(TOKEN_KEY, "any-token").unwrap();

    let mut session = BlogSession::start(remote(&dead_base_url()), store)
        .await
        .unwrap();
    assert_eq!(session.posts(), saved.as_slice());

    let outcome = session
        .publish_draft(PostDraft::new("Offline", "Still writing", Category::Prayer))
        .await
        .unwrap();
    let PublishOutcome::LocalFallback(kept) = outcome else {
        panic!("expected local fallback, got {:?}", outcome);
    };
    assert_eq!(session.posts().len(), 2);
    assert_eq!(session.posts()[0], kept);
    assert_ne!(kept.id, 9);
}

#[actix_web::test]
async fn login_against_dead_backend_is_a_network_error() {
    let api = HttpPostApi::new(&dead_base_url());
    let err = api
        .login(&LoginRequest {
            username: DEMO_USERNAME.into(),
            password: DEMO_PASSWORD.into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Network(_)));
}

#[actix_web::test]
async fn local_only_session_persists_across_restarts() {
    let data = tempfile::tempdir().unwrap();

    let mut first = BlogSession::start(None, FileStore::new(data.path()))
        .await
        .unwrap();
    first
        .publish_draft(PostDraft::new("Kept", "on disk", Category::Testimony))
        .await
        .unwrap();
    let expected = first.posts().to_vec();

    let second = BlogSession::start(None, FileStore::new(data.path()))
        .await
        .unwrap();
    assert_eq!(second.posts(), expected.as_slice());
}
