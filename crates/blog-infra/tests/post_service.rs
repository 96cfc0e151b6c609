use std::sync::Arc;

use blog_core::domain::{CreatePost, PostUpdate};
use blog_core::{DomainError, PostService};
use blog_infra::InMemoryPostRepository;
use blog_infra::database::{id_to_string, string_to_id};
use chrono::Utc;

fn service() -> PostService {
    PostService::new(Arc::new(InMemoryPostRepository::new()))
}

fn sample() -> CreatePost {
    CreatePost::new("A", "0123456789", "B")
}

#[tokio::test]
async fn create_scenario_echoes_fields() {
    let svc = service();
    let before = Utc::now();

    let post = svc.create(sample()).await.unwrap();

    assert_eq!(post.id.len(), 24);
    assert_eq!(post.title, "A");
    assert_eq!(post.content, "0123456789");
    assert_eq!(post.author, "B");
    // Stored with millisecond precision.
    assert!(post.created_at.timestamp_millis() >= before.timestamp_millis());
    assert!(post.created_at <= Utc::now());
}

#[tokio::test]
async fn create_then_get_is_equal() {
    let svc = service();
    let created = svc.create(sample()).await.unwrap();

    let loaded = svc.get(&created.id).await.unwrap();
    assert_eq!(loaded, created);
}

#[tokio::test]
async fn created_id_round_trips() {
    let svc = service();
    let created = svc.create(sample()).await.unwrap();

    let native = string_to_id(&created.id).unwrap();
    assert_eq!(id_to_string(&native), created.id);
    assert_eq!(string_to_id(&id_to_string(&native)).unwrap(), native);
}

#[tokio::test]
async fn short_content_is_rejected() {
    let svc = service();
    let err = svc
        .create(CreatePost::new("A", "012345678", "B"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
    assert!(svc.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_id_is_invalid_not_missing() {
    let svc = service();
    let err = svc.get("not-a-valid-hex-id").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidIdentifier(_)));
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let svc = service();
    let err = svc.get("65a1b2c3d4e5f60718293a4b").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn empty_update_returns_document_unchanged() {
    let svc = service();
    let created = svc.create(sample()).await.unwrap();

    let updated = svc
        .update(&created.id, PostUpdate::default())
        .await
        .unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn update_with_identical_values_succeeds() {
    let svc = service();
    let created = svc.create(sample()).await.unwrap();

    let same = PostUpdate {
        title: Some(created.title.clone()),
        ..Default::default()
    };
    let updated = svc.update(&created.id, same).await.unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn update_merges_present_fields_only() {
    let svc = service();
    let created = svc.create(sample()).await.unwrap();

    let patch = PostUpdate {
        content: Some("a brand new body".into()),
        ..Default::default()
    };
    let updated = svc.update(&created.id, patch).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.author, created.author);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.content, "a brand new body");
    assert_eq!(svc.get(&created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn update_of_missing_post_is_not_found() {
    let svc = service();
    let patch = PostUpdate {
        title: Some("New".into()),
        ..Default::default()
    };

    let err = svc
        .update("65a1b2c3d4e5f60718293a4b", patch)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let svc = service();
    let created = svc.create(sample()).await.unwrap();

    svc.delete(&created.id).await.unwrap();
    let err = svc.delete(&created.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn list_on_empty_collection_is_empty() {
    let svc = service();
    assert!(svc.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_every_post() {
    let svc = service();
    let a = svc.create(sample()).await.unwrap();
    let b = svc
        .create(CreatePost::new("Second", "another body", "C"))
        .await
        .unwrap();

    let posts = svc.list().await.unwrap();
    assert_eq!(posts, vec![a, b]);
}
