//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{CreatePost, PostUpdate};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePost>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner()).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(&path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id} - only the fields present in the body change.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostUpdate>,
) -> AppResult<HttpResponse> {
    let post = state.posts.update(&path, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path).await?;
    tracing::info!(post_id = %path, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use blog_core::domain::Post;
    use blog_shared::ErrorResponse;
    use serde_json::json;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::in_memory()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "A", "content": "0123456789", "author": "B"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Post = test::read_body_json(resp).await;
        assert_eq!(created.title, "A");

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", created.id))
            .to_request();
        let loaded: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(loaded, created);
    }

    #[actix_web::test]
    async fn test_invalid_body_is_bad_request() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "A", "content": "short", "author": "B"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            body.detail.as_deref(),
            Some("content: content shorter than 10 characters")
        );

        // Missing required field
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "A", "content": "0123456789"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_and_unknown_ids() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/api/posts/not-a-valid-hex-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/api/posts/65a1b2c3d4e5f60718293a4b")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_list_and_delete() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert!(posts.is_empty());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "A", "content": "0123456789", "author": "B"}))
            .to_request();
        let created: Post = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/posts/{}", created.id);

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({"author": "C"}))
            .to_request();
        let updated: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.author, "C");
        assert_eq!(updated.content, created.content);

        let req = test::TestRequest::put().uri(&uri).set_json(json!({})).to_request();
        let unchanged: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(unchanged, updated);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts, vec![updated]);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_health_reports_storage() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }
}
