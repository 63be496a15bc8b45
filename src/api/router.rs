use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{
    error_page_middleware, locale_middleware, logging_middleware, security_headers_middleware,
};
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        // User pages
        .merge(users::create_user_router())
        // Error page rendering needs the locale resolved by the outer layer
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_page_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            locale_middleware,
        ))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::middleware::LocaleResolver;
    use crate::domain::user::{MockUserRepository, User, UserId, UserRepository};
    use crate::domain::Repository;
    use crate::infrastructure::i18n::{Locale, MessageSource};
    use crate::infrastructure::user::InMemoryUserRepository;
    use crate::infrastructure::view::ViewRenderer;

    fn state_with(users: Arc<dyn UserRepository>) -> AppState {
        let messages = MessageSource::embedded(Locale::default()).unwrap();
        let views = Arc::new(ViewRenderer::embedded(messages).unwrap());
        AppState::new(users, views, LocaleResolver::new(Locale::default(), "lang"))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn ann() -> User {
        User::with_id(UserId::new(1), "Ann", "ann@example.com")
    }

    fn stored_ann() -> InMemoryUserRepository {
        InMemoryUserRepository::with_users(vec![ann()]).unwrap()
    }

    #[tokio::test]
    async fn test_add_list_delete_scenario() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = create_router(state_with(repo.clone()));

        let response = app
            .clone()
            .oneshot(post_form("/addUser", "name=Ann&email=ann%40example.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
        assert_eq!(
            repo.find_all().await.unwrap(),
            vec![User::with_id(UserId::new(1), "Ann", "ann@example.com")]
        );

        let response = app.clone().oneshot(get("/getUserList")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("ann@example.com"));
        assert!(html.contains("href=\"/delete/1\""));

        let response = app.clone().oneshot(get("/delete/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(repo.find_all().await.unwrap().is_empty());

        let html = body_text(app.oneshot(get("/getUserList")).await.unwrap()).await;
        assert!(html.contains("No users yet."));
    }

    #[tokio::test]
    async fn test_invalid_submission_rerenders_form() {
        let repo = Arc::new(MockUserRepository::new());
        let app = create_router(state_with(repo.clone()));

        let response = app
            .oneshot(post_form("/addUser", "name=&email=nope"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("id=\"name-errors\""));
        assert!(html.contains("id=\"email-errors\""));
        assert!(html.contains("value=\"nope\""));
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_update_flow() {
        let repo = Arc::new(stored_ann());
        let app = create_router(state_with(repo.clone()));

        let html = body_text(app.clone().oneshot(get("/update/1")).await.unwrap()).await;
        assert!(html.contains("value=\"ann@example.com\""));

        let response = app
            .oneshot(post_form(
                "/updateUser",
                "id=1&name=Anna&email=anna%40example.com",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            repo.find_by_id(&UserId::new(1)).await.unwrap(),
            Some(User::with_id(UserId::new(1), "Anna", "anna@example.com"))
        );
    }

    #[tokio::test]
    async fn test_invalid_update_rerenders_update_form() {
        let repo = Arc::new(stored_ann());
        let app = create_router(state_with(repo.clone()));

        let response = app
            .oneshot(post_form("/updateUser", "id=1&name=Anna&email=broken"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("action=\"/updateUser\""));
        assert!(html.contains("name=\"id\" value=\"1\""));
        assert!(html.contains("value=\"Anna\""));
        assert!(html.contains("id=\"email-errors\""));
        assert_eq!(repo.find_all().await.unwrap(), vec![ann()]);
    }

    #[tokio::test]
    async fn test_add_with_id_creates_new_record() {
        let repo = Arc::new(stored_ann());
        let app = create_router(state_with(repo.clone()));

        let response = app
            .oneshot(post_form("/addUser", "id=1&name=Bob&email=bob%40example.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            repo.find_all().await.unwrap(),
            vec![ann(), User::with_id(UserId::new(2), "Bob", "bob@example.com")]
        );
    }

    #[tokio::test]
    async fn test_add_after_max_id_is_a_server_error() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = create_router(state_with(repo.clone()));

        let response = app
            .clone()
            .oneshot(post_form(
                "/updateUser",
                "id=9223372036854775807&name=Ann&email=ann%40example.com",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app
            .clone()
            .oneshot(post_form("/addUser", "name=Bob&email=bob%40example.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.contains("<html lang=\"en\">"));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        // The server keeps answering
        let response = app.oneshot(get("/getUserList")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_language_link_after_post_opens_get_page() {
        let app = create_router(state_with(Arc::new(MockUserRepository::new())));

        let response = app
            .clone()
            .oneshot(post_form("/addUser", "name=&email=nope"))
            .await
            .unwrap();
        let html = body_text(response).await;

        let marker = "href=\"";
        let link = html
            .split(marker)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .find(|href| href.ends_with("?lang=lt"))
            .unwrap()
            .to_string();
        assert_eq!(link, "/getUserForm?lang=lt");

        let response = app.oneshot(get(&link)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<html lang=\"lt\">"));
    }

    #[tokio::test]
    async fn test_unknown_id_renders_error_page() {
        let repo = Arc::new(MockUserRepository::new());
        let app = create_router(state_with(repo.clone()));

        let response = app.clone().oneshot(get("/update/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body_text(response).await;
        assert!(html.contains("<html lang=\"en\">"));

        let response = app.oneshot(get("/delete/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(repo.delete_calls(), 0);
    }

    #[tokio::test]
    async fn test_non_numeric_path_id_is_bad_request() {
        let app = create_router(state_with(Arc::new(MockUserRepository::new())));

        let response = app.oneshot(get("/update/abc")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_lang_parameter_switches_session_locale() {
        let app = create_router(state_with(Arc::new(MockUserRepository::new())));

        let response = app.clone().oneshot(get("/getUserForm?lang=lt")).await.unwrap();
        assert_eq!(
            response.headers().get(header::SET_COOKIE).unwrap(),
            "lang=lt; Path=/; HttpOnly; SameSite=Lax"
        );
        let html = body_text(response).await;
        assert!(html.contains("<html lang=\"lt\">"));
        assert!(html.contains("Vardas"));

        let request = Request::builder()
            .uri("/getUserForm")
            .header(header::COOKIE, "lang=lt")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(body_text(response).await.contains("<html lang=\"lt\">"));

        let html = body_text(app.oneshot(get("/getUserForm")).await.unwrap()).await;
        assert!(html.contains("<html lang=\"en\">"));
    }

    #[tokio::test]
    async fn test_ready_reports_repository_failure() {
        let repo = Arc::new(MockUserRepository::new());
        let app = create_router(state_with(repo.clone()));

        let response = app.clone().oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        repo.set_should_fail(true).await;
        let response = app.oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(body_text(response).await.contains("\"unhealthy\""));
    }

    #[tokio::test]
    async fn test_responses_carry_request_id_and_security_headers() {
        let app = create_router(state_with(Arc::new(MockUserRepository::new())));

        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("x-request-id").unwrap(), "req-42");
        assert_eq!(
            response.headers().get(header::X_FRAME_OPTIONS).unwrap(),
            "DENY"
        );
    }
}
