use async_trait::async_trait;
use axum::body::Body;
use axum::http::{
    Request, StatusCode,
    header::{CONTENT_TYPE, SET_COOKIE},
};
use std::sync::Arc;

use session_auth_axum::{
    AppState, CredentialVerifier, StaticCredentialVerifier, SystemRandom, generate_session_id,
};

use crate::common::{
    ExhaustedSource, TestApp, body_text, location, login_request, session_cookie,
    session_set_cookie,
};

#[tokio::test]
async fn test_login_then_view_protected_page() {
    let app = TestApp::new();

    let response = app.login("admin", "admin").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));

    let session_id = session_cookie(&response).expect("session cookie issued");
    assert_eq!(session_id.len(), 43);

    let response = app.get("/", Some(&session_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("admin"));
}

#[tokio::test]
async fn test_login_cookie_is_site_wide_session_cookie() {
    let app = TestApp::new();

    let response = app.login("admin", "admin").await;
    let set_cookie = session_set_cookie(&response).unwrap();

    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(!set_cookie.contains("Max-Age"));
    assert!(!set_cookie.contains("Expires"));
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let app = TestApp::new();

    let response = app.login("admin", "wrong").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert_eq!(body_text(response).await, "Wrong Credentials");
    assert!(app.state.store.is_empty().await);

    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_rejection_does_not_reveal_which_field_was_wrong() {
    let app = TestApp::new();

    let wrong_password = app.login("admin", "wrong").await;
    let wrong_username = app.login("nobody", "admin").await;
    let both_wrong = app.login("nobody", "wrong").await;

    assert_eq!(wrong_password.status(), wrong_username.status());
    assert_eq!(wrong_password.status(), both_wrong.status());

    let a = body_text(wrong_password).await;
    let b = body_text(wrong_username).await;
    let c = body_text(both_wrong).await;
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[tokio::test]
async fn test_missing_fields_are_wrong_credentials() {
    let app = TestApp::new();

    let response = app.send(login_request("username=admin")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Wrong Credentials");
}

#[tokio::test]
async fn test_bad_percent_escape_is_rejected_before_credential_check() {
    for body in [
        "username=admin&password=admin&x=%zz",
        "username=admin&password=%zz",
        "username=admin&password=admin%",
    ] {
        let app = TestApp::new();

        let response = app.send(login_request(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert!(response.headers().get(SET_COOKIE).is_none());
        assert_eq!(body_text(response).await, "Unable to parse form");
        assert!(app.state.store.is_empty().await);
    }
}

#[tokio::test]
async fn test_repeated_field_uses_first_value() {
    let app = TestApp::new();

    let response = app
        .send(login_request(
            "username=admin&username=other&password=admin&password=wrong",
        ))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(session_cookie(&response).is_some());
    assert_eq!(app.state.store.len().await, 1);
}

#[tokio::test]
async fn test_non_form_content_type_is_malformed() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username":"admin","password":"admin"}"#))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Unable to parse form");
    assert!(app.state.store.is_empty().await);
}

#[tokio::test]
async fn test_entropy_failure_is_server_error_without_session() {
    let app = TestApp::with_state(AppState::new(
        Arc::new(StaticCredentialVerifier::new("admin", "admin")),
        Arc::new(ExhaustedSource),
    ));

    let response = app.login("admin", "admin").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert_eq!(body_text(response).await, "Internal Server Error");
    assert!(app.state.store.is_empty().await);
}

#[tokio::test]
async fn test_unknown_session_id_is_treated_as_anonymous() {
    let app = TestApp::new();
    let never_issued = generate_session_id(&SystemRandom::new()).unwrap();

    let response = app.get("/", Some(never_issued.as_str())).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_login_page_is_public() {
    let app = TestApp::new();

    let response = app.get("/login", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"name="username""#));
    assert!(html.contains(r#"name="password""#));
}

struct AllowListVerifier;

#[async_trait]
impl CredentialVerifier for AllowListVerifier {
    async fn verify(&self, username: &str, password: &str) -> bool {
        matches!((username, password), ("alice", "s3cret") | ("bob", "hunter2"))
    }
}

#[tokio::test]
async fn test_custom_credential_verifier() {
    let app = TestApp::with_state(AppState::new(
        Arc::new(AllowListVerifier),
        Arc::new(SystemRandom::new()),
    ));

    let response = app.login("admin", "admin").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.login("bob", "hunter2").await;
    let session_id = session_cookie(&response).unwrap();

    let response = app.get("/", Some(&session_id)).await;
    assert!(body_text(response).await.contains("bob"));
}
