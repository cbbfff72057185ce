//! Admin gate, login and logout.

use axum::http::StatusCode;
use mars_paper_integration_tests::{ADMIN_PASSWORD, ADMIN_PHONE, TestApp, config_with};

#[tokio::test]
async fn test_admin_paths_redirect_anonymous_visitors() {
    let app = TestApp::new();

    for path in ["/admin", "/admin/team", "/admin/products", "/admin/gallery"] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{path}");
        assert_eq!(response.location(), Some("/admin/login"), "{path}");
    }

    let response = app
        .post_form("/admin/team", &[("name", "Aziz"), ("position", "Direktor")])
        .await;
    assert_eq!(response.location(), Some("/admin/login"));
    assert_eq!(app.store.operation_count(), 0);
}

#[tokio::test]
async fn test_login_page_open_to_anonymous_and_skipped_when_signed_in() {
    let app = TestApp::new();

    let response = app.get("/admin/login").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("name=\"password\""));

    let response = app.get_as_admin("/admin/login").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/admin"));
}

#[tokio::test]
async fn test_tampered_cookie_is_rejected() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .uri("/admin")
        .header("cookie", "admin_session=true")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.location(), Some("/admin/login"));
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/admin/login",
            &[("phone", ADMIN_PHONE), ("password", ADMIN_PASSWORD)],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["success"], true);

    let cookies = response.set_cookies();
    assert_eq!(cookies.len(), 1);
    let cookie = &cookies[0];
    assert!(cookie.starts_with("admin_session=true."));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));

    // The issued cookie opens the dashboard.
    let pair = cookie.split(';').next().unwrap().to_string();
    let request = axum::http::Request::builder()
        .uri("/admin")
        .header("cookie", pair)
        .body(axum::body::Body::empty())
        .unwrap();
    assert_eq!(app.send(request).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/admin/login",
            &[("phone", ADMIN_PHONE), ("password", "wrong-password")],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Noto'g'ri telefon raqami yoki parol.");
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_login_validates_form_before_credentials() {
    let app = TestApp::new();

    let response = app
        .post_form("/admin/login", &[("phone", "12"), ("password", "123")])
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = response.json()["errors"].clone();
    assert!(errors.get("phone").is_some());
    assert!(errors.get("password").is_some());
}

#[tokio::test]
async fn test_login_without_configured_credentials() {
    let config = config_with(&[("ADMIN_PASSWORD", "")]);
    let app = TestApp::with_config(config);

    let response = app
        .post_form(
            "/admin/login",
            &[("phone", ADMIN_PHONE), ("password", ADMIN_PASSWORD)],
        )
        .await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json()["success"], false);
}

#[tokio::test]
async fn test_secure_cookie_in_production() {
    let app = TestApp::with_config(config_with(&[("APP_ENV", "production")]));

    let response = app
        .post_form(
            "/admin/login",
            &[("phone", ADMIN_PHONE), ("password", ADMIN_PASSWORD)],
        )
        .await;
    assert!(response.set_cookies()[0].contains("Secure"));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let cookie = app.admin_cookie();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/admin/logout")
        .header("cookie", cookie)
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/admin/login"));
    let cleared = &response.set_cookies()[0];
    assert!(cleared.starts_with("admin_session=;"));
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_admin_pages_are_not_cached_by_browsers() {
    let app = TestApp::new();
    let response = app.get_as_admin("/admin/team").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers["cache-control"], "no-store, max-age=0");
}
