//! Home page, product pages and site-wide response headers.

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use mars_paper_integration_tests::TestApp;
use mars_paper_site::store::{Collection, Row};
use serde_json::json;

fn row(value: serde_json::Value) -> Row {
    value.as_object().cloned().unwrap()
}

fn seed_catalogue(app: &TestApp) -> String {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    app.store.seed(
        Collection::TeamMembers,
        row(json!({"name": "Aziz Karimov", "position": "Direktor", "achievements": null})),
        at,
    );
    app.store.seed(
        Collection::GalleryItems,
        row(json!({
            "title_key": "gallery_factory_title",
            "description_key": "gallery_factory_desc",
            "category": "ishlab chiqarish",
            "icon_name": "factory"
        })),
        at,
    );
    app.store.seed(
        Collection::Products,
        row(json!({
            "slug": "a4-qogoz",
            "title_key": "product_a4_title",
            "description_key": "product_a4_description",
            "price_per_unit": 45000,
            "unit_type": "pachka",
            "features": ["80 g/m2", "500 varaq"]
        })),
        at,
    )
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::unconfigured();
    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_home_renders_content() {
    let app = TestApp::new();
    seed_catalogue(&app);

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.body;
    assert!(body.contains("<html lang=\"uz\">"));
    assert!(body.contains("Bosh sahifa"));
    assert!(body.contains("Aziz Karimov"));
    assert!(body.contains("product_a4_title"));
    assert!(body.contains("45 000"));
    assert!(body.contains("gallery_factory_title"));
    assert!(body.contains("+998 90 359 39 00"));
}

#[tokio::test]
async fn test_home_in_other_locales() {
    let app = TestApp::new();
    seed_catalogue(&app);

    let uz = app.get("/").await.body;
    let ru = app.get("/?lang=ru").await.body;
    let en = app.get("/?lang=EN").await.body;

    assert!(ru.contains("<html lang=\"ru\">"));
    assert!(ru.contains("Главная"));
    assert!(en.contains("<html lang=\"en\">"));
    assert!(en.contains(">Home<"));
    assert_ne!(uz, ru);

    // Unknown languages fall back to Uzbek.
    assert!(app.get("/?lang=de").await.body.contains("<html lang=\"uz\">"));
}

#[tokio::test]
async fn test_product_pages() {
    let app = TestApp::new();
    let id = seed_catalogue(&app);

    let index = app.get("/products").await;
    assert_eq!(index.status, StatusCode::OK);
    assert!(index.body.contains("/products/a4-qogoz?lang=uz"));

    let show = app.get("/products/a4-qogoz?lang=ru").await;
    assert_eq!(show.status, StatusCode::OK);
    assert!(show.body.contains("500 varaq"));
    assert!(
        show.body
            .contains("<link rel=\"canonical\" href=\"http://localhost:3000/products/a4-qogoz\">")
    );
    assert!(show.body.contains("action=\"/orders\""));
    assert!(show.body.contains(&format!("name=\"productId\" value=\"{id}\"")));

    let missing = app.get("/products/no-such-product").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_pages_need_store() {
    let app = TestApp::unconfigured();
    assert_eq!(app.get("/").await.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(app.get("/products").await.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_store_outage_is_bad_gateway_and_not_cached() {
    let app = TestApp::new();
    seed_catalogue(&app);
    app.store.set_failing(true);

    assert_eq!(app.get("/").await.status, StatusCode::BAD_GATEWAY);

    app.store.set_failing(false);
    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Aziz Karimov"));
}

#[tokio::test]
async fn test_security_headers() {
    let app = TestApp::new();
    let response = app.get("/health").await;

    assert_eq!(response.headers["x-frame-options"], "DENY");
    assert_eq!(response.headers["x-content-type-options"], "nosniff");
    assert_eq!(
        response.headers["referrer-policy"],
        "strict-origin-when-cross-origin"
    );
    let csp = response.headers["content-security-policy"].to_str().unwrap();
    assert!(csp.contains("frame-src https://www.google.com"));
    assert!(csp.contains("frame-ancestors 'none'"));
    assert!(response.headers.get("cache-control").is_none());
}
