use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Blog, Catalog, Page, Trainer};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- listings ---

#[tokio::test]
async fn list_blogs_respects_per_page() {
    let resp = app().oneshot(get("/api/blogs?per_page=2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Blog> = body_json(resp).await;
    assert!(page.success);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.pagination.per_page, 2);
    assert_eq!(page.pagination.total, 4);
    assert_eq!(page.pagination.last_page, 2);
    assert_eq!(page.data[0].id, 1);
}

#[tokio::test]
async fn list_blogs_second_page() {
    let resp = app().oneshot(get("/api/blogs?per_page=3&page=2")).await.unwrap();

    let page: Page<Blog> = body_json(resp).await;
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.from, Some(4));
    assert_eq!(page.pagination.to, Some(4));
}

#[tokio::test]
async fn listings_keep_nullable_fields_as_null() {
    let resp = app().oneshot(get("/api/trainers?per_page=12")).await.unwrap();

    let raw: Value = body_json(resp).await;
    assert!(raw["data"][1]["expertise"].is_null());
    assert!(raw["data"][1]["photo_path"].is_null());
    let page: Page<Trainer> = serde_json::from_value(raw).unwrap();
    assert_eq!(page.data.len(), 2);
}

#[tokio::test]
async fn every_listing_route_answers() {
    for uri in ["/api/blogs", "/api/programs?per_page=9", "/api/galleries", "/api/trainers"] {
        let resp = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let raw: Value = body_json(resp).await;
        assert_eq!(raw["success"], true, "{uri}");
        assert!(raw["pagination"]["total"].as_u64().unwrap() > 0, "{uri}");
    }
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let resp = app_with(Catalog::default())
        .oneshot(get("/api/galleries"))
        .await
        .unwrap();

    let raw: Value = body_json(resp).await;
    assert_eq!(raw["data"].as_array().unwrap().len(), 0);
    assert!(raw["pagination"]["from"].is_null());
}

#[tokio::test]
async fn bad_per_page_returns_400() {
    let resp = app().oneshot(get("/api/blogs?per_page=lots")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- single post ---

#[tokio::test]
async fn get_blog_by_slug() {
    let resp = app()
        .oneshot(get("/api/blogs/career-moves-for-designers"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let raw: Value = body_json(resp).await;
    assert_eq!(raw["data"]["id"], 3);
    assert!(raw["data"]["content"].is_null());
}

#[tokio::test]
async fn get_blog_not_found_has_message() {
    let resp = app().oneshot(get("/api/blogs/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let raw: Value = body_json(resp).await;
    assert_eq!(raw["message"], "Blog not found.");
}

// --- contact ---

#[tokio::test]
async fn contact_accepts_complete_submission() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/contact-us",
            r#"{"source":"creative","name":"Ada","email":"ada@example.com","phone":null,"message":"Need a rebrand soon."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let raw: Value = body_json(resp).await;
    assert!(raw["message"].as_str().unwrap().contains("Thank you"));
}

#[tokio::test]
async fn contact_rejects_missing_email() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/contact-us",
            r#"{"name":"Ada","email":"  ","message":"Hello there"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let raw: Value = body_json(resp).await;
    assert_eq!(raw["message"], "The email field is required.");
}

#[tokio::test]
async fn contact_malformed_json_is_rejected() {
    let resp = app()
        .oneshot(json_request("POST", "/api/contact-us", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(get("/api/portfolio")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
