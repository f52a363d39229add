#![allow(dead_code)]

use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, COOKIE},
        Method, Request, StatusCode,
    },
    Router,
};
use books_api::{build_router, AppState};
use books_security::Credentials;
use books_shared::config::AppConfig;
use serde_json::Value;
use tower::ServiceExt;

pub const USER: &str = "test_user";
pub const PASSWORD: &str = "test_password";
pub const INVALID_COOKIE: &str = "No valid auth cookie provided!";

pub fn app() -> Router {
    let config = AppConfig::from_toml_str("").expect("default config");
    build_router(AppState::new(config))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub fn login_request(user: &str, password: &str) -> Request<Body> {
    Request::builder()
        .uri("/login")
        .header(
            AUTHORIZATION,
            Credentials::new(user, password).to_basic_header(),
        )
        .body(Body::empty())
        .unwrap()
}

/// Log in with the default credentials and return the cookie value.
pub async fn login(app: &Router) -> String {
    let (status, body) = send(app, login_request(USER, PASSWORD)).await;
    assert_eq!(status, StatusCode::OK);
    body["auth_cookie"].as_str().expect("auth_cookie").to_string()
}

pub fn request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, format!("my_cookie={}", cookie));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form_request(method: Method, uri: &str, cookie: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(COOKIE, format!("my_cookie={}", cookie))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

/// A request with an arbitrary body and content type.
pub fn body_request(
    method: Method,
    uri: &str,
    cookie: &str,
    content_type: &str,
    body: &str,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(COOKIE, format!("my_cookie={}", cookie))
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Encode text parts as `multipart/form-data` with a fixed boundary.
pub fn multipart_body(parts: &[(&str, &str)]) -> (String, String) {
    let boundary = "books-boundary";
    let mut body = String::new();
    for (name, value) in parts {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            boundary, name, value
        ));
    }
    body.push_str(&format!("--{}--\r\n", boundary));
    (format!("multipart/form-data; boundary={}", boundary), body)
}

pub async fn add_book(app: &Router, cookie: &str, form: &str) -> Value {
    let (status, body) = send(app, form_request(Method::POST, "/add_book", cookie, form)).await;
    assert_eq!(status, StatusCode::OK);
    body
}

pub async fn list(app: &Router, cookie: &str, query: &str) -> Vec<Value> {
    let uri = if query.is_empty() {
        "/books".to_string()
    } else {
        format!("/books?{}", query)
    };
    let (status, body) = send(app, request(Method::GET, &uri, Some(cookie))).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().expect("array of books").clone()
}

pub fn titles(books: &[Value]) -> Vec<String> {
    books
        .iter()
        .map(|b| b["title"].as_str().unwrap_or_default().to_string())
        .collect()
}
