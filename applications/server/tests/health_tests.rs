/// HTTP health endpoint tests
mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{start_server_with, test_config};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tower::util::ServiceExt;
use userhub_core::{CreateUser, UserRegistry};
use userhub_server::{api, api::health::HealthResponse, config::ServerConfig, AppState};

async fn get_health(app_state: AppState) -> (StatusCode, HealthResponse) {
    let app = api::router(app_state);
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}

#[tokio::test]
async fn test_health_reports_seeded_users() {
    let app_state = AppState::from_config(&ServerConfig::default()).unwrap();

    let (status, health) = get_health(app_state).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(health.users, 2);
}

#[tokio::test]
async fn test_health_tracks_registry_size() {
    let app_state = AppState::from_config(&ServerConfig::default()).unwrap();
    app_state
        .registry
        .add_user(CreateUser::new("Ann", "ann@x.com"))
        .await
        .unwrap();

    let (_, health) = get_health(app_state).await;
    assert_eq!(health.users, 3);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = api::router(AppState::new(Arc::new(UserRegistry::default())));
    let request = Request::builder()
        .uri("/users")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The health listener runs next to gRPC and stops with it
#[tokio::test]
async fn test_health_listener_serves_http() {
    let server = start_server_with(test_config(true)).await;
    let addr = server.health_addr.expect("health listener enabled");

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains(r#""status":"ok""#));
    assert!(response.contains(r#""users":2"#));

    server.stop().await.unwrap();
}
