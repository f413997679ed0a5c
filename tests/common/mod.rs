use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, Response},
    Router,
};
use restaurant_listing::{
    api::{build_router, ApiState},
    config::DatabaseConfig,
    storage::{self, DbPool},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub pool: DbPool,
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_router(ApiState::from_pool(self.pool.clone()))
    }
}

pub async fn setup_test_app() -> TestApp {
    let config = DatabaseConfig { url: "sqlite::memory:".to_string(), ..Default::default() };
    let pool = storage::create_pool(&config).await.expect("create sqlite pool");

    TestApp { pool }
}

pub async fn send_request(
    app: &TestApp,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(path);

    let request = if let Some(json) = body {
        let bytes = serde_json::to_vec(&json).expect("serialize body");
        builder
            .header("content-type", "application/json")
            .body(Body::from(bytes))
            .expect("build request")
    } else {
        builder.body(Body::empty()).expect("build request")
    };

    app.router().oneshot(request).await.expect("request")
}

pub async fn read_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.expect("read body").to_vec()
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = read_bytes(response).await;
    serde_json::from_slice(&bytes).expect("parse json")
}
