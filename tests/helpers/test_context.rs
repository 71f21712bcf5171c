//! Test context for unified test setup
//!
//! This module provides a test context that builds settings, services and the
//! router the same way the binary does, and helpers to drive the router.

use std::sync::Once;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use savoten::{create_router, AppState, IdStrategy, ServiceFactory, Settings};
use serde_json::Value;
use tower::ServiceExt;

static INIT: Once = Once::new();

/// Initialize test logging once per test binary
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub settings: Settings,
    pub services: ServiceFactory,
    pub app: Router,
}

/// Response captured from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_strategy(IdStrategy::MaxPlusOne)
    }

    pub fn with_strategy(id_strategy: IdStrategy) -> Self {
        init_test_env();

        let mut settings = Settings::default();
        settings.repository.id_strategy = id_strategy;

        let services = ServiceFactory::new(&settings);
        let app = create_router(AppState::new(services.clone()));

        Self {
            settings,
            services,
            app,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
