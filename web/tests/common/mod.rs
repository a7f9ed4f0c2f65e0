//! Test helpers: a fake agriculture backend and request shortcuts

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use agrosphere_web::config::ApiConfig;
use agrosphere_web::{create_app, AppState, Config};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

/// How the fake backend answers
#[derive(Clone)]
pub struct FakeBackend {
    pub prediction: Value,
    pub sensors: Option<Value>,
    pub hits: Arc<AtomicUsize>,
}

impl FakeBackend {
    pub fn predicting(prediction: Value) -> Self {
        Self {
            prediction,
            sensors: None,
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Serve the fake backend on an ephemeral port and return its base URL
    pub async fn spawn(self) -> String {
        let predict_body = self.prediction.clone();
        let sensors_body = self.sensors.clone();
        let predict_hits = self.hits.clone();
        let chat_hits = self.hits.clone();

        let router = Router::new()
            .route("/health", get(|| async { "OK" }))
            .route(
                "/api/v1/predict",
                post(move |Json(body): Json<Value>| {
                    let predict_body = predict_body.clone();
                    let hits = predict_hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        // numeric strings arrive verbatim
                        assert!(body["temperature"].is_string());
                        Json(predict_body)
                    }
                }),
            )
            .route(
                "/api/v1/chat",
                post(move |Json(body): Json<Value>| {
                    let hits = chat_hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        let query = body["query"].as_str().unwrap_or_default().to_string();
                        Json(json!({ "reply": format!("echo: {}", query) }))
                    }
                }),
            )
            .route(
                "/api/v1/sensors",
                get(move || {
                    let sensors_body = sensors_body.clone();
                    async move {
                        match sensors_body {
                            Some(body) => (StatusCode::OK, Json(body)),
                            None => (StatusCode::SERVICE_UNAVAILABLE, Json(json!({}))),
                        }
                    }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

/// Serve a backend that is up but answers with bodies the client cannot use:
/// an HTML error page for predict and a chat body without `reply`
pub async fn garbled_backend() -> String {
    let router = Router::new()
        .route(
            "/api/v1/predict",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/html")],
                    "<html><body>Internal Server Error</body></html>",
                )
            }),
        )
        .route(
            "/api/v1/chat",
            post(|| async { Json(json!({ "answer": "wrong field" })) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL on which nothing is listening
pub async fn dead_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Build the application against `base_url`
pub fn app(base_url: &str) -> Router {
    let config = Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        },
        ..Config::default()
    };
    create_app(AppState::new(config).unwrap())
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form_request(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// `name=value` pair of the session cookie set on a response
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("agrosphere_session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Open a session and return its cookie
pub async fn open_session(app: &Router) -> String {
    let response = send(app, get_request("/", None)).await;
    session_cookie(&response).expect("session cookie")
}
