#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum_test::TestServer;
use link_shortener::config::Config;
use link_shortener::infrastructure::persistence::InMemoryStore;
use axum::Router;
use link_shortener::routes::{app_router, normalize_trailing_slash};
use link_shortener::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const API: &str = "/api/v1";
pub const URL_PREFIX: &str = "https://s.example.com/api/v1/";
pub const PEER: &str = "127.0.0.1:12345";

/// Injects a fixed peer address, as `into_make_service_with_connect_info` does in production.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = PEER.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

pub fn test_config() -> Config {
    Config {
        url_prefix: URL_PREFIX.to_string(),
        api_prefix: API.to_string(),
        code_generation_attempts: 3,
        ..Config::default()
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::in_memory(store.clone(), &test_config());
    (state, store)
}

/// Full application over a fresh in-memory store, wrapped like in production.
pub fn create_test_server() -> (TestServer, Arc<InMemoryStore>) {
    let (state, store) = create_test_state();
    let app = Router::new()
        .fallback_service(normalize_trailing_slash(app_router(state, API)))
        .layer(MockConnectInfoLayer);

    (TestServer::new(app).unwrap(), store)
}

/// Extracts the short code from a short URL built with [`URL_PREFIX`].
pub fn code_of(short_url: &str) -> String {
    short_url
        .strip_prefix(URL_PREFIX)
        .unwrap_or_else(|| panic!("unexpected short url {short_url}"))
        .to_string()
}

/// Shortens `url` through the API and returns its code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post(API)
        .json(&serde_json::json!({ "url": url }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    code_of(json["url"].as_str().unwrap())
}

/// Resolves `code` through the API with a fixed user agent.
pub async fn resolve(server: &TestServer, code: &str) -> serde_json::Value {
    let response = server
        .get(&format!("{API}/{code}"))
        .add_header("User-Agent", "test-agent")
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()
}
