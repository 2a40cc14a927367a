#![allow(dead_code)]

use axum::{Router, extract::ConnectInfo};
use axum_test::TestServer;
use micro_apis::infrastructure::cache::NullCache;
use micro_apis::routes::api_router;
use micro_apis::state::{AppState, HttpOptions, Repositories};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const PEER_ADDR: &str = "127.0.0.1:12345";

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
        let addr: SocketAddr = PEER_ADDR.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

pub fn create_test_state(options: HttpOptions) -> AppState {
    AppState::new(Repositories::memory(), Arc::new(NullCache::new()), options)
}

pub fn create_test_app(options: HttpOptions) -> Router {
    api_router(create_test_state(options)).layer(MockConnectInfoLayer)
}

/// Server with the default legacy status policy.
pub fn legacy_server() -> TestServer {
    TestServer::new(create_test_app(HttpOptions::default())).unwrap()
}

/// Server that sends distinct 4xx codes for client errors.
pub fn strict_server() -> TestServer {
    TestServer::new(create_test_app(HttpOptions {
        behind_proxy: false,
        error_status_codes: true,
    }))
    .unwrap()
}
