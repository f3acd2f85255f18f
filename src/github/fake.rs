// A canned GitHub API for tests, served by axum on an ephemeral port.
//
// Routes are keyed by exact request path; anything else is a 404.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::Value;

use crate::config::Config;
use crate::github::GitHubClient;

#[derive(Default)]
struct Routes {
    responses: HashMap<String, (StatusCode, Value)>,
    hits: AtomicUsize,
    auth_seen: std::sync::Mutex<Vec<String>>,
}

pub struct FakeGitHub {
    addr: SocketAddr,
    routes: Arc<Routes>,
}

#[derive(Default)]
pub struct FakeGitHubBuilder {
    responses: HashMap<String, (StatusCode, Value)>,
}

impl FakeGitHubBuilder {
    pub fn ok(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), (StatusCode::OK, body));
        self
    }

    pub fn status(mut self, path: &str, status: StatusCode) -> Self {
        self.responses.insert(
            path.to_string(),
            (status, serde_json::json!({ "message": "fake failure" })),
        );
        self
    }

    pub async fn start(self) -> FakeGitHub {
        let routes = Arc::new(Routes {
            responses: self.responses,
            ..Routes::default()
        });

        let app = Router::new().fallback(serve).with_state(Arc::clone(&routes));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeGitHub { addr, routes }
    }
}

impl FakeGitHub {
    pub fn builder() -> FakeGitHubBuilder {
        FakeGitHubBuilder::default()
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> GitHubClient {
        let config = Config {
            api_url: self.url(),
            ..Config::default()
        };
        GitHubClient::new(&config).unwrap()
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.routes.hits.load(Ordering::SeqCst)
    }

    /// Authorization headers received, in order.
    pub fn auth_seen(&self) -> Vec<String> {
        self.routes.auth_seen.lock().unwrap().clone()
    }
}

async fn serve(State(routes): State<Arc<Routes>>, headers: HeaderMap, uri: Uri) -> Response {
    routes.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        routes.auth_seen.lock().unwrap().push(auth.to_string());
    }

    match routes.responses.get(uri.path()) {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, Json(serde_json::json!({ "message": "Not Found" })))
            .into_response(),
    }
}
