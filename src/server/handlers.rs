// src/server/handlers.rs
// =============================================================================
// Handlers for the internal API used by the web front-end.
//
// Every failure answers `500 Internal Error`, whatever went wrong:
// - the upstream GitHub request failed (kind from FetchErrorKind)
// - the request body was missing, not JSON, or lacked a field ("bad_request")
//
// The cause is only logged and reported in the `x-error-kind` header.
//
// Rust concepts:
// - Result<Json<_>, JsonRejection> as an extractor: axum hands us the
//   rejection instead of answering with its own 4xx
// - `?` on Result<_, Response>: the error half is already a response
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::{
    state::ApiState,
    types::{HealthResponse, RepoRequest, ReposRequest},
};
use crate::error::FetchError;
use crate::github::{self, RepositoryDescriptor, RepositorySummary};

/// Header naming the failure category on a 500.
pub const ERROR_KIND_HEADER: HeaderName = HeaderName::from_static("x-error-kind");

/// The only body a failed request ever gets.
pub const INTERNAL_ERROR_BODY: &str = "Internal Error";

/// `x-error-kind` for a body that could not be read as the expected JSON.
pub const BAD_REQUEST_KIND: &str = "bad_request";

/// POST /api/repo - Full content tree of one repository.
pub async fn repo_tree(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<RepoRequest>, JsonRejection>,
) -> Result<Json<Vec<RepositoryDescriptor>>, Response> {
    let Json(req) = payload.map_err(|e| rejected("[PROJECT_POST]", e))?;

    let tree = github::fetch_tree(
        &state.github,
        &req.owner,
        &req.repo_name,
        "",
        req.token.as_deref(),
    )
    .await
    .map_err(|e| upstream_failed("[PROJECT_POST]", e))?;

    tracing::info!(owner = %req.owner, repo = %req.repo_name, entries = tree.len(), "served repository tree");
    Ok(Json(tree))
}

/// POST /api/repos - Repositories of the token's owner.
pub async fn repo_list(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ReposRequest>, JsonRejection>,
) -> Result<Json<Vec<RepositorySummary>>, Response> {
    let Json(req) = payload.map_err(|e| rejected("[REPOS_POST]", e))?;

    let repos = github::list_repositories(&state.github, req.token.as_deref())
        .await
        .map_err(|e| upstream_failed("[REPOS_POST]", e))?;

    tracing::info!(count = repos.len(), "served repository list");
    Ok(Json(repos))
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn upstream_failed(route: &str, err: FetchError) -> Response {
    let kind = err.kind().as_str();
    tracing::error!(route, kind, error = %err, "upstream request failed");
    internal_error(kind)
}

fn rejected(route: &str, rejection: JsonRejection) -> Response {
    tracing::warn!(
        route,
        kind = BAD_REQUEST_KIND,
        status = rejection.status().as_u16(),
        error = %rejection.body_text(),
        "unreadable request body"
    );
    internal_error(BAD_REQUEST_KIND)
}

fn internal_error(kind: &'static str) -> Response {
    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response();
    response
        .headers_mut()
        .insert(ERROR_KIND_HEADER, HeaderValue::from_static(kind));
    response
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What happens if we write `Json(req): Json<RepoRequest>` instead?
//    - axum rejects a bad body itself, with a 400/415/422 and its own text
//    - The front-end only knows "200 or Internal Error", so we take the
//      Result and answer 500 like every other failure
//
// 2. Why is `kind` a `&'static str`?
//    - HeaderValue::from_static needs a string that lives forever
//    - FetchErrorKind::as_str and BAD_REQUEST_KIND both are string literals
// -----------------------------------------------------------------------------
