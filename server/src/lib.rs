use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tagsift_core::tokenizer::TokenizeOptions;
use tagsift_core::{frequency, is_not_found, output, FrequencyTable, StopWords, Tag};
use tower_http::cors::{Any, CorsLayer};

use std::sync::Arc;

/// State the host retains between requests: the stop-word set and the
/// frequency table of the most recently processed document.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<RwLock<HostState>>,
}

#[derive(Default)]
struct HostState {
    stop_words: StopWords,
    table: FrequencyTable,
}

#[derive(Deserialize)]
pub struct PathBody {
    pub path: String,
}

#[derive(Serialize)]
pub struct StopWordsResponse {
    pub inserted: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct TagsResponse {
    pub distinct_words: usize,
    pub tags: Vec<Tag>,
}

pub fn build_app() -> Router {
    build_app_with(StopWords::new())
}

pub fn build_app_with(stop_words: StopWords) -> Router {
    let state = AppState {
        inner: Arc::new(RwLock::new(HostState {
            stop_words,
            table: FrequencyTable::new(),
        })),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/stopwords", post(load_stop_words))
        .route("/document", post(process_document))
        .route("/tags", get(current_tags))
        .route("/save", post(save_tags))
        .with_state(state)
        .layer(cors)
}

async fn load_stop_words(
    State(state): State<AppState>,
    Json(body): Json<PathBody>,
) -> Result<Json<StopWordsResponse>, (StatusCode, String)> {
    let mut host = state.inner.write();
    let inserted = host.stop_words.load_path(&body.path).map_err(reply_error)?;
    tracing::info!(path = %body.path, inserted, "loaded stop words");
    Ok(Json(StopWordsResponse {
        inserted,
        total: host.stop_words.len(),
    }))
}

async fn process_document(
    State(state): State<AppState>,
    Json(body): Json<PathBody>,
) -> Result<Json<TagsResponse>, (StatusCode, String)> {
    let mut host = state.inner.write();
    let table = frequency::process_path(&body.path, &host.stop_words, &TokenizeOptions::default())
        .map_err(reply_error)?;
    tracing::info!(path = %body.path, distinct_words = table.len(), "processed document");

    // Retained table is replaced only once processing succeeded.
    host.table = table;
    Ok(Json(TagsResponse {
        distinct_words: host.table.len(),
        tags: host.table.ranked(),
    }))
}

async fn current_tags(State(state): State<AppState>) -> Json<TagsResponse> {
    let host = state.inner.read();
    Json(TagsResponse {
        distinct_words: host.table.len(),
        tags: host.table.ranked(),
    })
}

async fn save_tags(
    State(state): State<AppState>,
    Json(body): Json<PathBody>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let host = state.inner.read();
    let tags = host.table.ranked();
    output::save_tags(&tags, &body.path).map_err(reply_error)?;
    tracing::info!(path = %body.path, tags = tags.len(), "saved tags");
    Ok(Json(serde_json::json!({ "saved": tags.len() })))
}

fn reply_error(err: anyhow::Error) -> (StatusCode, String) {
    let status = if is_not_found(&err) {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, format!("{err:#}"))
}
