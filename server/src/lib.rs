use anyhow::{Context, Result};
use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use lse_core::{DocumentListFile, DocumentId, MemoryCorpus, NoiseWordFile, Occurrence, SearchEngine};
use serde::{Deserialize, Serialize};
use std::path::Path as FsPath;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer, AllowOrigin};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: String,
    #[serde(default)]
    pub kw2: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: String,
    pub kw2: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<DocumentId>,
}

#[derive(Serialize)]
pub struct PostingsResponse {
    pub keyword: String,
    pub postings: Vec<Occurrence>,
}

/// The index is built before the router exists and never mutated, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}

/// Build the engine from a document list file and an optional noise-word file.
pub fn load_engine<P: AsRef<FsPath>>(docs: P, noise: Option<P>) -> Result<SearchEngine> {
    let docs = docs.as_ref();
    let list = DocumentListFile::new(docs);
    let engine = match noise {
        Some(noise) => SearchEngine::build(&list, &NoiseWordFile::new(noise)),
        None => SearchEngine::build(&list, &MemoryCorpus::new()),
    };
    engine.with_context(|| format!("building index from {}", docs.display()))
}

pub fn build_app(engine: SearchEngine) -> Router {
    let app_state = AppState { engine: Arc::new(engine) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keyword/:keyword", get(keyword_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let results = state.engine.search_words(&params.kw1, &params.kw2);
    let elapsed = start.elapsed();
    tracing::debug!(kw1 = %params.kw1, kw2 = %params.kw2, hits = results.len(), "search");
    Json(SearchResponse {
        kw1: params.kw1,
        kw2: params.kw2,
        took_s: elapsed.as_secs_f64(),
        total_hits: results.len(),
        results,
    })
}

pub async fn keyword_handler(State(state): State<AppState>, Path(keyword): Path<String>) -> Result<Json<PostingsResponse>, (StatusCode, String)> {
    let keyword = keyword.to_lowercase();
    if !state.engine.index().contains(&keyword) {
        return Err((StatusCode::NOT_FOUND, format!("keyword not indexed: {keyword}")));
    }
    let postings = state.engine.index().postings(&keyword).to_vec();
    Ok(Json(PostingsResponse { keyword, postings }))
}
