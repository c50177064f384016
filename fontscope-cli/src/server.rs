//! HTTP server for fontscope - the browser-facing side of the previewer
//!
//! The browser does all the font rendering. This server only decodes URLs,
//! answers category questions and hands out preview pages that link the
//! stylesheet the user asked for.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use fontscope_core::category::classify;
use fontscope_core::config::FontscopeConfig;
use fontscope_core::decode::{decode_font_url, try_decode_font_url};
use fontscope_core::font::{Category, FontRecord};
use fontscope_core::presets::{presets, Preset};
use fontscope_core::preview::{render_index, render_preview, PreviewOptions};
use fontscope_core::settings::Theme;

/// Defaults baked in at startup; requests may override them per call.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<StateInner>,
}

#[derive(Debug)]
struct StateInner {
    sample_text: String,
    theme: Theme,
}

impl AppState {
    pub fn new(cfg: &FontscopeConfig, theme: Theme) -> Self {
        Self {
            inner: Arc::new(StateInner {
                sample_text: cfg.sample_text.clone(),
                theme,
            }),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DecodeRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DecodeResponse {
    pub fonts: Vec<FontRecord>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClassifyRequest {
    pub names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifiedName {
    pub name: String,
    pub category: Category,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub categories: Vec<ClassifiedName>,
}

/// Query string of `GET /preview`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreviewQuery {
    pub url: Option<String>,
    pub text: Option<String>,
    pub theme: Option<Theme>,
}

/// Bind `bind` and serve until the process is stopped.
pub async fn serve(bind: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding HTTP server to {bind}"))?;

    tracing::info!("fontscope serving on http://{bind}/");

    axum::serve(listener, router(state))
        .await
        .context("serving HTTP")?;
    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(|| async { "ok" }))
        .route("/presets", get(presets_handler))
        .route("/decode", post(decode_handler))
        .route("/classify", post(classify_handler))
        .route("/preview", get(preview_handler))
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_index(presets(), state.inner.theme))
}

async fn presets_handler() -> Json<&'static [Preset]> {
    Json(presets())
}

async fn decode_handler(
    Json(req): Json<DecodeRequest>,
) -> Result<Json<DecodeResponse>, (StatusCode, String)> {
    let fonts = try_decode_font_url(&req.url).map_err(|err| {
        tracing::warn!("rejecting decode request: {err}");
        to_bad_request(err)
    })?;
    Ok(Json(DecodeResponse { fonts }))
}

async fn classify_handler(Json(req): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    let categories = req
        .names
        .into_iter()
        .map(|name| {
            let category = classify(&name);
            ClassifiedName { name, category }
        })
        .collect();
    Json(ClassifyResponse { categories })
}

async fn preview_handler(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let url = match query.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                "a url query parameter is required".to_string(),
            ))
        }
    };

    // Malformed URLs render the "no fonts" page rather than an error.
    let records = decode_font_url(&url);
    let opts = PreviewOptions {
        stylesheet_url: Some(url),
        sample_text: query
            .text
            .unwrap_or_else(|| state.inner.sample_text.clone()),
        theme: query.theme.unwrap_or(state.inner.theme),
    };

    Ok(Html(render_preview(&records, &opts)))
}

fn to_bad_request(err: impl std::fmt::Display) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}
