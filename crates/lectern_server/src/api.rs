//! HTTP routes for the form, the JSON API and health checks.

use crate::page::{FormView, render_page};
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use lectern_core::SummaryRequest;
use lectern_interface::ChatCompletion;
use lectern_summarizer::Summarizer;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

/// API server state.
struct ApiState<C> {
    summarizer: Arc<Summarizer<C>>,
}

impl<C> Clone for ApiState<C> {
    fn clone(&self) -> Self {
        Self {
            summarizer: self.summarizer.clone(),
        }
    }
}

/// JSON body returned by `POST /api/summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Text for the summary area
    pub output: String,
    /// Run-info line
    pub status: String,
}

/// Creates the API router.
pub fn create_router<C>(summarizer: Arc<Summarizer<C>>) -> Router
where
    C: ChatCompletion + 'static,
{
    let state = ApiState { summarizer };

    Router::new()
        .route("/", get(index).post(submit_form::<C>))
        .route("/api/summarize", post(summarize_json::<C>))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Empty form with default inputs.
#[instrument(skip_all)]
async fn index() -> Html<String> {
    Html(render_page(&FormView::default()))
}

/// Form submission; re-renders the page with the outcome.
#[instrument(skip_all)]
async fn submit_form<C>(
    State(state): State<ApiState<C>>,
    Form(request): Form<SummaryRequest>,
) -> Html<String>
where
    C: ChatCompletion + 'static,
{
    let outcome = state.summarizer.summarize(&request).await;
    Html(render_page(&FormView::from_submission(&request, &outcome)))
}

/// JSON variant of the form submission.
#[instrument(skip_all)]
async fn summarize_json<C>(
    State(state): State<ApiState<C>>,
    Json(request): Json<SummaryRequest>,
) -> Json<SummaryResponse>
where
    C: ChatCompletion + 'static,
{
    let (output, status) = state.summarizer.summarize(&request).await.into_display();
    Json(SummaryResponse { output, status })
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
