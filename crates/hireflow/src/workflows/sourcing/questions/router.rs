use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::warn;

use crate::workflows::sourcing::webhook::preflight_handler;

use super::domain::SourcingRequest;
use super::factory::{QuestionFactory, QuestionFactoryError};
use super::gateway::{GenerationError, QuestionGenerator, QuestionSetStore};

/// Router exposing proof-of-work question materialization.
pub fn question_router<G, S>(factory: Arc<QuestionFactory<G, S>>) -> Router
where
    G: QuestionGenerator + 'static,
    S: QuestionSetStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/sourcing/questions",
            post(generate_handler::<G, S>).options(preflight_handler),
        )
        .with_state(factory)
}

pub(crate) async fn generate_handler<G, S>(
    State(factory): State<Arc<QuestionFactory<G, S>>>,
    Json(request): Json<SourcingRequest>,
) -> Response
where
    G: QuestionGenerator + 'static,
    S: QuestionSetStore + 'static,
{
    let project_id = request.project_id.clone();
    match factory.materialize(request).await {
        Ok(set) => (StatusCode::OK, Json(set)).into_response(),
        Err(QuestionFactoryError::Generation(GenerationError::Backend(detail))) => {
            warn!(%project_id, error = %detail, "question generation failed");
            let payload = json!({
                "error": format!("question generation failed: {detail}"),
            });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
        Err(other) => {
            warn!(%project_id, error = %other, "question materialization failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
