use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use hireflow::workflows::sourcing::{
    question_router, sourcing_webhook_router, NotificationChannel, ProgressMonitor,
    ProjectProgress, QuestionFactory, QuestionGenerator, QuestionSetStore, ScoringTrigger,
    SourcingNotifier,
};

#[derive(Debug, Deserialize)]
pub(crate) struct ProgressRequest {
    pub(crate) project_id: String,
    pub(crate) candidates_completed: u32,
    pub(crate) total_candidates: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProgressResponse {
    pub(crate) project_id: String,
    pub(crate) candidates_completed: u32,
    pub(crate) total_candidates: u32,
    pub(crate) completion_percentage: u8,
    pub(crate) stage_id: &'static str,
    pub(crate) message: &'static str,
}

pub(crate) fn with_pipeline_routes<C, G, S, T>(
    notifier: Arc<SourcingNotifier<C>>,
    factory: Arc<QuestionFactory<G, S>>,
    monitor: Arc<ProgressMonitor<T>>,
) -> axum::Router
where
    C: NotificationChannel + 'static,
    G: QuestionGenerator + 'static,
    S: QuestionSetStore + 'static,
    T: ScoringTrigger + 'static,
{
    let progress_routes = axum::Router::new()
        .route(
            "/api/v1/sourcing/progress",
            axum::routing::post(progress_endpoint::<T>),
        )
        .with_state(monitor);

    question_router(factory)
        .nest("/hooks/sourcing", sourcing_webhook_router(notifier))
        .merge(progress_routes)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Progress interface consumed by presentation: counts in, stage view out.
/// The percentage is recomputed here on every call, never read back from
/// storage.
pub(crate) async fn progress_endpoint<T>(
    State(monitor): State<Arc<ProgressMonitor<T>>>,
    Json(request): Json<ProgressRequest>,
) -> Json<ProgressResponse>
where
    T: ScoringTrigger + 'static,
{
    let ProgressRequest {
        project_id,
        candidates_completed,
        total_candidates,
    } = request;

    let progress = ProjectProgress {
        candidates_completed,
        total_candidates,
    };
    let view = monitor.observe(&project_id, progress);

    Json(ProgressResponse {
        project_id,
        candidates_completed,
        total_candidates,
        completion_percentage: progress.completion_percentage(),
        stage_id: view.stage_id,
        message: view.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireflow::workflows::sourcing::NoopScoringTrigger;

    #[tokio::test]
    async fn progress_endpoint_returns_collecting_band() {
        let monitor = Arc::new(ProgressMonitor::new(Arc::new(NoopScoringTrigger)));
        let request = ProgressRequest {
            project_id: "proj_42".to_string(),
            candidates_completed: 3,
            total_candidates: 10,
        };

        let Json(body) = progress_endpoint(State(monitor), Json(request)).await;

        assert_eq!(body.completion_percentage, 30);
        assert_eq!(body.stage_id, "collecting");
        assert!(body.message.starts_with("Excellent! Results are coming in."));
    }

    #[tokio::test]
    async fn progress_endpoint_treats_empty_projects_as_zero_percent() {
        let monitor = Arc::new(ProgressMonitor::new(Arc::new(NoopScoringTrigger)));
        let request = ProgressRequest {
            project_id: "proj_empty".to_string(),
            candidates_completed: 0,
            total_candidates: 0,
        };

        let Json(body) = progress_endpoint(State(monitor), Json(request)).await;

        assert_eq!(body.completion_percentage, 0);
        assert_eq!(body.stage_id, "deployed_awaiting");
    }
}
