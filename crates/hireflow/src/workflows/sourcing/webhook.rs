use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::warn;

use super::event::SourcingEvent;
use super::notify::{NotificationChannel, SourcingNotifier};

pub(crate) const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Router for the sourcing-request notification trigger.
///
/// `POST /` accepts the trigger payload; `OPTIONS /` answers the CORS
/// pre-flight. The endpoint is safe to call repeatedly for the same
/// logical event, but every call produces its own notification.
pub fn sourcing_webhook_router<C>(notifier: Arc<SourcingNotifier<C>>) -> Router
where
    C: NotificationChannel + 'static,
{
    Router::new()
        .route("/", post(notify_handler::<C>).options(preflight_handler))
        .with_state(notifier)
}

/// Pre-flight contract shared by the pipeline's trigger endpoints.
pub(crate) async fn preflight_handler() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
    )
}

pub(crate) async fn notify_handler<C>(
    State(notifier): State<Arc<SourcingNotifier<C>>>,
    body: Result<Bytes, BytesRejection>,
) -> Response
where
    C: NotificationChannel + 'static,
{
    let event = match body {
        Ok(bytes) => SourcingEvent::from_body(&bytes),
        Err(rejection) => {
            // A malformed body falls back to sentinels, but an unreadable
            // one escalates to a dispatch-path failure.
            let payload = json!({
                "error": format!("unable to read request body: {rejection}"),
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
        }
    };

    match notifier.dispatch(&event).await {
        Ok(()) => {
            let payload = json!({
                "success": true,
                "message": "Notification sent.",
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            warn!(project_id = %event.project_id, error = %err, "sourcing notification failed");
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
