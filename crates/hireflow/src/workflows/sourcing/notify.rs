use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::config::NotifierConfig;

use super::event::SourcingEvent;

/// Payload posted to the messaging channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelMessage {
    pub text: String,
}

/// Transport seam for outbound channel delivery (HTTP in production,
/// recording doubles in tests).
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn deliver(&self, url: &str, message: &ChannelMessage) -> Result<(), DeliveryError>;
}

/// Failure of a single delivery attempt.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("channel transport failed: {0}")]
    Transport(String),
    #[error("channel rejected notification with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Dispatcher-level failure.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("notification webhook URL is not configured (set SOURCING_WEBHOOK_URL)")]
    MissingWebhookUrl,
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Formats and delivers one notification per sourcing event.
///
/// Exactly one outbound attempt is made per invocation; retries are the
/// trigger source's responsibility since deliveries are not idempotent.
pub struct SourcingNotifier<C> {
    webhook_url: Option<String>,
    channel: C,
}

impl<C> SourcingNotifier<C>
where
    C: NotificationChannel,
{
    pub fn new(config: NotifierConfig, channel: C) -> Self {
        Self {
            webhook_url: config.webhook_url,
            channel,
        }
    }

    /// Send the notification for `event`, failing fast when no destination
    /// is configured (no network attempt is made in that case).
    pub async fn dispatch(&self, event: &SourcingEvent) -> Result<(), DispatchError> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or(DispatchError::MissingWebhookUrl)?;

        let message = ChannelMessage {
            text: notification_text(event),
        };
        self.channel.deliver(url, &message).await?;
        debug!(project_id = %event.project_id, "sourcing notification delivered");
        Ok(())
    }
}

pub(crate) fn notification_text(event: &SourcingEvent) -> String {
    format!(
        "New sourcing request received!\nProject: {}\nRole: {}\nOpen the recruiter dashboard to review candidates and launch proof-of-work tasks.",
        event.project_id, event.role_title
    )
}
