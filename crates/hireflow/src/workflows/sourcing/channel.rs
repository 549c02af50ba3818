use std::time::Duration;

use async_trait::async_trait;

use super::notify::{ChannelMessage, DeliveryError, NotificationChannel};

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Messaging-channel transport over plain HTTP.
///
/// One `POST` with a JSON body per delivery. Success is strictly a 2xx
/// response; any other status is a rejection with the response body kept
/// for diagnostics. The request timeout is bounded so a stalled channel
/// surfaces as a transport error instead of hanging the handler.
pub struct HttpWebhookChannel {
    client: reqwest::Client,
}

impl HttpWebhookChannel {
    pub fn new() -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl NotificationChannel for HttpWebhookChannel {
    async fn deliver(&self, url: &str, message: &ChannelMessage) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(url)
            .json(message)
            .send()
            .await
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
