use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::QuestionServiceConfig;

use super::domain::{ProofOfWorkQuestion, ProofOfWorkQuestionSet, SourcingRequest};

const GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Opaque question-generation capability.
///
/// The backend may take arbitrarily long, may fail, and may return zero
/// questions; zero is valid output, not an error.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &SourcingRequest,
    ) -> Result<Vec<ProofOfWorkQuestion>, GenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("question service endpoint is not configured (set QUESTION_SERVICE_URL)")]
    MissingEndpoint,
    #[error("question generation failed: {0}")]
    Backend(String),
}

/// Storage hand-off for materialized question sets.
pub trait QuestionSetStore: Send + Sync {
    fn store(&self, set: ProofOfWorkQuestionSet) -> Result<(), StoreError>;
    fn fetch(&self, project_id: &str) -> Result<Option<ProofOfWorkQuestionSet>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("question store unavailable: {0}")]
    Unavailable(String),
}

/// Generation backend reached over HTTP.
///
/// Posts the role context and decodes `{"questions": [{"text", ...}]}`.
/// A missing endpoint is a call-time configuration error, never a silent
/// no-op.
pub struct HttpQuestionGenerator {
    endpoint: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GeneratedQuestions {
    #[serde(default)]
    questions: Vec<ProofOfWorkQuestion>,
}

impl HttpQuestionGenerator {
    pub fn new(config: QuestionServiceConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(GENERATION_TIMEOUT)
            .build()
            .map_err(|err| GenerationError::Backend(err.to_string()))?;
        Ok(Self {
            endpoint: config.endpoint,
            client,
        })
    }
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    async fn generate(
        &self,
        request: &SourcingRequest,
    ) -> Result<Vec<ProofOfWorkQuestion>, GenerationError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(GenerationError::MissingEndpoint)?;

        let payload = json!({
            "project_id": request.project_id,
            "role_title": request.role_title,
            "brief": request.brief,
        });

        let response = self
            .client
            .post(endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|err| GenerationError::Backend(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Backend(format!(
                "generation service returned status {status}: {body}"
            )));
        }

        let generated: GeneratedQuestions = response
            .json()
            .await
            .map_err(|err| GenerationError::Backend(err.to_string()))?;
        Ok(generated.questions)
    }
}
