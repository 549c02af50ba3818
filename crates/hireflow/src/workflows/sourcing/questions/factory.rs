use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::domain::{ProofOfWorkQuestionSet, SourcingRequest};
use super::gateway::{GenerationError, QuestionGenerator, QuestionSetStore, StoreError};

/// Gateway composing the generation capability and the persistence
/// hand-off.
pub struct QuestionFactory<G, S> {
    generator: Arc<G>,
    store: Arc<S>,
}

impl<G, S> QuestionFactory<G, S>
where
    G: QuestionGenerator + 'static,
    S: QuestionSetStore + 'static,
{
    pub fn new(generator: Arc<G>, store: Arc<S>) -> Self {
        Self { generator, store }
    }

    /// Obtain a question set for `request` and hand it to the store.
    ///
    /// Either the full set is stored or nothing is; a failure on either
    /// side surfaces the underlying error with no partial commit.
    pub async fn materialize(
        &self,
        request: SourcingRequest,
    ) -> Result<ProofOfWorkQuestionSet, QuestionFactoryError> {
        let questions = self.generator.generate(&request).await?;
        debug!(
            project_id = %request.project_id,
            count = questions.len(),
            "proof-of-work questions generated"
        );

        let set = ProofOfWorkQuestionSet {
            project_id: request.project_id,
            role_title: request.role_title,
            questions,
            generated_at: Utc::now(),
        };

        self.store.store(set.clone())?;
        Ok(set)
    }
}

/// Error raised by the question factory gateway.
#[derive(Debug, thiserror::Error)]
pub enum QuestionFactoryError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
