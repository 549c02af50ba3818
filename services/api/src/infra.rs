use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

use hireflow::workflows::sourcing::{
    ProgressStage, ProofOfWorkQuestionSet, QuestionSetStore, ScoringTrigger, StoreError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in for the managed relational store collaborator.
#[derive(Default, Clone)]
pub(crate) struct InMemoryQuestionSetStore {
    sets: Arc<Mutex<HashMap<String, ProofOfWorkQuestionSet>>>,
}

impl QuestionSetStore for InMemoryQuestionSetStore {
    fn store(&self, set: ProofOfWorkQuestionSet) -> Result<(), StoreError> {
        let mut guard = self.sets.lock().expect("question store mutex poisoned");
        guard.insert(set.project_id.clone(), set);
        Ok(())
    }

    fn fetch(&self, project_id: &str) -> Result<Option<ProofOfWorkQuestionSet>, StoreError> {
        let guard = self.sets.lock().expect("question store mutex poisoned");
        Ok(guard.get(project_id).cloned())
    }
}

/// Stage-transition hook wired into the service.
///
/// Logs band changes only; kicking off scoring analysis stays with the
/// scoring pipeline's own operators.
pub(crate) struct StageLogTrigger;

impl ScoringTrigger for StageLogTrigger {
    fn stage_changed(
        &self,
        project_id: &str,
        previous: Option<ProgressStage>,
        next: ProgressStage,
    ) {
        info!(
            %project_id,
            previous = previous.map(ProgressStage::label),
            stage = next.label(),
            "project completion entered new stage"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireflow::workflows::sourcing::ProofOfWorkQuestion;

    fn sample_set(project_id: &str) -> ProofOfWorkQuestionSet {
        ProofOfWorkQuestionSet {
            project_id: project_id.to_string(),
            role_title: "Backend Engineer".to_string(),
            questions: vec![ProofOfWorkQuestion {
                text: "Sketch a schema for sourcing requests.".to_string(),
                guidance: None,
            }],
            generated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn store_round_trips_question_sets() {
        let store = InMemoryQuestionSetStore::default();
        store.store(sample_set("proj_1")).expect("store succeeds");

        let fetched = store
            .fetch("proj_1")
            .expect("fetch succeeds")
            .expect("set present");
        assert_eq!(fetched.project_id, "proj_1");
        assert!(store.fetch("proj_2").expect("fetch succeeds").is_none());
    }
}
