//! Integration specifications for the staged progress model and the
//! scoring-trigger hook.

use std::sync::{Arc, Mutex};

use hireflow::workflows::sourcing::{
    CandidateStatus, NoopScoringTrigger, ProgressMonitor, ProgressStage, ProjectProgress,
    ScoringTrigger,
};

#[derive(Default)]
struct RecordingTrigger {
    transitions: Mutex<Vec<(String, Option<ProgressStage>, ProgressStage)>>,
}

impl RecordingTrigger {
    fn transitions(&self) -> Vec<(String, Option<ProgressStage>, ProgressStage)> {
        self.transitions.lock().expect("lock").clone()
    }
}

impl ScoringTrigger for RecordingTrigger {
    fn stage_changed(
        &self,
        project_id: &str,
        previous: Option<ProgressStage>,
        next: ProgressStage,
    ) {
        self.transitions
            .lock()
            .expect("lock")
            .push((project_id.to_string(), previous, next));
    }
}

fn progress(completed: u32, total: u32) -> ProjectProgress {
    ProjectProgress {
        candidates_completed: completed,
        total_candidates: total,
    }
}

#[test]
fn thirty_percent_reads_as_collecting() {
    let monitor = ProgressMonitor::new(Arc::new(NoopScoringTrigger));
    let view = monitor.observe("proj_42", progress(3, 10));

    assert_eq!(view.stage_id, "collecting");
    assert_eq!(
        view.message,
        "Excellent! Results are coming in. Our system begins analysis as soon as we have enough data for a meaningful comparison."
    );
}

#[test]
fn empty_project_reports_deployment_stage() {
    let monitor = ProgressMonitor::new(Arc::new(NoopScoringTrigger));
    let view = monitor.observe("proj_new", progress(0, 0));

    assert_eq!(view.stage_id, "deployed_awaiting");
    assert_eq!(
        view.message,
        "Tasks have been deployed. We're now awaiting candidate submissions."
    );
}

#[test]
fn strong_response_reports_finalizing_stage() {
    let monitor = ProgressMonitor::new(Arc::new(NoopScoringTrigger));
    let view = monitor.observe("proj_42", progress(9, 10));

    assert_eq!(view.stage_id, "finalizing");
    assert_eq!(
        view.message,
        "We have a strong response! Our team is now performing the final analysis to build your high-confidence shortlist."
    );
}

#[test]
fn trigger_fires_only_on_band_changes() {
    let trigger = Arc::new(RecordingTrigger::default());
    let monitor = ProgressMonitor::new(trigger.clone());

    monitor.observe("proj_42", progress(1, 10));
    monitor.observe("proj_42", progress(2, 10));
    monitor.observe("proj_42", progress(5, 10));
    monitor.observe("proj_42", progress(6, 10));
    monitor.observe("proj_42", progress(8, 10));

    let transitions = trigger.transitions();
    assert_eq!(
        transitions,
        vec![
            (
                "proj_42".to_string(),
                None,
                ProgressStage::DeployedAwaiting
            ),
            (
                "proj_42".to_string(),
                Some(ProgressStage::DeployedAwaiting),
                ProgressStage::Collecting
            ),
            (
                "proj_42".to_string(),
                Some(ProgressStage::Collecting),
                ProgressStage::Finalizing
            ),
        ]
    );
}

#[test]
fn projects_are_tracked_independently() {
    let trigger = Arc::new(RecordingTrigger::default());
    let monitor = ProgressMonitor::new(trigger.clone());

    monitor.observe("proj_a", progress(8, 10));
    monitor.observe("proj_b", progress(1, 10));

    let transitions = trigger.transitions();
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[0].0, "proj_a");
    assert_eq!(transitions[0].2, ProgressStage::Finalizing);
    assert_eq!(transitions[1].0, "proj_b");
    assert_eq!(transitions[1].2, ProgressStage::DeployedAwaiting);
}

#[test]
fn candidate_lifecycle_feeds_the_tracker() {
    let mut statuses = vec![
        CandidateStatus::Awaiting,
        CandidateStatus::Awaiting,
        CandidateStatus::Awaiting,
        CandidateStatus::Awaiting,
        CandidateStatus::Awaiting,
        CandidateStatus::Awaiting,
        CandidateStatus::Awaiting,
        CandidateStatus::Awaiting,
        CandidateStatus::Awaiting,
        CandidateStatus::Awaiting,
    ];

    let monitor = ProgressMonitor::new(Arc::new(NoopScoringTrigger));
    let view = monitor.observe("proj_42", ProjectProgress::from_statuses(statuses.iter()));
    assert_eq!(view.stage_id, "deployed_awaiting");

    // Three candidates submit work.
    for status in statuses.iter_mut().take(3) {
        *status = status
            .advance_to(CandidateStatus::Scoring)
            .expect("submission transition");
    }

    let view = monitor.observe("proj_42", ProjectProgress::from_statuses(statuses.iter()));
    assert_eq!(view.stage_id, "collecting");
}
