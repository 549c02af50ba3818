use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::candidates::CandidateStatus;

/// Aggregate completion counts for one hiring project.
///
/// The percentage is always recomputed from the counts so it can never
/// drift from what it summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProgress {
    pub candidates_completed: u32,
    pub total_candidates: u32,
}

impl ProjectProgress {
    /// `round(100 * completed / total)`, with an empty project reading as
    /// 0% rather than a division error. Clamped to 100 so upstream count
    /// drift cannot push the tracker out of its bands.
    pub fn completion_percentage(&self) -> u8 {
        if self.total_candidates == 0 {
            return 0;
        }
        let ratio =
            f64::from(self.candidates_completed) / f64::from(self.total_candidates);
        (100.0 * ratio).round().clamp(0.0, 100.0) as u8
    }

    /// Derive counts from candidate lifecycle states: a candidate counts
    /// as completed once they have submitted work.
    pub fn from_statuses<'a, I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = &'a CandidateStatus>,
    {
        let mut completed = 0;
        let mut total = 0;
        for status in statuses {
            total += 1;
            if status.has_submitted() {
                completed += 1;
            }
        }
        Self {
            candidates_completed: completed,
            total_candidates: total,
        }
    }
}

/// Named completion band; each band carries a distinct status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStage {
    DeployedAwaiting,
    Collecting,
    Finalizing,
}

impl ProgressStage {
    /// Band policy over `[0, 100]`: upper-inclusive bounds at 25 and 70,
    /// no gaps, no overlaps.
    pub fn for_percentage(percentage: u8) -> Self {
        match percentage {
            0..=25 => ProgressStage::DeployedAwaiting,
            26..=70 => ProgressStage::Collecting,
            _ => ProgressStage::Finalizing,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProgressStage::DeployedAwaiting => "deployed_awaiting",
            ProgressStage::Collecting => "collecting",
            ProgressStage::Finalizing => "finalizing",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            ProgressStage::DeployedAwaiting => {
                "Tasks have been deployed. We're now awaiting candidate submissions."
            }
            ProgressStage::Collecting => {
                "Excellent! Results are coming in. Our system begins analysis as soon as we have enough data for a meaningful comparison."
            }
            ProgressStage::Finalizing => {
                "We have a strong response! Our team is now performing the final analysis to build your high-confidence shortlist."
            }
        }
    }
}

/// Stage view consumed by presentation surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageView {
    pub stage_id: &'static str,
    pub message: &'static str,
}

impl From<ProgressStage> for StageView {
    fn from(stage: ProgressStage) -> Self {
        Self {
            stage_id: stage.label(),
            message: stage.message(),
        }
    }
}

/// Hook fired when a project's accumulated completion crosses into a new
/// band. Whether `Finalizing` should start backend scoring is left to the
/// trigger implementation; the library default does nothing.
pub trait ScoringTrigger: Send + Sync {
    fn stage_changed(
        &self,
        project_id: &str,
        previous: Option<ProgressStage>,
        next: ProgressStage,
    );
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScoringTrigger;

impl ScoringTrigger for NoopScoringTrigger {
    fn stage_changed(
        &self,
        _project_id: &str,
        _previous: Option<ProgressStage>,
        _next: ProgressStage,
    ) {
    }
}

/// Observes per-project progress and fires the trigger on band changes.
///
/// The tracker math stays pure; this wrapper only remembers the last band
/// seen per project so repeated observations inside one band stay silent.
pub struct ProgressMonitor<T> {
    trigger: Arc<T>,
    last_stage: Mutex<HashMap<String, ProgressStage>>,
}

impl<T> ProgressMonitor<T>
where
    T: ScoringTrigger,
{
    pub fn new(trigger: Arc<T>) -> Self {
        Self {
            trigger,
            last_stage: Mutex::new(HashMap::new()),
        }
    }

    pub fn observe(&self, project_id: &str, progress: ProjectProgress) -> StageView {
        let stage = ProgressStage::for_percentage(progress.completion_percentage());

        let previous = {
            let mut guard = self.last_stage.lock().expect("progress mutex poisoned");
            guard.insert(project_id.to_string(), stage)
        };

        if previous != Some(stage) {
            debug!(%project_id, stage = stage.label(), "project progress entered new stage");
            self.trigger.stage_changed(project_id, previous, stage);
        }

        StageView::from(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_rounded_from_counts() {
        let progress = ProjectProgress {
            candidates_completed: 3,
            total_candidates: 10,
        };
        assert_eq!(progress.completion_percentage(), 30);

        let two_thirds = ProjectProgress {
            candidates_completed: 2,
            total_candidates: 3,
        };
        assert_eq!(two_thirds.completion_percentage(), 67);
    }

    #[test]
    fn empty_project_reads_as_zero_percent() {
        let progress = ProjectProgress {
            candidates_completed: 0,
            total_candidates: 0,
        };
        assert_eq!(progress.completion_percentage(), 0);
        assert_eq!(
            ProgressStage::for_percentage(progress.completion_percentage()),
            ProgressStage::DeployedAwaiting
        );
    }

    #[test]
    fn bands_partition_the_percentage_range() {
        for percentage in 0..=100u8 {
            let expected = if percentage <= 25 {
                ProgressStage::DeployedAwaiting
            } else if percentage <= 70 {
                ProgressStage::Collecting
            } else {
                ProgressStage::Finalizing
            };
            assert_eq!(ProgressStage::for_percentage(percentage), expected);
        }
    }

    #[test]
    fn band_boundaries_are_upper_inclusive() {
        assert_eq!(
            ProgressStage::for_percentage(25),
            ProgressStage::DeployedAwaiting
        );
        assert_eq!(ProgressStage::for_percentage(26), ProgressStage::Collecting);
        assert_eq!(ProgressStage::for_percentage(70), ProgressStage::Collecting);
        assert_eq!(ProgressStage::for_percentage(71), ProgressStage::Finalizing);
    }

    #[test]
    fn statuses_aggregate_into_counts() {
        let statuses = [
            CandidateStatus::Awaiting,
            CandidateStatus::Scoring,
            CandidateStatus::Scored,
            CandidateStatus::Scored,
        ];
        let progress = ProjectProgress::from_statuses(statuses.iter());
        assert_eq!(progress.candidates_completed, 3);
        assert_eq!(progress.total_candidates, 4);
        assert_eq!(progress.completion_percentage(), 75);
    }
}
