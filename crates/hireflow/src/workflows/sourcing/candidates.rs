use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-candidate proof-of-work lifecycle.
///
/// Transitions are externally driven and strictly forward: a submission
/// moves `Awaiting` to `Scoring`, scoring completion moves `Scoring` to
/// `Scored`. This subsystem renders and aggregates the state; it never
/// authors an invalid transition itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Awaiting,
    Scoring,
    Scored,
}

impl CandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CandidateStatus::Awaiting => "awaiting",
            CandidateStatus::Scoring => "scoring",
            CandidateStatus::Scored => "scored",
        }
    }

    /// Whether the candidate has completed their proof-of-work task.
    pub const fn has_submitted(self) -> bool {
        !matches!(self, CandidateStatus::Awaiting)
    }

    /// Apply an externally driven transition, rejecting backward or
    /// skipping moves.
    pub fn advance_to(self, next: CandidateStatus) -> Result<CandidateStatus, StatusTransitionError> {
        match (self, next) {
            (CandidateStatus::Awaiting, CandidateStatus::Scoring)
            | (CandidateStatus::Scoring, CandidateStatus::Scored) => Ok(next),
            _ => Err(StatusTransitionError {
                from: self,
                to: next,
            }),
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected candidate-status move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid candidate status transition: {from} -> {to}")]
pub struct StatusTransitionError {
    pub from: CandidateStatus,
    pub to: CandidateStatus,
}
