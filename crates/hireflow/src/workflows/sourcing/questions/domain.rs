use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::sourcing::event::UNKNOWN_ROLE_TITLE;

/// A recruiter-initiated ask to assess candidates for a role within a
/// project. Created by the project-creation flow; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcingRequest {
    pub project_id: String,
    #[serde(default = "default_role_title")]
    pub role_title: String,
    /// Candidate-facing brief the generation backend works from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
}

fn default_role_title() -> String {
    UNKNOWN_ROLE_TITLE.to_string()
}

/// One generated proof-of-work question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofOfWorkQuestion {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

/// Ordered question set produced for one sourcing request.
///
/// Produced here, persisted by the store collaborator; the pipeline does
/// not retain it after the hand-off. An empty set is valid output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofOfWorkQuestionSet {
    pub project_id: String,
    pub role_title: String,
    pub questions: Vec<ProofOfWorkQuestion>,
    pub generated_at: DateTime<Utc>,
}
