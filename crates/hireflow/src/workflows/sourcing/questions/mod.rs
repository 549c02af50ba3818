//! Proof-of-work question materialization for sourcing requests.

pub mod domain;
pub mod factory;
pub mod gateway;
pub mod router;

pub use domain::{ProofOfWorkQuestion, ProofOfWorkQuestionSet, SourcingRequest};
pub use factory::{QuestionFactory, QuestionFactoryError};
pub use gateway::{
    GenerationError, HttpQuestionGenerator, QuestionGenerator, QuestionSetStore, StoreError,
};
pub use router::question_router;
