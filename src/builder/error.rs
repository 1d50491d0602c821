//! Build and configuration errors for synchronizers.

use thiserror::Error;

/// A problem with the step sequence a synchronizer was given.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Step sequence is empty")]
    EmptySequence,

    #[error("Step at position {index} has an empty identifier")]
    EmptyStepId { index: usize },

    #[error("Step '{id}' appears at positions {first} and {duplicate}")]
    DuplicateStepId {
        id: String,
        first: usize,
        duplicate: usize,
    },
}

/// Errors that can occur when building a synchronizer.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Goto channel not specified. Call .channel(channel) before .build()")]
    MissingChannel,

    #[error("No steps specified. Call .steps(list) or .step_elements(elements)")]
    MissingSteps,

    #[error("Non-standalone mode needs a host. Call .host(library), .host_pending() or .standalone(true)")]
    MissingHost,

    #[error("Invalid step sequence: {}", join(.0))]
    InvalidSteps(Vec<ConfigError>),

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
