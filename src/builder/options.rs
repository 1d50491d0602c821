//! Construction options and step sequence validation.

use crate::builder::error::{BuildError, ConfigError};
use crate::core::{StepId, DEFAULT_HISTORY_CAPACITY};
use crate::host::DEFAULT_ROOT;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Options recognized when constructing a synchronizer.
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// # Example
///
/// ```rust
/// use stepsync::builder::SyncOptions;
///
/// let options = SyncOptions::from_json(r#"{"offset": 1, "standalone": true}"#).unwrap();
/// assert_eq!(options.offset, 1);
/// assert!(options.standalone);
/// assert!(options.steps.is_none());
/// assert_eq!(options.root_id, "impress");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncOptions {
    /// Explicit step list; overrides discovery from step elements
    pub steps: Option<Vec<StepId>>,
    /// Run without patching a host library
    pub standalone: bool,
    /// Extra forward steps applied on top of each remote goto
    pub offset: usize,
    /// Host root to patch
    pub root_id: String,
    /// Drive the host directly after local navigation instead of waiting
    /// for the channel to echo the event back
    pub drive_host_on_local: bool,
    /// Navigation records kept in memory; the oldest are dropped first
    pub history_capacity: usize,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            steps: None,
            standalone: false,
            offset: 0,
            root_id: DEFAULT_ROOT.to_string(),
            drive_host_on_local: false,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SyncOptions {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Check a step sequence, accumulating every violation.
///
/// # Example
///
/// ```rust
/// use stepsync::builder::{validate_steps, ConfigError};
/// use stepsync::steps;
/// use stillwater::validation::Validation;
///
/// assert!(validate_steps(&steps!["a", "b"]).is_success());
///
/// match validate_steps(&steps!["a", "", "a"]) {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
///     Validation::Success(_) => panic!("expected violations"),
/// }
/// ```
pub fn validate_steps(steps: &[StepId]) -> Validation<(), NonEmptyVec<ConfigError>> {
    if steps.is_empty() {
        return Validation::fail(ConfigError::EmptySequence);
    }

    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, step) in steps.iter().enumerate() {
        if step.as_str().is_empty() {
            checks.push(Validation::fail(ConfigError::EmptyStepId { index }));
            continue;
        }

        match seen.get(step.as_str()) {
            Some(&first) => checks.push(Validation::fail(ConfigError::DuplicateStepId {
                id: step.to_string(),
                first,
                duplicate: index,
            })),
            None => {
                seen.insert(step.as_str(), index);
            }
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }

    Validation::all_vec(checks).map(|_| ())
}

/// [`validate_steps`] as a `Result`, for the builder.
pub(crate) fn check_steps(steps: &[StepId]) -> Result<(), BuildError> {
    match validate_steps(steps) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(BuildError::InvalidSteps(
            errors.iter().cloned().collect(),
        )),
    }
}
