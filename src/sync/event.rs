//! Goto events exchanged between linked viewers.

use crate::core::StepId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A navigation announcement: "everyone go to `step`".
///
/// `duration` is the transition time in milliseconds handed to the host
/// library. The synchronizer itself never interprets it. Inbound durations
/// are read leniently: any JSON number is rounded and clamped at zero, and
/// anything else counts as absent.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GotoEvent {
    pub step: StepId,
    #[serde(
        default,
        deserialize_with = "lenient_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<u64>,
}

fn lenient_duration<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(duration_millis))
}

fn duration_millis(value: &Value) -> Option<u64> {
    if let Some(millis) = value.as_u64() {
        return Some(millis);
    }
    // Float-to-int `as` saturates, so huge values land on u64::MAX.
    value.as_f64().map(|millis| millis.max(0.0).round() as u64)
}

/// Reasons an inbound payload is not a usable goto event.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Goto payload is missing or null")]
    MissingPayload,

    #[error("Goto payload has no step or a null step")]
    MissingStep,

    #[error("Goto payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl GotoEvent {
    pub fn new(step: impl Into<StepId>, duration: Option<u64>) -> Self {
        Self {
            step: step.into(),
            duration,
        }
    }

    /// Decode a raw channel payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepsync::sync::{GotoEvent, PayloadError};
    /// use serde_json::json;
    ///
    /// let event = GotoEvent::from_payload(&json!({"step": "b", "duration": 500})).unwrap();
    /// assert_eq!(event.step, "b");
    /// assert_eq!(event.duration, Some(500));
    ///
    /// assert!(matches!(
    ///     GotoEvent::from_payload(&json!({"step": null})),
    ///     Err(PayloadError::MissingStep)
    /// ));
    /// ```
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        if payload.is_null() {
            return Err(PayloadError::MissingPayload);
        }

        match payload.get("step") {
            None | Some(Value::Null) => return Err(PayloadError::MissingStep),
            Some(_) => {}
        }

        Ok(Self::deserialize(payload)?)
    }

    pub fn to_payload(&self) -> Value {
        // A struct of a string and an optional integer always serializes.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
