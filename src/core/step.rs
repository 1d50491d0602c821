//! Step identifiers and step discovery.
//!
//! A step is one addressable position in a presentation. Steps are named by
//! opaque strings; the order in which they are listed defines navigation order.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque, unique name of one presentation step.
///
/// # Example
///
/// ```rust
/// use stepsync::core::StepId;
///
/// let id = StepId::new("intro");
/// assert_eq!(id.as_str(), "intro");
/// assert_eq!(id, "intro");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StepId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StepId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StepId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StepId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for StepId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StepId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An element of the host document that represents one step.
///
/// Implemented by whatever the embedding layer uses to describe step
/// elements. Elements without an identifier receive a generated one during
/// discovery.
pub trait StepElement {
    /// The element's identifier, if it has one.
    fn id(&self) -> Option<&str>;

    /// Assign an identifier to the element.
    fn set_id(&mut self, id: String);
}

/// Derive the step sequence from a collection of step elements.
///
/// Elements lacking an identifier (or carrying an empty one) are assigned
/// `step-{n}`, where `n` is the element's 1-based position in the collection.
/// Source order is preserved.
///
/// # Example
///
/// ```rust
/// use stepsync::core::{discover_steps, StepElement};
///
/// struct Div(Option<String>);
///
/// impl StepElement for Div {
///     fn id(&self) -> Option<&str> { self.0.as_deref() }
///     fn set_id(&mut self, id: String) { self.0 = Some(id); }
/// }
///
/// let mut elements = vec![Div(Some("title".into())), Div(None)];
/// let steps = discover_steps(&mut elements);
///
/// assert_eq!(steps[0], "title");
/// assert_eq!(steps[1], "step-2");
/// assert_eq!(elements[1].id(), Some("step-2"));
/// ```
pub fn discover_steps<E: StepElement>(elements: &mut [E]) -> Vec<StepId> {
    elements
        .iter_mut()
        .enumerate()
        .map(|(idx, element)| {
            let existing = element
                .id()
                .filter(|id| !id.is_empty())
                .map(str::to_string);
            let id = match existing {
                Some(id) => id,
                None => {
                    let generated = format!("step-{}", idx + 1);
                    element.set_id(generated.clone());
                    generated
                }
            };
            StepId(id)
        })
        .collect()
}
