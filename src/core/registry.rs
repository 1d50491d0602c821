//! Ordered step sequence with a single active pointer.
//!
//! The registry performs no I/O. It only answers "which step comes next"
//! and moves its pointer when asked to.

use super::step::StepId;

/// Ordered, fixed list of steps with an active pointer.
///
/// Navigation is circular: moving past the last step wraps to the first and
/// moving before the first wraps to the last. While no step is active (or the
/// active step is not a member, which can happen after a trusted remote
/// event) the pointer behaves as if it sat just before the first step.
///
/// # Example
///
/// ```rust
/// use stepsync::core::StepRegistry;
/// use stepsync::steps;
///
/// let mut registry = StepRegistry::new(steps!["a", "b", "c"]);
///
/// assert_eq!(registry.next().unwrap(), "a");
/// assert_eq!(registry.next().unwrap(), "b");
/// assert_eq!(registry.prev().unwrap(), "a");
/// assert_eq!(registry.prev().unwrap(), "c");
/// assert!(registry.goto("z").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StepRegistry {
    steps: Vec<StepId>,
    active: Option<StepId>,
}

impl StepRegistry {
    pub fn new(steps: Vec<StepId>) -> Self {
        Self {
            steps,
            active: None,
        }
    }

    /// Move to `id` if it names a step in the sequence.
    ///
    /// Returns the new active step, or `None` without touching the pointer
    /// when `id` is not a member.
    pub fn goto(&mut self, id: &str) -> Option<StepId> {
        let step = self.steps.iter().find(|step| step.as_str() == id)?.clone();
        self.active = Some(step.clone());
        Some(step)
    }

    /// Advance to the following step, wrapping at the end.
    pub fn next(&mut self) -> Option<StepId> {
        let next = self.peek_next()?;
        self.goto(next.as_str())
    }

    /// Step back to the preceding step, wrapping at the start.
    pub fn prev(&mut self) -> Option<StepId> {
        let prev = self.peek_prev()?;
        self.goto(prev.as_str())
    }

    /// The step `next()` would move to, without moving.
    pub fn peek_next(&self) -> Option<StepId> {
        let next = match self.position() {
            Some(idx) if idx + 1 < self.steps.len() => idx + 1,
            _ => 0,
        };
        self.steps.get(next).cloned()
    }

    /// The step `prev()` would move to, without moving.
    pub fn peek_prev(&self) -> Option<StepId> {
        let prev = match self.position() {
            Some(idx) if idx > 0 => idx - 1,
            _ => self.steps.len().checked_sub(1)?,
        };
        self.steps.get(prev).cloned()
    }

    /// Index of the active step, if it is set and a member.
    pub fn position(&self) -> Option<usize> {
        let active = self.active.as_ref()?;
        self.steps.iter().position(|step| step == active)
    }

    pub fn active(&self) -> Option<&StepId> {
        self.active.as_ref()
    }

    pub fn steps(&self) -> &[StepId] {
        &self.steps
    }

    pub fn contains(&self, id: &str) -> bool {
        self.steps.iter().any(|step| step.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    // Remote events are canonical; membership is not checked.
    pub(crate) fn set_active_unchecked(&mut self, id: StepId) {
        self.active = Some(id);
    }
}
