//! Address-bar fragment handling for deep links.
//!
//! Both the enhanced `#/step-id` form and the legacy `#step-id` form are
//! accepted when reading. Only the enhanced form is written.

use std::cell::RefCell;
use std::rc::Rc;

/// Read/write access to the address-bar fragment.
///
/// Change notifications are not part of the trait: the embedding layer
/// forwards them to [`Synchronizer::on_fragment_change`].
///
/// [`Synchronizer::on_fragment_change`]: crate::sync::Synchronizer::on_fragment_change
pub trait FragmentSurface {
    /// Current fragment including the leading `#`, or an empty string.
    fn fragment(&self) -> String;

    fn set_fragment(&mut self, fragment: &str);
}

/// No address bar: the fragment is always empty and writes are dropped.
impl FragmentSurface for () {
    fn fragment(&self) -> String {
        String::new()
    }

    fn set_fragment(&mut self, _fragment: &str) {}
}

/// In-memory fragment shared between clones.
///
/// Cloning yields another handle to the same fragment, so the embedding code
/// (or a test) can keep one handle while the synchronizer owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryFragment {
    inner: Rc<RefCell<String>>,
}

impl MemoryFragment {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(fragment.into())),
        }
    }

    /// Replace the fragment from outside, as a user editing the address bar
    /// or pressing back would.
    pub fn replace(&self, fragment: impl Into<String>) {
        *self.inner.borrow_mut() = fragment.into();
    }

    pub fn get(&self) -> String {
        self.inner.borrow().clone()
    }
}

impl FragmentSurface for MemoryFragment {
    fn fragment(&self) -> String {
        self.get()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.replace(fragment);
    }
}

/// Extract the step identifier from a fragment.
///
/// Strips a leading `#` and, after it, an optional `/`. Text that does not
/// start with `#` is returned unchanged.
///
/// # Example
///
/// ```rust
/// use stepsync::fragment::parse_fragment;
///
/// assert_eq!(parse_fragment("#/intro"), "intro");
/// assert_eq!(parse_fragment("#intro"), "intro");
/// assert_eq!(parse_fragment(""), "");
/// ```
pub fn parse_fragment(fragment: &str) -> &str {
    match fragment.strip_prefix('#') {
        Some(rest) => rest.strip_prefix('/').unwrap_or(rest),
        None => fragment,
    }
}

/// Fragment written for `step`.
pub fn format_fragment(step: &str) -> String {
    format!("#/{step}")
}
