//! Cache of patched host roots.

use super::navigator::{HostLibrary, HostNavigator};
use crate::core::StepId;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Root used when the caller does not name one.
pub const DEFAULT_ROOT: &str = "impress";

/// Decorator around a host navigator whose entry points were taken over.
///
/// The wrapped navigator is the host's original implementation, saved
/// verbatim at patch time. Its operations are exposed under `*_original`
/// names. The replacement `goto`/`next`/`prev` is the synchronizer's
/// [`HostNavigator`] impl.
#[derive(Debug)]
pub struct PatchedHost<N> {
    root_id: String,
    original: N,
}

impl<N: HostNavigator> PatchedHost<N> {
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn goto_original(&mut self, step: &StepId, duration: Option<u64>) -> Option<StepId> {
        self.original.goto(step, duration)
    }

    pub fn next_original(&mut self) -> Option<StepId> {
        self.original.next()
    }

    pub fn prev_original(&mut self) -> Option<StepId> {
        self.original.prev()
    }

    /// The saved original navigator.
    pub fn original(&self) -> &N {
        &self.original
    }
}

/// Patched roots keyed by root identifier.
///
/// Patching a root that is already present returns the cached entry without
/// asking the host library for a new navigator.
#[derive(Debug)]
pub struct PatchRegistry<N> {
    roots: HashMap<String, PatchedHost<N>>,
}

impl<N> Default for PatchRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> PatchRegistry<N> {
    pub fn new() -> Self {
        Self {
            roots: HashMap::new(),
        }
    }

    /// Patch `root_id`, or return the cached patch.
    ///
    /// The boolean is `true` when this call created the patch.
    pub fn patch<L>(&mut self, library: &mut L, root_id: &str) -> (&mut PatchedHost<N>, bool)
    where
        L: HostLibrary<Navigator = N>,
    {
        let root_id = root_key(root_id);
        match self.roots.entry(root_id.to_string()) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => {
                let original = library.navigator(root_id);
                let patched = entry.insert(PatchedHost {
                    root_id: root_id.to_string(),
                    original,
                });
                (patched, true)
            }
        }
    }

    pub fn get_mut(&mut self, root_id: &str) -> Option<&mut PatchedHost<N>> {
        self.roots.get_mut(root_key(root_id))
    }

    pub fn is_patched(&self, root_id: &str) -> bool {
        self.roots.contains_key(root_key(root_id))
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// The root a possibly empty identifier refers to.
pub(crate) fn root_key(root_id: &str) -> &str {
    if root_id.is_empty() {
        DEFAULT_ROOT
    } else {
        root_id
    }
}
