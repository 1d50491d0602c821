//! Bridge between the synchronizer and the host presentation library.

use super::navigator::HostLibrary;
use super::registry::{root_key, PatchRegistry, PatchedHost};
use crate::core::StepId;

/// Result of asking the bridge to take over the host's navigation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PatchOutcome {
    /// The host root was patched by this call.
    Patched,
    /// The host root had been patched before; nothing changed.
    AlreadyPatched,
    /// No host library is present yet. Patching waits for its init signal.
    Deferred,
}

/// Owns the host library handle and the registry of patched roots.
///
/// A bridge starts either attached (the host library was present at
/// construction) or pending (it will be handed over by the host's
/// initialization signal).
pub struct HostBridge<L: HostLibrary> {
    library: Option<L>,
    root_id: String,
    registry: PatchRegistry<L::Navigator>,
    patched: bool,
}

impl<L: HostLibrary> HostBridge<L> {
    /// Bridge whose host library has not announced itself yet.
    pub fn pending(root_id: impl Into<String>) -> Self {
        Self {
            library: None,
            root_id: root_id.into(),
            registry: PatchRegistry::new(),
            patched: false,
        }
    }

    /// Bridge over a host library that is already present.
    pub fn attached(library: L, root_id: impl Into<String>) -> Self {
        Self {
            library: Some(library),
            ..Self::pending(root_id)
        }
    }

    pub fn root_id(&self) -> &str {
        root_key(&self.root_id)
    }

    pub fn is_attached(&self) -> bool {
        self.library.is_some()
    }

    pub fn is_patched(&self) -> bool {
        self.patched
    }

    /// Hand over the host library once it reports it is initialized.
    ///
    /// Returns `false` and keeps the current library when one is already
    /// attached.
    pub fn attach(&mut self, library: L) -> bool {
        if self.library.is_some() {
            return false;
        }
        self.library = Some(library);
        true
    }

    /// Take over the host's navigation for this bridge's root.
    pub fn patch(&mut self) -> PatchOutcome {
        if self.patched {
            return PatchOutcome::AlreadyPatched;
        }

        let Some(library) = self.library.as_mut() else {
            tracing::debug!(root = %self.root_id, "host library absent, deferring patch");
            return PatchOutcome::Deferred;
        };

        let root_id = root_key(&self.root_id);
        self.registry.patch(library, root_id);
        self.patched = true;
        tracing::debug!(root = root_id, "host navigation patched");
        PatchOutcome::Patched
    }

    /// Patch an additional root, or return it from the cache.
    ///
    /// `None` while no host library is attached.
    pub fn patch_root(&mut self, root_id: &str) -> Option<&mut PatchedHost<L::Navigator>> {
        let library = self.library.as_mut()?;
        let (patched, _) = self.registry.patch(library, root_id);
        Some(patched)
    }

    /// The patched host for this bridge's root, once patching happened.
    pub fn host(&mut self) -> Option<&mut PatchedHost<L::Navigator>> {
        if !self.patched {
            return None;
        }
        self.registry.get_mut(root_key(&self.root_id))
    }

    pub fn registry(&self) -> &PatchRegistry<L::Navigator> {
        &self.registry
    }

    /// Make the host display `step` through its original navigator.
    ///
    /// Patches first when the library is attached but not yet patched.
    /// Returns `None` when no host is available.
    pub fn drive(&mut self, step: &StepId, duration: Option<u64>) -> Option<StepId> {
        if !self.patched && self.library.is_some() {
            self.patch();
        }
        self.host()?.goto_original(step, duration)
    }
}
