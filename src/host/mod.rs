//! Host presentation library integration.
//!
//! The host library renders steps and owns its own `goto`/`next`/`prev`.
//! When a synchronizer is not standalone it takes those entry points over:
//! the host's originals are saved in a [`PatchedHost`] and only ever called
//! to make the display follow a step the synchronizer already settled on.
//! The synchronizer implements [`HostNavigator`] itself and is the surface
//! the host's own callers are routed through.

mod bridge;
mod navigator;
mod registry;

pub use bridge::{HostBridge, PatchOutcome};
pub use navigator::{HostLibrary, HostNavigator, NoHost};
pub use registry::{PatchRegistry, PatchedHost, DEFAULT_ROOT};
