//! Capability traits for the host presentation library.

use crate::core::StepId;

/// The host library's own navigation entry points for one root.
///
/// These are the *original* operations. The synchronizer only calls them to
/// make the host display match a step it has already decided on; calling
/// them never publishes anything on the goto channel.
pub trait HostNavigator {
    /// Show `step`, transitioning over `duration` milliseconds when given.
    fn goto(&mut self, step: &StepId, duration: Option<u64>) -> Option<StepId>;

    fn next(&mut self) -> Option<StepId>;

    fn prev(&mut self) -> Option<StepId>;
}

/// Factory handing out a navigator per presentation root.
pub trait HostLibrary {
    type Navigator: HostNavigator;

    /// Obtain the navigator for `root_id`.
    fn navigator(&mut self, root_id: &str) -> Self::Navigator;
}

/// Host type for synchronizers that never drive a host library.
///
/// It has no values, so a bridge over `NoHost` can never be attached.
#[derive(Debug)]
pub enum NoHost {}

impl HostNavigator for NoHost {
    fn goto(&mut self, _step: &StepId, _duration: Option<u64>) -> Option<StepId> {
        match *self {}
    }

    fn next(&mut self) -> Option<StepId> {
        match *self {}
    }

    fn prev(&mut self) -> Option<StepId> {
        match *self {}
    }
}

impl HostLibrary for NoHost {
    type Navigator = NoHost;

    fn navigator(&mut self, _root_id: &str) -> NoHost {
        match *self {}
    }
}
