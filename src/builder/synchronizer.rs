//! Builder for constructing synchronizers.

use crate::builder::error::BuildError;
use crate::builder::options::{check_steps, SyncOptions};
use crate::core::{discover_steps, StepElement, StepId};
use crate::fragment::FragmentSurface;
use crate::host::{HostBridge, HostLibrary, NoHost};
use crate::sync::synchronizer::Parts;
use crate::sync::{GotoChannel, Synchronizer, ViewerId};

enum HostSlot<L> {
    Absent,
    Pending,
    Present(L),
}

/// Builder for constructing synchronizers with a fluent API.
///
/// The host library and the fragment surface change the builder's type, so
/// they can be supplied in any order relative to the plain options.
pub struct SynchronizerBuilder<C, L: HostLibrary = NoHost, F = ()> {
    channel: Option<C>,
    host: HostSlot<L>,
    fragment: F,
    options: SyncOptions,
    discovered: Option<Vec<StepId>>,
    viewer: Option<ViewerId>,
}

impl<C> SynchronizerBuilder<C> {
    pub fn new() -> Self {
        Self {
            channel: None,
            host: HostSlot::Absent,
            fragment: (),
            options: SyncOptions::default(),
            discovered: None,
            viewer: None,
        }
    }
}

impl<C> Default for SynchronizerBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, L: HostLibrary, F> SynchronizerBuilder<C, L, F> {
    /// Set the outbound goto channel (required).
    pub fn channel(mut self, channel: C) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Replace all plain options at once.
    pub fn options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Use an explicit step list. Takes precedence over discovered steps.
    pub fn steps(mut self, steps: Vec<StepId>) -> Self {
        self.options.steps = Some(steps);
        self
    }

    /// Discover steps from the host document's step elements.
    ///
    /// Elements without an identifier are given one.
    pub fn step_elements<E: StepElement>(mut self, elements: &mut [E]) -> Self {
        self.discovered = Some(discover_steps(elements));
        self
    }

    pub fn standalone(mut self, standalone: bool) -> Self {
        self.options.standalone = standalone;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.options.offset = offset;
        self
    }

    pub fn root_id(mut self, root_id: impl Into<String>) -> Self {
        self.options.root_id = root_id.into();
        self
    }

    pub fn drive_host_on_local(mut self, drive: bool) -> Self {
        self.options.drive_host_on_local = drive;
        self
    }

    /// Keep at most `capacity` navigation records.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.options.history_capacity = capacity;
        self
    }

    pub fn viewer_id(mut self, viewer: ViewerId) -> Self {
        self.viewer = Some(viewer);
        self
    }

    /// Use a host library that is already initialized.
    pub fn host<H: HostLibrary>(self, library: H) -> SynchronizerBuilder<C, H, F> {
        self.with_host(HostSlot::Present(library))
    }

    /// Expect a host library that will announce itself later through
    /// [`Synchronizer::on_host_init`].
    pub fn host_pending<H: HostLibrary>(self) -> SynchronizerBuilder<C, H, F> {
        self.with_host(HostSlot::Pending)
    }

    /// Read and write deep links through `fragment`.
    pub fn fragment<S: FragmentSurface>(self, fragment: S) -> SynchronizerBuilder<C, L, S> {
        SynchronizerBuilder {
            channel: self.channel,
            host: self.host,
            fragment,
            options: self.options,
            discovered: self.discovered,
            viewer: self.viewer,
        }
    }

    fn with_host<H: HostLibrary>(self, host: HostSlot<H>) -> SynchronizerBuilder<C, H, F> {
        SynchronizerBuilder {
            channel: self.channel,
            host,
            fragment: self.fragment,
            options: self.options,
            discovered: self.discovered,
            viewer: self.viewer,
        }
    }
}

impl<C, L, F> SynchronizerBuilder<C, L, F>
where
    C: GotoChannel,
    L: HostLibrary,
    F: FragmentSurface,
{
    /// Build the synchronizer and run its start-up.
    ///
    /// Returns an error if the channel or steps are missing, the step
    /// sequence is invalid, or a non-standalone synchronizer has no host.
    pub fn build(self) -> Result<Synchronizer<C, L, F>, BuildError> {
        let channel = self.channel.ok_or(BuildError::MissingChannel)?;
        let steps = self
            .options
            .steps
            .or(self.discovered)
            .ok_or(BuildError::MissingSteps)?;
        check_steps(&steps)?;

        let root_id = self.options.root_id;
        let bridge = match self.host {
            HostSlot::Present(library) => Some(HostBridge::attached(library, root_id.clone())),
            HostSlot::Pending => Some(HostBridge::pending(root_id.clone())),
            HostSlot::Absent => None,
        };
        if !self.options.standalone && bridge.is_none() {
            return Err(BuildError::MissingHost);
        }

        Ok(Synchronizer::start(Parts {
            viewer: self.viewer.unwrap_or_default(),
            steps,
            channel,
            bridge,
            fragment: self.fragment,
            root_id,
            offset: self.options.offset,
            standalone: self.options.standalone,
            drive_host_on_local: self.options.drive_host_on_local,
            history_capacity: self.options.history_capacity,
        }))
    }
}
