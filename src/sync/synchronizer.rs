//! Step navigation kept in agreement across linked viewers.

use super::channel::GotoChannel;
use super::event::GotoEvent;
use super::viewer::ViewerId;
use crate::core::{NavigationHistory, NavigationRecord, Origin, StepId, StepRegistry};
use crate::fragment::{format_fragment, parse_fragment, FragmentSurface};
use crate::host::{HostBridge, HostLibrary, HostNavigator, NoHost, PatchOutcome, PatchedHost};
use crate::input::NavCommand;
use chrono::Utc;
use serde_json::Value;

/// Lifecycle of a synchronizer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Waiting for the host library to announce itself.
    Uninitialized,
    /// Initial step chosen; runs until the process ends.
    Active,
}

/// Keeps one viewer's active step in agreement with the shared channel.
///
/// Local navigation (`goto`, `next`, `prev`, `dispatch`) is validated
/// against the step sequence and then announced on the channel. Remote
/// navigation (`on_goto`) is trusted, shifted forward by `offset` steps and
/// shown through the host's original navigator without being announced
/// again, so linked viewers never echo each other.
///
/// The synchronizer is also the replacement for the host's own navigator:
/// its [`HostNavigator`] impl routes the host's `goto`/`next`/`prev` calls
/// (keyboard handlers, step clicks) through local navigation, while the
/// saved originals in [`PatchedHost`] only ever move the display.
///
/// Built with [`SynchronizerBuilder`](crate::builder::SynchronizerBuilder).
///
/// # Example
///
/// ```rust
/// use stepsync::builder::SynchronizerBuilder;
/// use stepsync::sync::MemoryChannel;
/// use stepsync::steps;
///
/// let channel = MemoryChannel::new();
/// let mut sync = SynchronizerBuilder::new()
///     .channel(channel.clone())
///     .steps(steps!["a", "b", "c"])
///     .standalone(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(sync.active().unwrap(), "a");
/// assert_eq!(sync.next().unwrap(), "b");
/// assert!(sync.goto("z", None).is_none());
/// assert_eq!(channel.drain().len(), 2);
/// ```
pub struct Synchronizer<C, L: HostLibrary = NoHost, F = ()> {
    viewer: ViewerId,
    registry: StepRegistry,
    channel: C,
    bridge: Option<HostBridge<L>>,
    fragment: F,
    last_fragment: String,
    root_id: String,
    offset: usize,
    standalone: bool,
    drive_host_on_local: bool,
    phase: Phase,
    history: NavigationHistory,
}

/// Everything the builder hands over.
pub(crate) struct Parts<C, L: HostLibrary, F> {
    pub viewer: ViewerId,
    pub steps: Vec<StepId>,
    pub channel: C,
    pub bridge: Option<HostBridge<L>>,
    pub fragment: F,
    pub root_id: String,
    pub offset: usize,
    pub standalone: bool,
    pub drive_host_on_local: bool,
    pub history_capacity: usize,
}

impl<C, L, F> Synchronizer<C, L, F>
where
    C: GotoChannel,
    L: HostLibrary,
    F: FragmentSurface,
{
    /// Assemble a synchronizer and run its start-up.
    ///
    /// Standalone synchronizers pick their initial step right away. The
    /// others patch the host first, or wait for [`on_host_init`] when the
    /// host is not there yet.
    ///
    /// [`on_host_init`]: Self::on_host_init
    pub(crate) fn start(parts: Parts<C, L, F>) -> Self {
        let mut sync = Self {
            viewer: parts.viewer,
            registry: StepRegistry::new(parts.steps),
            channel: parts.channel,
            bridge: parts.bridge,
            fragment: parts.fragment,
            last_fragment: String::new(),
            root_id: parts.root_id,
            offset: parts.offset,
            standalone: parts.standalone,
            drive_host_on_local: parts.drive_host_on_local,
            phase: Phase::Uninitialized,
            history: NavigationHistory::with_capacity(parts.history_capacity),
        };

        if sync.standalone {
            sync.initialize();
            return sync;
        }

        match sync.bridge.as_mut().map(HostBridge::patch) {
            Some(PatchOutcome::Patched | PatchOutcome::AlreadyPatched) => sync.initialize(),
            _ => {
                tracing::debug!(viewer = %sync.viewer, "waiting for host initialization");
            }
        }
        sync
    }

    /// Move to step `id`, announcing it on the channel.
    ///
    /// Returns the new active step, or `None` when `id` is not part of the
    /// step sequence; nothing is announced in that case.
    pub fn goto(&mut self, id: &str, duration: Option<u64>) -> Option<StepId> {
        self.navigate(id, duration, Origin::Local)
    }

    /// Move to the following step, wrapping after the last one.
    pub fn next(&mut self) -> Option<StepId> {
        let next = self.registry.peek_next()?;
        self.goto(next.as_str(), None)
    }

    /// Move to the preceding step, wrapping before the first one.
    pub fn prev(&mut self) -> Option<StepId> {
        let prev = self.registry.peek_prev()?;
        self.goto(prev.as_str(), None)
    }

    /// Apply a command translated from user input.
    pub fn dispatch(&mut self, command: NavCommand) -> Option<StepId> {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Prev => self.prev(),
            NavCommand::Goto(id) => self.goto(&id, None),
        }
    }

    /// Handle a raw payload delivered by the channel.
    ///
    /// A null payload, or one without a non-null `step`, is ignored. Returns
    /// the step this viewer ended up on, or `None` when the payload was
    /// ignored.
    pub fn on_goto(&mut self, payload: &Value) -> Option<StepId> {
        match GotoEvent::from_payload(payload) {
            Ok(event) => Some(self.apply_remote(event)),
            Err(err) => {
                tracing::debug!(viewer = %self.viewer, %err, "ignoring goto payload");
                None
            }
        }
    }

    /// Apply a canonical goto event from another viewer.
    ///
    /// The announced step is taken as is, even when it is not part of the
    /// local sequence. The viewer then runs `offset` steps ahead of it.
    /// The host is driven through its original navigator and the channel is
    /// left alone.
    pub fn apply_remote(&mut self, event: GotoEvent) -> StepId {
        let from = self.registry.active().cloned();

        self.registry.set_active_unchecked(event.step.clone());
        for _ in 0..self.offset {
            match self.registry.peek_next() {
                Some(next) => self.registry.set_active_unchecked(next),
                None => break,
            }
        }

        let step = self.registry.active().cloned().unwrap_or(event.step);
        tracing::debug!(
            viewer = %self.viewer,
            step = %step,
            offset = self.offset,
            "applying remote goto"
        );
        self.record(from, &step, Origin::Remote, event.duration);

        match self.bridge.as_mut() {
            Some(bridge) => {
                bridge.drive(&step, event.duration);
            }
            None => self.announce_fragment(&step),
        }
        step
    }

    /// Handle the host's step-entered signal.
    ///
    /// Writes `#/{id}` to the address bar, remembering it first so the
    /// resulting change notification is not taken for a new request.
    pub fn on_step_enter(&mut self, id: &str) {
        let fragment = format_fragment(id);
        self.last_fragment.clone_from(&fragment);
        self.fragment.set_fragment(&fragment);
    }

    /// Handle a change of the address-bar fragment.
    ///
    /// Fragments this synchronizer wrote itself are skipped. Anything else
    /// is a local goto to the step it names.
    pub fn on_fragment_change(&mut self) -> Option<StepId> {
        let fragment = self.fragment.fragment();
        if fragment == self.last_fragment {
            tracing::trace!(viewer = %self.viewer, %fragment, "own fragment, skipping");
            return None;
        }

        let id = parse_fragment(&fragment).to_string();
        self.navigate(&id, None, Origin::Fragment)
    }

    /// Handle the host library's initialization signal.
    ///
    /// Outside standalone mode the host is patched and, on first patch, the
    /// initial step is chosen. In standalone mode the host is only attached;
    /// it gets patched when the first remote event needs it.
    pub fn on_host_init(&mut self, library: L) -> PatchOutcome {
        let root_id = self.root_id.clone();
        let bridge = self
            .bridge
            .get_or_insert_with(|| HostBridge::pending(root_id));
        if !bridge.attach(library) {
            tracing::debug!(viewer = %self.viewer, "host library already attached");
        }

        if self.standalone {
            return PatchOutcome::Deferred;
        }

        let outcome = bridge.patch();
        if outcome == PatchOutcome::Patched && self.phase == Phase::Uninitialized {
            self.initialize();
        }
        outcome
    }

    pub fn active(&self) -> Option<&StepId> {
        self.registry.active()
    }

    pub fn steps(&self) -> &[StepId] {
        self.registry.steps()
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_standalone(&self) -> bool {
        self.standalone
    }

    pub fn viewer(&self) -> ViewerId {
        self.viewer
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// The fragment this synchronizer wrote most recently.
    pub fn last_fragment(&self) -> &str {
        &self.last_fragment
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn fragment_surface(&self) -> &F {
        &self.fragment
    }

    pub fn bridge(&self) -> Option<&HostBridge<L>> {
        self.bridge.as_ref()
    }

    /// The patched host, once the bridge took over its navigation.
    pub fn host(&mut self) -> Option<&mut PatchedHost<L::Navigator>> {
        self.bridge.as_mut()?.host()
    }

    // Start at the deep-linked step when it is valid, else the first step.
    fn initialize(&mut self) {
        let fragment = self.fragment.fragment();
        let linked = parse_fragment(&fragment);
        let target = if self.registry.contains(linked) {
            Some(linked.to_string())
        } else {
            self.registry.steps().first().map(ToString::to_string)
        };

        self.phase = Phase::Active;
        match target {
            Some(id) => {
                self.goto(&id, Some(0));
            }
            None => tracing::debug!(viewer = %self.viewer, "no steps to start on"),
        }
    }

    fn navigate(&mut self, id: &str, duration: Option<u64>, origin: Origin) -> Option<StepId> {
        let from = self.registry.active().cloned();
        let Some(step) = self.registry.goto(id) else {
            tracing::debug!(viewer = %self.viewer, id, "rejecting goto to unknown step");
            return None;
        };

        tracing::debug!(viewer = %self.viewer, step = %step, ?origin, "goto");
        self.record(from, &step, origin, duration);
        self.channel.emit_goto(&GotoEvent {
            step: step.clone(),
            duration,
        });

        match self.bridge.as_mut() {
            Some(bridge) if self.drive_host_on_local => {
                bridge.drive(&step, duration);
            }
            Some(_) => {}
            None => self.announce_fragment(&step),
        }
        Some(step)
    }

    // Without a host there is no step-entered signal; write the fragment here.
    fn announce_fragment(&mut self, step: &StepId) {
        self.on_step_enter(step.as_str());
    }

    fn record(&mut self, from: Option<StepId>, to: &StepId, origin: Origin, duration: Option<u64>) {
        self.history.record(NavigationRecord {
            from,
            to: to.clone(),
            origin,
            duration,
            timestamp: Utc::now(),
        });
    }
}

/// The patched navigation surface handed back to the host.
///
/// Every call is a local navigation: validated, then announced on the
/// channel.
impl<C, L, F> HostNavigator for Synchronizer<C, L, F>
where
    C: GotoChannel,
    L: HostLibrary,
    F: FragmentSurface,
{
    fn goto(&mut self, step: &StepId, duration: Option<u64>) -> Option<StepId> {
        self.navigate(step.as_str(), duration, Origin::Local)
    }

    fn next(&mut self) -> Option<StepId> {
        Self::next(self)
    }

    fn prev(&mut self) -> Option<StepId> {
        Self::prev(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SynchronizerBuilder;
    use crate::fragment::MemoryFragment;
    use crate::steps;
    use crate::sync::MemoryChannel;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Shown = Rc<RefCell<Vec<(StepId, Option<u64>)>>>;

    struct Host {
        shown: Shown,
    }

    struct HostNav {
        shown: Shown,
    }

    impl HostNavigator for HostNav {
        fn goto(&mut self, step: &StepId, duration: Option<u64>) -> Option<StepId> {
            self.shown.borrow_mut().push((step.clone(), duration));
            Some(step.clone())
        }

        fn next(&mut self) -> Option<StepId> {
            None
        }

        fn prev(&mut self) -> Option<StepId> {
            None
        }
    }

    impl HostLibrary for Host {
        type Navigator = HostNav;

        fn navigator(&mut self, _root_id: &str) -> HostNav {
            HostNav {
                shown: Rc::clone(&self.shown),
            }
        }
    }

    fn host() -> (Host, Shown) {
        let shown = Shown::default();
        (
            Host {
                shown: Rc::clone(&shown),
            },
            shown,
        )
    }

    fn standalone(channel: &MemoryChannel) -> Synchronizer<MemoryChannel> {
        SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .standalone(true)
            .build()
            .unwrap()
    }

    #[test]
    fn standalone_starts_on_first_step() {
        let channel = MemoryChannel::new();
        let sync = standalone(&channel);

        assert_eq!(sync.phase(), Phase::Active);
        assert_eq!(sync.active().unwrap(), "a");
        assert_eq!(channel.drain(), vec![GotoEvent::new("a", Some(0))]);
    }

    #[test]
    fn local_goto_announces_after_update() {
        let channel = MemoryChannel::new();
        let mut sync = standalone(&channel);
        channel.drain();

        assert_eq!(sync.goto("c", Some(400)).unwrap(), "c");
        assert_eq!(channel.drain(), vec![GotoEvent::new("c", Some(400))]);
    }

    #[test]
    fn rejected_goto_is_not_announced() {
        let channel = MemoryChannel::new();
        let mut sync = standalone(&channel);
        channel.drain();

        assert!(sync.goto("z", None).is_none());
        assert_eq!(sync.active().unwrap(), "a");
        assert_eq!(channel.pending(), 0);
    }

    #[test]
    fn malformed_payloads_are_ignored() {
        let channel = MemoryChannel::new();
        let mut sync = standalone(&channel);
        sync.goto("b", None);
        let before = sync.history().len();

        for payload in [Value::Null, json!({}), json!({"step": null}), json!(42)] {
            assert!(sync.on_goto(&payload).is_none());
            assert_eq!(sync.active().unwrap(), "b");
        }
        assert_eq!(sync.history().len(), before);
    }

    #[test]
    fn remote_goto_applies_offset() {
        let channel = MemoryChannel::new();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .standalone(true)
            .offset(1)
            .build()
            .unwrap();
        channel.drain();

        assert_eq!(sync.on_goto(&json!({"step": "b"})).unwrap(), "c");
        assert_eq!(sync.active().unwrap(), "c");
        assert_eq!(channel.pending(), 0);
    }

    #[test]
    fn remote_goto_trusts_unknown_steps() {
        let channel = MemoryChannel::new();
        let mut sync = standalone(&channel);

        assert_eq!(sync.on_goto(&json!({"step": "elsewhere"})).unwrap(), "elsewhere");
        assert_eq!(sync.active().unwrap(), "elsewhere");
        assert_eq!(sync.next().unwrap(), "a");
    }

    #[test]
    fn hostless_goto_writes_fragment_and_skips_echo() {
        let channel = MemoryChannel::new();
        let location = MemoryFragment::default();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .standalone(true)
            .fragment(location.clone())
            .build()
            .unwrap();

        sync.goto("b", None);
        assert_eq!(location.get(), "#/b");
        assert_eq!(sync.last_fragment(), "#/b");

        let announced = channel.drain().len();
        assert!(sync.on_fragment_change().is_none());
        assert_eq!(channel.pending(), 0);
        assert!(announced > 0);
    }

    #[test]
    fn external_fragment_change_navigates() {
        let channel = MemoryChannel::new();
        let location = MemoryFragment::default();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .standalone(true)
            .fragment(location.clone())
            .build()
            .unwrap();
        channel.drain();

        location.replace("#c");
        assert_eq!(sync.on_fragment_change().unwrap(), "c");
        assert_eq!(location.get(), "#/c");
        assert_eq!(sync.history().last().unwrap().origin, Origin::Fragment);
        assert_eq!(channel.drain(), vec![GotoEvent::new("c", None)]);
    }

    #[test]
    fn starts_on_deep_linked_step() {
        let channel = MemoryChannel::new();
        let sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .standalone(true)
            .fragment(MemoryFragment::new("#/b"))
            .build()
            .unwrap();

        assert_eq!(sync.active().unwrap(), "b");
    }

    #[test]
    fn invalid_deep_link_falls_back_to_first_step() {
        let channel = MemoryChannel::new();
        let sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .standalone(true)
            .fragment(MemoryFragment::new("#/missing"))
            .build()
            .unwrap();

        assert_eq!(sync.active().unwrap(), "a");
    }

    #[test]
    fn pending_host_defers_initialization() {
        let channel = MemoryChannel::new();
        let (library, _) = host();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .host_pending::<Host>()
            .build()
            .unwrap();

        assert_eq!(sync.phase(), Phase::Uninitialized);
        assert!(sync.active().is_none());
        assert_eq!(channel.pending(), 0);

        assert_eq!(sync.on_host_init(library), PatchOutcome::Patched);
        assert_eq!(sync.phase(), Phase::Active);
        assert_eq!(sync.active().unwrap(), "a");
        assert_eq!(channel.drain(), vec![GotoEvent::new("a", Some(0))]);
    }

    #[test]
    fn repeated_host_init_is_a_no_op() {
        let channel = MemoryChannel::new();
        let (library, _) = host();
        let (again, _) = host();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .host(library)
            .build()
            .unwrap();
        channel.drain();

        assert_eq!(sync.on_host_init(again), PatchOutcome::AlreadyPatched);
        assert_eq!(channel.pending(), 0);
    }

    #[test]
    fn remote_goto_drives_original_host_without_echo() {
        let channel = MemoryChannel::new();
        let (library, shown) = host();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .offset(1)
            .host(library)
            .build()
            .unwrap();
        channel.drain();

        sync.on_goto(&json!({"step": "c", "duration": 700}));

        assert_eq!(sync.active().unwrap(), "a");
        assert_eq!(*shown.borrow(), vec![(StepId::new("a"), Some(700))]);
        assert_eq!(channel.pending(), 0);
    }

    #[test]
    fn local_goto_with_host_waits_for_echo() {
        let channel = MemoryChannel::new();
        let (library, shown) = host();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .host(library)
            .build()
            .unwrap();

        sync.next();
        assert!(shown.borrow().is_empty());

        for event in channel.drain() {
            sync.on_goto(&event.to_payload());
        }
        assert_eq!(
            *shown.borrow(),
            vec![(StepId::new("a"), Some(0)), (StepId::new("b"), None)]
        );
    }

    #[test]
    fn local_drive_option_shows_step_immediately() {
        let channel = MemoryChannel::new();
        let (library, shown) = host();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .drive_host_on_local(true)
            .host(library)
            .build()
            .unwrap();

        sync.goto("c", Some(100));
        assert_eq!(
            *shown.borrow(),
            vec![(StepId::new("a"), Some(0)), (StepId::new("c"), Some(100))]
        );
    }

    #[test]
    fn step_enter_records_fragment_before_notification() {
        let channel = MemoryChannel::new();
        let (library, _) = host();
        let location = MemoryFragment::default();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .host(library)
            .fragment(location.clone())
            .build()
            .unwrap();
        channel.drain();

        sync.on_step_enter("b");
        assert_eq!(location.get(), "#/b");
        assert!(sync.on_fragment_change().is_none());
        assert_eq!(channel.pending(), 0);
    }

    #[test]
    fn standalone_host_is_patched_on_first_remote_event() {
        let channel = MemoryChannel::new();
        let (library, shown) = host();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .standalone(true)
            .host_pending::<Host>()
            .build()
            .unwrap();

        assert_eq!(sync.on_host_init(library), PatchOutcome::Deferred);
        assert!(sync.host().is_none());

        sync.on_goto(&json!({"step": "b"}));
        assert!(sync.host().is_some());
        assert_eq!(*shown.borrow(), vec![(StepId::new("b"), None)]);
    }

    #[test]
    fn dispatch_applies_commands() {
        let channel = MemoryChannel::new();
        let mut sync = standalone(&channel);

        assert_eq!(sync.dispatch(NavCommand::Prev).unwrap(), "c");
        assert_eq!(sync.dispatch(NavCommand::Next).unwrap(), "a");
        assert_eq!(sync.dispatch(NavCommand::Goto("b".into())).unwrap(), "b");
        assert!(sync.dispatch(NavCommand::Goto("nope".into())).is_none());
    }

    #[test]
    fn host_calls_through_patched_surface_are_announced() {
        let channel = MemoryChannel::new();
        let (library, shown) = host();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .host(library)
            .build()
            .unwrap();
        channel.drain();

        let surface: &mut dyn HostNavigator = &mut sync;
        assert_eq!(surface.goto(&StepId::new("b"), Some(300)).unwrap(), "b");
        assert_eq!(surface.next().unwrap(), "c");
        assert_eq!(surface.prev().unwrap(), "b");
        assert!(surface.goto(&StepId::new("z"), None).is_none());
        assert_eq!(
            channel.drain(),
            vec![
                GotoEvent::new("b", Some(300)),
                GotoEvent::new("c", None),
                GotoEvent::new("b", None),
            ]
        );
        assert!(shown.borrow().is_empty());

        let original = sync.host().unwrap();
        assert_eq!(original.goto_original(&StepId::new("c"), None).unwrap(), "c");
        assert_eq!(channel.pending(), 0);
        assert_eq!(*shown.borrow(), vec![(StepId::new("c"), None)]);
    }

    #[test]
    fn remote_goto_accepts_any_numeric_duration() {
        let channel = MemoryChannel::new();
        let (library, shown) = host();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .host(library)
            .build()
            .unwrap();

        assert_eq!(sync.on_goto(&json!({"step": "b", "duration": 250.5})).unwrap(), "b");
        assert_eq!(sync.on_goto(&json!({"step": "c", "duration": -1})).unwrap(), "c");
        assert_eq!(sync.active().unwrap(), "c");
        assert_eq!(
            *shown.borrow(),
            vec![(StepId::new("b"), Some(251)), (StepId::new("c"), Some(0))]
        );
    }

    #[test]
    fn history_is_capped() {
        let channel = MemoryChannel::new();
        let mut sync = SynchronizerBuilder::new()
            .channel(channel.clone())
            .steps(steps!["a", "b", "c"])
            .standalone(true)
            .history_capacity(4)
            .build()
            .unwrap();

        for _ in 0..1_000 {
            sync.next();
        }

        assert_eq!(sync.history().len(), 4);
        assert_eq!(sync.history().capacity(), 4);
        assert_eq!(sync.active(), sync.history().last().map(|r| &r.to));
    }

    #[test]
    fn history_tracks_origins() {
        let channel = MemoryChannel::new();
        let mut sync = standalone(&channel);
        sync.next();
        sync.on_goto(&json!({"step": "c"}));

        let history = sync.history();
        assert_eq!(history.get_path(), vec!["a", "b", "c"]);
        assert_eq!(history.count(Origin::Local), 2);
        assert_eq!(history.count(Origin::Remote), 1);
    }
}
