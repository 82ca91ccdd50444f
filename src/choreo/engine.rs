//! The Choreographer: scope bookkeeping, timeline playback, channel
//! ownership and the per-frame pass.
//!
//! One `tick` per rendered frame does everything: advance the scroll
//! animation, evaluate triggers (only when scroll/resize marked the
//! geometry dirty), then sample every playback and write the resolved
//! property values through the host. Trigger notifications are *returned*
//! rather than called, so the embedding layer can dispatch them after the
//! engine borrow ends.
//!
//! Channel rule: a `(target, property)` pair belongs to the most recent
//! playback that touches it. Older playbacks keep running but silently stop
//! writing stolen channels, which is what makes replays and hover
//! enter/leave pairs deterministic — the last play wins, nothing stacks.

use std::collections::{BTreeMap, HashMap};

use crate::choreo::config::Config;
use crate::choreo::easing::{Ease, lerp};
use crate::choreo::host::RenderHost;
use crate::choreo::ids::{IdGen, PlaybackId, ScopeId, SubId, TargetId};
use crate::choreo::property::{PropMap, Property};
use crate::choreo::scroll::ScrollAnimation;
use crate::choreo::timeline::{Repeat, Timeline};
use crate::choreo::trigger::{
    Measure, ScrubState, Trigger, TriggerAction, TriggerMode, TriggerTarget, measure_element,
    measure_viewport,
};

/// A notification produced by a `Notify` trigger, returned from `tick`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerEvent {
    pub sub: SubId,
    pub kind: TriggerEventKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerEventKind {
    /// A one-shot trigger fired (at most once per mount).
    Fired,
    /// A continuous trigger's normalized progress changed.
    Progress(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DriveMode {
    /// Advanced by the frame clock.
    Clock,
    /// Positioned externally by a scrub trigger; never self-completes.
    Scrub,
}

struct Playback {
    timeline: Timeline,
    elapsed: f32,
    drive: DriveMode,
    /// Resolved `from` endpoints per scheduled step. Explicit endpoints are
    /// filled at spawn; capture-current steps fill in lazily when they
    /// first activate.
    from_cache: Vec<Option<PropMap>>,
}

enum SubAction {
    /// One-shot: play this timeline when the trigger fires.
    PlayOnce(Timeline),
    /// Scrub: position this playback at `progress * duration`.
    Drive(PlaybackId),
    Notify,
}

struct Subscription {
    scope: ScopeId,
    target: TriggerTarget,
    threshold: f32,
    mode: TriggerMode,
    action: SubAction,
    scrub_state: ScrubState,
    last_progress: Option<f32>,
}

#[derive(Default)]
struct ScopeData {
    targets: Vec<TargetId>,
    playbacks: Vec<PlaybackId>,
    subs: Vec<SubId>,
}

pub struct Engine<H: RenderHost> {
    host: H,
    config: Config,
    ids: IdGen,
    scopes: BTreeMap<ScopeId, ScopeData>,
    playbacks: BTreeMap<PlaybackId, Playback>,
    subs: BTreeMap<SubId, Subscription>,
    channels: HashMap<(TargetId, Property), PlaybackId>,
    current: HashMap<(TargetId, Property), f32>,
    scroll_anim: Option<ScrollAnimation>,
    dirty: bool,
}

impl<H: RenderHost> Engine<H> {
    pub fn new(host: H, config: Config) -> Self {
        Self {
            host,
            config,
            ids: IdGen::new(),
            scopes: BTreeMap::new(),
            playbacks: BTreeMap::new(),
            subs: BTreeMap::new(),
            channels: HashMap::new(),
            current: HashMap::new(),
            scroll_anim: None,
            // Evaluate triggers on the first tick after startup.
            dirty: true,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // ----- scopes and targets -------------------------------------------

    pub fn create_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.ids.next());
        self.scopes.insert(id, ScopeData::default());
        id
    }

    /// Allocate a target handle owned by `scope`. The caller binds it on
    /// the host side (element registry, mock layout, ...).
    pub fn register_target(&mut self, scope: ScopeId) -> TargetId {
        let Some(data) = self.scopes.get_mut(&scope) else {
            return TargetId::DEAD;
        };
        let id = TargetId(self.ids.next());
        data.targets.push(id);
        id
    }

    /// Tear down everything the scope registered: cancel playbacks, detach
    /// subscriptions, forget targets. Returns the ids of removed `Notify`
    /// subscriptions so the embedding layer can drop their callbacks — no
    /// callback may fire after this returns.
    pub fn dispose_scope(&mut self, scope: ScopeId) -> Vec<SubId> {
        let Some(data) = self.scopes.remove(&scope) else {
            return Vec::new();
        };
        for pb in &data.playbacks {
            self.cancel(*pb);
        }
        let mut notify_subs = Vec::new();
        for sub in data.subs {
            if let Some(s) = self.subs.remove(&sub) {
                match s.action {
                    SubAction::Drive(pb) => self.cancel(pb),
                    SubAction::Notify => notify_subs.push(sub),
                    SubAction::PlayOnce(_) => {}
                }
            }
        }
        for target in data.targets {
            self.host.forget(target);
            self.current.retain(|(t, _), _| *t != target);
            self.channels.retain(|(t, _), _| *t != target);
        }
        notify_subs
    }

    // ----- playback ------------------------------------------------------

    /// Play a timeline in `scope`. Fire-and-forget: if no step target
    /// resolves to a live element this is a silent no-op returning a dead
    /// handle. The new playback claims every `(target, property)` channel
    /// it touches.
    pub fn play(&mut self, scope: ScopeId, timeline: Timeline) -> PlaybackId {
        self.spawn(scope, timeline, DriveMode::Clock)
    }

    /// Restart a playback from time zero, re-claiming its channels. No-op
    /// on dead or finished handles.
    pub fn replay(&mut self, id: PlaybackId) {
        let Self {
            playbacks, channels, ..
        } = self;
        let Some(pb) = playbacks.get_mut(&id) else {
            return;
        };
        pb.elapsed = 0.0;
        for (idx, sched) in pb.timeline.steps.iter().enumerate() {
            // Capture-current steps re-capture on the restarted run.
            pb.from_cache[idx] = sched.step.from.clone();
            for (prop, _) in sched.step.to.iter() {
                channels.insert((sched.step.target, prop), id);
            }
        }
    }

    pub fn cancel(&mut self, id: PlaybackId) {
        if self.playbacks.remove(&id).is_some() {
            self.channels.retain(|_, owner| *owner != id);
        }
    }

    pub fn active_playback_count(&self) -> usize {
        self.playbacks.len()
    }

    fn spawn(&mut self, scope: ScopeId, timeline: Timeline, drive: DriveMode) -> PlaybackId {
        if !self.scopes.contains_key(&scope) {
            return PlaybackId::DEAD;
        }
        let any_live = timeline
            .steps
            .iter()
            .any(|s| self.host.rect(s.step.target).is_some());
        if !any_live {
            return PlaybackId::DEAD;
        }
        let id = PlaybackId(self.ids.next());
        let mut from_cache = Vec::with_capacity(timeline.steps.len());
        let mut initial: BTreeMap<TargetId, PropMap> = BTreeMap::new();
        for sched in &timeline.steps {
            for (prop, _) in sched.step.to.iter() {
                self.channels.insert((sched.step.target, prop), id);
            }
            from_cache.push(sched.step.from.clone());
            // Explicit endpoints render immediately so later steps do not
            // flash their final state before activating.
            if let Some(from) = &sched.step.from {
                if self.host.rect(sched.step.target).is_some() {
                    let entry = initial.entry(sched.step.target).or_default();
                    for (prop, value) in from.iter() {
                        entry.set(prop, value);
                    }
                }
            }
        }
        self.playbacks.insert(
            id,
            Playback {
                timeline,
                elapsed: 0.0,
                drive,
                from_cache,
            },
        );
        if let Some(data) = self.scopes.get_mut(&scope) {
            data.playbacks.push(id);
        }
        for (target, props) in initial {
            self.write(target, &props);
        }
        id
    }

    /// Commit values for one target: update the value store and hand the
    /// host the full known set (so transform composition stays complete).
    /// Skips the host write when nothing changed.
    fn write(&mut self, target: TargetId, props: &PropMap) {
        let mut changed = false;
        for (prop, value) in props.iter() {
            if self.current.get(&(target, prop)) != Some(&value) {
                self.current.insert((target, prop), value);
                changed = true;
            }
        }
        if changed {
            let mut full = PropMap::new();
            for prop in Property::ALL {
                if let Some(value) = self.current.get(&(target, prop)) {
                    full.set(prop, *value);
                }
            }
            self.host.apply(target, &full);
        }
    }

    // ----- triggers ------------------------------------------------------

    pub fn observe(&mut self, scope: ScopeId, trigger: Trigger) -> SubId {
        if !self.scopes.contains_key(&scope) {
            return SubId::DEAD;
        }
        let action = match (trigger.mode, trigger.action) {
            (TriggerMode::Once, TriggerAction::Animate(tl)) => SubAction::PlayOnce(tl),
            (TriggerMode::Scrub, TriggerAction::Animate(tl)) => {
                SubAction::Drive(self.spawn(scope, tl, DriveMode::Scrub))
            }
            (_, TriggerAction::Notify) => SubAction::Notify,
        };
        let id = SubId(self.ids.next());
        self.subs.insert(
            id,
            Subscription {
                scope,
                target: trigger.target,
                threshold: trigger.threshold,
                mode: trigger.mode,
                action,
                scrub_state: ScrubState::Inactive,
                last_progress: None,
            },
        );
        if let Some(data) = self.scopes.get_mut(&scope) {
            data.subs.push(id);
        }
        self.dirty = true;
        id
    }

    pub fn unobserve(&mut self, sub: SubId) {
        if let Some(s) = self.subs.remove(&sub) {
            if let SubAction::Drive(pb) = s.action {
                self.cancel(pb);
            }
        }
    }

    pub fn subscription_count(&self) -> usize {
        self.subs.len()
    }

    pub fn has_subscription(&self, sub: SubId) -> bool {
        self.subs.contains_key(&sub)
    }

    /// Scroll or resize happened; geometry is re-evaluated on the next tick
    /// (at most once per frame).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ----- scroll --------------------------------------------------------

    /// Animate the document scroll offset. Replaces any in-flight scroll
    /// animation: the most recent request wins.
    pub fn scroll_to(&mut self, y: f32, duration: f32, ease: Ease) {
        self.scroll_anim = Some(ScrollAnimation::new(self.host.scroll_y(), y, duration, ease));
    }

    /// The user scrolled by hand; an in-flight scroll animation yields.
    pub fn user_scrolled(&mut self) {
        self.scroll_anim = None;
        self.dirty = true;
    }

    pub fn scroll_animation_target(&self) -> Option<f32> {
        self.scroll_anim.as_ref().map(|a| a.target())
    }

    // ----- the frame pass ------------------------------------------------

    /// One frame: `dt` in seconds since the previous tick. Returns the
    /// notifications to dispatch.
    pub fn tick(&mut self, dt: f32) -> Vec<TriggerEvent> {
        let dt = dt.clamp(0.0, self.config.max_frame_delta);

        if let Some(mut anim) = self.scroll_anim.take() {
            let (y, done) = anim.advance(dt);
            self.host.set_scroll_y(y);
            self.dirty = true;
            if !done {
                self.scroll_anim = Some(anim);
            }
        }

        let events = if self.dirty {
            self.dirty = false;
            self.evaluate_triggers()
        } else {
            Vec::new()
        };

        self.advance_playbacks(dt);
        events
    }

    fn evaluate_triggers(&mut self) -> Vec<TriggerEvent> {
        enum Removal {
            Fired,
            Dead,
        }

        let vh = self.host.viewport_height();
        let scroll_y = self.host.scroll_y();

        let mut events = Vec::new();
        let mut removals: Vec<(SubId, Removal)> = Vec::new();
        let mut drives: Vec<(PlaybackId, f32)> = Vec::new();

        let ids: Vec<SubId> = self.subs.keys().copied().collect();
        for id in ids {
            let Some(sub) = self.subs.get_mut(&id) else {
                continue;
            };
            let measure: Measure = match sub.target {
                TriggerTarget::Element(target) => match self.host.rect(target) {
                    // Target left the document: auto-unobserve, the
                    // callback never fires again.
                    None => {
                        removals.push((id, Removal::Dead));
                        continue;
                    }
                    Some(rect) => measure_element(rect, vh, sub.threshold),
                },
                TriggerTarget::Viewport { span_px } => measure_viewport(scroll_y, span_px),
            };

            match sub.mode {
                TriggerMode::Once => {
                    if measure.entered {
                        removals.push((id, Removal::Fired));
                    }
                }
                TriggerMode::Scrub => {
                    let now = if measure.intersecting {
                        ScrubState::Active
                    } else {
                        ScrubState::Inactive
                    };
                    let state_changed = now != sub.scrub_state;
                    sub.scrub_state = now;
                    // Report while intersecting, plus once on the way out so
                    // the scrubbed value settles at the boundary. Duplicate
                    // progress values are coalesced.
                    if (now == ScrubState::Active || state_changed)
                        && sub.last_progress != Some(measure.progress)
                    {
                        sub.last_progress = Some(measure.progress);
                        match &sub.action {
                            SubAction::Drive(pb) => drives.push((*pb, measure.progress)),
                            SubAction::Notify => events.push(TriggerEvent {
                                sub: id,
                                kind: TriggerEventKind::Progress(measure.progress),
                            }),
                            SubAction::PlayOnce(_) => {}
                        }
                    }
                }
            }
        }

        for (id, removal) in removals {
            let Some(sub) = self.subs.remove(&id) else {
                continue;
            };
            match (removal, sub.action) {
                (Removal::Fired, SubAction::PlayOnce(timeline)) => {
                    self.spawn(sub.scope, timeline, DriveMode::Clock);
                }
                (Removal::Fired, SubAction::Notify) => events.push(TriggerEvent {
                    sub: id,
                    kind: TriggerEventKind::Fired,
                }),
                (_, SubAction::Drive(pb)) => self.cancel(pb),
                _ => {}
            }
        }

        for (pb, progress) in drives {
            if let Some(playback) = self.playbacks.get_mut(&pb) {
                playback.elapsed = progress * playback.timeline.duration;
            }
        }

        events
    }

    fn advance_playbacks(&mut self, dt: f32) {
        let Self {
            playbacks,
            host,
            channels,
            current,
            ..
        } = self;

        let mut pending: BTreeMap<TargetId, PropMap> = BTreeMap::new();
        let mut finished: Vec<PlaybackId> = Vec::new();

        for (&id, pb) in playbacks.iter_mut() {
            if pb.drive == DriveMode::Clock {
                pb.elapsed += dt;
            }
            let duration = pb.timeline.duration;
            let pos = timeline_pos(pb.elapsed, duration, pb.timeline.repeat);
            let done = pb.drive == DriveMode::Clock
                && pb.timeline.repeat == Repeat::Once
                && pb.elapsed >= duration;

            for (idx, sched) in pb.timeline.steps.iter().enumerate() {
                let target = sched.step.target;
                // Unrendered targets are silently skipped (policy: never
                // fail the caller over a missing element).
                if host.rect(target).is_none() {
                    continue;
                }
                let local = if pos < sched.start {
                    // Before activation: explicit endpoints hold their
                    // `from` state (also where a reversed scrub lands);
                    // capture-current steps have nothing to say yet.
                    if pb.from_cache[idx].is_none() {
                        continue;
                    }
                    0.0
                } else if sched.step.duration <= f32::EPSILON {
                    1.0
                } else {
                    ((pos - sched.start) / sched.step.duration).clamp(0.0, 1.0)
                };
                if pb.from_cache[idx].is_none() {
                    let mut captured = PropMap::new();
                    for (prop, _) in sched.step.to.iter() {
                        let value = current
                            .get(&(target, prop))
                            .copied()
                            .unwrap_or_else(|| prop.rest());
                        captured.set(prop, value);
                    }
                    pb.from_cache[idx] = Some(captured);
                }
                let Some(from) = pb.from_cache[idx].as_ref() else {
                    continue;
                };
                let eased = sched.step.ease.eval(local);
                for (prop, to_value) in sched.step.to.iter() {
                    if channels.get(&(target, prop)) == Some(&id) {
                        // Land exactly on the endpoint: a lerp at t=1 can
                        // miss by a ULP, and the final state must be exact.
                        let value = if local >= 1.0 {
                            to_value
                        } else {
                            lerp(from.get_or_rest(prop), to_value, eased)
                        };
                        pending.entry(target).or_default().set(prop, value);
                    }
                }
            }

            if done {
                finished.push(id);
            }
        }

        // Commit per-target, skipping unchanged values.
        for (target, props) in pending {
            let mut changed = false;
            for (prop, value) in props.iter() {
                if current.get(&(target, prop)) != Some(&value) {
                    current.insert((target, prop), value);
                    changed = true;
                }
            }
            if changed {
                let mut full = PropMap::new();
                for prop in Property::ALL {
                    if let Some(value) = current.get(&(target, prop)) {
                        full.set(prop, *value);
                    }
                }
                host.apply(target, &full);
            }
        }

        for id in finished {
            playbacks.remove(&id);
            channels.retain(|_, owner| *owner != id);
        }
    }
}

/// Map a playback's elapsed clock onto a position inside the timeline.
fn timeline_pos(elapsed: f32, duration: f32, repeat: Repeat) -> f32 {
    if duration <= f32::EPSILON {
        return 0.0;
    }
    match repeat {
        Repeat::Once => elapsed.min(duration),
        Repeat::Loop { yoyo: false } => elapsed % duration,
        Repeat::Loop { yoyo: true } => {
            let phase = elapsed % (2.0 * duration);
            if phase > duration {
                2.0 * duration - phase
            } else {
                phase
            }
        }
    }
}
