//! Timelines: ordered, time-scheduled sequences of property interpolations.
//!
//! Offsets are resolved once, at build time. The resulting schedule is
//! monotonic (steps sorted by start) and never starts before time zero:
//! malformed offset chains clamp to zero instead of failing.

use crate::choreo::easing::Ease;
use crate::choreo::ids::TargetId;
use crate::choreo::property::PropMap;

/// One property interpolation on one target.
#[derive(Clone, Debug)]
pub struct Step {
    pub target: TargetId,
    /// `None` captures the target's current values when the step first
    /// activates; required for deterministic hover reversal.
    pub from: Option<PropMap>,
    pub to: PropMap,
    /// Seconds; negative durations clamp to zero at build time.
    pub duration: f32,
    pub ease: Ease,
}

impl Step {
    /// Tween from the target's current values toward `to`.
    pub fn to(target: TargetId, to: PropMap, duration: f32, ease: Ease) -> Self {
        Self {
            target,
            from: None,
            to,
            duration,
            ease,
        }
    }

    /// Tween between explicit endpoints.
    pub fn from_to(target: TargetId, from: PropMap, to: PropMap, duration: f32, ease: Ease) -> Self {
        Self {
            target,
            from: Some(from),
            to,
            duration,
            ease,
        }
    }
}

/// Where a step starts relative to the steps added before it.
#[derive(Clone, Copy, Debug)]
pub enum Offset {
    /// Sequentially after everything added so far (the default).
    After,
    /// At an absolute time from the timeline start.
    At(f32),
    /// Overlap the end of the schedule so far by this many seconds.
    Overlap(f32),
    /// Start together with the previously added step.
    With,
}

/// Playback repetition of a whole timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repeat {
    Once,
    Loop { yoyo: bool },
}

/// Stagger scheduling order.
#[derive(Clone, Copy, Debug)]
pub enum StaggerOrder {
    Ordered,
    /// Seeded permutation of the ordered offsets; every target still gets
    /// exactly one distinct offset and the total duration is unchanged.
    Randomized { seed: u64 },
}

/// A step with its resolved start offset.
#[derive(Clone, Debug)]
pub(crate) struct Scheduled {
    pub(crate) step: Step,
    pub(crate) start: f32,
}

/// An ordered, time-scheduled sequence of property interpolations.
/// Immutable once built; cheap to clone.
#[derive(Clone, Debug)]
pub struct Timeline {
    pub(crate) steps: Vec<Scheduled>,
    pub(crate) duration: f32,
    pub(crate) repeat: Repeat,
}

impl Timeline {
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::new()
    }

    /// Total scheduled duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Resolved start offsets in schedule order.
    pub fn start_offsets(&self) -> Vec<f32> {
        self.steps.iter().map(|s| s.start).collect()
    }

    /// Replicate one step template across `targets`, offsetting target `i`
    /// by `perm(i) * increment`. The group's total duration is
    /// `duration + (N-1) * increment` in both orders.
    pub fn stagger(
        targets: &[TargetId],
        from: Option<PropMap>,
        to: PropMap,
        duration: f32,
        ease: Ease,
        increment: f32,
        order: StaggerOrder,
    ) -> Timeline {
        let increment = increment.max(0.0);
        let mut slots: Vec<usize> = (0..targets.len()).collect();
        if let StaggerOrder::Randomized { seed } = order {
            shuffle(&mut slots, seed);
        }
        let mut builder = TimelineBuilder::new();
        for (i, target) in targets.iter().enumerate() {
            let step = Step {
                target: *target,
                from: from.clone(),
                to: to.clone(),
                duration,
                ease,
            };
            builder = builder.step_at(step, Offset::At(slots[i] as f32 * increment));
        }
        builder.build()
    }
}

/// Resolves offsets into a monotonic schedule.
pub struct TimelineBuilder {
    steps: Vec<Scheduled>,
    end: f32,
    last_start: f32,
    repeat: Repeat,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            end: 0.0,
            last_start: 0.0,
            repeat: Repeat::Once,
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Add a step sequentially after everything added so far.
    pub fn step(self, step: Step) -> Self {
        self.step_at(step, Offset::After)
    }

    /// Add a step at an explicit offset. Starts resolve at build time and
    /// clamp to zero; negative durations clamp to zero.
    pub fn step_at(mut self, mut step: Step, offset: Offset) -> Self {
        step.duration = step.duration.max(0.0);
        let start = match offset {
            Offset::After => self.end,
            Offset::At(t) => t,
            Offset::Overlap(d) => self.end - d,
            Offset::With => self.last_start,
        }
        .max(0.0);
        self.last_start = start;
        self.end = self.end.max(start + step.duration);
        self.steps.push(Scheduled { step, start });
        self
    }

    pub fn build(mut self) -> Timeline {
        // Stable sort: concurrent steps keep insertion order.
        self.steps
            .sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(std::cmp::Ordering::Equal));
        Timeline {
            steps: self.steps,
            duration: self.end,
            repeat: self.repeat,
        }
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fisher-Yates with a splitmix64 stream; deterministic for a given seed.
fn shuffle(slots: &mut [usize], seed: u64) {
    let mut state = seed.wrapping_add(0x9e3779b97f4a7c15);
    let mut next = move || {
        state = state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    };
    for i in (1..slots.len()).rev() {
        let j = (next() % (i as u64 + 1)) as usize;
        slots.swap(i, j);
    }
}
