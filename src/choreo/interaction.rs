//! Hover interaction pairs.
//!
//! A hover pair is two short timelines bound to one element: `enter` tweens
//! toward the emphasized state from wherever the element currently is, and
//! `leave` tweens back to explicit rest values. Because both capture the
//! current value as their start point and the channel rule lets the last
//! play win, a leave always reverses an incomplete enter deterministically
//! — the element can never get stuck mid-emphasis.

use crate::choreo::easing::Ease;
use crate::choreo::ids::TargetId;
use crate::choreo::property::{PropMap, Property};
use crate::choreo::timeline::{Step, Timeline};

/// Symmetric enter/leave timelines for one element.
#[derive(Clone, Debug)]
pub struct HoverPair {
    enter: Timeline,
    leave: Timeline,
}

impl HoverPair {
    /// Build a pair from the emphasized property set; the leave timeline
    /// targets each touched property's rest value.
    pub fn new(target: TargetId, emphasized: PropMap, duration: f32, ease: Ease) -> Self {
        let rest: PropMap = emphasized.iter().map(|(p, _)| (p, p.rest())).collect();
        let enter = Timeline::builder()
            .step(Step::to(target, emphasized, duration, ease))
            .build();
        let leave = Timeline::builder()
            .step(Step::to(target, rest, duration, ease))
            .build();
        Self { enter, leave }
    }

    /// Scale emphasis, the common case (nav links, social buttons).
    pub fn scale(target: TargetId, to_scale: f32, duration: f32, ease: Ease) -> Self {
        Self::new(
            target,
            PropMap::new().with(Property::Scale, to_scale),
            duration,
            ease,
        )
    }

    /// Lift emphasis: rise a few pixels while scaling slightly (cards).
    pub fn lift(target: TargetId, dy: f32, to_scale: f32, duration: f32, ease: Ease) -> Self {
        Self::new(
            target,
            PropMap::new()
                .with(Property::TranslateY, dy)
                .with(Property::Scale, to_scale),
            duration,
            ease,
        )
    }

    pub fn enter(&self) -> Timeline {
        self.enter.clone()
    }

    pub fn leave(&self) -> Timeline {
        self.leave.clone()
    }
}
