//! Viewport triggers: visibility-gated one-shots and scroll-scrubbed
//! continuous subscriptions.
//!
//! The state machines live here; the engine drives them once per frame
//! (never synchronously from raw scroll events) and executes the resulting
//! actions.

use crate::choreo::host::Rect;
use crate::choreo::ids::TargetId;
use crate::choreo::timeline::Timeline;

/// What a trigger watches.
#[derive(Clone, Copy, Debug)]
pub enum TriggerTarget {
    /// One element's box against the viewport.
    Element(TargetId),
    /// The whole document's scroll position; progress is
    /// `scroll_y / span_px`, clamped to [0,1].
    Viewport { span_px: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerMode {
    /// Fires at most once per mount, then auto-unobserves.
    Once,
    /// Reports normalized progress on every scroll update while the target
    /// intersects; symmetric under scroll reversal, no fired-memory.
    Scrub,
}

/// What happens when the trigger fires or scrubs.
pub enum TriggerAction {
    /// The engine plays (Once) or position-drives (Scrub) this timeline in
    /// the subscribing scope.
    Animate(Timeline),
    /// A `TriggerEvent` is returned from `tick` for the caller to dispatch.
    Notify,
}

/// A registered viewport gate. One target, one action.
pub struct Trigger {
    pub target: TriggerTarget,
    /// Enter line as a fraction of viewport height (element targets only):
    /// the trigger is entered once the element's top reaches
    /// `viewport_height * threshold`.
    pub threshold: f32,
    pub mode: TriggerMode,
    pub action: TriggerAction,
}

impl Trigger {
    /// One-shot entrance: play `timeline` when `target` becomes visible.
    pub fn entrance(target: TargetId, threshold: f32, timeline: Timeline) -> Self {
        Self {
            target: TriggerTarget::Element(target),
            threshold,
            mode: TriggerMode::Once,
            action: TriggerAction::Animate(timeline),
        }
    }

    /// Scroll-scrubbed timeline: progress through the viewport drives the
    /// timeline position directly.
    pub fn scrub(target: TargetId, threshold: f32, timeline: Timeline) -> Self {
        Self {
            target: TriggerTarget::Element(target),
            threshold,
            mode: TriggerMode::Scrub,
            action: TriggerAction::Animate(timeline),
        }
    }

    /// Continuous document-scroll watcher reporting progress over `span_px`.
    pub fn scroll_watch(span_px: f32) -> Self {
        Self {
            target: TriggerTarget::Viewport { span_px },
            threshold: 1.0,
            mode: TriggerMode::Scrub,
            action: TriggerAction::Notify,
        }
    }

    /// One-shot visibility notification.
    pub fn notify_once(target: TargetId, threshold: f32) -> Self {
        Self {
            target: TriggerTarget::Element(target),
            threshold,
            mode: TriggerMode::Once,
            action: TriggerAction::Notify,
        }
    }
}

/// Continuous-trigger intersection state (`inactive ⇄ active`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ScrubState {
    Inactive,
    Active,
}

/// What one evaluation pass observed about a trigger's target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Measure {
    /// The enter line has been reached.
    pub(crate) entered: bool,
    /// The target currently intersects the viewport (continuous triggers
    /// only report progress while this holds).
    pub(crate) intersecting: bool,
    /// Normalized progress through the trigger span, clamped to [0,1].
    pub(crate) progress: f32,
}

/// Measure an element target. `threshold` is the enter-line fraction;
/// progress runs from the enter line to the element's bottom leaving the
/// viewport top.
pub(crate) fn measure_element(rect: Rect, viewport_height: f32, threshold: f32) -> Measure {
    let enter_line = viewport_height * threshold.clamp(0.0, 1.0);
    let entered = rect.top <= enter_line;
    let intersecting = rect.bottom() > 0.0 && rect.top < viewport_height;
    let span = enter_line + rect.height;
    let progress = if span <= f32::EPSILON {
        if entered { 1.0 } else { 0.0 }
    } else {
        ((enter_line - rect.top) / span).clamp(0.0, 1.0)
    };
    Measure {
        entered,
        intersecting,
        progress,
    }
}

/// Measure the document-scroll target.
pub(crate) fn measure_viewport(scroll_y: f32, span_px: f32) -> Measure {
    let progress = if span_px <= f32::EPSILON {
        if scroll_y > 0.0 { 1.0 } else { 0.0 }
    } else {
        (scroll_y / span_px).clamp(0.0, 1.0)
    };
    Measure {
        entered: progress >= 1.0,
        // The document is always on screen.
        intersecting: true,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_progress_spans_enter_line_to_exit() {
        let vh = 1000.0;
        // Enter line at 80% of the viewport: 800px.
        let before = measure_element(Rect { top: 900.0, height: 200.0 }, vh, 0.8);
        assert!(!before.entered);
        assert_eq!(before.progress, 0.0);

        let at_line = measure_element(Rect { top: 720.0, height: 200.0 }, vh, 0.8);
        assert!(at_line.entered);
        assert_eq!(at_line.progress, 0.0);

        let gone = measure_element(Rect { top: -200.0, height: 200.0 }, vh, 0.8);
        assert!(!gone.intersecting);
        assert_eq!(gone.progress, 1.0);
    }

    #[test]
    fn element_progress_is_monotone_in_scroll() {
        let vh = 1000.0;
        let mut last = -1.0;
        // Scrolling forward moves the box upward through the viewport.
        for top in (-300..=900).rev().step_by(50) {
            let m = measure_element(
                Rect {
                    top: top as f32,
                    height: 300.0,
                },
                vh,
                0.8,
            );
            assert!(m.progress >= last);
            assert!((0.0..=1.0).contains(&m.progress));
            last = m.progress;
        }
    }

    #[test]
    fn viewport_progress_clamps_to_span() {
        assert_eq!(measure_viewport(0.0, 50.0).progress, 0.0);
        assert_eq!(measure_viewport(25.0, 50.0).progress, 0.5);
        assert_eq!(measure_viewport(100.0, 50.0).progress, 1.0);
        assert!(measure_viewport(100.0, 50.0).entered);
        // Degenerate span never divides by zero.
        assert_eq!(measure_viewport(10.0, 0.0).progress, 1.0);
    }
}
