//! The rendering-host boundary.
//!
//! Everything the engine knows about the page comes through this trait:
//! element geometry and the scroll position in, visual property writes and
//! scroll-offset writes out. The DOM backend implements it over `web-sys`;
//! tests implement it over synthetic layout boxes.

use crate::choreo::ids::TargetId;
use crate::choreo::property::PropMap;

/// A target's box in viewport-relative coordinates (like
/// `getBoundingClientRect`): `top` is negative once the element has
/// scrolled past the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub height: f32,
}

impl Rect {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

pub trait RenderHost {
    /// Write the given resolved property values onto the target. Unknown
    /// targets are ignored.
    fn apply(&mut self, target: TargetId, props: &PropMap);

    /// Viewport-relative box of the target, or `None` if the target is not
    /// rendered (never bound, or removed from the document).
    fn rect(&self, target: TargetId) -> Option<Rect>;

    fn viewport_height(&self) -> f32;

    fn scroll_y(&self) -> f32;

    /// Write the document scroll offset (animated scrolling).
    fn set_scroll_y(&mut self, y: f32);

    /// Drop any host-side binding for the target. Called on scope disposal.
    fn forget(&mut self, _target: TargetId) {}
}
