//! Scroll-driven animation choreography.
//!
//! Host-agnostic core (timelines, triggers, the engine) plus the `web-sys`
//! backend in [`dom`]. The core never touches the browser: all geometry
//! and style traffic crosses the [`host::RenderHost`] boundary, which is
//! what keeps the whole engine natively testable.

pub mod config;
pub mod dom;
pub mod easing;
pub mod engine;
pub mod host;
pub mod ids;
pub mod interaction;
pub mod property;
pub mod scroll;
pub mod timeline;
pub mod trigger;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use easing::Ease;
pub use engine::{Engine, TriggerEvent, TriggerEventKind};
pub use host::{Rect, RenderHost};
pub use ids::{PlaybackId, ScopeId, SubId, TargetId};
pub use interaction::HoverPair;
pub use property::{PropMap, Property};
pub use timeline::{Offset, Repeat, StaggerOrder, Step, Timeline, TimelineBuilder};
pub use trigger::{Trigger, TriggerAction, TriggerMode, TriggerTarget};
