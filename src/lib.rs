//! EconoImpact - a single-page site on the externalities of unconstrained
//! economic growth, built with Leptos and WebAssembly.
//!
//! All entrance, hover, and scroll choreography runs through the [`choreo`]
//! engine; the view components in [`ui`] only declare their timelines and
//! triggers against it.

pub mod app;
pub mod choreo;
pub mod ui;
