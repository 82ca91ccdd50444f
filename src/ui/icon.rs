//! Inline SVG icon set.
//!
//! Stroke-based 24x24 glyphs rendered inline so the page needs no asset
//! pipeline; `currentColor` lets the surrounding text color them.

use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name from the [`icons`] module.
    name: &'static str,
    /// CSS classes for sizing/coloring.
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph(name)}
        </svg>
    }
}

/// Icon names used across the page.
#[allow(dead_code)]
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const ARROW_DOWN: &str = "arrow-down";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_UP: &str = "arrow-up";
    pub const ALERT_TRIANGLE: &str = "alert-triangle";
    pub const TRENDING_DOWN: &str = "trending-down";
    pub const TRENDING_UP: &str = "trending-up";
    pub const TREE: &str = "tree";
    pub const USERS: &str = "users";
    pub const RECYCLE: &str = "recycle";
    pub const THERMOMETER: &str = "thermometer";
    pub const HOME: &str = "home";
    pub const FACTORY: &str = "factory";
    pub const LIGHTBULB: &str = "lightbulb";
    pub const TARGET: &str = "target";
    pub const BAR_CHART: &str = "bar-chart";
    pub const LEAF: &str = "leaf";
    pub const GLOBE: &str = "globe";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHECK: &str = "check";
    pub const GITHUB: &str = "github";
    pub const TWITTER: &str = "twitter";
    pub const LINKEDIN: &str = "linkedin";
    pub const MAIL: &str = "mail";
}

fn glyph(name: &'static str) -> impl IntoView {
    match name {
        "menu" => view! {
            <line x1="4" y1="6" x2="20" y2="6" />
            <line x1="4" y1="12" x2="20" y2="12" />
            <line x1="4" y1="18" x2="20" y2="18" />
        }
        .into_any(),
        "x" => view! {
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        }
        .into_any(),
        "arrow-down" => view! {
            <line x1="12" y1="5" x2="12" y2="19" />
            <polyline points="19 12 12 19 5 12" />
        }
        .into_any(),
        "arrow-right" => view! {
            <line x1="5" y1="12" x2="19" y2="12" />
            <polyline points="12 5 19 12 12 19" />
        }
        .into_any(),
        "arrow-up" => view! {
            <line x1="12" y1="19" x2="12" y2="5" />
            <polyline points="5 12 12 5 19 12" />
        }
        .into_any(),
        "alert-triangle" => view! {
            <path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z" />
            <line x1="12" y1="9" x2="12" y2="13" />
            <line x1="12" y1="17" x2="12.01" y2="17" />
        }
        .into_any(),
        "trending-down" => view! {
            <polyline points="22 17 13.5 8.5 8.5 13.5 2 7" />
            <polyline points="16 17 22 17 22 11" />
        }
        .into_any(),
        "trending-up" => view! {
            <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
            <polyline points="16 7 22 7 22 13" />
        }
        .into_any(),
        "tree" => view! {
            <path d="M12 2l4 6h-2.5l3.5 5h-2.5l3 5H6.5l3-5H7.5L11 8H8.5L12 2z" />
            <line x1="12" y1="18" x2="12" y2="22" />
        }
        .into_any(),
        "users" => view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" />
            <circle cx="9" cy="7" r="4" />
            <path d="M23 21v-2a4 4 0 0 0-3-3.87" />
            <path d="M16 3.13a4 4 0 0 1 0 7.75" />
        }
        .into_any(),
        "recycle" => view! {
            <polyline points="23 4 23 10 17 10" />
            <polyline points="1 20 1 14 7 14" />
            <path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10" />
            <path d="M1 14l4.64 4.36A9 9 0 0 0 20.49 15" />
        }
        .into_any(),
        "thermometer" => view! {
            <path d="M14 14.76V3.5a2.5 2.5 0 0 0-5 0v11.26a4.5 4.5 0 1 0 5 0z" />
        }
        .into_any(),
        "home" => view! {
            <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
            <polyline points="9 22 9 12 15 12 15 22" />
        }
        .into_any(),
        "factory" => view! {
            <path d="M2 20a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8l-7 5V8l-7 5V4a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2z" />
            <line x1="7" y1="18" x2="8" y2="18" />
            <line x1="12" y1="18" x2="13" y2="18" />
            <line x1="17" y1="18" x2="18" y2="18" />
        }
        .into_any(),
        "lightbulb" => view! {
            <path d="M15.09 14c.18-.98.65-1.74 1.41-2.5A4.65 4.65 0 0 0 18 8 6 6 0 0 0 6 8c0 1 .23 2.23 1.5 3.5.76.76 1.23 1.52 1.41 2.5" />
            <line x1="9" y1="18" x2="15" y2="18" />
            <line x1="10" y1="22" x2="14" y2="22" />
        }
        .into_any(),
        "target" => view! {
            <circle cx="12" cy="12" r="10" />
            <circle cx="12" cy="12" r="6" />
            <circle cx="12" cy="12" r="2" />
        }
        .into_any(),
        "bar-chart" => view! {
            <line x1="12" y1="20" x2="12" y2="10" />
            <line x1="18" y1="20" x2="18" y2="4" />
            <line x1="6" y1="20" x2="6" y2="16" />
        }
        .into_any(),
        "leaf" => view! {
            <path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10z" />
            <path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12" />
        }
        .into_any(),
        "globe" => view! {
            <circle cx="12" cy="12" r="10" />
            <line x1="2" y1="12" x2="22" y2="12" />
            <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" />
        }
        .into_any(),
        "check-circle" => view! {
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
            <polyline points="22 4 12 14.01 9 11.01" />
        }
        .into_any(),
        "check" => view! {
            <polyline points="20 6 9 17 4 12" />
        }
        .into_any(),
        "github" => view! {
            <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" />
        }
        .into_any(),
        "twitter" => view! {
            <path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z" />
        }
        .into_any(),
        "linkedin" => view! {
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect x="2" y="9" width="4" height="12" />
            <circle cx="4" cy="4" r="2" />
        }
        .into_any(),
        "mail" => view! {
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="M22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        }
        .into_any(),
        _ => view! {
            <circle cx="12" cy="12" r="10" />
        }
        .into_any(),
    }
}
