//! Fixed top navigation: animated brand, staggered desktop links, a
//! scroll-dependent raised style and the mobile menu.

use leptos::html;
use leptos::prelude::*;

use crate::choreo::dom;
use crate::choreo::{
    Config, Ease, HoverPair, Offset, PropMap, Property, Repeat, Step, TargetId, Timeline, Trigger,
};
use crate::ui::icon::{Icon, icons};

/// In-page anchors, the only routes the page has.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("overview", "Overview"),
    ("environment", "Environment"),
    ("inequality", "Inequality"),
    ("sustainability", "Sustainability"),
    ("solutions", "Solutions"),
];

/// Entrance: the brand mark spins up, then the desktop links cascade in.
pub fn entrance_timeline(brand: TargetId, links: &[TargetId]) -> Timeline {
    let mut builder = Timeline::builder().step_at(
        Step::from_to(
            brand,
            PropMap::new()
                .with(Property::Scale, 0.0)
                .with(Property::Rotation, -180.0)
                .with(Property::Opacity, 0.0),
            PropMap::new()
                .with(Property::Scale, 1.0)
                .with(Property::Rotation, 0.0)
                .with(Property::Opacity, 1.0),
            1.0,
            Ease::BackOut(1.7),
        ),
        Offset::At(0.2),
    );
    for (i, link) in links.iter().copied().enumerate() {
        builder = builder.step_at(
            Step::from_to(
                link,
                PropMap::new()
                    .with(Property::TranslateY, -30.0)
                    .with(Property::Opacity, 0.0),
                PropMap::new()
                    .with(Property::TranslateY, 0.0)
                    .with(Property::Opacity, 1.0),
                0.6,
                Ease::QuadOut,
            ),
            Offset::At(0.5 + i as f32 * 0.1),
        );
    }
    builder.build()
}

/// Mobile panel reveal.
pub fn menu_panel_timeline(panel: TargetId) -> Timeline {
    Timeline::builder()
        .step(Step::from_to(
            panel,
            PropMap::new()
                .with(Property::Opacity, 0.0)
                .with(Property::TranslateY, -20.0)
                .with(Property::Scale, 0.95),
            PropMap::new()
                .with(Property::Opacity, 1.0)
                .with(Property::TranslateY, 0.0)
                .with(Property::Scale, 1.0),
            0.3,
            Ease::BackOut(1.7),
        ))
        .build()
}

/// Decorative glow on the brand dot; runs from mount to unmount.
pub fn brand_pulse_timeline(dot: TargetId) -> Timeline {
    Timeline::builder()
        .repeat(Repeat::Loop { yoyo: true })
        .step(Step::from_to(
            dot,
            PropMap::new()
                .with(Property::Scale, 1.0)
                .with(Property::Opacity, 1.0),
            PropMap::new()
                .with(Property::Scale, 1.15)
                .with(Property::Opacity, 0.7),
            1.2,
            Ease::SineInOut,
        ))
        .build()
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    let scope = dom::use_scope();

    let nav_ref: NodeRef<html::Nav> = NodeRef::new();
    let brand_ref: NodeRef<html::Div> = NodeRef::new();
    let dot_ref: NodeRef<html::Div> = NodeRef::new();
    let links_ref: NodeRef<html::Div> = NodeRef::new();
    let panel_ref: NodeRef<html::Div> = NodeRef::new();

    let link_targets: StoredValue<Vec<TargetId>> = StoredValue::new(Vec::new());
    let panel_target: StoredValue<Option<TargetId>> = StoredValue::new(None);
    let registered = StoredValue::new(false);

    Effect::new(move |_| {
        let (Some(nav), Some(brand), Some(dot), Some(links), Some(panel)) = (
            nav_ref.get(),
            brand_ref.get(),
            dot_ref.get(),
            links_ref.get(),
            panel_ref.get(),
        ) else {
            return;
        };
        if registered.get_value() {
            return;
        }
        registered.set_value(true);

        let nav_target = scope.register(&nav);
        let brand_target = scope.register(&brand);
        let dot_target = scope.register(&dot);
        panel_target.set_value(Some(scope.register(&panel)));

        let mut targets = Vec::new();
        let children = links.children();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                targets.push(scope.register(&child));
            }
        }
        link_targets.set_value(targets.clone());

        // The navbar is in view at mount, so this fires on the first
        // evaluation; it is still trigger-gated like every other region.
        scope.observe(Trigger::entrance(
            nav_target,
            1.0,
            entrance_timeline(brand_target, &targets),
        ));
        scope.play(brand_pulse_timeline(dot_target));

        // Raised style once the page scrolls past the threshold; the flag
        // flips exactly once per crossing.
        scope.on_scroll_watch(Config::default().nav_scroll_span, move |progress| {
            let raised = progress >= 1.0;
            if scrolled.get_untracked() != raised {
                set_scrolled.set(raised);
            }
        });
    });

    let hover_link = move |index: usize, enter: bool| {
        let Some(target) = link_targets.with_value(|t| t.get(index).copied()) else {
            return;
        };
        let pair = HoverPair::scale(target, 1.1, Config::default().hover_duration, Ease::QuadOut);
        scope.play(if enter { pair.enter() } else { pair.leave() });
    };

    let toggle_menu = move |_| {
        let opening = !menu_open.get_untracked();
        set_menu_open.set(opening);
        if opening {
            if let Some(target) = panel_target.get_value() {
                scope.play(menu_panel_timeline(target));
            }
        }
    };

    view! {
        <nav node_ref=nav_ref class="nav" class:nav--scrolled=move || scrolled.get()>
            <div class="nav__inner">
                <div node_ref=brand_ref class="nav__brand">
                    <div node_ref=dot_ref class="nav__dot" aria-hidden="true"></div>
                    <span class="nav__wordmark">"EconoImpact"</span>
                </div>

                // Desktop links
                <div node_ref=links_ref class="nav__links">
                    {NAV_LINKS
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(i, (anchor, label))| {
                            view! {
                                <a
                                    href=format!("#{anchor}")
                                    class="nav__link"
                                    on:mouseenter=move |_| hover_link(i, true)
                                    on:mouseleave=move |_| hover_link(i, false)
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        dom::scroll_to_anchor(anchor);
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn--hero btn--sm">"Get Started"</button>
                </div>

                // Mobile menu button
                <button
                    class="nav__burger"
                    on:click=toggle_menu
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get()
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon name=icons::X class="icon" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="icon" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile panel: stays in the tree, the open class reveals it and
            // the entrance timeline plays on each open.
            <div node_ref=panel_ref class="nav__mobile" class:nav__mobile--open=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .copied()
                    .map(|(anchor, label)| {
                        view! {
                            <a
                                href=format!("#{anchor}")
                                class="nav__mobile-link"
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.prevent_default();
                                    set_menu_open.set(false);
                                    dom::scroll_to_anchor(anchor);
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
                <button class="btn btn--hero btn--block">"Get Started"</button>
            </div>
        </nav>
    }
}
