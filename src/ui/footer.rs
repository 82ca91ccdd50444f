//! Footer: brand block, link columns, newsletter signup and the animated
//! scroll-to-top action.

use leptos::html;
use leptos::prelude::*;

use crate::choreo::dom;
use crate::choreo::{
    Config, Ease, HoverPair, PropMap, Property, Step, TargetId, Timeline, Trigger,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::brand_pulse_timeline;

/// (column title, [(label, anchor or None)]).
const FOOTER_COLUMNS: [(&str, [(&str, Option<&str>); 4]); 3] = [
    (
        "Learn",
        [
            ("Environmental Impact", Some("environment")),
            ("Social Inequality", Some("inequality")),
            ("Resource Depletion", Some("sustainability")),
            ("Solutions", Some("solutions")),
        ],
    ),
    (
        "Resources",
        [
            ("Research Papers", None),
            ("Case Studies", None),
            ("Data Sources", None),
            ("Further Reading", None),
        ],
    ),
    (
        "Connect",
        [
            ("Newsletter", None),
            ("Community", None),
            ("Contact Us", None),
            ("Feedback", None),
        ],
    ),
];

const SOCIAL_ICONS: [&str; 4] = [icons::TWITTER, icons::LINKEDIN, icons::GITHUB, icons::MAIL];

/// Whole-footer fade-up.
pub fn entrance_timeline(inner: TargetId) -> Timeline {
    Timeline::builder()
        .step(Step::from_to(
            inner,
            PropMap::new()
                .with(Property::TranslateY, 40.0)
                .with(Property::Opacity, 0.0),
            PropMap::new()
                .with(Property::TranslateY, 0.0)
                .with(Property::Opacity, 1.0),
            0.9,
            Ease::QuadOut,
        ))
        .build()
}

#[component]
pub fn Footer() -> impl IntoView {
    let scope = dom::use_scope();

    let inner_ref: NodeRef<html::Div> = NodeRef::new();
    let dot_ref: NodeRef<html::Div> = NodeRef::new();
    let socials_ref: NodeRef<html::Div> = NodeRef::new();

    let social_targets: StoredValue<Vec<TargetId>> = StoredValue::new(Vec::new());
    let registered = StoredValue::new(false);

    Effect::new(move |_| {
        let (Some(inner), Some(dot), Some(socials)) =
            (inner_ref.get(), dot_ref.get(), socials_ref.get())
        else {
            return;
        };
        if registered.get_value() {
            return;
        }
        registered.set_value(true);

        let inner_target = scope.register(&inner);
        scope.observe(Trigger::entrance(
            inner_target,
            Config::default().section_threshold,
            entrance_timeline(inner_target),
        ));
        scope.play(brand_pulse_timeline(scope.register(&dot)));

        let mut targets = Vec::new();
        let children = socials.children();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                targets.push(scope.register(&child));
            }
        }
        social_targets.set_value(targets);
    });

    let hover_social = move |index: usize, enter: bool| {
        let Some(target) = social_targets.with_value(|t| t.get(index).copied()) else {
            return;
        };
        let pair = HoverPair::scale(target, 1.1, Config::default().hover_duration, Ease::QuadOut);
        scope.play(if enter { pair.enter() } else { pair.leave() });
    };

    view! {
        <footer class="footer">
            <div node_ref=inner_ref class="footer__inner">
                <div class="footer__grid">
                    <div class="footer__brand">
                        <div class="footer__brand-row">
                            <div node_ref=dot_ref class="footer__dot" aria-hidden="true"></div>
                            <span class="footer__wordmark">"EconoImpact"</span>
                        </div>
                        <p class="footer__tagline">
                            "Educating minds about the hidden costs of unlimited economic \
                             growth and exploring pathways to a sustainable future."
                        </p>
                        <div node_ref=socials_ref class="footer__socials">
                            {SOCIAL_ICONS
                                .iter()
                                .copied()
                                .enumerate()
                                .map(|(i, icon)| {
                                    view! {
                                        <button
                                            class="btn btn--ghost btn--icon"
                                            on:mouseenter=move |_| hover_social(i, true)
                                            on:mouseleave=move |_| hover_social(i, false)
                                        >
                                            <Icon name=icon class="icon" />
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|(column, links)| {
                            view! {
                                <div class="footer__column">
                                    <h4 class="footer__column-title">{*column}</h4>
                                    <ul class="footer__links">
                                        {links
                                            .iter()
                                            .copied()
                                            .map(|(label, anchor)| {
                                                view! {
                                                    <li>
                                                        <a
                                                            href=anchor.map(|a| format!("#{a}")).unwrap_or_else(|| "#".into())
                                                            class="footer__link"
                                                            on:click=move |ev: leptos::ev::MouseEvent| {
                                                                ev.prevent_default();
                                                                if let Some(anchor) = anchor {
                                                                    dom::scroll_to_anchor(anchor);
                                                                }
                                                            }
                                                        >
                                                            {label}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer__newsletter">
                    <Icon name=icons::LEAF class="icon icon--primary" />
                    <h4>"Stay Informed"</h4>
                    <p>"Get updates on sustainable economics and environmental policy."</p>
                    <form class="footer__signup" on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                        <input type="email" placeholder="Enter your email" class="footer__email" />
                        <button type="submit" class="btn btn--hero btn--sm">"Subscribe"</button>
                    </form>
                </div>

                <div class="footer__bottom">
                    <span class="footer__copyright">
                        "© 2024 EconoImpact. Educational content for a sustainable future."
                    </span>
                    <div class="footer__bottom-actions">
                        <button class="btn btn--ghost btn--sm">"Privacy Policy"</button>
                        <button class="btn btn--ghost btn--sm">"Terms of Use"</button>
                        <button
                            class="btn btn--ghost btn--icon"
                            aria-label="Back to top"
                            on:click=move |_| dom::scroll_to_top()
                        >
                            <Icon name=icons::ARROW_UP class="icon" />
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
