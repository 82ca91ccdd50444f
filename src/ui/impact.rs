//! Impact showcase: three alternating rows (environment, inequality,
//! resource depletion), each sliding in from its own side with a subtle
//! scroll-linked parallax on the visual panel.

use leptos::html;
use leptos::prelude::*;

use crate::choreo::dom;
use crate::choreo::{
    Config, Ease, HoverPair, Offset, PropMap, Property, Step, TargetId, Timeline, Trigger,
};
use crate::ui::icon::{Icon, icons};

struct Impact {
    /// In-page anchor id.
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    visual_class: &'static str,
    /// (icon, value, caption) stat cards.
    stats: [(&'static str, &'static str, &'static str); 2],
}

static IMPACTS: [Impact; 3] = [
    Impact {
        id: "environment",
        title: "Environmental Degradation",
        description: "Unchecked growth accelerates climate change, pollution, and \
                      biodiversity loss, threatening our planet's life-supporting systems.",
        icon: icons::TREE,
        visual_class: "impact__visual--environment",
        stats: [
            (icons::THERMOMETER, "1.5°C", "Temperature increase"),
            (icons::FACTORY, "36Gt", "Annual CO2 emissions"),
        ],
    },
    Impact {
        id: "inequality",
        title: "Rising Inequality",
        description: "Economic growth often concentrates wealth among the elite while \
                      leaving behind marginalized communities, widening social gaps.",
        icon: icons::USERS,
        visual_class: "impact__visual--inequality",
        stats: [
            (icons::TRENDING_UP, "82%", "Wealth to top 1%"),
            (icons::HOME, "700M", "People in poverty"),
        ],
    },
    Impact {
        id: "sustainability",
        title: "Resource Depletion",
        description: "Our consumption-driven economy depletes finite resources faster \
                      than they can regenerate, jeopardizing future generations.",
        icon: icons::RECYCLE,
        visual_class: "impact__visual--sustainability",
        stats: [
            (icons::RECYCLE, "1.7x", "Earth's capacity used"),
            (icons::TREE, "10M", "Hectares lost annually"),
        ],
    },
];

/// Section heading fade-up.
pub fn heading_timeline(heading: TargetId) -> Timeline {
    Timeline::builder()
        .step(Step::from_to(
            heading,
            PropMap::new()
                .with(Property::TranslateY, 30.0)
                .with(Property::Opacity, 0.0),
            PropMap::new()
                .with(Property::TranslateY, 0.0)
                .with(Property::Opacity, 1.0),
            0.8,
            Ease::QuadOut,
        ))
        .build()
}

/// One row's entrance: visual and copy slide in from opposite sides, then
/// the stat cards cascade.
pub fn row_timeline(
    visual: TargetId,
    content: TargetId,
    stat_cards: &[TargetId],
    flipped: bool,
) -> Timeline {
    let side = if flipped { 60.0 } else { -60.0 };
    let slide = |x: f32| {
        PropMap::new()
            .with(Property::TranslateX, x)
            .with(Property::Opacity, 0.0)
    };
    let rest_x = PropMap::new()
        .with(Property::TranslateX, 0.0)
        .with(Property::Opacity, 1.0);

    let mut builder = Timeline::builder()
        .step(Step::from_to(visual, slide(side), rest_x.clone(), 0.9, Ease::QuadOut))
        .step_at(
            Step::from_to(content, slide(-side), rest_x, 0.9, Ease::QuadOut),
            Offset::Overlap(0.6),
        );
    for (i, card) in stat_cards.iter().copied().enumerate() {
        builder = builder.step_at(
            Step::from_to(
                card,
                PropMap::new()
                    .with(Property::TranslateY, 24.0)
                    .with(Property::Opacity, 0.0),
                PropMap::new()
                    .with(Property::TranslateY, 0.0)
                    .with(Property::Opacity, 1.0),
                0.6,
                Ease::QuadOut,
            ),
            Offset::At(0.6 + i as f32 * 0.15),
        );
    }
    builder.build()
}

/// Scroll-scrubbed parallax for the visual fill; driven by the row's
/// progress through the viewport, so it reverses with the scroll.
pub fn parallax_timeline(fill: TargetId) -> Timeline {
    Timeline::builder()
        .step(Step::from_to(
            fill,
            PropMap::new().with(Property::TranslateY, -12.0),
            PropMap::new().with(Property::TranslateY, 12.0),
            1.0,
            Ease::Linear,
        ))
        .build()
}

#[component]
pub fn ImpactSection() -> impl IntoView {
    let scope = dom::use_scope();
    let heading_ref: NodeRef<html::Div> = NodeRef::new();
    let registered = StoredValue::new(false);

    Effect::new(move |_| {
        let Some(heading) = heading_ref.get() else {
            return;
        };
        if registered.get_value() {
            return;
        }
        registered.set_value(true);
        let heading_target = scope.register(&heading);
        scope.observe(Trigger::entrance(
            heading_target,
            Config::default().section_threshold,
            heading_timeline(heading_target),
        ));
    });

    view! {
        <section class="impact">
            <div class="impact__container">
                <div node_ref=heading_ref class="section-heading">
                    <h2 class="section-heading__title">
                        "The Real Cost of "
                        <span class="text-gradient text-gradient--accent">"Unlimited Growth"</span>
                    </h2>
                    <p class="section-heading__subtitle">
                        "While economic growth has brought prosperity, it has also created \
                         unprecedented challenges that threaten our collective future."
                    </p>
                </div>

                <div class="impact__rows">
                    {IMPACTS
                        .iter()
                        .enumerate()
                        .map(|(index, impact)| view! { <ImpactRow index=index impact=impact /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ImpactRow(index: usize, impact: &'static Impact) -> impl IntoView {
    let scope = dom::use_scope();
    let flipped = index % 2 == 1;

    let row_ref: NodeRef<html::Div> = NodeRef::new();
    let visual_ref: NodeRef<html::Div> = NodeRef::new();
    let fill_ref: NodeRef<html::Div> = NodeRef::new();
    let content_ref: NodeRef<html::Div> = NodeRef::new();
    let cards_ref: NodeRef<html::Div> = NodeRef::new();

    let fill_target: StoredValue<Option<TargetId>> = StoredValue::new(None);
    let card_targets: StoredValue<Vec<TargetId>> = StoredValue::new(Vec::new());
    let registered = StoredValue::new(false);

    Effect::new(move |_| {
        let (Some(row), Some(visual), Some(fill), Some(content), Some(cards)) = (
            row_ref.get(),
            visual_ref.get(),
            fill_ref.get(),
            content_ref.get(),
            cards_ref.get(),
        ) else {
            return;
        };
        if registered.get_value() {
            return;
        }
        registered.set_value(true);

        let row_target = scope.register(&row);
        let visual_target = scope.register(&visual);
        let fill_t = scope.register(&fill);
        let content_target = scope.register(&content);
        fill_target.set_value(Some(fill_t));

        let mut cards_vec = Vec::new();
        let children = cards.children();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                cards_vec.push(scope.register(&child));
            }
        }
        card_targets.set_value(cards_vec.clone());

        scope.observe(Trigger::entrance(
            row_target,
            Config::default().section_threshold,
            row_timeline(visual_target, content_target, &cards_vec, flipped),
        ));
        scope.observe(Trigger::scrub(row_target, 1.0, parallax_timeline(fill_t)));
    });

    let hover_visual = move |enter: bool| {
        let Some(target) = fill_target.get_value() else {
            return;
        };
        let pair = HoverPair::scale(target, 1.05, 0.4, Ease::QuadOut);
        scope.play(if enter { pair.enter() } else { pair.leave() });
    };

    let hover_card = move |card_index: usize, enter: bool| {
        let Some(target) = card_targets.with_value(|t| t.get(card_index).copied()) else {
            return;
        };
        let pair = HoverPair::lift(target, -4.0, 1.02, Config::default().hover_duration, Ease::QuadOut);
        scope.play(if enter { pair.enter() } else { pair.leave() });
    };

    view! {
        <div node_ref=row_ref id=impact.id class="impact__row" class:impact__row--flipped=flipped>
            <div
                node_ref=visual_ref
                class="impact__visual"
                on:mouseenter=move |_| hover_visual(true)
                on:mouseleave=move |_| hover_visual(false)
            >
                <div node_ref=fill_ref class=format!("impact__visual-fill {}", impact.visual_class)></div>
                <div class="impact__visual-icon">
                    <Icon name=impact.icon class="icon icon--lg" />
                </div>
            </div>

            <div node_ref=content_ref class="impact__content">
                <div class="impact__eyebrow">
                    <div class="impact__eyebrow-icon">
                        <Icon name=impact.icon class="icon" />
                    </div>
                    <span>{format!("Impact #{}", index + 1)}</span>
                </div>

                <h3 class="impact__title">{impact.title}</h3>
                <p class="impact__description">{impact.description}</p>

                <div node_ref=cards_ref class="impact__stats">
                    {impact
                        .stats
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(i, (icon, value, caption))| {
                            view! {
                                <div
                                    class="stat-card"
                                    on:mouseenter=move |_| hover_card(i, true)
                                    on:mouseleave=move |_| hover_card(i, false)
                                >
                                    <Icon name=icon class="icon icon--primary" />
                                    <div>
                                        <div class="stat-card__value">{value}</div>
                                        <div class="stat-card__caption">{caption}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <button class="btn btn--outline btn--lg">
                    "Learn More"
                    <Icon name=icons::ARROW_RIGHT class="icon" />
                </button>
            </div>
        </div>
    }
}
