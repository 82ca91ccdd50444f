//! Solutions showcase: four pathway cards in a staggered grid and the
//! closing call-to-action panel.

use leptos::html;
use leptos::prelude::*;

use crate::choreo::dom;
use crate::choreo::{
    Config, Ease, HoverPair, PropMap, Property, StaggerOrder, Step, TargetId, Timeline, Trigger,
};
use crate::ui::hero::float_timeline;
use crate::ui::icon::{Icon, icons};
use crate::ui::impact::heading_timeline;

struct Solution {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
}

static SOLUTIONS: [Solution; 4] = [
    Solution {
        icon: icons::TARGET,
        title: "Sustainable Development Goals",
        description: "Implement policies that balance economic progress with \
                      environmental protection and social equity.",
        features: [
            "Green technology investment",
            "Circular economy models",
            "Carbon pricing mechanisms",
        ],
    },
    Solution {
        icon: icons::BAR_CHART,
        title: "Alternative Metrics",
        description: "Move beyond GDP to measure genuine progress including \
                      wellbeing, sustainability, and equality.",
        features: [
            "Gross National Happiness",
            "Genuine Progress Indicator",
            "Human Development Index",
        ],
    },
    Solution {
        icon: icons::USERS,
        title: "Inclusive Growth",
        description: "Ensure economic benefits reach all segments of society, \
                      reducing inequality and promoting shared prosperity.",
        features: [
            "Progressive taxation",
            "Universal basic services",
            "Skills development programs",
        ],
    },
    Solution {
        icon: icons::LEAF,
        title: "Regenerative Economy",
        description: "Transition to an economy that restores and regenerates \
                      natural and social capital.",
        features: [
            "Renewable energy transition",
            "Ecosystem restoration",
            "Biodiversity conservation",
        ],
    },
];

/// Cards cascade in as a stagger group; the page shuffles the order so the
/// grid pops in playfully rather than strictly left-to-right.
pub fn cards_timeline(cards: &[TargetId], order: StaggerOrder) -> Timeline {
    Timeline::stagger(
        cards,
        Some(
            PropMap::new()
                .with(Property::TranslateY, 30.0)
                .with(Property::Opacity, 0.0),
        ),
        PropMap::new()
            .with(Property::TranslateY, 0.0)
            .with(Property::Opacity, 1.0),
        0.7,
        Ease::QuadOut,
        0.1,
        order,
    )
}

/// Call-to-action panel settle.
pub fn cta_timeline(panel: TargetId) -> Timeline {
    Timeline::builder()
        .step(Step::from_to(
            panel,
            PropMap::new()
                .with(Property::Scale, 0.96)
                .with(Property::Opacity, 0.0),
            PropMap::new()
                .with(Property::Scale, 1.0)
                .with(Property::Opacity, 1.0),
            0.8,
            Ease::QuadOut,
        ))
        .build()
}

#[component]
pub fn SolutionsSection() -> impl IntoView {
    let scope = dom::use_scope();

    let heading_ref: NodeRef<html::Div> = NodeRef::new();
    let grid_ref: NodeRef<html::Div> = NodeRef::new();
    let cta_ref: NodeRef<html::Div> = NodeRef::new();
    let globe_ref: NodeRef<html::Div> = NodeRef::new();

    let card_targets: StoredValue<Vec<TargetId>> = StoredValue::new(Vec::new());
    let registered = StoredValue::new(false);

    Effect::new(move |_| {
        let (Some(heading), Some(grid), Some(cta), Some(globe)) = (
            heading_ref.get(),
            grid_ref.get(),
            cta_ref.get(),
            globe_ref.get(),
        ) else {
            return;
        };
        if registered.get_value() {
            return;
        }
        registered.set_value(true);

        let threshold = Config::default().section_threshold;

        let heading_target = scope.register(&heading);
        scope.observe(Trigger::entrance(
            heading_target,
            threshold,
            heading_timeline(heading_target),
        ));

        let mut cards = Vec::new();
        let children = grid.children();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                cards.push(scope.register(&child));
            }
        }
        card_targets.set_value(cards.clone());
        let grid_target = scope.register(&grid);
        scope.observe(Trigger::entrance(
            grid_target,
            threshold,
            cards_timeline(
                &cards,
                StaggerOrder::Randomized {
                    seed: dom::random_seed(),
                },
            ),
        ));

        let cta_target = scope.register(&cta);
        scope.observe(Trigger::entrance(cta_target, threshold, cta_timeline(cta_target)));
        scope.play(float_timeline(scope.register(&globe), 10.0, 3.2));
    });

    let hover_card = move |index: usize, enter: bool| {
        let Some(target) = card_targets.with_value(|t| t.get(index).copied()) else {
            return;
        };
        let pair = HoverPair::lift(target, -6.0, 1.01, Config::default().hover_duration, Ease::QuadOut);
        scope.play(if enter { pair.enter() } else { pair.leave() });
    };

    view! {
        <section id="solutions" class="solutions">
            <div class="solutions__container">
                <div node_ref=heading_ref class="section-heading">
                    <div class="section-heading__eyebrow">
                        <Icon name=icons::LIGHTBULB class="icon icon--primary" />
                        <span>"Pathways Forward"</span>
                    </div>
                    <h2 class="section-heading__title">
                        "Building a " <span class="text-gradient">"Better Future"</span>
                    </h2>
                    <p class="section-heading__subtitle">
                        "The challenges of economic growth are not insurmountable. Here are \
                         proven approaches to create prosperity while protecting our planet \
                         and people."
                    </p>
                </div>

                <div node_ref=grid_ref class="solutions__grid">
                    {SOLUTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, solution)| {
                            view! {
                                <div
                                    class="solution-card"
                                    on:mouseenter=move |_| hover_card(i, true)
                                    on:mouseleave=move |_| hover_card(i, false)
                                >
                                    <div class="solution-card__icon">
                                        <Icon name=solution.icon class="icon" />
                                    </div>
                                    <div class="solution-card__body">
                                        <h3 class="solution-card__title">{solution.title}</h3>
                                        <p class="solution-card__description">{solution.description}</p>
                                        <ul class="solution-card__features">
                                            {solution
                                                .features
                                                .iter()
                                                .copied()
                                                .map(|feature| {
                                                    view! {
                                                        <li>
                                                            <Icon name=icons::CHECK_CIRCLE class="icon icon--primary" />
                                                            <span>{feature}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div node_ref=cta_ref class="solutions__cta">
                    <div node_ref=globe_ref class="solutions__cta-globe">
                        <Icon name=icons::GLOBE class="icon icon--xl icon--primary" />
                    </div>
                    <h3 class="solutions__cta-title">"Join the Movement for Sustainable Progress"</h3>
                    <p class="solutions__cta-text">
                        "The future of our economy depends on our collective action today. \
                         Together, we can build a world that thrives within planetary boundaries."
                    </p>
                    <div class="solutions__cta-actions">
                        <button class="btn btn--hero btn--lg">
                            "Take Action Now"
                            <Icon name=icons::ARROW_RIGHT class="icon" />
                        </button>
                        <button class="btn btn--outline btn--lg">"Learn More"</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
