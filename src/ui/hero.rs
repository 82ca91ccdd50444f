//! Hero banner: headline, call-to-action buttons and the three headline
//! statistics, with floating decorative orbs and a bouncing scroll cue.

use leptos::html;
use leptos::prelude::*;

use crate::choreo::dom;
use crate::choreo::{
    Config, Ease, HoverPair, Offset, PropMap, Property, Repeat, Step, TargetId, Timeline, Trigger,
};
use crate::ui::icon::{Icon, icons};

/// Headline statistics (value, caption, accent class).
const HERO_STATS: [(&str, &str, &str); 3] = [
    ("40%", "Increase in CO2 emissions", "stat--destructive"),
    ("70%", "Wealth inequality gap", "stat--secondary"),
    ("85%", "Resource depletion rate", "stat--primary"),
];

/// Entrance choreography for the hero content. The title rises from 100px
/// below at zero opacity; the supporting blocks overlap it, and the stats
/// cascade in an ordered stagger.
pub fn entrance_timeline(
    badge: TargetId,
    title: TargetId,
    subtitle: TargetId,
    actions: TargetId,
    stats: &[TargetId],
) -> Timeline {
    let rise = |y: f32| {
        PropMap::new()
            .with(Property::TranslateY, y)
            .with(Property::Opacity, 0.0)
    };
    let rest = PropMap::new()
        .with(Property::TranslateY, 0.0)
        .with(Property::Opacity, 1.0);

    let mut builder = Timeline::builder()
        .step_at(
            Step::from_to(
                badge,
                PropMap::new().with(Property::Opacity, 0.0),
                PropMap::new().with(Property::Opacity, 1.0),
                0.6,
                Ease::QuadOut,
            ),
            Offset::At(0.0),
        )
        .step_at(
            Step::from_to(title, rise(100.0), rest.clone(), 1.0, Ease::QuadOut),
            Offset::At(0.2),
        )
        .step_at(
            Step::from_to(subtitle, rise(60.0), rest.clone(), 1.0, Ease::QuadOut),
            Offset::Overlap(0.6),
        )
        .step_at(
            Step::from_to(actions, rise(40.0), rest.clone(), 1.0, Ease::QuadOut),
            Offset::Overlap(0.6),
        );
    for (i, stat) in stats.iter().copied().enumerate() {
        builder = builder.step_at(
            Step::from_to(stat, rise(40.0), rest.clone(), 0.8, Ease::QuadOut),
            Offset::At(1.2 + i as f32 * 0.2),
        );
    }
    builder.build()
}

/// Decorative float loop for one background orb.
pub fn float_timeline(orb: TargetId, amplitude: f32, duration: f32) -> Timeline {
    Timeline::builder()
        .repeat(Repeat::Loop { yoyo: true })
        .step(Step::from_to(
            orb,
            PropMap::new().with(Property::TranslateY, 0.0),
            PropMap::new().with(Property::TranslateY, -amplitude),
            duration,
            Ease::SineInOut,
        ))
        .build()
}

/// The bouncing scroll-down cue.
pub fn indicator_timeline(indicator: TargetId) -> Timeline {
    Timeline::builder()
        .repeat(Repeat::Loop { yoyo: true })
        .step(Step::from_to(
            indicator,
            PropMap::new().with(Property::TranslateY, 0.0),
            PropMap::new().with(Property::TranslateY, 10.0),
            0.6,
            Ease::SineInOut,
        ))
        .build()
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let scope = dom::use_scope();

    let section_ref: NodeRef<html::Section> = NodeRef::new();
    let badge_ref: NodeRef<html::Div> = NodeRef::new();
    let title_ref: NodeRef<html::H1> = NodeRef::new();
    let subtitle_ref: NodeRef<html::P> = NodeRef::new();
    let actions_ref: NodeRef<html::Div> = NodeRef::new();
    let stats_ref: NodeRef<html::Div> = NodeRef::new();
    let orbs_ref: NodeRef<html::Div> = NodeRef::new();
    let indicator_ref: NodeRef<html::Div> = NodeRef::new();

    let primary_target: StoredValue<Option<TargetId>> = StoredValue::new(None);
    let outline_target: StoredValue<Option<TargetId>> = StoredValue::new(None);
    let primary_ref: NodeRef<html::Button> = NodeRef::new();
    let outline_ref: NodeRef<html::Button> = NodeRef::new();
    let registered = StoredValue::new(false);

    Effect::new(move |_| {
        let (
            Some(section),
            Some(badge),
            Some(title),
            Some(subtitle),
            Some(actions),
            Some(stats),
            Some(orbs),
            Some(indicator),
            Some(primary),
            Some(outline),
        ) = (
            section_ref.get(),
            badge_ref.get(),
            title_ref.get(),
            subtitle_ref.get(),
            actions_ref.get(),
            stats_ref.get(),
            orbs_ref.get(),
            indicator_ref.get(),
            primary_ref.get(),
            outline_ref.get(),
        )
        else {
            return;
        };
        if registered.get_value() {
            return;
        }
        registered.set_value(true);

        let section_target = scope.register(&section);
        let badge_target = scope.register(&badge);
        let title_target = scope.register(&title);
        let subtitle_target = scope.register(&subtitle);
        let actions_target = scope.register(&actions);
        primary_target.set_value(Some(scope.register(&primary)));
        outline_target.set_value(Some(scope.register(&outline)));

        let mut stat_targets = Vec::new();
        let stat_children = stats.children();
        for i in 0..stat_children.length() {
            if let Some(child) = stat_children.item(i) {
                stat_targets.push(scope.register(&child));
            }
        }

        scope.observe(Trigger::entrance(
            section_target,
            Config::default().hero_threshold,
            entrance_timeline(
                badge_target,
                title_target,
                subtitle_target,
                actions_target,
                &stat_targets,
            ),
        ));

        // Always-on decoration: desynchronized float loops and the cue.
        let orb_children = orbs.children();
        let profiles = [(18.0, 3.0), (14.0, 3.6), (22.0, 4.2)];
        for i in 0..orb_children.length() {
            if let Some(child) = orb_children.item(i) {
                let (amplitude, duration) = profiles[i as usize % profiles.len()];
                scope.play(float_timeline(scope.register(&child), amplitude, duration));
            }
        }
        scope.play(indicator_timeline(scope.register(&indicator)));
    });

    let hover_button = move |stored: StoredValue<Option<TargetId>>, enter: bool| {
        let Some(target) = stored.get_value() else {
            return;
        };
        let pair = HoverPair::scale(target, 1.05, Config::default().hover_duration, Ease::QuadOut);
        scope.play(if enter { pair.enter() } else { pair.leave() });
    };

    view! {
        <section node_ref=section_ref id="overview" class="hero">
            <div class="hero__backdrop" aria-hidden="true"></div>

            // Floating decorative orbs
            <div node_ref=orbs_ref class="hero__orbs" aria-hidden="true">
                <div class="hero__orb hero__orb--destructive"></div>
                <div class="hero__orb hero__orb--secondary"></div>
                <div class="hero__orb hero__orb--primary"></div>
            </div>

            <div class="hero__content">
                <div node_ref=badge_ref class="hero__badge">
                    <Icon name=icons::ALERT_TRIANGLE class="icon icon--destructive" />
                    <span>"Critical Economic Analysis"</span>
                </div>

                <h1 node_ref=title_ref class="hero__title">
                    "The " <span class="text-gradient">"Hidden Costs"</span>
                    <br />
                    "of Economic Growth"
                </h1>

                <p node_ref=subtitle_ref class="hero__subtitle">
                    "Explore the environmental degradation, rising inequality, and \
                     sustainability challenges that shadow our pursuit of unlimited \
                     economic expansion."
                </p>

                <div node_ref=actions_ref class="hero__actions">
                    <button
                        node_ref=primary_ref
                        class="btn btn--hero btn--xl"
                        on:mouseenter=move |_| hover_button(primary_target, true)
                        on:mouseleave=move |_| hover_button(primary_target, false)
                        on:click=move |_| dom::scroll_to_anchor("environment")
                    >
                        "Explore the Impact"
                        <Icon name=icons::TRENDING_DOWN class="icon" />
                    </button>
                    <button
                        node_ref=outline_ref
                        class="btn btn--outline btn--xl"
                        on:mouseenter=move |_| hover_button(outline_target, true)
                        on:mouseleave=move |_| hover_button(outline_target, false)
                        on:click=move |_| dom::scroll_to_anchor("solutions")
                    >
                        "View Research"
                    </button>
                </div>

                <div node_ref=stats_ref class="hero__stats">
                    {HERO_STATS
                        .iter()
                        .copied()
                        .map(|(value, caption, accent)| {
                            view! {
                                <div class="hero__stat">
                                    <div class=format!("hero__stat-value {accent}")>{value}</div>
                                    <div class="hero__stat-caption">{caption}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div node_ref=indicator_ref class="hero__scroll-cue" aria-hidden="true">
                <Icon name=icons::ARROW_DOWN class="icon" />
            </div>
        </section>
    }
}
