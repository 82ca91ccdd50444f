//! End-to-end engine scenarios: the page's real timeline builders driven
//! against a synthetic layout host, no browser involved.

use std::collections::HashMap;

use econoimpact::choreo::{
    Config, Engine, PropMap, Property, Rect, RenderHost, ScopeId, StaggerOrder, TargetId,
    Trigger, TriggerEventKind,
};
use econoimpact::ui::{footer, hero, navigation, solutions};

/// Boxes at fixed document offsets, viewport sliding over them.
struct MockHost {
    boxes: HashMap<TargetId, (f32, f32)>,
    scroll: f32,
    viewport: f32,
    applied: Vec<(TargetId, PropMap)>,
}

impl MockHost {
    fn new(viewport: f32) -> Self {
        Self {
            boxes: HashMap::new(),
            scroll: 0.0,
            viewport,
            applied: Vec::new(),
        }
    }
}

impl RenderHost for MockHost {
    fn apply(&mut self, target: TargetId, props: &PropMap) {
        self.applied.push((target, props.clone()));
    }

    fn rect(&self, target: TargetId) -> Option<Rect> {
        let (top, height) = self.boxes.get(&target)?;
        Some(Rect {
            top: top - self.scroll,
            height: *height,
        })
    }

    fn viewport_height(&self) -> f32 {
        self.viewport
    }

    fn scroll_y(&self) -> f32 {
        self.scroll
    }

    fn set_scroll_y(&mut self, y: f32) {
        self.scroll = y;
    }

    fn forget(&mut self, target: TargetId) {
        self.boxes.remove(&target);
    }
}

fn engine() -> Engine<MockHost> {
    Engine::new(MockHost::new(900.0), Config::default())
}

fn place(engine: &mut Engine<MockHost>, scope: ScopeId, top: f32, height: f32) -> TargetId {
    let target = engine.register_target(scope);
    engine.host_mut().boxes.insert(target, (top, height));
    target
}

fn run(engine: &mut Engine<MockHost>, seconds: f32) {
    let mut remaining = seconds;
    while remaining > 0.0 {
        let dt = remaining.min(0.05);
        engine.tick(dt);
        remaining -= dt;
    }
}

fn scroll_to(engine: &mut Engine<MockHost>, y: f32) {
    engine.host_mut().scroll = y;
    engine.mark_dirty();
}

fn first_applied(engine: &Engine<MockHost>, target: TargetId) -> Option<&PropMap> {
    engine
        .host()
        .applied
        .iter()
        .find(|(t, _)| *t == target)
        .map(|(_, props)| props)
}

fn last_applied(engine: &Engine<MockHost>, target: TargetId) -> Option<&PropMap> {
    engine
        .host()
        .applied
        .iter()
        .rev()
        .find(|(t, _)| *t == target)
        .map(|(_, props)| props)
}

/// it should flip the navbar's scrolled flag exactly once while the page
/// scrolls from 0 to 100px, crossing the 50px threshold.
#[test]
fn navigation_scrolled_flag_flips_once_at_the_threshold() {
    let mut engine = engine();
    let scope = engine.create_scope();
    let span = engine.config().nav_scroll_span;
    engine.observe(scope, Trigger::scroll_watch(span));

    let mut scrolled = false;
    let mut flips_to_true = 0;
    let mut style_updates = 0;
    for y in (0..=100).step_by(10) {
        scroll_to(&mut engine, y as f32);
        for event in engine.tick(0.0) {
            if let TriggerEventKind::Progress(progress) = event.kind {
                let raised = progress >= 1.0;
                if raised != scrolled {
                    scrolled = raised;
                    style_updates += 1;
                    if raised {
                        flips_to_true += 1;
                    }
                }
            }
        }
    }
    assert!(scrolled);
    assert_eq!(flips_to_true, 1);
    // One style transition total: transparent -> raised.
    assert_eq!(style_updates, 1);
}

/// it should play the navigation entrance to completion: brand settles at
/// rest and every link becomes fully visible.
#[test]
fn navigation_entrance_settles_brand_and_links() {
    let mut engine = engine();
    let scope = engine.create_scope();
    let nav = place(&mut engine, scope, 0.0, 64.0);
    let brand = place(&mut engine, scope, 8.0, 40.0);
    let links: Vec<TargetId> = (0..5)
        .map(|i| place(&mut engine, scope, 12.0, 20.0 + i as f32))
        .collect();

    engine.observe(
        scope,
        Trigger::entrance(nav, 1.0, navigation::entrance_timeline(brand, &links)),
    );
    // The navbar is in view at mount: the one-shot fires on the first pass.
    engine.tick(0.0);
    assert_eq!(engine.active_playback_count(), 1);

    run(&mut engine, 2.0);
    let settled = last_applied(&engine, brand).expect("brand was animated");
    assert_eq!(settled.get(Property::Scale), Some(1.0));
    assert_eq!(settled.get(Property::Rotation), Some(0.0));
    for link in links {
        let props = last_applied(&engine, link).expect("link was animated");
        assert_eq!(props.get(Property::Opacity), Some(1.0));
        assert_eq!(props.get(Property::TranslateY), Some(0.0));
    }
}

/// it should play exactly one hero entrance when the container crosses 90%
/// visibility, with the title tweening {y:100, opacity:0} -> {y:0, opacity:1}.
#[test]
fn hero_entrance_plays_once_with_the_title_rise_tween() {
    let mut engine = engine();
    let scope = engine.create_scope();
    let threshold = engine.config().hero_threshold;

    let section = place(&mut engine, scope, 1000.0, 800.0);
    let badge = place(&mut engine, scope, 1020.0, 30.0);
    let title = place(&mut engine, scope, 1060.0, 120.0);
    let subtitle = place(&mut engine, scope, 1200.0, 60.0);
    let actions = place(&mut engine, scope, 1280.0, 50.0);
    let stats: Vec<TargetId> = (0..3)
        .map(|i| place(&mut engine, scope, 1360.0 + i as f32 * 10.0, 60.0))
        .collect();

    engine.observe(
        scope,
        Trigger::entrance(
            section,
            threshold,
            hero::entrance_timeline(badge, title, subtitle, actions, &stats),
        ),
    );
    engine.tick(0.0);
    assert_eq!(engine.active_playback_count(), 0, "still below the fold");

    // Enter line at 90% of a 900px viewport = 810; top 1000 - 250 = 750.
    scroll_to(&mut engine, 250.0);
    engine.tick(0.0);
    assert_eq!(engine.active_playback_count(), 1);

    let from = first_applied(&engine, title).expect("title renders its from state");
    assert_eq!(from.get(Property::TranslateY), Some(100.0));
    assert_eq!(from.get(Property::Opacity), Some(0.0));

    run(&mut engine, 3.0);
    assert_eq!(engine.active_playback_count(), 0);
    let to = last_applied(&engine, title).expect("title was animated");
    assert_eq!(to.get(Property::TranslateY), Some(0.0));
    assert_eq!(to.get(Property::Opacity), Some(1.0));

    // Re-crossing the threshold never replays the entrance.
    scroll_to(&mut engine, 0.0);
    engine.tick(0.0);
    scroll_to(&mut engine, 250.0);
    engine.tick(0.0);
    assert_eq!(engine.active_playback_count(), 0);
}

/// it should keep the solutions stagger total invariant across ordered and
/// randomized order.
#[test]
fn solutions_stagger_total_is_order_independent() {
    let mut engine = engine();
    let scope = engine.create_scope();
    let cards: Vec<TargetId> = (0..4)
        .map(|i| place(&mut engine, scope, 2000.0 + i as f32 * 50.0, 200.0))
        .collect();

    let ordered = solutions::cards_timeline(&cards, StaggerOrder::Ordered);
    let shuffled = solutions::cards_timeline(&cards, StaggerOrder::Randomized { seed: 42 });

    assert_eq!(ordered.duration(), shuffled.duration());
    assert_eq!(ordered.step_count(), shuffled.step_count());
    let mut offsets = shuffled.start_offsets();
    offsets.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(offsets, ordered.start_offsets());
}

/// it should animate footer scroll-to-top over the configured duration,
/// with a newer request canceling the in-flight one.
#[test]
fn footer_scroll_to_top_cancels_prior_scroll_animation() {
    let mut engine = engine();
    let scope = engine.create_scope();
    let inner = place(&mut engine, scope, 4000.0, 400.0);
    engine.observe(
        scope,
        Trigger::entrance(inner, engine.config().section_threshold, footer::entrance_timeline(inner)),
    );

    scroll_to(&mut engine, 3500.0);
    let (duration, ease) = {
        let config = engine.config();
        (config.scroll_duration, config.scroll_ease)
    };

    engine.scroll_to(0.0, duration, ease);
    assert_eq!(engine.scroll_animation_target(), Some(0.0));
    run(&mut engine, 0.3);
    let mid = engine.host().scroll_y();
    assert!(mid < 3500.0 && mid > 0.0);

    // Clicking again mid-flight: the newest request wins.
    engine.scroll_to(0.0, duration, ease);
    run(&mut engine, 1.0);
    assert!(engine.host().scroll_y().abs() < 1e-3);
    assert_eq!(engine.scroll_animation_target(), None);

    // A manual scroll cancels any animated one outright.
    engine.scroll_to(500.0, duration, ease);
    engine.user_scrolled();
    assert_eq!(engine.scroll_animation_target(), None);
}
