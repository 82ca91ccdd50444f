#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::choreo::config::Config;
    use crate::choreo::easing::Ease;
    use crate::choreo::engine::{Engine, TriggerEventKind};
    use crate::choreo::host::{Rect, RenderHost};
    use crate::choreo::ids::{ScopeId, TargetId};
    use crate::choreo::interaction::HoverPair;
    use crate::choreo::property::{PropMap, Property};
    use crate::choreo::timeline::{Offset, Repeat, StaggerOrder, Step, Timeline};
    use crate::choreo::trigger::{Trigger, TriggerAction, TriggerMode, TriggerTarget};

    /// Synthetic layout host: boxes live at fixed document offsets and the
    /// viewport slides over them.
    struct MockHost {
        boxes: HashMap<TargetId, (f32, f32)>,
        scroll: f32,
        viewport: f32,
        applied: Vec<(TargetId, PropMap)>,
        scroll_writes: Vec<f32>,
    }

    impl MockHost {
        fn new(viewport: f32) -> Self {
            Self {
                boxes: HashMap::new(),
                scroll: 0.0,
                viewport,
                applied: Vec::new(),
                scroll_writes: Vec::new(),
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
            self.scroll_writes.push(y);
        }

        fn forget(&mut self, target: TargetId) {
            self.boxes.remove(&target);
        }
    }

    fn engine() -> Engine<MockHost> {
        Engine::new(MockHost::new(900.0), Config::default())
    }

    /// Register a target and give it a layout box at `top` in document
    /// coordinates.
    fn place(engine: &mut Engine<MockHost>, scope: ScopeId, top: f32, height: f32) -> TargetId {
        let target = engine.register_target(scope);
        engine.host_mut().boxes.insert(target, (top, height));
        target
    }

    /// Advance the engine in frame-sized steps.
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

    fn last_value(engine: &Engine<MockHost>, target: TargetId, prop: Property) -> Option<f32> {
        engine
            .host()
            .applied
            .iter()
            .rev()
            .find(|(t, _)| *t == target)
            .and_then(|(_, props)| props.get(prop))
    }

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    fn fade_up(target: TargetId, duration: f32) -> Timeline {
        Timeline::builder()
            .step(Step::from_to(
                target,
                PropMap::new()
                    .with(Property::TranslateY, 40.0)
                    .with(Property::Opacity, 0.0),
                PropMap::new()
                    .with(Property::TranslateY, 0.0)
                    .with(Property::Opacity, 1.0),
                duration,
                Ease::QuadOut,
            ))
            .build()
    }

    // ----- timelines and staggers ---------------------------------------

    #[test]
    fn stagger_ordered_offsets_and_total_duration() {
        let targets: Vec<TargetId> = (1..=4).map(TargetId).collect();
        let timeline = Timeline::stagger(
            &targets,
            None,
            PropMap::new().with(Property::Opacity, 1.0),
            0.5,
            Ease::Linear,
            0.25,
            StaggerOrder::Ordered,
        );
        assert_eq!(timeline.start_offsets(), vec![0.0, 0.25, 0.5, 0.75]);
        approx(timeline.duration(), 0.5 + 3.0 * 0.25, 1e-6);
    }

    #[test]
    fn stagger_randomized_is_a_permutation_of_ordered_offsets() {
        let targets: Vec<TargetId> = (1..=6).map(TargetId).collect();
        for seed in [0u64, 1, 7, 99, 123_456_789] {
            let timeline = Timeline::stagger(
                &targets,
                None,
                PropMap::new().with(Property::Opacity, 1.0),
                0.4,
                Ease::Linear,
                0.1,
                StaggerOrder::Randomized { seed },
            );
            // Every target scheduled exactly once with a distinct offset.
            assert_eq!(timeline.step_count(), targets.len());
            let mut offsets = timeline.start_offsets();
            offsets.sort_by(|a, b| a.total_cmp(b));
            for (i, offset) in offsets.iter().enumerate() {
                approx(*offset, i as f32 * 0.1, 1e-5);
            }
            approx(timeline.duration(), 0.4 + 5.0 * 0.1, 1e-5);
        }
    }

    #[test]
    fn builder_clamps_malformed_schedules_to_zero() {
        let target = TargetId(1);
        let props = PropMap::new().with(Property::Opacity, 1.0);
        // Overlap larger than anything scheduled so far, negative absolute
        // offset, negative duration: all clamp, nothing goes below zero.
        let timeline = Timeline::builder()
            .step_at(
                Step::from_to(target, PropMap::new(), props.clone(), 0.5, Ease::Linear),
                Offset::Overlap(5.0),
            )
            .step_at(
                Step::from_to(target, PropMap::new(), props.clone(), -1.0, Ease::Linear),
                Offset::At(-2.0),
            )
            .build();
        assert!(timeline.start_offsets().iter().all(|s| *s >= 0.0));
    }

    #[test]
    fn builder_resolves_offsets_into_a_monotonic_schedule() {
        let target = TargetId(1);
        let props = PropMap::new().with(Property::Opacity, 1.0);
        let timeline = Timeline::builder()
            .step_at(
                Step::from_to(target, PropMap::new(), props.clone(), 0.3, Ease::Linear),
                Offset::At(1.0),
            )
            .step_at(
                Step::from_to(target, PropMap::new(), props.clone(), 0.3, Ease::Linear),
                Offset::At(0.2),
            )
            .step_at(
                Step::from_to(target, PropMap::new(), props, 0.3, Ease::Linear),
                Offset::Overlap(0.4),
            )
            .build();
        let offsets = timeline.start_offsets();
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        approx(offsets[0], 0.2, 1e-6);
    }

    // ----- playback ------------------------------------------------------

    #[test]
    fn play_with_no_live_target_is_a_silent_noop() {
        let mut engine = engine();
        let scope = engine.create_scope();
        // Registered but never given a layout box: unresolvable.
        let target = engine.register_target(scope);
        let handle = engine.play(scope, fade_up(target, 0.5));
        assert!(handle.is_dead());
        assert_eq!(engine.active_playback_count(), 0);
        // Dead handles are inert everywhere.
        engine.cancel(handle);
        engine.replay(handle);
        run(&mut engine, 0.2);
    }

    #[test]
    fn playback_runs_to_exact_final_values() {
        let mut engine = engine();
        let scope = engine.create_scope();
        let target = place(&mut engine, scope, 100.0, 50.0);
        engine.play(scope, fade_up(target, 0.5));
        run(&mut engine, 0.7);
        assert_eq!(last_value(&engine, target, Property::Opacity), Some(1.0));
        assert_eq!(last_value(&engine, target, Property::TranslateY), Some(0.0));
        assert_eq!(engine.active_playback_count(), 0);
    }

    #[test]
    fn zero_duration_step_applies_its_final_state() {
        let mut engine = engine();
        let scope = engine.create_scope();
        let target = place(&mut engine, scope, 100.0, 50.0);
        let timeline = Timeline::builder()
            .step(Step::from_to(
                target,
                PropMap::new().with(Property::Opacity, 0.0),
                PropMap::new().with(Property::Opacity, 1.0),
                0.0,
                Ease::Linear,
            ))
            .build();
        engine.play(scope, timeline);
        run(&mut engine, 0.05);
        assert_eq!(last_value(&engine, target, Property::Opacity), Some(1.0));
    }

    #[test]
    fn last_play_wins_per_target_property_channel() {
        let mut engine = engine();
        let scope = engine.create_scope();
        let target = place(&mut engine, scope, 100.0, 50.0);
        let slide = Timeline::builder()
            .step(Step::from_to(
                target,
                PropMap::new().with(Property::TranslateX, 0.0),
                PropMap::new().with(Property::TranslateX, 100.0),
                1.0,
                Ease::Linear,
            ))
            .build();
        engine.play(scope, slide);
        run(&mut engine, 0.5);
        // Steal the channel mid-flight: tween back to zero from wherever
        // the first playback left the value.
        let back = Timeline::builder()
            .step(Step::to(
                target,
                PropMap::new().with(Property::TranslateX, 0.0),
                0.4,
                Ease::QuadOut,
            ))
            .build();
        engine.play(scope, back);
        run(&mut engine, 1.0);
        assert_eq!(last_value(&engine, target, Property::TranslateX), Some(0.0));
    }

    #[test]
    fn replay_restarts_from_time_zero() {
        let mut engine = engine();
        let scope = engine.create_scope();
        let target = place(&mut engine, scope, 100.0, 50.0);
        let timeline = Timeline::builder()
            .step(Step::from_to(
                target,
                PropMap::new().with(Property::TranslateX, 0.0),
                PropMap::new().with(Property::TranslateX, 100.0),
                1.0,
                Ease::Linear,
            ))
            .build();
        let handle = engine.play(scope, timeline);
        run(&mut engine, 0.8);
        let before = last_value(&engine, target, Property::TranslateX).unwrap();
        assert!(before > 50.0);
        engine.replay(handle);
        run(&mut engine, 0.1);
        let after = last_value(&engine, target, Property::TranslateX).unwrap();
        assert!(after < before, "restart should rewind: {after} vs {before}");
    }

    #[test]
    fn hover_enter_then_immediate_leave_returns_to_rest() {
        let mut engine = engine();
        let scope = engine.create_scope();
        let target = place(&mut engine, scope, 100.0, 50.0);
        let pair = HoverPair::scale(target, 1.1, 0.2, Ease::QuadOut);

        engine.play(scope, pair.enter());
        // Leave before the enter completes.
        run(&mut engine, 0.1);
        let mid = last_value(&engine, target, Property::Scale).unwrap();
        assert!(mid > 1.0 && mid < 1.1);
        engine.play(scope, pair.leave());
        run(&mut engine, 0.5);
        assert_eq!(last_value(&engine, target, Property::Scale), Some(1.0));
        assert_eq!(engine.active_playback_count(), 0);
    }

    #[test]
    fn looping_yoyo_timeline_runs_until_cancelled() {
        let mut engine = engine();
        let scope = engine.create_scope();
        let target = place(&mut engine, scope, 100.0, 50.0);
        let float = Timeline::builder()
            .repeat(Repeat::Loop { yoyo: true })
            .step(Step::from_to(
                target,
                PropMap::new().with(Property::TranslateY, 0.0),
                PropMap::new().with(Property::TranslateY, -20.0),
                1.0,
                Ease::Linear,
            ))
            .build();
        let handle = engine.play(scope, float);
        run(&mut engine, 1.0);
        approx(last_value(&engine, target, Property::TranslateY).unwrap(), -20.0, 0.5);
        // The yoyo mirrors back toward the start.
        run(&mut engine, 1.0);
        approx(last_value(&engine, target, Property::TranslateY).unwrap(), 0.0, 0.5);
        assert_eq!(engine.active_playback_count(), 1);
        engine.cancel(handle);
        assert_eq!(engine.active_playback_count(), 0);
    }

    // ----- triggers ------------------------------------------------------

    #[test]
    fn one_shot_entrance_fires_exactly_once_per_mount() {
        let mut engine = engine();
        let scope = engine.create_scope();
        // Below the fold: viewport 900, threshold 0.8 puts the enter line
        // at 720; the box top sits at 1200 in document coordinates.
        let target = place(&mut engine, scope, 1200.0, 300.0);
        engine.observe(scope, Trigger::entrance(target, 0.8, fade_up(target, 0.5)));
        run(&mut engine, 0.1);
        assert_eq!(engine.active_playback_count(), 0);
        assert_eq!(engine.subscription_count(), 1);

        scroll_to(&mut engine, 600.0);
        engine.tick(0.0);
        assert_eq!(engine.active_playback_count(), 1);
        // Fired one-shots auto-unobserve.
        assert_eq!(engine.subscription_count(), 0);

        // Leaving and re-entering the threshold never fires again.
        run(&mut engine, 0.7);
        scroll_to(&mut engine, 0.0);
        run(&mut engine, 0.1);
        scroll_to(&mut engine, 600.0);
        run(&mut engine, 0.1);
        assert_eq!(engine.active_playback_count(), 0);
    }

    #[test]
    fn one_shot_notify_reports_fired_once() {
        let mut engine = engine();
        let scope = engine.create_scope();
        let target = place(&mut engine, scope, 1200.0, 300.0);
        engine.observe(scope, Trigger::notify_once(target, 0.8));
        let mut fired = 0;
        for y in [0.0, 300.0, 600.0, 0.0, 600.0, 900.0] {
            scroll_to(&mut engine, y);
            for event in engine.tick(0.0) {
                if event.kind == TriggerEventKind::Fired {
                    fired += 1;
                }
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn continuous_progress_is_monotone_and_clamped() {
        let mut engine = engine();
        let scope = engine.create_scope();
        let target = place(&mut engine, scope, 1200.0, 300.0);
        engine.observe(
            scope,
            Trigger {
                target: TriggerTarget::Element(target),
                threshold: 1.0,
                mode: TriggerMode::Scrub,
                action: TriggerAction::Notify,
            },
        );

        let mut forward = Vec::new();
        for y in (0..=1800).step_by(100) {
            scroll_to(&mut engine, y as f32);
            for event in engine.tick(0.0) {
                if let TriggerEventKind::Progress(p) = event.kind {
                    forward.push(p);
                }
            }
        }
        assert!(!forward.is_empty());
        assert!(forward.windows(2).all(|w| w[0] <= w[1]));
        assert!(forward.iter().all(|p| (0.0..=1.0).contains(p)));

        // Reversing the scroll reverses the progression, symmetrically.
        let mut backward = Vec::new();
        for y in (0..=1800).rev().step_by(100) {
            scroll_to(&mut engine, y as f32);
            for event in engine.tick(0.0) {
                if let TriggerEventKind::Progress(p) = event.kind {
                    backward.push(p);
                }
            }
        }
        assert!(!backward.is_empty());
        assert!(backward.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(engine.subscription_count(), 1);
    }

    #[test]
    fn viewport_watch_coalesces_repeated_progress() {
        let mut engine = engine();
        let scope = engine.create_scope();
        engine.observe(scope, Trigger::scroll_watch(50.0));

        let mut saturated = 0;
        for y in (0..=100).step_by(10) {
            scroll_to(&mut engine, y as f32);
            for event in engine.tick(0.0) {
                if event.kind == TriggerEventKind::Progress(1.0) {
                    saturated += 1;
                }
            }
        }
        // 50 -> 100px stays clamped at 1.0 but only the crossing reports.
        assert_eq!(saturated, 1);
    }

    #[test]
    fn scrubbed_timeline_follows_scroll_in_both_directions() {
        let mut engine = engine();
        let scope = engine.create_scope();
        let row = place(&mut engine, scope, 1200.0, 300.0);
        let fill = place(&mut engine, scope, 1200.0, 300.0);
        let parallax = Timeline::builder()
            .step(Step::from_to(
                fill,
                PropMap::new().with(Property::TranslateY, -12.0),
                PropMap::new().with(Property::TranslateY, 12.0),
                1.0,
                Ease::Linear,
            ))
            .build();
        engine.observe(scope, Trigger::scrub(row, 1.0, parallax));

        scroll_to(&mut engine, 900.0);
        engine.tick(0.0);
        let mid = last_value(&engine, fill, Property::TranslateY).unwrap();
        scroll_to(&mut engine, 1300.0);
        engine.tick(0.0);
        let later = last_value(&engine, fill, Property::TranslateY).unwrap();
        assert!(later > mid);

        // Scrolling back drives the same playback backwards.
        scroll_to(&mut engine, 900.0);
        engine.tick(0.0);
        approx(last_value(&engine, fill, Property::TranslateY).unwrap(), mid, 1e-3);
    }

    #[test]
    fn removed_element_auto_unsubscribes() {
        let mut engine = engine();
        let scope = engine.create_scope();
        let target = place(&mut engine, scope, 1200.0, 300.0);
        engine.observe(scope, Trigger::notify_once(target, 0.8));
        assert_eq!(engine.subscription_count(), 1);

        engine.host_mut().boxes.remove(&target);
        scroll_to(&mut engine, 600.0);
        let events = engine.tick(0.0);
        assert!(events.is_empty());
        assert_eq!(engine.subscription_count(), 0);
    }

    // ----- scopes --------------------------------------------------------

    #[test]
    fn dispose_scope_returns_counts_to_premount_values() {
        let mut engine = engine();
        let outer = engine.create_scope();
        // Far below the fold so the baseline subscription stays pending.
        let outer_target = place(&mut engine, outer, 3000.0, 50.0);
        engine.observe(outer, Trigger::notify_once(outer_target, 0.8));
        let subs_before = engine.subscription_count();
        let playbacks_before = engine.active_playback_count();

        let scope = engine.create_scope();
        let a = place(&mut engine, scope, 1200.0, 300.0);
        let b = place(&mut engine, scope, 2000.0, 300.0);
        engine.observe(scope, Trigger::entrance(a, 0.8, fade_up(a, 0.5)));
        engine.observe(scope, Trigger::scrub(b, 1.0, fade_up(b, 1.0)));
        engine.play(
            scope,
            Timeline::builder()
                .repeat(Repeat::Loop { yoyo: true })
                .step(Step::from_to(
                    a,
                    PropMap::new().with(Property::TranslateY, 0.0),
                    PropMap::new().with(Property::TranslateY, -20.0),
                    2.0,
                    Ease::SineInOut,
                ))
                .build(),
        );
        run(&mut engine, 0.2);
        assert!(engine.subscription_count() > subs_before);
        assert!(engine.active_playback_count() > playbacks_before);

        engine.dispose_scope(scope);
        assert_eq!(engine.subscription_count(), subs_before);
        assert_eq!(engine.active_playback_count(), playbacks_before);

        // Nothing owned by the disposed scope fires afterwards.
        scroll_to(&mut engine, 600.0);
        let events = engine.tick(0.0);
        assert!(events.is_empty());
        assert_eq!(engine.active_playback_count(), playbacks_before);
    }

    // ----- scroll animation ----------------------------------------------

    #[test]
    fn scroll_to_animates_and_newer_request_wins() {
        let mut engine = engine();
        engine.host_mut().scroll = 400.0;
        engine.scroll_to(0.0, 0.8, Ease::QuadInOut);
        run(&mut engine, 0.3);
        let part_way = engine.host().scroll;
        assert!(part_way < 400.0 && part_way > 0.0);
        assert_eq!(engine.scroll_animation_target(), Some(0.0));

        // A newer request replaces the in-flight animation.
        engine.scroll_to(200.0, 0.8, Ease::QuadInOut);
        assert_eq!(engine.scroll_animation_target(), Some(200.0));
        run(&mut engine, 1.0);
        approx(engine.host().scroll, 200.0, 1e-3);
    }

    #[test]
    fn user_scroll_cancels_inflight_scroll_animation() {
        let mut engine = engine();
        engine.host_mut().scroll = 400.0;
        engine.scroll_to(0.0, 0.8, Ease::QuadInOut);
        run(&mut engine, 0.2);
        engine.user_scrolled();
        assert_eq!(engine.scroll_animation_target(), None);
        let writes_before = engine.host().scroll_writes.len();
        run(&mut engine, 0.5);
        assert_eq!(engine.host().scroll_writes.len(), writes_before);
    }
}
