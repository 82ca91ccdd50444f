//! The `web-sys` backend: binds the engine to the real page.
//!
//! `init` is the one process-wide initialization point (idempotent on
//! repeated calls): it creates the engine, installs coalescing scroll and
//! resize listeners — the listeners only mark geometry dirty, evaluation
//! happens once per animation frame — and starts the frame loop.
//!
//! `Scope` is the per-component handle: created on mount, it registers
//! element targets from `NodeRef`s and tears everything down through
//! Leptos `on_cleanup` when the component unmounts.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use leptos::logging;
use leptos::prelude::on_cleanup;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::choreo::config::Config;
use crate::choreo::engine::{Engine, TriggerEvent, TriggerEventKind};
use crate::choreo::host::{Rect, RenderHost};
use crate::choreo::ids::{PlaybackId, ScopeId, SubId, TargetId};
use crate::choreo::property::{PropMap, Property};
use crate::choreo::timeline::Timeline;
use crate::choreo::trigger::Trigger;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("browser document is not available")]
    NoDocument,
}

thread_local! {
    static ENGINE: RefCell<Option<Engine<DomHost>>> = const { RefCell::new(None) };
    static CALLBACKS: RefCell<HashMap<SubId, Box<dyn FnMut(TriggerEventKind)>>> =
        RefCell::new(HashMap::new());
    static LAST_FRAME_MS: Cell<Option<f64>> = const { Cell::new(None) };
    /// Scroll offset the engine last wrote; used to tell animated scrolling
    /// apart from the user grabbing the wheel mid-flight.
    static EXPECTED_SCROLL: Cell<Option<f64>> = const { Cell::new(None) };
}

/// Element registry plus `web-sys` geometry and style writes.
pub struct DomHost {
    window: web_sys::Window,
    targets: HashMap<TargetId, web_sys::Element>,
}

impl DomHost {
    fn new(window: web_sys::Window) -> Self {
        Self {
            window,
            targets: HashMap::new(),
        }
    }

    fn bind(&mut self, target: TargetId, element: web_sys::Element) {
        self.targets.insert(target, element);
    }
}

impl RenderHost for DomHost {
    fn apply(&mut self, target: TargetId, props: &PropMap) {
        let Some(element) = self.targets.get(&target) else {
            return;
        };
        let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        let style = html.style();
        let has_transform = props.get(Property::TranslateX).is_some()
            || props.get(Property::TranslateY).is_some()
            || props.get(Property::Scale).is_some()
            || props.get(Property::Rotation).is_some();
        if has_transform {
            let x = props.get_or_rest(Property::TranslateX);
            let y = props.get_or_rest(Property::TranslateY);
            let scale = props.get_or_rest(Property::Scale);
            let rotation = props.get_or_rest(Property::Rotation);
            let _ = style.set_property(
                "transform",
                &format!("translate({x}px, {y}px) scale({scale}) rotate({rotation}deg)"),
            );
        }
        if let Some(opacity) = props.get(Property::Opacity) {
            let _ = style.set_property("opacity", &format!("{opacity}"));
        }
    }

    fn rect(&self, target: TargetId) -> Option<Rect> {
        let element = self.targets.get(&target)?;
        if !element.is_connected() {
            return None;
        }
        let rect = element.get_bounding_client_rect();
        Some(Rect {
            top: rect.top() as f32,
            height: rect.height() as f32,
        })
    }

    fn viewport_height(&self) -> f32 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    }

    fn scroll_y(&self) -> f32 {
        self.window.scroll_y().unwrap_or(0.0) as f32
    }

    fn set_scroll_y(&mut self, y: f32) {
        EXPECTED_SCROLL.set(Some(y as f64));
        let x = self.window.scroll_x().unwrap_or(0.0);
        self.window.scroll_to_with_x_and_y(x, y as f64);
    }

    fn forget(&mut self, target: TargetId) {
        self.targets.remove(&target);
    }
}

/// Run `f` against the global engine. Returns `None` before `init` (or if
/// re-entered while the engine is borrowed) — callers degrade to no-ops,
/// the page just stays static.
fn with_engine<R>(f: impl FnOnce(&mut Engine<DomHost>) -> R) -> Option<R> {
    ENGINE.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

/// Process-wide engine initialization. Idempotent: repeated calls are
/// no-ops. Call once before mounting the page.
pub fn init() -> Result<(), DomError> {
    if ENGINE.with(|cell| cell.borrow().is_some()) {
        return Ok(());
    }
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    if window.document().is_none() {
        return Err(DomError::NoDocument);
    }

    ENGINE.with(|cell| {
        *cell.borrow_mut() = Some(Engine::new(DomHost::new(window.clone()), Config::default()));
    });

    // Listeners only mark state; evaluation is coalesced into the frame
    // loop. They live for the page lifetime, hence the deliberate forget.
    let scroll_window = window.clone();
    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        let actual = scroll_window.scroll_y().unwrap_or(0.0);
        let programmatic = EXPECTED_SCROLL
            .get()
            .is_some_and(|expected| (actual - expected).abs() <= 1.5);
        let _ = with_engine(|engine| {
            if programmatic {
                engine.mark_dirty();
            } else {
                EXPECTED_SCROLL.set(None);
                engine.user_scrolled();
            }
        });
    });
    let _ = window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();

    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        let _ = with_engine(|engine| engine.mark_dirty());
    });
    let _ = window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();

    start_frame_loop(window);
    Ok(())
}

/// Recursive `requestAnimationFrame` loop; the closure keeps itself alive
/// through the Rc cycle for the page lifetime.
fn start_frame_loop(window: web_sys::Window) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let inner = holder.clone();
    let raf_window = window.clone();
    *holder.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        frame(timestamp);
        if let Some(callback) = inner.borrow().as_ref() {
            let _ = raf_window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }));
    if let Some(callback) = holder.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

fn frame(timestamp_ms: f64) {
    let dt = match LAST_FRAME_MS.get() {
        Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0) as f32,
        None => 0.0,
    };
    LAST_FRAME_MS.set(Some(timestamp_ms));
    let events = with_engine(|engine| engine.tick(dt)).unwrap_or_default();
    dispatch(events);
}

/// Dispatch notifications outside the engine borrow. The callback is taken
/// out for the call, then put back only if its subscription still exists —
/// one-shot callbacks and disposed scopes drop out here.
fn dispatch(events: Vec<TriggerEvent>) {
    for event in events {
        let callback = CALLBACKS.with(|c| c.borrow_mut().remove(&event.sub));
        if let Some(mut callback) = callback {
            callback(event.kind);
            let alive = with_engine(|engine| engine.has_subscription(event.sub)).unwrap_or(false);
            if alive {
                CALLBACKS.with(|c| c.borrow_mut().insert(event.sub, callback));
            }
        }
    }
}

/// The engine-side scope of one mounted component. Create with
/// [`use_scope`]; everything registered through it is torn down on unmount.
#[derive(Clone, Copy)]
pub struct Scope {
    id: ScopeId,
}

/// Create a component animation scope tied to the current Leptos owner.
/// On cleanup the scope is disposed: in-flight timelines cancel, triggers
/// detach, and no registered callback fires afterwards.
pub fn use_scope() -> Scope {
    let id = with_engine(|engine| engine.create_scope()).unwrap_or(ScopeId::DEAD);
    on_cleanup(move || {
        let removed = with_engine(|engine| engine.dispose_scope(id)).unwrap_or_default();
        CALLBACKS.with(|c| {
            let mut callbacks = c.borrow_mut();
            for sub in removed {
                callbacks.remove(&sub);
            }
        });
    });
    Scope { id }
}

impl Scope {
    /// Register one rendered element as an animation target.
    pub fn register(&self, element: &web_sys::Element) -> TargetId {
        let element = element.clone();
        with_engine(|engine| {
            let target = engine.register_target(self.id);
            engine.host_mut().bind(target, element);
            target
        })
        .unwrap_or(TargetId::DEAD)
    }

    pub fn play(&self, timeline: Timeline) -> PlaybackId {
        with_engine(|engine| engine.play(self.id, timeline)).unwrap_or(PlaybackId::DEAD)
    }

    pub fn observe(&self, trigger: Trigger) -> SubId {
        with_engine(|engine| engine.observe(self.id, trigger)).unwrap_or(SubId::DEAD)
    }

    /// Observe a `Notify` trigger and route its events to `callback`.
    pub fn on_trigger(
        &self,
        trigger: Trigger,
        callback: impl FnMut(TriggerEventKind) + 'static,
    ) -> SubId {
        let sub = self.observe(trigger);
        if !sub.is_dead() {
            CALLBACKS.with(|c| c.borrow_mut().insert(sub, Box::new(callback)));
        }
        sub
    }

    /// Watch the document scroll position over `span_px`, receiving
    /// normalized progress in [0,1] whenever it changes.
    pub fn on_scroll_watch(&self, span_px: f32, mut callback: impl FnMut(f32) + 'static) -> SubId {
        self.on_trigger(Trigger::scroll_watch(span_px), move |kind| {
            if let TriggerEventKind::Progress(progress) = kind {
                callback(progress);
            }
        })
    }
}

/// Seed for randomized stagger order, drawn from the host's RNG.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Animate the document scroll offset to `y` with the configured easing.
pub fn scroll_to_y(y: f32) {
    let _ = with_engine(|engine| {
        let config = *engine.config();
        engine.scroll_to(y, config.scroll_duration, config.scroll_ease);
    });
}

/// Animated scroll to the top of the page (footer action).
pub fn scroll_to_top() {
    scroll_to_y(0.0);
}

/// Animated scroll to an in-page anchor. Anchors are the page's only
/// routing surface, so the id lookup goes through the document here rather
/// than through animation target handles.
pub fn scroll_to_anchor(anchor: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(anchor) else {
        logging::warn!("scroll_to_anchor: no element with id `{anchor}`");
        return;
    };
    let top = element.get_bounding_client_rect().top() as f32;
    let _ = with_engine(|engine| {
        let config = *engine.config();
        let y = (engine.host().scroll_y() + top - config.anchor_offset_px).max(0.0);
        engine.scroll_to(y, config.scroll_duration, config.scroll_ease);
    });
}
