//! Browser side of the hero carousel: DOM rendering, gloo-backed timers and
//! the event listeners that turn page events into [`HeroInput`]s.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{Array, Date};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, TouchEvent, WheelEvent,
};
use yew::Callback;

use super::handle::HeroHandle;
use super::input::{HeroInput, NavKey};
use super::renderer::SlideRenderer;
use super::timers::{HeroTimer, Scheduler, TimerId};

const HERO_SELECTOR: &str = ".hero-section";
const CARD_SELECTOR: &str = ".hero-card";
const DOT_SELECTOR: &str = ".nav-dot";
const NAV_DOTS_SELECTOR: &str = ".hero-nav-dots";
const GUIDE_SELECTOR: &str = ".nav-guide";
const PROGRESS_ID: &str = "hero-progress-bar";
const SEE_MORE_ID: &str = "see-more-button";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

fn set_overflow_hidden(element: Option<HtmlElement>, hidden: bool) {
    if let Some(element) = element {
        let style = element.style();
        if hidden {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

/// Renders carousel state onto the hero markup. Every lookup is optional;
/// missing elements turn the matching command into a no-op.
#[derive(Default)]
pub struct DomSlideRenderer {
    document: Option<Document>,
}

impl DomSlideRenderer {
    pub fn new() -> Self {
        Self { document: document() }
    }

    fn progress_bar(&self) -> Option<Element> {
        self.document.as_ref()?.get_element_by_id(PROGRESS_ID)
    }

    /// Adds `class` to the progress bar and drops it again after `ms`.
    fn flash_progress(&self, class: &'static str, ms: u32) {
        if let Some(bar) = self.progress_bar() {
            set_class(&bar, class, true);
            Timeout::new(ms, move || set_class(&bar, class, false)).forget();
        }
    }

    fn set_locked(&self, locked: bool) {
        let Some(document) = self.document.as_ref() else {
            return;
        };
        set_overflow_hidden(document.body(), locked);
        set_overflow_hidden(
            document
                .document_element()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            locked,
        );
    }
}

impl SlideRenderer for DomSlideRenderer {
    fn render_slide(&mut self, index: usize) {
        let Some(document) = self.document.as_ref() else {
            return;
        };
        let cards = query_all(document, CARD_SELECTOR);
        for (i, card) in cards.iter().enumerate() {
            set_class(card, "active", i == index);
        }
        for (i, dot) in query_all(document, DOT_SELECTOR).iter().enumerate() {
            set_class(dot, "active", i == index);
            let _ = dot.set_attribute("aria-selected", if i == index { "true" } else { "false" });
        }
        if let Some(button) = document.get_element_by_id(SEE_MORE_ID) {
            let is_last = !cards.is_empty() && index == cards.len() - 1;
            set_class(&button, "visible", is_last);
        }
    }

    fn set_progress(&mut self, fraction: f64) {
        if let Some(bar) = self.progress_bar().and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
            let percent = (fraction.clamp(0.0, 1.0) * 100.0).round();
            let _ = bar.style().set_property("width", &format!("{}%", percent));
        }
    }

    fn lock_viewport(&mut self) {
        self.set_locked(true);
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn unlock_viewport(&mut self) {
        self.set_locked(false);
    }

    fn show_completion_indicator(&mut self) {
        self.flash_progress("complete", 1_000);
    }

    fn show_hard_reset_indicator(&mut self) {
        self.flash_progress("hard-reset", 1_200);
    }

    fn set_guide_visible(&mut self, visible: bool) {
        if let Some(document) = self.document.as_ref() {
            for guide in query_all(document, GUIDE_SELECTOR) {
                set_class(&guide, "hidden", !visible);
            }
        }
    }

    fn scroll_to(&mut self, target: &str) {
        let Some(element) = self.document.as_ref().and_then(|d| d.get_element_by_id(target)) else {
            debug!("Scroll target #{} not on this page", target);
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Timers on the browser event loop. Each task is a gloo `TimeoutFuture`
/// loop wrapped in `Abortable`; cancelling aborts the task, which drops the
/// pending JS timeout.
pub struct BrowserScheduler {
    next_id: u64,
    tasks: Rc<RefCell<HashMap<TimerId, AbortHandle>>>,
    on_fire: Callback<(TimerId, HeroTimer)>,
}

impl BrowserScheduler {
    pub fn new(on_fire: Callback<(TimerId, HeroTimer)>) -> Self {
        Self {
            next_id: 0,
            tasks: Rc::new(RefCell::new(HashMap::new())),
            on_fire,
        }
    }

    fn spawn(&mut self, timer: HeroTimer, ms: u32, repeat: bool) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let (handle, registration) = AbortHandle::new_pair();
        self.tasks.borrow_mut().insert(id, handle);

        let tasks = Rc::clone(&self.tasks);
        let on_fire = self.on_fire.clone();
        let ticker = async move {
            loop {
                TimeoutFuture::new(ms).await;
                if !repeat {
                    tasks.borrow_mut().remove(&id);
                }
                on_fire.emit((id, timer));
                if !repeat {
                    break;
                }
            }
        };
        spawn_local(async move {
            let _ = Abortable::new(ticker, registration).await;
        });
        id
    }
}

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        Date::now()
    }

    fn schedule_once(&mut self, timer: HeroTimer, delay_ms: u32) -> TimerId {
        self.spawn(timer, delay_ms, false)
    }

    fn schedule_repeating(&mut self, timer: HeroTimer, period_ms: u32) -> TimerId {
        self.spawn(timer, period_ms, true)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.tasks.borrow_mut().remove(&id) {
            handle.abort();
        }
    }
}

impl Drop for BrowserScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.borrow_mut().drain() {
            handle.abort();
        }
    }
}

/// One registered DOM listener, removed again on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        capture: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        options.set_capture(capture);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| warn!("Could not listen for {}: {:?}", kind, e))
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            capture,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.kind,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    fn new(
        target: &Element,
        root_margin: &str,
        threshold: f64,
        mut handler: impl FnMut(&IntersectionObserverEntry) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(&entry);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&threshold.into());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| warn!("IntersectionObserver unavailable: {:?}", e))
            .ok()?;
        observer.observe(target);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn is_typing_target(document: &Document) -> bool {
    let Some(active) = document.active_element() else {
        return false;
    };
    let tag = active.tag_name();
    tag.eq_ignore_ascii_case("input")
        || tag.eq_ignore_ascii_case("textarea")
        || active
            .dyn_ref::<HtmlElement>()
            .map(|el| el.is_content_editable())
            .unwrap_or(false)
}

fn first_touch(event: &Event) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some((f64::from(touch.screen_x()), f64::from(touch.screen_y())))
}

/// Every page listener the carousel needs. Dropping it detaches them all.
pub struct HeroListeners {
    _listeners: Vec<Listener>,
    _observers: Vec<Observer>,
}

impl HeroListeners {
    pub fn attach(hero: HeroHandle) -> Self {
        let mut listeners = Vec::new();
        let mut observers = Vec::new();

        let Some(document) = document() else {
            return Self {
                _listeners: listeners,
                _observers: observers,
            };
        };
        let doc_target: EventTarget = document.clone().into();

        {
            let hero = hero.clone();
            listeners.extend(Listener::new(&doc_target, "wheel", false, true, move |event| {
                if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                    if hero.dispatch(HeroInput::Wheel { delta_y: wheel.delta_y() }).is_consumed() {
                        event.prevent_default();
                    }
                }
            }));
        }

        {
            let hero = hero.clone();
            listeners.extend(Listener::new(&doc_target, "touchstart", true, false, move |event| {
                if let Some((x, y)) = first_touch(&event) {
                    let on_hero = event
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest(HERO_SELECTOR).ok().flatten())
                        .is_some();
                    hero.dispatch(HeroInput::TouchStart { x, y, on_hero });
                }
            }));
        }

        {
            let hero = hero.clone();
            listeners.extend(Listener::new(&doc_target, "touchend", false, false, move |event| {
                if let Some((x, y)) = first_touch(&event) {
                    hero.dispatch(HeroInput::TouchEnd { x, y });
                }
            }));
        }

        {
            let hero = hero.clone();
            let document = document.clone();
            listeners.extend(Listener::new(&doc_target, "keydown", false, false, move |event| {
                let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if is_typing_target(&document) {
                    return;
                }
                if let Some(key) = NavKey::from_key(&keyboard.key()) {
                    if hero.dispatch(HeroInput::Key(key)).is_consumed() {
                        event.prevent_default();
                    }
                }
            }));
        }

        // Switching to reduced motion mid-session stops autoplay for good.
        if let Some(query) = web_sys::window().and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten()) {
            let hero = hero.clone();
            let target: EventTarget = query.clone().into();
            listeners.extend(Listener::new(&target, "change", true, false, move |_| {
                if query.matches() {
                    info!("Reduced motion turned on, disabling hero autoplay");
                    hero.with_controller(|controller| controller.disable_autoplay());
                }
            }));
        }

        if let Some(section) = document.query_selector(HERO_SELECTOR).ok().flatten() {
            let section_target: EventTarget = section.clone().into();
            {
                let hero = hero.clone();
                listeners.extend(Listener::new(&section_target, "mouseenter", true, false, move |_| {
                    hero.dispatch(HeroInput::PointerEnter);
                }));
            }
            {
                let hero = hero.clone();
                listeners.extend(Listener::new(&section_target, "mouseleave", true, false, move |_| {
                    hero.dispatch(HeroInput::PointerLeave);
                }));
            }

            // Reverse replay trigger.
            {
                let hero = hero.clone();
                observers.extend(Observer::new(&section, "0px 0px -50px 0px", 0.1, move |entry| {
                    let viewport_height = web_sys::window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    hero.dispatch(HeroInput::HeroVisibility {
                        intersecting: entry.is_intersecting(),
                        top: entry.bounding_client_rect().top(),
                        viewport_height,
                    });
                }));
            }

            // Navigation dots follow hero visibility.
            {
                let document = document.clone();
                observers.extend(Observer::new(&section, "0px", 0.3, move |entry| {
                    for dots in query_all(&document, NAV_DOTS_SELECTOR) {
                        set_class(&dots, "hidden", !entry.is_intersecting());
                    }
                }));
            }
        } else {
            debug!("No hero section on this page, skipping hero listeners");
        }

        Self {
            _listeners: listeners,
            _observers: observers,
        }
    }
}

impl Drop for HeroListeners {
    fn drop(&mut self) {
        if let Some(document) = document() {
            for dots in query_all(&document, NAV_DOTS_SELECTOR) {
                set_class(&dots, "hidden", false);
            }
        }
    }
}

/// `prefers-reduced-motion: reduce` media query.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
