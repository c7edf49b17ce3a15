use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use yew::Callback;

use super::config::HeroConfig;
use super::controller::HeroCarouselController;
use super::dom::{BrowserScheduler, DomSlideRenderer};
use super::input::{Disposition, HeroInput};
use super::renderer::SlideRenderer;
use super::timers::{HeroTimer, Scheduler, TimerId};

/// Shared slot holding the page's carousel controller. The landing page
/// installs a controller on mount; navigation and timers reach it through
/// clones of the handle.
pub struct HeroHandle<R = DomSlideRenderer, S = BrowserScheduler>
where
    R: SlideRenderer,
    S: Scheduler,
{
    inner: Rc<RefCell<Option<HeroCarouselController<R, S>>>>,
}

impl<R: SlideRenderer, S: Scheduler> Clone for HeroHandle<R, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: SlideRenderer, S: Scheduler> Default for HeroHandle<R, S> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }
}

impl<R: SlideRenderer, S: Scheduler> PartialEq for HeroHandle<R, S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<R: SlideRenderer, S: Scheduler> HeroHandle<R, S> {
    /// Replaces any installed controller. The previous one is torn down
    /// before `build` runs, so its unlock cannot undo the new lock.
    pub fn install(&self, build: impl FnOnce() -> HeroCarouselController<R, S>) {
        self.clear();
        let controller = build();
        *self.inner.borrow_mut() = Some(controller);
    }

    /// Drops the installed controller, which unlocks the page and cancels
    /// its timers.
    pub fn clear(&self) {
        let previous = self.inner.borrow_mut().take();
        if previous.is_some() {
            info!("Hero carousel unmounted");
        }
        drop(previous);
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().is_some()
    }

    pub fn dispatch(&self, input: HeroInput) -> Disposition {
        match self.inner.try_borrow_mut() {
            Ok(mut slot) => match slot.as_mut() {
                Some(controller) => controller.handle(input),
                None => Disposition::PassThrough,
            },
            Err(_) => {
                warn!("Hero input {:?} arrived while the controller was busy", input);
                Disposition::PassThrough
            }
        }
    }

    /// Leaves scroll-jacking and scrolls to the section with id `target`.
    pub fn bypass_to(&self, target: &str) {
        self.dispatch(HeroInput::BypassTo(target.to_string()));
    }

    pub fn is_scrolljacking(&self) -> bool {
        self.inner
            .try_borrow()
            .map(|slot| slot.as_ref().map(|c| c.is_scrolljacking()).unwrap_or(false))
            .unwrap_or(false)
    }

    pub fn with_controller<T>(&self, f: impl FnOnce(&mut HeroCarouselController<R, S>) -> T) -> Option<T> {
        let mut slot = self.inner.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    }
}

impl HeroHandle<DomSlideRenderer, BrowserScheduler> {
    /// Builds a browser controller over the current page and installs it.
    /// Timer callbacks hold only a weak reference back to the slot.
    pub fn mount(&self, config: HeroConfig, slide_count: usize) {
        let weak = Rc::downgrade(&self.inner);
        let on_fire = Callback::from(move |(id, timer): (TimerId, HeroTimer)| {
            if let Some(inner) = weak.upgrade() {
                HeroHandle { inner }.dispatch(HeroInput::TimerFired(id, timer));
            }
        });
        self.install(|| {
            HeroCarouselController::new(
                config,
                slide_count,
                DomSlideRenderer::new(),
                BrowserScheduler::new(on_fire),
            )
        });
        info!("Hero carousel mounted with {} slides", slide_count);
    }
}
