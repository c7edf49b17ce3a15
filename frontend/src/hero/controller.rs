use log::{debug, info};

use super::config::HeroConfig;
use super::input::{Direction, Disposition, GestureGate, HeroInput, NavKey};
use super::renderer::SlideRenderer;
use super::state::{CarouselState, ScrollMode};
use super::timers::{HeroTimer, Scheduler, TimerId, TimerSlots};

/// Scroll-jacking controller for the hero cards.
///
/// The controller owns the carousel state and every timer the carousel
/// uses. It never touches the DOM itself: page effects go through the
/// [`SlideRenderer`], time goes through the [`Scheduler`], and input arrives
/// as [`HeroInput`] values through [`handle`](Self::handle).
pub struct HeroCarouselController<R, S>
where
    R: SlideRenderer,
    S: Scheduler,
{
    config: HeroConfig,
    state: CarouselState,
    renderer: R,
    scheduler: S,
    timers: TimerSlots,
    gate: GestureGate,
    touch_start: Option<TouchStart>,
    pending_scroll_target: Option<String>,
    torn_down: bool,
}

#[derive(Clone, Copy, Debug)]
struct TouchStart {
    x: f64,
    y: f64,
    on_hero: bool,
}

impl<R, S> HeroCarouselController<R, S>
where
    R: SlideRenderer,
    S: Scheduler,
{
    /// Builds the controller in Forward mode on slide 0 with the viewport
    /// locked. Without slides the controller stays inert.
    pub fn new(config: HeroConfig, slide_count: usize, renderer: R, scheduler: S) -> Self {
        let state = if slide_count == 0 {
            CarouselState::inert()
        } else {
            CarouselState::new(slide_count)
        };

        let mut controller = Self {
            config,
            state,
            renderer,
            scheduler,
            timers: TimerSlots::default(),
            gate: GestureGate::default(),
            touch_start: None,
            pending_scroll_target: None,
            torn_down: false,
        };

        if controller.state.is_inert() {
            info!("Hero carousel has no slides, staying inert");
            return controller;
        }

        info!("Hero carousel ready with {} slides", slide_count);
        controller.renderer.lock_viewport();
        controller.render_current();
        controller.start_autoplay();
        controller
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn mode(&self) -> ScrollMode {
        self.state.mode
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_scrolljacking(&self) -> bool {
        self.state.mode.is_scrolljacking()
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.timers.autoplay.is_some()
    }

    pub fn is_reverse_running(&self) -> bool {
        self.timers.reverse.is_some()
    }

    /// Feeds one event through the state machine.
    pub fn handle(&mut self, input: HeroInput) -> Disposition {
        if self.state.is_inert() || self.torn_down {
            return Disposition::PassThrough;
        }

        match input {
            HeroInput::Wheel { delta_y } => self.on_wheel(delta_y),
            HeroInput::TouchStart { x, y, on_hero } => {
                self.touch_start = Some(TouchStart { x, y, on_hero });
                Disposition::PassThrough
            }
            HeroInput::TouchEnd { x, y } => self.on_touch_end(x, y),
            HeroInput::Key(key) => self.on_key(key),
            HeroInput::DotClicked(index) => {
                self.on_dot(index);
                Disposition::Consumed
            }
            HeroInput::ArrowUpClicked => {
                self.on_arrow(Direction::Up);
                Disposition::Consumed
            }
            HeroInput::ArrowDownClicked => {
                self.on_arrow(Direction::Down);
                Disposition::Consumed
            }
            HeroInput::SeeMoreClicked => {
                let target = self.config.completion_target.clone();
                self.bypass_to(&target);
                Disposition::Consumed
            }
            HeroInput::BypassTo(target) => {
                self.bypass_to(&target);
                Disposition::Consumed
            }
            HeroInput::PointerEnter => {
                self.state.hover_paused = true;
                self.pause_autoplay();
                Disposition::PassThrough
            }
            HeroInput::PointerLeave => {
                self.state.hover_paused = false;
                self.start_autoplay();
                Disposition::PassThrough
            }
            HeroInput::HeroVisibility {
                intersecting,
                top,
                viewport_height,
            } => {
                self.on_visibility(intersecting, top, viewport_height);
                Disposition::PassThrough
            }
            HeroInput::TimerFired(id, timer) => {
                self.on_timer(id, timer);
                Disposition::PassThrough
            }
        }
    }

    /// Moves one slide up. Only acts in Forward mode and never wraps.
    pub fn advance(&mut self) -> bool {
        if self.state.mode != ScrollMode::Forward
            || self.state.is_inert()
            || self.state.current_index >= self.state.last_index()
        {
            return false;
        }
        self.state.current_index += 1;
        self.render_current();
        true
    }

    /// Moves one slide down. Only acts in Forward mode and never wraps.
    pub fn retreat(&mut self) -> bool {
        if self.state.mode != ScrollMode::Forward || self.state.current_index == 0 {
            return false;
        }
        self.state.current_index -= 1;
        self.render_current();
        true
    }

    /// Jumps straight to `index`. Out of range indices are ignored.
    pub fn show_slide(&mut self, index: usize) {
        if index >= self.state.slide_count {
            return;
        }
        self.state.current_index = index;
        self.render_current();
    }

    /// Marks the forward walk as done and hands the page back to the
    /// visitor once the completion indicator has played.
    pub fn complete_forward_sequence(&mut self) {
        if self.state.is_inert() {
            return;
        }
        info!("Hero forward sequence complete, unlocking in {}ms", self.config.completion_delay_ms);

        self.stop_forward_timers();
        self.timers.clear(HeroTimer::ReverseTick, &mut self.scheduler);
        self.timers.clear(HeroTimer::HardResetGrace, &mut self.scheduler);

        self.state.has_completed_forward_sequence = true;
        self.state.mode = ScrollMode::Unlocked;
        self.state.is_hard_reset_active = false;
        self.state.user_interacting = false;

        self.renderer.set_guide_visible(false);
        self.renderer.show_completion_indicator();
        self.timers.arm(
            HeroTimer::CompletionUnlock,
            self.config.completion_delay_ms,
            &mut self.scheduler,
        );
    }

    /// Ends a reverse replay: back to slide 0 in Forward mode, viewport
    /// still locked, backward navigation and autoplay suppressed until the
    /// visitor completes the sequence again.
    pub fn hard_reset_scrolljacking(&mut self) {
        if self.state.is_inert() {
            return;
        }
        self.timers.clear_all(&mut self.scheduler);

        self.state.is_hard_reset_active = true;
        self.state.hard_reset_count += 1;
        self.state.mode = ScrollMode::Forward;
        self.state.current_index = 0;
        self.state.user_interacting = false;
        info!("Hero hard reset #{}", self.state.hard_reset_count);

        if !self.state.viewport_locked {
            self.lock_viewport();
        }
        self.renderer.show_hard_reset_indicator();
        self.renderer.set_guide_visible(true);
        self.render_current();
    }

    /// Releases scroll-jacking right away, whatever the current mode.
    pub fn bypass_scrolljacking(&mut self) {
        if self.state.is_inert() || self.torn_down {
            return;
        }
        info!("Hero scrolljacking bypassed from {} mode", self.state.mode);
        self.timers.clear_all(&mut self.scheduler);
        self.pending_scroll_target = None;

        self.state.has_completed_forward_sequence = true;
        self.state.mode = ScrollMode::Unlocked;
        self.state.is_hard_reset_active = false;
        self.state.user_interacting = false;

        self.unlock_viewport();
        self.renderer.set_progress(1.0);
    }

    /// Bypasses, then scrolls to the element with id `target` after a short
    /// delay so the unlock is applied first.
    pub fn bypass_to(&mut self, target: &str) {
        if self.state.is_inert() || self.torn_down {
            return;
        }
        self.bypass_scrolljacking();
        self.pending_scroll_target = Some(target.trim_start_matches('#').to_string());
        self.timers.arm(
            HeroTimer::PendingScroll,
            self.config.bypass_scroll_delay_ms,
            &mut self.scheduler,
        );
    }

    /// Stops the autoplay timer without changing whether autoplay may run.
    pub fn pause_autoplay(&mut self) {
        self.timers.clear(HeroTimer::Autoplay, &mut self.scheduler);
    }

    /// Turns autoplay off for the rest of the session.
    pub fn disable_autoplay(&mut self) {
        self.config.autoplay_enabled = false;
        self.pause_autoplay();
        self.timers.clear(HeroTimer::AutoplayRestart, &mut self.scheduler);
    }

    /// Cancels every timer and gives the page its scrolling back.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if self.state.is_inert() {
            return;
        }
        debug!("Tearing down hero carousel");
        self.timers.clear_all(&mut self.scheduler);
        self.pending_scroll_target = None;
        self.touch_start = None;

        self.state.mode = ScrollMode::Unlocked;
        self.state.is_hard_reset_active = false;
        self.state.hard_reset_count = 0;
        self.state.user_interacting = false;
        self.unlock_viewport();
    }

    fn on_wheel(&mut self, delta_y: f64) -> Disposition {
        if !self.is_intercepting() {
            return Disposition::PassThrough;
        }
        let now = self.scheduler.now_ms();
        if self.gate.accept(
            delta_y,
            self.config.wheel_threshold,
            now,
            self.config.input_cooldown_ms,
        ) {
            self.state.last_input_ms = self.gate.last_accepted_ms();
            let direction = if delta_y > 0.0 { Direction::Down } else { Direction::Up };
            self.on_gesture(direction);
        }
        Disposition::Consumed
    }

    fn on_touch_end(&mut self, x: f64, y: f64) -> Disposition {
        let Some(start) = self.touch_start.take() else {
            return Disposition::PassThrough;
        };
        let delta_x = start.x - x;
        let delta_y = start.y - y;

        if self.is_intercepting() {
            // Horizontal swipes act like vertical ones while locked.
            let magnitude = if delta_x.abs() > delta_y.abs() && start.on_hero {
                delta_x
            } else {
                delta_y
            };
            let now = self.scheduler.now_ms();
            if self.gate.accept(
                magnitude,
                self.config.touch_threshold,
                now,
                self.config.input_cooldown_ms,
            ) {
                self.state.last_input_ms = self.gate.last_accepted_ms();
                let direction = if magnitude > 0.0 { Direction::Down } else { Direction::Up };
                self.on_gesture(direction);
            }
            return Disposition::Consumed;
        }

        if start.on_hero && delta_x.abs() > self.config.swipe_threshold {
            if delta_x > 0.0 {
                self.step_free(Direction::Down);
            } else {
                self.step_free(Direction::Up);
            }
        }
        Disposition::PassThrough
    }

    fn on_key(&mut self, key: NavKey) -> Disposition {
        if key.is_scroll_key() {
            if !self.is_intercepting() {
                return Disposition::PassThrough;
            }
            if let Some(direction) = key.direction() {
                self.on_gesture(direction);
            }
            return Disposition::Consumed;
        }

        let direction = if key == NavKey::ArrowRight {
            Direction::Down
        } else {
            Direction::Up
        };
        match self.state.mode {
            ScrollMode::Reverse => {}
            ScrollMode::Forward if self.state.viewport_locked => self.on_gesture(direction),
            _ => self.step_free(direction),
        }
        Disposition::Consumed
    }

    fn on_dot(&mut self, index: usize) {
        if index >= self.state.slide_count {
            return;
        }
        match self.state.mode {
            ScrollMode::Reverse => debug!("Ignoring dot {} during reverse replay", index),
            ScrollMode::Forward
                if self.state.is_hard_reset_active && index < self.state.current_index =>
            {
                debug!("Ignoring backward dot {} after hard reset", index);
            }
            _ => {
                self.show_slide(index);
                self.note_manual_navigation();
            }
        }
    }

    fn on_arrow(&mut self, direction: Direction) {
        match self.state.mode {
            ScrollMode::Reverse => {}
            _ if direction == Direction::Down && self.state.is_on_last_slide() => {
                self.complete_forward_sequence();
            }
            ScrollMode::Forward => self.on_gesture(direction),
            ScrollMode::Unlocked => self.step_free(direction),
        }
    }

    /// One accepted "down" or "up" from wheel, touch, keyboard or arrows.
    fn on_gesture(&mut self, direction: Direction) {
        match self.state.mode {
            ScrollMode::Forward => match direction {
                Direction::Down => {
                    if !self.advance() {
                        self.complete_forward_sequence();
                        return;
                    }
                    self.note_manual_navigation();
                }
                Direction::Up => {
                    if self.state.is_hard_reset_active || self.state.current_index == 0 {
                        debug!(
                            "Absorbed upward gesture on slide {} (hard reset: {})",
                            self.state.current_index, self.state.is_hard_reset_active
                        );
                    } else if self.retreat() {
                        self.note_manual_navigation();
                    }
                }
            },
            ScrollMode::Reverse => debug!("Ignoring manual input during reverse replay"),
            ScrollMode::Unlocked => {}
        }
    }

    /// Wrapping navigation used once the carousel is no longer locked.
    fn step_free(&mut self, direction: Direction) {
        if self.state.mode == ScrollMode::Reverse {
            return;
        }
        let count = self.state.slide_count;
        let next = match direction {
            Direction::Down => (self.state.current_index + 1) % count,
            Direction::Up => (self.state.current_index + count - 1) % count,
        };
        self.show_slide(next);
        self.note_manual_navigation();
    }

    fn on_visibility(&mut self, intersecting: bool, top: f64, viewport_height: f64) {
        if !intersecting || self.state.mode != ScrollMode::Unlocked || self.state.viewport_locked {
            return;
        }
        if top <= viewport_height * self.config.reverse_trigger_ratio {
            self.engage_reverse_mode();
        }
    }

    fn engage_reverse_mode(&mut self) {
        if self.state.mode == ScrollMode::Reverse {
            return;
        }
        // Forward timers die before the reverse timer exists.
        self.timers.clear_all(&mut self.scheduler);
        self.pending_scroll_target = None;

        self.state.mode = ScrollMode::Reverse;
        self.state.user_interacting = false;
        self.state.current_index = self.state.last_index();
        info!("Hero reverse replay from slide {}", self.state.current_index);

        self.renderer.set_guide_visible(true);
        self.lock_viewport();
        self.render_current();

        let interval = self.config.reverse_interval_ms(self.state.current_index);
        self.timers.arm(HeroTimer::ReverseTick, interval, &mut self.scheduler);
    }

    fn on_timer(&mut self, id: TimerId, timer: HeroTimer) {
        if !self.timers.is_current(timer, id) {
            debug!("Dropping stale {:?} tick {:?}", timer, id);
            return;
        }
        if !timer.is_repeating() {
            *self.timers.slot_mut(timer) = None;
        }

        match timer {
            HeroTimer::Autoplay => self.autoplay_tick(),
            HeroTimer::ReverseTick => self.reverse_tick(),
            HeroTimer::HardResetGrace => {
                if self.state.mode == ScrollMode::Reverse {
                    self.hard_reset_scrolljacking();
                }
            }
            HeroTimer::CompletionUnlock => {
                if self.state.mode == ScrollMode::Unlocked {
                    self.unlock_viewport();
                    let target = self.config.completion_target.clone();
                    self.renderer.scroll_to(&target);
                }
            }
            HeroTimer::InteractionRelease => {
                self.state.user_interacting = false;
                if self.state.mode == ScrollMode::Forward && self.config.autoplay_enabled {
                    self.timers.arm(
                        HeroTimer::AutoplayRestart,
                        self.config.autoplay_restart_grace_ms,
                        &mut self.scheduler,
                    );
                }
            }
            HeroTimer::AutoplayRestart => self.start_autoplay(),
            HeroTimer::PendingScroll => {
                if let Some(target) = self.pending_scroll_target.take() {
                    self.renderer.scroll_to(&target);
                }
            }
        }
    }

    fn autoplay_tick(&mut self) {
        if self.state.mode != ScrollMode::Forward {
            self.pause_autoplay();
            return;
        }
        if self.state.user_interacting || self.state.hover_paused {
            return;
        }
        if !self.advance() {
            self.complete_forward_sequence();
        }
    }

    fn reverse_tick(&mut self) {
        if self.state.mode != ScrollMode::Reverse {
            self.timers.clear(HeroTimer::ReverseTick, &mut self.scheduler);
            return;
        }
        if self.state.current_index > 0 {
            self.state.current_index -= 1;
            self.render_current();
        }
        if self.state.current_index == 0 {
            self.timers.clear(HeroTimer::ReverseTick, &mut self.scheduler);
            self.timers.arm(
                HeroTimer::HardResetGrace,
                self.config.hard_reset_grace_ms,
                &mut self.scheduler,
            );
        }
    }

    fn start_autoplay(&mut self) {
        let allowed = self.config.autoplay_enabled
            && self.state.mode == ScrollMode::Forward
            && !self.state.is_hard_reset_active
            && !self.state.user_interacting
            && !self.state.hover_paused;
        if !allowed {
            return;
        }
        self.timers.arm(
            HeroTimer::Autoplay,
            self.config.autoplay_delay_ms,
            &mut self.scheduler,
        );
    }

    /// Suppresses autoplay for the interaction window. Only matters while
    /// autoplay could run, so it is skipped outside Forward mode.
    fn note_manual_navigation(&mut self) {
        if self.state.mode != ScrollMode::Forward {
            return;
        }
        self.state.user_interacting = true;
        self.pause_autoplay();
        self.timers.clear(HeroTimer::AutoplayRestart, &mut self.scheduler);
        self.timers.arm(
            HeroTimer::InteractionRelease,
            self.config.interaction_window_ms,
            &mut self.scheduler,
        );
    }

    fn stop_forward_timers(&mut self) {
        self.timers.clear(HeroTimer::Autoplay, &mut self.scheduler);
        self.timers.clear(HeroTimer::InteractionRelease, &mut self.scheduler);
        self.timers.clear(HeroTimer::AutoplayRestart, &mut self.scheduler);
    }

    fn is_intercepting(&self) -> bool {
        self.state.viewport_locked && self.state.mode.is_scrolljacking()
    }

    fn render_current(&mut self) {
        self.renderer.render_slide(self.state.current_index);
        self.renderer.set_progress(self.state.progress());
    }

    fn lock_viewport(&mut self) {
        self.state.viewport_locked = true;
        self.renderer.lock_viewport();
    }

    fn unlock_viewport(&mut self) {
        self.state.viewport_locked = false;
        self.renderer.unlock_viewport();
    }
}

impl<R, S> Drop for HeroCarouselController<R, S>
where
    R: SlideRenderer,
    S: Scheduler,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
