/// Identifies one scheduled task. Ids are never reused within a scheduler,
/// so a tick carrying an old id can be recognised and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// What a timer means to the carousel when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroTimer {
    Autoplay,
    ReverseTick,
    HardResetGrace,
    CompletionUnlock,
    InteractionRelease,
    AutoplayRestart,
    PendingScroll,
}

impl HeroTimer {
    pub fn is_repeating(self) -> bool {
        matches!(self, Self::Autoplay | Self::ReverseTick)
    }
}

/// Clock and timer service the controller runs on. The browser build backs
/// it with gloo timers; tests drive a virtual clock.
pub trait Scheduler {
    /// Milliseconds on a monotonic-enough clock.
    fn now_ms(&self) -> f64;

    /// Fires `timer` once after `delay_ms`.
    fn schedule_once(&mut self, timer: HeroTimer, delay_ms: u32) -> TimerId;

    /// Fires `timer` every `period_ms` until cancelled.
    fn schedule_repeating(&mut self, timer: HeroTimer, period_ms: u32) -> TimerId;

    /// Cancels a pending task. Unknown or already finished ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Timer slots owned by the controller. Every slot holds at most one live id.
#[derive(Debug, Default)]
pub(crate) struct TimerSlots {
    pub autoplay: Option<TimerId>,
    pub reverse: Option<TimerId>,
    pub hard_reset_grace: Option<TimerId>,
    pub completion_unlock: Option<TimerId>,
    pub interaction_release: Option<TimerId>,
    pub autoplay_restart: Option<TimerId>,
    pub pending_scroll: Option<TimerId>,
}

impl TimerSlots {
    pub fn slot_mut(&mut self, timer: HeroTimer) -> &mut Option<TimerId> {
        match timer {
            HeroTimer::Autoplay => &mut self.autoplay,
            HeroTimer::ReverseTick => &mut self.reverse,
            HeroTimer::HardResetGrace => &mut self.hard_reset_grace,
            HeroTimer::CompletionUnlock => &mut self.completion_unlock,
            HeroTimer::InteractionRelease => &mut self.interaction_release,
            HeroTimer::AutoplayRestart => &mut self.autoplay_restart,
            HeroTimer::PendingScroll => &mut self.pending_scroll,
        }
    }

    pub fn is_current(&mut self, timer: HeroTimer, id: TimerId) -> bool {
        *self.slot_mut(timer) == Some(id)
    }

    /// Cancels whatever occupies the slot.
    pub fn clear<S: Scheduler>(&mut self, timer: HeroTimer, scheduler: &mut S) {
        if let Some(id) = self.slot_mut(timer).take() {
            scheduler.cancel(id);
        }
    }

    /// Replaces the slot's task, cancelling the previous one first.
    pub fn arm<S: Scheduler>(&mut self, timer: HeroTimer, period_ms: u32, scheduler: &mut S) {
        self.clear(timer, scheduler);
        let id = if timer.is_repeating() {
            scheduler.schedule_repeating(timer, period_ms)
        } else {
            scheduler.schedule_once(timer, period_ms)
        };
        *self.slot_mut(timer) = Some(id);
    }

    pub fn clear_all<S: Scheduler>(&mut self, scheduler: &mut S) {
        for timer in ALL_TIMERS {
            self.clear(timer, scheduler);
        }
    }
}

pub(crate) const ALL_TIMERS: [HeroTimer; 7] = [
    HeroTimer::Autoplay,
    HeroTimer::ReverseTick,
    HeroTimer::HardResetGrace,
    HeroTimer::CompletionUnlock,
    HeroTimer::InteractionRelease,
    HeroTimer::AutoplayRestart,
    HeroTimer::PendingScroll,
];
