//! Test doubles: a virtual-clock scheduler and a renderer that records
//! every command. Both are cheap clones over shared state so a test can
//! keep a handle after moving one into the controller.

use std::cell::RefCell;
use std::rc::Rc;

use super::controller::HeroCarouselController;
use super::input::HeroInput;
use super::renderer::SlideRenderer;
use super::timers::{HeroTimer, Scheduler, TimerId};

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    Slide(usize),
    Progress(f64),
    Lock,
    Unlock,
    Completion,
    HardReset,
    Guide(bool),
    ScrollTo(String),
}

#[derive(Clone, Default)]
pub struct RecordingRenderer {
    calls: Rc<RefCell<Vec<RenderCall>>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, call: &RenderCall) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn slides(&self) -> Vec<usize> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                RenderCall::Slide(i) => Some(*i),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: RenderCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl SlideRenderer for RecordingRenderer {
    fn render_slide(&mut self, index: usize) {
        self.push(RenderCall::Slide(index));
    }

    fn set_progress(&mut self, fraction: f64) {
        self.push(RenderCall::Progress(fraction));
    }

    fn lock_viewport(&mut self) {
        self.push(RenderCall::Lock);
    }

    fn unlock_viewport(&mut self) {
        self.push(RenderCall::Unlock);
    }

    fn show_completion_indicator(&mut self) {
        self.push(RenderCall::Completion);
    }

    fn show_hard_reset_indicator(&mut self) {
        self.push(RenderCall::HardReset);
    }

    fn set_guide_visible(&mut self, visible: bool) {
        self.push(RenderCall::Guide(visible));
    }

    fn scroll_to(&mut self, target: &str) {
        self.push(RenderCall::ScrollTo(target.to_string()));
    }
}

#[derive(Debug)]
struct Pending {
    id: TimerId,
    timer: HeroTimer,
    due_ms: f64,
    period_ms: Option<u32>,
}

#[derive(Debug, Default)]
struct ClockInner {
    now_ms: f64,
    next_id: u64,
    pending: Vec<Pending>,
    cancelled: Vec<TimerId>,
}

#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ClockInner>>,
}

impl ManualScheduler {
    pub fn now(&self) -> f64 {
        self.inner.borrow().now_ms
    }

    /// Moves the clock without firing anything.
    pub fn set_now(&self, now_ms: f64) {
        self.inner.borrow_mut().now_ms = now_ms;
    }

    pub fn pending_timers(&self) -> Vec<HeroTimer> {
        self.inner.borrow().pending.iter().map(|p| p.timer).collect()
    }

    pub fn is_pending(&self, timer: HeroTimer) -> bool {
        self.pending_timers().contains(&timer)
    }

    pub fn cancelled(&self) -> Vec<TimerId> {
        self.inner.borrow().cancelled.clone()
    }

    /// Pops the earliest task due at or before `until_ms`, moving the clock
    /// to its due time. Repeating tasks are queued again.
    fn pop_due(&self, until_ms: f64) -> Option<(TimerId, HeroTimer)> {
        let mut inner = self.inner.borrow_mut();
        let position = inner
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .partial_cmp(&b.due_ms)
                    .unwrap()
                    .then(a.id.cmp(&b.id))
            })
            .map(|(i, _)| i)?;
        let task = inner.pending.remove(position);
        inner.now_ms = task.due_ms;
        if let Some(period) = task.period_ms {
            inner.pending.push(Pending {
                due_ms: task.due_ms + f64::from(period),
                ..task
            });
            let last = inner.pending.last().unwrap();
            return Some((last.id, last.timer));
        }
        Some((task.id, task.timer))
    }
}

impl Scheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.now()
    }

    fn schedule_once(&mut self, timer: HeroTimer, delay_ms: u32) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = TimerId(inner.next_id);
        let due_ms = inner.now_ms + f64::from(delay_ms);
        inner.pending.push(Pending {
            id,
            timer,
            due_ms,
            period_ms: None,
        });
        id
    }

    fn schedule_repeating(&mut self, timer: HeroTimer, period_ms: u32) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = TimerId(inner.next_id);
        let due_ms = inner.now_ms + f64::from(period_ms);
        inner.pending.push(Pending {
            id,
            timer,
            due_ms,
            period_ms: Some(period_ms),
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        let mut inner = self.inner.borrow_mut();
        inner.pending.retain(|p| p.id != id);
        inner.cancelled.push(id);
    }
}

pub type TestController = HeroCarouselController<RecordingRenderer, ManualScheduler>;

/// Fires every task due within the next `ms` milliseconds, in order, and
/// leaves the clock at `now + ms`. Returns what fired.
pub fn run_for(controller: &mut TestController, clock: &ManualScheduler, ms: f64) -> Vec<HeroTimer> {
    let until = clock.now() + ms;
    let mut fired = Vec::new();
    while let Some((id, timer)) = clock.pop_due(until) {
        fired.push(timer);
        controller.handle(HeroInput::TimerFired(id, timer));
    }
    clock.set_now(until);
    fired
}
