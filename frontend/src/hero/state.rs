use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    /// Input and autoplay walk the slides upwards; the page is locked.
    Forward,
    /// Forced replay from the last slide back to the first.
    Reverse,
    /// The carousel no longer intercepts scrolling.
    Unlocked,
}

impl ScrollMode {
    pub fn is_scrolljacking(self) -> bool {
        matches!(self, Self::Forward | Self::Reverse)
    }
}

impl fmt::Display for ScrollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
            Self::Unlocked => "unlocked",
        };
        f.write_str(name)
    }
}

/// Snapshot of the carousel. Only the controller mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub slide_count: usize,
    pub current_index: usize,
    pub mode: ScrollMode,
    pub viewport_locked: bool,
    pub has_completed_forward_sequence: bool,
    pub is_hard_reset_active: bool,
    pub hard_reset_count: u32,
    pub user_interacting: bool,
    pub last_input_ms: Option<f64>,
    pub hover_paused: bool,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current_index: 0,
            mode: ScrollMode::Forward,
            viewport_locked: true,
            has_completed_forward_sequence: false,
            is_hard_reset_active: false,
            hard_reset_count: 0,
            user_interacting: false,
            last_input_ms: None,
            hover_paused: false,
        }
    }

    /// State of a carousel without slides: nothing is locked, nothing runs.
    pub fn inert() -> Self {
        Self {
            mode: ScrollMode::Unlocked,
            viewport_locked: false,
            ..Self::new(0)
        }
    }

    pub fn is_inert(&self) -> bool {
        self.slide_count == 0
    }

    pub fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    pub fn is_on_last_slide(&self) -> bool {
        self.slide_count > 0 && self.current_index == self.last_index()
    }

    pub fn progress(&self) -> f64 {
        if self.slide_count == 0 {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.slide_count as f64
    }
}
