use super::timers::{HeroTimer, TimerId};

/// Keys the carousel reacts to. Anything else stays with the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
    Space,
    Home,
    End,
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowUp" => Some(Self::ArrowUp),
            "PageDown" => Some(Self::PageDown),
            "PageUp" => Some(Self::PageUp),
            " " | "Space" | "Spacebar" => Some(Self::Space),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }

    /// Vertical scroll keys are swallowed while the viewport is locked.
    pub fn is_scroll_key(self) -> bool {
        !matches!(self, Self::ArrowLeft | Self::ArrowRight)
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowDown | Self::PageDown | Self::Space => Some(Direction::Down),
            Self::ArrowUp | Self::PageUp => Some(Direction::Up),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

/// Everything the carousel consumes, from the DOM wiring, the intersection
/// observer and its own timers.
#[derive(Clone, Debug, PartialEq)]
pub enum HeroInput {
    Wheel { delta_y: f64 },
    /// `on_hero` marks touches that began inside the hero section.
    TouchStart { x: f64, y: f64, on_hero: bool },
    TouchEnd { x: f64, y: f64 },
    Key(NavKey),
    DotClicked(usize),
    ArrowUpClicked,
    ArrowDownClicked,
    SeeMoreClicked,
    /// Same-page anchor or skip control that must jump past the hero.
    BypassTo(String),
    PointerEnter,
    PointerLeave,
    HeroVisibility {
        intersecting: bool,
        top: f64,
        viewport_height: f64,
    },
    TimerFired(TimerId, HeroTimer),
}

/// Tells the DOM layer whether to call `preventDefault` on the source event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Consumed,
    PassThrough,
}

impl Disposition {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// Rate limiter for raw wheel and touch gestures.
#[derive(Clone, Debug, Default)]
pub struct GestureGate {
    last_accepted_ms: Option<f64>,
}

impl GestureGate {
    /// Accepts a gesture when it is large enough and the cooldown has passed.
    /// Rejected gestures never move the cooldown window.
    pub fn accept(&mut self, magnitude: f64, threshold: f64, now_ms: f64, cooldown_ms: u32) -> bool {
        if magnitude.abs() < threshold {
            return false;
        }
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < f64::from(cooldown_ms) {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }

    pub fn last_accepted_ms(&self) -> Option<f64> {
        self.last_accepted_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_browser_key_names() {
        assert_eq!(NavKey::from_key(" "), Some(NavKey::Space));
        assert_eq!(NavKey::from_key("PageUp"), Some(NavKey::PageUp));
        assert_eq!(NavKey::from_key("Enter"), None);
        assert_eq!(NavKey::Space.direction(), Some(Direction::Down));
        assert_eq!(NavKey::Home.direction(), None);
        assert!(NavKey::End.is_scroll_key());
        assert!(!NavKey::ArrowRight.is_scroll_key());
    }

    #[test]
    fn gate_drops_small_and_rapid_gestures() {
        let mut gate = GestureGate::default();
        assert!(!gate.accept(9.0, 10.0, 0.0, 300));
        assert!(gate.accept(-40.0, 10.0, 0.0, 300));
        assert!(!gate.accept(40.0, 10.0, 299.0, 300));
        assert!(gate.accept(40.0, 10.0, 300.0, 300));
        assert_eq!(gate.last_accepted_ms(), Some(300.0));
    }
}
