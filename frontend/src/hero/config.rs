/// Tunables for the hero carousel. Defaults match the production site.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroConfig {
    /// Period of the autoplay timer in Forward mode.
    pub autoplay_delay_ms: u32,
    /// Minimum time between two accepted wheel/touch gestures.
    pub input_cooldown_ms: u32,
    /// Smallest wheel delta that counts as a gesture.
    pub wheel_threshold: f64,
    /// Smallest vertical touch travel that counts as a gesture.
    pub touch_threshold: f64,
    /// Horizontal travel needed for a swipe to switch slides freely.
    pub swipe_threshold: f64,
    /// Total time the reverse replay takes from the last slide to the first.
    pub reverse_duration_ms: u32,
    /// Reverse tick period used when the replay starts on slide 0.
    pub reverse_fallback_interval_ms: u32,
    /// Pause on slide 0 before the hard reset kicks in.
    pub hard_reset_grace_ms: u32,
    /// How long the completion indicator plays before the viewport unlocks.
    pub completion_delay_ms: u32,
    /// How long manual input keeps autoplay suppressed.
    pub interaction_window_ms: u32,
    /// Delay between the end of the interaction window and autoplay resuming.
    pub autoplay_restart_grace_ms: u32,
    /// Delay between a bypass and the scroll to its target.
    pub bypass_scroll_delay_ms: u32,
    /// Hero top must sit at or above this fraction of the viewport height
    /// for a reappearing hero to start the reverse replay.
    pub reverse_trigger_ratio: f64,
    /// Element id scrolled to once the forward sequence completes.
    pub completion_target: String,
    /// When false autoplay never runs, not even after manual navigation.
    pub autoplay_enabled: bool,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: 6_000,
            input_cooldown_ms: 300,
            wheel_threshold: 10.0,
            touch_threshold: 20.0,
            swipe_threshold: 50.0,
            reverse_duration_ms: 1_000,
            reverse_fallback_interval_ms: 250,
            hard_reset_grace_ms: 25,
            completion_delay_ms: 800,
            interaction_window_ms: 3_000,
            autoplay_restart_grace_ms: 1_000,
            bypass_scroll_delay_ms: 50,
            reverse_trigger_ratio: 0.3,
            completion_target: "video-section".to_string(),
            autoplay_enabled: true,
        }
    }
}

impl HeroConfig {
    /// Interval between reverse ticks when the replay starts at `from_index`.
    pub fn reverse_interval_ms(&self, from_index: usize) -> u32 {
        if from_index == 0 {
            self.reverse_fallback_interval_ms
        } else {
            (self.reverse_duration_ms / from_index as u32).max(1)
        }
    }

    /// Config without autoplay, used when the visitor prefers reduced motion.
    pub fn reduced_motion(mut self) -> Self {
        self.autoplay_enabled = false;
        self
    }
}
