/// Outbound commands from the carousel to the page. Implementations must
/// tolerate missing elements by doing nothing.
pub trait SlideRenderer {
    fn render_slide(&mut self, index: usize);

    /// `fraction` is in `0.0..=1.0`.
    fn set_progress(&mut self, fraction: f64);

    fn lock_viewport(&mut self);

    fn unlock_viewport(&mut self);

    fn show_completion_indicator(&mut self);

    fn show_hard_reset_indicator(&mut self);

    /// The "scroll to continue" hint next to the hero.
    fn set_guide_visible(&mut self, _visible: bool) {}

    /// Smooth-scrolls the page to the element with id `target`.
    fn scroll_to(&mut self, target: &str);
}
