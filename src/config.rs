//! Application-level configuration constants.

// Slider behaviour
pub const SLIDER_BREAKPOINT_PX: f64 = 768.0;
pub const SLIDER_GAP_PX: f64 = 32.0;
pub const AUTOPLAY_PERIOD_MS: u32 = 8_000;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// Event coalescing
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const SCROLL_THROTTLE_MS: u32 = 100;

// Scroll effects
pub const NAVBAR_HEIGHT_PX: f64 = 80.0;
pub const NAVBAR_SCROLLED_AT_PX: f64 = 100.0;
pub const SCROLL_SPY_OFFSET_PX: f64 = 150.0;
pub const PARALLAX_FACTOR: f64 = 0.5;
pub const MENU_CLOSE_ABOVE_PX: f64 = 768.0;

// Reveal on scroll
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// Transient effects
pub const RIPPLE_LIFETIME_MS: u32 = 600;
pub const TOAST_VISIBLE_MS: u32 = 3_000;
pub const TOAST_EXIT_MS: u32 = 500;

// Navigation labels
pub const MENU_OPEN_LABEL: &str = "Ouvrir le menu de navigation";
pub const MENU_CLOSE_LABEL: &str = "Fermer le menu de navigation";

/// Tunables for one slider instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    /// Viewport width from which two slides are shown side by side.
    pub breakpoint_px: f64,
    pub gap_px: f64,
    pub autoplay_period_ms: u32,
    pub resize_debounce_ms: u32,
    /// Minimum horizontal travel for a touch gesture to count as a swipe.
    pub swipe_threshold_px: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: SLIDER_BREAKPOINT_PX,
            gap_px: SLIDER_GAP_PX,
            autoplay_period_ms: AUTOPLAY_PERIOD_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }
}
