//! Behaviour layer for the PWL powerlifting association website.
//!
//! The library holds the host-independent logic (carousel state machine,
//! scroll effects, menu and accordion state, content loading); the binary
//! wires it to the page with Yew components.

pub mod accordion;
pub mod actions;
pub mod config;
pub mod content;
pub mod nav;
pub mod scroll;
pub mod slider;
pub mod timer;
pub mod toast;

pub use content::{FaqEntry, Slide};
pub use slider::{AutoplayScheduler, Slider, SliderCommand, SliderState};
pub use timer::{Debouncer, DelayScheduler, TimerSlot};

/// Current viewport width, 0 when the window is unavailable.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
