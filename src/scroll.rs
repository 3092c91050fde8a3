//! Scroll-linked effects: navbar shading, scroll spy and hero parallax.

use crate::config::{NAVBAR_SCROLLED_AT_PX, PARALLAX_FACTOR, SCROLL_SPY_OFFSET_PX};
use std::rc::Rc;
use yew::functional::Reducible;

/// A page section as seen by the scroll spy.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionMark {
    pub id: String,
    pub top: f64,
}

/// Everything the page needs to apply after one (throttled) scroll sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollEffects {
    pub navbar_scrolled: bool,
    pub active_section: Option<String>,
    /// `translateY` for the hero. A sample taken past the hero carries `None`;
    /// the reducer then keeps the last applied offset.
    pub parallax_px: Option<f64>,
}

impl ScrollEffects {
    pub fn sample(scroll_y: f64, sections: &[SectionMark], hero_height: Option<f64>) -> Self {
        Self {
            navbar_scrolled: navbar_scrolled(scroll_y),
            active_section: active_section(sections, scroll_y).map(str::to_owned),
            parallax_px: hero_height.and_then(|h| parallax_offset(scroll_y, h)),
        }
    }
}

impl Default for ScrollEffects {
    fn default() -> Self {
        Self::sample(0.0, &[], None)
    }
}

/// Each throttled sample replaces the previous one, except that the hero
/// stays where it was once the page scrolls past it.
impl Reducible for ScrollEffects {
    type Action = ScrollEffects;

    fn reduce(self: Rc<Self>, sample: ScrollEffects) -> Rc<Self> {
        let parallax_px = sample.parallax_px.or(self.parallax_px);
        Rc::new(Self {
            parallax_px,
            ..sample
        })
    }
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AT_PX
}

/// Last section (document order) whose top, minus the spy offset, is above `scroll_y`.
pub fn active_section(sections: &[SectionMark], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SCROLL_SPY_OFFSET_PX)
        .last()
        .map(|s| s.id.as_str())
}

pub fn parallax_offset(scroll_y: f64, hero_height: f64) -> Option<f64> {
    (scroll_y < hero_height).then(|| scroll_y * PARALLAX_FACTOR)
}
