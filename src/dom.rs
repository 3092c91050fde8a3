//! Thin helpers over the browser DOM.
//! Every lookup degrades to `None` so a missing element disables the feature.

use gloo_utils::{document, window};
use log::debug;
use pwl_site::nav::scroll_target;
use pwl_site::scroll::SectionMark;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Vertical scroll position of the page.
pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Smoothly scroll so section `id` sits below the navbar. Returns whether it exists.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(section) = element_by_id(id) else {
        debug!("No section '#{}' on this page", id);
        return false;
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(section.offset_top() as f64));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
    true
}

/// Current offsets of the given sections, in the order given.
pub fn section_marks(ids: &[&str]) -> Vec<SectionMark> {
    ids.iter()
        .filter_map(|id| {
            element_by_id(id).map(|el| SectionMark {
                id: (*id).to_string(),
                top: el.offset_top() as f64,
            })
        })
        .collect()
}

pub fn offset_height(id: &str) -> Option<f64> {
    element_by_id(id).map(|el| el.offset_height() as f64)
}
