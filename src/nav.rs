//! Mobile navigation menu and in-page anchors.

use crate::config::{MENU_CLOSE_ABOVE_PX, MENU_CLOSE_LABEL, MENU_OPEN_LABEL, NAVBAR_HEIGHT_PX};
use std::rc::Rc;
use yew::functional::Reducible;

/// Open/closed state of the collapsible menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the toggle button's `aria-expanded`.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Label describing what the toggle button will do next.
    pub fn aria_label(&self) -> &'static str {
        if self.open {
            MENU_CLOSE_LABEL
        } else {
            MENU_OPEN_LABEL
        }
    }

    /// Close the menu once the desktop layout takes over.
    pub fn on_viewport_resized(&mut self, viewport_width: f64) -> bool {
        if self.open && viewport_width > MENU_CLOSE_ABOVE_PX {
            self.open = false;
            return true;
        }
        false
    }
}

pub enum MenuAction {
    Toggle,
    /// A navigation link was followed.
    Close,
    /// Debounced window resize with the new viewport width.
    ViewportResized(f64),
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let mut next = *self;
        match action {
            MenuAction::Toggle => {
                next.toggle();
            }
            MenuAction::Close => next.close(),
            MenuAction::ViewportResized(width) => {
                next.on_viewport_resized(width);
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Section id targeted by an in-page link (`#id`), if any.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section just below the fixed navbar.
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - NAVBAR_HEIGHT_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_flips_aria_state() {
        let mut menu = MenuState::default();
        assert_eq!(menu.aria_expanded(), "false");
        assert_eq!(menu.aria_label(), "Ouvrir le menu de navigation");

        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.aria_label(), "Fermer le menu de navigation");

        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn wide_viewport_closes_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.on_viewport_resized(768.0));
        assert!(menu.is_open());
        assert!(menu.on_viewport_resized(769.0));
        assert!(!menu.is_open());
        assert!(!menu.on_viewport_resized(1200.0));
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let closed = Rc::new(MenuState::default());
        let same = closed.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &same));

        let open = closed.reduce(MenuAction::Toggle);
        assert!(open.is_open());
        let open = open.reduce(MenuAction::ViewportResized(500.0));
        assert!(open.is_open());
        assert!(!open.reduce(MenuAction::ViewportResized(1024.0)).is_open());
    }

    #[test]
    fn anchors_only_for_hash_links() {
        assert_eq!(anchor_target("#tarifs"), Some("tarifs"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.org/#x"), None);
        assert_eq!(anchor_target("contact.html"), None);
    }

    #[test]
    fn scroll_target_clears_navbar() {
        assert_eq!(scroll_target(1000.0), 920.0);
    }
}
