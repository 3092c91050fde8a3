//! Call-to-action buttons: what a click does and the ripple it leaves.

use once_cell::sync::Lazy;
use regex::Regex;

// Button labels, accents optional since the copy is edited by hand
static BOOK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)r[ée]server").unwrap());
static DISCOVER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)d[ée]couvrir").unwrap());
static CONTACT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)contacter").unwrap());
static MEMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)membre").unwrap());

pub const BOOKING_SOON: &str = "Fonctionnalité de réservation à venir !";
pub const CONTACT_SOON: &str = "Formulaire de contact à venir !";
pub const SIGNUP_SOON: &str = "Formulaire d'inscription à venir !";
pub const DISCOVER_SECTION: &str = "esprit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Show a toast with the given message.
    Notify(&'static str),
    /// Smooth-scroll to the section with this id.
    ScrollTo(&'static str),
    None,
}

/// Decide what a button does from its visible label.
pub fn classify_button(label: &str) -> ButtonAction {
    let label = label.trim();
    if BOOK_REGEX.is_match(label) {
        ButtonAction::Notify(BOOKING_SOON)
    } else if DISCOVER_REGEX.is_match(label) {
        ButtonAction::ScrollTo(DISCOVER_SECTION)
    } else if CONTACT_REGEX.is_match(label) {
        ButtonAction::Notify(CONTACT_SOON)
    } else if MEMBER_REGEX.is_match(label) {
        ButtonAction::Notify(SIGNUP_SOON)
    } else {
        ButtonAction::None
    }
}

/// Keys that activate a focused button.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Size and position of a ripple, relative to the button's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// Ripple centred on a click at viewport `(client_x, client_y)`.
    pub fn at(
        rect_left: f64,
        rect_top: f64,
        rect_width: f64,
        rect_height: f64,
        client_x: f64,
        client_y: f64,
    ) -> Self {
        let size = rect_width.max(rect_height);
        Self {
            size,
            x: client_x - rect_left - size / 2.0,
            y: client_y - rect_top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {s}px; height: {s}px; left: {x}px; top: {y}px;",
            s = self.size,
            x = self.x,
            y = self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_map_to_actions() {
        assert_eq!(
            classify_button("  Réserver une séance "),
            ButtonAction::Notify(BOOKING_SOON)
        );
        assert_eq!(classify_button("DÉCOUVRIR"), ButtonAction::ScrollTo("esprit"));
        assert_eq!(classify_button("decouvrir le club"), ButtonAction::ScrollTo("esprit"));
        assert_eq!(classify_button("Nous contacter"), ButtonAction::Notify(CONTACT_SOON));
        assert_eq!(classify_button("Devenir membre"), ButtonAction::Notify(SIGNUP_SOON));
        assert_eq!(classify_button("Voir les tarifs"), ButtonAction::None);
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }

    #[test]
    fn ripple_is_centred_on_click() {
        let ripple = Ripple::at(10.0, 20.0, 200.0, 50.0, 60.0, 45.0);
        assert_eq!(
            ripple,
            Ripple {
                size: 200.0,
                x: -50.0,
                y: -75.0,
            }
        );
        assert_eq!(
            ripple.style(),
            "width: 200px; height: 200px; left: -50px; top: -75px;"
        );
    }
}
