//! Yew view components for the PWL page.
//!
//! Stateless pieces render from props; the few stateful ones keep their state
//! in reducers from the library so the transitions stay testable.

use crate::hooks::use_reveal;
use gloo_timers::callback::Timeout;
use pwl_site::accordion::{Accordion, ToggleItem};
use pwl_site::actions::{classify_button, is_activation_key, ButtonAction, Ripple};
use pwl_site::config::RIPPLE_LIFETIME_MS;
use pwl_site::nav::{anchor_target, MenuAction, MenuState};
use pwl_site::toast::Toast;
use pwl_site::FaqEntry;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

/// A navbar entry: `(href, label)`.
pub type NavLink = (&'static str, &'static str);

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub links: Vec<NavLink>,
    pub menu: MenuState,
    pub on_menu: Callback<MenuAction>,
    pub scrolled: bool,
    pub active_section: Option<String>,
    /// Called with the section id of an in-page link.
    pub on_anchor: Callback<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu = props.menu;
    let on_toggle = props.on_menu.reform(|_: MouseEvent| MenuAction::Toggle);

    html! {
        <nav id="navbar" class={classes!("navbar", props.scrolled.then_some("scrolled"))}>
            <a href="#accueil" class="nav-logo">{ "PWL" }</a>
            <button id="navToggle"
                class={classes!("nav-toggle", menu.is_open().then_some("active"))}
                aria-expanded={menu.aria_expanded()}
                aria-label={menu.aria_label()}
                onclick={on_toggle}
            >
                <span></span><span></span><span></span>
            </button>
            <ul id="navMenu" class={classes!("nav-menu", menu.is_open().then_some("active"))}>
                { for props.links.iter().map(|&(href, label)| {
                    let is_active = anchor_target(href).is_some()
                        && props.active_section.as_deref() == anchor_target(href);
                    let onclick = {
                        let on_menu = props.on_menu.clone();
                        let on_anchor = props.on_anchor.clone();
                        Callback::from(move |e: MouseEvent| {
                            on_menu.emit(MenuAction::Close);
                            if let Some(id) = anchor_target(href) {
                                e.prevent_default();
                                on_anchor.emit(id.to_string());
                            }
                        })
                    };
                    html! {
                        <li>
                            <a {href} class={classes!("nav-link", is_active.then_some("active"))} {onclick}>
                                { label }
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub class: &'static str,
    #[prop_or_default]
    pub children: Html,
}

/// Card that fades in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let style = if revealed {
        "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
    } else {
        "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;"
    };

    html! {
        <div ref={node} class={props.class} {style}>
            { props.children.clone() }
        </div>
    }
}

/// Ripples currently animating inside one button.
#[derive(Default)]
struct RippleSet {
    items: Vec<(u32, Ripple)>,
}

enum RippleAction {
    Add(u32, Ripple),
    Remove(u32),
}

impl Reducible for RippleSet {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: RippleAction) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            RippleAction::Add(id, ripple) => items.push((id, ripple)),
            RippleAction::Remove(id) => items.retain(|(r, _)| *r != id),
        }
        Rc::new(Self { items })
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub label: &'static str,
    #[prop_or("btn btn-primary")]
    pub class: &'static str,
    pub on_action: Callback<ButtonAction>,
}

/// Call-to-action button with a click ripple.
#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let ripples = use_reducer(RippleSet::default);
    let last_id = use_mut_ref(|| 0u32);
    let node = use_node_ref();

    let onclick = {
        let ripples = ripples.dispatcher();
        let node = node.clone();
        let on_action = props.on_action.clone();
        let label = props.label;
        Callback::from(move |e: MouseEvent| {
            if let Some(button) = node.cast::<HtmlElement>() {
                let rect = button.get_bounding_client_rect();
                let ripple = Ripple::at(
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                    e.client_x() as f64,
                    e.client_y() as f64,
                );
                let id = {
                    let mut last = last_id.borrow_mut();
                    *last = last.wrapping_add(1);
                    *last
                };
                ripples.dispatch(RippleAction::Add(id, ripple));

                let ripples = ripples.clone();
                Timeout::new(RIPPLE_LIFETIME_MS, move || {
                    ripples.dispatch(RippleAction::Remove(id))
                })
                .forget();
            }
            on_action.emit(classify_button(label));
        })
    };

    let onkeydown = {
        let node = node.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                if let Some(button) = node.cast::<HtmlElement>() {
                    button.click();
                }
            }
        })
    };

    html! {
        <button ref={node} class={props.class} style="position: relative; overflow: hidden;" {onclick} {onkeydown}>
            { props.label }
            { for ripples.items.iter().map(|(id, ripple)| html! {
                <span key={*id} class="ripple" style={ripple.style()}></span>
            }) }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Rc<Vec<FaqEntry>>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqProps) -> Html {
    let accordion = use_reducer(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(i, entry)| {
                let onclick = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: MouseEvent| accordion.dispatch(ToggleItem(i)))
                };
                let open = accordion.is_open(i);
                html! {
                    <div class={classes!("faq-item", open.then_some("active"))}>
                        <button class="faq-question" aria-expanded={if open { "true" } else { "false" }} {onclick}>
                            { entry.question.clone() }
                        </button>
                        <div class="faq-answer">
                            <p>{ entry.answer.clone() }</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };
    let animation = if toast.leaving {
        "slideOutRight 0.5s ease"
    } else {
        "slideInRight 0.5s ease"
    };

    html! {
        <div key={toast.id} class="notification" role="status" style={format!(
            "position: fixed; bottom: 30px; right: 30px; \
             background: linear-gradient(135deg, #8b5cf6, #6366f1); color: white; \
             padding: 1rem 2rem; border-radius: 50px; \
             box-shadow: 0 10px 30px rgba(139, 92, 246, 0.4); z-index: 10000; \
             animation: {}; font-weight: 600; max-width: 300px;",
            animation
        )}>
            { toast.message.clone() }
        </div>
    }
}

/// Keyframes used by the toast and the ripple, injected once with the page.
pub const DYNAMIC_STYLES: &str = r#"
@keyframes slideInRight {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}
.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.5);
    transform: scale(0);
    animation: ripple-animation 0.6s ease-out;
    pointer-events: none;
}
@keyframes ripple-animation {
    to { transform: scale(4); opacity: 0; }
}
.nav-link.active { color: var(--color-primary); }
.nav-link.active::after { width: 100%; }
"#;
