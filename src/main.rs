//! Main module for the PWL association website using Yew.
//! Wires page components, scroll/resize hooks and the carousel.

use log::{error, info, warn};
use pwl_site::actions::ButtonAction;
use pwl_site::config::{RESIZE_DEBOUNCE_MS, SCROLL_THROTTLE_MS};
use pwl_site::content::{load_faq, load_slides};
use pwl_site::nav::{MenuAction, MenuState};
use pwl_site::scroll::ScrollEffects;
use pwl_site::{FaqEntry, Slide};
use std::rc::Rc;
use yew::prelude::*;

mod carousel;
mod components;
mod dom;
mod hooks;

use carousel::Carousel;
use components::{ActionButton, FaqList, NavLink, Navbar, Reveal, ToastView, DYNAMIC_STYLES};
use hooks::{use_debounced_resize, use_throttled_scroll, use_toast};

const NAV_LINKS: [NavLink; 6] = [
    ("#accueil", "Accueil"),
    ("#esprit", "Notre Esprit"),
    ("#equipements", "Équipements"),
    ("#evenements", "Événements"),
    ("#tarifs", "Tarifs"),
    ("#faq", "FAQ"),
];

/// Sections followed by the scroll spy, in document order.
const SPY_SECTIONS: [&str; 7] = [
    "accueil",
    "esprit",
    "equipements",
    "evenements",
    "tarifs",
    "horaires",
    "faq",
];

const HERO_ID: &str = "accueil";

fn load_or_empty<T>(loaded: Result<Vec<T>, pwl_site::content::ContentError>) -> Rc<Vec<T>> {
    Rc::new(loaded.unwrap_or_else(|e| {
        error!("Content unavailable: {}", e);
        Vec::new()
    }))
}

/// Primary page component wiring state, effects, and sections.
#[function_component(Main)]
fn main_component() -> Html {
    let slides: Rc<Vec<Slide>> = (*use_memo((), |_| load_or_empty(load_slides()))).clone();
    let faq: Rc<Vec<FaqEntry>> = (*use_memo((), |_| load_or_empty(load_faq()))).clone();

    let menu = use_reducer(MenuState::default);
    let scroll = use_reducer_eq(ScrollEffects::default);
    let toast = use_toast();

    // Close the mobile menu once the desktop layout takes over
    {
        let menu = menu.dispatcher();
        use_debounced_resize(
            RESIZE_DEBOUNCE_MS,
            Callback::from(move |width: f64| menu.dispatch(MenuAction::ViewportResized(width))),
        );
    }

    // Navbar shading, scroll spy and hero parallax
    {
        let scroll = scroll.dispatcher();
        use_throttled_scroll(
            SCROLL_THROTTLE_MS,
            Callback::from(move |scroll_y: f64| {
                let sections = dom::section_marks(&SPY_SECTIONS);
                scroll.dispatch(ScrollEffects::sample(
                    scroll_y,
                    &sections,
                    dom::offset_height(HERO_ID),
                ));
            }),
        );
    }

    let on_anchor = Callback::from(|id: String| {
        dom::scroll_to_section(&id);
    });

    let on_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |action: MenuAction| menu.dispatch(action))
    };

    let on_action = {
        let show = toast.show.clone();
        Callback::from(move |action: ButtonAction| match action {
            ButtonAction::Notify(message) => {
                info!("Placeholder action: {}", message);
                show.emit(message.to_string());
            }
            ButtonAction::ScrollTo(id) => {
                if !dom::scroll_to_section(id) {
                    warn!("Button target '#{}' not found", id);
                }
            }
            ButtonAction::None => {}
        })
    };

    let hero_style = scroll
        .parallax_px
        .map(|y| format!("transform: translateY({}px);", y))
        .unwrap_or_default();

    html! {
        <>
            <style>{ DYNAMIC_STYLES }</style>
            <Navbar
                links={NAV_LINKS.to_vec()}
                menu={*menu}
                {on_menu}
                scrolled={scroll.navbar_scrolled}
                active_section={scroll.active_section.clone()}
                {on_anchor}
            />

            <header id="accueil" class="hero" style={hero_style}>
                <div class="hero-content">
                    <h1 class="hero-title">{ "PWL - Association de Powerlifting" }</h1>
                    <p class="hero-subtitle">{ "Squat, développé couché, soulevé de terre : progressez ensemble." }</p>
                    <div class="hero-cta-group">
                        <ActionButton label="Découvrir" on_action={on_action.clone()} />
                        <ActionButton label="Réserver une séance" class="btn btn-secondary" on_action={on_action.clone()} />
                    </div>
                </div>
            </header>

            <section id="esprit" class="section">
                <h2 class="section-title">{ "Notre Esprit" }</h2>
                <div class="stats">
                    <Reveal class="stat"><strong>{ "120" }</strong><span>{ "membres" }</span></Reveal>
                    <Reveal class="stat"><strong>{ "15" }</strong><span>{ "compétiteurs" }</span></Reveal>
                    <Reveal class="stat"><strong>{ "6" }</strong><span>{ "coachs diplômés" }</span></Reveal>
                </div>
            </section>

            <section id="equipements" class="section">
                <h2 class="section-title">{ "Équipements" }</h2>
                <div class="equipements-grid">
                    <Reveal class="equipement-card"><h3>{ "Racks de compétition" }</h3><p>{ "Quatre racks homologués avec barres calibrées." }</p></Reveal>
                    <Reveal class="equipement-card"><h3>{ "Plateaux de soulevé" }</h3><p>{ "Plateformes dédiées au soulevé de terre." }</p></Reveal>
                    <Reveal class="equipement-card"><h3>{ "Bancs de développé" }</h3><p>{ "Bancs de compétition réglables." }</p></Reveal>
                </div>
            </section>

            <section id="evenements" class="section">
                <h2 class="section-title">{ "Événements" }</h2>
                <Carousel slides={slides} />
            </section>

            <section id="tarifs" class="section">
                <h2 class="section-title">{ "Tarifs" }</h2>
                <div class="tarifs-grid">
                    <Reveal class="tarif-item"><h3>{ "Mensuel" }</h3><p>{ "35 € / mois" }</p></Reveal>
                    <Reveal class="tarif-item"><h3>{ "Annuel" }</h3><p>{ "320 € / an" }</p></Reveal>
                    <Reveal class="tarif-item"><h3>{ "Étudiant" }</h3><p>{ "250 € / an" }</p></Reveal>
                </div>
                <ActionButton label="Devenir membre" on_action={on_action.clone()} />
            </section>

            <section id="horaires" class="section">
                <h2 class="section-title">{ "Horaires" }</h2>
                <Reveal class="horaire-block"><h3>{ "Semaine" }</h3><p>{ "Lundi - Vendredi : 17h - 22h" }</p></Reveal>
                <Reveal class="horaire-block"><h3>{ "Week-end" }</h3><p>{ "Samedi : 10h - 18h" }</p></Reveal>
            </section>

            <section id="faq" class="section">
                <h2 class="section-title">{ "Questions fréquentes" }</h2>
                <FaqList entries={faq} />
                <ActionButton label="Nous contacter" on_action={on_action.clone()} />
            </section>

            <ToastView toast={toast.state.current().cloned()} />
        </>
    }
}

/// App wrapper, the single root mounted on the page.
#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

/// Debug builds log everything, release builds keep the console quiet.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}

/// Entry point: installs logging and renders into `#app` (or `<body>`).
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log_level()));

    match gloo_utils::document().get_element_by_id("app") {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => yew::Renderer::<App>::new().render(),
    };
    info!("PWL website loaded, version {}", env!("CARGO_PKG_VERSION"));
}
