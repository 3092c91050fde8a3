use crate::dom::scroll_y;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use gloo_utils::window;
use log::warn;
use pwl_site::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, TOAST_EXIT_MS, TOAST_VISIBLE_MS};
use pwl_site::toast::{ToastAction, ToastState};
use pwl_site::{viewport_width, TimerSlot};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Emit the viewport width once window resizing has been quiet for `delay_ms`.
#[hook]
pub fn use_debounced_resize(delay_ms: u32, on_settled: Callback<f64>) {
    use_effect_with(delay_ms, move |&delay_ms| {
        let pending: Rc<RefCell<TimerSlot<Timeout>>> = Rc::default();
        let listener = {
            let pending = pending.clone();
            EventListener::new(&window(), "resize", move |_| {
                let on_settled = on_settled.clone();
                pending.borrow_mut().replace_with(|| {
                    Timeout::new(delay_ms, move || on_settled.emit(viewport_width()))
                });
            })
        };
        move || {
            drop(listener);
            pending.borrow_mut().cancel();
        }
    });
}

/// Sample the scroll position at most once per `period_ms`.
///
/// The first scroll event arms a timer; events arriving before it fires are
/// dropped and the position is read when it fires.
#[hook]
pub fn use_throttled_scroll(period_ms: u32, on_sample: Callback<f64>) {
    use_effect_with(period_ms, move |&period_ms| {
        // a reload can restore a scrolled position
        on_sample.emit(scroll_y());

        let slot: Rc<RefCell<TimerSlot<Timeout>>> = Rc::default();
        let pending = Rc::new(Cell::new(false));
        let listener = {
            let slot = slot.clone();
            EventListener::new(&window(), "scroll", move |_| {
                if pending.replace(true) {
                    return;
                }
                let pending = pending.clone();
                let on_sample = on_sample.clone();
                slot.borrow_mut().replace_with(|| {
                    Timeout::new(period_ms, move || {
                        pending.set(false);
                        on_sample.emit(scroll_y());
                    })
                });
            })
        };
        move || {
            drop(listener);
            slot.borrow_mut().cancel();
        }
    });
}

/// Whether `node` has scrolled into view at least once.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let observer = node
                .cast::<Element>()
                .and_then(|element| observe_once(&element, revealed.clone()));
            if observer.is_none() {
                revealed.set(true);
            }
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        });
    }
    *revealed
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    revealed: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if visible {
                revealed.set(true);
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
            None
        }
    }
}

/// Current toast plus a callback that shows a new one.
#[derive(Clone)]
pub struct ToastHandle {
    pub state: UseReducerHandle<ToastState>,
    pub show: Callback<String>,
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let state = use_reducer(ToastState::default);
    let last_id = use_mut_ref(|| 0u32);
    let visible = use_mut_ref(TimerSlot::<Timeout>::new);
    let exit = use_mut_ref(TimerSlot::<Timeout>::new);

    let show = {
        let dispatcher = state.dispatcher();
        Callback::from(move |message: String| {
            let id = {
                let mut last = last_id.borrow_mut();
                *last = last.wrapping_add(1);
                *last
            };
            exit.borrow_mut().cancel();
            dispatcher.dispatch(ToastAction::Show { id, message });

            let dispatcher = dispatcher.clone();
            let exit = exit.clone();
            visible.borrow_mut().replace_with(|| {
                Timeout::new(TOAST_VISIBLE_MS, move || {
                    dispatcher.dispatch(ToastAction::BeginExit(id));
                    exit.borrow_mut().replace_with(|| {
                        Timeout::new(TOAST_EXIT_MS, move || {
                            dispatcher.dispatch(ToastAction::Remove(id))
                        })
                    });
                })
            });
        })
    };

    ToastHandle { state, show }
}
