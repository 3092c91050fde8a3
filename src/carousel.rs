//! Yew binding of the carousel state machine.
//!
//! A mounted `Carousel` owns its own [`Slider`], autoplay interval, resize
//! debounce and window listeners; unmounting drops all of them. Every event
//! is turned into a [`CarouselMsg`] and applied in one place.

use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use gloo_utils::window;
use log::debug;
use pwl_site::config::SliderConfig;
use pwl_site::slider::slide_width_changed;
use pwl_site::timer::{Debouncer, DelayScheduler};
use pwl_site::{viewport_width, AutoplayScheduler, Slide, Slider};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

pub enum CarouselMsg {
    Prev,
    Next,
    GoTo(usize),
    AutoplayTick,
    Resized,
    ResizeSettled,
    TouchStart(f64),
    TouchEnd(f64),
    Key(String),
    HoverEnter,
    HoverLeave,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Rc<Vec<Slide>>,
    #[prop_or_default]
    pub config: SliderConfig,
}

/// Autoplay backed by a `gloo-timers` interval posting ticks to the carousel.
pub struct IntervalScheduler {
    tick: Callback<()>,
}

impl AutoplayScheduler for IntervalScheduler {
    type Handle = Interval;

    fn start_autoplay(&self, period_ms: u32) -> Interval {
        let tick = self.tick.clone();
        Interval::new(period_ms, move || tick.emit(()))
    }
}

/// One-shot `gloo-timers` timeouts for the resize debounce.
pub struct TimeoutScheduler {
    fire: Callback<()>,
}

impl DelayScheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn start_delay(&self, delay_ms: u32) -> Timeout {
        let fire = self.fire.clone();
        Timeout::new(delay_ms, move || fire.emit(()))
    }
}

/// Everything a mounted carousel with slides owns.
struct LiveCarousel {
    slider: Slider<IntervalScheduler>,
    resize: Debouncer<TimeoutScheduler>,
    _listeners: Vec<EventListener>,
}

impl LiveCarousel {
    fn mount(
        slide_count: usize,
        config: SliderConfig,
        send: &Callback<CarouselMsg>,
    ) -> Option<Self> {
        let autoplay = IntervalScheduler {
            tick: send.reform(|_: ()| CarouselMsg::AutoplayTick),
        };
        let slider = Slider::init(slide_count, viewport_width(), config, autoplay)?;
        let debounce = TimeoutScheduler {
            fire: send.reform(|_: ()| CarouselMsg::ResizeSettled),
        };
        Some(Self {
            slider,
            resize: Debouncer::new(debounce, config.resize_debounce_ms),
            _listeners: window_listeners(send),
        })
    }

    /// Apply one message. Returns whether the view changed.
    fn update(&mut self, msg: CarouselMsg) -> bool {
        let slider = &mut self.slider;
        match msg {
            CarouselMsg::Prev => {
                slider.prev();
                true
            }
            CarouselMsg::Next => {
                slider.next();
                true
            }
            CarouselMsg::GoTo(index) => {
                slider.go_to(index as isize);
                true
            }
            CarouselMsg::AutoplayTick => {
                slider.autoplay_tick();
                true
            }
            CarouselMsg::Resized => {
                self.resize.trigger();
                false
            }
            // redraw even when the count is unchanged: slide widths follow the container
            CarouselMsg::ResizeSettled => {
                if self.resize.settle() {
                    slider.on_resize(viewport_width());
                    true
                } else {
                    false
                }
            }
            CarouselMsg::TouchStart(x) => {
                slider.touch_start(x);
                false
            }
            CarouselMsg::TouchEnd(x) => slider.touch_end(x).is_some(),
            CarouselMsg::Key(key) => slider.on_key(&key).is_some(),
            CarouselMsg::HoverEnter => {
                slider.pause();
                false
            }
            CarouselMsg::HoverLeave => {
                slider.resume();
                false
            }
        }
    }
}

fn window_listeners(send: &Callback<CarouselMsg>) -> Vec<EventListener> {
    let window = window();
    let resize = {
        let send = send.clone();
        EventListener::new(&window, "resize", move |_| send.emit(CarouselMsg::Resized))
    };
    let keydown = {
        let send = send.clone();
        EventListener::new(&window, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                send.emit(CarouselMsg::Key(event.key()));
            }
        })
    };
    vec![resize, keydown]
}

fn touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| touch.screen_x() as f64)
}

fn on_touch(send: &Callback<CarouselMsg>, msg: fn(f64) -> CarouselMsg) -> Callback<TouchEvent> {
    let send = send.clone();
    Callback::from(move |e: TouchEvent| {
        if let Some(x) = touch_x(&e) {
            send.emit(msg(x));
        }
    })
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let live = use_mut_ref(|| None::<LiveCarousel>);
    let redraw = use_force_update();
    let slide_width = use_state_eq(|| 0.0_f64);
    let first_slide = use_node_ref();

    let send = {
        let live = live.clone();
        let redraw = redraw.clone();
        Callback::from(move |msg: CarouselMsg| {
            let changed = live
                .borrow_mut()
                .as_mut()
                .map_or(false, |live| live.update(msg));
            if changed {
                redraw.force_update();
            }
        })
    };

    {
        let live = live.clone();
        let send = send.clone();
        use_effect_with(
            (props.slides.len(), props.config),
            move |&(slide_count, config)| {
                let mounted = LiveCarousel::mount(slide_count, config, &send);
                let active = mounted.is_some();
                *live.borrow_mut() = mounted;
                if active {
                    redraw.force_update();
                }
                move || {
                    *live.borrow_mut() = None;
                }
            },
        );
    }

    // Track offsets are in pixels, so follow the first slide's rendered width
    {
        let first_slide = first_slide.clone();
        let slide_width = slide_width.clone();
        use_effect(move || {
            let measured = first_slide
                .cast::<HtmlElement>()
                .map(|slide| slide.offset_width() as f64)
                .unwrap_or(0.0);
            if slide_width_changed(*slide_width, measured) {
                debug!("carousel slide width {}px", measured);
                slide_width.set(measured);
            }
        });
    }

    let (offset, shown, gap, dots) = {
        let live = live.borrow();
        let Some(slider) = live.as_ref().map(|live| &live.slider) else {
            return html! {};
        };
        (
            slider.offset_px(*slide_width),
            slider.state().slides_to_show(),
            slider.config().gap_px,
            slider.dots(),
        )
    };

    let track_style = format!(
        "display: flex; gap: {}px; transition: transform 0.5s ease; transform: translateX({}px);",
        gap, offset
    );
    let slide_style = format!(
        "flex: 0 0 calc((100% - {}px) / {});",
        gap * shown.saturating_sub(1) as f64,
        shown
    );

    html! {
        <div class="slider"
            onmouseenter={send.reform(|_: MouseEvent| CarouselMsg::HoverEnter)}
            onmouseleave={send.reform(|_: MouseEvent| CarouselMsg::HoverLeave)}
            ontouchstart={on_touch(&send, CarouselMsg::TouchStart)}
            ontouchend={on_touch(&send, CarouselMsg::TouchEnd)}
        >
            <button class="slider-arrow slider-prev"
                aria-label="Slide précédente"
                onclick={send.reform(|_: MouseEvent| CarouselMsg::Prev)}
            >
                { "‹" }
            </button>
            <div class="slider-viewport" style="overflow: hidden;">
                <div class="slider-track" style={track_style}>
                    { for props.slides.iter().enumerate().map(|(i, slide)| {
                        let node = if i == 0 { first_slide.clone() } else { NodeRef::default() };
                        html! {
                            <article class="slide evenement-card" style={slide_style.clone()} ref={node}>
                                <span class="slide-tag">{ slide.tag.clone() }</span>
                                <h3>{ slide.title.clone() }</h3>
                                <p>{ slide.body.clone() }</p>
                            </article>
                        }
                    }) }
                </div>
            </div>
            <button class="slider-arrow slider-next"
                aria-label="Slide suivante"
                onclick={send.reform(|_: MouseEvent| CarouselMsg::Next)}
            >
                { "›" }
            </button>
            <div class="slider-dots">
                { for dots.into_iter().map(|dot| {
                    let index = dot.index;
                    html! {
                        <button
                            class={classes!("slider-dot", dot.active.then_some("active"))}
                            aria-label={dot.label}
                            onclick={send.reform(move |_: MouseEvent| CarouselMsg::GoTo(index))}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
