use events::{EventBridge, event_context};
use gloo_timers::callback::Timeout;
use shared::{HERO_ENTRANCE_DELAY_MS, HERO_VISIBLE_THRESHOLD, parallax_offset};
use wasm_bindgen::UnwrapThrowExt;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::{ScrollPosition, components::StatCounter, dom, observer::VisibilityObserver};

const STATS: &[(u32, &str, &str)] = &[
    (15, "+", "Years Serving Moshi"),
    (5000, "+", "Products in Stock"),
    (2000, "+", "Happy Customers"),
];

pub enum Msg {
    Scroll(ScrollPosition),
    Enter,
    Visible,
}

pub struct Hero {
    entered: bool,
    counters_started: bool,
    section_ref: NodeRef,
    background_ref: NodeRef,
    entrance: Option<Timeout>,
    observer: Option<VisibilityObserver>,
    _events: EventBridge<ScrollPosition>,
}

impl Component for Hero {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let events = event_context::<ScrollPosition, _>(ctx)
            .unwrap_throw()
            .subscribe(ctx.link().callback(Msg::Scroll));

        let entrance = {
            let link = ctx.link().clone();
            Timeout::new(HERO_ENTRANCE_DELAY_MS, move || {
                link.send_message(Msg::Enter);
            })
        };

        Self {
            entered: false,
            counters_started: false,
            section_ref: NodeRef::default(),
            background_ref: NodeRef::default(),
            entrance: Some(entrance),
            observer: None,
            _events: events,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scroll(pos) => {
                if let (Some(offset), Some(background)) = (
                    parallax_offset(pos.y, pos.viewport_height),
                    self.background_ref.cast::<HtmlElement>(),
                ) {
                    let transform = format!("translateY({offset}px)");
                    dom::set_styles(&background, &[("transform", transform.as_str())]);
                }
                false
            }
            Msg::Enter => {
                self.entrance.take();
                self.entered = true;
                true
            }
            Msg::Visible => {
                if self.counters_started {
                    return false;
                }
                log::debug!("hero visible, starting counters");
                self.counters_started = true;
                self.observer.take();
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let Some(section) = self.section_ref.cast::<Element>() else {
            return;
        };

        let link = ctx.link().clone();
        let observer = VisibilityObserver::new(HERO_VISIBLE_THRESHOLD, None, move || {
            link.send_message(Msg::Visible);
        });

        match observer {
            Ok(observer) => {
                observer.observe(&section);
                self.observer = Some(observer);
            }
            Err(e) => log::warn!("hero observer: {e:?}"),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let content_style = if self.entered {
            "opacity: 1; transform: translateY(0);"
        } else {
            ""
        };

        html! {
            <section id="home" class="hero" ref={self.section_ref.clone()}>
                <div class="hero-background" ref={self.background_ref.clone()} />
                <div class="hero-content" style={content_style}>
                    <h1>{"Everything You Need to Build, Fix and Grow"}</h1>
                    <p>
                        {"Cement, roofing, plumbing, electrical and tools. Quality hardware at fair
                        prices, with friendly advice from people who know the trade."}
                    </p>
                    <div class="hero-buttons">
                        <a class="btn btn-primary" href="#products">{"Browse Products"}</a>
                        <a class="btn btn-secondary" href="#contact">{"Get a Quote"}</a>
                    </div>
                    <div class="hero-stats">
                        { for STATS.iter().map(|&(target, suffix, label)| html! {
                            <StatCounter {target} {suffix} {label} run={self.counters_started} />
                        }) }
                    </div>
                </div>
            </section>
        }
    }
}
