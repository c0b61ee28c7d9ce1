#![deny(
    warnings,
    unused_imports,
    unused_must_use,
    unused_variables,
    unused_mut,
    dead_code,
    clippy::expect_used
)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::dbg_macro,
    clippy::unwrap_used,
    clippy::panic,
    clippy::needless_update,
    clippy::match_like_matches_macro,
    clippy::from_over_into,
    clippy::useless_conversion,
    clippy::float_cmp_const,
    clippy::lossy_float_literal,
    clippy::string_to_string,
    clippy::unneeded_field_pattern,
    clippy::verbose_file_reads
)]
#![allow(
    clippy::use_self,
    clippy::module_name_repetitions,
    clippy::let_unit_value
)]
pub mod components;
pub mod dom;
pub mod environment;
mod observer;
mod pages;

use events::Events;
use gloo_events::EventListener;
use yew::prelude::*;

use crate::{
    environment::{SITE_ENV, log_level, site_env},
    pages::Home,
};

pub const VERSION_STR: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPosition {
    pub y: f64,
    pub viewport_height: f64,
}

impl ScrollPosition {
    fn current() -> Self {
        Self {
            y: dom::scroll_y(),
            viewport_height: dom::viewport_height(),
        }
    }
}

pub type PageEvents = Events<ScrollPosition>;

pub enum Msg {
    Scrolled,
    Loaded,
}

pub struct AppRoot {
    events: PageEvents,
    _scroll: EventListener,
    _load: Option<EventListener>,
}
impl Component for AppRoot {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let window = gloo_utils::window();

        let scroll = {
            let link = ctx.link().clone();
            EventListener::new(&window, "scroll", move |_| link.send_message(Msg::Scrolled))
        };

        let load = if dom::document_loaded() {
            dom::mark_body_loaded();
            None
        } else {
            let link = ctx.link().clone();
            Some(EventListener::once(&window, "load", move |_| {
                link.send_message(Msg::Loaded);
            }))
        };

        let events = PageEvents::default();
        events.emit(ScrollPosition::current());

        Self {
            events,
            _scroll: scroll,
            _load: load,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scrolled => {
                self.events.emit(ScrollPosition::current());
                false
            }
            Msg::Loaded => {
                dom::mark_body_loaded();
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<PageEvents> context={self.events.clone()}>
                <Home />
            </ContextProvider<PageEvents>>
        }
    }
}

#[must_use]
pub const fn not(b: bool) -> bool {
    !b
}

pub fn run_app() {
    console_error_panic_hook::set_once();

    let level = log_level(&site_env(Some(SITE_ENV)));
    wasm_logger::init(wasm_logger::Config::new(level));

    if let Err(e) = dom::inject_keyframes() {
        log::warn!("inject keyframes: {e:?}");
    }
    dom::disable_scroll_restoration();

    log::info!("Welcome to Saheri Hardware Centre! (v{VERSION_STR} {SITE_ENV})");

    yew::Renderer::<AppRoot>::new().render();
}
