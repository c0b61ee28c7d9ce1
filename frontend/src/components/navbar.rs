use events::{EventBridge, event_context};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use shared::{ACTIVE_SECTION_DEBOUNCE_MS, ScrollFlags, active_section, anchor_target};
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::Node;
use yew::prelude::*;

use crate::{ScrollPosition, dom, not};

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#products", "Products"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

pub enum Msg {
    ToggleMenu,
    NavClick { href: &'static str, mobile: bool },
    DocumentClick(Option<Node>),
    Scroll(ScrollPosition),
    HighlightSection,
}

pub struct Navbar {
    menu_open: bool,
    scrolled: bool,
    active: Option<String>,
    hamburger_ref: NodeRef,
    menu_ref: NodeRef,
    debounce: Option<Timeout>,
    _events: EventBridge<ScrollPosition>,
    _outside_click: EventListener,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let events = event_context::<ScrollPosition, _>(ctx)
            .unwrap_throw()
            .subscribe(ctx.link().callback(Msg::Scroll));

        let outside_click = {
            let link = ctx.link().clone();
            EventListener::new(&gloo_utils::document(), "click", move |e| {
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                link.send_message(Msg::DocumentClick(target));
            })
        };

        Self {
            menu_open: false,
            scrolled: false,
            active: None,
            hamburger_ref: NodeRef::default(),
            menu_ref: NodeRef::default(),
            debounce: None,
            _events: events,
            _outside_click: outside_click,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::NavClick { href, mobile } => {
                let was_open = self.menu_open;
                if mobile {
                    self.menu_open = false;
                }

                let Some(id) = anchor_target(href) else {
                    return was_open != self.menu_open;
                };

                if dom::scroll_to_anchor(id) {
                    self.active = Some(id.to_owned());
                    return true;
                }

                was_open != self.menu_open
            }
            Msg::DocumentClick(target) => {
                if !self.menu_open || self.contains(target.as_ref()) {
                    return false;
                }
                self.menu_open = false;
                true
            }
            Msg::Scroll(pos) => {
                let handle = {
                    let link = ctx.link().clone();
                    Timeout::new(ACTIVE_SECTION_DEBOUNCE_MS, move || {
                        link.send_message(Msg::HighlightSection);
                    })
                };
                // replacing the pending timeout cancels it
                self.debounce = Some(handle);

                let scrolled =
                    ScrollFlags::from_offset(pos.y).contains(ScrollFlags::NAVBAR_SCROLLED);
                let changed = scrolled != self.scrolled;
                self.scrolled = scrolled;
                changed
            }
            Msg::HighlightSection => {
                self.debounce.take();

                let sections = dom::section_bounds();
                let Some(id) = active_section(dom::scroll_y(), &sections) else {
                    return false;
                };

                if self.active.as_deref() == Some(id) {
                    return false;
                }
                self.active = Some(id.to_owned());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <nav id="navbar" class={classes!("navbar", self.scrolled.then_some("scrolled"))}>
                <div class="nav-container">
                    <a class="logo" href="#home">
                        <i class="fas fa-tools"></i>
                        <span>{"Saheri Hardware Centre"}</span>
                    </a>

                    <ul class="nav-links">
                        { for NAV_ITEMS.iter().map(|&(href, label)| self.view_link(ctx, href, label, false)) }
                    </ul>

                    <div
                        ref={self.hamburger_ref.clone()}
                        class={classes!("hamburger", self.menu_open.then_some("active"))}
                        onclick={ctx.link().callback(|_| Msg::ToggleMenu)}>
                        <span />
                        <span />
                        <span />
                    </div>
                </div>

                <div
                    ref={self.menu_ref.clone()}
                    class={classes!("mobile-menu", self.menu_open.then_some("menu-open"))}
                    aria-hidden={not(self.menu_open).to_string()}>
                    { for NAV_ITEMS.iter().map(|&(href, label)| self.view_link(ctx, href, label, true)) }
                </div>
            </nav>
        }
    }
}

impl Navbar {
    fn contains(&self, target: Option<&Node>) -> bool {
        [&self.hamburger_ref, &self.menu_ref]
            .iter()
            .filter_map(|node_ref| node_ref.get())
            .any(|node| node.contains(target))
    }

    fn view_link(
        &self,
        ctx: &Context<Self>,
        href: &'static str,
        label: &str,
        mobile: bool,
    ) -> Html {
        let active = anchor_target(href).is_some_and(|id| self.active.as_deref() == Some(id));
        let onclick = ctx.link().callback(move |e: MouseEvent| {
            e.prevent_default();
            Msg::NavClick { href, mobile }
        });

        if mobile {
            html! {
                <a {href} class={classes!(active.then_some("active"))} {onclick}>{label}</a>
            }
        } else {
            html! {
                <li>
                    <a {href} class={classes!("nav-link", active.then_some("active"))} {onclick}>{label}</a>
                </li>
            }
        }
    }
}
