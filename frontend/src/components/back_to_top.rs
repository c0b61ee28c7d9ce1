use events::{EventBridge, event_context};
use shared::ScrollFlags;
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;

use crate::{ScrollPosition, dom};

pub enum Msg {
    Scroll(ScrollPosition),
    Click,
}

pub struct BackToTop {
    show: bool,
    _events: EventBridge<ScrollPosition>,
}

impl Component for BackToTop {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let events = event_context::<ScrollPosition, _>(ctx)
            .unwrap_throw()
            .subscribe(ctx.link().callback(Msg::Scroll));

        Self {
            show: false,
            _events: events,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scroll(pos) => {
                let show = ScrollFlags::from_offset(pos.y).contains(ScrollFlags::BACK_TO_TOP);
                let changed = show != self.show;
                self.show = show;
                changed
            }
            Msg::Click => {
                dom::smooth_scroll_to(0.0);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <button
                id="backToTop"
                class={classes!("back-to-top", self.show.then_some("show"))}
                aria-label="Back to top"
                onclick={ctx.link().callback(|_| Msg::Click)}>
                <i class="fas fa-arrow-up"></i>
            </button>
        }
    }
}
