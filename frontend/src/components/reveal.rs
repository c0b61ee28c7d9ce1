use shared::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::{dom, observer::VisibilityObserver};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("fade-up"))]
    pub animation: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    Visible,
}

/// Fades its children in the first time they scroll into view.
pub struct Reveal {
    node_ref: NodeRef,
    observer: Option<VisibilityObserver>,
}

impl Component for Reveal {
    type Message = Msg;
    type Properties = RevealProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            node_ref: NodeRef::default(),
            observer: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Visible => {
                if self.observer.take().is_none() {
                    return false;
                }
                if let Some(elem) = self.node_ref.cast::<HtmlElement>() {
                    dom::set_styles(&elem, &[("opacity", "1"), ("transform", "translateY(0)")]);
                }
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let Some(elem) = self.node_ref.cast::<HtmlElement>() else {
            return;
        };

        let link = ctx.link().clone();
        let observer = VisibilityObserver::new(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move || {
            link.send_message(Msg::Visible);
        });

        match observer {
            Ok(observer) => {
                // only hide what can be revealed again
                dom::set_styles(
                    &elem,
                    &[
                        ("opacity", "0"),
                        ("transform", "translateY(30px)"),
                        ("transition", "all 0.6s ease"),
                    ],
                );
                observer.observe(&elem);
                self.observer = Some(observer);
            }
            Err(e) => log::warn!("reveal observer: {e:?}"),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div ref={self.node_ref.clone()} class={props.class.clone()} data-aos={props.animation.clone()}>
                { for props.children.iter() }
            </div>
        }
    }
}
