use web_sys::HtmlElement;
use yew::prelude::*;

use crate::{components::Reveal, dom};

const CATEGORIES: &[(&str, &str, &str)] = &[
    (
        "fa-hammer",
        "Hand & Power Tools",
        "Hammers, drills, grinders and everything for the workshop.",
    ),
    (
        "fa-faucet",
        "Plumbing",
        "Pipes, fittings, tanks and taps from trusted brands.",
    ),
    (
        "fa-bolt",
        "Electrical",
        "Cables, switches, breakers and lighting for home and site.",
    ),
    (
        "fa-paint-roller",
        "Paint & Finishes",
        "Interior and exterior paints, primers and brushes.",
    ),
    (
        "fa-warehouse",
        "Building Materials",
        "Cement, iron bars, roofing sheets and timber.",
    ),
    (
        "fa-screwdriver-wrench",
        "Fasteners & Fixings",
        "Nails, screws, bolts and anchors sold by piece or box.",
    ),
];

const CARD_HOVER: &str = "translateY(-8px) scale(1.02)";
const CARD_REST: &str = "translateY(0) scale(1)";

pub enum Msg {
    Hover(MouseEvent, bool),
}

pub struct Categories;

impl Component for Categories {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Hover(e, hovered) => {
                if let Some(card) = e.target_dyn_into::<HtmlElement>() {
                    let transform = if hovered { CARD_HOVER } else { CARD_REST };
                    dom::set_styles(&card, &[("transform", transform)]);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="products" class="categories">
                <Reveal class="section-header">
                    <h2>{"Shop by Category"}</h2>
                    <p>{"Stocked shelves, fair prices, and staff who can help you pick the right part."}</p>
                </Reveal>
                <div class="category-grid">
                    { for CATEGORIES.iter().map(|&(icon, title, text)| html! {
                        <Reveal>
                            <div
                                class="category-card"
                                onmouseenter={ctx.link().callback(|e| Msg::Hover(e, true))}
                                onmouseleave={ctx.link().callback(|e| Msg::Hover(e, false))}>
                                <i class={classes!("fas", icon)}></i>
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>
        }
    }
}
