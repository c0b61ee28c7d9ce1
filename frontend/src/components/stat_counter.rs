use gloo_timers::callback::Interval;
use shared::{COUNTER_FRAME_MS, CounterAnimation, parse_target};
use web_sys::Element;
use yew::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// flips to true once and starts the count up
    pub run: bool,
}

pub enum Msg {
    Frame,
}

pub struct StatCounter {
    value: u32,
    node_ref: NodeRef,
    animation: Option<CounterAnimation>,
    interval: Option<Interval>,
}

impl Component for StatCounter {
    type Message = Msg;
    type Properties = StatCounterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            value: 0,
            node_ref: NodeRef::default(),
            animation: None,
            interval: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        if ctx.props().run && self.animation.is_none() {
            self.start(ctx);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Frame => {
                let Some(animation) = self.animation.as_mut() else {
                    return false;
                };

                self.value = animation.step();

                if animation.is_done() {
                    self.interval.take();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="stat">
                <span class="counter" ref={self.node_ref.clone()} data-target={props.target.to_string()}>
                    {self.value.to_string()}
                </span>
                <span class="stat-suffix">{props.suffix.clone()}</span>
                <p class="stat-label">{props.label.clone()}</p>
            </div>
        }
    }
}

impl StatCounter {
    fn start(&mut self, ctx: &Context<Self>) {
        // the rendered attribute is what gets counted, same as the static page
        let target = self
            .node_ref
            .cast::<Element>()
            .map_or(ctx.props().target, |elem| {
                parse_target(elem.get_attribute("data-target").as_deref())
            });

        self.animation = Some(CounterAnimation::new(target));

        let link = ctx.link().clone();
        self.interval = Some(Interval::new(COUNTER_FRAME_MS, move || {
            link.send_message(Msg::Frame);
        }));
    }
}
