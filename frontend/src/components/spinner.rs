use yew::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct SpinnerProps {
    pub label: AttrValue,
}

/// busy label shown inside a button while it waits
pub struct Spinner;
impl Component for Spinner {
    type Message = ();
    type Properties = SpinnerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <span>{ctx.props().label.clone()}</span>
                <i class="fas fa-spinner fa-spin"></i>
            </>
        }
    }
}
