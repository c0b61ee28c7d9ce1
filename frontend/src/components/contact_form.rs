use gloo_timers::callback::Timeout;
use shared::{
    ContactForm as FormState, Field, SHAKE_MS, SUBMIT_DELAY_MS, SUCCESS_DISPLAY_MS,
    SubmissionStatus, SubmitOutcome,
};
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{components::Spinner, dom};

pub enum Msg {
    Input(Field, InputEvent),
    Blur(Field),
    Submit,
    Sent,
    HideSuccess,
    ShakeDone,
}

pub struct ContactForm {
    form: FormState,
    shaking: bool,
    scroll_to_success: bool,
    success_ref: NodeRef,
    submit_timer: Option<Timeout>,
    success_timer: Option<Timeout>,
    shake_timer: Option<Timeout>,
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FormState::default(),
            shaking: false,
            scroll_to_success: false,
            success_ref: NodeRef::default(),
            submit_timer: None,
            success_timer: None,
            shake_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(field, e) => {
                let Some(value) = input_value(&e) else {
                    return false;
                };
                self.form.set_value(field, value);
                true
            }
            Msg::Blur(field) => {
                let had_error = self.form.has_error(field);
                self.form.validate_field(field);
                self.form.has_error(field) != had_error
            }
            Msg::Submit => self.submit(ctx),
            Msg::Sent => {
                self.submit_timer.take();

                if !self.form.complete_submission() {
                    return false;
                }
                log::info!("contact form sent");

                let link = ctx.link().clone();
                self.success_timer = Some(Timeout::new(SUCCESS_DISPLAY_MS, move || {
                    link.send_message(Msg::HideSuccess);
                }));
                self.scroll_to_success = true;
                true
            }
            Msg::HideSuccess => {
                self.success_timer.take();
                self.form.dismiss_success()
            }
            Msg::ShakeDone => {
                self.shake_timer.take();
                self.shaking = false;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !self.scroll_to_success {
            return;
        }
        self.scroll_to_success = false;

        if let Some(elem) = self.success_ref.cast::<Element>() {
            dom::scroll_into_view_nearest(&elem);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let busy = self.form.status() == SubmissionStatus::Submitting;
        let success = self.form.status() == SubmissionStatus::Success;
        let shake = if self.shaking {
            "animation: shake 0.5s"
        } else {
            ""
        };

        html! {
            <>
                <form
                    id="contactForm"
                    class="contact-form"
                    novalidate=true
                    style={shake}
                    onsubmit={ctx.link().callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}>

                    { self.view_field(ctx, Field::Name, "Full Name", "text", "John Mushi") }
                    { self.view_field(ctx, Field::Email, "Email Address", "email", "you@example.com") }
                    { self.view_field(ctx, Field::Phone, "Phone Number", "tel", "+255 712 345 678") }
                    { self.view_field(ctx, Field::Message, "Message", "", "What are you looking for?") }

                    <button type="submit" class={classes!("submit-btn", busy.then_some("loading"))} disabled={busy}>
                        if busy {
                            <Spinner label="Sending..." />
                        } else {
                            <span>{"Send Message"}</span>
                            <i class="fas fa-paper-plane"></i>
                        }
                    </button>
                </form>

                <div
                    id="success-message"
                    ref={self.success_ref.clone()}
                    class={classes!("success-message", success.then_some("show"))}
                    role="status">
                    <i class="fas fa-check-circle"></i>
                    <span>{"Thank you! Your message has been sent. We will get back to you shortly."}</span>
                </div>
            </>
        }
    }
}

impl ContactForm {
    fn submit(&mut self, ctx: &Context<Self>) -> bool {
        let outcome = self.form.submit();

        match outcome {
            SubmitOutcome::Ignored => {
                log::debug!("submit ignored, already sending");
                return false;
            }
            SubmitOutcome::Started => {
                log::info!("contact form submitting");

                let link = ctx.link().clone();
                self.submit_timer = Some(Timeout::new(SUBMIT_DELAY_MS, move || {
                    link.send_message(Msg::Sent);
                }));
            }
            SubmitOutcome::Rejected => {
                log::debug!("contact form rejected: {:?}", self.form.errors());

                let link = ctx.link().clone();
                self.shaking = true;
                self.shake_timer = Some(Timeout::new(SHAKE_MS, move || {
                    link.send_message(Msg::ShakeDone);
                }));
            }
        }

        // a new attempt always ends an earlier success notification
        self.success_timer.take();
        true
    }

    fn view_field(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        input_type: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let id = field.id();
        let error_id = format!("{id}-error");
        let message = self.form.error_message(field);
        let state_class = self.form.has_error(field).then_some("error");

        let value = self.form.value(field).to_owned();
        let oninput = ctx.link().callback(move |e| Msg::Input(field, e));
        let onblur = ctx.link().callback(move |_: FocusEvent| Msg::Blur(field));

        let control = if field == Field::Message {
            html! {
                <textarea
                    {id}
                    name={id}
                    rows="5"
                    class={classes!(state_class)}
                    {placeholder}
                    {value}
                    {oninput}
                    {onblur}
                    aria-describedby={error_id.clone()}>
                </textarea>
            }
        } else {
            html! {
                <input
                    type={input_type}
                    {id}
                    name={id}
                    class={classes!(state_class)}
                    {placeholder}
                    {value}
                    {oninput}
                    {onblur}
                    aria-describedby={error_id.clone()} />
            }
        };

        html! {
            <div class="form-group">
                <label for={id}>{label}</label>
                {control}
                <span id={error_id} class={classes!("error-message", message.is_some().then_some("show"))}>
                    {message.unwrap_or_default()}
                </span>
            </div>
        }
    }
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| {
            e.target_dyn_into::<HtmlTextAreaElement>()
                .map(|area| area.value())
        })
}
