use yew::prelude::*;

use crate::components::{BackToTop, Categories, ContactForm, Footer, Hero, Navbar, Reveal};

#[allow(clippy::empty_structs_with_brackets)]
#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct HomeProps;

pub struct Home;
impl Component for Home {
    type Message = ();
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Navbar />
                <Hero />
                <Categories />

                <section id="about" class="about">
                    <Reveal class="about-text">
                        <h2>{"Your Local Hardware Experts"}</h2>
                        <p>
                            {"Saheri Hardware Centre has supplied builders, fundis and homeowners for over
                            fifteen years. We carry the brands contractors trust and we will order what
                            we do not have in stock."}
                        </p>
                    </Reveal>
                    <Reveal class="about-features" animation="fade-left">
                        <ul>
                            <li><i class="fas fa-truck"></i>{"Same day delivery in town"}</li>
                            <li><i class="fas fa-tags"></i>{"Trade prices for contractors"}</li>
                            <li><i class="fas fa-headset"></i>{"Advice from experienced staff"}</li>
                        </ul>
                    </Reveal>
                </section>

                <section id="contact" class="contact">
                    <Reveal class="section-header">
                        <h2>{"Get in Touch"}</h2>
                        <p>{"Ask for a quote or check stock. We usually answer within one working day."}</p>
                    </Reveal>
                    <div class="contact-wrapper">
                        <div class="contact-info">
                            <p><i class="fas fa-map-marker-alt"></i>{"Mawenzi Road, Moshi"}</p>
                            <p><i class="fas fa-phone"></i>{"+255 712 345 678"}</p>
                            <p><i class="fas fa-envelope"></i>{"sales@saherihardware.co.tz"}</p>
                        </div>
                        <ContactForm />
                    </div>
                </section>

                <Footer />
                <BackToTop />
            </>
        }
    }
}
