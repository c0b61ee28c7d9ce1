use const_format::formatcp;
use yew::prelude::*;

use crate::{VERSION_STR, environment::SITE_ENV};

const VERSION_LABEL: &str = formatcp!("v{VERSION_STR} ({SITE_ENV})");

pub struct Footer;
impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <footer class="footer">
                <div class="footer-content">
                    <div class="footer-brand">
                        <i class="fas fa-tools"></i>
                        <span>{"Saheri Hardware Centre"}</span>
                    </div>
                    <p>{"Moshi, Kilimanjaro. Open Monday to Saturday, 7:30 to 18:30."}</p>
                    <div class="footer-social">
                        <a href="https://wa.me/255712345678" target="_blank" aria-label="WhatsApp">
                            <i class="fab fa-whatsapp"></i>
                        </a>
                        <a href="https://www.facebook.com/" target="_blank" aria-label="Facebook">
                            <i class="fab fa-facebook"></i>
                        </a>
                        <a href="https://www.instagram.com/" target="_blank" aria-label="Instagram">
                            <i class="fab fa-instagram"></i>
                        </a>
                    </div>
                </div>
                <div class="copyright">
                    {"\u{a9} 2024 Saheri Hardware Centre. All rights reserved."}
                    <span class="version">{VERSION_LABEL}</span>
                </div>
            </footer>
        }
    }
}
