use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub text: &'static str,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <p class="footer-copy">{ format!("© {} {}", year, config::BRAND_NAME) }</p>
                <div class="footer-art">
                    <img
                        src={config::asset_url(config::FOOTER_IMAGE)}
                        alt={props.text}
                        width="1600"
                        height="400"
                    />
                    <span class="sr-only">{ props.text }</span>
                </div>
            </div>
        </footer>
    }
}
