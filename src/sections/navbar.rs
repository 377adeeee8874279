use yew::prelude::*;

use crate::config;
use crate::copy::{Lang, NavCopy};
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub lang: Lang,
    pub nav: &'static NavCopy,
    pub cta: &'static str,
    pub on_select: Callback<Lang>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps { lang, nav, cta, on_select } = props;

    let toggle = |target: Lang| {
        let on_select = on_select.clone();
        let active = *lang == target;
        html! {
            <button
                class={classes!("lang-toggle", active.then(|| "active"))}
                aria-pressed={active.to_string()}
                onclick={Callback::from(move |_: MouseEvent| on_select.emit(target))}
            >
                { nav.toggle_caption(target) }
            </button>
        }
    };

    let go_to_contact = Callback::from(|_: MouseEvent| dom::scroll_to_anchor(config::ANCHOR_CONTACT));

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <img
                        src={config::asset_url(config::LOGO_IMAGE)}
                        alt={format!("{} logo", config::BRAND_NAME)}
                        width="240"
                        height="240"
                    />
                </a>

                <div class="nav-right">
                    <div class="nav-links">
                        <a href={format!("#{}", config::ANCHOR_WORK)} class="nav-link">{ nav.work }</a>
                        <a href={format!("#{}", config::ANCHOR_PRICING)} class="nav-link">{ nav.pricing }</a>
                        <a href={format!("#{}", config::ANCHOR_CONTACT)} class="nav-link">{ nav.contact }</a>
                    </div>

                    <div class="lang-switch" title={format!("{}: English / Português", nav.lang_label)}>
                        <span class="lang-label">{ nav.lang_label }</span>
                        <div class="lang-toggle-group">
                            { for Lang::ALL.into_iter().map(toggle) }
                        </div>
                    </div>

                    <button class="button nav-cta" onclick={go_to_contact}>{ *cta }</button>
                </div>
            </div>
        </nav>
    }
}
