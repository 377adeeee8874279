use yew::prelude::*;

use crate::animation::{use_reveal_on_mount, Stagger};
use crate::components::icons::{icon, Icon};
use crate::config;
use crate::copy::{BrandCopy, Service};
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub brand: &'static BrandCopy,
    pub services: &'static [Service; 3],
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { brand, services } = props;
    let revealed = use_reveal_on_mount();
    let stagger = Stagger::HERO;

    // Children fade in one after another: name, tagline, buttons, grid.
    let reveal = |index: usize| -> (Classes, String) {
        (classes!("reveal", revealed.then(|| "is-visible")), stagger.style(index))
    };
    let (name_class, name_style) = reveal(0);
    let (tagline_class, tagline_style) = reveal(1);
    let (buttons_class, buttons_style) = reveal(2);
    let (grid_class, grid_style) = reveal(3);

    let go_to_contact = Callback::from(|_: MouseEvent| dom::scroll_to_anchor(config::ANCHOR_CONTACT));
    let go_to_work = Callback::from(|_: MouseEvent| dom::scroll_to_anchor(config::ANCHOR_WORK));

    html! {
        <header class="hero">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <h1 class={name_class} style={name_style}>{ brand.name }</h1>
                <p class={classes!("hero-tagline", tagline_class)} style={tagline_style}>{ brand.tagline }</p>
                <div class={classes!("hero-buttons", buttons_class)} style={buttons_style}>
                    <button class="button button-large" onclick={go_to_contact}>
                        { brand.cta_primary }
                        { icon(Icon::ArrowRight, "icon-sm") }
                    </button>
                    <button class="button button-large button-secondary" onclick={go_to_work}>
                        { brand.cta_secondary }
                    </button>
                </div>
            </div>

            <div class={classes!("service-grid", grid_class)} style={grid_style}>
                { for services.iter().map(|service| html! {
                    <div class="card service-card">
                        <div class="service-icon">{ icon(service.icon, "icon-md") }</div>
                        <h3 class="card-title">{ service.title }</h3>
                        <p class="card-text">{ service.description }</p>
                    </div>
                }) }
            </div>
        </header>
    }
}
