use yew::prelude::*;

use crate::components::icons::{icon, Icon};
use crate::components::section_title::SectionTitle;
use crate::config;
use crate::copy::{Lang, SectionsCopy, Tier};

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub lang: Lang,
    pub sections: &'static SectionsCopy,
    pub tiers: &'static [Tier; 3],
}

/// One card per tier, in the order the bundle lists them.
#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let PricingProps { lang, sections, tiers } = props;

    html! {
        <section id={config::ANCHOR_PRICING} class="pricing-section">
            <div class="container">
                <SectionTitle
                    kicker={sections.pricing_kicker}
                    title={sections.pricing_title}
                    subtitle={sections.pricing_subtitle}
                />
                <div class="card-grid">
                    { for tiers.iter().map(|tier| tier_card(*lang, tier)) }
                </div>
            </div>
        </section>
    }
}

fn tier_card(lang: Lang, tier: &Tier) -> Html {
    html! {
        <div class={classes!("card", "pricing-card", tier.highlight.then(|| "pricing-card-highlight"))}>
            <div class="pricing-header">
                <span class="tier-name">{ tier.name }</span>
                <span class="tier-price">{ tier.price }</span>
            </div>
            <ul class="feature-list">
                { for tier.features.iter().map(|feature| html! {
                    <li>
                        { icon(Icon::Check, "icon-sm feature-check") }
                        <span>{ *feature }</span>
                    </li>
                }) }
            </ul>
            <button class="button button-full">
                { format!("{} {}", lang.choose_label(), tier.name) }
            </button>
        </div>
    }
}
