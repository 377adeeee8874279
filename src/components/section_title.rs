use yew::prelude::*;

use crate::components::icons::{icon, Icon};

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    #[prop_or_default]
    pub kicker: Option<&'static str>,
    pub title: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            if let Some(kicker) = props.kicker {
                <div class="section-kicker">
                    { icon(Icon::Sparkles, "icon-xs") }
                    { kicker }
                </div>
            }
            <h2>{ props.title }</h2>
            if let Some(subtitle) = props.subtitle {
                <p class="section-subtitle">{ subtitle }</p>
            }
        </div>
    }
}
