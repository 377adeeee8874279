use yew::prelude::*;

use crate::animation::use_reveal_on_view;
use crate::components::icons::{icon, Icon};
use crate::components::section_title::SectionTitle;
use crate::config;
use crate::copy::SectionsCopy;

/// Placeholder cards until real case studies exist. Not translated.
const PROJECT_COUNT: usize = 3;
const PROJECT_CAPTION: &str = "Demo • Layout • Motion";

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub sections: &'static SectionsCopy,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let sections = props.sections;

    html! {
        <section id={config::ANCHOR_WORK} class="container portfolio-section">
            <SectionTitle
                kicker={sections.portfolio_kicker}
                title={sections.portfolio_title}
                subtitle={sections.portfolio_subtitle}
            />
            <div class="card-grid">
                { for (1..=PROJECT_COUNT).map(|number| html! { <ProjectCard number={number} /> }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    number: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_on_view(node.clone(), config::REVEAL_THRESHOLD);

    html! {
        <a
            ref={node}
            id={format!("project-{}", props.number)}
            href="#"
            target="_blank"
            rel="noreferrer"
            class={classes!("project-card", "reveal", revealed.then(|| "is-visible"))}
        >
            <div class="project-preview"></div>
            <div class="project-footer">
                <div>
                    <h3 class="project-title">{ format!("Project {}", props.number) }</h3>
                    <p class="project-caption">{ PROJECT_CAPTION }</p>
                </div>
                { icon(Icon::ArrowRight, "icon-sm project-arrow") }
            </div>
        </a>
    }
}
