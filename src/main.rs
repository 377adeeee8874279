use log::info;

mod animation;
mod config;
mod copy;
mod dom;
mod error;
mod selector;
mod components {
    pub mod icons;
    pub mod section_title;
}
mod sections {
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod portfolio;
    pub mod pricing;
}
mod pages {
    pub mod landing;
}
#[cfg(test)]
mod test_utils;

use pages::landing::{Landing, LandingProps};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let initial = dom::initial_language();
    info!("Starting landing page in {}", initial);
    yew::Renderer::<Landing>::with_props(LandingProps { initial }).render();
}
