use log::Level;

use crate::copy::Lang;

/// Language the page opens in when the URL does not ask for another one.
pub const DEFAULT_LANG: Lang = Lang::Pt;

pub const BRAND_NAME: &str = "Logos Digital";

pub const LOGO_IMAGE: &str = "logosdigital-logo.png";
pub const FOOTER_IMAGE: &str = "footer-vetor-image.png";

pub const ANCHOR_WORK: &str = "work";
pub const ANCHOR_PRICING: &str = "pricing";
pub const ANCHOR_CONTACT: &str = "contact";

pub const STAGGER_STEP_MS: u32 = 80;
pub const FADE_DURATION_MS: u32 = 600;
/// Share of a card that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.3;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn get_asset_base() -> &'static str {
    "/assets"
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", get_asset_base(), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_urls_live_under_the_asset_base() {
        assert_eq!(asset_url(LOGO_IMAGE), "/assets/logosdigital-logo.png");
        assert_eq!(asset_url(FOOTER_IMAGE), "/assets/footer-vetor-image.png");
    }
}
