use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::copy::{self, ContentBundle, Lang};

/// Which language the page is showing. Owned by the landing page and handed
/// to the sections through props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSelector {
    current: Lang,
}

pub enum SelectorAction {
    Set(Lang),
}

impl LanguageSelector {
    pub fn new(initial: Lang) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    pub fn bundle(&self) -> &'static ContentBundle {
        copy::resolve(self.current)
    }
}

impl Reducible for LanguageSelector {
    type Action = SelectorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // Same language: hand back the same Rc so nothing re-renders.
            SelectorAction::Set(lang) if lang == self.current => self,
            SelectorAction::Set(lang) => {
                info!("Switching language {} -> {}", self.current, lang);
                Rc::new(Self { current: lang })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LANG;

    fn set(selector: Rc<LanguageSelector>, lang: Lang) -> Rc<LanguageSelector> {
        selector.reduce(SelectorAction::Set(lang))
    }

    #[test]
    fn starts_in_portuguese() {
        let selector = LanguageSelector::new(DEFAULT_LANG);
        assert_eq!(selector.current(), Lang::Pt);
        assert_eq!(selector.bundle().nav.work, "Portfólio");
    }

    #[test]
    fn setting_the_current_language_is_a_no_op() {
        let selector = Rc::new(LanguageSelector::new(Lang::Pt));
        let after = set(selector.clone(), Lang::Pt);
        assert!(Rc::ptr_eq(&selector, &after));
    }

    #[test]
    fn switching_back_and_forth_lands_on_the_same_bundle() {
        let selector = Rc::new(LanguageSelector::new(Lang::Pt));
        let selector = set(selector, Lang::En);
        let selector = set(selector, Lang::Pt);
        let selector = set(selector, Lang::En);
        assert_eq!(selector.current(), Lang::En);
        assert_eq!(selector.bundle(), copy::resolve(Lang::En));
    }

    #[test]
    fn switching_to_english_keeps_tiers_and_email() {
        let selector = set(Rc::new(LanguageSelector::new(Lang::Pt)), Lang::En);
        let bundle = selector.bundle();
        assert_eq!(
            (bundle.nav.work, bundle.nav.pricing, bundle.nav.contact),
            ("Work", "Pricing", "Contact")
        );
        let names: Vec<_> = bundle.pricing.iter().map(|tier| tier.name).collect();
        assert_eq!(names, ["Start", "Pro", "Premium"]);
        assert_eq!(bundle.contact.email, "hello@logosdigital.com");
    }
}
