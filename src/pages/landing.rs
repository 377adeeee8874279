use log::debug;
use yew::prelude::*;

use crate::copy;
use crate::dom;
use crate::sections::{
    contact::{Contact, ContactMessage},
    footer::Footer,
    hero::Hero,
    navbar::Navbar,
    portfolio::Portfolio,
    pricing::Pricing,
};
use crate::selector::{LanguageSelector, SelectorAction};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub initial: copy::Lang,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let initial = props.initial;
    let selector = use_reducer_eq(move || LanguageSelector::new(initial));
    let lang = selector.current();
    let bundle = selector.bundle();

    use_effect_with_deps(
        move |lang: &copy::Lang| {
            dom::apply_document_metadata(*lang, copy::resolve(*lang));
            || ()
        },
        lang,
    );

    let on_select = {
        let selector = selector.clone();
        Callback::from(move |lang| selector.dispatch(SelectorAction::Set(lang)))
    };

    // No form backend yet: keep the visitor on the page and note the attempt.
    let on_contact = Callback::from(|message: ContactMessage| {
        if message.is_blank() {
            debug!("Empty contact form submitted");
        } else {
            debug!(
                "Contact form submitted ({} chars), no form backend configured",
                message.message.chars().count()
            );
        }
    });

    html! {
        <main class="landing">
            <style>{ PAGE_CSS }</style>
            <Navbar lang={lang} nav={&bundle.nav} cta={bundle.brand.cta_primary} on_select={on_select} />
            <Hero brand={&bundle.brand} services={&bundle.services} />
            <Pricing lang={lang} sections={&bundle.sections} tiers={&bundle.pricing} />
            <Portfolio sections={&bundle.sections} />
            <Contact lang={lang} contact={&bundle.contact} on_submit={on_contact} />
            <Footer text={bundle.footer_text} />
        </main>
    }
}

const PAGE_CSS: &str = r#"
    .landing {
        min-height: 100vh;
        background: linear-gradient(to bottom, #ffffff, #ffffff 60%, #f8fafc);
        color: #0f172a;
        font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .icon { display: inline-block; vertical-align: middle; }
    .icon-xs { width: 0.75rem; height: 0.75rem; }
    .icon-sm { width: 1rem; height: 1rem; }
    .icon-md { width: 1.5rem; height: 1.5rem; }

    .top-nav {
        position: sticky;
        top: 0;
        z-index: 40;
        width: 100%;
        border-bottom: 1px solid #e2e8f0;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(8px);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo img { height: 8rem; width: auto; object-fit: contain; }
    .nav-right { display: flex; align-items: center; gap: 1rem; }
    .nav-links { display: flex; gap: 1.5rem; font-size: 0.875rem; }
    .nav-link { color: inherit; text-decoration: none; opacity: 0.8; }
    .nav-link:hover { opacity: 1; }
    .lang-switch { display: flex; align-items: center; gap: 0.5rem; }
    .lang-label { font-size: 0.75rem; color: #64748b; }
    .lang-toggle-group {
        display: inline-flex;
        overflow: hidden;
        border: 1px solid #e2e8f0;
        border-radius: 9999px;
    }
    .lang-toggle {
        padding: 0.25rem 0.75rem;
        font-size: 0.75rem;
        border: none;
        background: #ffffff;
        color: #0f172a;
        cursor: pointer;
    }
    .lang-toggle.active { background: #0f172a; color: #ffffff; }

    .button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 0.5rem;
        background: #0f172a;
        color: #ffffff;
        font-size: 0.875rem;
        cursor: pointer;
    }
    .button-large { height: 2.75rem; padding: 0 1.5rem; font-size: 1rem; }
    .button-secondary { background: #f1f5f9; color: #0f172a; }
    .button-full { width: 100%; margin-top: 1.5rem; }

    .hero { position: relative; overflow: hidden; padding: 6rem 1.5rem; }
    .hero-glow {
        position: absolute;
        left: 50%;
        top: -20%;
        z-index: -1;
        width: 40rem;
        height: 40rem;
        transform: translateX(-50%);
        border-radius: 9999px;
        background: linear-gradient(135deg, rgba(16, 185, 129, 0.2), rgba(6, 182, 212, 0.1), transparent);
        filter: blur(64px);
        pointer-events: none;
    }
    .hero-content { text-align: center; }
    .hero h1 { font-size: 3.75rem; font-weight: 800; letter-spacing: -0.025em; margin: 0; }
    .hero-tagline { max-width: 36rem; margin: 1rem auto 0; color: #64748b; font-size: 1.125rem; }
    .hero-buttons { margin-top: 2rem; display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; }

    .reveal {
        opacity: 0;
        transform: translateY(12px);
        transition-property: opacity, transform;
        transition-timing-function: ease-out;
    }
    .reveal.is-visible { opacity: 1; transform: translateY(0); }
    .project-card.reveal { transition-duration: 600ms; }

    .card {
        border: 1px solid #e2e8f0;
        border-radius: 1rem;
        background: #ffffff;
        padding: 1.5rem;
    }
    .card-title { font-size: 1rem; font-weight: 600; margin: 0.5rem 0; }
    .card-text { font-size: 0.875rem; color: #64748b; }
    .service-grid {
        max-width: 1200px;
        margin: 3.5rem auto 0;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1rem;
    }
    .service-icon { color: #059669; }

    .section-title { max-width: 42rem; margin: 0 auto; text-align: center; }
    .section-kicker {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 0.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: #d1fae5;
        color: #047857;
        font-size: 0.75rem;
        font-weight: 500;
    }
    .section-title h2 { font-size: 2.25rem; font-weight: 700; margin: 0; }
    .section-subtitle { margin-top: 0.75rem; font-size: 0.875rem; color: #64748b; }
    .card-grid {
        margin-top: 2.5rem;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }

    .pricing-section { padding: 5rem 0; background: rgba(248, 250, 252, 0.4); }
    .pricing-card-highlight {
        border-color: #6ee7b7;
        box-shadow: 0 0 0 2px rgba(16, 185, 129, 0.25);
    }
    .pricing-header { display: flex; align-items: baseline; justify-content: space-between; font-weight: 600; }
    .tier-price { font-size: 1.25rem; font-weight: 800; }
    .feature-list { list-style: none; padding: 0; margin: 1rem 0 0; font-size: 0.875rem; color: #64748b; }
    .feature-list li { display: flex; align-items: flex-start; gap: 0.5rem; margin-bottom: 0.5rem; }
    .feature-check { color: #059669; margin-top: 0.125rem; }

    .portfolio-section, .contact-section { padding-top: 5rem; padding-bottom: 5rem; }
    .project-card {
        display: block;
        overflow: hidden;
        padding: 1rem;
        border-radius: 1rem;
        background: linear-gradient(135deg, #0f172a, #1e293b);
        text-decoration: none;
    }
    .project-preview { aspect-ratio: 16 / 10; width: 100%; border-radius: 0.75rem; background: rgba(51, 65, 85, 0.4); }
    .project-footer { margin-top: 1rem; display: flex; align-items: center; justify-content: space-between; }
    .project-title { margin: 0; font-size: 0.875rem; font-weight: 600; color: #ffffff; }
    .project-caption { margin: 0; font-size: 0.75rem; color: #cbd5e1; }
    .project-arrow { color: #34d399; transition: transform 150ms; }
    .project-card:hover .project-arrow { transform: translateX(4px); }

    .contact-grid { margin-top: 2.5rem; display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; align-items: start; }
    .contact-form { display: flex; flex-direction: column; gap: 0.75rem; }
    .field {
        width: 100%;
        box-sizing: border-box;
        padding: 0.5rem 0.75rem;
        border: 1px solid #e2e8f0;
        border-radius: 0.5rem;
        font-size: 0.875rem;
    }
    .field-message { min-height: 120px; }
    .contact-links { display: flex; flex-direction: column; gap: 1rem; font-size: 0.875rem; }
    .contact-link { display: flex; align-items: center; gap: 0.5rem; color: inherit; text-decoration: none; }
    .contact-link:hover { color: #059669; }
    .contact-tip { margin-top: 1.5rem; font-size: 0.75rem; color: #64748b; }

    .site-footer { border-top: 1px solid #e2e8f0; padding: 2.5rem 0; }
    .footer-content { display: flex; align-items: center; justify-content: space-between; gap: 0.75rem; }
    .footer-copy { font-size: 0.75rem; color: #64748b; }
    .footer-art img { display: block; height: 12rem; width: auto; object-fit: contain; }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        white-space: nowrap;
    }

    @media (max-width: 768px) {
        .nav-links, .nav-cta, .lang-label { display: none; }
        .hero h1 { font-size: 2.25rem; }
        .service-grid, .card-grid, .contact-grid { grid-template-columns: 1fr; }
        .footer-content { flex-direction: column; }
        .footer-art img { height: 8rem; }
    }

    @media (prefers-reduced-motion: reduce) {
        .reveal { opacity: 1; transform: none; transition: none; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::{resolve, ContentBundle, Lang};
    use crate::test_utils::{escape_text, render};

    async fn render_landing(initial: Lang) -> String {
        render::<Landing>(move || LandingProps { initial }).await
    }

    fn bundle_strings(bundle: &ContentBundle) -> Vec<&'static str> {
        let nav = &bundle.nav;
        let brand = &bundle.brand;
        let sections = &bundle.sections;
        let contact = &bundle.contact;
        let mut strings = vec![
            nav.work,
            nav.pricing,
            nav.contact,
            nav.lang_label,
            nav.toggle_en,
            nav.toggle_pt,
            brand.name,
            brand.tagline,
            brand.cta_primary,
            brand.cta_secondary,
            sections.portfolio_kicker,
            sections.portfolio_title,
            sections.portfolio_subtitle,
            sections.pricing_kicker,
            sections.pricing_title,
            sections.pricing_subtitle,
            contact.kicker,
            contact.title,
            contact.subtitle,
            contact.email,
            contact.city,
            contact.maps_url,
            contact.site,
            contact.form_name,
            contact.form_email,
            contact.form_message,
            contact.form_send,
            contact.map_tip,
            bundle.footer_text,
        ];
        for service in &bundle.services {
            strings.extend([service.title, service.description]);
        }
        for tier in &bundle.pricing {
            strings.extend([tier.name, tier.price]);
            strings.extend(tier.features.iter().copied());
        }
        strings
    }

    /// Strings that only exist in `other`'s bundle and are not part of any
    /// string of `lang` ("Google Business" sits inside "Google Business setup").
    fn foreign_strings(lang: Lang, other: Lang) -> Vec<&'static str> {
        let own = bundle_strings(resolve(lang));
        bundle_strings(resolve(other))
            .into_iter()
            .filter(|s| !own.iter().any(|mine| mine.contains(s)))
            .collect()
    }

    #[tokio::test]
    async fn defaults_to_portuguese_navigation() {
        let html = render_landing(crate::config::DEFAULT_LANG).await;
        for label in ["Portfólio", "Preços", "Contato"] {
            assert!(html.contains(label), "missing {label}");
        }
    }

    #[tokio::test]
    async fn english_page_keeps_tier_names_and_email() {
        let html = render_landing(Lang::En).await;
        for label in ["Work", "Pricing", "Contact"] {
            assert!(html.contains(label), "missing {label}");
        }
        for tier in ["Start", "Pro", "Premium"] {
            assert!(html.contains(&format!("Choose {tier}")), "missing {tier}");
        }
        assert!(html.contains("hello@logosdigital.com"));
    }

    #[tokio::test]
    async fn sections_render_in_fixed_order() {
        let html = render_landing(Lang::Pt).await;
        let positions: Vec<usize> = [
            r#"class="top-nav""#,
            r#"class="hero""#,
            r#"id="pricing""#,
            r#"id="work""#,
            r#"id="contact""#,
            r#"class="site-footer""#,
        ]
        .iter()
        .map(|marker| html.find(marker).expect(marker))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
    }

    #[tokio::test]
    async fn no_language_leaks_into_the_other() {
        for (lang, other) in [(Lang::En, Lang::Pt), (Lang::Pt, Lang::En)] {
            let html = render_landing(lang).await;
            let foreign = foreign_strings(lang, other);
            assert!(!foreign.is_empty());
            for s in foreign {
                assert!(
                    !html.contains(s) && !html.contains(&escape_text(s)),
                    "{other} string {s:?} leaked into the {lang} page"
                );
            }
            for s in bundle_strings(resolve(lang)) {
                assert!(
                    html.contains(s) || html.contains(&escape_text(s)),
                    "{lang} string {s:?} missing from its page"
                );
            }
        }
    }
}
