//! Every piece of text on the page, one bundle per language.
//!
//! Both bundles are plain `static` data. Service and tier counts are part of
//! the types, so the two languages cannot drift apart in shape.

use std::fmt;
use std::str::FromStr;

use crate::components::icons::Icon;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Pt,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt",
        }
    }

    /// Value for the document's `<html lang>` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt-BR",
        }
    }

    /// Verb on the pricing buttons, e.g. "Choose Pro".
    pub fn choose_label(self) -> &'static str {
        match self {
            Lang::En => "Choose",
            Lang::Pt => "Escolher",
        }
    }

    pub fn quick_message_title(self) -> &'static str {
        match self {
            Lang::En => "Quick message",
            Lang::Pt => "Mensagem rápida",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Lang::En),
            "pt" | "pt-br" | "pt-pt" => Ok(Lang::Pt),
            _ => Err(Error::UnknownLanguage(code.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct NavCopy {
    pub work: &'static str,
    pub pricing: &'static str,
    pub contact: &'static str,
    pub lang_label: &'static str,
    pub toggle_en: &'static str,
    pub toggle_pt: &'static str,
}

impl NavCopy {
    pub fn toggle_caption(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.toggle_en,
            Lang::Pt => self.toggle_pt,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct BrandCopy {
    pub name: &'static str,
    pub tagline: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SectionsCopy {
    pub portfolio_kicker: &'static str,
    pub portfolio_title: &'static str,
    pub portfolio_subtitle: &'static str,
    pub pricing_kicker: &'static str,
    pub pricing_title: &'static str,
    pub pricing_subtitle: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Tier {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub highlight: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ContactCopy {
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub city: &'static str,
    pub maps_url: &'static str,
    pub site: &'static str,
    pub form_name: &'static str,
    pub form_email: &'static str,
    pub form_message: &'static str,
    pub form_send: &'static str,
    pub map_tip: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ContentBundle {
    pub nav: NavCopy,
    pub brand: BrandCopy,
    pub services: [Service; 3],
    pub sections: SectionsCopy,
    pub pricing: [Tier; 3],
    pub contact: ContactCopy,
    pub footer_text: &'static str,
}

pub fn resolve(lang: Lang) -> &'static ContentBundle {
    match lang {
        Lang::En => &EN,
        Lang::Pt => &PT,
    }
}

static EN: ContentBundle = ContentBundle {
    nav: NavCopy {
        work: "Work",
        pricing: "Pricing",
        contact: "Contact",
        lang_label: "Language",
        toggle_en: "EN",
        toggle_pt: "PT",
    },
    brand: BrandCopy {
        name: "Logos Digital",
        tagline: "Digital lab for niche communities & high-impact landing pages.",
        cta_primary: "Start a project",
        cta_secondary: "View portfolio",
    },
    services: [
        Service {
            icon: Icon::Layout,
            title: "Custom Landing Pages",
            description: "Fast, mobile-first pages designed to turn visitors into leads.",
        },
        Service {
            icon: Icon::Rocket,
            title: "Performance & SEO",
            description: "Clean code, best practices, and indexing that helps you show up on Google.",
        },
        Service {
            icon: Icon::Wand,
            title: "Animations & Micro-UX",
            description: "Subtle motion and delightful details without hurting speed.",
        },
    ],
    sections: SectionsCopy {
        portfolio_kicker: "Portfolio",
        portfolio_title: "Recent work",
        portfolio_subtitle: "A quick look at styles and layouts you can request.",
        pricing_kicker: "Pricing",
        pricing_title: "Simple plans",
        pricing_subtitle: "Start small, grow as you need. Custom quotes available.",
    },
    pricing: [
        Tier {
            name: "Start",
            price: "R$ 600",
            features: &["Single-page landing", "WhatsApp & CTA buttons", "Basic SEO & analytics"],
            highlight: false,
        },
        Tier {
            name: "Pro",
            price: "R$ 1.200",
            features: &[
                "Everything in Start",
                "Copy + images support",
                "Google Business setup",
                "QR business card (PDF)",
            ],
            highlight: true,
        },
        Tier {
            name: "Premium",
            price: "R$ 1.900+",
            features: &[
                "Custom sections & animations",
                "SEO plan + schema",
                "Ads setup guidance",
                "30 days support",
            ],
            highlight: false,
        },
    ],
    contact: ContactCopy {
        kicker: "Contact",
        title: "Tell me about your project",
        subtitle: "Prefer WhatsApp? Email? I answer both.",
        email: "hello@logosdigital.com",
        city: "Brasília, DF",
        maps_url: "https://maps.app.goo.gl/",
        site: "https://www.logosdigital.com",
        form_name: "Name",
        form_email: "Email or WhatsApp",
        form_message: "What do you need?",
        form_send: "Send",
        map_tip: "Tip: want a mini map or just a QR to Maps? I can add a QR that opens your exact location.",
    },
    footer_text: "Art Meets Algorithm.",
};

static PT: ContentBundle = ContentBundle {
    nav: NavCopy {
        work: "Portfólio",
        pricing: "Preços",
        contact: "Contato",
        lang_label: "Idioma",
        toggle_en: "EN",
        toggle_pt: "PT",
    },
    brand: BrandCopy {
        name: "Logos Digital",
        tagline: "Laboratório digital para nichos & landing pages de alto impacto.",
        cta_primary: "Começar um projeto",
        cta_secondary: "Ver portfólio",
    },
    services: [
        Service {
            icon: Icon::Layout,
            title: "Landing Pages Sob Medida",
            description: "Páginas rápidas e mobile-first pensadas para gerar leads.",
        },
        Service {
            icon: Icon::Rocket,
            title: "Performance & SEO",
            description: "Código limpo, boas práticas e indexação para aparecer no Google.",
        },
        Service {
            icon: Icon::Wand,
            title: "Animações & Micro-UX",
            description: "Movimentos sutis e detalhes agradáveis sem perder velocidade.",
        },
    ],
    sections: SectionsCopy {
        portfolio_kicker: "Portfólio",
        portfolio_title: "Trabalhos recentes",
        portfolio_subtitle: "Uma amostra de estilos e layouts que você pode pedir.",
        pricing_kicker: "Preços",
        pricing_title: "Planos simples",
        pricing_subtitle: "Comece pequeno e evolua conforme precisar. Orçamentos sob medida.",
    },
    pricing: [
        Tier {
            name: "Start",
            price: "R$ 600",
            features: &["Landing page única", "Botões WhatsApp & CTA", "SEO básico & analytics"],
            highlight: false,
        },
        Tier {
            name: "Pro",
            price: "R$ 1.200",
            features: &["Tudo do Start", "Textos & imagens", "Google Business", "Cartão QR (PDF)"],
            highlight: true,
        },
        Tier {
            name: "Premium",
            price: "R$ 1.900+",
            features: &[
                "Seções & animações sob medida",
                "Plano de SEO + schema",
                "Config de anúncios",
                "30 dias de suporte",
            ],
            highlight: false,
        },
    ],
    contact: ContactCopy {
        kicker: "Contato",
        title: "Conte sobre o seu projeto",
        subtitle: "Prefere WhatsApp? Email? Respondo ambos.",
        email: "hello@logosdigital.com",
        city: "Brasília, DF",
        maps_url: "https://maps.app.goo.gl/",
        site: "https://www.logosdigital.com",
        form_name: "Nome",
        form_email: "Email ou WhatsApp",
        form_message: "Do que você precisa?",
        form_send: "Enviar",
        map_tip: "Dica: quer um mapa mini ou só um QR para o Maps? Posso adicionar um QR que abre sua localização exata.",
    },
    footer_text: "Art Meets Algorithm.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundle_has_three_services_and_one_highlighted_tier() {
        for lang in Lang::ALL {
            let bundle = resolve(lang);
            assert_eq!(bundle.services.len(), 3, "{lang}");
            assert_eq!(bundle.pricing.len(), 3, "{lang}");
            let highlighted = bundle.pricing.iter().filter(|tier| tier.highlight).count();
            assert_eq!(highlighted, 1, "{lang}");
        }
    }

    #[test]
    fn bundles_line_up_across_languages() {
        let (en, pt) = (resolve(Lang::En), resolve(Lang::Pt));
        for (a, b) in en.services.iter().zip(&pt.services) {
            assert_eq!(a.icon, b.icon);
        }
        for (a, b) in en.pricing.iter().zip(&pt.pricing) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.price, b.price);
            assert_eq!(a.highlight, b.highlight);
            assert_eq!(a.features.len(), b.features.len());
        }
        assert_eq!(en.contact.email, pt.contact.email);
        assert_eq!(en.contact.maps_url, pt.contact.maps_url);
        assert_eq!(en.contact.site, pt.contact.site);
    }

    #[test]
    fn tier_names_are_not_translated() {
        for lang in Lang::ALL {
            let names: Vec<_> = resolve(lang).pricing.iter().map(|tier| tier.name).collect();
            assert_eq!(names, ["Start", "Pro", "Premium"]);
        }
    }

    #[test]
    fn nav_labels_per_language() {
        let en = &resolve(Lang::En).nav;
        assert_eq!((en.work, en.pricing, en.contact), ("Work", "Pricing", "Contact"));
        let pt = &resolve(Lang::Pt).nav;
        assert_eq!((pt.work, pt.pricing, pt.contact), ("Portfólio", "Preços", "Contato"));
    }

    #[test]
    fn parses_language_codes() {
        assert_eq!("en".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("EN-us".parse::<Lang>(), Ok(Lang::En));
        assert_eq!(" pt-BR ".parse::<Lang>(), Ok(Lang::Pt));
        assert_eq!(
            "fr".parse::<Lang>(),
            Err(Error::UnknownLanguage("fr".to_string()))
        );
        for lang in Lang::ALL {
            assert_eq!(lang.code().parse::<Lang>(), Ok(lang));
            assert_eq!(lang.html_lang().parse::<Lang>(), Ok(lang));
        }
    }

    #[test]
    fn language_words_come_from_the_key() {
        assert_eq!(Lang::En.choose_label(), "Choose");
        assert_eq!(Lang::Pt.choose_label(), "Escolher");
        assert_eq!(Lang::En.quick_message_title(), "Quick message");
        assert_eq!(Lang::Pt.quick_message_title(), "Mensagem rápida");
    }
}
