//! Thin wrappers over the browser APIs the page touches. Anything missing
//! (no window, no element) turns the call into a no-op.

use log::{debug, warn};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;
use crate::copy::{ContentBundle, Lang};
use crate::error::Result;

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn scroll_to_anchor(id: &str) {
    let Some(target) = document().and_then(|doc| doc.get_element_by_id(id)) else {
        debug!("No #{} on the page, skipping scroll", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Keeps `<title>`, the meta description and `<html lang>` in step with the
/// active language.
pub fn apply_document_metadata(lang: Lang, bundle: &ContentBundle) {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(config::BRAND_NAME);
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", lang.html_lang());
    }

    let description = match doc.query_selector("meta[name=\"description\"]").ok().flatten() {
        Some(meta) => Some(meta),
        None => create_description_meta(&doc),
    };
    if let Some(meta) = description {
        let _ = meta.set_attribute("content", bundle.brand.tagline);
    }
}

fn create_description_meta(doc: &Document) -> Option<web_sys::Element> {
    let meta = doc.create_element("meta").ok()?;
    meta.set_attribute("name", "description").ok()?;
    doc.head()?.append_child(&meta).ok()?;
    Some(meta)
}

/// Language requested through `?lang=`, falling back to the default.
pub fn initial_language() -> Lang {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    match requested_language(&search) {
        Some(Ok(lang)) => lang,
        Some(Err(err)) => {
            warn!("Ignoring ?lang: {}", err);
            config::DEFAULT_LANG
        }
        None => config::DEFAULT_LANG,
    }
}

/// Parses the `lang` parameter out of a location search string such as
/// `?utm_source=x&lang=en`.
pub fn requested_language(search: &str) -> Option<Result<Lang>> {
    let value = search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "lang")
        .map(|(_, value)| value)?;
    let decoded = urlencoding::decode(value)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| value.to_string());
    Some(decoded.parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn reads_lang_from_the_query_string() {
        assert_eq!(requested_language("?lang=en"), Some(Ok(Lang::En)));
        assert_eq!(requested_language("?utm_source=ig&lang=pt-BR"), Some(Ok(Lang::Pt)));
        assert_eq!(requested_language("lang=pt%2Dbr"), Some(Ok(Lang::Pt)));
    }

    #[test]
    fn missing_lang_is_none() {
        assert_eq!(requested_language(""), None);
        assert_eq!(requested_language("?"), None);
        assert_eq!(requested_language("?language=en"), None);
    }

    #[test]
    fn unknown_lang_is_an_error() {
        assert_eq!(
            requested_language("?lang=de"),
            Some(Err(Error::UnknownLanguage("de".to_string())))
        );
    }
}
