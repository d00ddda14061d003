//! Translations for the site UI
//!
//! Bundles are JSON objects compiled into the binary. Keys are dot-separated
//! paths into a bundle (`site.title`). A locale without a bundle reads the
//! default one.

mod locale;

use std::sync::OnceLock;

use serde_json::Value;

use crate::store::{Subscription, Writable};

pub use locale::{Locale, DEFAULT_LOCALE, SUPPORTED_LOCALES};

const BUNDLES: [(Locale, &str); 3] = [
    (Locale::En, include_str!("locales/en.json")),
    (Locale::Ca, include_str!("locales/ca.json")),
    (Locale::Es, include_str!("locales/es.json")),
];

fn bundles() -> &'static [(Locale, Value)] {
    static PARSED: OnceLock<Vec<(Locale, Value)>> = OnceLock::new();
    PARSED.get_or_init(|| {
        BUNDLES
            .iter()
            .filter_map(|(locale, raw)| match serde_json::from_str(raw) {
                Ok(value) => Some((*locale, value)),
                Err(e) => {
                    tracing::warn!(locale = %locale, error = %e, "invalid translation bundle");
                    None
                }
            })
            .collect()
    })
}

fn bundle(locale: Locale) -> Option<&'static Value> {
    let find = |wanted: Locale| {
        bundles()
            .iter()
            .find(|(locale, _)| *locale == wanted)
            .map(|(_, value)| value)
    };
    find(locale).or_else(|| find(DEFAULT_LOCALE))
}

/// Look `key` up in the bundle for `locale`.
///
/// Returns `[MISSING: key]` when the path does not exist and
/// `[INVALID: key]` when it ends on something other than a string.
pub fn translate(locale: Locale, key: &str) -> String {
    let mut value = match bundle(locale) {
        Some(value) => value,
        None => return format!("[MISSING: {key}]"),
    };

    for part in key.split('.') {
        match value.get(part) {
            Some(next) if value.is_object() => value = next,
            _ => return format!("[MISSING: {key}]"),
        }
    }

    match value.as_str() {
        Some(text) => text.to_string(),
        None => format!("[INVALID: {key}]"),
    }
}

/// Current locale plus lookups against it
#[derive(Debug, Clone)]
pub struct I18n {
    locale: Writable<Locale>,
}

impl Default for I18n {
    fn default() -> Self {
        I18n::new(DEFAULT_LOCALE)
    }
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        I18n {
            locale: Writable::new(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        tracing::debug!(locale = %locale, "locale changed");
        self.locale.set(locale);
    }

    /// Follow locale changes; the listener sees the current locale first
    pub fn subscribe(&self, listener: impl FnMut(&Locale) + 'static) -> Subscription {
        self.locale.subscribe(listener)
    }

    pub fn translate(&self, key: &str) -> String {
        translate(self.locale(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_bundles_parse() {
        assert_eq!(bundles().len(), BUNDLES.len());
    }

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Locale::En, "site.title"), "Arktos");
        assert_eq!(translate(Locale::Ca, "menu.title"), "Menú");
        assert_eq!(translate(Locale::Es, "socials.title"), "Síguenos");
    }

    #[test]
    fn test_translate_missing_key() {
        assert_eq!(translate(Locale::En, "site.nope"), "[MISSING: site.nope]");
        assert_eq!(translate(Locale::En, "site.title.deeper"), "[MISSING: site.title.deeper]");
        assert_eq!(translate(Locale::En, ""), "[MISSING: ]");
    }

    #[test]
    fn test_translate_non_string_leaf() {
        assert_eq!(translate(Locale::En, "site"), "[INVALID: site]");
    }

    #[test]
    fn test_debug_locale_falls_back_to_default_bundle() {
        assert_eq!(translate(Locale::Qq, "menu.title"), translate(DEFAULT_LOCALE, "menu.title"));
    }

    #[test]
    fn test_i18n_follows_locale() {
        let i18n = I18n::default();
        assert_eq!(i18n.locale(), Locale::En);
        assert_eq!(i18n.translate("blog.published"), "Published");

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = i18n.subscribe(move |locale| sink.borrow_mut().push(*locale));

        i18n.set_locale(Locale::Es);
        assert_eq!(i18n.translate("blog.published"), "Publicado");
        subscription.unsubscribe();

        assert_eq!(*seen.borrow(), vec![Locale::En, Locale::Es]);
    }

    #[test]
    fn test_unknown_locale_leaves_current() {
        let i18n = I18n::new(Locale::Ca);
        let result = "fr".parse::<Locale>().map(|locale| i18n.set_locale(locale));

        assert!(result.is_err());
        assert_eq!(i18n.locale(), Locale::Ca);
    }
}
