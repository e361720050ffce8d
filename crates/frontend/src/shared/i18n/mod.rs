//! Localization of UI strings.
//!
//! Keys are dotted paths into nested JSON dictionaries, e.g.
//! `PROJECT.NAME_ALREADY_EXISTS`. Lookup falls back to en-US and then to the
//! key itself so a missing translation never blanks the UI.

use leptos::prelude::*;
use once_cell::sync::Lazy;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    EnUs,
    RuRu,
}

impl Locale {
    /// Pick a locale from a BCP 47 tag such as `navigator.language`.
    pub fn from_language_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("ru") {
            Locale::RuRu
        } else {
            Locale::EnUs
        }
    }

    fn dictionary(&self) -> &'static Value {
        match self {
            Locale::EnUs => &*EN_US,
            Locale::RuRu => &*RU_RU,
        }
    }
}

fn parse_dictionary(locale: &str, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::error!("i18n: dictionary {} is not valid JSON: {}", locale, e);
        Value::Null
    })
}

static EN_US: Lazy<Value> = Lazy::new(|| parse_dictionary("en-us", include_str!("lang/en-us.json")));
static RU_RU: Lazy<Value> = Lazy::new(|| parse_dictionary("ru-ru", include_str!("lang/ru-ru.json")));

fn lookup<'a>(dictionary: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(dictionary, |node, segment| node.get(segment))
        .and_then(Value::as_str)
}

pub fn translate(locale: Locale, key: &str) -> String {
    lookup(locale.dictionary(), key)
        .or_else(|| lookup(Locale::EnUs.dictionary(), key))
        .map(str::to_string)
        .unwrap_or_else(|| {
            log::warn!("i18n: missing key {}", key);
            key.to_string()
        })
}

/// Application-wide translation service, provided via context.
#[derive(Clone, Copy)]
pub struct I18nService {
    locale: RwSignal<Locale>,
}

impl I18nService {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: RwSignal::new(locale),
        }
    }

    /// Use the browser language, defaulting to en-US.
    pub fn detect() -> Self {
        let tag = web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_default();
        Self::new(Locale::from_language_tag(&tag))
    }

    /// Reactive lookup: re-runs when the locale changes.
    pub fn t(&self, key: &str) -> String {
        translate(self.locale.get(), key)
    }

    pub fn t_untracked(&self, key: &str) -> String {
        translate(self.locale.get_untracked(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(prefix: &str, node: &Value, out: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (k, v) in map {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_keys(&key, v, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn test_resolves_nested_keys() {
        assert_eq!(
            translate(Locale::EnUs, "PROJECT.NAME_ALREADY_EXISTS"),
            "Project name already exists."
        );
        assert_eq!(translate(Locale::RuRu, "BUTTON.CANCEL"), "Отмена");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(translate(Locale::EnUs, "PROJECT.NOPE"), "PROJECT.NOPE");
        // a branch is not a translation
        assert_eq!(translate(Locale::EnUs, "PROJECT"), "PROJECT");
    }

    #[test]
    fn test_dictionaries_have_the_same_keys() {
        let mut en = Vec::new();
        let mut ru = Vec::new();
        leaf_keys("", Locale::EnUs.dictionary(), &mut en);
        leaf_keys("", Locale::RuRu.dictionary(), &mut ru);
        assert!(!en.is_empty());
        en.sort();
        ru.sort();
        assert_eq!(en, ru);
    }

    #[test]
    fn test_locale_from_language_tag() {
        assert_eq!(Locale::from_language_tag("ru-RU"), Locale::RuRu);
        assert_eq!(Locale::from_language_tag("en-GB"), Locale::EnUs);
        assert_eq!(Locale::from_language_tag(""), Locale::EnUs);
    }
}
