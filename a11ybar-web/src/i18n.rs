use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
    LocaleMeta {
        code: "es",
        name: "Español",
        rtl: false,
    },
    LocaleMeta {
        code: "fr",
        name: "Français",
        rtl: false,
    },
    LocaleMeta {
        code: "de",
        name: "Deutsch",
        rtl: false,
    },
    LocaleMeta {
        code: "it",
        name: "Italiano",
        rtl: false,
    },
    LocaleMeta {
        code: "ar",
        name: "العربية",
        rtl: true,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("es", include_str!("../i18n/es.json")),
    ("fr", include_str!("../i18n/fr.json")),
    ("de", include_str!("../i18n/de.json")),
    ("it", include_str!("../i18n/it.json")),
    ("ar", include_str!("../i18n/ar.json")),
];

pub struct I18nBundle {
    pub lang: String,
    pub rtl: bool,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;

    serde_json::from_str(bundle).ok()
}

// Region subtags fall back to the base language: "fr-CA" -> "fr".
fn normalize(lang: &str) -> String {
    let base = lang.split(['-', '_']).next().unwrap_or(lang);
    base.to_ascii_lowercase()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let lang = normalize(lang);
    let rtl = LOCALE_META.iter().any(|m| m.code == lang && m.rtl);

    let fallback = load_translations("en")?;
    let translations = load_translations(&lang)?;

    Some(I18nBundle {
        lang,
        rtl,
        translations,
        fallback,
    })
}

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        rtl: false,
        translations: fallback.clone(),
        fallback,
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(fallback_bundle());
}

/// Set the language used for the widget's strings.
///
/// Unsupported codes fall back to English. The host page's own `lang` and
/// `dir` attributes are left alone; the panel carries its own.
pub fn set_lang(lang: &str) {
    let bundle = build_bundle(lang).unwrap_or_else(|| {
        log::debug!("unsupported locale {lang:?}, using English");
        fallback_bundle()
    });
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

/// Check if the current language uses right-to-left text direction
#[must_use]
pub fn is_rtl() -> bool {
    CURRENT.with(|c| c.borrow().rtl)
}

/// `dir` attribute value for the current language.
#[must_use]
pub fn dir() -> &'static str {
    if is_rtl() { "rtl" } else { "ltr" }
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let keys: Vec<&str> = key.split('.').collect();
    let mut current = obj;

    for k in keys {
        match current.get(k) {
            Some(value) => current = value,
            None => return None,
        }
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}"); // {{var}}
            let ph2 = format!("{{{k}}}"); // {var}
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language
///
/// Falls back to English if key is not found in current language, and to the
/// key itself if English lacks it too.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
