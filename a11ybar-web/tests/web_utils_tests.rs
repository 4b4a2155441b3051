use a11ybar_core::{Controller, Feature, FlagStore, PageStyle, WidgetConfig};
use a11ybar_web::i18n;
use a11ybar_web::input::is_panel_shortcut;
use a11ybar_web::page_style::DocumentStyle;
use a11ybar_web::storage::{LocalFlagStore, WebStorageError};
use a11ybar_web::theme::skin;
use std::collections::BTreeMap;

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn dom_helpers_handle_missing_window() {
    assert!(a11ybar_web::dom::window().is_none());
    assert!(a11ybar_web::dom::document().is_none());
    assert!(a11ybar_web::dom::body().is_none());
    assert!(a11ybar_web::structure::snapshot().is_empty());
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn controller_survives_without_browser_storage() {
    let mut controller = Controller::new(LocalFlagStore, DocumentStyle, &WidgetConfig::default());
    controller.initialize();
    assert!(!controller.reset_enabled());

    assert!(controller.toggle(Feature::DarkContrast));
    assert!(controller.toggle(Feature::InvertColor));
    assert!(!controller.is_on(Feature::DarkContrast));
    assert!(controller.is_on(Feature::InvertColor));
    assert!(controller.reset());
    assert!(!controller.flags().any());

    assert!(matches!(
        LocalFlagStore.clear("invertColor"),
        Err(WebStorageError::Unavailable(_))
    ));
    DocumentStyle.add_class("dark-contrast");
}

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert!(!i18n::is_rtl());

    let mut vars = BTreeMap::new();
    vars.insert("feature", "Big cursor");
    assert_eq!(i18n::tr("status.on", Some(&vars)), "Big cursor on");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    i18n::set_lang("de");
    assert_eq!(i18n::t("features.bigCursor"), "Großer Mauszeiger");
    i18n::set_lang("en");
}

#[test]
fn shortcut_and_skins_are_exposed() {
    assert!(is_panel_shortcut("u", true, false, false));
    assert_ne!(skin(a11ybar_core::Theme::Mui).root, skin(a11ybar_core::Theme::Bootstrap).root);
}
