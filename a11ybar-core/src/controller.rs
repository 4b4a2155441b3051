//! The toggle state machine.
//!
//! [`Controller`] owns the authoritative [`FlagSet`], keeps at most one flag on
//! per [`ExclusionGroup`](crate::feature::ExclusionGroup), mirrors persistable
//! flags into a [`FlagStore`] and pushes the page-wide side effects through a
//! [`PageStyle`]. Storage failures are logged and otherwise ignored: the
//! in-memory flags stay authoritative.

use crate::config::WidgetConfig;
use crate::feature::Feature;
use crate::flags::FlagSet;
use crate::store::FlagStore;
use crate::style::{FONT_SIZE_PROPERTY, PageStyle};
use std::collections::BTreeSet;

pub struct Controller<S, P>
where
    S: FlagStore,
    P: PageStyle,
{
    flags: FlagSet,
    excluded: BTreeSet<Feature>,
    magnified_font_size: String,
    store: S,
    style: P,
}

impl<S, P> Controller<S, P>
where
    S: FlagStore,
    P: PageStyle,
{
    /// Create a controller with every flag off. Call
    /// [`Controller::initialize`] to load the persisted state.
    pub fn new(store: S, style: P, config: &WidgetConfig) -> Self {
        Self {
            flags: FlagSet::new(),
            excluded: config.excluded(),
            magnified_font_size: config.magnified_font_size(),
            store,
            style,
        }
    }

    /// Load every persistable flag from the store and apply the page-wide
    /// styles of the flags that come back on.
    ///
    /// Excluded features stay off and their keys are not read. If the store
    /// cannot be read, every flag starts off. When the store holds several
    /// members of one exclusion group, the first in [`Feature::ALL`] order
    /// wins and the others are cleared from the store.
    pub fn initialize(&mut self) {
        self.flags = FlagSet::new();
        for feature in Feature::ALL {
            if self.excluded.contains(&feature) {
                continue;
            }
            let Some(key) = feature.storage_key() else {
                continue;
            };
            match self.store.contains(key) {
                Ok(present) => self.flags.set(feature, present),
                Err(err) => {
                    log::warn!("flag storage unavailable, starting with defaults: {err}");
                    self.flags = FlagSet::new();
                    return;
                }
            }
        }
        self.drop_conflicting_flags();
        for feature in Feature::ALL {
            if self.flags.get(feature) {
                self.apply_page_effect(feature);
            }
        }
        log::debug!(
            "restored flags: {:?}",
            self.flags.active().collect::<Vec<_>>()
        );
    }

    #[must_use]
    pub const fn flags(&self) -> FlagSet {
        self.flags
    }

    #[must_use]
    pub const fn is_on(&self, feature: Feature) -> bool {
        self.flags.get(feature)
    }

    /// Whether the host left `feature` available.
    #[must_use]
    pub fn is_offered(&self, feature: Feature) -> bool {
        !self.excluded.contains(&feature)
    }

    #[must_use]
    pub const fn excluded(&self) -> &BTreeSet<Feature> {
        &self.excluded
    }

    /// Flip `feature`. Switching a grouped flag on switches every other member
    /// of its group off and deletes their keys.
    ///
    /// Returns `false` without touching anything when the host excluded the
    /// feature.
    pub fn toggle(&mut self, feature: Feature) -> bool {
        if !self.is_offered(feature) {
            log::debug!("ignoring toggle of excluded feature {feature}");
            return false;
        }
        let next = !self.flags.get(feature);
        if next {
            for rival in feature.rivals() {
                if !self.is_offered(rival) {
                    continue;
                }
                let was_on = self.flags.get(rival);
                self.flags.set(rival, false);
                self.persist(rival, false);
                if was_on {
                    self.apply_page_effect(rival);
                }
            }
        }
        self.flags.set(feature, next);
        self.persist(feature, next);
        self.apply_page_effect(feature);
        log::debug!("{feature} -> {next}");
        true
    }

    /// [`Controller::toggle`] by stable name. Unknown names are a no-op.
    pub fn toggle_named(&mut self, name: &str) -> bool {
        match name.parse::<Feature>() {
            Ok(feature) => self.toggle(feature),
            Err(()) => {
                log::debug!("ignoring toggle of unknown feature {name:?}");
                false
            }
        }
    }

    /// Reset is offered only while some flag is on.
    #[must_use]
    pub fn reset_enabled(&self) -> bool {
        self.flags.any()
    }

    /// Switch everything off, close the page-structure panel and delete every
    /// persisted key. Does nothing while [`Controller::reset_enabled`] is
    /// false.
    pub fn reset(&mut self) -> bool {
        if !self.reset_enabled() {
            return false;
        }
        for feature in Feature::ALL {
            let was_on = self.flags.get(feature);
            self.flags.set(feature, false);
            self.persist(feature, false);
            if was_on {
                self.apply_page_effect(feature);
            }
        }
        log::debug!("all flags reset");
        true
    }

    /// Classes for the content wrapper.
    #[must_use]
    pub fn class_list(&self) -> BTreeSet<&'static str> {
        self.flags.class_list()
    }

    /// Pointer position only matters while the reading mask is shown.
    #[must_use]
    pub const fn tracks_pointer(&self) -> bool {
        self.flags.get(Feature::ReadingMask)
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn style(&self) -> &P {
        &self.style
    }

    // Stored keys can come from another tab or an older grouping.
    fn drop_conflicting_flags(&mut self) {
        for feature in Feature::ALL {
            if !self.flags.get(feature) {
                continue;
            }
            for rival in feature.rivals() {
                if self.flags.get(rival) {
                    log::debug!("{rival} conflicts with restored {feature}, switching it off");
                    self.flags.set(rival, false);
                    self.persist(rival, false);
                }
            }
        }
    }

    fn persist(&self, feature: Feature, on: bool) {
        let Some(key) = feature.storage_key() else {
            return;
        };
        let result = if on {
            self.store.mark(key)
        } else {
            self.store.clear(key)
        };
        if let Err(err) = result {
            log::warn!("could not persist {key}: {err}");
        }
    }

    fn apply_page_effect(&self, feature: Feature) {
        let on = self.flags.get(feature);
        if let Some(class) = feature.body_class() {
            if on {
                self.style.add_class(class);
            } else {
                self.style.remove_class(class);
            }
        }
        if feature == Feature::Magnify {
            if on {
                self.style
                    .set_property(FONT_SIZE_PROPERTY, &self.magnified_font_size);
            } else {
                self.style.remove_property(FONT_SIZE_PROPERTY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::style::RecordedStyle;

    fn controller() -> Controller<MemoryStore, RecordedStyle> {
        let mut ctl = Controller::new(
            MemoryStore::new(),
            RecordedStyle::new(),
            &WidgetConfig::default(),
        );
        ctl.initialize();
        ctl
    }

    #[test]
    fn contrast_modes_replace_each_other() {
        let mut ctl = controller();
        assert!(ctl.toggle(Feature::DarkContrast));
        assert!(ctl.is_on(Feature::DarkContrast));
        for rival in Feature::DarkContrast.rivals() {
            assert!(!ctl.is_on(rival));
        }
        assert!(ctl.style().has_class("dark-contrast"));

        ctl.toggle(Feature::LightContrast);
        assert!(ctl.is_on(Feature::LightContrast));
        assert!(!ctl.is_on(Feature::DarkContrast));
        assert!(!ctl.style().has_class("dark-contrast"));
        assert!(ctl.style().has_class("light-contrast"));
        assert!(!ctl.store().keys().contains("darkContrast"));
        assert!(ctl.store().keys().contains("lightContrast"));
    }

    #[test]
    fn reading_mask_clears_color_modes() {
        let mut ctl = controller();
        ctl.toggle(Feature::InvertColor);
        ctl.toggle(Feature::ReadingMask);
        assert!(ctl.tracks_pointer());
        assert!(!ctl.is_on(Feature::InvertColor));
        assert!(!ctl.style().has_class("invert-color"));
    }

    #[test]
    fn switching_off_leaves_rivals_alone() {
        let mut ctl = controller();
        ctl.toggle(Feature::LeftAlign);
        ctl.toggle(Feature::LeftAlign);
        assert!(!ctl.is_on(Feature::LeftAlign));
        assert!(!ctl.is_on(Feature::RightAlign));
        assert!(ctl.store().keys().is_empty());
    }

    #[test]
    fn magnifier_drives_root_font_size() {
        let cfg = WidgetConfig {
            max_font_size: 32,
            ..WidgetConfig::default()
        };
        let mut ctl = Controller::new(MemoryStore::new(), RecordedStyle::new(), &cfg);
        ctl.initialize();
        ctl.toggle(Feature::Magnify);
        assert_eq!(ctl.style().property("font-size").as_deref(), Some("32px"));
        ctl.toggle(Feature::Magnify);
        assert_eq!(ctl.style().property("font-size"), None);
    }

    #[test]
    fn magnifier_and_alignment_do_not_touch_contrast() {
        let mut ctl = controller();
        ctl.toggle(Feature::DarkContrast);
        ctl.toggle(Feature::Magnify);
        ctl.toggle(Feature::RightAlign);
        assert!(ctl.is_on(Feature::DarkContrast));
        assert!(ctl.is_on(Feature::Magnify));
        assert!(ctl.is_on(Feature::RightAlign));
    }

    #[test]
    fn unknown_names_are_ignored() {
        let mut ctl = controller();
        assert!(!ctl.toggle_named("rainbowMode"));
        assert_eq!(ctl.flags(), FlagSet::new());
        assert!(ctl.toggle_named("hideImage"));
        assert!(ctl.is_on(Feature::HideImage));
    }

    #[test]
    fn excluded_features_cannot_be_toggled() {
        let cfg = WidgetConfig {
            excluded_features: vec!["magnify".into()],
            ..WidgetConfig::default()
        };
        let store = MemoryStore::new();
        store.mark("magnify").unwrap();
        let mut ctl = Controller::new(&store, RecordedStyle::new(), &cfg);
        ctl.initialize();
        assert!(!ctl.is_on(Feature::Magnify));
        assert!(!ctl.toggle(Feature::Magnify));
        assert!(!ctl.is_on(Feature::Magnify));
        assert!(store.keys().contains("magnify"));
        assert_eq!(ctl.style().property("font-size"), None);
    }

    #[test]
    fn excluded_rivals_keep_their_keys() {
        let cfg = WidgetConfig {
            excluded_features: vec!["invertColor".into()],
            ..WidgetConfig::default()
        };
        let store = MemoryStore::new();
        store.mark("invertColor").unwrap();
        let mut ctl = Controller::new(&store, RecordedStyle::new(), &cfg);
        ctl.initialize();
        ctl.toggle(Feature::DarkContrast);
        assert!(store.keys().contains("invertColor"));
    }

    #[test]
    fn reset_is_a_no_op_when_nothing_is_on() {
        let mut ctl = controller();
        assert!(!ctl.reset_enabled());
        assert!(!ctl.reset());
        ctl.toggle(Feature::PageStructure);
        assert!(ctl.reset_enabled());
        assert!(ctl.reset());
        assert!(!ctl.is_on(Feature::PageStructure));
        assert!(!ctl.reset_enabled());
    }

    #[test]
    fn reset_clears_page_styles() {
        let mut ctl = controller();
        ctl.toggle(Feature::DarkContrast);
        ctl.toggle(Feature::Magnify);
        ctl.reset();
        assert!(ctl.style().classes().is_empty());
        assert_eq!(ctl.style().property("font-size"), None);
        assert!(ctl.store().keys().is_empty());
    }

    #[test]
    fn initialize_restores_body_classes() {
        let store = MemoryStore::new();
        store.mark("lightContrast").unwrap();
        store.mark("hideImage").unwrap();
        let mut ctl = Controller::new(&store, RecordedStyle::new(), &WidgetConfig::default());
        ctl.initialize();
        assert!(ctl.is_on(Feature::LightContrast));
        assert!(ctl.is_on(Feature::HideImage));
        assert!(ctl.style().has_class("light-contrast"));
        assert_eq!(
            ctl.class_list().into_iter().collect::<Vec<_>>(),
            vec!["hide-image"]
        );
    }

    #[test]
    fn disabled_storage_falls_back_to_memory() {
        let store = MemoryStore::new();
        store.mark("bigCursor").unwrap();
        store.set_disabled(true);
        let mut ctl = Controller::new(&store, RecordedStyle::new(), &WidgetConfig::default());
        ctl.initialize();
        assert!(!ctl.is_on(Feature::BigCursor));
        assert!(ctl.toggle(Feature::HighlightLink));
        assert!(ctl.is_on(Feature::HighlightLink));
        assert!(ctl.class_list().contains("highlight-link"));
    }
}
