use crate::feature::Feature;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current value of every [`Feature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FlagSet {
    values: [bool; Feature::COUNT],
}

impl FlagSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [false; Feature::COUNT],
        }
    }

    #[must_use]
    pub const fn get(&self, feature: Feature) -> bool {
        self.values[feature.index()]
    }

    pub const fn set(&mut self, feature: Feature, value: bool) {
        self.values[feature.index()] = value;
    }

    /// True when at least one flag is on. Drives the reset button.
    #[must_use]
    pub fn any(&self) -> bool {
        self.values.iter().any(|v| *v)
    }

    /// Features currently switched on, in panel order.
    pub fn active(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.get(*f))
    }

    /// Classes for the content wrapper.
    #[must_use]
    pub fn class_list(&self) -> BTreeSet<&'static str> {
        derive_class_list(self)
    }
}

/// Content-wrapper classes implied by `flags`. Depends on nothing but the
/// flag values.
#[must_use]
pub fn derive_class_list(flags: &FlagSet) -> BTreeSet<&'static str> {
    flags.active().filter_map(Feature::css_class).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_classes() {
        let flags = FlagSet::new();
        assert!(!flags.any());
        assert!(flags.class_list().is_empty());
    }

    #[test]
    fn class_list_skips_flags_without_classes() {
        let mut flags = FlagSet::new();
        flags.set(Feature::BigCursor, true);
        flags.set(Feature::DarkContrast, true);
        flags.set(Feature::Magnify, true);
        flags.set(Feature::LeftAlign, true);
        let classes: Vec<_> = flags.class_list().into_iter().collect();
        assert_eq!(classes, vec!["cursor", "left-align"]);
    }

    #[test]
    fn active_lists_in_panel_order() {
        let mut flags = FlagSet::new();
        flags.set(Feature::PageStructure, true);
        flags.set(Feature::BigCursor, true);
        let active: Vec<_> = flags.active().collect();
        assert_eq!(active, vec![Feature::BigCursor, Feature::PageStructure]);
        assert!(flags.any());
    }
}
