//! Declarative list of the toggles the panel offers.

use crate::feature::Feature;
use serde::Serialize;
use std::collections::BTreeSet;

/// One toggle as the panel presents it. Icons are chosen by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub feature: Feature,
    /// Translation key for the button label.
    pub label_key: &'static str,
}

const CATALOG: [CatalogEntry; Feature::COUNT] = [
    entry(Feature::BigCursor, "features.bigCursor"),
    entry(Feature::ReadingMask, "features.readingMask"),
    entry(Feature::HighlightLink, "features.highlightLink"),
    entry(Feature::HideImage, "features.hideImage"),
    entry(Feature::IncreasedLetterSpace, "features.increasedLetterSpace"),
    entry(Feature::IncreasedLineHeight, "features.increasedLineHeight"),
    entry(Feature::DarkContrast, "features.darkContrast"),
    entry(Feature::LightContrast, "features.lightContrast"),
    entry(Feature::InvertColor, "features.invertColor"),
    entry(Feature::LeftAlign, "features.leftAlign"),
    entry(Feature::RightAlign, "features.rightAlign"),
    entry(Feature::LowSaturation, "features.lowSaturation"),
    entry(Feature::HighSaturation, "features.highSaturation"),
    entry(Feature::Desaturation, "features.desaturation"),
    entry(Feature::Magnify, "features.magnify"),
    entry(Feature::PageStructure, "features.pageStructure"),
];

const fn entry(feature: Feature, label_key: &'static str) -> CatalogEntry {
    CatalogEntry { feature, label_key }
}

/// Every toggle, in panel order.
#[must_use]
pub const fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Toggles left after removing the host's exclusions.
#[must_use]
pub fn offered(excluded: &BTreeSet<Feature>) -> Vec<CatalogEntry> {
    CATALOG
        .iter()
        .filter(|e| !excluded.contains(&e.feature))
        .copied()
        .collect()
}
