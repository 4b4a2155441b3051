use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Groups whose members may not be active at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionGroup {
    /// Reading mask plus every contrast and saturation filter.
    Visual,
    /// Horizontal text alignment.
    Alignment,
}

/// Every accessibility switch the toolbar knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    BigCursor,
    ReadingMask,
    HighlightLink,
    HideImage,
    IncreasedLetterSpace,
    IncreasedLineHeight,
    DarkContrast,
    LightContrast,
    InvertColor,
    LeftAlign,
    RightAlign,
    LowSaturation,
    HighSaturation,
    Desaturation,
    Magnify,
    PageStructure,
}

impl Feature {
    pub const COUNT: usize = 16;

    /// All features in panel order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::BigCursor,
        Self::ReadingMask,
        Self::HighlightLink,
        Self::HideImage,
        Self::IncreasedLetterSpace,
        Self::IncreasedLineHeight,
        Self::DarkContrast,
        Self::LightContrast,
        Self::InvertColor,
        Self::LeftAlign,
        Self::RightAlign,
        Self::LowSaturation,
        Self::HighSaturation,
        Self::Desaturation,
        Self::Magnify,
        Self::PageStructure,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BigCursor => "bigCursor",
            Self::ReadingMask => "readingMask",
            Self::HighlightLink => "highlightLink",
            Self::HideImage => "hideImage",
            Self::IncreasedLetterSpace => "increasedLetterSpace",
            Self::IncreasedLineHeight => "increasedLineHeight",
            Self::DarkContrast => "darkContrast",
            Self::LightContrast => "lightContrast",
            Self::InvertColor => "invertColor",
            Self::LeftAlign => "leftAlign",
            Self::RightAlign => "rightAlign",
            Self::LowSaturation => "lowSaturation",
            Self::HighSaturation => "highSaturation",
            Self::Desaturation => "desaturation",
            Self::Magnify => "magnify",
            Self::PageStructure => "pageStructure",
        }
    }

    /// Position inside [`Feature::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Storage key, or `None` for flags that only live for the page view.
    #[must_use]
    pub const fn storage_key(self) -> Option<&'static str> {
        match self {
            Self::PageStructure => None,
            other => Some(other.as_str()),
        }
    }

    #[must_use]
    pub const fn exclusion_group(self) -> Option<ExclusionGroup> {
        match self {
            Self::ReadingMask
            | Self::DarkContrast
            | Self::LightContrast
            | Self::InvertColor
            | Self::LowSaturation
            | Self::HighSaturation
            | Self::Desaturation => Some(ExclusionGroup::Visual),
            Self::LeftAlign | Self::RightAlign => Some(ExclusionGroup::Alignment),
            _ => None,
        }
    }

    /// Class added to the content wrapper while the flag is on.
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::BigCursor => Some("cursor"),
            Self::HighlightLink => Some("highlight-link"),
            Self::HideImage => Some("hide-image"),
            Self::IncreasedLetterSpace => Some("increased-letter-space"),
            Self::IncreasedLineHeight => Some("increased-line-height"),
            Self::LeftAlign => Some("left-align"),
            Self::RightAlign => Some("right-align"),
            Self::LowSaturation => Some("low-saturation"),
            Self::HighSaturation => Some("high-saturation"),
            Self::Desaturation => Some("desaturate"),
            _ => None,
        }
    }

    /// Class added to `<body>` while the flag is on. Only the page-wide color
    /// modes have one.
    #[must_use]
    pub const fn body_class(self) -> Option<&'static str> {
        match self {
            Self::DarkContrast => Some("dark-contrast"),
            Self::LightContrast => Some("light-contrast"),
            Self::InvertColor => Some("invert-color"),
            _ => None,
        }
    }

    /// Other members of this feature's exclusion group.
    pub fn rivals(self) -> impl Iterator<Item = Self> {
        let group = self.exclusion_group();
        Self::ALL
            .into_iter()
            .filter(move |other| {
                *other != self && group.is_some() && other.exclusion_group() == group
            })
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.as_str() == s)
            .ok_or(())
    }
}
